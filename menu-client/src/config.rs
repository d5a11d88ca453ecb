//! Client configuration

/// When the admin view re-fetches the menu after a mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefreshPolicy {
    /// Refresh and reset the draft only after a successful call; a failed
    /// call keeps the draft so the input is not lost
    #[default]
    OnSuccess,
    /// Refresh and reset after every call, whatever its outcome
    Always,
}

/// Client configuration for connecting to the menu server
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:4000")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Refresh behaviour after create / update / delete
    pub refresh_policy: RefreshPolicy,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
            refresh_policy: RefreshPolicy::OnSuccess,
        }
    }

    /// Read `MENU_API_URL`, `MENU_API_TIMEOUT` and `MENU_REFRESH_POLICY`
    /// (`always` | `on-success`), falling back to defaults
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("MENU_API_URL")
            && !url.trim().is_empty()
        {
            config.base_url = url;
        }
        if let Some(timeout) = std::env::var("MENU_API_TIMEOUT")
            .ok()
            .and_then(|t| t.parse().ok())
        {
            config.timeout = timeout;
        }
        if let Ok(policy) = std::env::var("MENU_REFRESH_POLICY")
            && policy.trim().eq_ignore_ascii_case("always")
        {
            config.refresh_policy = RefreshPolicy::Always;
        }
        config
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the refresh policy
    pub fn with_refresh_policy(mut self, policy: RefreshPolicy) -> Self {
        self.refresh_policy = policy;
        self
    }

    /// Create a network HTTP client from this configuration
    pub fn build_http_client(&self) -> crate::ClientResult<crate::NetworkHttpClient> {
        crate::NetworkHttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:4000")
    }
}
