//! HTTP transports
//!
//! - [`NetworkHttpClient`] - reqwest 网络通信
//! - [`OneshotHttpClient`] - 同进程 Router 调用 (需要 "in-process" feature)

pub mod http;
#[cfg(feature = "in-process")]
pub mod http_oneshot;

pub use http::{HttpClient, NetworkHttpClient};
#[cfg(feature = "in-process")]
pub use http_oneshot::OneshotHttpClient;
