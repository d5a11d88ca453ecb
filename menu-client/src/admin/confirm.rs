//! Confirmation step before destructive actions

use async_trait::async_trait;

/// Asks the user to confirm; resolves once they answer
#[async_trait]
pub trait Confirm: Send {
    async fn confirm(&mut self, message: &str) -> bool;
}

/// Fixed answer, for scripted use
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirm(pub bool);

#[async_trait]
impl Confirm for AutoConfirm {
    async fn confirm(&mut self, _message: &str) -> bool {
        self.0
    }
}

#[async_trait]
impl<F> Confirm for F
where
    F: FnMut(&str) -> bool + Send,
{
    async fn confirm(&mut self, message: &str) -> bool {
        (*self)(message)
    }
}
