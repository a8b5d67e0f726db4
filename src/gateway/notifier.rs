use async_trait::async_trait;
use crate::core::library::LibraryError;

// Notifier delivers a short message to a user, transport and retries are up to the implementation.
#[async_trait]
pub trait Notifier: Sync + Send {
    async fn notify(&self, user_id: &str, message: &str) -> Result<(), LibraryError>;
}
