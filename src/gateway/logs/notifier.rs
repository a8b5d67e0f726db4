use async_trait::async_trait;
use tracing::info;
use crate::core::library::LibraryError;
use crate::gateway::notifier::Notifier;

// LogNotifier stands in for an e-mail gateway by writing each message to the log.
#[derive(Debug, Default)]
pub struct LogNotifier {}

impl LogNotifier {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, user_id: &str, message: &str) -> Result<(), LibraryError> {
        info!(user_id, "sending email to {}: {}", user_id, message);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::gateway::logs::notifier::LogNotifier;
    use crate::gateway::notifier::Notifier;

    #[tokio::test]
    async fn test_should_notify_to_logs() {
        let _ = LogNotifier::new().notify("user01", "hello").await.expect("should notify");
    }
}
