use std::sync::{Arc, RwLock};
use async_trait::async_trait;
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::notifier::Notifier;

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub user_id: String,
    pub message: String,
}

// MemoryNotifier records every delivered message in order; clones share the same record.
#[derive(Debug, Default, Clone)]
pub struct MemoryNotifier {
    sent: Arc<RwLock<Vec<Notification>>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> LibraryResult<Vec<Notification>> {
        Ok(self.sent.read()?.clone())
    }

    pub fn sent_to(&self, user_id: &str) -> LibraryResult<Vec<String>> {
        let sent = self.sent.read()?;
        Ok(sent.iter().filter(|n| n.user_id == user_id).map(|n| n.message.to_string()).collect())
    }
}

#[async_trait]
impl Notifier for MemoryNotifier {
    async fn notify(&self, user_id: &str, message: &str) -> Result<(), LibraryError> {
        self.sent.write()?.push(Notification {
            user_id: user_id.to_string(),
            message: message.to_string(),
        });
        Ok(())
    }
}
