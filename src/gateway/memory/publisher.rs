use std::sync::{Arc, RwLock};
use async_trait::async_trait;
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::events::EventPublisher;

// MemoryPublisher records published events; clones share the same record.
#[derive(Debug, Default, Clone)]
pub struct MemoryPublisher {
    events: Arc<RwLock<Vec<DomainEvent>>>,
}

impl MemoryPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> LibraryResult<Vec<DomainEvent>> {
        Ok(self.events.read()?.clone())
    }
}

#[async_trait]
impl EventPublisher for MemoryPublisher {
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        self.events.write()?.push(event.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::events::DomainEvent;
    use crate::gateway::events::EventPublisher;
    use crate::gateway::memory::publisher::MemoryPublisher;

    #[tokio::test]
    async fn test_should_record_events() {
        let publisher = MemoryPublisher::new();
        let handle = publisher.clone();
        let event = DomainEvent::added("books", "books", "isbn", &HashMap::new(), &"title").expect("build event");
        let _ = publisher.publish(&event).await.expect("should publish");
        assert_eq!(vec![event], handle.events().expect("should list events"));
    }
}
