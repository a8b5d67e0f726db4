use crate::gateway::events::EventPublisher;
use crate::gateway::GatewayPublisherVia;
use crate::gateway::logs::notifier::LogNotifier;
use crate::gateway::logs::publisher::LogPublisher;
use crate::gateway::memory::notifier::MemoryNotifier;
use crate::gateway::memory::publisher::MemoryPublisher;
use crate::gateway::notifier::Notifier;

pub fn create_publisher(via: GatewayPublisherVia) -> Box<dyn EventPublisher> {
    match via {
        GatewayPublisherVia::Logs => Box::new(LogPublisher::new()),
        GatewayPublisherVia::Memory => Box::new(MemoryPublisher::new()),
    }
}

pub fn create_notifier(via: GatewayPublisherVia) -> Box<dyn Notifier> {
    match via {
        GatewayPublisherVia::Logs => Box::new(LogNotifier::new()),
        GatewayPublisherVia::Memory => Box::new(MemoryNotifier::new()),
    }
}
