pub mod events;
pub mod factory;
pub mod logs;
pub mod memory;
pub mod notifier;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum GatewayPublisherVia {
    Logs,
    Memory,
}
