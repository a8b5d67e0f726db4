pub mod notifier;
pub mod publisher;
