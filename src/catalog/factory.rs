use std::sync::Arc;
use crate::books::factory::create_book_repository;
use crate::catalog::domain::service::LibraryManager;
use crate::core::domain::Configuration;
use crate::gateway::events::EventPublisher;
use crate::gateway::factory::{create_notifier, create_publisher};
use crate::gateway::GatewayPublisherVia;
use crate::gateway::notifier::Notifier;
use crate::loans::factory::create_loan_repository;

pub fn create_library_manager(config: &Configuration, via: GatewayPublisherVia) -> Arc<LibraryManager> {
    create_library_manager_with(config, create_notifier(via), create_publisher(via))
}

pub fn create_library_manager_with(config: &Configuration, notifier: Box<dyn Notifier>,
                                   publisher: Box<dyn EventPublisher>) -> Arc<LibraryManager> {
    Arc::new(LibraryManager::new(config, create_book_repository(), create_loan_repository(),
                                 notifier, publisher))
}

#[cfg(test)]
mod tests {
    use crate::catalog::domain::{CatalogService, LoanManager};
    use crate::catalog::factory::create_library_manager;
    use crate::core::domain::Configuration;
    use crate::gateway::GatewayPublisherVia;

    #[tokio::test]
    async fn test_should_create_independent_managers() {
        let first = create_library_manager(&Configuration::new("test"), GatewayPublisherVia::Logs);
        let second = create_library_manager(&Configuration::new("test"), GatewayPublisherVia::Memory);
        let _ = first.add_book("1984", "George Orwell", "987654321").await.expect("should add book");
        let _ = first.loan_book("987654321", "user01").await.expect("should loan");
        assert_eq!(1, first.books().await.expect("should list").len());
        assert!(second.books().await.expect("should list").is_empty());
        assert!(second.loans().await.expect("should list").is_empty());
    }
}
