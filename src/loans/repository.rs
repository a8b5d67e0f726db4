pub mod memory_loan_repository;

use async_trait::async_trait;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;
use crate::loans::domain::model::LoanEntity;


#[async_trait]
pub trait LoanRepository: Repository<LoanEntity> {
    async fn find_by_user(&self, user_id: &str) -> LibraryResult<Vec<LoanEntity>>;

    // removes the first loan matching both isbn and user
    async fn remove_first(&self, isbn: &str, user_id: &str) -> LibraryResult<Option<LoanEntity>>;
}
