use std::sync::RwLock;
use async_trait::async_trait;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;
use crate::loans::domain::Loan;
use crate::loans::domain::model::LoanEntity;
use crate::loans::repository::LoanRepository;

#[derive(Debug, Default)]
pub struct MemoryLoanRepository {
    loans: RwLock<Vec<LoanEntity>>,
}

impl MemoryLoanRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository<LoanEntity> for MemoryLoanRepository {
    async fn create(&self, entity: &LoanEntity) -> LibraryResult<usize> {
        let mut loans = self.loans.write()?;
        loans.push(entity.clone());
        Ok(loans.len())
    }

    async fn find_all(&self) -> LibraryResult<Vec<LoanEntity>> {
        Ok(self.loans.read()?.clone())
    }
}

#[async_trait]
impl LoanRepository for MemoryLoanRepository {
    async fn find_by_user(&self, user_id: &str) -> LibraryResult<Vec<LoanEntity>> {
        let loans = self.loans.read()?;
        Ok(loans.iter().filter(|l| l.user_id == user_id).cloned().collect())
    }

    async fn remove_first(&self, isbn: &str, user_id: &str) -> LibraryResult<Option<LoanEntity>> {
        let mut loans = self.loans.write()?;
        Ok(loans.iter().position(|l| l.is_for(isbn, user_id)).map(|ndx| loans.remove(ndx)))
    }
}
