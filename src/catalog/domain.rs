pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;
use crate::loans::dto::LoanDto;

#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn add_book(&self, title: &str, author: &str, isbn: &str) -> LibraryResult<BookDto>;
    async fn remove_book(&self, isbn: &str) -> LibraryResult<Option<BookDto>>;
    async fn search_by_title(&self, query: &str) -> LibraryResult<Vec<BookDto>>;
    async fn search_by_author(&self, query: &str) -> LibraryResult<Vec<BookDto>>;
    async fn search_by_isbn(&self, query: &str) -> LibraryResult<Vec<BookDto>>;
    async fn books(&self) -> LibraryResult<Vec<BookDto>>;
    async fn subscribe(&self, user_id: &str) -> LibraryResult<()>;
    async fn unsubscribe(&self, user_id: &str) -> LibraryResult<()>;
}

#[async_trait]
pub trait LoanManager: Sync + Send {
    async fn loan_book(&self, isbn: &str, user_id: &str) -> LibraryResult<Option<LoanDto>>;
    async fn return_book(&self, isbn: &str, user_id: &str) -> LibraryResult<Option<LoanDto>>;
    async fn loans(&self) -> LibraryResult<Vec<LoanDto>>;
    async fn loans_for_user(&self, user_id: &str) -> LibraryResult<Vec<LoanDto>>;
}
