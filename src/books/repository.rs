pub mod memory_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;


#[async_trait]
pub trait BookRepository: Repository<BookEntity> {
    async fn find_by_isbn(&self, isbn: &str) -> LibraryResult<Vec<BookEntity>>;

    // case-sensitive substring match on the title
    async fn find_by_title(&self, query: &str) -> LibraryResult<Vec<BookEntity>>;

    // case-sensitive substring match on the author
    async fn find_by_author(&self, query: &str) -> LibraryResult<Vec<BookEntity>>;

    // removes the first book with the given isbn
    async fn remove_first(&self, isbn: &str) -> LibraryResult<Option<BookEntity>>;

    async fn find_first_by_isbn(&self, isbn: &str) -> LibraryResult<Option<BookEntity>>;
}
