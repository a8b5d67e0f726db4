use std::sync::RwLock;
use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;

// MemoryBookRepository keeps books in insertion order, duplicates included.
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    books: RwLock<Vec<BookEntity>>,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn filter<F: Fn(&BookEntity) -> bool>(&self, predicate: F) -> LibraryResult<Vec<BookEntity>> {
        let books = self.books.read()?;
        Ok(books.iter().filter(|b| predicate(b)).cloned().collect())
    }
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let mut books = self.books.write()?;
        books.push(entity.clone());
        Ok(books.len())
    }

    async fn find_all(&self) -> LibraryResult<Vec<BookEntity>> {
        self.filter(|_| true)
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn find_by_isbn(&self, isbn: &str) -> LibraryResult<Vec<BookEntity>> {
        self.filter(|b| b.isbn == isbn)
    }

    async fn find_by_title(&self, query: &str) -> LibraryResult<Vec<BookEntity>> {
        self.filter(|b| b.title.contains(query))
    }

    async fn find_by_author(&self, query: &str) -> LibraryResult<Vec<BookEntity>> {
        self.filter(|b| b.author.contains(query))
    }

    async fn remove_first(&self, isbn: &str) -> LibraryResult<Option<BookEntity>> {
        let mut books = self.books.write()?;
        Ok(books.iter().position(|b| b.isbn == isbn).map(|ndx| books.remove(ndx)))
    }

    async fn find_first_by_isbn(&self, isbn: &str) -> LibraryResult<Option<BookEntity>> {
        let books = self.books.read()?;
        Ok(books.iter().find(|b| b.isbn == isbn).cloned())
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::books::repository::BookRepository;
    use crate::books::repository::memory_book_repository::MemoryBookRepository;
    use crate::core::repository::Repository;

    async fn seeded() -> MemoryBookRepository {
        let repo = MemoryBookRepository::new();
        let _ = repo.create(&BookEntity::new("El Gran Gatsby", "F. Scott Fitzgerald", "123456789")).await.expect("should create");
        let _ = repo.create(&BookEntity::new("1984", "George Orwell", "987654321")).await.expect("should create");
        let _ = repo.create(&BookEntity::new("Animal Farm", "George Orwell", "555")).await.expect("should create");
        repo
    }

    #[tokio::test]
    async fn test_should_create_in_order() {
        let repo = seeded().await;
        let size = repo.create(&BookEntity::new("1984", "George Orwell", "987654321")).await.expect("should create");
        assert_eq!(4, size);
        let titles: Vec<String> = repo.find_all().await.expect("should list").into_iter().map(|b| b.title).collect();
        assert_eq!(vec!["El Gran Gatsby", "1984", "Animal Farm", "1984"], titles);
    }

    #[tokio::test]
    async fn test_should_find_by_isbn_with_duplicates() {
        let repo = seeded().await;
        let dup = BookEntity::new("Nineteen Eighty-Four", "Orwell", "987654321");
        let _ = repo.create(&dup).await.expect("should create");
        let res = repo.find_by_isbn("987654321").await.expect("should find");
        assert_eq!(2, res.len());
        assert_eq!("1984", res[0].title.as_str());
        assert_eq!(dup, res[1]);
        assert!(repo.find_by_isbn("98765432").await.expect("should find").is_empty());
    }

    #[tokio::test]
    async fn test_should_match_substrings_case_sensitive() {
        let repo = seeded().await;
        assert_eq!(1, repo.find_by_title("Gatsby").await.expect("should find").len());
        assert!(repo.find_by_title("gatsby").await.expect("should find").is_empty());
        assert_eq!(2, repo.find_by_author("Orwell").await.expect("should find").len());
        assert_eq!(3, repo.find_by_title("").await.expect("should find").len());
    }

    #[tokio::test]
    async fn test_should_remove_first_match_only() {
        let repo = seeded().await;
        let _ = repo.create(&BookEntity::new("Copy", "George Orwell", "987654321")).await.expect("should create");
        let removed = repo.remove_first("987654321").await.expect("should remove").expect("should remove book");
        assert_eq!("1984", removed.title.as_str());
        let left = repo.find_by_isbn("987654321").await.expect("should find");
        assert_eq!(1, left.len());
        assert_eq!("Copy", left[0].title.as_str());
        assert!(repo.remove_first("000").await.expect("should remove").is_none());
        assert_eq!(3, repo.find_all().await.expect("should list").len());
    }

    #[tokio::test]
    async fn test_should_find_first_by_isbn() {
        let repo = seeded().await;
        let book = repo.find_first_by_isbn("555").await.expect("should find").expect("should exist");
        assert_eq!("Animal Farm", book.title.as_str());
        assert!(repo.find_first_by_isbn("000").await.expect("should find").is_none());
    }
}
