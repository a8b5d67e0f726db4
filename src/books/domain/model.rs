use chrono::{NaiveDateTime, Utc};
use uuid::Uuid;
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::utils::date::serializer;

// BookEntity abstracts a catalog entry, the isbn is the lookup key and each isbn
// stands for a single copy.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct BookEntity {
    pub book_id: String,
    pub title: String,
    pub author: String,
    pub isbn: String,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl BookEntity {
    pub fn new(title: &str, author: &str, isbn: &str) -> Self {
        Self::builder().title(title).author(author).isbn(isbn).build()
    }

    pub fn builder() -> BookEntityBuilder {
        BookEntityBuilder::default()
    }
}

// BookEntityBuilder fills in the id and creation time, unset fields stay empty.
#[derive(Debug, Default)]
pub struct BookEntityBuilder {
    title: String,
    author: String,
    isbn: String,
}

impl BookEntityBuilder {
    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn author(mut self, author: &str) -> Self {
        self.author = author.to_string();
        self
    }

    pub fn isbn(mut self, isbn: &str) -> Self {
        self.isbn = isbn.to_string();
        self
    }

    pub fn build(self) -> BookEntity {
        BookEntity {
            book_id: Uuid::new_v4().to_string(),
            title: self.title,
            author: self.author,
            isbn: self.isbn,
            created_at: Utc::now().naive_utc(),
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}

impl Book for BookEntity {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn author(&self) -> &str {
        self.author.as_str()
    }

    fn isbn(&self) -> &str {
        self.isbn.as_str()
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::Book;
    use crate::books::domain::model::BookEntity;
    use crate::core::domain::Identifiable;

    #[tokio::test]
    async fn test_should_build_books() {
        let book = BookEntity::new("title", "author", "isbn");
        assert_eq!("title", book.title());
        assert_eq!("author", book.author());
        assert_eq!("isbn", book.id().as_str());
        assert_ne!(book.book_id, BookEntity::new("title", "author", "isbn").book_id);
    }

    #[tokio::test]
    async fn test_should_build_with_builder() {
        let book = BookEntity::builder().isbn("987654321").title("1984").build();
        assert_eq!("1984", book.title.as_str());
        assert_eq!("", book.author.as_str());
        assert_eq!("987654321", book.isbn.as_str());
        assert!(!book.book_id.is_empty());
    }
}
