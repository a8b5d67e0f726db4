use std::collections::HashMap;
use std::sync::RwLock;
use async_trait::async_trait;
use tracing::{debug, info, warn};
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::{CatalogService, LoanManager};
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::events::EventPublisher;
use crate::gateway::notifier::Notifier;
use crate::loans::domain::model::LoanEntity;
use crate::loans::dto::LoanDto;
use crate::loans::repository::LoanRepository;

// LibraryManager holds the books and the outstanding loans of one branch.
pub struct LibraryManager {
    branch_id: String,
    strict: bool,
    book_repository: Box<dyn BookRepository>,
    loan_repository: Box<dyn LoanRepository>,
    notifier: Box<dyn Notifier>,
    events_publisher: Box<dyn EventPublisher>,
    subscribers: RwLock<Vec<String>>,
}

impl LibraryManager {
    pub fn new(config: &Configuration, book_repository: Box<dyn BookRepository>,
               loan_repository: Box<dyn LoanRepository>, notifier: Box<dyn Notifier>,
               events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            strict: config.strict,
            book_repository,
            loan_repository,
            notifier,
            events_publisher,
            subscribers: RwLock::new(vec![]),
        }
    }

    fn metadata(&self) -> HashMap<String, String> {
        HashMap::from([("branch_id".to_string(), self.branch_id.to_string())])
    }

    fn missing<T>(&self, message: String) -> LibraryResult<Option<T>> {
        warn!("{}", message);
        if self.strict {
            Err(LibraryError::not_found(message.as_str()))
        } else {
            Ok(None)
        }
    }

    fn validate(&self, title: &str, isbn: &str) -> LibraryResult<()> {
        if !self.strict {
            return Ok(());
        }
        if title.is_empty() {
            return Err(LibraryError::validation("book title is empty", Some("400".to_string())));
        }
        if isbn.is_empty() {
            return Err(LibraryError::validation("book isbn is empty", Some("400".to_string())));
        }
        Ok(())
    }

    // the change is already stored, so delivery failures are logged and skipped
    async fn deliver(&self, user_id: &str, message: &str) {
        if let Err(err) = self.notifier.notify(user_id, message).await {
            warn!(user_id, "failed to notify: {}", err);
        }
    }

    async fn publish(&self, event: serde_json::Result<DomainEvent>) {
        let res = match event {
            Ok(event) => self.events_publisher.publish(&event).await,
            Err(err) => Err(LibraryError::from(err)),
        };
        if let Err(err) = res {
            warn!("failed to publish event: {}", err);
        }
    }

    async fn announce(&self, book: &BookDto) -> LibraryResult<()> {
        let subscribers = self.subscribers.read()?.clone();
        let message = new_book_message(book);
        for user_id in subscribers {
            self.deliver(user_id.as_str(), message.as_str()).await;
        }
        Ok(())
    }
}

fn loan_message(title: &str) -> String {
    format!("You have borrowed the book {}", title)
}

fn return_message(isbn: &str) -> String {
    format!("You have returned the book with ISBN {}. Thank you!", isbn)
}

fn new_book_message(book: &BookDto) -> String {
    format!("A new book is available: {} by {}", book.title, book.author)
}

fn to_books(entities: Vec<BookEntity>) -> Vec<BookDto> {
    entities.iter().map(BookDto::from).collect()
}

#[async_trait]
impl CatalogService for LibraryManager {
    async fn add_book(&self, title: &str, author: &str, isbn: &str) -> LibraryResult<BookDto> {
        self.validate(title, isbn)?;
        let entity = BookEntity::builder().title(title).author(author).isbn(isbn).build();
        let size = self.book_repository.create(&entity).await?;
        let book = BookDto::from(&entity);
        info!(isbn, size, "added book {}", title);
        self.announce(&book).await?;
        self.publish(DomainEvent::added("books", "books", isbn, &self.metadata(), &book)).await;
        Ok(book)
    }

    async fn remove_book(&self, isbn: &str) -> LibraryResult<Option<BookDto>> {
        let Some(removed) = self.book_repository.remove_first(isbn).await? else {
            return self.missing(format!("book with isbn {} not found", isbn));
        };
        let book = BookDto::from(&removed);
        info!(isbn, "removed book {}", book.title);
        self.publish(DomainEvent::deleted("books", "books", isbn, &self.metadata(), &book)).await;
        Ok(Some(book))
    }

    async fn search_by_title(&self, query: &str) -> LibraryResult<Vec<BookDto>> {
        let res = to_books(self.book_repository.find_by_title(query).await?);
        debug!(query, found = res.len(), "search by title");
        Ok(res)
    }

    async fn search_by_author(&self, query: &str) -> LibraryResult<Vec<BookDto>> {
        let res = to_books(self.book_repository.find_by_author(query).await?);
        debug!(query, found = res.len(), "search by author");
        Ok(res)
    }

    async fn search_by_isbn(&self, query: &str) -> LibraryResult<Vec<BookDto>> {
        let res = to_books(self.book_repository.find_by_isbn(query).await?);
        debug!(query, found = res.len(), "search by isbn");
        Ok(res)
    }

    async fn books(&self) -> LibraryResult<Vec<BookDto>> {
        Ok(to_books(self.book_repository.find_all().await?))
    }

    async fn subscribe(&self, user_id: &str) -> LibraryResult<()> {
        let mut subscribers = self.subscribers.write()?;
        if !subscribers.iter().any(|s| s == user_id) {
            subscribers.push(user_id.to_string());
        }
        Ok(())
    }

    async fn unsubscribe(&self, user_id: &str) -> LibraryResult<()> {
        self.subscribers.write()?.retain(|s| s != user_id);
        Ok(())
    }
}

#[async_trait]
impl LoanManager for LibraryManager {
    async fn loan_book(&self, isbn: &str, user_id: &str) -> LibraryResult<Option<LoanDto>> {
        let Some(book) = self.book_repository.find_first_by_isbn(isbn).await? else {
            return self.missing(format!("book with isbn {} not found for loan to {}", isbn, user_id));
        };
        let entity = LoanEntity::new(isbn, user_id);
        self.loan_repository.create(&entity).await?;
        let loan = LoanDto::from(&entity);
        info!(isbn, user_id, "loaned book {}", book.title);
        self.deliver(user_id, loan_message(book.title.as_str()).as_str()).await;
        self.publish(DomainEvent::loaned(
            "book_loaned", "loans", loan.loan_id.as_str(), &self.metadata(), &loan)).await;
        Ok(Some(loan))
    }

    async fn return_book(&self, isbn: &str, user_id: &str) -> LibraryResult<Option<LoanDto>> {
        let Some(removed) = self.loan_repository.remove_first(isbn, user_id).await? else {
            return self.missing(format!("loan of isbn {} by {} not found", isbn, user_id));
        };
        let loan = LoanDto::from(&removed);
        info!(isbn, user_id, "returned book");
        self.deliver(user_id, return_message(isbn).as_str()).await;
        self.publish(DomainEvent::returned(
            "book_returned", "loans", loan.loan_id.as_str(), &self.metadata(), &loan)).await;
        Ok(Some(loan))
    }

    async fn loans(&self) -> LibraryResult<Vec<LoanDto>> {
        let res = self.loan_repository.find_all().await?;
        Ok(res.iter().map(LoanDto::from).collect())
    }

    async fn loans_for_user(&self, user_id: &str) -> LibraryResult<Vec<LoanDto>> {
        let res = self.loan_repository.find_by_user(user_id).await?;
        Ok(res.iter().map(LoanDto::from).collect())
    }
}
