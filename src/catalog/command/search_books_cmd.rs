use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum SearchField {
    Title,
    Author,
    Isbn,
}

pub struct SearchBooksCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl SearchBooksCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchBooksCommandRequest {
    pub field: SearchField,
    pub query: String,
}

impl SearchBooksCommandRequest {
    pub fn new(field: SearchField, query: &str) -> Self {
        Self {
            field,
            query: query.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub struct SearchBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl SearchBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<SearchBooksCommandRequest, SearchBooksCommandResponse> for SearchBooksCommand {
    async fn execute(&self, req: SearchBooksCommandRequest) -> Result<SearchBooksCommandResponse, CommandError> {
        let query = req.query.as_str();
        let res = match req.field {
            SearchField::Title => self.catalog_service.search_by_title(query).await,
            SearchField::Author => self.catalog_service.search_by_author(query).await,
            SearchField::Isbn => self.catalog_service.search_by_isbn(query).await,
        };
        res.map_err(CommandError::from).map(SearchBooksCommandResponse::new)
    }
}
