use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::LoanManager;
use crate::core::command::{Command, CommandError};
use crate::loans::dto::LoanDto;

pub struct ReturnBookCommand {
    loan_manager: Arc<dyn LoanManager>,
}

impl ReturnBookCommand {
    pub fn new(loan_manager: Arc<dyn LoanManager>) -> Self {
        Self {
            loan_manager,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReturnBookCommandRequest {
    isbn: String,
    user_id: String,
}

impl ReturnBookCommandRequest {
    pub fn new(isbn: &str, user_id: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
            user_id: user_id.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub struct ReturnBookCommandResponse {
    pub loan: Option<LoanDto>,
}

impl ReturnBookCommandResponse {
    pub fn new(loan: Option<LoanDto>) -> Self {
        Self {
            loan,
        }
    }
}

#[async_trait]
impl Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand {
    async fn execute(&self, req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, CommandError> {
        self.loan_manager.return_book(req.isbn.as_str(), req.user_id.as_str())
            .await.map_err(CommandError::from).map(ReturnBookCommandResponse::new)
    }
}
