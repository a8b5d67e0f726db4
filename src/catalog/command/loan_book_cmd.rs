use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::LoanManager;
use crate::core::command::{Command, CommandError};
use crate::loans::dto::LoanDto;

pub struct LoanBookCommand {
    loan_manager: Arc<dyn LoanManager>,
}

impl LoanBookCommand {
    pub fn new(loan_manager: Arc<dyn LoanManager>) -> Self {
        Self {
            loan_manager,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoanBookCommandRequest {
    isbn: String,
    user_id: String,
}

impl LoanBookCommandRequest {
    pub fn new(isbn: &str, user_id: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
            user_id: user_id.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub struct LoanBookCommandResponse {
    pub loan: Option<LoanDto>,
}

impl LoanBookCommandResponse {
    pub fn new(loan: Option<LoanDto>) -> Self {
        Self {
            loan,
        }
    }
}

#[async_trait]
impl Command<LoanBookCommandRequest, LoanBookCommandResponse> for LoanBookCommand {
    async fn execute(&self, req: LoanBookCommandRequest) -> Result<LoanBookCommandResponse, CommandError> {
        self.loan_manager.loan_book(req.isbn.as_str(), req.user_id.as_str())
            .await.map_err(CommandError::from).map(LoanBookCommandResponse::new)
    }
}
