use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::loans::domain::Loan;
use crate::loans::domain::model::LoanEntity;
use crate::utils::date::serializer;

// LoanDto is a data transfer object for loaned books
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanDto {
    pub loan_id: String,
    pub isbn: String,
    pub user_id: String,
    #[serde(with = "serializer")]
    pub loaned_at: NaiveDateTime,
}

impl Identifiable for LoanDto {
    fn id(&self) -> String {
        self.loan_id.to_string()
    }
}

impl Loan for LoanDto {
    fn isbn(&self) -> &str {
        self.isbn.as_str()
    }

    fn user_id(&self) -> &str {
        self.user_id.as_str()
    }
}

impl From<&LoanEntity> for LoanDto {
    fn from(other: &LoanEntity) -> LoanDto {
        LoanDto {
            loan_id: other.loan_id.to_string(),
            isbn: other.isbn.to_string(),
            user_id: other.user_id.to_string(),
            loaned_at: other.loaned_at,
        }
    }
}

impl From<&LoanDto> for LoanEntity {
    fn from(other: &LoanDto) -> LoanEntity {
        LoanEntity {
            loan_id: other.loan_id.to_string(),
            isbn: other.isbn.to_string(),
            user_id: other.user_id.to_string(),
            loaned_at: other.loaned_at,
        }
    }
}
