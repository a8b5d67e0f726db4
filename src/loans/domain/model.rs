use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::core::domain::Identifiable;
use crate::loans::domain::Loan;
use crate::utils::date::serializer;

// LoanEntity abstracts one outstanding borrowing of a book. The isbn is a weak
// reference, the book may be removed from the catalog while the loan exists.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct LoanEntity {
    pub loan_id: String,
    pub isbn: String,
    pub user_id: String,
    #[serde(with = "serializer")]
    pub loaned_at: NaiveDateTime,
}

impl LoanEntity {
    pub fn new(isbn: &str, user_id: &str) -> Self {
        Self {
            loan_id: Uuid::new_v4().to_string(),
            isbn: isbn.to_string(),
            user_id: user_id.to_string(),
            loaned_at: Utc::now().naive_utc(),
        }
    }
}

impl Identifiable for LoanEntity {
    fn id(&self) -> String {
        self.loan_id.to_string()
    }
}

impl Loan for LoanEntity {
    fn isbn(&self) -> &str {
        self.isbn.as_str()
    }

    fn user_id(&self) -> &str {
        self.user_id.as_str()
    }
}
