use crate::core::domain::Identifiable;

pub mod model;

pub trait Loan: Identifiable {
    fn isbn(&self) -> &str;
    fn user_id(&self) -> &str;
    fn is_for(&self, isbn: &str, user_id: &str) -> bool {
        self.isbn() == isbn && self.user_id() == user_id
    }
}
