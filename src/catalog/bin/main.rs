use std::error::Error;
use tracing::info;
use library_catalog::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use library_catalog::catalog::command::loan_book_cmd::{LoanBookCommand, LoanBookCommandRequest};
use library_catalog::catalog::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
use library_catalog::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest, SearchField};
use library_catalog::catalog::factory::create_library_manager;
use library_catalog::core::command::Command;
use library_catalog::core::domain::Configuration;
use library_catalog::gateway::GatewayPublisherVia;
use library_catalog::utils::trace::setup_tracing;

const DEV_MODE: bool = true;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_tracing(!DEV_MODE);

    let config = if DEV_MODE {
        Configuration::new("dev")
    } else {
        Configuration::new("prod").with_strict(true)
    };
    let library = create_library_manager(&config, GatewayPublisherVia::Logs);

    let add_cmd = AddBookCommand::new(library.clone());
    for (title, author, isbn) in [
        ("El Gran Gatsby", "F. Scott Fitzgerald", "123456789"),
        ("1984", "George Orwell", "987654321"),
    ] {
        add_cmd.execute(AddBookCommandRequest::new(title, author, isbn)).await.map_err(|e| format!("{:?}", e))?;
    }

    LoanBookCommand::new(library.clone())
        .execute(LoanBookCommandRequest::new("123456789", "user01")).await.map_err(|e| format!("{:?}", e))?;

    let search_cmd = SearchBooksCommand::new(library.clone());
    for (field, query) in [
        (SearchField::Title, "Gatsby"),
        (SearchField::Author, "F. Scott Fitzgerald"),
        (SearchField::Isbn, "123456789"),
    ] {
        let res = search_cmd.execute(SearchBooksCommandRequest::new(field, query)).await
            .map_err(|e| format!("{:?}", e))?;
        info!("search by {:?} {}: {}", field, query, serde_json::to_string(&res.books)?);
    }

    ReturnBookCommand::new(library)
        .execute(ReturnBookCommandRequest::new("123456789", "user01")).await.map_err(|e| format!("{:?}", e))?;
    Ok(())
}
