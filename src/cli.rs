pub mod command;
pub mod run;

pub use run::run_app;

use crate::domain::Contact;
use crate::errors::AppError;
use std::io::{self, Write};

// OUTPUT FUNCTIONS
pub fn show_menu() -> Result<(), AppError> {
    println!("\n");
    println!("1. Add Contact");
    println!("2. Delete Contact");
    println!("3. Filter Contacts");
    println!("4. List Contacts");
    println!("5. Exit");
    print!("> ");
    io::stdout().flush()?;
    Ok(())
}

pub fn listing_format(i: usize, contact: &Contact) -> String {
    format!(
        "{i:>3}. {:<20} {:<15} {}",
        contact.name, contact.number, contact.id
    )
}

pub fn print_listing(contacts: &[&Contact]) {
    for (i, c) in contacts.iter().enumerate() {
        println!("{}", listing_format(i + 1, c));
    }
}

// INPUT FUNCTIONS
/// Reads one trimmed line. `None` once stdin is exhausted.
pub fn get_input() -> Result<Option<String>, AppError> {
    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

pub fn prompt(label: &str) -> Result<Option<String>, AppError> {
    println!("\n{}", label);
    print!("> ");
    io::stdout().flush()?;
    get_input()
}

/// Presence check done by the form before a contact reaches the store.
pub fn required(field: &str, value: &str) -> Result<String, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    Ok(value.to_string())
}
