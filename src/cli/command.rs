use clap::{Parser, Subcommand};

use crate::errors::AppError;
use crate::storage::DEFAULT_JSON_PATH;

#[derive(Parser, Debug)]
#[command(name = "rusty-phonebook", version, about = "Simple Phonebook")]
pub struct Cli {
    /// Storage choice (json, mem) are available
    #[arg(long, env = "PHONEBOOK_STORAGE", default_value_t = String::from("json"))]
    pub storage: String,

    /// Location of the json contacts file
    #[arg(long, env = "PHONEBOOK_PATH", default_value_t = String::from(DEFAULT_JSON_PATH))]
    pub path: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    Add {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Contact phone number
        #[arg(long)]
        number: String,
    },
    /// Delete a contact by id
    Delete {
        /// Id of the contact to delete (shown by `list`)
        #[arg(long)]
        id: String,

        /// Name shown for the contact when it was listed
        #[arg(long)]
        name: Option<String>,
    },
    /// List contacts
    List {
        /// Only show contacts whose name contains this text
        #[arg(short, long)]
        filter: Option<String>,
    },
    /// Start an interactive session
    Shell,
}

/// Actions available inside `shell`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand {
    Add,
    Delete,
    Filter,
    List,
    Exit,
}

impl ShellCommand {
    pub fn parse(input: &str) -> Result<Self, AppError> {
        match input.trim().to_lowercase().as_str() {
            "1" | "add" => Ok(ShellCommand::Add),
            "2" | "delete" => Ok(ShellCommand::Delete),
            "3" | "filter" => Ok(ShellCommand::Filter),
            "4" | "list" => Ok(ShellCommand::List),
            "5" | "exit" | "quit" => Ok(ShellCommand::Exit),
            _ => Err(AppError::ParseCommand(input.to_string())),
        }
    }
}
