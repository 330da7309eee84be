pub mod memory;
pub mod stores;

use crate::prelude::{AppError, Contact};
use std::fs;
use std::path::Path;

/// Key of the persisted slot holding the contact list.
pub const STORAGE_KEY: &str = "contacts";
pub const DEFAULT_JSON_PATH: &str = "./.instance/contacts.json";

pub trait Storage {
    /// `Ok(None)` means nothing has ever been persisted.
    fn load(&self) -> Result<Option<Vec<Contact>>, AppError>;

    fn save(&mut self, contacts: &[Contact]) -> Result<(), AppError>;

    fn get_medium(&self) -> &str;
}

impl Storage for Box<dyn Storage> {
    fn load(&self) -> Result<Option<Vec<Contact>>, AppError> {
        (**self).load()
    }

    fn save(&mut self, contacts: &[Contact]) -> Result<(), AppError> {
        (**self).save(contacts)
    }

    fn get_medium(&self) -> &str {
        (**self).get_medium()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMediums {
    Json,
    Mem,
}

impl StorageMediums {
    pub fn is_json(&self) -> bool {
        matches!(self, StorageMediums::Json)
    }

    pub fn is_mem(&self) -> bool {
        matches!(self, StorageMediums::Mem)
    }

    pub fn is_which(&self) -> &str {
        if self.is_json() { "json" } else { "mem" }
    }

    pub fn from(str: &str) -> Result<Self, AppError> {
        match str.to_ascii_lowercase().as_str() {
            "json" => Ok(StorageMediums::Json),
            "mem" => Ok(StorageMediums::Mem),
            _ => Err(AppError::Validation(format!(
                "'{}' is not a recognized storage medium (json, mem)",
                str
            ))),
        }
    }
}

pub fn parse_storage_type(
    medium: StorageMediums,
    path: &str,
) -> Result<Box<dyn Storage>, AppError> {
    match medium {
        StorageMediums::Json => Ok(Box::new(stores::JsonStorage::new(path)?)),
        StorageMediums::Mem => Ok(Box::new(memory::MemStorage::new())),
    }
}

pub fn create_file_parent(path: &str) -> Result<(), AppError> {
    let path = Path::new(path);

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
