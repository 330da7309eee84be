use super::*;

use std::fs::OpenOptions;
use std::io::{Read, Write};

/// The `contacts` slot backed by a JSON file.
pub struct JsonStorage {
    pub medium: String,
    pub path: String,
}

impl JsonStorage {
    pub fn new(path: &str) -> Result<Self, AppError> {
        let path = if path.is_empty() {
            DEFAULT_JSON_PATH
        } else {
            path
        };

        Ok(Self {
            medium: "json".to_string(),
            path: path.to_string(),
        })
    }

    fn tmp_path(&self) -> String {
        format!("{}.tmp", self.path)
    }
}

impl Storage for JsonStorage {
    fn load(&self) -> Result<Option<Vec<Contact>>, AppError> {
        if !fs::exists(Path::new(&self.path))? {
            log::debug!("no {} slot at {}", STORAGE_KEY, self.path);
            return Ok(None);
        }

        let mut file = OpenOptions::new().read(true).open(&self.path)?;

        let mut data = String::new();
        file.read_to_string(&mut data)?;

        // serde_json will give an error if data is empty
        if data.trim().is_empty() {
            return Ok(None);
        }

        let contacts: Vec<Contact> = serde_json::from_str(&data)?;
        log::debug!("loaded {} contacts from {}", contacts.len(), self.path);
        Ok(Some(contacts))
    }

    fn save(&mut self, contacts: &[Contact]) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        let json_contact = serde_json::to_string(&contacts)?;

        // Write beside the slot, then swap it in, so a crash never leaves a torn file.
        let tmp_path = self.tmp_path();
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&tmp_path)?;

        file.write_all(json_contact.as_bytes())?;
        file.sync_all()?;
        drop(file);

        fs::rename(&tmp_path, &self.path)?;
        log::debug!("saved {} contacts to {}", contacts.len(), self.path);

        Ok(())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}
