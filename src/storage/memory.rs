use super::*;

/// Session-only slot. Starts out empty, as if nothing was ever persisted.
#[derive(Debug, Default, Clone)]
pub struct MemStorage {
    pub data: Option<Vec<Contact>>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self { data: None }
    }

    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            data: Some(contacts),
        }
    }
}

impl Storage for MemStorage {
    fn load(&self) -> Result<Option<Vec<Contact>>, AppError> {
        Ok(self.data.clone())
    }

    fn save(&mut self, contacts: &[Contact]) -> Result<(), AppError> {
        self.data = Some(contacts.to_vec());
        Ok(())
    }

    fn get_medium(&self) -> &str {
        "mem"
    }
}
