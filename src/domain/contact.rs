use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A phonebook entry as it is stored in the `contacts` slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub number: String,
}

impl Contact {
    pub fn new(name: String, number: String) -> Self {
        Contact {
            id: Uuid::new_v4().to_string(),
            name,
            number,
        }
    }

    /// Case-insensitive name comparison used for duplicate detection.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

/// Sample contacts used when nothing has been persisted yet.
pub fn default_contacts() -> Vec<Contact> {
    [
        ("id-1", "Rosie Simpson", "459-12-56"),
        ("id-2", "Hermione Kline", "443-89-12"),
        ("id-3", "Eden Clements", "645-17-79"),
        ("id-4", "Annie Copeland", "227-91-26"),
    ]
    .into_iter()
    .map(|(id, name, number)| Contact {
        id: id.to_string(),
        name: name.to_string(),
        number: number.to_string(),
    })
    .collect()
}
