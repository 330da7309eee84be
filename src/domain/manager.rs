use super::*;

use crate::domain::contact::default_contacts;
use crate::domain::notice::{Notifier, Severity};
use crate::storage::Storage;

pub const EMPTY_LIST_NOTICE: &str = "No contacts in your list yet";
pub const NO_MATCH_NOTICE: &str = "No contacts matching your request";

/// Session state of the phonebook: the contact list plus the current filter.
///
/// Every mutation is written through to `storage` before it returns, so the
/// in-memory list and the persisted snapshot never drift apart. If a save
/// fails the mutation is undone and the error is returned.
pub struct ContactStore<S: Storage, N: Notifier> {
    contacts: Vec<Contact>,
    filter: String,
    storage: S,
    notifier: N,
}

impl<S: Storage, N: Notifier> ContactStore<S, N> {
    /// Starts a session from whatever `storage` holds.
    ///
    /// A slot that was never written is seeded with the sample contacts and
    /// persisted right away. An empty slot stays empty.
    pub fn open(mut storage: S, notifier: N) -> Result<Self, AppError> {
        let contacts = match storage.load()? {
            Some(contacts) => {
                if contacts.is_empty() {
                    notifier.notify(EMPTY_LIST_NOTICE, Severity::Info);
                }
                contacts
            }
            None => {
                let seeded = default_contacts();
                storage.save(&seeded)?;
                log::info!(
                    "seeded {} default contacts into {} storage",
                    seeded.len(),
                    storage.get_medium()
                );
                seeded
            }
        };

        Ok(Self {
            contacts,
            filter: String::new(),
            storage,
            notifier,
        })
    }

    /// Ends the session, handing back the storage adapter and notifier.
    pub fn close(self) -> (S, N) {
        log::debug!("closing store with {} contacts", self.contacts.len());
        (self.storage, self.notifier)
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn get(&self, id: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Appends a new contact unless `name` is already taken, ignoring case.
    ///
    /// Callers must pass a non-blank `name`; presence is checked by the form
    /// layer (`cli::required`) before a contact reaches the store.
    pub fn add(&mut self, name: &str, number: &str) -> Result<Contact, AppError> {
        debug_assert!(!name.trim().is_empty(), "contact name must not be blank");

        if self.contacts.iter().any(|c| c.has_name(name)) {
            self.notifier.notify(
                &format!("{} is already in contacts", name),
                Severity::Warning,
            );
            return Err(AppError::DuplicateName(name.to_string()));
        }

        let contact = Contact::new(name.to_string(), number.to_string());
        self.contacts.push(contact.clone());

        if let Err(e) = self.persist() {
            self.contacts.pop();
            return Err(e);
        }

        log::info!("added contact {}", contact.id);
        self.notifier.notify(
            &format!("{} was successfully added to your contacts", name),
            Severity::Success,
        );
        Ok(contact)
    }

    /// Removes the contact with `id`. Unknown ids are ignored.
    ///
    /// `name` is what the caller displayed for the row; the notice uses the
    /// name stored under `id`.
    pub fn delete(&mut self, id: &str, name: &str) -> Result<Option<Contact>, AppError> {
        let Some(index) = self.contacts.iter().position(|c| c.id == id) else {
            log::debug!("delete of unknown id {id} ignored");
            return Ok(None);
        };

        let removed = self.contacts.remove(index);

        if let Err(e) = self.persist() {
            self.contacts.insert(index, removed);
            return Err(e);
        }

        if !name.is_empty() && removed.name != name {
            log::warn!(
                "delete of {} was requested as '{}' but stored name is '{}'",
                id,
                name,
                removed.name
            );
        }

        log::info!("deleted contact {}", removed.id);
        self.notifier.notify(
            &format!("{} was successfully deleted from your contacts", removed.name),
            Severity::Info,
        );
        Ok(Some(removed))
    }

    /// Filter text is session state only and is never persisted.
    pub fn set_filter(&mut self, query: &str) {
        self.filter = query.to_string();
    }

    pub fn filtered_view(&self) -> Vec<&Contact> {
        let view = search::filter_by_name(&self.filter, &self.contacts);

        if !self.filter.is_empty() && view.is_empty() {
            self.notifier.notify(NO_MATCH_NOTICE, Severity::Warning);
        }
        view
    }

    fn persist(&mut self) -> Result<(), AppError> {
        self.storage.save(&self.contacts)
    }
}
