pub use crate::cli::{command, run_app};
pub use crate::domain::{
    contact::{self, Contact, default_contacts},
    manager::{self, ContactStore},
    notice::{self, ConsoleNotifier, Notice, Notifier, RecordingNotifier, Severity},
    search::filter_by_name,
};
pub use crate::errors::AppError;
pub use crate::storage::{
    self, Storage, StorageMediums, memory::MemStorage, parse_storage_type, stores::JsonStorage,
};
