pub mod contact;
pub mod manager;
pub mod notice;
pub mod search;

use crate::errors::AppError;
pub use contact::Contact;
pub use manager::ContactStore;
