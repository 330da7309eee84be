pub mod cli;
pub mod domain;
pub mod errors;
pub mod prelude;
pub mod storage;
