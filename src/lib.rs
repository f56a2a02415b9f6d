pub mod cli;
pub mod commands;
pub mod common;
pub mod error;
pub mod format;
pub mod index;
pub mod input;
pub mod remote;

pub use error::AffilError;
