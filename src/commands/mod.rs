pub mod fetch;
pub mod format;

pub use fetch::run_fetch_example;
pub use format::run_format;
