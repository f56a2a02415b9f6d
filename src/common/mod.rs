pub mod logging;
pub mod output;
pub mod progress;
pub mod types;
pub mod utils;

pub use logging::*;
pub use output::{OutputPaths, DEFAULT_OUTPUT_FILENAME};
pub use progress::create_spinner;
pub use types::*;
pub use utils::*;
