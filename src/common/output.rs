use std::path::{Path, PathBuf};

/// Default name of the downloadable plain-text file
pub const DEFAULT_OUTPUT_FILENAME: &str = "author_affiliations.txt";

/// Paths for the two renderings (plain text, display markup)
#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub plain: PathBuf,
    pub markup: PathBuf,
}

impl OutputPaths {
    /// Generate paths from the plain-text path
    /// "author_affiliations.txt" -> "author_affiliations.txt", "author_affiliations.html"
    pub fn from_base<P: AsRef<Path>>(base: P) -> Self {
        let base = base.as_ref();
        Self {
            plain: base.to_path_buf(),
            markup: base.with_extension("html"),
        }
    }
}
