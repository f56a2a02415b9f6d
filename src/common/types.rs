use serde::{Deserialize, Serialize};

/// Names of the columns every input table must carry, in column order
pub const AUTHOR_COLUMN: &str = "Author";
pub const AFFILIATION_COLUMNS: [&str; 3] = ["Affiliation1", "Affiliation2", "Affiliation3"];

/// One input record: an author and up to three affiliation cells (None = missing cell)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorRow {
    pub author: String,
    pub affiliations: [Option<String>; 3],
}

impl AuthorRow {
    pub fn new(author: impl Into<String>, affiliations: [Option<&str>; 3]) -> Self {
        Self {
            author: author.into(),
            affiliations: affiliations.map(|a| a.map(str::to_string)),
        }
    }

    /// Affiliation cells that are present, in column order
    pub fn present_affiliations(&self) -> impl Iterator<Item = &str> {
        self.affiliations.iter().filter_map(|a| a.as_deref())
    }
}

/// An author with 1-based positions into the affiliation registry, in source column order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorEntry {
    pub author: String,
    pub affiliation_indices: Vec<usize>,
}

/// The two renderings of the same assembled text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedOutput {
    /// Downloadable text: superscript digits kept, separators as literal commas
    pub plain_text: String,
    /// On-screen markup: superscript digits plus a raised comma between indices
    pub display_markup: String,
}

/// Statistics from the format step
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatStats {
    pub authors: usize,
    pub affiliations: usize,
    pub authors_without_affiliations: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_affiliations_skips_gaps() {
        let row = AuthorRow::new("Carol", [Some("Z"), None, Some("Y")]);
        let present: Vec<&str> = row.present_affiliations().collect();
        assert_eq!(present, vec!["Z", "Y"]);
    }
}
