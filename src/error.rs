use thiserror::Error;

/// Errors raised while turning an author table into formatted text
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AffilError {
    /// A data row has no author value (row numbers are 1-based, header excluded)
    #[error("row {row} has no value in the Author column")]
    MissingAuthorField { row: usize },

    /// The input table lacks one or more required columns
    #[error("input table is missing required column(s): {}", .missing.join(", "))]
    MalformedInput { missing: Vec<String> },

    /// An affiliation index points outside the registry; this is a logic defect, not user error
    #[error("affiliation index {index} is outside the registry range 1..={len}")]
    InternalConsistency { index: usize, len: usize },

    /// An affiliation was never added to the registry; like the above, a logic defect
    #[error("affiliation {affiliation:?} is not in the registry")]
    UnregisteredAffiliation { affiliation: String },

    /// The example dataset could not be retrieved
    #[error("failed to load example data from {url}: {reason}")]
    RemoteFetch { url: String, reason: String },
}
