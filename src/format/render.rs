use std::borrow::Cow;

use super::superscript::{encode_marker, to_display, to_plain};
use crate::common::{AuthorEntry, FormatStats, FormattedOutput};
use crate::error::AffilError;
use crate::index::AffiliationRegistry;

/// Separator between citation tokens on the authors line
pub const AUTHOR_SEPARATOR: &str = ", ";

/// Separator between the authors line and the affiliation list
pub const SECTION_SEPARATOR: &str = "\n\n";

/// Target of a rendering pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rendering {
    /// Downloadable text
    Plain,
    /// Inline rich text for on-screen display
    Display,
}

impl Rendering {
    fn marker(self, indices: &[usize]) -> String {
        let encoded = encode_marker(indices);
        match self {
            Rendering::Plain => to_plain(&encoded),
            Rendering::Display => to_display(&encoded),
        }
    }

    fn text(self, text: &str) -> Cow<'_, str> {
        match self {
            Rendering::Plain => Cow::Borrowed(text),
            Rendering::Display => escape_markup(text),
        }
    }
}

/// Escape the characters that would otherwise be read as markup
pub fn escape_markup(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>']) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

fn check_indices(entry: &AuthorEntry, registry: &AffiliationRegistry) -> Result<(), AffilError> {
    match entry
        .affiliation_indices
        .iter()
        .find(|&&index| registry.get(index).is_none())
    {
        Some(&index) => Err(AffilError::InternalConsistency {
            index,
            len: registry.len(),
        }),
        None => Ok(()),
    }
}

/// Citation tokens (author immediately followed by its marker) joined with ", "
pub fn authors_line(
    entries: &[AuthorEntry],
    registry: &AffiliationRegistry,
    rendering: Rendering,
) -> Result<String, AffilError> {
    let tokens = entries
        .iter()
        .map(|entry| -> Result<String, AffilError> {
            check_indices(entry, registry)?;
            Ok(format!(
                "{}{}",
                rendering.text(&entry.author),
                rendering.marker(&entry.affiliation_indices)
            ))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(tokens.join(AUTHOR_SEPARATOR))
}

/// Numbered affiliation list, one "{i}. {affiliation}" line per registry entry
pub fn affiliation_list(registry: &AffiliationRegistry, rendering: Rendering) -> String {
    registry
        .iter()
        .map(|(i, affiliation)| format!("{}. {}", i, rendering.text(affiliation)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render(
    entries: &[AuthorEntry],
    registry: &AffiliationRegistry,
    rendering: Rendering,
) -> Result<String, AffilError> {
    Ok(format!(
        "{}{}{}",
        authors_line(entries, registry, rendering)?,
        SECTION_SEPARATOR,
        affiliation_list(registry, rendering)
    ))
}

/// Render both variants of the author list; any out-of-range index aborts without output
pub fn format(
    entries: &[AuthorEntry],
    registry: &AffiliationRegistry,
) -> Result<FormattedOutput, AffilError> {
    Ok(FormattedOutput {
        plain_text: render(entries, registry, Rendering::Plain)?,
        display_markup: render(entries, registry, Rendering::Display)?,
    })
}

/// Summary counts for a formatted run
pub fn format_stats(entries: &[AuthorEntry], registry: &AffiliationRegistry) -> FormatStats {
    FormatStats {
        authors: entries.len(),
        affiliations: registry.len(),
        authors_without_affiliations: entries
            .iter()
            .filter(|e| e.affiliation_indices.is_empty())
            .count(),
    }
}
