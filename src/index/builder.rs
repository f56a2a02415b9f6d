use log::debug;

use super::AffiliationRegistry;
use crate::common::{AuthorEntry, AuthorRow};
use crate::error::AffilError;

/// Build the affiliation registry from every row (pass 1)
pub fn build_registry(rows: &[AuthorRow]) -> AffiliationRegistry {
    let mut registry = AffiliationRegistry::new();
    for row in rows {
        for affiliation in row.present_affiliations() {
            registry.insert(affiliation);
        }
    }
    registry
}

/// Resolve each row's present affiliations to registry positions (pass 2)
pub fn resolve_entries(
    rows: &[AuthorRow],
    registry: &AffiliationRegistry,
) -> Result<Vec<AuthorEntry>, AffilError> {
    rows.iter()
        .map(|row| -> Result<AuthorEntry, AffilError> {
            let affiliation_indices = row
                .present_affiliations()
                .map(|affiliation| {
                    // pass 1 registered every present affiliation
                    registry
                        .position(affiliation)
                        .ok_or_else(|| AffilError::UnregisteredAffiliation {
                            affiliation: affiliation.to_string(),
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;

            Ok(AuthorEntry {
                author: row.author.clone(),
                affiliation_indices,
            })
        })
        .collect()
}

/// Deduplicate affiliations in first-seen order and index every author against them
pub fn index_rows(
    rows: &[AuthorRow],
) -> Result<(AffiliationRegistry, Vec<AuthorEntry>), AffilError> {
    let registry = build_registry(rows);
    let entries = resolve_entries(rows, &registry)?;

    debug!(
        "Indexed {} authors against {} distinct affiliations",
        entries.len(),
        registry.len()
    );

    Ok((registry, entries))
}
