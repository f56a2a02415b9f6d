pub mod loader;

pub use loader::*;

use anyhow::Result;
use polars::prelude::*;

use crate::common::{AuthorRow, AFFILIATION_COLUMNS, AUTHOR_COLUMN};
use crate::error::AffilError;

/// Required column names that a table does not carry, in canonical order
pub fn missing_columns(df: &DataFrame) -> Vec<String> {
    std::iter::once(AUTHOR_COLUMN)
        .chain(AFFILIATION_COLUMNS)
        .filter(|name| df.get_column_index(name).is_none())
        .map(str::to_string)
        .collect()
}

fn string_column(df: &DataFrame, name: &str) -> Result<StringChunked> {
    let column = df.column(name)?.cast(&DataType::String)?;
    Ok(column.str()?.clone())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Convert a loaded table into typed rows, in file order.
///
/// Fails with [`AffilError::MalformedInput`] when a required column is absent and
/// with [`AffilError::MissingAuthorField`] on the first row without an author.
/// Extra columns are ignored.
pub fn rows_from_frame(df: &DataFrame) -> Result<Vec<AuthorRow>> {
    let missing = missing_columns(df);
    if !missing.is_empty() {
        return Err(AffilError::MalformedInput { missing }.into());
    }

    let authors = string_column(df, AUTHOR_COLUMN)?;
    let affiliations = [
        string_column(df, AFFILIATION_COLUMNS[0])?,
        string_column(df, AFFILIATION_COLUMNS[1])?,
        string_column(df, AFFILIATION_COLUMNS[2])?,
    ];

    let mut rows = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        let author = non_empty(authors.get(i))
            .ok_or(AffilError::MissingAuthorField { row: i + 1 })?;

        rows.push(AuthorRow {
            author: author.to_string(),
            affiliations: [
                non_empty(affiliations[0].get(i)).map(str::to_string),
                non_empty(affiliations[1].get(i)).map(str::to_string),
                non_empty(affiliations[2].get(i)).map(str::to_string),
            ],
        });
    }

    Ok(rows)
}
