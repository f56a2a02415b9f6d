use anyhow::{bail, Context, Result};
use calamine::{open_workbook_auto, open_workbook_auto_from_rs, Data, Range, Reader, Sheets};
use log::debug;
use polars::prelude::*;
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{Cursor, Read, Seek};
use std::path::Path;

/// Load an input table from a file, dispatching on extension.
///
/// Supported formats:
/// * `.xlsx`, `.xlsm`, `.xls`, `.ods` – first worksheet, first row is the header
/// * `.csv`     – comma-separated with a header row
/// * `.parquet` – any schema; columns are cast to strings during validation
pub fn load_table(path: &Path) -> Result<DataFrame> {
    if !path.exists() {
        bail!("Input file does not exist: {}", path.display());
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "xlsx" | "xlsm" | "xls" | "ods" => load_workbook(path),
        "csv" => load_csv(path),
        "parquet" | "pq" => load_parquet(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

/// Load a workbook held in memory (e.g. a downloaded example file)
pub fn load_workbook_bytes(bytes: Vec<u8>) -> Result<DataFrame> {
    let workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .context("Failed to open workbook from downloaded bytes")?;
    frame_from_workbook(workbook)
}

/// First `n` rows of a table, for preview
pub fn preview(df: &DataFrame, n: usize) -> DataFrame {
    df.head(Some(n))
}

fn load_workbook(path: &Path) -> Result<DataFrame> {
    let workbook = open_workbook_auto(path)
        .with_context(|| format!("Failed to open workbook: {}", path.display()))?;
    frame_from_workbook(workbook)
}

fn frame_from_workbook<RS: Read + Seek>(mut workbook: Sheets<RS>) -> Result<DataFrame> {
    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .context("Workbook has no worksheets")?;

    debug!("Reading worksheet '{}'", sheet);

    let range = workbook
        .worksheet_range(&sheet)
        .with_context(|| format!("Failed to read worksheet '{}'", sheet))?;

    frame_from_range(&range)
}

/// Empty cells, empty strings and error cells become nulls
fn cell_value(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) if s.is_empty() => None,
        other => Some(other.to_string()),
    }
}

fn header_name(cell: Option<&Data>, position: usize) -> String {
    match cell.and_then(cell_value) {
        Some(name) => name,
        None => format!("column_{}", position + 1),
    }
}

/// Suffix repeated header names with ".1", ".2", ... so every column name is unique
fn dedupe_header_names(names: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::with_capacity(names.len());
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut unique = Vec::with_capacity(names.len());

    for name in names {
        let mut candidate = name.clone();
        while seen.contains(&candidate) {
            let count = counts.entry(name.clone()).or_insert(0);
            *count += 1;
            candidate = format!("{}.{}", name, count);
        }
        seen.insert(candidate.clone());
        unique.push(candidate);
    }

    unique
}

fn frame_from_range(range: &Range<Data>) -> Result<DataFrame> {
    let mut rows = range.rows();

    let header = match rows.next() {
        Some(header) => header,
        None => return Ok(DataFrame::empty()),
    };

    let names = dedupe_header_names(
        (0..header.len())
            .map(|i| header_name(header.get(i), i))
            .collect(),
    );

    let mut values: Vec<Vec<Option<String>>> = vec![Vec::new(); names.len()];
    for row in rows {
        for (i, column) in values.iter_mut().enumerate() {
            column.push(row.get(i).and_then(cell_value));
        }
    }

    let columns: Vec<Column> = names
        .iter()
        .zip(values)
        .map(|(name, column)| Series::new(name.as_str().into(), column).into())
        .collect();

    DataFrame::new(columns).context("Failed to build table from worksheet")
}

fn load_csv(path: &Path) -> Result<DataFrame> {
    // Schema inference is disabled so every column arrives as a string
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .with_context(|| format!("Failed to open CSV file: {}", path.display()))?
        .finish()
        .with_context(|| format!("Failed to parse CSV file: {}", path.display()))
}

fn load_parquet(path: &Path) -> Result<DataFrame> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open Parquet file: {}", path.display()))?;
    ParquetReader::new(file)
        .finish()
        .with_context(|| format!("Failed to read Parquet file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::AuthorRow;
    use crate::input::rows_from_frame;
    use std::io::Write;
    use tempfile::Builder;

    fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_csv_reads_strings() {
        let file = write_temp(
            ".csv",
            "Author,Affiliation1,Affiliation2,Affiliation3\nAlice,X,,\nBob,42,Y,\n",
        );

        let df = load_table(file.path()).unwrap();
        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 4);

        let aff1 = df.column("Affiliation1").unwrap().str().unwrap();
        assert_eq!(aff1.get(1), Some("42"));
    }

    #[test]
    fn test_unsupported_extension() {
        let file = write_temp(".json", "[]");
        let err = load_table(file.path()).unwrap_err();
        assert!(err.to_string().contains("Unsupported file extension"));
    }

    #[test]
    fn test_missing_file() {
        let err = load_table(Path::new("/nonexistent/authors.xlsx")).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_cell_value_missing_forms() {
        assert_eq!(cell_value(&Data::Empty), None);
        assert_eq!(cell_value(&Data::String(String::new())), None);
        assert_eq!(cell_value(&Data::String(" ".to_string())), Some(" ".to_string()));
        assert_eq!(cell_value(&Data::Int(7)), Some("7".to_string()));
    }

    #[test]
    fn test_blank_header_gets_positional_name() {
        assert_eq!(header_name(Some(&Data::Empty), 4), "column_5");
        assert_eq!(header_name(None, 0), "column_1");
        assert_eq!(
            header_name(Some(&Data::String("Author".to_string())), 0),
            "Author"
        );
    }

    fn header_range(rows: u32, headers: &[&str]) -> Range<Data> {
        let mut range = Range::new((0, 0), (rows, headers.len() as u32 - 1));
        for (col, name) in headers.iter().enumerate() {
            range.set_value((0, col as u32), Data::String(name.to_string()));
        }
        range
    }

    const REQUIRED_HEADERS: [&str; 4] =
        ["Author", "Affiliation1", "Affiliation2", "Affiliation3"];

    #[test]
    fn test_worksheet_rows() {
        let mut range = header_range(2, &REQUIRED_HEADERS);
        range.set_value((1, 0), Data::String("Alice".to_string()));
        range.set_value((1, 1), Data::String("X".to_string()));
        range.set_value((1, 2), Data::String("Y".to_string()));
        range.set_value((2, 0), Data::String("Bob".to_string()));
        range.set_value((2, 1), Data::Float(2.0));
        range.set_value((2, 2), Data::String(String::new()));

        let df = frame_from_range(&range).unwrap();
        let rows = rows_from_frame(&df).unwrap();

        assert_eq!(
            rows,
            vec![
                AuthorRow::new("Alice", [Some("X"), Some("Y"), None]),
                AuthorRow::new("Bob", [Some("2"), None, None]),
            ]
        );
    }

    #[test]
    fn test_worksheet_header_only() {
        let range = header_range(0, &REQUIRED_HEADERS);

        let df = frame_from_range(&range).unwrap();
        assert_eq!(df.height(), 0);
        assert_eq!(df.width(), 4);
        assert!(rows_from_frame(&df).unwrap().is_empty());
    }

    #[test]
    fn test_worksheet_duplicate_headers() {
        let mut range = header_range(
            1,
            &["Author", "Affiliation1", "Affiliation2", "Affiliation3", "Notes", "Notes"],
        );
        range.set_value((1, 0), Data::String("Alice".to_string()));
        range.set_value((1, 1), Data::String("X".to_string()));
        range.set_value((1, 4), Data::String("first".to_string()));
        range.set_value((1, 5), Data::String("second".to_string()));

        let df = frame_from_range(&range).unwrap();
        assert!(df.column("Notes.1").is_ok());

        let rows = rows_from_frame(&df).unwrap();
        assert_eq!(rows, vec![AuthorRow::new("Alice", [Some("X"), None, None])]);
    }

    #[test]
    fn test_dedupe_header_names() {
        let names = ["A", "B", "A", "A.1", "A"].map(str::to_string).to_vec();
        assert_eq!(
            dedupe_header_names(names),
            vec!["A", "B", "A.1", "A.1.1", "A.2"]
        );
    }

    #[test]
    fn test_preview_limits_rows() {
        let df = df!("Author" => ["a", "b", "c"]).unwrap();
        assert_eq!(preview(&df, 2).height(), 2);
        assert_eq!(preview(&df, 10).height(), 3);
    }

    #[test]
    fn test_load_workbook_bytes_rejects_garbage() {
        assert!(load_workbook_bytes(b"not a workbook".to_vec()).is_err());
    }
}
