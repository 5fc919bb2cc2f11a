//! CSV Row Source
//!
//! Reads group address rows from an ETS CSV export. Only the description
//! and address columns are used; any other columns are ignored.

use crate::config::{ColumnLayout, CsvOptions};
use crate::domain::ports::{GroupAddressRow, RowSource};
use crate::error::{Error, Result};
use async_trait::async_trait;
use csv::{ReaderBuilder, StringRecord};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Header name of the description column
pub const DESCRIPTION_COLUMN: &str = "description";

/// Header name of the address column
pub const ADDRESS_COLUMN: &str = "address";

/// Row source backed by a CSV file
#[derive(Debug, Clone)]
pub struct CsvRowSource {
    path: PathBuf,
    options: CsvOptions,
}

impl CsvRowSource {
    pub fn new(path: impl Into<PathBuf>, options: CsvOptions) -> Self {
        Self {
            path: path.into(),
            options,
        }
    }

    /// Path of the export
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RowSource for CsvRowSource {
    async fn load(&self) -> Result<Vec<GroupAddressRow>> {
        let content = fs::read(&self.path).await.map_err(|e| Error::InputIo {
            path: self.path.clone(),
            source: e,
        })?;
        debug!(path = %self.path.display(), bytes = content.len(), "Read CSV export");

        parse_rows(&content, &self.path, &self.options)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Column indices of the fields we need
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Columns {
    description: usize,
    address: usize,
}

impl Columns {
    fn resolve(headers: &StringRecord, path: &Path, layout: ColumnLayout) -> Result<Self> {
        match layout {
            ColumnLayout::Positional => Ok(Self {
                description: ColumnLayout::DESCRIPTION_INDEX,
                address: ColumnLayout::ADDRESS_INDEX,
            }),
            ColumnLayout::Named => Ok(Self {
                description: find_column(headers, path, DESCRIPTION_COLUMN)?,
                address: find_column(headers, path, ADDRESS_COLUMN)?,
            }),
        }
    }
}

fn find_column(headers: &StringRecord, path: &Path, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|header| {
            header
                .trim_start_matches('\u{feff}')
                .trim()
                .eq_ignore_ascii_case(name)
        })
        .ok_or_else(|| Error::MissingColumn {
            path: path.to_path_buf(),
            column: name.to_string(),
        })
}

/// Parse CSV content into rows in file order
pub fn parse_rows(content: &[u8], path: &Path, options: &CsvOptions) -> Result<Vec<GroupAddressRow>> {
    let csv_error = |e: csv::Error| Error::Csv {
        path: path.to_path_buf(),
        source: e,
    };

    let mut reader = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(content);

    let headers = reader.headers().map_err(csv_error)?.clone();
    let columns = Columns::resolve(&headers, path, options.layout)?;

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(csv_error)?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let field = |index: usize, column: &str| {
            record
                .get(index)
                .map(str::to_string)
                .ok_or_else(|| Error::MissingField {
                    line,
                    column: column.to_string(),
                })
        };

        let description = field(columns.description, DESCRIPTION_COLUMN)?;
        let address = field(columns.address, ADDRESS_COLUMN)?;
        rows.push(GroupAddressRow::new(description, address).at_line(line));
    }

    debug!(rows = rows.len(), "Parsed CSV rows");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use tempfile::TempDir;

    const EXPORT: &str = "\
description,address,empty1,empty2,group,dpt,auto
Wohnzimmer licht sch,1/1/1,,,Licht,DPST-1-1,
Wohnzimmer licht RMsch,1/1/2,,,Licht,DPST-1-1,
Gäste-WC Steckdose sch,1/2/1,,,Steckdosen,DPST-1-1,
";

    fn parse(content: &str, options: &CsvOptions) -> Result<Vec<GroupAddressRow>> {
        parse_rows(content.as_bytes(), Path::new("test.csv"), options)
    }

    #[test]
    fn test_parse_named_columns() {
        let rows = parse(EXPORT, &CsvOptions::default()).unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].description, "Wohnzimmer licht sch");
        assert_eq!(rows[0].address, "1/1/1");
        assert_eq!(rows[0].line, 2);
        assert_eq!(rows[2].description, "Gäste-WC Steckdose sch");
    }

    #[test]
    fn test_columns_in_any_order() {
        let content = "Address,Group,Description\n1/1/1,Licht,Flur licht sch\n";
        let rows = parse(content, &CsvOptions::default()).unwrap();

        assert_eq!(rows[0].description, "Flur licht sch");
        assert_eq!(rows[0].address, "1/1/1");
    }

    #[test]
    fn test_byte_order_mark_in_header() {
        let content = "\u{feff}description,address\nFlur licht sch,1/1/1\n";
        let rows = parse(content, &CsvOptions::default()).unwrap();
        assert_eq!(rows[0].address, "1/1/1");
    }

    #[test]
    fn test_missing_column() {
        let content = "name,address\nFlur licht sch,1/1/1\n";
        let err = parse(content, &CsvOptions::default()).unwrap_err();

        assert_matches!(err, Error::MissingColumn { ref column, .. } if column == "description");
    }

    #[test]
    fn test_short_row_is_fatal() {
        let content = "address,description\n1/1/1,Flur licht sch\n1/1/2\n";
        let err = parse(content, &CsvOptions::default()).unwrap_err();

        assert_matches!(err, Error::MissingField { line: 3, ref column } if column == "description");
    }

    #[test]
    fn test_positional_layout() {
        let options = CsvOptions {
            delimiter: b';',
            layout: ColumnLayout::Positional,
        };
        let content = "Gruppenadresse;Adresse\nFlur licht sch;1/1/1\n";
        let rows = parse(content, &options).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].description, "Flur licht sch");
        assert_eq!(rows[0].address, "1/1/1");
    }

    #[test]
    fn test_quoted_fields() {
        let content = "description,address\n\"Flur licht, Decke sch\",1/1/1\n";
        let rows = parse(content, &CsvOptions::default()).unwrap();
        assert_eq!(rows[0].description, "Flur licht, Decke sch");
    }

    #[test]
    fn test_invalid_utf8_is_input_error() {
        let content = b"description,address\nK\xfcche licht sch,1/1/1\n";
        let err = parse_rows(content, Path::new("latin1.csv"), &CsvOptions::default()).unwrap_err();
        assert_matches!(err, Error::Csv { .. });
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("export.csv");
        std::fs::write(&path, EXPORT).unwrap();

        let source = CsvRowSource::new(&path, CsvOptions::default());
        let rows = source.load().await.unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(source.describe(), path.display().to_string());
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let tmp = TempDir::new().unwrap();
        let source = CsvRowSource::new(tmp.path().join("missing.csv"), CsvOptions::default());

        let err = source.load().await.unwrap_err();
        assert_matches!(err, Error::InputIo { .. });
        assert!(err.to_string().contains("missing.csv"));
    }
}
