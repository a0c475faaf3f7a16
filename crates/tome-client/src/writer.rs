use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use csv::WriterBuilder;
use tome_core::error::AppError;
use tome_core::models::{COLUMNS, Catalog, Record};
use tome_core::traits::TableWriter;

/// Default output file name.
pub const DEFAULT_OUTPUT: &str = "books_data.csv";

/// Writes a catalog as UTF-8 CSV with a fixed header row.
#[derive(Debug, Clone)]
pub struct CsvTableWriter {
    path: PathBuf,
}

impl CsvTableWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TableWriter for CsvTableWriter {
    fn write(&self, catalog: &Catalog) -> Result<(), AppError> {
        let file = File::create(&self.path).map_err(|e| {
            AppError::OutputError(format!("Failed to create {}: {e}", self.path.display()))
        })?;
        write_records(file, catalog.records())?;
        tracing::debug!(path = %self.path.display(), rows = catalog.len(), "Catalog written");
        Ok(())
    }
}

/// Write the header and one row per record to any sink.
///
/// The header is written even when there are no records.
pub fn write_records<W: Write>(sink: W, records: &[Record]) -> Result<(), AppError> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(sink);

    writer
        .write_record(COLUMNS)
        .map_err(|e| AppError::OutputError(e.to_string()))?;
    for record in records {
        writer
            .serialize(record)
            .map_err(|e| AppError::OutputError(e.to_string()))?;
    }
    writer
        .flush()
        .map_err(|e| AppError::OutputError(e.to_string()))
}
