//! Reading and writing the survey export file.
//!
//! The export puts two decorative records ahead of the authoritative header:
//! the header is always the third physical record, and data rows follow it.
//! Preamble records are carried through a read/write round trip verbatim.
//! The exporter emits a UTF-8 byte-order mark, so the mark is stripped on
//! read and emitted again on write.

use std::io::Write;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, WriterBuilder};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::debug;

/// Physical index of the header record.
const HEADER_RECORD_INDEX: usize = 2;

const BOM: char = '\u{feff}';

#[derive(Debug, Error)]
pub enum SheetError {
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("{path}: expected the header as record {expected} but the file has {found} record(s)")]
    MissingHeader {
        path: PathBuf,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, SheetError>;

/// A survey export loaded whole into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveySheet {
    /// Decorative records ahead of the header, preserved verbatim on write.
    pub preamble: Vec<Vec<String>>,
    /// The authoritative header record.
    pub header: Vec<String>,
    /// Data rows, positionally aligned to the header. Trailing rows may be
    /// shorter than the header; stages skip what they cannot address.
    pub rows: Vec<Vec<String>>,
}

impl SurveySheet {
    /// Load the whole file. Fails when the file cannot be read or is too
    /// short to contain the header record.
    pub fn read(path: &Path) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)
            .map_err(|source| SheetError::Csv {
                path: path.to_path_buf(),
                source,
            })?;
        let mut records: Vec<Vec<String>> = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|source| SheetError::Csv {
                path: path.to_path_buf(),
                source,
            })?;
            records.push(record.iter().map(str::to_string).collect());
        }
        // The byte-order mark belongs to the encoding, not the first cell.
        if let Some(first) = records.first_mut().and_then(|row| row.first_mut())
            && let Some(stripped) = first.strip_prefix(BOM)
        {
            *first = stripped.to_string();
        }
        if records.len() <= HEADER_RECORD_INDEX {
            return Err(SheetError::MissingHeader {
                path: path.to_path_buf(),
                expected: HEADER_RECORD_INDEX + 1,
                found: records.len(),
            });
        }
        let rows = records.split_off(HEADER_RECORD_INDEX + 1);
        let header = records.pop().unwrap_or_default();
        let sheet = Self {
            preamble: records,
            header,
            rows,
        };
        debug!(
            path = %path.display(),
            columns = sheet.header.len(),
            rows = sheet.rows.len(),
            "sheet loaded"
        );
        Ok(sheet)
    }

    /// Replace the file at `path` with this sheet's contents.
    ///
    /// Writes to a temporary file in the same directory and renames it over
    /// the target, so a crash mid-write cannot leave a half-written file.
    pub fn write(&self, path: &Path) -> Result<()> {
        let io_error = |source| SheetError::Io {
            path: path.to_path_buf(),
            source,
        };
        let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
        let mut tmp =
            NamedTempFile::new_in(parent.unwrap_or_else(|| Path::new("."))).map_err(io_error)?;
        tmp.write_all("\u{feff}".as_bytes()).map_err(io_error)?;
        {
            let mut writer = WriterBuilder::new().flexible(true).from_writer(&mut tmp);
            for record in self
                .preamble
                .iter()
                .chain(std::iter::once(&self.header))
                .chain(self.rows.iter())
            {
                writer.write_record(record).map_err(|source| SheetError::Csv {
                    path: path.to_path_buf(),
                    source,
                })?;
            }
            writer.flush().map_err(io_error)?;
        }
        tmp.persist(path).map_err(|error| SheetError::Io {
            path: path.to_path_buf(),
            source: error.error,
        })?;
        debug!(path = %path.display(), rows = self.rows.len(), "sheet written");
        Ok(())
    }
}
