use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use directory_core::BusinessRecord;
use tempfile::NamedTempFile;
use thiserror::Error;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

/// Writes `records` as delimited text at `path`: UTF-8 with byte-order
/// marker, header row, one row per record in accumulation order.
///
/// Returns `None` without touching the filesystem when there is nothing to
/// write. The file lands atomically: temp file next to the target, then a
/// rename, so a failed write never leaves a partial file.
pub fn write_csv(path: &Path, records: &[BusinessRecord]) -> Result<Option<PathBuf>, ExportError> {
    if records.is_empty() {
        return Ok(None);
    }

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let mut tmp = NamedTempFile::new_in(&dir)?;
    tmp.write_all(UTF8_BOM)?;
    {
        // Header row comes from the record's serde field names.
        let mut writer = csv::Writer::from_writer(&mut tmp);
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;
    }
    tmp.as_file_mut().sync_all()?;

    // Replace an existing file from a previous run.
    if path.exists() {
        fs::remove_file(path)?;
    }
    tmp.persist(path).map_err(|err| ExportError::Io(err.error))?;

    Ok(Some(path.to_path_buf()))
}
