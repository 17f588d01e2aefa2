//! Pretty-printed JSON output

use serde_json::Value;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::ConvertError;

/// Write the record array to `path` as pretty-printed UTF-8 JSON
/// (2-space indentation, non-ASCII characters verbatim), truncating
/// any existing file.
pub fn write_records(path: &Path, records: &[Value]) -> Result<(), ConvertError> {
    let write_err = |source: std::io::Error| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records)
        .map_err(|source| write_err(source.into()))?;
    writer.write_all(b"\n").map_err(write_err)?;
    writer.flush().map_err(write_err)?;
    Ok(())
}
