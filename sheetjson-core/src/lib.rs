//! sheetjson-core: convert the first sheet of a workbook to JSON records
//!
//! Reads an XLSX/XLSM/ODS file, normalizes its header row into
//! machine-friendly keys, and writes one pretty-printed JSON object per
//! data row. The library is silent; all reporting goes through
//! [`ConversionReport`] and [`ConvertError`].

pub mod error;
pub mod normalize;
pub mod reader;
pub mod record;
pub mod writer;

use serde::Serialize;
use std::path::{Path, PathBuf};

pub use error::ConvertError;
pub use normalize::normalize_header;
pub use reader::Table;
pub use record::RecordSet;

/// Summary of a completed conversion.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionReport {
    /// Number of records written (data rows, header excluded).
    pub records: usize,
    /// Where the JSON document landed.
    pub output_path: PathBuf,
    /// Normalized keys shared by more than one source column
    /// (last column won for each).
    pub duplicate_keys: Vec<String>,
}

/// Convert the first sheet of `input` into a JSON array of records at
/// `output`.
///
/// The input is read once into memory, transformed, written, and
/// dropped; the only side effect is the output file. All failure modes
/// surface as a [`ConvertError`] variant, never a panic.
pub fn convert(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<ConversionReport, ConvertError> {
    let input = input.as_ref();
    let output = output.as_ref();

    let table = reader::read_table(input)?;
    let set = record::build_records(&table);
    writer::write_records(output, &set.records)?;

    Ok(ConversionReport {
        records: set.records.len(),
        output_path: output.to_path_buf(),
        duplicate_keys: set.duplicate_keys,
    })
}
