//! Closed error taxonomy for the conversion pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while converting a workbook.
///
/// Each variant maps to one terminal failure path; there is no retry
/// logic, and none of these escape as a panic.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input path does not point at an existing file.
    #[error("input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    /// The workbook could not be opened or its first sheet could not
    /// be read (corrupt archive, unsupported format, truncated file).
    #[error("failed to read workbook {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    /// The workbook has no sheets, or the first sheet has no data rows
    /// below the header.
    #[error("no data rows found in the first sheet of {}", path.display())]
    EmptySheet { path: PathBuf },

    /// Creating, serializing, or flushing the output file failed.
    #[error("failed to write output file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
