//! First-sheet table extraction

use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

use crate::error::ConvertError;

/// Raw contents of the first sheet: the header row plus the data rows
/// below it, in source order.
#[derive(Debug, Clone)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Data>>,
}

impl Table {
    /// Number of data rows (header excluded).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Read the first sheet of the workbook at `path`, using row 1 as the
/// header row.
///
/// Fails with `InputNotFound` before touching the parser when the path
/// does not exist, with `Parse` when calamine cannot open the file, and
/// with `EmptySheet` when there are no sheets or no data rows.
pub fn read_table(path: &Path) -> Result<Table, ConvertError> {
    if !path.exists() {
        return Err(ConvertError::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut workbook = open_workbook_auto(path).map_err(|source| ConvertError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| ConvertError::EmptySheet {
            path: path.to_path_buf(),
        })?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|source| ConvertError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let mut row_iter = range.rows();
    let headers: Vec<String> = match row_iter.next() {
        Some(header_row) => header_row.iter().map(|cell| cell.to_string()).collect(),
        None => {
            return Err(ConvertError::EmptySheet {
                path: path.to_path_buf(),
            })
        }
    };

    let rows: Vec<Vec<Data>> = row_iter.map(|row| row.to_vec()).collect();
    if rows.is_empty() {
        return Err(ConvertError::EmptySheet {
            path: path.to_path_buf(),
        });
    }

    Ok(Table { headers, rows })
}
