//! Row-to-record conversion

use calamine::Data;
use chrono::NaiveDateTime;
use serde_json::{Map, Number, Value};
use std::collections::HashSet;

use crate::normalize::normalize_header;
use crate::reader::Table;

/// ISO-8601 with millisecond precision, matching the output the
/// dashboard consumes: `2024-03-15T00:00:00.000`.
const ISO_MILLIS: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// The converted rows plus any normalized-key collisions that were
/// resolved while building them.
#[derive(Debug, Clone)]
pub struct RecordSet {
    pub records: Vec<Value>,
    /// Keys produced by more than one source header. For each of these
    /// the rightmost column's value won.
    pub duplicate_keys: Vec<String>,
}

/// Map a single cell to its JSON representation.
///
/// Dates and times render as ISO-8601 strings, empty cells as null,
/// and error cells as their display text (`#DIV/0!` and friends, the
/// cached value a spreadsheet application would show). Floats with no
/// fractional part render as JSON integers.
pub fn cell_to_json(cell: &Data) -> Value {
    match cell {
        Data::Empty => Value::Null,
        Data::String(s) => Value::String(s.clone()),
        Data::Bool(b) => Value::Bool(*b),
        Data::Int(i) => Value::Number((*i).into()),
        Data::Float(f) => float_to_json(*f),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(naive) => Value::String(format_iso(naive)),
            // Serial outside chrono's range; keep the raw number rather
            // than dropping the cell.
            None => float_to_json(dt.as_f64()),
        },
        Data::DateTimeIso(s) => Value::String(s.clone()),
        Data::DurationIso(s) => Value::String(s.clone()),
        Data::Error(e) => Value::String(e.to_string()),
    }
}

fn format_iso(dt: NaiveDateTime) -> String {
    dt.format(ISO_MILLIS).to_string()
}

fn float_to_json(f: f64) -> Value {
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        Value::Number(Number::from(f as i64))
    } else {
        Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null)
    }
}

/// Build one record per data row, keyed by the normalized headers.
///
/// Keys keep column order. When two headers normalize to the same key
/// the later column overwrites the earlier one (the key stays at its
/// first position), and the collision is reported in `duplicate_keys`.
/// Rows shorter than the header are padded with null; cells beyond the
/// header width are ignored.
pub fn build_records(table: &Table) -> RecordSet {
    let keys: Vec<String> = table
        .headers
        .iter()
        .map(|header| normalize_header(header))
        .collect();

    let mut seen = HashSet::new();
    let mut duplicate_keys = Vec::new();
    for key in &keys {
        if !seen.insert(key.clone()) && !duplicate_keys.contains(key) {
            duplicate_keys.push(key.clone());
        }
    }

    let mut records = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let mut record = Map::with_capacity(keys.len());
        for (col, key) in keys.iter().enumerate() {
            let value = row.get(col).map(cell_to_json).unwrap_or(Value::Null);
            record.insert(key.clone(), value);
        }
        records.push(Value::Object(record));
    }

    RecordSet {
        records,
        duplicate_keys,
    }
}
