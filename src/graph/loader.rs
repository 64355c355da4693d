// src/graph/loader.rs

use std::fs::File;
use std::io::Read;
use std::path::Path;
use csv::{ReaderBuilder, StringRecord, Trim};
use log::debug;
use crate::core::{EulerError, Result};

/// Reads a rectangular matrix of comma-separated integers, one row per line.
///
/// Every row must have as many columns as the first one.
pub fn load_matrix<R: Read>(reader: R) -> Result<Vec<Vec<i64>>> {
    let rows = read_rows(reader)?;
    if let Some((_, first)) = rows.first() {
        let width = first.len();
        if let Some((line, row)) = rows.iter().find(|(_, row)| row.len() != width) {
            return Err(EulerError::Parse {
                line: *line,
                message: format!("expected {} columns, found {}", width, row.len()),
            });
        }
    }
    let matrix: Vec<Vec<i64>> = rows.into_iter().map(|(_, row)| row).collect();
    debug!("Loaded {}x{} matrix", matrix.len(), matrix.first().map_or(0, |row| row.len()));
    Ok(matrix)
}

/// Reads one comma-separated integer list per line. Rows may differ in length.
pub fn load_integer_sets<R: Read>(reader: R) -> Result<Vec<Vec<i64>>> {
    Ok(read_rows(reader)?.into_iter().map(|(_, row)| row).collect())
}

pub fn load_matrix_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<i64>>> {
    load_matrix(File::open(path)?)
}

pub fn load_integer_sets_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<i64>>> {
    load_integer_sets(File::open(path)?)
}

// Rows paired with their 1-based line in the input. The csv reader skips
// blank lines without counting them, so lines are recovered from byte offsets.
fn read_rows<R: Read>(mut reader: R) -> Result<Vec<(usize, Vec<i64>)>> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    let line_at = |byte: u64| line_of(input.as_bytes(), byte);

    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(input.as_bytes());

    let mut rows = Vec::new();
    for (index, record) in csv_reader.records().enumerate() {
        let record = record.map_err(|err| EulerError::Parse {
            line: err.position().map_or(index + 1, |position| line_at(position.byte())),
            message: err.to_string(),
        })?;
        let line = record.position().map_or(index + 1, |position| line_at(position.byte()));
        rows.push((line, parse_record(&record, line)?));
    }
    Ok(rows)
}

// A record's offset may sit before the blank lines skipped ahead of it.
fn line_of(input: &[u8], byte: u64) -> usize {
    let mut start = (byte as usize).min(input.len());
    while start < input.len() && matches!(input[start], b'\n' | b'\r') {
        start += 1;
    }
    1 + input[..start].iter().filter(|&&b| b == b'\n').count()
}

fn parse_record(record: &StringRecord, line: usize) -> Result<Vec<i64>> {
    record
        .iter()
        .map(|field| {
            field.parse::<i64>().map_err(|err| EulerError::Parse {
                line,
                message: format!("'{}': {}", field, err),
            })
        })
        .collect()
}
