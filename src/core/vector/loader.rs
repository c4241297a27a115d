// src/core/vector/loader.rs

//! Reader for the line-oriented vector file format.
//!
//! One vector per line, components separated by a single character
//! (`|` by default):
//!
//! ```text
//! x1|x2|..|xn
//! y1|y2|..|yn
//! ```
//!
//! Blank lines are skipped. Every other line must carry the same number of
//! fields as the first one.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::Vector;
use crate::core::common::KdSearchError;

/// Default component separator of the flat-file format.
pub const DEFAULT_SEPARATOR: char = '|';

/// Parses a single line into a `Vector`.
///
/// `line_no` is 1-based and only used for error reporting.
///
/// # Errors
///
/// Returns `KdSearchError::MalformedInput` if any field is not a finite
/// number (`NaN` and `inf` are rejected).
pub fn parse_line(line: &str, separator: char, line_no: usize) -> Result<Vector, KdSearchError> {
    line.split(separator)
        .map(|field| -> Result<f64, KdSearchError> {
            let field = field.trim();
            let value = field.parse::<f64>().map_err(|e| KdSearchError::MalformedInput {
                line: line_no,
                message: format!("'{}' is not a number: {}", field, e),
            })?;
            if !value.is_finite() {
                return Err(KdSearchError::MalformedInput {
                    line: line_no,
                    message: format!("'{}' is not a finite number", field),
                });
            }
            Ok(value)
        })
        .collect::<Result<Vec<f64>, _>>()
        .map(Vector::new)
}

/// Reads every vector from `reader`.
///
/// # Errors
///
/// * `KdSearchError::Io` if reading fails.
/// * `KdSearchError::MalformedInput` with the 1-based file line if a field
///   does not parse or a line has a different number of fields than the
///   first one.
pub fn load_from_reader<R: BufRead>(reader: R, separator: char) -> Result<Vec<Vector>, KdSearchError> {
    let mut vectors: Vec<Vector> = Vec::new();
    let mut expected: Option<usize> = None;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let vector = parse_line(&line, separator, idx + 1)?;
        match expected {
            None => expected = Some(vector.dimension()),
            Some(dim) if dim != vector.dimension() => {
                return Err(KdSearchError::MalformedInput {
                    line: idx + 1,
                    message: format!(
                        "expected {} fields, found {} (vector {})",
                        dim,
                        vector.dimension(),
                        vectors.len()
                    ),
                });
            }
            Some(_) => {}
        }
        vectors.push(vector);
    }

    Ok(vectors)
}

/// Opens `path` and reads every vector in it.
///
/// # Errors
///
/// See [`load_from_reader`]; a missing or unreadable file is `KdSearchError::Io`.
pub fn load_from_path(path: &Path, separator: char) -> Result<Vec<Vector>, KdSearchError> {
    let file = File::open(path)?;
    let vectors = load_from_reader(BufReader::new(file), separator)?;
    tracing::debug!(path = %path.display(), count = vectors.len(), "loaded vectors");
    Ok(vectors)
}

/// Formats a vector as one line of the flat-file format (without newline).
#[must_use]
pub fn format_line(vector: &Vector, separator: char) -> String {
    vector
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(&separator.to_string())
}
