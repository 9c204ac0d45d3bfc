//! Plain-text matrix format reader/writer
//!
//! ```text
//! rows=<number of rows>
//! cols=<number of columns>
//! (row, column, value)
//! (row, column, value)
//! ...
//! ```
//!
//! Entries are written in row-major order. Blank entry lines are skipped on
//! read. Entry fields are separated by a comma and a space; extra whitespace
//! around each field is ignored.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Lines, Write};
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::matrix::{Coord, Element, SparseMatrix};

impl<T: Element> SparseMatrix<T> {
    /// Read a matrix from the file at `path`
    ///
    /// # Errors
    ///
    /// * [`Error::Io`] if the file cannot be opened or read
    /// * [`Error::Format`] if the contents are malformed
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::read_from(BufReader::new(file))
    }

    /// Write the matrix to the file at `path`, replacing any existing file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Parse a matrix from any buffered reader
    ///
    /// Either the whole input parses or an error is returned; there is no
    /// partially loaded matrix.
    pub fn read_from<R: BufRead>(reader: R) -> Result<Self> {
        let mut lines = reader.lines();

        let rows = parse_header(next_line(&mut lines, 1)?, 1, "rows")?;
        let cols = parse_header(next_line(&mut lines, 2)?, 2, "cols")?;

        let mut matrix = Self::new(rows, cols);

        for (idx, line) in lines.enumerate() {
            let line_no = idx + 3;
            let line = check_utf8(line, line_no)?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let ((row, col), value) = parse_entry::<T>(line, line_no)?;
            if row >= rows || col >= cols {
                return Err(Error::format(
                    line_no,
                    format!("entry ({}, {}) lies outside {} × {}", row, col, rows, cols),
                ));
            }

            matrix.store((row, col), value);
        }

        Ok(matrix)
    }

    /// Serialize the matrix to any writer
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        write!(writer, "{}", self)?;
        Ok(())
    }
}

/// Reads one line, treating undecodable bytes as a format error
fn next_line<B: BufRead>(lines: &mut Lines<B>, line_no: usize) -> Result<Option<String>> {
    lines.next().map(|line| check_utf8(line, line_no)).transpose()
}

fn check_utf8(line: io::Result<String>, line_no: usize) -> Result<String> {
    line.map_err(|err| match err.kind() {
        io::ErrorKind::InvalidData => Error::format(line_no, "invalid UTF-8"),
        _ => Error::Io(err),
    })
}

/// Parses a `key=<n>` header line
fn parse_header(line: Option<String>, line_no: usize, key: &str) -> Result<usize> {
    let line = line.ok_or_else(|| Error::format(line_no, format!("missing '{}=' header", key)))?;
    let line = line.trim();

    let (name, value) = line
        .split_once('=')
        .ok_or_else(|| Error::format(line_no, format!("expected '{}=<n>', got '{}'", key, line)))?;

    if name != key {
        return Err(Error::format(
            line_no,
            format!("expected '{}=' header, got '{}='", key, name),
        ));
    }

    value
        .parse()
        .map_err(|_| Error::format(line_no, format!("invalid {} count '{}'", key, value)))
}

/// Parses a `(row, col, value)` entry line
fn parse_entry<T: Element>(line: &str, line_no: usize) -> Result<(Coord, T)> {
    let inner = line
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| Error::format(line_no, format!("entry '{}' is not parenthesized", line)))?;

    let fields: Vec<&str> = inner.split(", ").map(str::trim).collect();
    if fields.len() != 3 {
        return Err(Error::format(
            line_no,
            format!("expected 3 fields, got {} in '{}'", fields.len(), line),
        ));
    }

    let row = parse_index(fields[0], "row", line_no)?;
    let col = parse_index(fields[1], "column", line_no)?;
    let value = T::from_str_radix(fields[2], 10)
        .map_err(|_| Error::format(line_no, format!("invalid value '{}'", fields[2])))?;

    Ok(((row, col), value))
}

fn parse_index(field: &str, what: &str, line_no: usize) -> Result<usize> {
    field
        .parse()
        .map_err(|_| Error::format(line_no, format!("invalid {} index '{}'", what, field)))
}

impl<T: Element> FromStr for SparseMatrix<T> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::read_from(s.as_bytes())
    }
}

impl<T: Element> fmt::Display for SparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "rows={}", self.rows)?;
        writeln!(f, "cols={}", self.cols)?;
        for ((row, col), value) in self.iter() {
            writeln!(f, "({}, {}, {})", row, col, value)?;
        }
        Ok(())
    }
}
