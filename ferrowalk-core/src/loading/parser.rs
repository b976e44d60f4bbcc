use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;
use std::str::FromStr;

use crate::Error;

/// Written at the start of text files by some Windows editors
const BYTE_ORDER_MARK: char = '\u{feff}';

/// Line reader that remembers 1-based line numbers for error reporting
pub(super) struct LineReader<R> {
    lines: Lines<R>,
    line_number: usize,
}

impl<R: BufRead> LineReader<R> {
    pub(super) fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_number: 0,
        }
    }

    /// Next line and its number; running out of input is an error naming `expected`
    pub(super) fn next_line(&mut self, expected: &str) -> Result<(usize, String), Error> {
        self.line_number += 1;
        match self.lines.next() {
            Some(line) => {
                let mut line = line?;
                if self.line_number == 1 && line.starts_with(BYTE_ORDER_MARK) {
                    line.replace_range(..BYTE_ORDER_MARK.len_utf8(), "");
                }
                Ok((self.line_number, line))
            }
            None => Err(Error::ParseError {
                line: self.line_number,
                message: format!("unexpected end of file, expected {expected}"),
            }),
        }
    }

    /// Next line holding a single record count
    pub(super) fn next_count(&mut self, expected: &str) -> Result<usize, Error> {
        let (line, text) = self.next_line(expected)?;
        parse_field(text.trim(), line, expected)
    }
}

/// Splits a record into fields, requiring at least `min_fields`
pub(super) fn split_fields<'a>(
    text: &'a str,
    min_fields: usize,
    line: usize,
    record: &str,
) -> Result<Vec<&'a str>, Error> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    if fields.len() < min_fields {
        return Err(Error::ParseError {
            line,
            message: format!(
                "{record} record needs {min_fields} fields, found {}",
                fields.len()
            ),
        });
    }
    Ok(fields)
}

pub(super) fn parse_field<T: FromStr>(field: &str, line: usize, name: &str) -> Result<T, Error> {
    field.parse::<T>().map_err(|_| Error::ParseError {
        line,
        message: format!("invalid {name} '{field}'"),
    })
}

/// Finite floating point field
pub(super) fn parse_coordinate(field: &str, line: usize, name: &str) -> Result<f64, Error> {
    let value: f64 = parse_field(field, line, name)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::ParseError {
            line,
            message: format!("{name} must be finite, got '{field}'"),
        })
    }
}

pub(super) fn open_file(path: &Path) -> Result<BufReader<File>, Error> {
    let file = File::open(path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("Failed to open file '{}': {}", path.display(), e),
        )
    })?;
    Ok(BufReader::new(file))
}
