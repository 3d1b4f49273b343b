//! Parsing of tab-delimited verse records.

use crate::error::{ParseError, Result};

/// Book number field index within a record.
const BOOK_FIELD: usize = 1;
/// Chapter number field index within a record.
const CHAPTER_FIELD: usize = 2;
/// Text fragment field index within a record.
const TEXT_FIELD: usize = 4;

/// Minimum number of tab-separated fields a record must carry.
const MIN_FIELDS: usize = 5;

/// One verse parsed from an input line.
///
/// The source line has at least five tab-separated fields; only the book
/// number, chapter number, and text fragment are consumed. The text stays
/// borrowed from the input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerseRecord<'a> {
    pub book: u32,
    pub chapter: u32,
    pub text: &'a str,
}

impl<'a> VerseRecord<'a> {
    /// Parse a single input line into a record.
    ///
    /// `line_number` is 1-based and only used for diagnostics. Trailing
    /// whitespace (including the line ending) is stripped before splitting.
    pub fn parse(line_number: usize, line: &'a str) -> Result<VerseRecord<'a>> {
        let fields: Vec<&str> = line.trim_end().split('\t').collect();

        if fields.len() < MIN_FIELDS {
            return Err(ParseError::FieldCount {
                line: line_number,
                found: fields.len(),
            });
        }

        let book = parse_field(line_number, BOOK_FIELD, fields[BOOK_FIELD])?;
        let chapter = parse_field(line_number, CHAPTER_FIELD, fields[CHAPTER_FIELD])?;

        Ok(VerseRecord {
            book,
            chapter,
            text: fields[TEXT_FIELD],
        })
    }

    /// The grouping key: (book, chapter).
    pub fn key(&self) -> (u32, u32) {
        (self.book, self.chapter)
    }
}

fn parse_field(line: usize, field: usize, value: &str) -> Result<u32> {
    value.parse().map_err(|source| ParseError::Number {
        line,
        field,
        source,
    })
}
