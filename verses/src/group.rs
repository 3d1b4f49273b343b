//! Chapter grouping: partition adjacent verses into maximal equal-key runs.

use crate::error::Result;
use crate::record::VerseRecord;

/// Separator placed between verse fragments within a chapter. This is the
/// two-character sequence backslash + `n`, not an actual line break.
const FRAGMENT_SEPARATOR: &str = "\\n";

/// One output chapter: a composite id and the joined verse text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    pub id: String,
    pub text: String,
}

impl Chapter {
    /// Build the composite chapter id from a (book, chapter) key.
    ///
    /// The id is the textual concatenation of the book number and the
    /// zero-padded two-digit chapter number: (1, 5) becomes "105",
    /// (12, 3) becomes "1203". For chapters of 100 or more the digits
    /// still concatenate textually, so (1, 100) becomes "1100" and is
    /// indistinguishable from (11, 0). The ambiguity is inherited from
    /// the data format and deliberately left as-is.
    pub fn composite_id(book: u32, chapter: u32) -> String {
        format!("{book}{chapter:02}")
    }
}

/// Group the lines of `input` into chapters.
///
/// Returns an iterator yielding one [`Chapter`] per maximal run of adjacent
/// records sharing a (book, chapter) key, in input order. Records are
/// parsed as the scan reaches them, so a malformed line surfaces as an
/// `Err` at that point and ends the iteration; chapters already yielded
/// are unaffected, and the run being accumulated is discarded.
pub fn chapters(input: &str) -> Chapters<'_> {
    Chapters {
        lines: input.lines().enumerate(),
        pending: None,
        done: false,
    }
}

/// Iterator over chapter groups. Created by [`chapters`].
pub struct Chapters<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
    /// First record of the next group, read while closing the previous one.
    pending: Option<VerseRecord<'a>>,
    done: bool,
}

impl<'a> Chapters<'a> {
    fn next_record(&mut self) -> Option<Result<VerseRecord<'a>>> {
        let (index, line) = self.lines.next()?;
        Some(VerseRecord::parse(index + 1, line))
    }
}

impl Iterator for Chapters<'_> {
    type Item = Result<Chapter>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let first = match self.pending.take() {
            Some(record) => record,
            None => match self.next_record()? {
                Ok(record) => record,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            },
        };

        let key = first.key();
        let mut fragments = vec![first.text];

        // Consume records until the key changes or the input ends.
        loop {
            match self.next_record() {
                None => break,
                Some(Err(e)) => {
                    self.done = true;
                    return Some(Err(e));
                }
                Some(Ok(record)) => {
                    if record.key() == key {
                        fragments.push(record.text);
                    } else {
                        self.pending = Some(record);
                        break;
                    }
                }
            }
        }

        let (book, chapter) = key;
        Some(Ok(Chapter {
            id: Chapter::composite_id(book, chapter),
            text: fragments.join(FRAGMENT_SEPARATOR),
        }))
    }
}
