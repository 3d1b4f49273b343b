//! Verse record parsing and chapter grouping for the chapter-split workspace
//!
//! Input is tab-delimited verse data (one verse per line, book and chapter
//! numbers in fields 1 and 2, text in field 4). Adjacent verses sharing a
//! (book, chapter) key are grouped into one chapter record.

pub mod error;
pub mod group;
pub mod record;

pub use error::{ParseError, Result};
pub use group::{Chapter, Chapters, chapters};
pub use record::VerseRecord;
