use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("line {line}: expected at least 5 tab-separated fields, found {found}")]
    FieldCount { line: usize, found: usize },

    #[error("line {line}: field {field} is not a valid integer: {source}")]
    Number {
        line: usize,
        field: usize,
        #[source]
        source: std::num::ParseIntError,
    },
}

pub type Result<T> = std::result::Result<T, ParseError>;
