use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    /// A document or dictionary could not be read or decoded.
    #[error("Input Unavailable: {0}")]
    InputUnavailable(String),

    /// A dictionary source did not have the `[{"theme": ..., "words": [...]}]` shape.
    #[error("Malformed Dictionary: {0}")]
    MalformedDictionary(String),

    /// A top-N view was requested with `n == 0`.
    #[error("Invalid Rank Request: expected a positive number of entries, got {0}")]
    InvalidRankRequest(usize),

    #[error("IO Error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV Error: {0}")]
    CsvError(#[from] csv::Error),
}
