use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeatError {
    #[error("File error: {0}")]
    Io(#[from] io::Error),

    #[error("Seating export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Malformed JSON input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid search settings: {0}")]
    Config(String),

    #[error("Invalid seating problem: {0}")]
    Validation(String),
}

pub type SfResult<T> = Result<T, SeatError>;

/// Reads an input file, keeping the path in the error message.
pub fn read_input<P: AsRef<Path>>(path: P) -> SfResult<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| {
        SeatError::Io(io::Error::new(
            e.kind(),
            format!("could not read '{}': {}", path.display(), e),
        ))
    })
}
