use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StepLogError {
    #[error("Missing required value: {name}")]
    InvalidArgument { name: &'static str },

    #[error("Only one outcome may be selected, got: {}", .selected.join(", "))]
    ConflictingOutcome { selected: Vec<&'static str> },

    #[error("Failed to append to {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid value for {name}: {reason}")]
    InvalidValue { name: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, StepLogError>;

pub fn require<'a>(value: &'a str, name: &'static str) -> Result<&'a str> {
    if value.is_empty() {
        return Err(StepLogError::InvalidArgument { name });
    }
    Ok(value)
}
