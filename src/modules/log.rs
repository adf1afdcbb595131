use crate::modules::error::{Result, StepLogError};
use std::{
    fs::OpenOptions,
    io::Write,
    path::Path,
};
use tracing::debug;

/// Appends each line to the log file, creating it if needed.
pub fn append_lines(path: &Path, lines: &[String]) -> Result<()> {
    let io_err = |source| StepLogError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(io_err)?;
    for line in lines {
        writeln!(file, "{}", line).map_err(io_err)?;
    }
    debug!(path = %path.display(), lines = lines.len(), "appended to log");
    Ok(())
}
