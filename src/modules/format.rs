use crate::modules::error::{Result, StepLogError};
use chrono::{DateTime, Local};
use tracing::trace;

pub const MARKER: char = ';';
pub const MAX_LEVEL: u32 = 64;
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub highlighted: bool,
}

/// Splits `message` on `;`. Odd-indexed pieces (between a marker pair) are
/// highlighted. With an odd number of markers the trailing piece stays
/// highlighted up to the end of the message.
pub fn segments(message: &str) -> Vec<Segment<'_>> {
    let parsed: Vec<Segment<'_>> = message
        .split(MARKER)
        .enumerate()
        .map(|(i, text)| Segment {
            text,
            highlighted: i % 2 == 1,
        })
        .collect();
    trace!(count = parsed.len(), "split message into segments");
    parsed
}

pub fn strip_markers(message: &str) -> String {
    message.replace(MARKER, "")
}

pub fn check_level(level: u32) -> Result<u32> {
    if level > MAX_LEVEL {
        return Err(StepLogError::InvalidValue {
            name: "level",
            reason: format!("{} is deeper than {}", level, MAX_LEVEL),
        });
    }
    Ok(level)
}

pub fn dashes(level: u32) -> String {
    "-".repeat(level as usize)
}

pub fn timestamp_prefix(now: DateTime<Local>) -> String {
    format!("{} - ", now.format(TIMESTAMP_FORMAT))
}

/// Activity lines are indented with dashes, or stamped with the time at level 0.
pub fn activity_prefix(level: u32, now: DateTime<Local>) -> String {
    if level > 0 {
        dashes(level)
    } else {
        timestamp_prefix(now)
    }
}
