use crate::modules::{
    console::{Console, ConsoleColor},
    error::{Result, require},
    format::{activity_prefix, check_level, dashes, segments, strip_markers},
    log::append_lines,
};
use chrono::{DateTime, Local};
use std::path::Path;

const ELLIPSIS: &str = "...";

#[derive(Debug, Clone)]
pub struct ActivityArgs<'a> {
    pub message: &'a str,
    pub log_path: &'a Path,
    pub text_color: ConsoleColor,
    pub highlight_color: ConsoleColor,
    pub level: u32,
    pub newline: bool,
}

impl<'a> ActivityArgs<'a> {
    pub fn new(message: &'a str, log_path: &'a Path) -> Self {
        Self {
            message,
            log_path,
            text_color: ConsoleColor::White,
            highlight_color: ConsoleColor::Cyan,
            level: 0,
            newline: false,
        }
    }
}

/// Prints a step line such as `--Copying ;app.toml;...` with the marked
/// parts highlighted, then logs it without markers.
pub fn write_activity(console: &mut dyn Console, args: &ActivityArgs<'_>) -> Result<()> {
    write_activity_at(console, args, Local::now())
}

pub fn write_activity_at(
    console: &mut dyn Console,
    args: &ActivityArgs<'_>,
    now: DateTime<Local>,
) -> Result<()> {
    require(args.message, "message")?;
    require(&args.log_path.to_string_lossy(), "log path")?;
    check_level(args.level)?;

    if args.level > 0 {
        console.write(&dashes(args.level), args.text_color);
    }
    for segment in segments(args.message) {
        let color = if segment.highlighted {
            args.highlight_color
        } else {
            args.text_color
        };
        console.write(segment.text, color);
    }
    if args.newline {
        console.write_line(ELLIPSIS, args.text_color);
    } else {
        console.write(ELLIPSIS, args.text_color);
    }

    let line = format!(
        "{}{}",
        activity_prefix(args.level, now),
        strip_markers(args.message)
    );
    append_lines(args.log_path, &[line])
}
