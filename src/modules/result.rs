use crate::modules::{
    console::Console,
    error::{Result, require},
    format::{check_level, dashes},
    log::append_lines,
    outcome::Outcome,
};
use std::{error::Error, path::Path};

pub const DEFAULT_PASS_MESSAGE: &str = "Done!";
pub const DEFAULT_ERROR_MESSAGE: &str = "Failed!";

pub struct ResultArgs<'a> {
    pub log_message: &'a str,
    pub log_path: &'a Path,
    pub level: u32,
    pub outcome: Outcome,
    pub pass_message: &'a str,
    pub error_message: &'a str,
    pub underlying_error: Option<&'a dyn Error>,
    pub no_console_output: bool,
}

impl<'a> ResultArgs<'a> {
    pub fn new(log_message: &'a str, log_path: &'a Path, outcome: Outcome) -> Self {
        Self {
            log_message,
            log_path,
            level: 0,
            outcome,
            pass_message: DEFAULT_PASS_MESSAGE,
            error_message: DEFAULT_ERROR_MESSAGE,
            underlying_error: None,
            no_console_output: false,
        }
    }
}

/// Prints the colored outcome of a step and logs it, plus the underlying
/// error's text on a second line when one is given.
pub fn write_result(console: &mut dyn Console, args: &ResultArgs<'_>) -> Result<()> {
    require(args.log_message, "log message")?;
    require(&args.log_path.to_string_lossy(), "log path")?;
    check_level(args.level)?;

    let prefix = format!("{}{}", dashes(args.level), args.outcome.log_tag());

    if !args.no_console_output {
        let text = args
            .outcome
            .console_text(args.pass_message, args.error_message);
        console.write_line(&text, args.outcome.color());
    }

    let mut lines = vec![format!("{} {}", prefix, args.log_message)];
    if let Some(err) = args.underlying_error {
        lines.push(format!("{} {}", prefix, err));
    }
    append_lines(args.log_path, &lines)
}
