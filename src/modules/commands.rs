use crate::modules::{
    activity::{ActivityArgs, write_activity},
    cli::{ActivityOptions, ColorMode, ResultOptions},
    console::{Console, ConsoleColor},
    env::{
        ENV_COLOR_MODE, ENV_HIGHLIGHT_COLOR, ENV_LEVEL, ENV_LOG_PATH, ENV_TEXT_COLOR, ENV_TRACE,
        resolve_parsed, resolve_path,
    },
    error::Result,
    outcome::Outcome,
    result::{ResultArgs, write_result},
};
use std::collections::HashMap;
use thiserror::Error;

/// Error text handed over by a calling script, logged exactly as given.
#[derive(Error, Debug)]
#[error("{0}")]
pub struct ScriptError(pub String);

pub fn apply_color_mode(
    env_overrides: &HashMap<String, String>,
    cli_value: Option<ColorMode>,
) -> Result<()> {
    let mode = resolve_parsed(cli_value, env_overrides, ENV_COLOR_MODE, "color", ColorMode::Auto)?;
    match mode {
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Never => colored::control::set_override(false),
        ColorMode::Auto => colored::control::unset_override(),
    }
    Ok(())
}

pub fn activity(
    console: &mut dyn Console,
    env_overrides: &HashMap<String, String>,
    opts: ActivityOptions,
) -> Result<()> {
    let log_path = resolve_path(opts.log_path, env_overrides, ENV_LOG_PATH, "log path")?;
    let level = resolve_parsed(opts.level, env_overrides, ENV_LEVEL, "level", 0)?;
    let text_color = resolve_parsed(
        opts.text_color,
        env_overrides,
        ENV_TEXT_COLOR,
        "text color",
        ConsoleColor::White,
    )?;
    let highlight_color = resolve_parsed(
        opts.highlight_color,
        env_overrides,
        ENV_HIGHLIGHT_COLOR,
        "highlight color",
        ConsoleColor::Cyan,
    )?;

    write_activity(
        console,
        &ActivityArgs {
            text_color,
            highlight_color,
            level,
            newline: opts.newline,
            ..ActivityArgs::new(&opts.message, &log_path)
        },
    )
}

pub fn result(
    console: &mut dyn Console,
    env_overrides: &HashMap<String, String>,
    opts: ResultOptions,
) -> Result<()> {
    let outcome = Outcome::from_selection(opts.pass, opts.error, opts.warning)?;
    let log_path = resolve_path(opts.log_path, env_overrides, ENV_LOG_PATH, "log path")?;
    let level = resolve_parsed(opts.level, env_overrides, ENV_LEVEL, "level", 0)?;
    let underlying_error = opts.underlying_error.map(ScriptError);

    write_result(
        console,
        &ResultArgs {
            level,
            pass_message: &opts.pass_message,
            error_message: &opts.error_message,
            underlying_error: underlying_error
                .as_ref()
                .map(|e| e as &dyn std::error::Error),
            no_console_output: opts.no_console_output,
            ..ResultArgs::new(&opts.log_message, &log_path, outcome)
        },
    )
}

pub fn print_params_table() -> Result<()> {
    let rows = vec![
        (
            "--env KEY=VALUE",
            "Override environment values (repeatable)",
        ),
        ("--color", "Console colors: auto, always, never"),
        (ENV_COLOR_MODE, "Console colors (env)"),
        (ENV_TRACE, "Diagnostic filter, e.g. debug (env)"),
        ("activity <MESSAGE>", "Print a step line; ;text; is highlighted"),
        ("--log-path", "Log file to append to"),
        (ENV_LOG_PATH, "Log file to append to (env)"),
        ("--level", "Indent depth, one dash per level"),
        (ENV_LEVEL, "Indent depth (env)"),
        ("--text-color", "Color of plain text [White]"),
        (ENV_TEXT_COLOR, "Color of plain text (env)"),
        ("--highlight-color", "Color of highlighted text [Cyan]"),
        (ENV_HIGHLIGHT_COLOR, "Color of highlighted text (env)"),
        ("--newline", "End the console line after the step"),
        ("result <LOG_MESSAGE>", "Print and log the outcome of a step"),
        ("--log-path", "Log file to append to"),
        (ENV_LOG_PATH, "Log file to append to (env)"),
        ("--level", "Indent depth, one dash per level"),
        (ENV_LEVEL, "Indent depth (env)"),
        ("--pass", "Step succeeded (green)"),
        ("--error", "Step failed (red)"),
        ("--warning <MESSAGE>", "Step finished with a warning (yellow)"),
        ("--pass-message", "Console text on pass [Done!]"),
        ("--error-message", "Console text on error [Failed!]"),
        ("--underlying-error", "Error text logged on a second line"),
        ("--no-console-output", "Only write to the log file"),
        ("print-params", "Show this table"),
    ];

    let name_width = rows.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    let desc_width = rows.iter().map(|(_, desc)| desc.len()).max().unwrap_or(0);
    let name_width = name_width.max("Parameter/ENV".len());
    let desc_width = desc_width.max("Description".len());

    let border = format!(
        "+-{}-+-{}-+",
        "-".repeat(name_width),
        "-".repeat(desc_width)
    );
    println!("{}", border);
    println!(
        "| {:width$} | {:desc_width$} |",
        "Parameter/ENV",
        "Description",
        width = name_width,
        desc_width = desc_width
    );
    println!("{}", border);
    for (name, desc) in rows {
        println!(
            "| {:width$} | {:desc_width$} |",
            name,
            desc,
            width = name_width,
            desc_width = desc_width
        );
    }
    println!("{}", border);
    Ok(())
}
