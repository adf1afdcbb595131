use crate::modules::console::ConsoleColor;
use clap::{Parser, Subcommand, ValueEnum};
use std::{path::PathBuf, str::FromStr};

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[arg(
        long = "env",
        global = true,
        value_parser = crate::modules::env::parse_key_val,
        help = "Provide environment overrides as KEY=VALUE (repeatable)"
    )]
    pub env_overrides: Vec<(String, String)>,

    #[arg(long, global = true, help = "When to color console output")]
    pub color: Option<ColorMode>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s, true)
    }
}

#[derive(Debug)]
pub struct ActivityOptions {
    pub message: String,
    pub log_path: Option<PathBuf>,
    pub level: Option<u32>,
    pub text_color: Option<ConsoleColor>,
    pub highlight_color: Option<ConsoleColor>,
    pub newline: bool,
}

#[derive(Debug)]
pub struct ResultOptions {
    pub log_message: String,
    pub log_path: Option<PathBuf>,
    pub level: Option<u32>,
    pub pass: bool,
    pub error: bool,
    pub warning: Option<String>,
    pub pass_message: String,
    pub error_message: String,
    pub underlying_error: Option<String>,
    pub no_console_output: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a step line, leaving the cursor on it unless --newline is given
    Activity {
        message: String,
        #[arg(long)]
        log_path: Option<PathBuf>,
        #[arg(long)]
        level: Option<u32>,
        #[arg(long)]
        text_color: Option<ConsoleColor>,
        #[arg(long)]
        highlight_color: Option<ConsoleColor>,
        #[arg(long)]
        newline: bool,
    },
    /// Print the outcome of a step and log it
    Result {
        log_message: String,
        #[arg(long)]
        log_path: Option<PathBuf>,
        #[arg(long)]
        level: Option<u32>,
        #[arg(long)]
        pass: bool,
        #[arg(long)]
        error: bool,
        #[arg(long, value_name = "MESSAGE")]
        warning: Option<String>,
        #[arg(long, default_value = crate::modules::result::DEFAULT_PASS_MESSAGE)]
        pass_message: String,
        #[arg(long, default_value = crate::modules::result::DEFAULT_ERROR_MESSAGE)]
        error_message: String,
        #[arg(long, value_name = "TEXT")]
        underlying_error: Option<String>,
        #[arg(long)]
        no_console_output: bool,
    },
    PrintParams,
}
