mod modules;

use clap::Parser;
use modules::cli::{ActivityOptions, Cli, Commands, ResultOptions};
use modules::commands::{activity, apply_color_mode, print_params_table, result};
use modules::console::Terminal;
use modules::env::{ENV_TRACE, lookup};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), String> {
    let cli = Cli::parse();
    let env_overrides = modules::env::to_env_map(&cli.env_overrides);

    // Diagnostics go to stderr; stdout carries the step and result lines.
    let filter = lookup(&env_overrides, ENV_TRACE).unwrap_or_else(|| "warn".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    apply_color_mode(&env_overrides, cli.color).map_err(|e| e.to_string())?;
    let mut console = Terminal::stdout();

    let outcome = match cli.command {
        Commands::Activity {
            message,
            log_path,
            level,
            text_color,
            highlight_color,
            newline,
        } => activity(
            &mut console,
            &env_overrides,
            ActivityOptions {
                message,
                log_path,
                level,
                text_color,
                highlight_color,
                newline,
            },
        ),
        Commands::Result {
            log_message,
            log_path,
            level,
            pass,
            error,
            warning,
            pass_message,
            error_message,
            underlying_error,
            no_console_output,
        } => result(
            &mut console,
            &env_overrides,
            ResultOptions {
                log_message,
                log_path,
                level,
                pass,
                error,
                warning,
                pass_message,
                error_message,
                underlying_error,
                no_console_output,
            },
        ),
        Commands::PrintParams => print_params_table(),
    };
    outcome.map_err(|e| e.to_string())
}
