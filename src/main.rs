//! appboot CLI entry point.

use std::process::ExitCode;

use appboot::cli::{self, Cli};
use appboot::ui::{should_use_colors, TerminalUI};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Logs go to stderr so the application's stdout stays untouched.
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// ANSI styling follows the same decision as the rest of appboot's output.
fn init_tracing(debug: bool, colors: bool) {
    let filter = if debug {
        EnvFilter::new("appboot=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("appboot=warn"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(colors)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // --no-color must not leak into the application's environment.
    let colors = !cli.no_color && should_use_colors();
    init_tracing(cli.debug, colors);

    tracing::debug!("appboot starting with args: {:?}", cli);

    // Determine project root
    let project_root = cli
        .project
        .as_ref()
        .cloned()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    let mut ui = TerminalUI::new(cli.output_mode(), colors);
    let code = cli::run(&cli, project_root, &mut ui);

    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
