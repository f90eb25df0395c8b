//! Outfitter CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use outfitter::cli::{Cli, CommandDispatcher};
use outfitter::ui::{create_ui, OutputMode};
use outfitter::OutfitterError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Exit code for operator-initiated cancellation.
const EXIT_CANCELLED: u8 = 130;

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("outfitter=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("outfitter=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Outfitter starting with args: {:?}", cli);

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Normal
    };

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Determine project directory
    let project_dir = cli
        .dir
        .as_ref()
        .cloned()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    let mut ui = create_ui(true, output_mode);

    let dispatcher = CommandDispatcher::new(project_dir);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(OutfitterError::Cancelled) => {
            ui.error("Setup cancelled by user");
            ui.message("Progress has been saved. Run outfitter again to resume.");
            ExitCode::from(EXIT_CANCELLED)
        }
        Err(e) => {
            tracing::error!("Setup failed: {}", e);
            ui.error(&format!("Setup failed: {}", e));
            ui.message("Progress has been saved. Run outfitter again to resume.");
            ExitCode::from(1)
        }
    }
}
