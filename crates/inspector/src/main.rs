//! `graphql-inspector` action entry point.

// The action talks to the runner through stdout workflow commands
#![allow(clippy::print_stdout, clippy::print_stderr)]

use inspector::cli::{self, CliError, EXIT_FAILED, exit_code_for};
use inspector::tracing::{TracingConfig, init_tracing};
use inspector::{execute, exit_code_for_outcome};
use inspector_github::error_command;
use miette::Report;
use std::io::{self, Write};

fn main() {
    // NOTE: eprintln! in the panic hook; tracing may be unusable during a panic.
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {panic_info}");
        eprintln!("Internal error occurred. Run with RUST_LOG=debug for more information.");
    }));

    let cli = cli::parse();

    let tracing_config = TracingConfig {
        format: cli.log_format,
        level: cli.level.into(),
        filter: None,
    };
    if let Err(e) = init_tracing(tracing_config) {
        eprintln!("{e:?}");
    }

    let rt = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Fatal error: Failed to create tokio runtime: {e}");
            std::process::exit(EXIT_FAILED);
        }
    };

    let exit_code = rt.block_on(async {
        match execute(&cli).await {
            Ok(outcome) => {
                if outcome.failed() {
                    println!("{}", error_command(&outcome.title));
                }
                exit_code_for_outcome(&outcome)
            }
            Err(err) => {
                render_error(&err);
                exit_code_for(&err)
            }
        }
    });

    std::process::exit(exit_code);
}

fn render_error(err: &CliError) {
    println!("{}", error_command(err.message()));

    let report = Report::new(err.clone());
    eprintln!("{report:?}");
    let _ = io::stderr().flush();
}
