// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Cardpress — batch ID card and certificate generator
//
// Entry point. Initialises logging, loads the asset layout, resolves the run
// mode from the command line, and hands records to the batch dispatcher.

mod cli;
mod services;
#[cfg(test)]
mod test_support;

use std::io::{self, Write};
use std::process::ExitCode;

use cardpress_core::AssetLayout;
use cardpress_core::error::{CardpressError, Result};
use cardpress_core::human_errors::humanize_error;
use cardpress_core::types::{RecordOutcome, RunSummary};
use cardpress_document::CardGenerator;
use clap::Parser;

use cli::Cli;
use services::batch::{self, RunMode};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    conclude(run(cli), &mut io::stdout(), &mut io::stderr())
}

/// Turn the result of a run into the process exit code, printing the error
/// line if there is one.
fn conclude(result: Result<()>, stdout: &mut impl Write, stderr: &mut impl Write) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        // Missing argument combinations are reported, not raised.
        Err(err @ CardpressError::InvalidArguments(_)) => {
            let _ = writeln!(stdout, "{}", humanize_error(&err));
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "run aborted");
            let _ = writeln!(stderr, "{}", humanize_error(&err));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut layout = match &cli.config {
        Some(path) => AssetLayout::load(path)?,
        None => AssetLayout::default(),
    };
    if let Some(font) = cli.font_path {
        // Relative to where the command was run, not to the asset root.
        layout.font_path = std::env::current_dir()?.join(font);
    }

    let (kind, mode) = cli.command.resolve(&layout)?;
    tracing::info!(kind = kind.label(), "Cardpress starting");

    let generator = CardGenerator::new(layout, kind);
    let summary = batch::run(&generator, &mode)?;
    report(&mode, &summary);
    Ok(())
}

/// Print the outcome for the person running the command.
fn report(mode: &RunMode, summary: &RunSummary) {
    match mode {
        RunMode::Single { .. } => {
            for outcome in &summary.outcomes {
                match outcome {
                    RecordOutcome::Generated { output, .. } => {
                        println!("Saved {}", output.display());
                    }
                    RecordOutcome::Skipped { reason, .. } => println!("Error: {reason}"),
                }
            }
        }
        RunMode::Csv { .. } | RunMode::Directory { .. } => println!("{summary}"),
    }
}
