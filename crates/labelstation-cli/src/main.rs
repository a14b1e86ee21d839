//! Labelstation CLI Application
//!
//! Command-line interface for rendering and printing attendance labels.

mod args;
mod cli;
mod config;

use anyhow::Result;
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use config::Settings;
use log::info;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        template,
        output_dir,
        printer,
        dry_run,
        print_command,
        command,
    } = Args::parse();

    let settings = Settings::resolve(template, output_dir, printer, dry_run, print_command)?;
    let cli = Cli::new(settings.dispatcher()?);

    info!(
        "Labelstation started (printer {}, dispatch {})",
        settings.printer,
        if settings.dispatch { "enabled" } else { "disabled" }
    );

    match command {
        Print(args) => cli.print(args).await,
        Serve { queue_size } => cli.serve(queue_size).await,
    }
}
