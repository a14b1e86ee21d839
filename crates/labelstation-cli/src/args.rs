use std::path::PathBuf;

use clap::{Parser, Subcommand};
use labelstation_core::{dispatcher::DEFAULT_PRINTER, submit::DEFAULT_PRINT_COMMAND};

use crate::cli::PrintArgs;

/// Render and print attendance labels
///
/// Labelstation fills a PostScript label template with the fields of a label
/// record, writes the result to the output directory and submits it to a
/// CUPS printer with `lpr`. Attendance labels print a second, guardian copy.
#[derive(Parser)]
#[command(version, about, name = "labelstation")]
pub struct Args {
    /// Path to the PostScript label template. Defaults to
    /// $XDG_CONFIG_HOME/labelstation/label.ps
    #[arg(long, global = true)]
    pub template: Option<PathBuf>,

    /// Directory rendered labels are written to. Defaults to
    /// $XDG_DATA_HOME/labelstation/labels
    #[arg(long, global = true)]
    pub output_dir: Option<PathBuf>,

    /// Name of the CUPS printer to submit labels to
    #[arg(long, global = true, env = "LABELSTATION_PRINTER", default_value = DEFAULT_PRINTER)]
    pub printer: String,

    /// Render labels without sending them to the printer
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Spooler command used to submit labels
    #[arg(long, global = true, default_value = DEFAULT_PRINT_COMMAND)]
    pub print_command: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the Labelstation CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Print a single label
    #[command(alias = "p")]
    Print(PrintArgs),
    /// Print label records read from stdin, one JSON object per line
    Serve {
        /// Number of jobs that may wait for the printer
        #[arg(long, default_value_t = 32)]
        queue_size: usize,
    },
}
