//! Command handlers for the Labelstation CLI
//!
//! Each command converts its clap arguments into core types and hands them
//! to the [`Dispatcher`]. Printing blocks on file I/O and the spooler, so
//! the handlers move that work onto tokio's blocking pool.
//!
//! ```text
//! User Input → CLI Args (clap) → LabelRecord → Dispatcher → .ps file → lpr
//! ```

use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context, Result};
use clap::Args;
use labelstation_core::{copies_for, Dispatcher, LabelRecord, PrintWorker};
use log::{info, warn};
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    task,
};

/// Arguments for printing a single label
#[derive(Args, Debug)]
pub struct PrintArgs {
    /// Read the label record from a JSON file ("-" for stdin)
    #[arg(
        long,
        conflicts_with_all = [
            "id",
            "title",
            "first_name",
            "last_name",
            "notes",
            "label_type",
            "no_photos",
            "allergies",
        ]
    )]
    pub json: Option<PathBuf>,

    /// Identifier printed as the access code; also names the output file
    #[arg(long, required_unless_present = "json")]
    pub id: Option<String>,

    /// Label heading
    #[arg(long, required_unless_present = "json")]
    pub title: Option<String>,

    #[arg(long, default_value = "")]
    pub first_name: String,

    #[arg(long, default_value = "")]
    pub last_name: String,

    /// Free text printed in the notes area
    #[arg(long, default_value = "")]
    pub notes: String,

    /// Label type; "Attendance" adds a guardian copy
    #[arg(long, default_value = "")]
    pub label_type: String,

    /// Mark the holder as not to be photographed
    #[arg(long)]
    pub no_photos: bool,

    /// Mark the holder as having allergies
    #[arg(long)]
    pub allergies: bool,

    /// Number of copies; defaults to the label type's copy policy
    #[arg(long)]
    pub copies: Option<u32>,
}

impl PrintArgs {
    /// Builds the label record these arguments describe.
    pub fn into_record(self) -> Result<LabelRecord> {
        if let Some(source) = self.json {
            return read_record(&source);
        }

        Ok(LabelRecord {
            label_type: self.label_type,
            title: self.title.unwrap_or_default(),
            id: self.id.unwrap_or_default(),
            first_name: self.first_name,
            last_name: self.last_name,
            additional_info: self.notes,
            can_photograph: !self.no_photos,
            has_allergies: self.allergies,
        })
    }
}

fn read_record(source: &Path) -> Result<LabelRecord> {
    let json = if source.as_os_str() == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read label record from stdin")?;
        buffer
    } else {
        fs::read_to_string(source)
            .with_context(|| format!("Failed to read label record {}", source.display()))?
    };
    LabelRecord::from_json(&json).context("Failed to parse label record")
}

/// CLI handler that owns the configured dispatcher.
pub struct Cli {
    dispatcher: Arc<Dispatcher>,
}

impl Cli {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
        }
    }

    /// Prints one label and lists the files rendered for it.
    pub async fn print(&self, args: PrintArgs) -> Result<()> {
        // Reading the record may block on stdin.
        let dispatcher = Arc::clone(&self.dispatcher);
        let report = task::spawn_blocking(move || -> Result<_> {
            let requested = args.copies;
            let record = args.into_record()?;
            let copies = requested.unwrap_or_else(|| copies_for(&record.label_type));

            info!("Printing {copies} copies of label {}", record.id);

            dispatcher
                .print(&record, copies)
                .context("Failed to print label")
        })
        .await
        .context("Print task failed")??;

        println!("{report}");
        Ok(())
    }

    /// Feeds JSON label records from stdin to a print worker until end of
    /// input.
    pub async fn serve(&self, queue_size: usize) -> Result<()> {
        let (sender, receiver) = PrintWorker::channel(queue_size.max(1));
        let worker = tokio::spawn(PrintWorker::new(Arc::clone(&self.dispatcher)).run(receiver));

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut rejected = 0usize;
        while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
            if line.trim().is_empty() {
                continue;
            }
            match LabelRecord::from_json(&line) {
                Ok(record) => {
                    if sender.send(record).await.is_err() {
                        warn!("Print worker stopped, discarding remaining input");
                        break;
                    }
                }
                Err(e) => {
                    warn!("Skipping malformed label record: {e}");
                    rejected += 1;
                }
            }
        }
        drop(sender);

        let summary = worker.await.context("Print worker failed")?;
        println!("{summary}, {rejected} rejected");
        Ok(())
    }
}
