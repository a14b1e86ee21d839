//! Submission of rendered labels to the print spooler.
//!
//! The dispatcher never shells out directly; it talks to a
//! [`PrintSubmitter`]. [`LprSubmitter`] is the production implementation and
//! runs the spooler's `lpr` command. Any closure with the same signature is
//! also a submitter, which keeps test doubles short.

use std::{
    path::{Path, PathBuf},
    process::Command,
};

use log::debug;

use crate::error::{LabelError, Result};

/// Media option for 36 x 89 mm address labels.
pub const LABEL_MEDIA: &str = "media=w36h89";

/// Spooler command used when none is configured.
pub const DEFAULT_PRINT_COMMAND: &str = "lpr";

/// Something that can send a rendered label file to a printer.
pub trait PrintSubmitter: Send + Sync {
    /// Submits the file at `path` to `printer` with the given media option.
    ///
    /// # Errors
    ///
    /// Returns `LabelError::Submission` if the job could not be handed over.
    fn submit(&self, path: &Path, printer: &str, media: &str) -> Result<()>;
}

impl<F> PrintSubmitter for F
where
    F: Fn(&Path, &str, &str) -> Result<()> + Send + Sync,
{
    fn submit(&self, path: &Path, printer: &str, media: &str) -> Result<()> {
        self(path, printer, media)
    }
}

/// Submits jobs by running `lpr <file> -P <printer> -o <media>`.
#[derive(Debug, Clone)]
pub struct LprSubmitter {
    command: String,
}

impl LprSubmitter {
    /// Creates a submitter that runs the given spooler command.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// The spooler command this submitter runs.
    pub fn command(&self) -> &str {
        &self.command
    }
}

impl Default for LprSubmitter {
    fn default() -> Self {
        Self::new(DEFAULT_PRINT_COMMAND)
    }
}

impl PrintSubmitter for LprSubmitter {
    fn submit(&self, path: &Path, printer: &str, media: &str) -> Result<()> {
        debug!(
            "Running {} {} -P {printer} -o {media}",
            self.command,
            path.display()
        );

        let failure = |reason: String| LabelError::Submission {
            path: PathBuf::from(path),
            printer: printer.to_string(),
            reason,
        };

        let status = Command::new(&self.command)
            .arg(path)
            .arg("-P")
            .arg(printer)
            .arg("-o")
            .arg(media)
            .status()
            .map_err(|e| failure(format!("could not run '{}': {e}", self.command)))?;

        if status.success() {
            Ok(())
        } else {
            Err(failure(format!("'{}' exited with {status}", self.command)))
        }
    }
}
