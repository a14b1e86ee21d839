//! Label rendering and print dispatch.
//!
//! The [`Dispatcher`] owns a parsed label template and everything needed to
//! turn a [`LabelRecord`] into printed labels. Each call to
//! [`Dispatcher::print`] walks the copies of one job:
//!
//! ```text
//! ┌───────────┐    ┌───────────┐    ┌────────────┐    ┌────────────┐
//! │ Preparing │───▶│ Rendering │───▶│ Submitting │───▶│  Success   │
//! │ LabelView │    │  .ps file │    │  (lpr)     │    │            │
//! └───────────┘    └───────────┘    └────────────┘    └────────────┘
//!                        │                 │
//!                        └────────┬────────┘
//!                                 ▼
//!                             ┌────────┐
//!                             │ Failed │
//!                             └────────┘
//! ```
//!
//! The first failure of any kind is logged to the error sink and ends the
//! job; remaining copies are not attempted and nothing is retried. When
//! dispatch is disabled every copy is rendered but none is submitted.
//!
//! # Usage Examples
//!
//! ```rust,no_run
//! use labelstation_core::{DispatcherBuilder, LabelRecord};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dispatcher = DispatcherBuilder::new()
//!     .with_template_path("/etc/labelstation/label.ps")
//!     .with_output_dir("/var/spool/labelstation")
//!     .with_printer("Front_Desk")
//!     .build()?;
//!
//! let record = LabelRecord::new("A123", "Visitor");
//! let report = dispatcher.print(&record, 2)?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    sync::Arc,
};

use log::debug;

pub mod builder;
pub mod clock;


pub use builder::{DispatcherBuilder, DEFAULT_PRINTER};
pub use clock::{output_file_path, MonotonicClock};

use crate::{
    error::{LabelError, Result},
    models::{LabelRecord, LabelView},
    sink::LogSink,
    submit::PrintSubmitter,
    template::LabelTemplate,
};

/// Message sent to the info sink after a successful submission.
pub const PRINTED_MESSAGE: &str = "Printed label successfully. Please collect at Label Station.";

/// Renders label records and submits them to a printer.
pub struct Dispatcher {
    pub(crate) dispatch_enabled: bool,
    pub(crate) printer: String,
    pub(crate) media: String,
    pub(crate) template: LabelTemplate,
    pub(crate) output_dir: PathBuf,
    pub(crate) info_log: Arc<dyn LogSink>,
    pub(crate) error_log: Arc<dyn LogSink>,
    pub(crate) submitter: Arc<dyn PrintSubmitter>,
    pub(crate) clock: MonotonicClock,
}

/// Outcome of a successful [`Dispatcher::print`] call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrintReport {
    /// Files written, one per copy, in copy order
    pub rendered: Vec<PathBuf>,
    /// Number of files handed to the printer
    pub submitted: usize,
}

impl Dispatcher {
    /// Creates a dispatcher from the template at `template_path`.
    ///
    /// Labels are written to `output_dir` and submitted to `printer` with
    /// `lpr` unless `dispatch_enabled` is false.
    ///
    /// # Errors
    ///
    /// Returns `LabelError::Configuration` if the template cannot be read or
    /// parsed.
    pub fn new<P, Q>(
        dispatch_enabled: bool,
        printer: impl Into<String>,
        template_path: P,
        output_dir: Q,
        info_log: Arc<dyn LogSink>,
        error_log: Arc<dyn LogSink>,
    ) -> Result<Self>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        DispatcherBuilder::new()
            .with_dispatch(dispatch_enabled)
            .with_printer(printer)
            .with_template_path(template_path)
            .with_output_dir(output_dir)
            .with_info_log(info_log)
            .with_error_log(error_log)
            .build()
    }

    /// Renders `copies` copies of `record` and, when dispatch is enabled,
    /// submits each one to the printer.
    ///
    /// Copies after the first carry the guardian title. The record itself is
    /// never modified.
    ///
    /// # Errors
    ///
    /// Returns `LabelError::InvalidRecord` if the identifier cannot be used
    /// in a file name, `LabelError::TemplateRender` if a label file cannot be
    /// written, and `LabelError::Submission` if the printer rejects a copy.
    /// Every error is also reported to the error sink.
    pub fn print(&self, record: &LabelRecord, copies: u32) -> Result<PrintReport> {
        record.validate().inspect_err(|e| self.report_failure(e))?;

        let mut report = PrintReport::default();
        for copy in 1..=copies {
            self.info_log
                .log(&format!("Printing label {copy} of {copies}: {record} ..."));

            let path = self
                .render_copy(record, copy)
                .inspect_err(|e| self.report_failure(e))?;
            report.rendered.push(path.clone());

            if !self.dispatch_enabled {
                debug!("Dispatch disabled, not submitting {}", path.display());
                continue;
            }

            self.submitter
                .submit(&path, &self.printer, &self.media)
                .inspect_err(|e| self.report_failure(e))?;
            report.submitted += 1;
            self.info_log.log(PRINTED_MESSAGE);
        }

        Ok(report)
    }

    /// Renders one copy of `record` to a new file in the output directory
    /// and returns its path.
    ///
    /// # Errors
    ///
    /// Returns `LabelError::TemplateRender` if the file cannot be written.
    pub fn render_copy(&self, record: &LabelRecord, copy: u32) -> Result<PathBuf> {
        let rendered_at = self.clock.now();
        let view = LabelView::for_copy(record, copy, &rendered_at);
        let path = output_file_path(&self.output_dir, &record.id, &rendered_at);

        debug!("Rendering copy {copy} of label {} to {}", record.id, path.display());

        let file = File::create(&path).map_err(|e| LabelError::render(&path, e))?;
        let mut writer = BufWriter::new(file);
        self.template
            .render(&view, &mut writer)
            .and_then(|()| writer.flush())
            .map_err(|e| LabelError::render(&path, e))?;

        Ok(path)
    }

    /// Whether rendered labels are submitted to the printer.
    pub fn dispatch_enabled(&self) -> bool {
        self.dispatch_enabled
    }

    pub fn printer(&self) -> &str {
        &self.printer
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn report_failure(&self, error: &LabelError) {
        self.error_log.log(&format!("Error printing label: {error}"));
    }
}
