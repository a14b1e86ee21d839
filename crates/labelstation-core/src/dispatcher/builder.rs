//! Builder for creating and configuring Dispatcher instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use super::{clock::MonotonicClock, Dispatcher};
use crate::{
    error::{LabelError, Result},
    sink::{ErrorLog, InfoLog, LogSink},
    submit::{LprSubmitter, PrintSubmitter, LABEL_MEDIA},
    template::LabelTemplate,
};

/// Printer name used when none is configured.
pub const DEFAULT_PRINTER: &str = "Label";

/// Builder for creating and configuring Dispatcher instances.
#[derive(Clone)]
pub struct DispatcherBuilder {
    dispatch_enabled: bool,
    printer: String,
    media: String,
    template_path: Option<PathBuf>,
    output_dir: PathBuf,
    info_log: Arc<dyn LogSink>,
    error_log: Arc<dyn LogSink>,
    submitter: Arc<dyn PrintSubmitter>,
}

impl DispatcherBuilder {
    /// Creates a new builder with default settings: dispatch enabled,
    /// printer [`DEFAULT_PRINTER`], output to the current directory, `lpr`
    /// for submission and the `log` facade for both sinks.
    pub fn new() -> Self {
        Self {
            dispatch_enabled: true,
            printer: DEFAULT_PRINTER.to_string(),
            media: LABEL_MEDIA.to_string(),
            template_path: None,
            output_dir: PathBuf::from("."),
            info_log: Arc::new(InfoLog),
            error_log: Arc::new(ErrorLog),
            submitter: Arc::new(LprSubmitter::default()),
        }
    }

    /// Enables or disables submission to the printer. Labels are still
    /// rendered when dispatch is disabled.
    pub fn with_dispatch(mut self, enabled: bool) -> Self {
        self.dispatch_enabled = enabled;
        self
    }

    pub fn with_printer(mut self, printer: impl Into<String>) -> Self {
        self.printer = printer.into();
        self
    }

    /// Overrides the media option passed to the spooler.
    pub fn with_media(mut self, media: impl Into<String>) -> Self {
        self.media = media.into();
        self
    }

    pub fn with_template_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.template_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the directory rendered labels are written to.
    pub fn with_output_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.output_dir = dir.as_ref().to_path_buf();
        self
    }

    pub fn with_info_log(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.info_log = sink;
        self
    }

    pub fn with_error_log(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.error_log = sink;
        self
    }

    /// Replaces the `lpr` submitter.
    pub fn with_submitter(mut self, submitter: Arc<dyn PrintSubmitter>) -> Self {
        self.submitter = submitter;
        self
    }

    /// Loads the template and builds the dispatcher.
    ///
    /// # Errors
    ///
    /// Returns `LabelError::Configuration` if no template path was given or
    /// the template cannot be read or parsed.
    pub fn build(self) -> Result<Dispatcher> {
        let template_path = self
            .template_path
            .ok_or_else(|| LabelError::configuration("No label template path configured"))?;
        let template = LabelTemplate::load(&template_path)?;

        log::debug!(
            "Loaded label template {} with {} placeholders",
            template_path.display(),
            template.placeholders().count()
        );

        Ok(Dispatcher {
            dispatch_enabled: self.dispatch_enabled,
            printer: self.printer,
            media: self.media,
            template,
            output_dir: self.output_dir,
            info_log: self.info_log,
            error_log: self.error_log,
            submitter: self.submitter,
            clock: MonotonicClock::default(),
        })
    }
}

impl Default for DispatcherBuilder {
    fn default() -> Self {
        Self::new()
    }
}
