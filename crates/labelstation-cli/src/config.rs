//! Resolution of command-line settings into a configured dispatcher.

use std::{fs, path::PathBuf, sync::Arc};

use anyhow::{anyhow, Context, Result};
use labelstation_core::{Dispatcher, DispatcherBuilder, LprSubmitter};
use log::debug;

const APP_NAME: &str = "labelstation";
const TEMPLATE_FILE: &str = "label.ps";
const LABELS_DIR: &str = "labels";

/// Fully resolved runtime settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub template: PathBuf,
    pub output_dir: PathBuf,
    pub printer: String,
    pub dispatch: bool,
    pub print_command: String,
}

impl Settings {
    /// Fills in XDG defaults for paths that were not given and makes sure
    /// the output directory exists.
    pub fn resolve(
        template: Option<PathBuf>,
        output_dir: Option<PathBuf>,
        printer: String,
        dry_run: bool,
        print_command: String,
    ) -> Result<Self> {
        let dirs = xdg::BaseDirectories::with_prefix(APP_NAME);

        let template = match template {
            Some(path) => path,
            None => dirs.find_config_file(TEMPLATE_FILE).ok_or_else(|| {
                anyhow!("No label template found; pass --template or create $XDG_CONFIG_HOME/{APP_NAME}/{TEMPLATE_FILE}")
            })?,
        };

        let output_dir = match output_dir {
            Some(dir) => {
                fs::create_dir_all(&dir)
                    .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
                dir
            }
            None => dirs
                .create_data_directory(LABELS_DIR)
                .context("Failed to create label output directory")?,
        };

        debug!(
            "Using template {} and output directory {}",
            template.display(),
            output_dir.display()
        );

        Ok(Self {
            template,
            output_dir,
            printer,
            dispatch: !dry_run,
            print_command,
        })
    }

    /// Builds the dispatcher these settings describe.
    pub fn dispatcher(&self) -> Result<Dispatcher> {
        DispatcherBuilder::new()
            .with_dispatch(self.dispatch)
            .with_printer(&self.printer)
            .with_template_path(&self.template)
            .with_output_dir(&self.output_dir)
            .with_submitter(Arc::new(LprSubmitter::new(&self.print_command)))
            .build()
            .context("Failed to initialize label dispatcher")
    }
}
