use std::{fs, path::PathBuf, sync::Arc};

use labelstation_core::{Dispatcher, DispatcherBuilder, MemorySink, PrintSubmitter};
use tempfile::TempDir;

pub const TEMPLATE: &str = "%!PS-Adobe-3.0\n\
<< /PageSize [102 252] >> setpagedevice\n\
/Helvetica findfont 14 scalefont setfont\n\
10 230 moveto (<TITLE>) show\n\
10 200 moveto (<FIRSTNAME>) show\n\
10 180 moveto (<LASTNAME>) show\n\
10 160 moveto (<CODE>) show\n\
10 140 moveto (<DATE>) show\n\
10 120 moveto (<NOTES>) show\n\
10 100 moveto (<PHOTOGRAPHY>) show\n\
10 80 moveto (<ALLERGIES>) show\n\
showpage\n";

/// A dispatcher writing into a temporary directory, plus the handles tests
/// inspect afterwards.
pub struct TestStation {
    pub temp_dir: TempDir,
    pub output_dir: PathBuf,
    pub info: Arc<MemorySink>,
    pub errors: Arc<MemorySink>,
}

impl TestStation {
    /// Helper function to create a temporary template and output directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        fs::write(temp_dir.path().join("label.ps"), TEMPLATE).expect("Failed to write template");
        let output_dir = temp_dir.path().join("labels");
        fs::create_dir(&output_dir).expect("Failed to create output dir");
        Self {
            temp_dir,
            output_dir,
            info: Arc::new(MemorySink::new()),
            errors: Arc::new(MemorySink::new()),
        }
    }

    pub fn dispatcher(&self, dispatch: bool, submitter: Arc<dyn PrintSubmitter>) -> Dispatcher {
        DispatcherBuilder::new()
            .with_dispatch(dispatch)
            .with_printer("Label_Station")
            .with_template_path(self.temp_dir.path().join("label.ps"))
            .with_output_dir(&self.output_dir)
            .with_info_log(self.info.clone())
            .with_error_log(self.errors.clone())
            .with_submitter(submitter)
            .build()
            .expect("Failed to create dispatcher")
    }

    pub fn rendered_files(&self) -> Vec<PathBuf> {
        let mut files: Vec<_> = fs::read_dir(&self.output_dir)
            .expect("Failed to read output dir")
            .map(|entry| entry.expect("Failed to read entry").path())
            .collect();
        files.sort();
        files
    }
}
