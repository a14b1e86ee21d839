//! Display implementations for labels and print outcomes.

use std::fmt;

use crate::{dispatcher::PrintReport, models::LabelRecord, worker::WorkerSummary};

impl fmt::Display for LabelRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LabelType = {}, Title = {}, Id = {}, FirstName = {}, LastName = {}, AdditionalInfo = {}",
            self.label_type,
            self.title,
            self.id,
            self.first_name,
            self.last_name,
            self.additional_info
        )
    }
}

/// One rendered file per line, followed by the submission count.
impl fmt::Display for PrintReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for path in &self.rendered {
            writeln!(f, "{}", path.display())?;
        }
        write!(
            f,
            "Rendered {} label(s), submitted {} to the printer",
            self.rendered.len(),
            self.submitted
        )
    }
}

impl fmt::Display for WorkerSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Printed {} job(s) ({} file(s)), {} failed",
            self.printed, self.files, self.failed
        )
    }
}
