//! Core library for the Labelstation label printing service.
//!
//! This crate turns label records into PostScript files and hands them to
//! the print spooler. It is organized bottom-up:
//!
//! - [`format`]: truncation, title casing and warning strings for label
//!   fields
//! - [`models`]: the [`LabelRecord`] supplied by callers and the per-copy
//!   [`LabelView`] derived from it
//! - [`template`]: parsing and rendering of placeholder templates
//! - [`dispatcher`]: the [`Dispatcher`] that renders copies and submits them
//! - [`submit`] and [`sink`]: the spooler and logging capabilities the
//!   dispatcher is built with
//! - [`policy`] and [`worker`]: job intake helpers
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use labelstation_core::{DispatcherBuilder, LabelRecord};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dispatcher = DispatcherBuilder::new()
//!     .with_template_path("label.ps")
//!     .with_output_dir("labels")
//!     .with_dispatch(false)
//!     .build()?;
//!
//! let record = LabelRecord {
//!     first_name: "jo".to_string(),
//!     ..LabelRecord::new("A123", "Visitor")
//! };
//! let report = dispatcher.print(&record, 1)?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```

pub mod dispatcher;
pub mod display;
pub mod error;
pub mod format;
pub mod models;
pub mod policy;
pub mod sink;
pub mod submit;
pub mod template;
pub mod worker;

// Re-export commonly used types
pub use dispatcher::{Dispatcher, DispatcherBuilder, PrintReport};
pub use error::{LabelError, Result};
pub use models::{LabelRecord, LabelView};
pub use policy::copies_for;
pub use sink::{ErrorLog, InfoLog, LogSink, MemorySink};
pub use submit::{LprSubmitter, PrintSubmitter};
pub use template::LabelTemplate;
pub use worker::{PrintWorker, WorkerSummary};
