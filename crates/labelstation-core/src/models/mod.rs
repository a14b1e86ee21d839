//! Data models for label jobs.
//!
//! A [`LabelRecord`] is what callers hand to the dispatcher: the raw fields
//! of one label as they arrive from intake. A [`LabelView`] is derived from a
//! record for each printed copy and carries the presentation values the
//! template substitutes. Views are rebuilt for every copy so that
//! copy-specific values, such as the guardian title, never leak back into
//! the record.
//!
//! # Examples
//!
//! ```rust
//! use jiff::Zoned;
//! use labelstation_core::models::{LabelRecord, LabelView, GUARDIAN_COPY_TITLE};
//!
//! let record = LabelRecord::new("A123", "visitor");
//! let now = Zoned::now();
//!
//! let first = LabelView::for_copy(&record, 1, &now);
//! assert_eq!(first.title, "Visitor");
//!
//! let second = LabelView::for_copy(&record, 2, &now);
//! assert_eq!(second.title, GUARDIAN_COPY_TITLE);
//! assert_eq!(record.title, "visitor");
//! ```

pub mod record;
pub mod view;

#[cfg(test)]
mod tests;

pub use record::{LabelRecord, ATTENDANCE_LABEL_TYPE};
pub use view::{LabelView, DATE_FORMAT, GUARDIAN_COPY_TITLE};
