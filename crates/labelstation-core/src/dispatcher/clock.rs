//! Render timestamps and output file naming.

use std::{
    path::{Path, PathBuf},
    sync::{Mutex, PoisonError},
};

use jiff::{tz::TimeZone, SignedDuration, Timestamp, Zoned};

/// `strftime` pattern of the timestamp embedded in output file names.
pub const FILE_STAMP_FORMAT: &str = "%Y_%m_%d_%H_%M_%S";

/// Extension of rendered label files.
pub const OUTPUT_EXTENSION: &str = "ps";

/// A wall clock that never returns the same instant twice.
///
/// Output file names embed the render time down to the nanosecond. When two
/// renders land on the same tick, the later one is pushed forward by a
/// nanosecond so the names stay distinct.
#[derive(Debug)]
pub struct MonotonicClock {
    time_zone: TimeZone,
    last: Mutex<Option<Timestamp>>,
}

impl MonotonicClock {
    /// Creates a clock reporting times in `time_zone`.
    pub fn new(time_zone: TimeZone) -> Self {
        Self {
            time_zone,
            last: Mutex::new(None),
        }
    }

    /// Current time, strictly later than any time this clock returned before.
    pub fn now(&self) -> Zoned {
        self.after(Timestamp::now())
    }

    fn after(&self, candidate: Timestamp) -> Zoned {
        let mut last = self.last.lock().unwrap_or_else(PoisonError::into_inner);
        let stamp = match *last {
            Some(previous) if previous >= candidate => previous
                .checked_add(SignedDuration::from_nanos(1))
                .unwrap_or(candidate),
            _ => candidate,
        };
        *last = Some(stamp);
        stamp.to_zoned(self.time_zone.clone())
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new(TimeZone::system())
    }
}

/// Path of the file a label with identifier `id`, rendered at `at`, is
/// written to: `<dir>/<id>_<YYYY_MM_DD_HH_MM_SS>_<nanosecond>.ps`.
pub fn output_file_path(dir: &Path, id: &str, at: &Zoned) -> PathBuf {
    dir.join(format!(
        "{id}_{}_{}.{OUTPUT_EXTENSION}",
        at.strftime(FILE_STAMP_FORMAT),
        at.subsec_nanosecond()
    ))
}
