//! Copy-count policy applied at job intake.

use crate::models::ATTENDANCE_LABEL_TYPE;

/// Number of copies to print for a label of the given type.
///
/// Attendance labels get a second, guardian copy; everything else prints
/// once.
pub fn copies_for(label_type: &str) -> u32 {
    if label_type == ATTENDANCE_LABEL_TYPE {
        2
    } else {
        1
    }
}
