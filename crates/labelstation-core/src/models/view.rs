use jiff::Zoned;

use super::LabelRecord;
use crate::format::{
    allergy_marker, photography_warning, title_case, truncate_or_capitalize, uppercase,
    MAX_FIELD_LENGTH,
};

/// Title printed on every copy after the first.
pub const GUARDIAN_COPY_TITLE: &str = "Parent / Guardian Copy";

/// `strftime` pattern of the date stamp printed on the label.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Presentation values for one copy of a label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelView {
    /// 1-based copy index
    pub copy: u32,
    pub title: String,
    pub code: String,
    pub date: String,
    pub first_name: String,
    pub last_name: String,
    pub notes: String,
    pub photography: String,
    pub allergies: String,
}

impl LabelView {
    /// Derives the values for copy number `copy` of `record`, stamped with
    /// `rendered_at`.
    pub fn for_copy(record: &LabelRecord, copy: u32, rendered_at: &Zoned) -> Self {
        let title = if copy > 1 {
            GUARDIAN_COPY_TITLE.to_string()
        } else {
            title_case(&record.title)
        };

        Self {
            copy,
            title,
            code: uppercase(&truncate_or_capitalize(MAX_FIELD_LENGTH, &record.id)),
            date: rendered_at.strftime(DATE_FORMAT).to_string(),
            first_name: truncate_or_capitalize(MAX_FIELD_LENGTH, &record.first_name),
            last_name: truncate_or_capitalize(MAX_FIELD_LENGTH, &record.last_name),
            notes: record.additional_info.clone(),
            photography: photography_warning(record.can_photograph),
            allergies: allergy_marker(record.has_allergies),
        }
    }

    /// Whether this view is a guardian copy.
    pub fn is_guardian_copy(&self) -> bool {
        self.copy > 1
    }
}
