use serde::{Deserialize, Serialize};

use crate::error::{LabelError, Result};

/// Label type that asks intake for an extra guardian copy.
pub const ATTENDANCE_LABEL_TYPE: &str = "Attendance";

/// The raw fields of one label, as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LabelRecord {
    /// Category of the label; drives the copy-count policy
    pub label_type: String,
    /// Heading printed at the top of the label
    pub title: String,
    /// Identifier or access code; also names the output file
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    /// Free text printed in the notes area
    pub additional_info: String,
    /// Whether the holder may be photographed
    pub can_photograph: bool,
    /// Whether the holder has allergies
    pub has_allergies: bool,
}

impl Default for LabelRecord {
    fn default() -> Self {
        Self {
            label_type: String::new(),
            title: String::new(),
            id: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            additional_info: String::new(),
            can_photograph: true,
            has_allergies: false,
        }
    }
}

impl LabelRecord {
    /// Creates a record with the given identifier and title and every other
    /// field at its default.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    /// Parses a record from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Checks that the identifier can be embedded in a file name.
    ///
    /// # Errors
    ///
    /// Returns `LabelError::InvalidRecord` when the identifier is empty or
    /// `.`, or contains a path separator, a NUL byte or `..`.
    pub fn validate(&self) -> Result<()> {
        let id = self.id.as_str();
        if id.trim().is_empty() {
            return Err(LabelError::invalid_record("id").with_reason("must not be empty"));
        }
        if id.contains(['/', '\\', '\0']) {
            return Err(LabelError::invalid_record("id")
                .with_reason(format!("'{id}' contains a path separator")));
        }
        if id.contains("..") || id == "." {
            return Err(LabelError::invalid_record("id")
                .with_reason(format!("'{id}' is not a valid file name component")));
        }
        Ok(())
    }
}
