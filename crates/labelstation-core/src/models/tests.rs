#[cfg(test)]
mod model_tests {
    use jiff::{civil::date, tz::TimeZone, Zoned};

    use crate::{
        error::LabelError,
        format::{ALLERGY_MARKER, PHOTOGRAPHY_WARNING},
        models::{LabelRecord, LabelView, GUARDIAN_COPY_TITLE},
    };

    fn create_test_record() -> LabelRecord {
        LabelRecord {
            label_type: "Attendance".to_string(),
            title: "sunday club".to_string(),
            id: "a123".to_string(),
            first_name: "jo".to_string(),
            last_name: "featherstonehaugh-smythe".to_string(),
            additional_info: "Collect at 12:00".to_string(),
            can_photograph: false,
            has_allergies: true,
        }
    }

    fn fixed_time() -> Zoned {
        date(2024, 3, 9)
            .at(14, 5, 7, 123_456_789)
            .to_zoned(TimeZone::UTC)
            .unwrap()
    }

    #[test]
    fn test_first_copy_view() {
        let record = create_test_record();
        let view = LabelView::for_copy(&record, 1, &fixed_time());

        assert_eq!(view.copy, 1);
        assert!(!view.is_guardian_copy());
        assert_eq!(view.title, "Sunday Club");
        assert_eq!(view.code, "A123");
        assert_eq!(view.date, "2024-03-09 14:05:07");
        assert_eq!(view.first_name, "Jo");
        assert_eq!(view.last_name, "featherstoneh...");
        assert_eq!(view.notes, "Collect at 12:00");
        assert_eq!(view.photography, PHOTOGRAPHY_WARNING);
        assert_eq!(view.allergies, ALLERGY_MARKER);
    }

    #[test]
    fn test_last_name_is_truncated_to_field_length() {
        let view = LabelView::for_copy(&create_test_record(), 1, &fixed_time());
        assert_eq!(view.last_name.chars().count(), 16);
        assert!(view.last_name.ends_with("..."));
    }

    #[test]
    fn test_guardian_copy_overrides_title_only_in_view() {
        let record = create_test_record();
        let view = LabelView::for_copy(&record, 2, &fixed_time());

        assert!(view.is_guardian_copy());
        assert_eq!(view.title, GUARDIAN_COPY_TITLE);
        assert_eq!(view.first_name, "Jo");
        assert_eq!(record.title, "sunday club");

        let again = LabelView::for_copy(&record, 1, &fixed_time());
        assert_eq!(again.title, "Sunday Club");
    }

    #[test]
    fn test_long_code_is_truncated_then_uppercased() {
        let mut record = create_test_record();
        record.id = "abcdefghijklmnopqrst".to_string();
        let view = LabelView::for_copy(&record, 1, &fixed_time());
        assert_eq!(view.code, "ABCDEFGHIJKLM...");
    }

    #[test]
    fn test_code_keeps_characters_without_single_uppercase() {
        let mut record = create_test_record();
        record.id = "straße".to_string();
        let view = LabelView::for_copy(&record, 1, &fixed_time());
        assert_eq!(view.code, "STRAßE");
        assert_eq!(view.code.chars().count(), 6);

        record.id = "ß".repeat(20);
        let view = LabelView::for_copy(&record, 1, &fixed_time());
        assert_eq!(view.code, format!("{}...", "ß".repeat(13)));
        assert_eq!(view.code.chars().count(), 16);
    }

    #[test]
    fn test_permitted_photography_and_no_allergies_are_blank() {
        let mut record = create_test_record();
        record.can_photograph = true;
        record.has_allergies = false;
        let view = LabelView::for_copy(&record, 1, &fixed_time());
        assert_eq!(view.photography, "");
        assert_eq!(view.allergies, "");
    }

    #[test]
    fn test_record_from_json() {
        let json = r#"{
            "labelType": "Attendance",
            "title": "Visitor",
            "id": "A123",
            "firstName": "jo",
            "lastName": "bloggs",
            "additionalInfo": "none",
            "canPhotograph": false,
            "hasAllergies": true
        }"#;
        let record = LabelRecord::from_json(json).expect("Failed to parse record");

        assert_eq!(record.label_type, "Attendance");
        assert_eq!(record.title, "Visitor");
        assert_eq!(record.id, "A123");
        assert_eq!(record.first_name, "jo");
        assert_eq!(record.last_name, "bloggs");
        assert_eq!(record.additional_info, "none");
        assert!(!record.can_photograph);
        assert!(record.has_allergies);
    }

    #[test]
    fn test_record_from_json_defaults() {
        let record = LabelRecord::from_json(r#"{"id": "B7", "title": "Guest"}"#)
            .expect("Failed to parse record");
        assert_eq!(record, LabelRecord::new("B7", "Guest"));
        assert!(record.can_photograph);
        assert!(!record.has_allergies);
    }

    #[test]
    fn test_record_from_invalid_json() {
        let result = LabelRecord::from_json("{not json");
        assert!(matches!(result, Err(LabelError::Serialization { .. })));
    }

    #[test]
    fn test_validate_accepts_plain_identifier() {
        assert!(LabelRecord::new("A123", "Visitor").validate().is_ok());
        assert!(LabelRecord::new("child-42_b", "Visitor").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_unsafe_identifiers() {
        for id in ["", "   ", "../evil", "a/b", "a\\b", "..", ".", "nul\0byte"] {
            let result = LabelRecord::new(id, "Visitor").validate();
            assert!(
                matches!(result, Err(LabelError::InvalidRecord { ref field, .. }) if field == "id"),
                "identifier {id:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_record_display() {
        let record = create_test_record();
        assert_eq!(
            record.to_string(),
            "LabelType = Attendance, Title = sunday club, Id = a123, FirstName = jo, \
             LastName = featherstonehaugh-smythe, AdditionalInfo = Collect at 12:00"
        );
    }
}
