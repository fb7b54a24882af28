#[cfg(test)]
mod model_tests {
    use jiff::Timestamp;

    use crate::{
        config::FormConfig,
        host::FormEvent,
        models::{FormFilter, FormRecord, FormSnapshot, FormSummary, Step, StepState},
    };

    fn create_test_record(submitted: bool) -> FormRecord {
        FormRecord {
            id: 42,
            name: "Signup".to_string(),
            config: FormConfig::new(vec!["Name".into(), "Email".into()]),
            snapshot: FormSnapshot {
                active_step_index: 1,
                completed_steps: vec![true, false, false],
            },
            errors: vec![None, Some("Invalid address".into()), None],
            submitted,
            created_at: Timestamp::from_second(1640995200).unwrap(), // 2022-01-01 00:00:00 UTC
            updated_at: Timestamp::from_second(1641081600).unwrap(), // 2022-01-02 00:00:00 UTC
        }
    }

    #[test]
    fn test_step_state_classification() {
        assert_eq!(StepState::classify(2, 0, true, false), StepState::Locked);
        assert_eq!(StepState::classify(1, 1, false, true), StepState::Active);
        assert_eq!(StepState::classify(0, 1, true, true), StepState::CollapsedComplete);
        assert_eq!(StepState::classify(2, 1, false, true), StepState::CollapsedIncomplete);

        // An active step that lost a predecessor reports locked
        assert_eq!(StepState::classify(1, 1, true, false), StepState::Locked);
    }

    #[test]
    fn test_step_blank_subtitle_normalises_to_none() {
        assert_eq!(Step::new("Name", Some("   ".into())).subtitle, None);
        assert_eq!(
            Step::new("Name", Some("Your legal name".into())).subtitle,
            Some("Your legal name".to_string())
        );

        let confirmation = Step::confirmation("Confirmation");
        assert!(confirmation.is_confirmation);
        assert!(!confirmation.completed);
    }

    #[test]
    fn test_snapshot_helpers() {
        let initial = FormSnapshot::initial(3);
        assert_eq!(initial.active_step_index, 0);
        assert_eq!(initial.completed_steps, vec![false; 3]);
        assert_eq!(initial.completed_count(), 0);

        let snapshot = FormSnapshot {
            active_step_index: 2,
            completed_steps: vec![true, true, false],
        };
        assert_eq!(snapshot.completed_count(), 2);
    }

    #[test]
    fn test_snapshot_json_shape() {
        let snapshot = FormSnapshot {
            active_step_index: 1,
            completed_steps: vec![true, false],
        };
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"active_step_index": 1, "completed_steps": [true, false]})
        );
    }

    #[test]
    fn test_form_summary_from_record() {
        let summary = FormSummary::from(&create_test_record(false));

        assert_eq!(summary.id, 42);
        assert_eq!(summary.name, "Signup");
        assert_eq!(summary.completed_steps, 1);
        assert_eq!(summary.total_steps, 3);
        assert_eq!(summary.active_step, 1);
        assert!(!summary.submitted);

        let submitted = FormSummary::from(&create_test_record(true));
        assert!(submitted.submitted);
    }

    #[test]
    fn test_record_errors_default_when_missing() {
        let mut json = serde_json::to_value(create_test_record(false)).unwrap();
        json.as_object_mut().unwrap().remove("errors");

        let record: FormRecord = serde_json::from_value(json).unwrap();
        assert!(record.errors.is_empty());
    }

    #[test]
    fn test_filter_defaults() {
        let filter: FormFilter = serde_json::from_str("{}").unwrap();
        assert!(!filter.include_submitted);
        assert!(filter.name_contains.is_none());
    }

    #[test]
    fn test_form_event_serialization() {
        let json = serde_json::to_string(&FormEvent::Opening(2)).unwrap();
        assert_eq!(json, r#"{"event":"opening","step":2}"#);

        let json = serde_json::to_string(&FormEvent::Submitted).unwrap();
        assert_eq!(json, r#"{"event":"submitted"}"#);
    }
}
