//! Property-based coverage for input normalization and the state machine.

use proptest::prelude::*;

use timesheet_tasks::{FillRequest, TaskState};

fn request_with_days_off(days_off: String) -> FillRequest {
    FillRequest {
        days_off,
        ..FillRequest::default()
    }
}

proptest! {
    /// Normalization never panics and never produces padded or empty parts.
    #[test]
    fn days_off_parts_are_trimmed_and_non_empty(days_off in ".{0,64}") {
        let request = request_with_days_off(days_off);
        for day in request.days_off_list() {
            prop_assert!(!day.is_empty());
            prop_assert_eq!(day.trim(), day.as_str());
            prop_assert!(!day.contains(','));
        }
    }

    /// The skip clause appears exactly when normalization finds any days.
    #[test]
    fn skip_clause_tracks_normalized_days(days_off in "[A-Za-z ,]{0,32}") {
        let request = request_with_days_off(days_off);
        let task = request.task_description("https://wd3.example.com/home");
        let has_clause = task.contains("Skip the following days as they are days off:");
        prop_assert_eq!(has_clause, !request.days_off_list().is_empty());
    }

    /// Week start and time types always appear verbatim in the description.
    #[test]
    fn description_embeds_parameters(week in "[A-Za-z0-9-]{1,16}", types in "[A-Za-z0-9-]{1,16}") {
        let request = FillRequest {
            week_start_date: week.clone(),
            time_types: types.clone(),
            ..FillRequest::default()
        };
        let task = request.task_description("https://wd3.example.com/home");
        let expected_week = format!("week starting on {}", week);
        let expected_types = format!("4 hours time type {}", types);
        prop_assert!(task.contains(&expected_week));
        prop_assert!(task.contains(&expected_types));
    }
}

#[test]
fn state_machine_is_exhaustively_monotonic() {
    let all = [TaskState::InProgress, TaskState::Succeeded, TaskState::Failed];
    for from in all {
        for to in all {
            let allowed = from.can_transition_to(to);
            // Only InProgress -> terminal is ever allowed.
            assert_eq!(
                allowed,
                from == TaskState::InProgress && to.is_terminal(),
                "unexpected verdict for {from} -> {to}"
            );
        }
    }
}
