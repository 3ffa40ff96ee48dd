use crate::{ApplicationStatus, EmploymentState, InterviewStatus};

use std::str::FromStr;

#[test]
fn test_application_status_round_trip_and_default() {
    assert_eq!(ApplicationStatus::default(), ApplicationStatus::Pending);
    assert_eq!(
        ApplicationStatus::from_str("approved").unwrap(),
        ApplicationStatus::Approved
    );
    assert_eq!(ApplicationStatus::Rejected.to_string(), "REJECTED");
    assert!(ApplicationStatus::from_str("maybe").is_err());
}

#[test]
fn test_interview_status_accepts_hyphenated_no_show() {
    assert_eq!(InterviewStatus::default(), InterviewStatus::Scheduled);
    assert_eq!(
        InterviewStatus::from_str("no-show").unwrap(),
        InterviewStatus::NoShow
    );
    assert_eq!(InterviewStatus::NoShow.as_str(), "NO_SHOW");
}

#[test]
fn test_employment_state_default_is_employed() {
    assert_eq!(EmploymentState::default(), EmploymentState::Employed);
    assert_eq!(
        EmploymentState::from_str("resigned").unwrap(),
        EmploymentState::Resigned
    );
    assert!(EmploymentState::from_str("retired").is_err());
}
