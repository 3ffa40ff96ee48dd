use crate::Role;

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::Admin.as_str(), "ADMIN");
    assert_eq!(Role::Applicant.as_str(), "APPLICANT");
}

#[test]
fn test_role_from_str_is_case_insensitive() {
    assert_eq!(Role::from_str("admin").unwrap(), Role::Admin);
    assert_eq!(Role::from_str(" Applicant ").unwrap(), Role::Applicant);
    assert!(Role::from_str("manager").is_err());
}

#[test]
fn test_role_matches_stored_text() {
    assert!(Role::Admin.matches("admin"));
    assert!(Role::Applicant.matches("APPLICANT "));
    assert!(!Role::Admin.matches("APPLICANT"));
}
