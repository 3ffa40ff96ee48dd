use crate::{ACCOUNT_TIME_FORMAT, Account};

use chrono::NaiveDateTime;
use googletest::prelude::*;

#[test]
fn given_no_timestamp_when_creating_account_then_current_time_is_used() {
    // When
    let account = Account::new("APPLICANT", "ana", "secret", None);

    // Then
    let parsed = NaiveDateTime::parse_from_str(&account.time_created, ACCOUNT_TIME_FORMAT);
    assert_that!(parsed.is_ok(), eq(true));
}

#[test]
fn given_supplied_timestamp_when_creating_account_then_it_is_kept_verbatim() {
    let account = Account::new("ADMIN", "root", "pw", Some("whenever".to_string()));

    assert_that!(account.time_created, eq("whenever"));
}

#[test]
fn test_account_name_and_role_comparisons_ignore_case() {
    let account = Account::new("Applicant", "Ana", "pw", None);

    assert!(account.is_named("ANA"));
    assert!(account.has_role("APPLICANT"));
    assert!(!account.has_role("ADMIN"));
}

#[test]
fn given_non_ascii_names_when_comparing_then_case_is_folded() {
    let account = Account::new("APPLICANT", "Ñino", "pw", None);

    assert!(account.is_named("ñino"));
    assert!(account.is_named("ÑINO"));
    assert!(!account.is_named("nino"));
}
