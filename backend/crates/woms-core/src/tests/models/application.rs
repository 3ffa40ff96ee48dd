use crate::ApplicationDetails;

use googletest::prelude::*;

#[test]
fn given_three_word_name_when_deriving_details_then_name_is_split() {
    let details = ApplicationDetails::from_profile(4, "Juan Dela Cruz", 42);

    assert_that!(details.first_name, eq("Juan"));
    assert_that!(details.middle_name, eq("Dela"));
    assert_that!(details.last_name, eq("Cruz"));
    assert_that!(details.age, eq(42));
    assert_that!(details.gender, eq(ApplicationDetails::UNSPECIFIED));
    assert_that!(details.address, eq(ApplicationDetails::UNSPECIFIED));
    assert_that!(details.experience, eq(ApplicationDetails::NO_EXPERIENCE));
}

#[test]
fn given_two_word_name_when_deriving_details_then_middle_is_empty() {
    let details = ApplicationDetails::from_profile(1, "Rosa Garcia", 28);

    assert_that!(details.first_name, eq("Rosa"));
    assert_that!(details.middle_name, eq(""));
    assert_that!(details.last_name, eq("Garcia"));
}

#[test]
fn given_long_name_when_deriving_details_then_remainder_stays_in_last_name() {
    let details = ApplicationDetails::from_profile(1, "Ana Maria de la Torre", 31);

    assert_that!(details.first_name, eq("Ana"));
    assert_that!(details.middle_name, eq("Maria"));
    assert_that!(details.last_name, eq("de la Torre"));
}

#[test]
fn given_single_word_name_when_deriving_details_then_only_first_is_set() {
    let details = ApplicationDetails::from_profile(1, "Carlos", 38);

    assert_that!(details.first_name, eq("Carlos"));
    assert_that!(details.last_name, eq(""));
}
