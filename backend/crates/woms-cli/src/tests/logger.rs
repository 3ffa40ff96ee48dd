use crate::logger::LogTarget;

use std::path::PathBuf;

use googletest::prelude::*;

#[test]
fn given_log_file_when_building_target_then_file_wins_over_color() {
    // Given
    let path = PathBuf::from("logs/woms.log");

    // When
    let target = LogTarget::new(Some(path.clone()), true);

    // Then
    assert_that!(target, eq(&LogTarget::File(path)));
}

#[test]
fn given_no_log_file_when_building_target_then_stderr_keeps_color_flag() {
    // When
    let target = LogTarget::new(None, false);

    // Then
    assert_that!(target, eq(&LogTarget::Stderr { colored: false }));
}
