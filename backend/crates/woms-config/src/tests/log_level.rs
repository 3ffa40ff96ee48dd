use crate::LogLevel;

use googletest::prelude::*;
use log::LevelFilter;
use serde::Deserialize;

#[derive(Deserialize)]
struct Wrapper {
    level: LogLevel,
}

#[test]
fn given_known_names_in_any_case_when_parsed_then_level_matches() {
    assert_that!(LogLevel::parse_lenient("WARN").0, eq(LevelFilter::Warn));
    assert_that!(LogLevel::parse_lenient(" trace ").0, eq(LevelFilter::Trace));
    assert_that!(LogLevel::parse_lenient("off").0, eq(LevelFilter::Off));
}

#[test]
fn given_unknown_name_when_parsed_then_defaults_to_info() {
    assert_that!(LogLevel::parse_lenient("loud").0, eq(LevelFilter::Info));
}

#[test]
fn given_toml_value_when_deserialized_then_level_is_applied() {
    let wrapper: Wrapper = toml::from_str("level = \"error\"").unwrap();

    assert_that!(*wrapper.level, eq(LevelFilter::Error));
}
