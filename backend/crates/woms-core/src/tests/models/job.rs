use crate::JobMatch;

#[test]
fn test_match_percentage_truncates() {
    assert_eq!(JobMatch::percentage(1, 3), 33);
    assert_eq!(JobMatch::percentage(2, 2), 100);
}

#[test]
fn test_match_percentage_without_requirements_is_zero() {
    assert_eq!(JobMatch::percentage(0, 0), 0);
}
