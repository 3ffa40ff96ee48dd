use crate::catalog::is_admissible;
use crate::{EXCLUDED_TITLES, LIVELIHOOD_JOBS, SALARY_CEILING};

use googletest::prelude::*;

#[test]
fn test_catalog_has_ten_admissible_jobs() {
    assert_that!(LIVELIHOOD_JOBS.len(), eq(10));
    for job in LIVELIHOOD_JOBS {
        assert!(is_admissible(job.title, job.salary), "{} rejected", job.title);
    }
}

#[test]
fn test_excluded_titles_are_rejected_regardless_of_case() {
    for title in EXCLUDED_TITLES {
        assert!(!is_admissible(title, 10_000.0));
    }
    assert!(!is_admissible("software developer", 10_000.0));
}

#[test]
fn test_salary_above_ceiling_is_rejected() {
    assert!(is_admissible("Caregiver", SALARY_CEILING));
    assert!(!is_admissible("Caregiver", SALARY_CEILING + 1.0));
}
