use crate::reports::{applicants_csv, csv_field, resources_csv};
use crate::{
    Applicant, Application, ApplicationStatus, Employment, EmploymentState, ProgramMetrics,
    Resource, TrainingProgram,
};

use chrono::NaiveDate;
use googletest::prelude::*;

fn applicant(id: i64) -> Applicant {
    Applicant {
        user_id: id,
        username: format!("user{id}"),
        person_id: Some(id),
        name: Some(format!("Person {id}")),
        age: Some(30),
        phone: Some("09170000000".to_string()),
    }
}

fn employment(income: f64, status: EmploymentState) -> Employment {
    Employment {
        id: 1,
        applicant_id: 1,
        applicant_name: None,
        job_id: 1,
        job_title: None,
        start_date: NaiveDate::from_ymd_opt(2026, 1, 5)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap(),
        end_date: None,
        monthly_income: income,
        status,
    }
}

fn application(status: ApplicationStatus) -> Application {
    Application {
        id: 1,
        job_id: 1,
        applicant_id: 1,
        status,
        job_title: None,
        applicant_username: None,
        applicant_name: None,
        first_name: "A".to_string(),
        middle_name: String::new(),
        last_name: "B".to_string(),
        gender: String::new(),
        age: 30,
        address: String::new(),
        experience: String::new(),
        submission_date: None,
    }
}

fn program(status: &str) -> TrainingProgram {
    TrainingProgram {
        id: 1,
        title: "Basic Carpentry".to_string(),
        description: String::new(),
        duration_days: 10,
        skills_taught: String::new(),
        status: status.to_string(),
    }
}

#[test]
fn given_mixed_records_when_computing_metrics_then_only_employed_income_counts() {
    // Given
    let applicants = [applicant(1), applicant(2), applicant(3), applicant(4)];
    let employment = [
        employment(20_000.0, EmploymentState::Employed),
        employment(25_000.0, EmploymentState::Employed),
        employment(99_000.0, EmploymentState::Terminated),
    ];
    let applications = [
        application(ApplicationStatus::Approved),
        application(ApplicationStatus::Pending),
        application(ApplicationStatus::Rejected),
        application(ApplicationStatus::Approved),
    ];
    let programs = [program("ACTIVE"), program("CLOSED")];

    // When
    let metrics = ProgramMetrics::compute(&applicants, &employment, &applications, &programs);

    // Then
    assert_that!(metrics.total_applicants, eq(4));
    assert_that!(metrics.employed_count, eq(2));
    assert_that!(metrics.employment_rate, eq(50.0));
    assert_that!(metrics.total_monthly_income, eq(45_000.0));
    assert_that!(metrics.average_monthly_income, eq(22_500.0));
    assert_that!(metrics.approved_applications, eq(2));
    assert_that!(metrics.approval_rate, eq(50.0));
    assert_that!(metrics.active_training_programs, eq(1));
    assert_that!(metrics.estimated_annual_income(), eq(540_000.0));
}

#[test]
fn given_no_records_when_computing_metrics_then_rates_are_zero() {
    let metrics = ProgramMetrics::compute(&[], &[], &[], &[]);

    assert_that!(metrics.employment_rate, eq(0.0));
    assert_that!(metrics.approval_rate, eq(0.0));
    assert_that!(metrics.average_monthly_income, eq(0.0));
}

#[test]
fn test_report_text_contains_headline_figures() {
    let metrics = ProgramMetrics::compute(&[applicant(1)], &[], &[], &[program("ACTIVE")]);
    let at = NaiveDate::from_ymd_opt(2026, 3, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();

    let report = metrics.render_report(at);

    assert!(report.contains("POVERTY REDUCTION REPORT"));
    assert!(report.contains("Total Registered Beneficiaries: 1"));
    assert!(report.contains("Active Training Programs: 1"));
}

#[test]
fn test_csv_field_replaces_commas() {
    assert_that!(csv_field(Some("Rice, 50kg")), eq("Rice  50kg"));
    assert_that!(csv_field(None), eq(""));
}

#[test]
fn test_applicants_csv_has_header_and_rows() {
    let mut a = applicant(7);
    a.name = Some("Santos, Maria".to_string());

    let csv = applicants_csv(&[a]);

    let lines: Vec<&str> = csv.lines().collect();
    assert_that!(lines, len(eq(2)));
    assert_that!(lines[0], eq("userId,username,name,age,phone"));
    assert_that!(lines[1], eq("7,user7,Santos  Maria,30,09170000000"));
}

#[test]
fn test_resources_csv_lists_quantities() {
    let csv = resources_csv(&[Resource {
        id: 2,
        name: "Blankets".to_string(),
        quantity: 150,
    }]);

    assert_that!(csv, eq("resourceId,name,quantity\n2,Blankets,150\n"));
}
