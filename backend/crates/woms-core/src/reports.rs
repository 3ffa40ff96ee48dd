//! Program metrics and CSV exports.

use crate::{
    Applicant, Application, ApplicationStatus, Employment, Resource, TrainingProgram,
};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Headline numbers for the poverty reduction report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramMetrics {
    pub total_applicants: i64,
    pub employed_count: i64,
    /// Percent of registered applicants currently employed.
    pub employment_rate: f64,
    pub total_monthly_income: f64,
    pub average_monthly_income: f64,
    pub total_applications: i64,
    pub approved_applications: i64,
    pub approval_rate: f64,
    pub active_training_programs: i64,
}

impl ProgramMetrics {
    /// Income figures only count records whose state is EMPLOYED.
    pub fn compute(
        applicants: &[Applicant],
        employment: &[Employment],
        applications: &[Application],
        programs: &[TrainingProgram],
    ) -> Self {
        let employed: Vec<&Employment> = employment.iter().filter(|e| e.is_employed()).collect();
        let employed_count = employed.len() as i64;
        let total_monthly_income: f64 = employed.iter().map(|e| e.monthly_income).sum();

        let total_applicants = applicants.len() as i64;
        let total_applications = applications.len() as i64;
        let approved_applications = applications
            .iter()
            .filter(|a| a.status == ApplicationStatus::Approved)
            .count() as i64;

        Self {
            total_applicants,
            employed_count,
            employment_rate: percent(employed_count, total_applicants),
            total_monthly_income,
            average_monthly_income: if employed_count > 0 {
                total_monthly_income / employed_count as f64
            } else {
                0.0
            },
            total_applications,
            approved_applications,
            approval_rate: percent(approved_applications, total_applications),
            active_training_programs: programs.iter().filter(|p| p.is_active()).count() as i64,
        }
    }

    pub fn estimated_annual_income(&self) -> f64 {
        self.total_monthly_income * 12.0
    }

    /// Plain-text report suitable for printing or saving.
    pub fn render_report(&self, generated_at: NaiveDateTime) -> String {
        let rule = "==========================================";
        let mut out = String::new();
        out.push_str(&format!("{rule}\nPOVERTY REDUCTION REPORT\nWork Opportunity Management System\n{rule}\n\n"));
        out.push_str("OVERALL METRICS:\n");
        out.push_str(&format!("  Total Registered Beneficiaries: {}\n", self.total_applicants));
        out.push_str(&format!("  Currently Employed: {}\n", self.employed_count));
        out.push_str(&format!("  Employment Rate: {:.2}%\n\n", self.employment_rate));
        out.push_str("INCOME METRICS:\n");
        out.push_str(&format!("  Total Monthly Income Generated: {:.2}\n", self.total_monthly_income));
        out.push_str(&format!("  Average Monthly Income: {:.2}\n", self.average_monthly_income));
        out.push_str(&format!("  Estimated Annual Income: {:.2}\n\n", self.estimated_annual_income()));
        out.push_str("JOB OPPORTUNITIES:\n");
        out.push_str(&format!("  Total Applications: {}\n", self.total_applications));
        out.push_str(&format!("  Approved Applications: {}\n", self.approved_applications));
        out.push_str(&format!("  Approval Rate: {:.2}%\n\n", self.approval_rate));
        out.push_str("SKILLS DEVELOPMENT:\n");
        out.push_str(&format!("  Active Training Programs: {}\n\n", self.active_training_programs));
        out.push_str(&format!("{rule}\nReport Generated: {generated_at}\n{rule}\n"));
        out
    }
}

fn percent(part: i64, whole: i64) -> f64 {
    if whole > 0 {
        part as f64 * 100.0 / whole as f64
    } else {
        0.0
    }
}

/// Commas would split a field, so they become spaces. Missing values are empty.
pub fn csv_field(value: Option<&str>) -> String {
    value.unwrap_or_default().replace([',', '\n', '\r'], " ")
}

fn render(header: &str, rows: impl Iterator<Item = Vec<String>>) -> String {
    let mut out = String::from(header);
    out.push('\n');
    for row in rows {
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out
}

pub fn applicants_csv(applicants: &[Applicant]) -> String {
    render(
        "userId,username,name,age,phone",
        applicants.iter().map(|a| {
            vec![
                a.user_id.to_string(),
                csv_field(Some(&a.username)),
                csv_field(a.name.as_deref()),
                a.age.map(|age| age.to_string()).unwrap_or_default(),
                csv_field(a.phone.as_deref()),
            ]
        }),
    )
}

pub fn applications_csv(applications: &[Application]) -> String {
    render(
        "applicationId,applicantId,applicantName,jobId,jobTitle,status",
        applications.iter().map(|a| {
            vec![
                a.id.to_string(),
                a.applicant_id.to_string(),
                csv_field(a.applicant_name.as_deref()),
                a.job_id.to_string(),
                csv_field(a.job_title.as_deref()),
                a.status.to_string(),
            ]
        }),
    )
}

pub fn employment_csv(records: &[Employment]) -> String {
    render(
        "employmentId,applicantId,applicantName,jobId,jobTitle,startDate,monthlyIncome,status",
        records.iter().map(|e| {
            vec![
                e.id.to_string(),
                e.applicant_id.to_string(),
                csv_field(e.applicant_name.as_deref()),
                e.job_id.to_string(),
                csv_field(e.job_title.as_deref()),
                e.start_date.to_string(),
                e.monthly_income.to_string(),
                e.status.to_string(),
            ]
        }),
    )
}

pub fn training_programs_csv(programs: &[TrainingProgram]) -> String {
    render(
        "programId,title,description,durationDays,skillsTaught,status",
        programs.iter().map(|p| {
            vec![
                p.id.to_string(),
                csv_field(Some(&p.title)),
                csv_field(Some(&p.description)),
                p.duration_days.to_string(),
                csv_field(Some(&p.skills_taught)),
                csv_field(Some(&p.status)),
            ]
        }),
    )
}

pub fn resources_csv(resources: &[Resource]) -> String {
    render(
        "resourceId,name,quantity",
        resources.iter().map(|r| {
            vec![
                r.id.to_string(),
                csv_field(Some(&r.name)),
                r.quantity.to_string(),
            ]
        }),
    )
}
