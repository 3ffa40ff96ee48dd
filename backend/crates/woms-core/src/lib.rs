pub mod catalog;
pub mod error;
pub mod models;
pub mod reports;
pub mod validation;

pub use catalog::{CatalogJob, EXCLUDED_TITLES, LIVELIHOOD_JOBS, SALARY_CEILING};
pub use error::{CoreError, CoreResult};
pub use models::account::{ACCOUNT_TIME_FORMAT, Account, PrimaryAccount, same_username};
pub use models::applicant::{Applicant, NewApplicant};
pub use models::applicant_need::{ApplicantNeed, Skill};
pub use models::application::{Application, ApplicationDetails, ApplicationForm};
pub use models::application_status::ApplicationStatus;
pub use models::attendance::Attendance;
pub use models::employment::Employment;
pub use models::employment_state::EmploymentState;
pub use models::household::{Household, Resource, Simulation};
pub use models::interview::{Interview, NewInterview};
pub use models::interview_status::InterviewStatus;
pub use models::job::{Job, JobMatch};
pub use models::role::Role;
pub use models::training::{TrainingEnrollment, TrainingProgram};
pub use reports::ProgramMetrics;
pub use validation::{Registration, validate_application, validate_registration};

#[cfg(test)]
mod tests;
