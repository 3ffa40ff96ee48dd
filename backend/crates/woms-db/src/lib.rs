pub mod connection;
pub mod error;
pub mod repositories;
pub mod seed;

pub use connection::database::Database;
pub use error::{DbError, Result};
pub use repositories::application_repository::ApplicationRepository;
pub use repositories::attendance_repository::AttendanceRepository;
pub use repositories::employment_repository::EmploymentRepository;
pub use repositories::household_repository::HouseholdRepository;
pub use repositories::interview_repository::InterviewRepository;
pub use repositories::job_repository::JobRepository;
pub use repositories::need_repository::NeedRepository;
pub use repositories::report_repository::{ExportKind, ReportRepository};
pub use repositories::resource_repository::ResourceRepository;
pub use repositories::simulation_repository::SimulationRepository;
pub use repositories::skill_repository::SkillRepository;
pub use repositories::training_repository::TrainingRepository;
pub use repositories::user_repository::UserRepository;
pub use seed::seed_sample_data;
