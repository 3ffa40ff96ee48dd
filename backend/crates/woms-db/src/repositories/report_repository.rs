use crate::Result as DbErrorResult;
use crate::repositories::{
    application_repository::ApplicationRepository, employment_repository::EmploymentRepository,
    resource_repository::ResourceRepository, training_repository::TrainingRepository,
    user_repository::UserRepository,
};

use woms_core::ProgramMetrics;
use woms_core::reports;

use sqlx::SqlitePool;

/// Which dataset to export as CSV.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Applicants,
    Applications,
    Employment,
    TrainingPrograms,
    Resources,
}

impl ExportKind {
    /// Conventional file name for the export.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Applicants => "applicants.csv",
            Self::Applications => "applications.csv",
            Self::Employment => "employment_status.csv",
            Self::TrainingPrograms => "training_programs.csv",
            Self::Resources => "resources.csv",
        }
    }
}

pub struct ReportRepository {
    pool: SqlitePool,
}

impl ReportRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn program_metrics(&self) -> DbErrorResult<ProgramMetrics> {
        let applicants = UserRepository::new(self.pool.clone()).list_applicants().await?;
        let employment = EmploymentRepository::new(self.pool.clone()).list_all().await?;
        let applications = ApplicationRepository::new(self.pool.clone()).list_all().await?;
        let programs = TrainingRepository::new(self.pool.clone()).list_programs().await?;

        Ok(ProgramMetrics::compute(
            &applicants,
            &employment,
            &applications,
            &programs,
        ))
    }

    pub async fn export_csv(&self, kind: ExportKind) -> DbErrorResult<String> {
        let csv = match kind {
            ExportKind::Applicants => {
                let rows = UserRepository::new(self.pool.clone()).list_applicants().await?;
                reports::applicants_csv(&rows)
            }
            ExportKind::Applications => {
                let rows = ApplicationRepository::new(self.pool.clone()).list_all().await?;
                reports::applications_csv(&rows)
            }
            ExportKind::Employment => {
                let rows = EmploymentRepository::new(self.pool.clone()).list_all().await?;
                reports::employment_csv(&rows)
            }
            ExportKind::TrainingPrograms => {
                let rows = TrainingRepository::new(self.pool.clone()).list_programs().await?;
                reports::training_programs_csv(&rows)
            }
            ExportKind::Resources => {
                let rows = ResourceRepository::new(self.pool.clone()).list().await?;
                reports::resources_csv(&rows)
            }
        };

        Ok(csv)
    }
}
