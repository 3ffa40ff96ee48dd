use crate::{
    account_commands::AccountCommands, applicant_commands::ApplicantCommands,
    application_commands::ApplicationCommands, attendance_commands::AttendanceCommands,
    employment_commands::EmploymentCommands, household_commands::HouseholdCommands,
    interview_commands::InterviewCommands, job_commands::JobCommands,
    need_commands::NeedCommands, report_commands::ReportCommands,
    resource_commands::ResourceCommands, simulation_commands::SimulationCommands,
    skill_commands::SkillCommands, training_commands::TrainingCommands,
};

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign-in, registration and credential sync
    Account {
        #[command(subcommand)]
        action: AccountCommands,
    },

    /// Applicant records
    Applicant {
        #[command(subcommand)]
        action: ApplicantCommands,
    },

    /// Job catalog
    Job {
        #[command(subcommand)]
        action: JobCommands,
    },

    /// Job applications
    Application {
        #[command(subcommand)]
        action: ApplicationCommands,
    },

    /// Interviews
    Interview {
        #[command(subcommand)]
        action: InterviewCommands,
    },

    /// Assistance requests filed by applicants
    Need {
        #[command(subcommand)]
        action: NeedCommands,
    },

    /// Applicant skills
    Skill {
        #[command(subcommand)]
        action: SkillCommands,
    },

    /// Daily time-in and time-out
    Attendance {
        #[command(subcommand)]
        action: AttendanceCommands,
    },

    /// Training programs and enrollments
    Training {
        #[command(subcommand)]
        action: TrainingCommands,
    },

    /// Employment records
    Employment {
        #[command(subcommand)]
        action: EmploymentCommands,
    },

    /// Households and their members
    Household {
        #[command(subcommand)]
        action: HouseholdCommands,
    },

    /// Donated or purchased resources
    Resource {
        #[command(subcommand)]
        action: ResourceCommands,
    },

    /// Recorded simulation runs
    Simulation {
        #[command(subcommand)]
        action: SimulationCommands,
    },

    /// Program metrics and CSV exports
    Report {
        #[command(subcommand)]
        action: ReportCommands,
    },

    /// Insert sample data when no applicants exist
    Seed,
}
