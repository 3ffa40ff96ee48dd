use crate::{
    account_commands::{AccountCommands, SyncDirection},
    applicant_commands::ApplicantCommands,
    application_commands::ApplicationCommands,
    attendance_commands::AttendanceCommands,
    commands::Commands,
    employment_commands::EmploymentCommands,
    error::{CliError, Result as CliErrorResult},
    household_commands::HouseholdCommands,
    interview_commands::InterviewCommands,
    job_commands::JobCommands,
    need_commands::NeedCommands,
    report_commands::{ExportArg, ReportCommands},
    resource_commands::ResourceCommands,
    simulation_commands::SimulationCommands,
    skill_commands::SkillCommands,
    training_commands::TrainingCommands,
};

use woms_accounts::AccountService;
use woms_core::catalog::is_admissible;
use woms_core::{
    ACCOUNT_TIME_FORMAT, ApplicationForm, ApplicationStatus, Interview, InterviewStatus,
    NewApplicant, NewInterview, validate_application,
};
use woms_db::{
    ApplicationRepository, AttendanceRepository, Database, EmploymentRepository,
    HouseholdRepository, InterviewRepository, JobRepository, NeedRepository, ReportRepository,
    ResourceRepository, SimulationRepository, SkillRepository, TrainingRepository,
    UserRepository, seed_sample_data,
};

use std::path::Path;

use chrono::NaiveDateTime;
use serde::Serialize;
use serde_json::{Value, json};
use sqlx::SqlitePool;

/// What a command produced.
#[derive(Debug)]
pub enum Output {
    Json(Value),
    Text(String),
}

fn to_json<T: Serialize>(value: &T) -> CliErrorResult<Output> {
    Ok(Output::Json(serde_json::to_value(value)?))
}

/// Both stores, opened by [`crate::startup::bootstrap`].
pub struct App {
    db: Option<Database>,
    accounts: AccountService,
}

impl App {
    pub fn new(db: Option<Database>, accounts: AccountService) -> Self {
        Self { db, accounts }
    }

    pub fn accounts(&self) -> &AccountService {
        &self.accounts
    }

    fn pool(&self, operation: &'static str) -> CliErrorResult<SqlitePool> {
        self.db
            .as_ref()
            .map(|db| db.pool().clone())
            .ok_or_else(|| CliError::offline(operation))
    }

    pub async fn shutdown(self) {
        if let Some(db) = self.db {
            db.close().await;
        }
    }

    /// Runs one command. `now` stamps anything the command creates.
    pub async fn execute(&self, command: Commands, now: NaiveDateTime) -> CliErrorResult<Output> {
        match command {
            Commands::Account { action } => self.account(action).await,
            Commands::Applicant { action } => self.applicant(action).await,
            Commands::Job { action } => self.job(action).await,
            Commands::Application { action } => self.application(action, now).await,
            Commands::Interview { action } => self.interview(action, now).await,
            Commands::Need { action } => self.need(action, now).await,
            Commands::Skill { action } => self.skill(action).await,
            Commands::Attendance { action } => self.attendance(action, now).await,
            Commands::Training { action } => self.training(action, now).await,
            Commands::Employment { action } => self.employment(action, now).await,
            Commands::Household { action } => self.household(action).await,
            Commands::Resource { action } => self.resource(action).await,
            Commands::Simulation { action } => self.simulation(action, now).await,
            Commands::Report { action } => self.report(action, now).await,
            Commands::Seed => {
                let seeded = seed_sample_data(&self.pool("seed")?, now).await?;
                Ok(Output::Json(json!({ "seeded": seeded })))
            }
        }
    }

    async fn account(&self, action: AccountCommands) -> CliErrorResult<Output> {
        match action {
            AccountCommands::Login {
                role,
                username,
                password,
            } => {
                let outcome = self
                    .accounts
                    .authenticate(role.into(), &username, &password)
                    .await;
                if !outcome.is_granted() {
                    return Err(CliError::denied(username));
                }
                to_json(&outcome)
            }
            AccountCommands::Register {
                username,
                password,
                confirm_password,
                name,
                age,
                phone,
            } => {
                let input = NewApplicant {
                    username,
                    password,
                    confirm_password,
                    name,
                    age,
                    phone,
                };
                to_json(&self.accounts.register_applicant(&input).await?)
            }
            AccountCommands::List => {
                let accounts = self.accounts.backup().accounts().await;
                let listed: Vec<Value> = accounts
                    .iter()
                    .map(|a| {
                        json!({
                            "role": a.role,
                            "username": a.username,
                            "time_created": a.time_created,
                        })
                    })
                    .collect();
                Ok(Output::Json(Value::Array(listed)))
            }
            AccountCommands::Sync { direction } => match direction {
                SyncDirection::Pull => {
                    let pulled = self.accounts.pull().await?;
                    Ok(Output::Json(json!({ "pulled": pulled })))
                }
                SyncDirection::Push => {
                    let created = self.accounts.push().await?;
                    Ok(Output::Json(json!({ "created": created })))
                }
            },
        }
    }

    async fn applicant(&self, action: ApplicantCommands) -> CliErrorResult<Output> {
        match action {
            ApplicantCommands::List => {
                let users = UserRepository::new(self.pool("applicant list")?);
                to_json(&users.list_applicants().await?)
            }
            ApplicantCommands::Delete { user_id } => {
                self.pool("applicant delete")?;
                let username = self.accounts.delete_applicant(user_id).await?;
                Ok(Output::Json(json!({ "deleted": username })))
            }
        }
    }

    async fn job(&self, action: JobCommands) -> CliErrorResult<Output> {
        let jobs = JobRepository::new(self.pool("job")?);
        match action {
            JobCommands::List => to_json(&jobs.list().await?),
            JobCommands::Get { id } => {
                let job = jobs.find_by_id(id).await?;
                let skills = match &job {
                    Some(_) => jobs.required_skills(id).await?,
                    None => Vec::new(),
                };
                Ok(Output::Json(json!({ "job": job, "required_skills": skills })))
            }
            JobCommands::Create {
                title,
                description,
                salary,
            } => {
                if !is_admissible(&title, salary) {
                    log::warn!("Job '{}' is outside the livelihood catalog rules", title);
                }
                to_json(&jobs.create(&title, &description, salary).await?)
            }
            JobCommands::Delete { id } => {
                Ok(Output::Json(json!({ "deleted": jobs.delete(id).await? })))
            }
            JobCommands::ResetCatalog => to_json(&jobs.reset_catalog().await?),
            JobCommands::PurgeExcluded => {
                Ok(Output::Json(json!({ "removed": jobs.purge_excluded().await? })))
            }
            JobCommands::AddSkill { job_id, skill } => {
                let added = jobs.add_required_skill(job_id, &skill).await?;
                Ok(Output::Json(json!({ "added": added })))
            }
            JobCommands::Matches { applicant_id } => {
                to_json(&jobs.matching_jobs(applicant_id).await?)
            }
        }
    }

    async fn application(
        &self,
        action: ApplicationCommands,
        now: NaiveDateTime,
    ) -> CliErrorResult<Output> {
        let applications = ApplicationRepository::new(self.pool("application")?);
        match action {
            ApplicationCommands::List { applicant_id } => match applicant_id {
                Some(id) => to_json(&applications.list_for_applicant(id).await?),
                None => to_json(&applications.list_all().await?),
            },
            ApplicationCommands::Get { id } => to_json(&applications.find_by_id(id).await?),
            ApplicationCommands::Submit {
                applicant_id,
                job_id,
                first_name,
                middle_name,
                last_name,
                gender,
                age,
                address,
                experience,
            } => {
                let id = match first_name {
                    Some(first_name) => {
                        let form = ApplicationForm {
                            job_id,
                            first_name,
                            middle_name,
                            last_name: last_name.unwrap_or_default(),
                            gender,
                            age: age.unwrap_or_default(),
                            address: address.unwrap_or_default(),
                            experience: experience.unwrap_or_default(),
                        };
                        let details = validate_application(&form)?;
                        applications.create(applicant_id, &details, now).await?
                    }
                    None => {
                        applications
                            .create_with_defaults(applicant_id, job_id, now)
                            .await?
                    }
                };
                to_json(&applications.find_by_id(id).await?)
            }
            ApplicationCommands::Status { id, status } => {
                let status: ApplicationStatus = status.parse()?;
                let updated = applications.update_status(id, status).await?;
                Ok(Output::Json(json!({ "updated": updated })))
            }
            ApplicationCommands::Approve { id, date, time } => {
                let (default_date, default_time) = Interview::default_slot(now.date());
                let interview = applications
                    .approve_and_schedule(
                        id,
                        date.unwrap_or(default_date),
                        time.unwrap_or(default_time),
                        now,
                    )
                    .await?;
                to_json(&interview)
            }
        }
    }

    async fn interview(
        &self,
        action: InterviewCommands,
        now: NaiveDateTime,
    ) -> CliErrorResult<Output> {
        let interviews = InterviewRepository::new(self.pool("interview")?);
        match action {
            InterviewCommands::List => to_json(&interviews.list_all().await?),
            InterviewCommands::Schedule {
                application_id,
                applicant_id,
                job_id,
                date,
                time,
                notes,
            } => {
                let new = NewInterview {
                    application_id,
                    applicant_id,
                    job_id,
                    interview_date: date,
                    interview_time: time,
                    notes,
                };
                let id = interviews.create(&new, now).await?;
                to_json(&interviews.find_by_id(id).await?)
            }
            InterviewCommands::Status { id, status } => {
                let status: InterviewStatus = status.parse()?;
                let updated = interviews.update_status(id, status).await?;
                Ok(Output::Json(json!({ "updated": updated })))
            }
        }
    }

    async fn need(&self, action: NeedCommands, now: NaiveDateTime) -> CliErrorResult<Output> {
        let needs = NeedRepository::new(self.pool("need")?);
        match action {
            NeedCommands::Create {
                applicant_id,
                description,
                category,
            } => {
                let id = needs
                    .create(applicant_id, &description, &category, now)
                    .await?;
                Ok(Output::Json(json!({ "need_id": id })))
            }
            NeedCommands::List { applicant_id } => {
                to_json(&needs.list_for_applicant(applicant_id).await?)
            }
        }
    }

    async fn skill(&self, action: SkillCommands) -> CliErrorResult<Output> {
        let skills = SkillRepository::new(self.pool("skill")?);
        match action {
            SkillCommands::Add {
                applicant_id,
                name,
                level,
            } => {
                let id = skills.add(applicant_id, &name, &level).await?;
                Ok(Output::Json(json!({ "skill_id": id })))
            }
            SkillCommands::List { applicant_id } => {
                to_json(&skills.list_for_applicant(applicant_id).await?)
            }
            SkillCommands::Delete { skill_id } => {
                Ok(Output::Json(json!({ "deleted": skills.delete(skill_id).await? })))
            }
        }
    }

    async fn attendance(
        &self,
        action: AttendanceCommands,
        now: NaiveDateTime,
    ) -> CliErrorResult<Output> {
        let attendance = AttendanceRepository::new(self.pool("attendance")?);
        match action {
            AttendanceCommands::TimeIn { applicant_id } => {
                attendance.time_in(applicant_id, now).await?;
                to_json(&attendance.today(applicant_id, now.date()).await?)
            }
            AttendanceCommands::TimeOut { applicant_id } => {
                to_json(&attendance.time_out(applicant_id, now).await?)
            }
            AttendanceCommands::List { applicant_id } => {
                to_json(&attendance.list_for_applicant(applicant_id).await?)
            }
            AttendanceCommands::Today { applicant_id } => {
                to_json(&attendance.today(applicant_id, now.date()).await?)
            }
        }
    }

    async fn training(
        &self,
        action: TrainingCommands,
        now: NaiveDateTime,
    ) -> CliErrorResult<Output> {
        let training = TrainingRepository::new(self.pool("training")?);
        match action {
            TrainingCommands::Create {
                title,
                description,
                duration_days,
                skills,
            } => {
                let id = training
                    .create_program(&title, &description, duration_days, &skills)
                    .await?;
                Ok(Output::Json(json!({ "program_id": id })))
            }
            TrainingCommands::List => to_json(&training.list_programs().await?),
            TrainingCommands::Delete { program_id } => Ok(Output::Json(
                json!({ "deleted": training.delete_program(program_id).await? }),
            )),
            TrainingCommands::Enroll {
                applicant_id,
                program_id,
            } => {
                let id = training.enroll(applicant_id, program_id, now).await?;
                Ok(Output::Json(json!({ "enrollment_id": id })))
            }
            TrainingCommands::Enrollments { applicant_id } => match applicant_id {
                Some(id) => to_json(&training.list_for_applicant(id).await?),
                None => to_json(&training.list_enrollments().await?),
            },
        }
    }

    async fn employment(
        &self,
        action: EmploymentCommands,
        now: NaiveDateTime,
    ) -> CliErrorResult<Output> {
        let employment = EmploymentRepository::new(self.pool("employment")?);
        match action {
            EmploymentCommands::Create {
                applicant_id,
                job_id,
                monthly_income,
            } => {
                let id = employment
                    .create(applicant_id, job_id, monthly_income, now)
                    .await?;
                Ok(Output::Json(json!({ "employment_id": id })))
            }
            EmploymentCommands::List { applicant_id } => match applicant_id {
                Some(id) => to_json(&employment.list_for_applicant(id).await?),
                None => to_json(&employment.list_all().await?),
            },
        }
    }

    async fn household(&self, action: HouseholdCommands) -> CliErrorResult<Output> {
        let households = HouseholdRepository::new(self.pool("household")?);
        match action {
            HouseholdCommands::Create { name, address } => {
                let id = households.create(&name, &address).await?;
                Ok(Output::Json(json!({ "household_id": id })))
            }
            HouseholdCommands::List => to_json(&households.list_all().await?),
            HouseholdCommands::AddMember {
                household_id,
                applicant_id,
            } => {
                let added = households.add_member(household_id, applicant_id).await?;
                Ok(Output::Json(json!({ "added": added })))
            }
        }
    }

    async fn resource(&self, action: ResourceCommands) -> CliErrorResult<Output> {
        let resources = ResourceRepository::new(self.pool("resource")?);
        match action {
            ResourceCommands::Create { name, quantity } => {
                let id = resources.create(&name, quantity).await?;
                Ok(Output::Json(json!({ "resource_id": id })))
            }
            ResourceCommands::List => to_json(&resources.list().await?),
        }
    }

    async fn simulation(
        &self,
        action: SimulationCommands,
        now: NaiveDateTime,
    ) -> CliErrorResult<Output> {
        let simulations = SimulationRepository::new(self.pool("simulation")?);
        match action {
            SimulationCommands::Create {
                description,
                results,
            } => {
                let run_at = now.format(ACCOUNT_TIME_FORMAT).to_string();
                let id = simulations.create(&description, &run_at, &results).await?;
                Ok(Output::Json(json!({ "simulation_id": id })))
            }
            SimulationCommands::List => to_json(&simulations.list().await?),
        }
    }

    async fn report(&self, action: ReportCommands, now: NaiveDateTime) -> CliErrorResult<Output> {
        let reports = ReportRepository::new(self.pool("report")?);
        match action {
            ReportCommands::Metrics => to_json(&reports.program_metrics().await?),
            ReportCommands::Summary => Ok(Output::Text(
                reports.program_metrics().await?.render_report(now),
            )),
            ReportCommands::Export { dataset, output } => match (dataset, output) {
                (ExportArg::All, None) => self.export_to(&reports, dataset, Path::new(".")).await,
                (_, Some(dir)) => self.export_to(&reports, dataset, &dir).await,
                (_, None) => {
                    let mut text = String::new();
                    for kind in dataset.kinds() {
                        text.push_str(&reports.export_csv(kind).await?);
                    }
                    Ok(Output::Text(text))
                }
            },
        }
    }

    async fn export_to(
        &self,
        reports: &ReportRepository,
        dataset: ExportArg,
        dir: &Path,
    ) -> CliErrorResult<Output> {
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| CliError::Io {
                path: dir.to_path_buf(),
                source: e,
            })?;

        let mut written = Vec::new();
        for kind in dataset.kinds() {
            let path = dir.join(kind.file_name());
            let csv = reports.export_csv(kind).await?;
            tokio::fs::write(&path, csv)
                .await
                .map_err(|e| CliError::Io {
                    path: path.clone(),
                    source: e,
                })?;
            log::info!("Exported {}", path.display());
            written.push(path.display().to_string());
        }
        Ok(Output::Json(json!({ "written": written })))
    }
}
