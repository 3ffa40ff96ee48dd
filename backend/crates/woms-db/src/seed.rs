//! Demonstration data for a fresh database.

use crate::{
    ApplicationRepository, HouseholdRepository, JobRepository, ResourceRepository, Result,
    SimulationRepository, UserRepository,
};

use woms_core::{ApplicationDetails, ApplicationStatus, LIVELIHOOD_JOBS};

use chrono::NaiveDateTime;
use sqlx::SqlitePool;

const SAMPLE_PASSWORD: &str = "password123";

struct SampleApplicant {
    username: &'static str,
    name: &'static str,
    age: i64,
    phone: &'static str,
}

const APPLICANTS: [SampleApplicant; 5] = [
    SampleApplicant { username: "maria_santos", name: "Maria Santos", age: 35, phone: "555-0101" },
    SampleApplicant { username: "juan_delacruz", name: "Juan Dela Cruz", age: 42, phone: "555-0102" },
    SampleApplicant { username: "rosa_garcia", name: "Rosa Garcia", age: 28, phone: "555-0103" },
    SampleApplicant { username: "carlos_reyes", name: "Carlos Reyes", age: 38, phone: "555-0104" },
    SampleApplicant { username: "ana_torres", name: "Ana Torres", age: 31, phone: "555-0105" },
];

/// (applicant index, job title, first, middle, last, gender, address, experience)
type SampleApplication = (
    usize,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
);

const APPLICATIONS: [SampleApplication; 8] = [
    (0, "Construction Worker", "Maria", "Santos", "Santos", "Female", "123 Barangay Street, City", "3 years construction experience"),
    (0, "Food Service Worker", "Maria", "Santos", "Santos", "Female", "123 Barangay Street, City", "2 years food service"),
    (1, "Farm Laborer", "Juan", "Dela", "Cruz", "Male", "456 Rural Road, Province", "10 years farming experience"),
    (1, "Delivery Driver", "Juan", "Dela", "Cruz", "Male", "456 Rural Road, Province", "5 years driving experience"),
    (2, "Housekeeping Staff", "Rosa", "", "Garcia", "Female", "789 Village Lane, City", "2 years housekeeping"),
    (3, "Security Guard", "Carlos", "Reyes", "Reyes", "Male", "321 Community Ave, City", "4 years security work"),
    (4, "Food Service Worker", "Ana", "Torres", "Torres", "Female", "654 Neighborhood St, City", "3 years food service"),
    (2, "Construction Worker", "Rosa", "", "Garcia", "Female", "789 Village Lane, City", "1 year construction"),
];

/// Index into APPLICATIONS and the status it ends up with.
const STATUS_UPDATES: [(usize, ApplicationStatus); 3] = [
    (0, ApplicationStatus::Approved),
    (2, ApplicationStatus::Approved),
    (4, ApplicationStatus::Pending),
];

const HOUSEHOLDS: [(&str, &str); 3] = [
    ("Santos Family", "123 Barangay Street, City"),
    ("Dela Cruz Residence", "456 Rural Road, Province"),
    ("Garcia Household", "789 Village Lane, City"),
];

/// (household index, applicant index)
const MEMBERSHIPS: [(usize, usize); 4] = [(0, 0), (1, 1), (2, 2), (0, 3)];

const RESOURCES: [(&str, i64); 8] = [
    ("Rice (50kg bags)", 100),
    ("Canned Goods", 500),
    ("Clothing (sets)", 200),
    ("Blankets", 150),
    ("Hygiene Kits", 300),
    ("School Supplies", 250),
    ("Medical Supplies", 100),
    ("Water Containers", 80),
];

const SIMULATIONS: [(&str, &str); 2] = [
    (
        "Initial System Analysis",
        "Total applicants: 5, Total jobs: 6, Pending applications: 4",
    ),
    (
        "Resource Allocation Check",
        "Resources available: 8 types, Total items: 1680",
    ),
];

/// Populates an empty database with sample applicants, applications,
/// households, resources and simulations.
///
/// Does nothing once any applicant exists. Returns whether data was written.
pub async fn seed_sample_data(pool: &SqlitePool, now: NaiveDateTime) -> Result<bool> {
    let users = UserRepository::new(pool.clone());
    if users.count_applicants().await? > 0 {
        log::info!("Sample data already exists, skipping seed");
        return Ok(false);
    }

    log::info!("Seeding sample data");

    let mut applicant_ids = Vec::with_capacity(APPLICANTS.len());
    for applicant in &APPLICANTS {
        let id = users
            .create_applicant(
                applicant.username,
                SAMPLE_PASSWORD,
                applicant.name,
                applicant.age,
                applicant.phone,
            )
            .await?;
        applicant_ids.push(id);
    }

    let jobs = JobRepository::new(pool.clone());
    let applications = ApplicationRepository::new(pool.clone());
    let mut application_ids = Vec::with_capacity(APPLICATIONS.len());
    for (applicant, title, first, middle, last, gender, address, experience) in APPLICATIONS {
        let job_id = catalog_job_id(&jobs, title).await?;
        let details = ApplicationDetails {
            job_id,
            first_name: first.to_string(),
            middle_name: middle.to_string(),
            last_name: last.to_string(),
            gender: gender.to_string(),
            age: APPLICANTS[applicant].age,
            address: address.to_string(),
            experience: experience.to_string(),
        };
        let id = applications
            .create(applicant_ids[applicant], &details, now)
            .await?;
        application_ids.push(id);
    }

    for (index, status) in STATUS_UPDATES {
        applications
            .update_status(application_ids[index], status)
            .await?;
    }

    let households = HouseholdRepository::new(pool.clone());
    let mut household_ids = Vec::with_capacity(HOUSEHOLDS.len());
    for (name, address) in HOUSEHOLDS {
        household_ids.push(households.create(name, address).await?);
    }
    for (household, applicant) in MEMBERSHIPS {
        households
            .add_member(household_ids[household], applicant_ids[applicant])
            .await?;
    }

    let resources = ResourceRepository::new(pool.clone());
    for (name, quantity) in RESOURCES {
        resources.create(name, quantity).await?;
    }

    let simulations = SimulationRepository::new(pool.clone());
    let run_at = now.format(woms_core::ACCOUNT_TIME_FORMAT).to_string();
    for (description, results) in SIMULATIONS {
        simulations.create(description, &run_at, results).await?;
    }

    log::info!(
        "Seeded {} applicants and {} applications",
        applicant_ids.len(),
        application_ids.len()
    );
    Ok(true)
}

/// Id of the catalog job with this title, inserting it if the catalog was
/// not restored beforehand.
async fn catalog_job_id(jobs: &JobRepository, title: &str) -> Result<i64> {
    if let Some(job) = jobs.find_by_title(title).await? {
        return Ok(job.id);
    }

    let entry = LIVELIHOOD_JOBS
        .iter()
        .find(|j| j.title == title)
        .ok_or_else(|| crate::DbError::not_found("Catalog job", title))?;
    let job = jobs.create(entry.title, entry.description, entry.salary).await?;
    Ok(job.id)
}
