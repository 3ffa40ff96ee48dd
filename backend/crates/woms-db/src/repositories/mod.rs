pub mod application_repository;
pub mod attendance_repository;
pub mod employment_repository;
pub mod household_repository;
pub mod interview_repository;
pub mod job_repository;
pub mod need_repository;
pub mod report_repository;
pub mod resource_repository;
pub mod simulation_repository;
pub mod skill_repository;
pub mod training_repository;
pub mod user_repository;
