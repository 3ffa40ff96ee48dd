pub mod account;
pub mod applicant;
pub mod applicant_need;
pub mod application;
pub mod application_status;
pub mod attendance;
pub mod employment;
pub mod employment_state;
pub mod household;
pub mod interview;
pub mod interview_status;
pub mod job;
pub mod role;
pub mod training;
