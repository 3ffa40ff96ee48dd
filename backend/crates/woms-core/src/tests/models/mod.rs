mod account;
mod application;
mod attendance;
mod job;
mod role;
mod statuses;
mod interview;
