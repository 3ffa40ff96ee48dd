mod catalog;
mod models;
mod reports;
