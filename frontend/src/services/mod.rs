pub mod api;
pub mod auth;
pub mod courses;
pub mod download;
pub mod fees;
pub mod finance;
pub mod logging;
pub mod payments;
pub mod reconciliation;
pub mod reports;
pub mod students;
