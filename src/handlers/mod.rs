//! HTTP handlers

pub mod health;
pub mod dashboard;
pub mod monitoring;
pub mod urls;
pub mod domains;
