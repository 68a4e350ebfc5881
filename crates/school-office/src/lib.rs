//! Back-office for a training school: catalog management (programs, cohorts, learners, staff)
//! and the quiz-scored admissions workflow.

pub mod config;
pub mod error;
pub mod store;
pub mod telemetry;
pub mod workflows;
