//! Quiz-scored admissions: question banks, application intake with automatic scoring, and
//! administrative decisions.

pub mod domain;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    ApplicationDetail, ApplicationId, ApplicationListing, ApplicationRecord, ApplicationStatus,
    ApplicationSubmission, Candidate, DecisionPatch, DecisionRequest, NewApplication,
    NewQuestion, NewResponse, Question, QuestionId, ResponseId, ResponseRecord,
    SubmissionReceipt,
};
pub use repository::AdmissionsRepository;
pub use router::admissions_router;
pub use scoring::{grade, ScoreSheet};
pub use service::{AdmissionsError, AdmissionsService};
