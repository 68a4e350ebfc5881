//! Catalog management behind the dashboard: programs, cohorts, learners, staff, learner
//! comments and headline statistics.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    Cohort, CohortDraft, CohortId, CohortListing, Comment, CommentDraft, CommentId, CommentKind,
    DashboardStats, Learner, LearnerDraft, LearnerId, LearnerListing, LearnerStatus, Program,
    ProgramDraft, ProgramId, Removal, StaffDraft, StaffId, StaffMember,
};
pub use repository::BackOfficeRepository;
pub use router::backoffice_router;
pub use service::{BackOfficeError, BackOfficeService};
