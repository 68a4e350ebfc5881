use crate::store::RepositoryError;

use super::domain::{
    Cohort, CohortDraft, CohortId, CohortListing, Comment, CommentDraft, CommentId,
    DashboardStats, LearnerDraft, LearnerId, LearnerListing, Program, ProgramDraft, ProgramId,
    Removal, StaffDraft, StaffId, StaffMember,
};

/// Storage abstraction for the catalog tables managed from the dashboard.
///
/// Listings come back newest first. Updates and deletes report `NotFound` when no row matches.
pub trait BackOfficeRepository: Send + Sync {
    fn programs(&self) -> Result<Vec<Program>, RepositoryError>;
    fn fetch_program(&self, id: ProgramId) -> Result<Option<Program>, RepositoryError>;
    fn insert_program(&self, draft: ProgramDraft) -> Result<ProgramId, RepositoryError>;
    fn update_program(&self, id: ProgramId, draft: ProgramDraft) -> Result<(), RepositoryError>;
    /// Refuses while the program still has questions in its bank, reporting how many. Otherwise
    /// removes it and detaches the cohorts attached to it.
    fn delete_program(&self, id: ProgramId) -> Result<Removal<Program>, RepositoryError>;

    fn cohorts(&self) -> Result<Vec<CohortListing>, RepositoryError>;
    fn insert_cohort(&self, draft: CohortDraft) -> Result<CohortId, RepositoryError>;
    fn update_cohort(&self, id: CohortId, draft: CohortDraft) -> Result<(), RepositoryError>;
    /// Removes the cohort and detaches its learners.
    fn delete_cohort(&self, id: CohortId) -> Result<Cohort, RepositoryError>;

    fn learners(&self) -> Result<Vec<LearnerListing>, RepositoryError>;
    fn insert_learner(&self, draft: LearnerDraft) -> Result<LearnerId, RepositoryError>;
    fn update_learner(&self, id: LearnerId, draft: LearnerDraft) -> Result<(), RepositoryError>;
    /// Removes the learner together with their comments.
    fn delete_learner(&self, id: LearnerId) -> Result<(), RepositoryError>;

    fn staff(&self) -> Result<Vec<StaffMember>, RepositoryError>;
    fn insert_staff(&self, draft: StaffDraft) -> Result<StaffId, RepositoryError>;
    fn update_staff(&self, id: StaffId, draft: StaffDraft) -> Result<(), RepositoryError>;
    /// Refuses while any cohort names the staff member as referent, reporting how many. The
    /// check and the removal happen as one operation.
    fn delete_staff(&self, id: StaffId) -> Result<Removal<StaffMember>, RepositoryError>;

    fn comments_for(&self, learner: LearnerId) -> Result<Vec<Comment>, RepositoryError>;
    fn insert_comment(&self, draft: CommentDraft) -> Result<CommentId, RepositoryError>;

    fn stats(&self) -> Result<DashboardStats, RepositoryError>;
}
