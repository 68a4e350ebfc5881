use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::{info, warn};

use crate::store::RepositoryError;

use super::domain::{
    CohortDraft, CohortId, CohortListing, Comment, CommentDraft, CommentId, DashboardStats,
    LearnerDraft, LearnerId, LearnerListing, Program, ProgramDraft, ProgramId, Removal,
    StaffDraft, StaffId, StaffMember,
};
use super::repository::BackOfficeRepository;

/// Thin service over the catalog tables. Deletes of referenced staff members and programs are
/// refused.
pub struct BackOfficeService<R> {
    repository: Arc<R>,
}

impl<R> BackOfficeService<R>
where
    R: BackOfficeRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub fn programs(&self) -> Result<Vec<Program>, BackOfficeError> {
        Ok(self.repository.programs()?)
    }

    pub fn program(&self, id: ProgramId) -> Result<Program, BackOfficeError> {
        Ok(self
            .repository
            .fetch_program(id)?
            .ok_or(RepositoryError::NotFound)?)
    }

    pub fn create_program(&self, draft: ProgramDraft) -> Result<ProgramId, BackOfficeError> {
        Ok(self.repository.insert_program(draft)?)
    }

    pub fn update_program(
        &self,
        id: ProgramId,
        draft: ProgramDraft,
    ) -> Result<(), BackOfficeError> {
        Ok(self.repository.update_program(id, draft)?)
    }

    /// Refuses to delete a program whose question bank is not empty; its cohorts are detached.
    pub fn delete_program(&self, id: ProgramId) -> Result<(), BackOfficeError> {
        match self.repository.delete_program(id)? {
            Removal::Removed(program) => {
                info!(program_id = id.0, name = %program.name, "program deleted");
                Ok(())
            }
            Removal::Referenced(questions) => {
                warn!(program_id = id.0, questions, "refusing to delete program with questions");
                Err(BackOfficeError::ProgramInUse {
                    program_id: id,
                    questions,
                })
            }
        }
    }

    pub fn cohorts(&self) -> Result<Vec<CohortListing>, BackOfficeError> {
        Ok(self.repository.cohorts()?)
    }

    pub fn create_cohort(&self, draft: CohortDraft) -> Result<CohortId, BackOfficeError> {
        Ok(self.repository.insert_cohort(draft)?)
    }

    pub fn update_cohort(&self, id: CohortId, draft: CohortDraft) -> Result<(), BackOfficeError> {
        Ok(self.repository.update_cohort(id, draft)?)
    }

    pub fn delete_cohort(&self, id: CohortId) -> Result<(), BackOfficeError> {
        let removed = self.repository.delete_cohort(id)?;
        info!(cohort_id = id.0, name = %removed.name, "cohort deleted");
        Ok(())
    }

    pub fn learners(&self) -> Result<Vec<LearnerListing>, BackOfficeError> {
        Ok(self.repository.learners()?)
    }

    pub fn create_learner(&self, draft: LearnerDraft) -> Result<LearnerId, BackOfficeError> {
        Ok(self.repository.insert_learner(draft)?)
    }

    /// Full overwrite of the learner's fields, status and cohort included.
    pub fn update_learner(
        &self,
        id: LearnerId,
        draft: LearnerDraft,
    ) -> Result<(), BackOfficeError> {
        let status = draft.status;
        self.repository.update_learner(id, draft)?;
        info!(learner_id = id.0, ?status, "learner updated");
        Ok(())
    }

    pub fn delete_learner(&self, id: LearnerId) -> Result<(), BackOfficeError> {
        self.repository.delete_learner(id)?;
        info!(learner_id = id.0, "learner deleted");
        Ok(())
    }

    pub fn staff(&self) -> Result<Vec<StaffMember>, BackOfficeError> {
        Ok(self.repository.staff()?)
    }

    pub fn create_staff(&self, draft: StaffDraft) -> Result<StaffId, BackOfficeError> {
        Ok(self.repository.insert_staff(draft)?)
    }

    pub fn update_staff(&self, id: StaffId, draft: StaffDraft) -> Result<(), BackOfficeError> {
        Ok(self.repository.update_staff(id, draft)?)
    }

    /// Refuses to delete a staff member still acting as referent of a cohort.
    pub fn delete_staff(&self, id: StaffId) -> Result<(), BackOfficeError> {
        match self.repository.delete_staff(id)? {
            Removal::Removed(_) => {
                info!(staff_id = id.0, "staff member deleted");
                Ok(())
            }
            Removal::Referenced(cohorts) => {
                warn!(staff_id = id.0, cohorts, "refusing to delete cohort referent");
                Err(BackOfficeError::ReferentInUse {
                    staff_id: id,
                    cohorts,
                })
            }
        }
    }

    pub fn comments(&self, learner: LearnerId) -> Result<Vec<Comment>, BackOfficeError> {
        Ok(self.repository.comments_for(learner)?)
    }

    pub fn add_comment(&self, draft: CommentDraft) -> Result<CommentId, BackOfficeError> {
        Ok(self.repository.insert_comment(draft)?)
    }

    pub fn stats(&self) -> Result<DashboardStats, BackOfficeError> {
        Ok(self.repository.stats()?)
    }
}

/// Error raised by the back-office service.
#[derive(Debug, thiserror::Error)]
pub enum BackOfficeError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(
        "staff member {staff_id} is referent of {cohorts} cohort(s); assign a new referent first"
    )]
    ReferentInUse { staff_id: StaffId, cohorts: usize },
    #[error("program {program_id} has {questions} admission question(s) and cannot be deleted")]
    ProgramInUse {
        program_id: ProgramId,
        questions: usize,
    },
    #[error("{}", .0.body_text())]
    InvalidBody(#[from] JsonRejection),
}

impl IntoResponse for BackOfficeError {
    fn into_response(self) -> Response {
        let status = match &self {
            BackOfficeError::Repository(error) => error.status_code(),
            BackOfficeError::ReferentInUse { .. } | BackOfficeError::ProgramInUse { .. } => {
                StatusCode::BAD_REQUEST
            }
            BackOfficeError::InvalidBody(rejection) => rejection.status(),
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
