use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde_json::json;
use tracing::{debug, info};

use crate::store::RepositoryError;
use crate::workflows::backoffice::ProgramId;

use super::domain::{
    ApplicationDetail, ApplicationId, ApplicationListing, ApplicationSubmission, DecisionPatch,
    DecisionRequest, NewApplication, NewQuestion, Question, QuestionId, SubmissionReceipt,
};
use super::repository::AdmissionsRepository;
use super::scoring::grade;

/// Service composing the question bank, the scorer and decision recording over one repository.
pub struct AdmissionsService<R> {
    repository: Arc<R>,
}

impl<R> AdmissionsService<R>
where
    R: AdmissionsRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Question bank of `program` in insertion order; empty when the program is unknown.
    pub fn fetch_questions(&self, program: ProgramId) -> Result<Vec<Question>, AdmissionsError> {
        Ok(self.repository.questions_for_program(program)?)
    }

    pub fn add_question(&self, question: NewQuestion) -> Result<QuestionId, AdmissionsError> {
        let program = question.program_id;
        let id = self.repository.insert_question(question)?;
        debug!(question_id = id.0, program_id = program.0, "question added to bank");
        Ok(id)
    }

    /// Score the submitted answers against the program's question bank and record the
    /// application with one response per question. A submission without a program is graded
    /// against an empty bank.
    pub fn submit(
        &self,
        submission: ApplicationSubmission,
    ) -> Result<SubmissionReceipt, AdmissionsError> {
        let ApplicationSubmission {
            candidate,
            program_id,
            answers,
        } = submission;

        let questions = match program_id {
            Some(program) => self.repository.questions_for_program(program)?,
            None => Vec::new(),
        };
        let sheet = grade(&questions, &answers);

        let application = NewApplication {
            candidate,
            program_id,
            score: sheet.score,
            submitted_at: Utc::now(),
        };
        let id = self
            .repository
            .insert_application(application, sheet.responses)?;

        info!(
            application_id = id.0,
            program_id = program_id.map(|program| program.0),
            score = sheet.score,
            total = sheet.total,
            "application recorded"
        );

        Ok(SubmissionReceipt {
            id,
            score: sheet.score,
            total: sheet.total,
        })
    }

    /// Overwrite the decision on an application. Re-deciding an already decided application is
    /// allowed so administrators can correct earlier decisions.
    pub fn record_decision(
        &self,
        id: ApplicationId,
        decision: DecisionRequest,
    ) -> Result<(), AdmissionsError> {
        let status = decision.status;
        let patch = DecisionPatch {
            status,
            admin_comment: decision.admin_comment,
            rejection_justification: decision.rejection_justification,
            decided_at: Utc::now(),
        };

        self.repository.record_decision(id, patch)?;
        info!(application_id = id.0, status = status.label(), "decision recorded");
        Ok(())
    }

    pub fn get(&self, id: ApplicationId) -> Result<ApplicationDetail, AdmissionsError> {
        let application = self
            .repository
            .fetch_application(id)?
            .ok_or(RepositoryError::NotFound)?;
        let responses = self.repository.responses_for(id)?;
        Ok(ApplicationDetail {
            application,
            responses,
        })
    }

    pub fn list(&self) -> Result<Vec<ApplicationListing>, AdmissionsError> {
        Ok(self.repository.applications()?)
    }
}

/// Error raised by the admissions service.
#[derive(Debug, thiserror::Error)]
pub enum AdmissionsError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("{}", .0.body_text())]
    InvalidBody(#[from] JsonRejection),
}

impl AdmissionsError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, AdmissionsError::Repository(RepositoryError::NotFound))
    }
}

impl IntoResponse for AdmissionsError {
    fn into_response(self) -> Response {
        let status = match &self {
            AdmissionsError::Repository(error) => error.status_code(),
            AdmissionsError::InvalidBody(rejection) => rejection.status(),
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
