use crate::store::RepositoryError;
use crate::workflows::backoffice::ProgramId;

use super::domain::{
    ApplicationId, ApplicationListing, ApplicationRecord, DecisionPatch, NewApplication,
    NewQuestion, NewResponse, Question, QuestionId, ResponseRecord,
};

/// Storage abstraction for question banks, applications and their responses.
pub trait AdmissionsRepository: Send + Sync {
    /// Questions of `program` in insertion order. Unknown programs yield an empty list.
    fn questions_for_program(&self, program: ProgramId) -> Result<Vec<Question>, RepositoryError>;

    fn insert_question(&self, question: NewQuestion) -> Result<QuestionId, RepositoryError>;

    /// Persist an application and all of its responses as one unit: either every row is
    /// stored or none is.
    fn insert_application(
        &self,
        application: NewApplication,
        responses: Vec<NewResponse>,
    ) -> Result<ApplicationId, RepositoryError>;

    /// Overwrite the decision fields of an application. `NotFound` leaves the store untouched.
    fn record_decision(
        &self,
        id: ApplicationId,
        patch: DecisionPatch,
    ) -> Result<(), RepositoryError>;

    fn fetch_application(
        &self,
        id: ApplicationId,
    ) -> Result<Option<ApplicationRecord>, RepositoryError>;

    fn responses_for(&self, id: ApplicationId) -> Result<Vec<ResponseRecord>, RepositoryError>;

    /// Every application, newest first, joined with its program name.
    fn applications(&self) -> Result<Vec<ApplicationListing>, RepositoryError>;
}
