use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use serde_json::Value;

use crate::store::{InMemorySchoolStore, RepositoryError};
use crate::workflows::admissions::domain::{
    ApplicationId, ApplicationListing, ApplicationRecord, ApplicationSubmission, Candidate,
    DecisionPatch, NewApplication, NewQuestion, NewResponse, Question, QuestionId,
    ResponseRecord,
};
use crate::workflows::admissions::repository::AdmissionsRepository;
use crate::workflows::admissions::AdmissionsService;
use crate::workflows::backoffice::ProgramId;

pub(super) fn question(program: i64, correct: &str) -> NewQuestion {
    NewQuestion {
        program_id: ProgramId(program),
        prompt: format!("Which option is {correct}?"),
        correct_answer: correct.to_string(),
        decoys: [
            format!("{correct}-1"),
            format!("{correct}-2"),
            format!("{correct}-3"),
        ],
    }
}

pub(super) fn candidate() -> Candidate {
    Candidate {
        last_name: "Dupont".to_string(),
        first_name: "Alice".to_string(),
        email: "alice.dupont@email.com".to_string(),
        motivation: "Je souhaite devenir développeuse.".to_string(),
    }
}

pub(super) fn submission(program: i64, answers: &[&str]) -> ApplicationSubmission {
    ApplicationSubmission {
        candidate: candidate(),
        program_id: Some(ProgramId(program)),
        answers: answers.iter().map(|answer| answer.to_string()).collect(),
    }
}

pub(super) fn build_service() -> (
    AdmissionsService<InMemorySchoolStore>,
    Arc<InMemorySchoolStore>,
) {
    let store = Arc::new(InMemorySchoolStore::new());
    let service = AdmissionsService::new(store.clone());
    (service, store)
}

/// Load a question bank for `program` and return the ids in bank order.
pub(super) fn load_bank(
    store: &InMemorySchoolStore,
    program: i64,
    correct: &[&str],
) -> Vec<QuestionId> {
    correct
        .iter()
        .map(|answer| {
            store
                .insert_question(question(program, answer))
                .expect("question inserted")
        })
        .collect()
}

pub(super) struct UnavailableRepository;

impl UnavailableRepository {
    fn offline<T>() -> Result<T, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

impl AdmissionsRepository for UnavailableRepository {
    fn questions_for_program(&self, _program: ProgramId) -> Result<Vec<Question>, RepositoryError> {
        Self::offline()
    }

    fn insert_question(&self, _question: NewQuestion) -> Result<QuestionId, RepositoryError> {
        Self::offline()
    }

    fn insert_application(
        &self,
        _application: NewApplication,
        _responses: Vec<NewResponse>,
    ) -> Result<ApplicationId, RepositoryError> {
        Self::offline()
    }

    fn record_decision(
        &self,
        _id: ApplicationId,
        _patch: DecisionPatch,
    ) -> Result<(), RepositoryError> {
        Self::offline()
    }

    fn fetch_application(
        &self,
        _id: ApplicationId,
    ) -> Result<Option<ApplicationRecord>, RepositoryError> {
        Self::offline()
    }

    fn responses_for(&self, _id: ApplicationId) -> Result<Vec<ResponseRecord>, RepositoryError> {
        Self::offline()
    }

    fn applications(&self) -> Result<Vec<ApplicationListing>, RepositoryError> {
        Self::offline()
    }
}

pub(super) fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).expect("serializable body")))
        .expect("valid request")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
