use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};

use crate::workflows::backoffice::ProgramId;

use super::domain::{
    ApplicationDetail, ApplicationId, ApplicationListing, ApplicationSubmission, DecisionRequest,
    NewQuestion, Question, QuestionId, SubmissionReceipt,
};
use super::repository::AdmissionsRepository;
use super::service::{AdmissionsError, AdmissionsService};

type Shared<R> = State<Arc<AdmissionsService<R>>>;

/// Router exposing the question bank, the public application form and admin decisions.
pub fn admissions_router<R>(service: Arc<AdmissionsService<R>>) -> Router
where
    R: AdmissionsRepository + 'static,
{
    Router::new()
        .route("/api/questions", post(add_question_handler::<R>))
        .route("/api/questions/{program_id}", get(questions_handler::<R>))
        .route(
            "/api/applications",
            post(submit_handler::<R>).get(list_handler::<R>),
        )
        .route(
            "/api/applications/{application_id}",
            get(detail_handler::<R>).put(decision_handler::<R>),
        )
        .with_state(service)
}

#[derive(Debug, Serialize)]
pub(crate) struct Created {
    id: QuestionId,
}

pub(crate) async fn questions_handler<R>(
    State(service): Shared<R>,
    Path(program_id): Path<i64>,
) -> Result<Json<Vec<Question>>, AdmissionsError>
where
    R: AdmissionsRepository + 'static,
{
    Ok(Json(service.fetch_questions(ProgramId(program_id))?))
}

pub(crate) async fn add_question_handler<R>(
    State(service): Shared<R>,
    payload: Result<Json<NewQuestion>, JsonRejection>,
) -> Result<Json<Created>, AdmissionsError>
where
    R: AdmissionsRepository + 'static,
{
    let Json(question) = payload?;
    let id = service.add_question(question)?;
    Ok(Json(Created { id }))
}

pub(crate) async fn submit_handler<R>(
    State(service): Shared<R>,
    payload: Result<Json<ApplicationSubmission>, JsonRejection>,
) -> Result<Json<SubmissionReceipt>, AdmissionsError>
where
    R: AdmissionsRepository + 'static,
{
    let Json(submission) = payload?;
    Ok(Json(service.submit(submission)?))
}

pub(crate) async fn list_handler<R>(
    State(service): Shared<R>,
) -> Result<Json<Vec<ApplicationListing>>, AdmissionsError>
where
    R: AdmissionsRepository + 'static,
{
    Ok(Json(service.list()?))
}

pub(crate) async fn detail_handler<R>(
    State(service): Shared<R>,
    Path(application_id): Path<i64>,
) -> Result<Json<ApplicationDetail>, AdmissionsError>
where
    R: AdmissionsRepository + 'static,
{
    Ok(Json(service.get(ApplicationId(application_id))?))
}

pub(crate) async fn decision_handler<R>(
    State(service): Shared<R>,
    Path(application_id): Path<i64>,
    payload: Result<Json<DecisionRequest>, JsonRejection>,
) -> Result<Json<Value>, AdmissionsError>
where
    R: AdmissionsRepository + 'static,
{
    let Json(decision) = payload?;
    service.record_decision(ApplicationId(application_id), decision)?;
    Ok(Json(json!({ "success": true })))
}
