use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{get, post, put},
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};

use super::domain::{
    CohortDraft, CohortId, CohortListing, Comment, CommentDraft, CommentId, DashboardStats,
    LearnerDraft, LearnerId, LearnerListing, Program, ProgramDraft, ProgramId, StaffDraft, StaffId,
    StaffMember,
};
use super::repository::BackOfficeRepository;
use super::service::{BackOfficeError, BackOfficeService};

type Shared<R> = State<Arc<BackOfficeService<R>>>;

/// Router builder exposing the dashboard CRUD endpoints.
pub fn backoffice_router<R>(service: Arc<BackOfficeService<R>>) -> Router
where
    R: BackOfficeRepository + 'static,
{
    Router::new()
        .route(
            "/api/programs",
            get(list_programs::<R>).post(create_program::<R>),
        )
        .route(
            "/api/programs/{program_id}",
            get(show_program::<R>)
                .put(update_program::<R>)
                .delete(delete_program::<R>),
        )
        .route(
            "/api/cohorts",
            get(list_cohorts::<R>).post(create_cohort::<R>),
        )
        .route(
            "/api/cohorts/{cohort_id}",
            put(update_cohort::<R>).delete(delete_cohort::<R>),
        )
        .route(
            "/api/learners",
            get(list_learners::<R>).post(create_learner::<R>),
        )
        .route(
            "/api/learners/{learner_id}",
            put(update_learner::<R>).delete(delete_learner::<R>),
        )
        .route(
            "/api/learners/{learner_id}/comments",
            get(list_comments::<R>),
        )
        .route("/api/comments", post(create_comment::<R>))
        .route("/api/staff", get(list_staff::<R>).post(create_staff::<R>))
        .route(
            "/api/staff/{staff_id}",
            put(update_staff::<R>).delete(delete_staff::<R>),
        )
        .route("/api/stats", get(stats::<R>))
        .with_state(service)
}

#[derive(Debug, Serialize)]
struct Created<T> {
    id: T,
}

fn changed(message: &str) -> Json<Value> {
    Json(json!({ "message": message, "changes": 1 }))
}

async fn list_programs<R>(State(service): Shared<R>) -> Result<Json<Vec<Program>>, BackOfficeError>
where
    R: BackOfficeRepository + 'static,
{
    Ok(Json(service.programs()?))
}

async fn show_program<R>(
    State(service): Shared<R>,
    Path(program_id): Path<i64>,
) -> Result<Json<Program>, BackOfficeError>
where
    R: BackOfficeRepository + 'static,
{
    Ok(Json(service.program(ProgramId(program_id))?))
}

async fn create_program<R>(
    State(service): Shared<R>,
    payload: Result<Json<ProgramDraft>, JsonRejection>,
) -> Result<Json<Created<ProgramId>>, BackOfficeError>
where
    R: BackOfficeRepository + 'static,
{
    let Json(draft) = payload?;
    let id = service.create_program(draft)?;
    Ok(Json(Created { id }))
}

async fn update_program<R>(
    State(service): Shared<R>,
    Path(program_id): Path<i64>,
    payload: Result<Json<ProgramDraft>, JsonRejection>,
) -> Result<Json<Value>, BackOfficeError>
where
    R: BackOfficeRepository + 'static,
{
    let Json(draft) = payload?;
    service.update_program(ProgramId(program_id), draft)?;
    Ok(changed("program updated"))
}

async fn delete_program<R>(
    State(service): Shared<R>,
    Path(program_id): Path<i64>,
) -> Result<Json<Value>, BackOfficeError>
where
    R: BackOfficeRepository + 'static,
{
    service.delete_program(ProgramId(program_id))?;
    Ok(changed("program deleted"))
}

async fn list_cohorts<R>(
    State(service): Shared<R>,
) -> Result<Json<Vec<CohortListing>>, BackOfficeError>
where
    R: BackOfficeRepository + 'static,
{
    Ok(Json(service.cohorts()?))
}

async fn create_cohort<R>(
    State(service): Shared<R>,
    payload: Result<Json<CohortDraft>, JsonRejection>,
) -> Result<Json<Created<CohortId>>, BackOfficeError>
where
    R: BackOfficeRepository + 'static,
{
    let Json(draft) = payload?;
    let id = service.create_cohort(draft)?;
    Ok(Json(Created { id }))
}

async fn update_cohort<R>(
    State(service): Shared<R>,
    Path(cohort_id): Path<i64>,
    payload: Result<Json<CohortDraft>, JsonRejection>,
) -> Result<Json<Value>, BackOfficeError>
where
    R: BackOfficeRepository + 'static,
{
    let Json(draft) = payload?;
    service.update_cohort(CohortId(cohort_id), draft)?;
    Ok(changed("cohort updated"))
}

async fn delete_cohort<R>(
    State(service): Shared<R>,
    Path(cohort_id): Path<i64>,
) -> Result<Json<Value>, BackOfficeError>
where
    R: BackOfficeRepository + 'static,
{
    service.delete_cohort(CohortId(cohort_id))?;
    Ok(changed("cohort deleted"))
}

async fn list_learners<R>(
    State(service): Shared<R>,
) -> Result<Json<Vec<LearnerListing>>, BackOfficeError>
where
    R: BackOfficeRepository + 'static,
{
    Ok(Json(service.learners()?))
}

async fn create_learner<R>(
    State(service): Shared<R>,
    payload: Result<Json<LearnerDraft>, JsonRejection>,
) -> Result<Json<Created<LearnerId>>, BackOfficeError>
where
    R: BackOfficeRepository + 'static,
{
    let Json(draft) = payload?;
    let id = service.create_learner(draft)?;
    Ok(Json(Created { id }))
}

async fn update_learner<R>(
    State(service): Shared<R>,
    Path(learner_id): Path<i64>,
    payload: Result<Json<LearnerDraft>, JsonRejection>,
) -> Result<Json<Value>, BackOfficeError>
where
    R: BackOfficeRepository + 'static,
{
    let Json(draft) = payload?;
    service.update_learner(LearnerId(learner_id), draft)?;
    Ok(changed("learner updated"))
}

async fn delete_learner<R>(
    State(service): Shared<R>,
    Path(learner_id): Path<i64>,
) -> Result<Json<Value>, BackOfficeError>
where
    R: BackOfficeRepository + 'static,
{
    service.delete_learner(LearnerId(learner_id))?;
    Ok(changed("learner deleted"))
}

async fn list_comments<R>(
    State(service): Shared<R>,
    Path(learner_id): Path<i64>,
) -> Result<Json<Vec<Comment>>, BackOfficeError>
where
    R: BackOfficeRepository + 'static,
{
    Ok(Json(service.comments(LearnerId(learner_id))?))
}

async fn create_comment<R>(
    State(service): Shared<R>,
    payload: Result<Json<CommentDraft>, JsonRejection>,
) -> Result<Json<Created<CommentId>>, BackOfficeError>
where
    R: BackOfficeRepository + 'static,
{
    let Json(draft) = payload?;
    let id = service.add_comment(draft)?;
    Ok(Json(Created { id }))
}

async fn list_staff<R>(
    State(service): Shared<R>,
) -> Result<Json<Vec<StaffMember>>, BackOfficeError>
where
    R: BackOfficeRepository + 'static,
{
    Ok(Json(service.staff()?))
}

async fn create_staff<R>(
    State(service): Shared<R>,
    payload: Result<Json<StaffDraft>, JsonRejection>,
) -> Result<Json<Created<StaffId>>, BackOfficeError>
where
    R: BackOfficeRepository + 'static,
{
    let Json(draft) = payload?;
    let id = service.create_staff(draft)?;
    Ok(Json(Created { id }))
}

async fn update_staff<R>(
    State(service): Shared<R>,
    Path(staff_id): Path<i64>,
    payload: Result<Json<StaffDraft>, JsonRejection>,
) -> Result<Json<Value>, BackOfficeError>
where
    R: BackOfficeRepository + 'static,
{
    let Json(draft) = payload?;
    service.update_staff(StaffId(staff_id), draft)?;
    Ok(changed("staff member updated"))
}

async fn delete_staff<R>(
    State(service): Shared<R>,
    Path(staff_id): Path<i64>,
) -> Result<Json<Value>, BackOfficeError>
where
    R: BackOfficeRepository + 'static,
{
    service.delete_staff(StaffId(staff_id))?;
    Ok(changed("staff member deleted"))
}

async fn stats<R>(State(service): Shared<R>) -> Result<Json<DashboardStats>, BackOfficeError>
where
    R: BackOfficeRepository + 'static,
{
    Ok(Json(service.stats()?))
}
