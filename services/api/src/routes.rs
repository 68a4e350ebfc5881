use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Extension;
use axum::Json;
use school_office::workflows::admissions::{
    admissions_router, AdmissionsRepository, AdmissionsService,
};
use school_office::workflows::backoffice::{
    backoffice_router, BackOfficeRepository, BackOfficeService,
};
use serde_json::json;
use std::sync::Arc;

/// Compose both workflow routers with the health, ready and metrics endpoints.
pub(crate) fn with_school_routes<A, B>(
    admissions: Arc<AdmissionsService<A>>,
    backoffice: Arc<BackOfficeService<B>>,
) -> axum::Router
where
    A: AdmissionsRepository + 'static,
    B: BackOfficeRepository + 'static,
{
    admissions_router(admissions)
        .merge(backoffice_router(backoffice))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, Request};
    use metrics_exporter_prometheus::PrometheusBuilder;
    use school_office::config::StoreConfig;
    use serde_json::Value;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tower::ServiceExt;

    fn app(ready: bool) -> axum::Router {
        let store = crate::infra::build_store(&StoreConfig {
            seed_demo_data: true,
        })
        .expect("store builds");
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        };
        with_school_routes(
            Arc::new(AdmissionsService::new(store.clone())),
            Arc::new(BackOfficeService::new(store)),
        )
        .layer(Extension(state))
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), 256 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&bytes).expect("json payload")
    }

    #[tokio::test]
    async fn readiness_reflects_flag() {
        let response = app(false)
            .oneshot(Request::get("/ready").body(Body::empty()).expect("request"))
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body_json(response).await, json!({ "status": "initializing" }));

        let state = AppState {
            readiness: Arc::new(AtomicBool::new(false)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        };
        state.readiness.store(true, Ordering::Release);
        let response = readiness_endpoint(Extension(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let response = app(true)
            .oneshot(Request::get("/health").body(Body::empty()).expect("request"))
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn merged_routers_serve_both_workflows() {
        let router = app(true);

        let questions = router
            .clone()
            .oneshot(
                Request::get("/api/questions/1")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("route executes");
        assert_eq!(questions.status(), StatusCode::OK);
        let bank = body_json(questions).await;
        assert_eq!(bank.as_array().map(Vec::len), Some(10));

        let submission = json!({
            "nom": "Dupont",
            "prenom": "Alice",
            "email": "alice@example.com",
            "motivation": "Reconversion",
            "programId": 1,
            "answers": ["JavaScript", "HyperText Markup Language", "Django"]
        });
        let submitted = router
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/applications")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(submission.to_string()))
                    .expect("request"),
            )
            .await
            .expect("route executes");
        assert_eq!(submitted.status(), StatusCode::OK);
        let receipt = body_json(submitted).await;
        assert_eq!(receipt["score"], json!(2));
        assert_eq!(receipt["total"], json!(10));

        let stats = router
            .oneshot(Request::get("/api/stats").body(Body::empty()).expect("request"))
            .await
            .expect("route executes");
        let stats = body_json(stats).await;
        assert_eq!(stats["pending_applications"], json!(1));
        assert_eq!(stats["programs"], json!(3));
    }
}
