use crate::cli::ServeArgs;
use crate::infra::{build_store, AppState};
use crate::routes::with_school_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use school_office::config::AppConfig;
use school_office::error::AppError;
use school_office::telemetry;
use school_office::workflows::admissions::AdmissionsService;
use school_office::workflows::backoffice::BackOfficeService;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let store = build_store(&config.store)?;
    let admissions = Arc::new(AdmissionsService::new(store.clone()));
    let backoffice = Arc::new(BackOfficeService::new(store));

    let app = with_school_routes(admissions, backoffice)
        .layer(Extension(app_state))
        .layer(prometheus_layer)
        .layer(CorsLayer::permissive());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "school back-office ready");

    axum::serve(listener, app).await?;
    Ok(())
}
