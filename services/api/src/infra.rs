use metrics_exporter_prometheus::PrometheusHandle;
use school_office::config::StoreConfig;
use school_office::error::AppError;
use school_office::store::{seed, InMemorySchoolStore};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Build the process-wide store, loading the demo catalog when configured to.
pub(crate) fn build_store(config: &StoreConfig) -> Result<Arc<InMemorySchoolStore>, AppError> {
    let store = Arc::new(InMemorySchoolStore::new());
    if config.seed_demo_data {
        let summary = seed::seed_demo_data(store.as_ref())?;
        info!(
            programs = summary.programs,
            cohorts = summary.cohorts,
            learners = summary.learners,
            questions = summary.questions,
            "demo data loaded"
        );
    }
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use school_office::workflows::backoffice::BackOfficeRepository;

    #[test]
    fn store_is_empty_without_seeding() {
        let store = build_store(&StoreConfig {
            seed_demo_data: false,
        })
        .expect("store builds");
        assert_eq!(store.stats().expect("stats").programs, 0);
    }

    #[test]
    fn store_is_seeded_on_request() {
        let store = build_store(&StoreConfig {
            seed_demo_data: true,
        })
        .expect("store builds");
        let stats = store.stats().expect("stats");
        assert_eq!(stats.programs, 3);
        assert_eq!(stats.learners, 5);
    }
}
