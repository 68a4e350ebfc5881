//! Persistence for the back-office tables.
//!
//! Workflows talk to storage through their own repository traits; [`InMemorySchoolStore`]
//! implements all of them over a single set of tables so joins and cross-table counters
//! (dashboard stats, referent guards) see a consistent view.

mod memory;
pub mod seed;

pub use memory::InMemorySchoolStore;

/// Error enumeration for repository failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("constraint violated: {0}")]
    Constraint(String),
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

impl RepositoryError {
    /// HTTP status reported when a workflow surfaces this error to a client.
    pub fn status_code(&self) -> axum::http::StatusCode {
        match self {
            RepositoryError::NotFound => axum::http::StatusCode::NOT_FOUND,
            RepositoryError::Constraint(_) => axum::http::StatusCode::UNPROCESSABLE_ENTITY,
            RepositoryError::Unavailable(_) => axum::http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
