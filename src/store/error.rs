use sea_orm::DbErr;
use thiserror::Error;

/// Typed failures surfaced by [`GraphStore`](super::GraphStore) operations.
/// Constraint violations coming back from the database are mapped onto these
/// variants so callers never have to parse driver error strings.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("{entity} named {name:?} already exists")]
    DuplicateName { entity: &'static str, name: String },

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    #[error("founder {founder_id} is already associated with company {company_id}")]
    AlreadyAssociated { founder_id: i32, company_id: i32 },

    #[error("operation conflicts with existing references: {0}")]
    ConstraintConflict(String),

    #[error("store unavailable: {0}")]
    Unavailable(#[source] DbErr),

    #[error("database error: {0}")]
    Db(#[source] DbErr),
}

impl StoreError {
    /// Classify a raw driver error. Connectivity problems become
    /// `Unavailable`; everything else that the call site did not already map
    /// to a typed variant is a plain `Db` error.
    pub(crate) fn from_db(err: DbErr) -> Self {
        match err {
            DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => StoreError::Unavailable(err),
            _ => StoreError::Db(err),
        }
    }
}
