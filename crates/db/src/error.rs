//! Error taxonomy for the data-access layer.
//!
//! Repository methods classify `sqlx::Error` at the boundary so callers
//! receive the violated contract (entity, constraint) instead of a raw
//! driver error. Nothing is silently recovered: every violation aborts the
//! statement's transaction inside PostgreSQL before it surfaces here.

use campops_core::types::DbId;

/// Convenience alias for repository return values.
pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// Update/delete by identity addressed a row that does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// A foreign key pointed at a missing row, or a RESTRICT reference
    /// blocked a deletion. SQLSTATE 23503.
    #[error("integrity violation on {entity}: {constraint}")]
    IntegrityViolation {
        entity: &'static str,
        constraint: String,
    },

    /// Duplicate value on a unique-constrained column. SQLSTATE 23505.
    #[error("duplicate value on {entity} violates {constraint}")]
    UniquenessViolation {
        entity: &'static str,
        constraint: String,
    },

    /// Value outside a column domain: check constraint, NOT NULL, or an
    /// over-length varchar. SQLSTATE 23514 / 23502 / class 22.
    #[error("domain violation on {entity}: {detail}")]
    DomainViolation {
        entity: &'static str,
        detail: String,
    },

    /// Any other driver error, passed through.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl DbError {
    /// Build a classifier for `entity`, for use with `map_err`.
    ///
    /// PostgreSQL reports constraint violations as SQLSTATE class 23 and
    /// malformed/oversized values as class 22; everything else stays a
    /// [`DbError::Database`] passthrough.
    pub(crate) fn classify(entity: &'static str) -> impl Fn(sqlx::Error) -> DbError {
        move |err| {
            if let sqlx::Error::Database(db_err) = &err {
                let code = db_err.code().map(|c| c.to_string());
                let constraint = db_err.constraint().unwrap_or("unknown").to_string();
                let message = db_err.message().to_string();
                match code.as_deref() {
                    Some("23503") => {
                        return DbError::IntegrityViolation { entity, constraint };
                    }
                    Some("23505") => {
                        return DbError::UniquenessViolation { entity, constraint };
                    }
                    Some("23514") => {
                        return DbError::DomainViolation {
                            entity,
                            detail: format!("check constraint {constraint} failed"),
                        };
                    }
                    Some("23502") | Some("22001") | Some("22007") | Some("22P02") => {
                        return DbError::DomainViolation {
                            entity,
                            detail: message,
                        };
                    }
                    _ => {}
                }
            }
            DbError::Database(err)
        }
    }
}
