use sqlx::Error as SqlxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Failed to acquire connection: {0}")]
    Acquire(#[source] SqlxError),

    #[error("Database error: {0}")]
    Sqlx(#[from] SqlxError),

    #[error("Foreign key violation: {0}")]
    ForeignKey(String),

    #[error("Check constraint violation: {0}")]
    Check(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

impl RepositoryError {
    pub fn acquire(err: SqlxError) -> Self {
        RepositoryError::Acquire(err)
    }

    /// Classifies a statement failure by the constraint the store reported.
    pub fn statement(err: SqlxError) -> Self {
        let Some(db_err) = err.as_database_error() else {
            return RepositoryError::Sqlx(err);
        };

        if db_err.is_foreign_key_violation() {
            RepositoryError::ForeignKey(db_err.message().to_string())
        } else if db_err.is_check_violation() {
            RepositoryError::Check(db_err.message().to_string())
        } else if db_err.is_unique_violation() {
            RepositoryError::Conflict(db_err.message().to_string())
        } else {
            RepositoryError::Sqlx(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_database_errors_stay_sqlx() {
        let err = RepositoryError::statement(SqlxError::RowNotFound);
        assert!(matches!(err, RepositoryError::Sqlx(SqlxError::RowNotFound)));
    }

    #[test]
    fn acquire_failures_are_tagged() {
        let err = RepositoryError::acquire(SqlxError::PoolTimedOut);
        assert!(matches!(err, RepositoryError::Acquire(_)));
        assert!(err.to_string().starts_with("Failed to acquire connection"));
    }
}
