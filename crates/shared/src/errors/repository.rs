use sqlx::Error as SqlxError;
use thiserror::Error;

const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";
const NOT_NULL_VIOLATION: &str = "23502";
const CHECK_VIOLATION: &str = "23514";

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(SqlxError),

    #[error("Not found")]
    NotFound,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Foreign key violation: {0}")]
    ForeignKey(String),

    #[error("Custom: {0}")]
    Custom(String),
}

impl RepositoryError {
    /// Maps a PostgreSQL error code to the matching constraint variant.
    pub fn from_pg_code(code: &str, message: String) -> Self {
        match code {
            UNIQUE_VIOLATION => RepositoryError::AlreadyExists(message),
            FOREIGN_KEY_VIOLATION => RepositoryError::ForeignKey(message),
            CHECK_VIOLATION | NOT_NULL_VIOLATION => RepositoryError::Conflict(message),
            _ => RepositoryError::Custom(message),
        }
    }
}

impl From<SqlxError> for RepositoryError {
    fn from(err: SqlxError) -> Self {
        match err {
            SqlxError::RowNotFound => RepositoryError::NotFound,
            SqlxError::Database(db_err) => {
                let message = db_err.message().to_string();
                let code = db_err.code().map(|c| c.to_string());
                match code {
                    Some(code) => RepositoryError::from_pg_code(&code, message),
                    None => RepositoryError::Sqlx(SqlxError::Database(db_err)),
                }
            }
            other => RepositoryError::Sqlx(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_violation_maps_to_already_exists() {
        let err = RepositoryError::from_pg_code("23505", "duplicate slug".into());
        assert!(matches!(err, RepositoryError::AlreadyExists(msg) if msg == "duplicate slug"));
    }

    #[test]
    fn foreign_key_violation_maps_to_foreign_key() {
        let err = RepositoryError::from_pg_code("23503", "missing category".into());
        assert!(matches!(err, RepositoryError::ForeignKey(_)));
    }

    #[test]
    fn check_violation_maps_to_conflict() {
        let err = RepositoryError::from_pg_code("23514", "rating out of range".into());
        assert!(matches!(err, RepositoryError::Conflict(_)));
    }

    #[test]
    fn unknown_code_maps_to_custom() {
        let err = RepositoryError::from_pg_code("42P01", "no such table".into());
        assert!(matches!(err, RepositoryError::Custom(_)));
    }

    #[test]
    fn row_not_found_maps_to_not_found() {
        let err = RepositoryError::from(SqlxError::RowNotFound);
        assert!(matches!(err, RepositoryError::NotFound));
    }
}
