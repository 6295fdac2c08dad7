use sqlx::error::ErrorKind;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GymError>;

#[derive(Error, Debug)]
pub enum GymError {
    #[error("Value already exists: {field}")]
    UniqueViolation { field: String },
    #[error("Referenced {entity} does not exist")]
    MissingReference { entity: &'static str },
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("{entity} not found")]
    NotFound { entity: &'static str },
    #[error("Database error: {0}")]
    Database(sqlx::Error),
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl GymError {
    /// Classify a datastore error raised while writing a record that
    /// references `entity`.
    pub fn from_write(err: sqlx::Error, entity: &'static str) -> Self {
        match err {
            sqlx::Error::Database(db_err) => match db_err.kind() {
                ErrorKind::UniqueViolation => GymError::UniqueViolation {
                    field: constrained_column(db_err.message()),
                },
                ErrorKind::ForeignKeyViolation => GymError::MissingReference { entity },
                ErrorKind::CheckViolation | ErrorKind::NotNullViolation => {
                    GymError::ConstraintViolation(db_err.message().to_string())
                }
                _ => GymError::Database(sqlx::Error::Database(db_err)),
            },
            other => GymError::Database(other),
        }
    }

    pub fn is_unique_violation(&self) -> bool {
        matches!(self, GymError::UniqueViolation { .. })
    }
}

impl From<sqlx::Error> for GymError {
    fn from(err: sqlx::Error) -> Self {
        GymError::from_write(err, "record")
    }
}

// SQLite reports "UNIQUE constraint failed: members.email"
fn constrained_column(message: &str) -> String {
    message
        .rsplit_once(": ")
        .map(|(_, column)| column.to_string())
        .unwrap_or_else(|| message.to_string())
}
