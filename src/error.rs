use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErrorMessage {
    #[error("Authentication required. Please sign in")]
    UserNotAuthenticated,

    #[error("User belonging to this session no longer exists")]
    UserNoLongerExist,

    #[error("You are not allowed to perform this action")]
    PermissionDenied,

    #[error("Record not found")]
    RecordNotFound,

    #[error("Cannot complete the operation: other records depend on this one")]
    DependentRecordsExist,

    #[error("A record with these details already exists")]
    DuplicateRecord,
}

#[derive(Debug, Clone)]
pub struct HttpError {
    pub message: String,
    pub status: StatusCode,
    pub errors: Option<Value>,
}

impl HttpError {
    pub fn new(message: impl Into<String>, status: StatusCode) -> Self {
        HttpError {
            message: message.into(),
            status,
            errors: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        HttpError::new(message, StatusCode::BAD_REQUEST)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        HttpError::new(message, StatusCode::UNAUTHORIZED)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        HttpError::new(message, StatusCode::NOT_FOUND)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        HttpError::new(message, StatusCode::CONFLICT)
    }

    pub fn server_error(message: impl Into<String>) -> Self {
        HttpError::new(message, StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Field-level validation failure, reported before any database access.
    /// The response carries a `field -> [messages]` map so forms can attach
    /// each message to its input.
    pub fn validation(errors: ValidationErrors) -> Self {
        let mut fields = serde_json::Map::new();
        for (field, field_errors) in errors.field_errors() {
            let messages: Vec<String> = field_errors
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            fields.insert(field.to_string(), json!(messages));
        }

        HttpError {
            message: "Validation failed".to_string(),
            status: StatusCode::BAD_REQUEST,
            errors: Some(Value::Object(fields)),
        }
    }
}

impl std::fmt::Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "HttpError: message: {}, status: {}",
            self.message, self.status
        )
    }
}

impl std::error::Error for HttpError {}

impl From<sqlx::Error> for HttpError {
    fn from(error: sqlx::Error) -> Self {
        match &error {
            sqlx::Error::RowNotFound => {
                HttpError::not_found(ErrorMessage::RecordNotFound.to_string())
            }
            sqlx::Error::Database(db_error) => match db_error.code().as_deref() {
                // foreign key violation
                Some("23503") => {
                    HttpError::conflict(ErrorMessage::DependentRecordsExist.to_string())
                }
                // unique violation
                Some("23505") => HttpError::conflict(ErrorMessage::DuplicateRecord.to_string()),
                _ => HttpError::server_error(error.to_string()),
            },
            _ => HttpError::server_error(error.to_string()),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> axum::response::Response {
        let status = if self.status.is_server_error() {
            "error"
        } else {
            "fail"
        };

        let mut body = json!({
            "status": status,
            "message": self.message,
        });
        if let Some(errors) = self.errors {
            body["errors"] = errors;
        }

        (self.status, Json(body)).into_response()
    }
}
