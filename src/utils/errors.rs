//! Sistema de manejo de errores
//!
//! Este módulo define los tipos de errores del servicio
//! y su conversión a respuestas HTTP `{ "error": mensaje }`.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{error, warn};
use validator::{ValidationError, ValidationErrors};

/// Mensaje devuelto cuando faltan campos obligatorios de una ruta
pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields";

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Mensaje expuesto al cliente. Los errores 500 llevan el mensaje crudo
    /// de la capa de persistencia.
    pub fn client_message(&self) -> String {
        match self {
            AppError::Database(e) => e.to_string(),
            AppError::Validation(e) => describe_validation(e),
            AppError::BadRequest(msg) | AppError::NotFound(msg) | AppError::Internal(msg) => {
                msg.clone()
            }
        }
    }
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.client_message();

        if status.is_server_error() {
            error!("❌ {}", self);
        } else {
            warn!("⚠️ {}", self);
        }

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

fn describe_validation(errors: &ValidationErrors) -> String {
    let all_required = errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .all(|e| e.code == "required");

    if all_required {
        MISSING_FIELDS_MESSAGE.to_string()
    } else {
        errors.to_string()
    }
}

/// Función helper para crear errores de campo obligatorio ausente
pub fn required_fields_error(fields: &[&'static str]) -> AppError {
    let mut errors = ValidationErrors::new();
    for field in fields {
        let mut error = ValidationError::new("required");
        error.add_param("field".into(), field);
        errors.add(*field, error);
    }
    AppError::Validation(errors)
}

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str) -> AppError {
    AppError::NotFound(format!("{} not found", resource))
}

/// Función helper para crear errores internos
pub fn internal_error(message: impl Into<String>) -> AppError {
    AppError::Internal(message.into())
}
