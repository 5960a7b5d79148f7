//! Sistema de manejo de errores
//!
//! Este módulo define los tipos de errores del sistema
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Mensaje que ve el usuario cuando falla una solicitud a la API de envíos
pub const MENSAJE_ERROR_SOLICITUD: &str = "Error en la solicitud al servidor.";

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    /// La API de envíos respondió con un status que no es de éxito
    #[error("Request failed with status {status}: {body}")]
    SolicitudFallida { status: u16, body: String },

    /// Error de red o de decodificación de la respuesta
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Todas las fallas de comunicación con la API colapsan en un único caso
    pub fn es_solicitud_fallida(&self) -> bool {
        matches!(self, AppError::SolicitudFallida { .. } | AppError::Http(_))
    }
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::SolicitudFallida { status, body } => {
                log::error!("Solicitud fallida ({}): {}", status, body);
                (
                    StatusCode::BAD_GATEWAY,
                    ErrorResponse {
                        error: "External API Error".to_string(),
                        message: MENSAJE_ERROR_SOLICITUD.to_string(),
                        details: Some(json!({ "status": status, "body": body })),
                        code: Some("SOLICITUD_FALLIDA".to_string()),
                    },
                )
            }

            AppError::Http(e) => {
                log::error!("HTTP error: {}", e);
                (
                    StatusCode::BAD_GATEWAY,
                    ErrorResponse {
                        error: "External API Error".to_string(),
                        message: MENSAJE_ERROR_SOLICITUD.to_string(),
                        details: Some(json!({ "http_error": e.to_string() })),
                        code: Some("SOLICITUD_FALLIDA".to_string()),
                    },
                )
            }

            AppError::Url(e) => {
                log::error!("Invalid URL: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Internal Server Error".to_string(),
                        message: "The shipments API URL is misconfigured".to_string(),
                        details: Some(json!({ "url_error": e.to_string() })),
                        code: Some("URL_ERROR".to_string()),
                    },
                )
            }

            AppError::Config(msg) => {
                log::error!("Configuration error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Internal Server Error".to_string(),
                        message: "The server is misconfigured".to_string(),
                        details: Some(json!({ "config_error": msg })),
                        code: Some("CONFIG_ERROR".to_string()),
                    },
                )
            }

            AppError::Internal(msg) => {
                log::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Internal Server Error".to_string(),
                        message: "An unexpected error occurred".to_string(),
                        details: Some(json!({ "internal_error": msg })),
                        code: Some("INTERNAL_ERROR".to_string()),
                    },
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;
