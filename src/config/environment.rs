//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno: servidor, API de envíos
//! y los headers que se adjuntan a cada request saliente.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_ENCODING, CONNECTION, USER_AGENT};

use crate::utils::errors::{AppError, AppResult};

/// User-Agent que enviaba la página original de envíos
pub const DEFAULT_USER_AGENT: &str = "PostmanRuntime/7.33.0";

/// Headers fijos que se adjuntan a cada request contra la API de envíos
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestHeaders {
    pub user_agent: String,
    pub accept: String,
    pub accept_encoding: String,
    pub connection: String,
}

impl Default for RequestHeaders {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept: "*/*".to_string(),
            accept_encoding: "gzip, deflate, br".to_string(),
            connection: "keep-alive".to_string(),
        }
    }
}

impl RequestHeaders {
    /// Convertir a un `HeaderMap` listo para reqwest
    pub fn to_header_map(&self) -> AppResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, header_value("User-Agent", &self.user_agent)?);
        headers.insert(ACCEPT, header_value("Accept", &self.accept)?);
        headers.insert(ACCEPT_ENCODING, header_value("Accept-Encoding", &self.accept_encoding)?);
        headers.insert(CONNECTION, header_value("Connection", &self.connection)?);
        Ok(headers)
    }
}

fn header_value(name: &str, value: &str) -> AppResult<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|e| AppError::Config(format!("header {} inválido: {}", name, e)))
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub log_level: Option<String>,
    pub cors_origins: Vec<String>,
    // API de envíos
    pub api_base_url: String,
    pub api_timeout: Duration,
    pub api_token: Option<String>,
    pub request_headers: RequestHeaders,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 3000,
            host: "0.0.0.0".to_string(),
            log_level: None,
            cors_origins: Vec::new(),
            api_base_url: "http://localhost:8080".to_string(),
            api_timeout: Duration::from_secs(30),
            api_token: None,
            request_headers: RequestHeaders::default(),
        }
    }
}

impl EnvironmentConfig {
    /// Leer la configuración desde las variables de entorno.
    ///
    /// Las variables ausentes toman el valor de `Default`; un número mal
    /// formado devuelve `AppError::Config`.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Igual que `from_env` pero con una fuente de variables arbitraria
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let request_headers = RequestHeaders {
            user_agent: lookup("HTTP_USER_AGENT").unwrap_or(defaults.request_headers.user_agent),
            ..RequestHeaders::default()
        };

        Ok(Self {
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
            port: parse_var(&lookup, "PORT")?.unwrap_or(defaults.port),
            host: lookup("HOST").unwrap_or(defaults.host),
            log_level: lookup("LOG_LEVEL"),
            cors_origins: lookup("CORS_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            api_base_url: lookup("API_BASE_URL").unwrap_or(defaults.api_base_url),
            api_timeout: parse_var::<u64, _>(&lookup, "API_TIMEOUT_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.api_timeout),
            api_token: lookup("API_TOKEN").filter(|t| !t.trim().is_empty()),
            request_headers,
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Nivel de log efectivo: `LOG_LEVEL` o DEBUG en desarrollo / INFO en el resto
    pub fn tracing_level(&self) -> tracing::Level {
        self.log_level
            .as_deref()
            .and_then(|level| tracing::Level::from_str(level).ok())
            .unwrap_or(if self.is_development() {
                tracing::Level::DEBUG
            } else {
                tracing::Level::INFO
            })
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> AppResult<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| AppError::Config(format!("{} debe ser un número válido: {}", key, e))),
        None => Ok(None),
    }
}
