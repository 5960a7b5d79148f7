//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;

use crate::client::EnviosApiClient;
use crate::config::environment::EnvironmentConfig;
use crate::services::envio_service::{ApiUrls, EnvioService, FuenteEnvios};
use crate::utils::errors::AppResult;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub envio_service: EnvioService,
}

impl AppState {
    /// Estado con el cliente HTTP real contra `API_BASE_URL`
    pub fn new(config: EnvironmentConfig) -> AppResult<Self> {
        let client = EnviosApiClient::new(&config)?;
        Self::with_fuente(config, Arc::new(client))
    }

    /// Estado con una fuente de envíos arbitraria
    pub fn with_fuente(config: EnvironmentConfig, fuente: Arc<dyn FuenteEnvios>) -> AppResult<Self> {
        let urls = ApiUrls::new(&config.api_base_url)?;
        log::info!("🔗 API de envíos: {}", urls.envios);

        Ok(Self {
            envio_service: EnvioService::new(fuente, urls),
            config,
        })
    }
}
