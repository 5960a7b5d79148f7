//! Cliente HTTP para la API de envíos
//!
//! Este módulo contiene el helper compartido `make_request`, que arma el
//! request con los headers configurados y separa las respuestas exitosas
//! de las fallidas.

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Client, Response};
use url::Url;

use crate::config::environment::EnvironmentConfig;
use crate::models::envio::Envio;
use crate::services::envio_service::{on_error, FuenteEnvios, SolicitudEnvios};
use crate::utils::errors::AppResult;

/// Cliente HTTP para la API de envíos
#[derive(Debug, Clone)]
pub struct EnviosApiClient {
    client: Client,
    headers: HeaderMap,
    api_token: Option<String>,
}

impl EnviosApiClient {
    /// Crear el cliente a partir de la configuración del entorno
    pub fn new(config: &EnvironmentConfig) -> AppResult<Self> {
        let client = Client::builder().timeout(config.api_timeout).build()?;

        Ok(Self {
            client,
            headers: config.request_headers.to_header_map()?,
            api_token: config.api_token.clone(),
        })
    }

    /// GET contra la API con los headers configurados y, si hay uno, el token.
    ///
    /// Devuelve la respuesta solo si el status es de éxito; cualquier otro
    /// status pasa por `on_error`. Los errores de red llegan como `AppError::Http`.
    pub async fn make_request(&self, url: &Url) -> AppResult<Response> {
        log::info!("🌐 GET {}", url);

        let mut request = self.client.get(url.clone()).headers(self.headers.clone());

        if let Some(token) = self.api_token.as_deref() {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        log::info!("📡 Response status: {}", response.status());

        if !response.status().is_success() {
            return Err(on_error(response).await);
        }

        Ok(response)
    }
}

#[async_trait]
impl FuenteEnvios for EnviosApiClient {
    async fn obtener_envios(&self, solicitud: &SolicitudEnvios) -> AppResult<Option<Vec<Envio>>> {
        let response = self.make_request(&solicitud.url).await?;

        let envios: Option<Vec<Envio>> = response.json().await?;
        Ok(envios)
    }
}
