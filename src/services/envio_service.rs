//! Servicio de envíos
//!
//! Arma la URL de cada consulta (con o sin filtro) y la despacha contra la
//! fuente de envíos. La URL se construye siempre a partir de la base: no hay
//! estado compartido entre consultas.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Response;
use url::Url;

use crate::models::envio::Envio;
use crate::models::filtro::FiltroEnvio;
use crate::utils::errors::{AppError, AppResult};

/// URLs de las colecciones de la API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiUrls {
    pub envios: Url,
    pub pedidos: Url,
}

impl ApiUrls {
    /// Derivar las URLs de las colecciones desde la URL base de la API
    pub fn new(base_url: &str) -> AppResult<Self> {
        let mut base = Url::parse(base_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        Ok(Self {
            envios: base.join("envios")?,
            pedidos: base.join("pedidos")?,
        })
    }
}

/// Consulta lista para despachar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolicitudEnvios {
    pub url: Url,
}

impl SolicitudEnvios {
    /// Todos los envíos, sin parámetros
    pub fn todos(urls: &ApiUrls) -> Self {
        Self {
            url: urls.envios.clone(),
        }
    }

    /// Consulta filtrada. Un tipo de filtro no reconocido apunta a la
    /// colección de pedidos, sin parámetros.
    pub fn filtrada(urls: &ApiUrls, filtro: &FiltroEnvio) -> Self {
        if let FiltroEnvio::Otro(tipo) = filtro {
            log::warn!("⚠️ Tipo de filtro '{}' no reconocido, consultando pedidos", tipo);
            return Self {
                url: urls.pedidos.clone(),
            };
        }

        let mut url = urls.envios.clone();
        for (clave, valor) in filtro.parametros() {
            set_query_param(&mut url, clave, valor);
        }

        Self { url }
    }
}

/// Reemplaza el valor de `clave` si ya estaba en la query, o lo agrega
fn set_query_param(url: &mut Url, clave: &str, valor: &str) {
    let resto: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| k != clave)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    let mut pairs = url.query_pairs_mut();
    pairs.clear();
    for (k, v) in &resto {
        pairs.append_pair(k, v);
    }
    pairs.append_pair(clave, valor);
}

/// Origen de los registros de envío
#[async_trait]
pub trait FuenteEnvios: Send + Sync {
    /// `Ok(None)` cuando la API responde con un body `null`
    async fn obtener_envios(&self, solicitud: &SolicitudEnvios) -> AppResult<Option<Vec<Envio>>>;
}

/// Manejador de error de una respuesta no exitosa.
///
/// Registra status y body y colapsa todo en `AppError::SolicitudFallida`.
pub async fn on_error(response: Response) -> AppError {
    let status = response.status();
    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            log::warn!("⚠️ No se pudo leer el body de la respuesta: {}", e);
            String::new()
        }
    };

    log::error!("❌ Error en la solicitud al servidor ({}): {}", status, body);

    AppError::SolicitudFallida {
        status: status.as_u16(),
        body,
    }
}

#[derive(Clone)]
pub struct EnvioService {
    fuente: Arc<dyn FuenteEnvios>,
    urls: ApiUrls,
}

impl EnvioService {
    pub fn new(fuente: Arc<dyn FuenteEnvios>, urls: ApiUrls) -> Self {
        Self { fuente, urls }
    }

    /// Obtener todos los envíos
    pub async fn fetch_envios(&self) -> AppResult<Option<Vec<Envio>>> {
        self.despachar(SolicitudEnvios::todos(&self.urls)).await
    }

    /// Obtener los envíos que cumplen el filtro
    pub async fn fetch_envios_filtrados(&self, filtro: &FiltroEnvio) -> AppResult<Option<Vec<Envio>>> {
        match filtro {
            FiltroEnvio::Todos => self.fetch_envios().await,
            _ => {
                self.despachar(SolicitudEnvios::filtrada(&self.urls, filtro))
                    .await
            }
        }
    }

    async fn despachar(&self, solicitud: SolicitudEnvios) -> AppResult<Option<Vec<Envio>>> {
        let envios = self.fuente.obtener_envios(&solicitud).await?;

        match &envios {
            Some(envios) => log::info!("✅ {} envíos obtenidos de {}", envios.len(), solicitud.url),
            None => log::info!("ℹ️ La API devolvió null para {}", solicitud.url),
        }

        Ok(envios)
    }
}
