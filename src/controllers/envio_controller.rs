use axum::http::StatusCode;

use crate::dto::envio_dto::{ApiResponse, FiltroQuery};
use crate::models::envio::Envio;
use crate::models::filtro::FiltroEnvio;
use crate::render::pagina::PaginaEnvios;
use crate::render::tabla::{ModoRender, TablaEnvios};
use crate::services::envio_service::EnvioService;
use crate::utils::errors::{AppError, AppResult, MENSAJE_ERROR_SOLICITUD};
use crate::utils::html::escape_html;

pub struct EnvioController {
    service: EnvioService,
}

impl EnvioController {
    pub fn new(service: EnvioService) -> Self {
        Self { service }
    }

    /// Consultar la API con el filtro del formulario y cargar una tabla nueva
    pub async fn cargar_tabla(&self, query: &FiltroQuery) -> AppResult<TablaEnvios> {
        let filtro = FiltroEnvio::desde_formulario(query);
        let envios = self.service.fetch_envios_filtrados(&filtro).await?;

        let mut tabla = TablaEnvios::new();
        tabla.render_envios(envios.as_deref(), ModoRender::Reemplazar);

        if tabla.is_empty() {
            log::info!("ℹ️ Sin envíos para el filtro '{}'", filtro.tipo());
        } else {
            log::debug!("📋 Tabla con {} filas (filtro: {})", tabla.len(), filtro.tipo());
        }
        Ok(tabla)
    }

    /// Página completa. Si la API falla la página se muestra igual, con la
    /// alerta y sin filas.
    pub async fn pagina(&self, query: &FiltroQuery) -> AppResult<(StatusCode, String)> {
        let (status, tabla, alerta) = match self.cargar_tabla(query).await {
            Ok(tabla) => (StatusCode::OK, tabla, None),
            Err(e) if e.es_solicitud_fallida() => {
                log::error!("❌ No se pudieron cargar los envíos: {}", e);
                (StatusCode::BAD_GATEWAY, TablaEnvios::new(), Some(MENSAJE_ERROR_SOLICITUD))
            }
            Err(e) => return Err(e),
        };

        let html = PaginaEnvios {
            formulario: query,
            tabla: &tabla,
            alerta,
        }
        .render();

        Ok((status, html))
    }

    /// Solo el `<tbody>`, para refrescar la tabla sin recargar la página
    pub async fn fragmento_tabla(&self, query: &FiltroQuery) -> AppResult<(StatusCode, String)> {
        match self.cargar_tabla(query).await {
            Ok(tabla) => Ok((StatusCode::OK, tabla.tbody())),
            Err(e) if e.es_solicitud_fallida() => {
                log::error!("❌ No se pudo refrescar la tabla de envíos: {}", e);
                Ok((
                    StatusCode::BAD_GATEWAY,
                    format!(
                        "<div class=\"alerta\" role=\"alert\">{}</div>",
                        escape_html(MENSAJE_ERROR_SOLICITUD)
                    ),
                ))
            }
            Err(e) => Err(e),
        }
    }

    /// Envíos en JSON; `null` de la API se devuelve como lista vacía
    pub async fn listar(&self, query: &FiltroQuery) -> Result<ApiResponse<Vec<Envio>>, AppError> {
        let filtro = FiltroEnvio::desde_formulario(query);
        let envios = self
            .service
            .fetch_envios_filtrados(&filtro)
            .await?
            .unwrap_or_default();

        let message = format!("{} envíos (filtro: {})", envios.len(), filtro.tipo());
        Ok(ApiResponse::success_with_message(envios, message))
    }
}
