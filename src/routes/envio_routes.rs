use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, Redirect},
    routing::get,
    Json, Router,
};

use crate::controllers::envio_controller::EnvioController;
use crate::dto::envio_dto::{ApiResponse, FiltroQuery};
use crate::models::envio::Envio;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Rutas de la página de envíos y del listado JSON
pub fn create_envio_router() -> Router<AppState> {
    Router::new()
        .route("/web/envios", get(|| async { Redirect::permanent("/web/envios/") }))
        .route("/web/envios/", get(pagina_envios))
        .route("/web/envios/filtrar", get(pagina_envios))
        .route("/web/envios/tabla", get(tabla_envios))
        .route("/api/envios", get(listar_envios))
}

async fn pagina_envios(
    State(state): State<AppState>,
    Query(query): Query<FiltroQuery>,
) -> Result<(StatusCode, Html<String>), AppError> {
    let controller = EnvioController::new(state.envio_service.clone());
    let (status, html) = controller.pagina(&query).await?;
    Ok((status, Html(html)))
}

async fn tabla_envios(
    State(state): State<AppState>,
    Query(query): Query<FiltroQuery>,
) -> Result<(StatusCode, Html<String>), AppError> {
    let controller = EnvioController::new(state.envio_service.clone());
    let (status, html) = controller.fragmento_tabla(&query).await?;
    Ok((status, Html(html)))
}

async fn listar_envios(
    State(state): State<AppState>,
    Query(query): Query<FiltroQuery>,
) -> Result<Json<ApiResponse<Vec<Envio>>>, AppError> {
    let controller = EnvioController::new(state.envio_service.clone());
    let response = controller.listar(&query).await?;
    Ok(Json(response))
}
