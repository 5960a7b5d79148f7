use serde::{Deserialize, Serialize};

// Query del formulario de filtros. Los nombres de los campos son los ids
// de los inputs de la página de envíos.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiltroQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tipo: Option<String>,
    #[serde(rename = "FiltroPatente", default, skip_serializing_if = "Option::is_none")]
    pub filtro_patente: Option<String>,
    #[serde(rename = "FiltroEstado", default, skip_serializing_if = "Option::is_none")]
    pub filtro_estado: Option<String>,
    #[serde(rename = "FechaDesde", default, skip_serializing_if = "Option::is_none")]
    pub fecha_desde: Option<String>,
    #[serde(rename = "FechaHasta", default, skip_serializing_if = "Option::is_none")]
    pub fecha_hasta: Option<String>,
    #[serde(rename = "FiltroCiudad", default, skip_serializing_if = "Option::is_none")]
    pub filtro_ciudad: Option<String>,
}

// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}
