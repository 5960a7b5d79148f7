//! Filtros de envíos
//!
//! Cada tipo de filtro lee sus campos del formulario y los traduce a los
//! parámetros de query que entiende la API de envíos.

use crate::dto::envio_dto::FiltroQuery;

/// Parámetros de query de la API de envíos
pub const PARAM_PATENTE: &str = "patente";
pub const PARAM_ESTADO: &str = "estado";
pub const PARAM_FECHA_COMIENZO: &str = "fechaCreacionComienzo";
pub const PARAM_FECHA_FIN: &str = "fechaCreacionFin";
pub const PARAM_ULTIMA_PARADA: &str = "ultimaParada";

/// Filtro aplicado sobre la colección de envíos
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FiltroEnvio {
    /// Sin filtro: todos los envíos
    Todos,
    Patente(String),
    Estado(String),
    /// Rango de fechas de creación
    Fecha { desde: String, hasta: String },
    /// Ciudad de la última parada
    Ciudad(String),
    /// Tipo no reconocido. Se resuelve contra la colección de pedidos.
    Otro(String),
}

impl FiltroEnvio {
    /// Construir el filtro a partir del tipo elegido y los campos del formulario.
    ///
    /// Un campo ausente se toma como vacío, igual que un input sin completar.
    pub fn desde_formulario(query: &FiltroQuery) -> Self {
        let campo = |valor: &Option<String>| valor.clone().unwrap_or_default();

        match query.tipo.as_deref() {
            None => FiltroEnvio::Todos,
            Some("patente") => FiltroEnvio::Patente(campo(&query.filtro_patente)),
            Some("estado") => FiltroEnvio::Estado(campo(&query.filtro_estado)),
            Some("fecha") => FiltroEnvio::Fecha {
                desde: campo(&query.fecha_desde),
                hasta: campo(&query.fecha_hasta),
            },
            Some("ciudad") => FiltroEnvio::Ciudad(campo(&query.filtro_ciudad)),
            Some(otro) => FiltroEnvio::Otro(otro.to_string()),
        }
    }

    /// Parámetros de query que aporta este filtro, en orden
    pub fn parametros(&self) -> Vec<(&'static str, &str)> {
        match self {
            FiltroEnvio::Todos | FiltroEnvio::Otro(_) => Vec::new(),
            FiltroEnvio::Patente(patente) => vec![(PARAM_PATENTE, patente.as_str())],
            FiltroEnvio::Estado(estado) => vec![(PARAM_ESTADO, estado.as_str())],
            FiltroEnvio::Fecha { desde, hasta } => vec![
                (PARAM_FECHA_COMIENZO, desde.as_str()),
                (PARAM_FECHA_FIN, hasta.as_str()),
            ],
            FiltroEnvio::Ciudad(ciudad) => vec![(PARAM_ULTIMA_PARADA, ciudad.as_str())],
        }
    }

    /// Nombre del tipo, como llega en el formulario
    pub fn tipo(&self) -> &str {
        match self {
            FiltroEnvio::Todos => "todos",
            FiltroEnvio::Patente(_) => "patente",
            FiltroEnvio::Estado(_) => "estado",
            FiltroEnvio::Fecha { .. } => "fecha",
            FiltroEnvio::Ciudad(_) => "ciudad",
            FiltroEnvio::Otro(tipo) => tipo,
        }
    }
}
