//! Modelo de Envío
//!
//! Registro de envío tal como lo devuelve la API. Los campos escalares se
//! mantienen como JSON opaco: la vista solo los muestra, no los valida.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parada de un envío: ciudad y kilómetros recorridos acumulados
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Parada {
    #[serde(default)]
    pub ciudad: Value,
    #[serde(default)]
    pub km_recorridos: Value,
}

/// Envío principal
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Envio {
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub fecha_creacion: Value,
    #[serde(default)]
    pub fecha_ultima_actualizacion: Value,
    #[serde(default)]
    pub patente_camion: Value,
    #[serde(default)]
    pub paradas: Option<Vec<Parada>>,
    #[serde(default)]
    pub pedidos: Option<Vec<Value>>,
    #[serde(default)]
    pub id_creador: Value,
    #[serde(default)]
    pub estado: Value,
}

impl Envio {
    /// Paradas a mostrar; `None` si no hay ninguna
    pub fn paradas_disponibles(&self) -> Option<&[Parada]> {
        self.paradas.as_deref().filter(|p| !p.is_empty())
    }

    /// Pedidos a mostrar; `None` si no hay ninguno
    pub fn pedidos_disponibles(&self) -> Option<&[Value]> {
        self.pedidos.as_deref().filter(|p| !p.is_empty())
    }
}

/// Texto de un valor escalar para mostrar en una celda.
///
/// Los strings van sin comillas y `null` queda vacío.
pub fn texto(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
