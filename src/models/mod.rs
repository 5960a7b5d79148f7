//! Modelos de datos
//!
//! Este módulo contiene el registro de envío y los filtros que se aplican
//! sobre la colección.

pub mod envio;
pub mod filtro;

pub use envio::*;
pub use filtro::*;
