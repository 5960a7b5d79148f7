//! Utilidades del sistema
//!
//! Este módulo contiene el manejo de errores y el escapado de HTML.

pub mod errors;
pub mod html;
