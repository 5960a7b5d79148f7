//! Configuración del proyecto
//!
//! Este módulo contiene las variables de entorno del servidor y de la API
//! de envíos que consume.

pub mod environment;

pub use environment::*;
