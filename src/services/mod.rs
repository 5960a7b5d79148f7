//! Servicios de la aplicación
//!
//! Este módulo contiene la lógica para consultar la API de envíos.

pub mod envio_service;

pub use envio_service::*;
