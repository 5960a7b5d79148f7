//! Controladores
//!
//! Orquestan el servicio de envíos y el renderizado para cada endpoint.

pub mod envio_controller;
