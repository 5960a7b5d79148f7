//! DTOs de entrada y salida de los endpoints

pub mod envio_dto;

pub use envio_dto::*;
