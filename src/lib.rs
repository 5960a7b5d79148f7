//! Panel de administración de envíos
//!
//! Consulta la API de envíos, arma la tabla de envíos en HTML y aplica los
//! filtros por patente, estado, rango de fechas y ciudad.

pub mod client;
pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod render;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
