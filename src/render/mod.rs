//! Renderizado HTML
//!
//! Este módulo genera la tabla de envíos y la página de administración.

pub mod pagina;
pub mod tabla;

pub use pagina::*;
pub use tabla::*;
