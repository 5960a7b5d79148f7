//! Tabla de envíos
//!
//! Genera el `<tbody>` de la tabla `elementosTable`: una fila por envío, con
//! la tabla anidada de paradas, los pedidos y los enlaces de acciones.

use std::fmt::Write;

use serde_json::Value;

use crate::models::envio::{texto, Envio, Parada};
use crate::utils::html::escape_html;

pub const SIN_PARADAS: &str = "No hay paradas disponibles";
pub const SIN_PEDIDOS: &str = "No hay pedidos disponibles";

/// Página de alta de paradas
pub const PAGINA_NUEVA_PARADA: &str = "/web/envios/nuevaParada.html";
/// Formulario para iniciar y finalizar viajes
pub const PAGINA_FORM_VIAJE: &str = "form.html";

/// Qué hacer con las filas que ya tiene la tabla
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModoRender {
    /// Vaciar la tabla antes de agregar las filas nuevas
    #[default]
    Reemplazar,
    /// Agregar a continuación de las filas existentes
    Agregar,
}

#[derive(Debug, Clone, Default)]
pub struct TablaEnvios {
    filas: Vec<String>,
}

impl TablaEnvios {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cargar los envíos en la tabla y devolver cuántas filas se agregaron.
    ///
    /// Con `None` la tabla queda como estaba, en cualquier modo.
    pub fn render_envios(&mut self, envios: Option<&[Envio]>, modo: ModoRender) -> usize {
        let Some(envios) = envios else {
            return 0;
        };

        if modo == ModoRender::Reemplazar {
            self.filas.clear();
        }

        self.filas.extend(envios.iter().map(render_fila));
        envios.len()
    }

    pub fn len(&self) -> usize {
        self.filas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filas.is_empty()
    }

    /// Markup completo del cuerpo de la tabla
    pub fn tbody(&self) -> String {
        let mut html = String::from("<tbody>\n");
        for fila in &self.filas {
            html.push_str(fila);
        }
        html.push_str("</tbody>");
        html
    }
}

/// Fila de un envío
pub fn render_fila(envio: &Envio) -> String {
    let mut fila = String::from("<tr>\n");

    for campo in [&envio.id, &envio.fecha_creacion, &envio.fecha_ultima_actualizacion, &envio.patente_camion] {
        celda(&mut fila, &escape_html(&texto(campo)));
    }

    celda(&mut fila, &render_paradas(envio.paradas_disponibles()));
    celda(&mut fila, &render_pedidos(envio.pedidos_disponibles()));
    celda(&mut fila, &escape_html(&texto(&envio.id_creador)));
    celda(&mut fila, &escape_html(&texto(&envio.estado)));

    let _ = writeln!(fila, "  <td class=\"acciones\">{}</td>", render_acciones(&envio.id));
    fila.push_str("</tr>\n");
    fila
}

fn celda(fila: &mut String, contenido: &str) {
    let _ = writeln!(fila, "  <td>{}</td>", contenido);
}

/// Tabla anidada de paradas, o la fila de aviso si no hay
fn render_paradas(paradas: Option<&[Parada]>) -> String {
    let mut html = String::from("<table><tr><th>Ciudad</th><th>Km Recorridos</th></tr>");

    match paradas {
        Some(paradas) => {
            for parada in paradas {
                let _ = write!(
                    html,
                    "<tr><td>{}</td><td>{}</td></tr>",
                    escape_html(&texto(&parada.ciudad)),
                    escape_html(&texto(&parada.km_recorridos)),
                );
            }
        }
        None => {
            let _ = write!(html, "<tr><td>{}</td></tr>", SIN_PARADAS);
        }
    }

    html.push_str("</table>");
    html
}

fn render_pedidos(pedidos: Option<&[Value]>) -> String {
    match pedidos {
        Some(pedidos) => pedidos
            .iter()
            .map(|pedido| escape_html(&texto(pedido)))
            .collect::<Vec<_>>()
            .join(" "),
        None => SIN_PEDIDOS.to_string(),
    }
}

/// Enlaces de Nueva Parada, Iniciar Viaje y Finalizar Viaje
fn render_acciones(id: &Value) -> String {
    let id = texto(id);
    let id = escape_html(&urlencoding::encode(&id));

    format!(
        "<a href=\"{nueva}?id={id}\">Nueva Parada</a> | \
         <a href=\"{form}?id={id}&amp;tipo=INICIAR\">Iniciar Viaje</a> | \
         <a href=\"{form}?id={id}&amp;tipo=FINALIZAR\">Finalizar Viaje</a>",
        nueva = PAGINA_NUEVA_PARADA,
        form = PAGINA_FORM_VIAJE,
        id = id,
    )
}
