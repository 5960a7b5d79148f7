//! Página de administración de envíos
//!
//! Formulario de filtros, alerta de error y la tabla `elementosTable`.

use crate::dto::envio_dto::FiltroQuery;
use crate::render::tabla::TablaEnvios;
use crate::utils::html::escape_html;

/// Ruta del endpoint que aplica los filtros
pub const RUTA_FILTRAR: &str = "/web/envios/filtrar";

const ESTILOS: &str = r#"
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 1.5rem; color: #333; }
        h1 { font-size: 1.3rem; }
        div.filtros { display: flex; flex-wrap: wrap; gap: 1rem; margin-bottom: 1rem; align-items: center; }
        form.filtro { border: 1px solid #e0e0e0; border-radius: 4px; padding: 0.5rem 0.75rem; }
        .alerta { background: #fee2e2; color: #991b1b; padding: 0.75rem 1rem; border-radius: 4px; margin-bottom: 1rem; }
        table { border-collapse: collapse; }
        #elementosTable > thead th, #elementosTable > tbody > tr > td { border: 1px solid #e0e0e0; padding: 0.4rem 0.6rem; vertical-align: top; }
        td.acciones a { white-space: nowrap; }
"#;

/// Datos para renderizar la página
#[derive(Debug)]
pub struct PaginaEnvios<'a> {
    pub formulario: &'a FiltroQuery,
    pub tabla: &'a TablaEnvios,
    pub alerta: Option<&'a str>,
}

impl PaginaEnvios<'_> {
    pub fn render(&self) -> String {
        let mut html = String::with_capacity(4096);

        html.push_str("<!DOCTYPE html>\n<html lang=\"es\">\n<head>\n");
        html.push_str("    <meta charset=\"UTF-8\">\n");
        html.push_str("    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
        html.push_str("    <title>Envíos</title>\n    <style>");
        html.push_str(ESTILOS);
        html.push_str("    </style>\n</head>\n<body>\n<h1>Envíos</h1>\n");

        if let Some(alerta) = self.alerta {
            html.push_str(&format!(
                "<div class=\"alerta\" role=\"alert\">{}</div>\n",
                escape_html(alerta)
            ));
        }

        html.push_str(&self.render_formulario());
        html.push_str(&render_tabla(self.tabla));
        html.push_str("\n</body>\n</html>\n");
        html
    }

    /// Un formulario por tipo de filtro: el `tipo` va oculto, así Enter en
    /// cualquier input envía siempre el filtro de su propio formulario.
    fn render_formulario(&self) -> String {
        let f = self.formulario;

        let mut html = String::from("<div class=\"filtros\">\n");
        html.push_str(&render_filtro("patente", &[("FiltroPatente", "Patente", "text", valor(&f.filtro_patente))]));
        html.push_str(&render_filtro("estado", &[("FiltroEstado", "Estado", "text", valor(&f.filtro_estado))]));
        html.push_str(&render_filtro(
            "fecha",
            &[
                ("FechaDesde", "Desde", "date", valor(&f.fecha_desde)),
                ("FechaHasta", "Hasta", "date", valor(&f.fecha_hasta)),
            ],
        ));
        html.push_str(&render_filtro("ciudad", &[("FiltroCiudad", "Ciudad", "text", valor(&f.filtro_ciudad))]));
        html.push_str("    <a href=\"/web/envios/\">Ver todos</a>\n</div>\n");
        html
    }
}

/// Formulario de un filtro; cada campo es `(id, etiqueta, tipo de input, valor)`
fn render_filtro(tipo: &str, campos: &[(&str, &str, &str, String)]) -> String {
    let mut html = format!(
        "    <form class=\"filtro\" method=\"get\" action=\"{}\">\n        <input type=\"hidden\" name=\"tipo\" value=\"{}\">\n",
        RUTA_FILTRAR, tipo
    );
    for (id, etiqueta, input, valor) in campos {
        html.push_str(&format!(
            "        <label for=\"{id}\">{etiqueta}</label>\n        <input type=\"{input}\" id=\"{id}\" name=\"{id}\" value=\"{valor}\">\n",
        ));
    }
    html.push_str("        <button type=\"submit\">Filtrar</button>\n    </form>\n");
    html
}

fn valor(campo: &Option<String>) -> String {
    campo.as_deref().map(escape_html).unwrap_or_default()
}

fn render_tabla(tabla: &TablaEnvios) -> String {
    format!(
        r#"<table id="elementosTable">
<thead>
<tr>
    <th>Id</th>
    <th>Fecha Creación</th>
    <th>Última Actualización</th>
    <th>Patente Camión</th>
    <th>Paradas</th>
    <th>Pedidos</th>
    <th>Id Creador</th>
    <th>Estado</th>
    <th>Acciones</th>
</tr>
</thead>
{}
</table>"#,
        tabla.tbody()
    )
}
