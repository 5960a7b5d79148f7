use std::sync::{Arc, Mutex};

use axum::{
    body::{self, Body},
    extract::State,
    http::{header::CONTENT_ENCODING, HeaderMap, Request, StatusCode, Uri},
    middleware::map_response_with_state,
    response::{IntoResponse, Response},
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use tower_http::compression::CompressionLayer;

use envios_admin::config::environment::EnvironmentConfig;
use envios_admin::routes::create_app;
use envios_admin::state::AppState;

/// Request recibido por la API de prueba
#[derive(Debug, Clone)]
struct Recibido {
    uri: String,
    user_agent: Option<String>,
    accept: Option<String>,
    accept_encoding: Option<String>,
    connection: Option<String>,
    authorization: Option<String>,
}

#[derive(Clone)]
struct Upstream {
    status: StatusCode,
    body: Value,
    recibidos: Arc<Mutex<Vec<Recibido>>>,
}

async fn responder(State(upstream): State<Upstream>, uri: Uri, headers: HeaderMap) -> impl IntoResponse {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    upstream.recibidos.lock().unwrap().push(Recibido {
        uri: uri.to_string(),
        user_agent: header("user-agent"),
        accept: header("accept"),
        accept_encoding: header("accept-encoding"),
        connection: header("connection"),
        authorization: header("authorization"),
    });

    (upstream.status, Json(upstream.body.clone()))
}

fn upstream_router(status: StatusCode, body: Value) -> (Router, Arc<Mutex<Vec<Recibido>>>) {
    let recibidos = Arc::new(Mutex::new(Vec::new()));
    let upstream = Upstream {
        status,
        body,
        recibidos: recibidos.clone(),
    };

    (Router::new().fallback(responder).with_state(upstream), recibidos)
}

async fn serve_upstream(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("upstream");
    });

    format!("http://{}", addr)
}

/// Levantar una API de envíos de prueba en un puerto libre
async fn spawn_upstream(status: StatusCode, body: Value) -> (String, Arc<Mutex<Vec<Recibido>>>) {
    let (app, recibidos) = upstream_router(status, body);
    (serve_upstream(app).await, recibidos)
}

async fn registrar_encoding(State(encodings): State<Arc<Mutex<Vec<String>>>>, response: Response) -> Response {
    if let Some(encoding) = response.headers().get(CONTENT_ENCODING).and_then(|v| v.to_str().ok()) {
        encodings.lock().unwrap().push(encoding.to_string());
    }
    response
}

/// API de prueba que responde comprimida con gzip y anota el encoding usado
async fn spawn_upstream_gzip(body: Value) -> (String, Arc<Mutex<Vec<String>>>) {
    let (app, _) = upstream_router(StatusCode::OK, body);
    let encodings = Arc::new(Mutex::new(Vec::new()));

    let app = app
        .layer(CompressionLayer::new().no_br().no_deflate().no_zstd())
        .layer(map_response_with_state(encodings.clone(), registrar_encoding));

    (serve_upstream(app).await, encodings)
}

fn test_app(api_base_url: &str, api_token: Option<&str>) -> Router {
    let config = EnvironmentConfig {
        api_base_url: api_base_url.to_string(),
        api_token: api_token.map(str::to_string),
        ..EnvironmentConfig::default()
    };
    create_app(AppState::new(config).expect("state"))
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let request = Request::get(uri).body(Body::empty()).expect("request");
    let response = app.oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    (status, String::from_utf8(bytes.to_vec()).expect("utf8"))
}

fn dos_envios() -> Value {
    json!([
        {
            "id": "E-1",
            "fecha_creacion": "2023-10-01",
            "fecha_ultima_actualizacion": "2023-10-02",
            "patente_camion": "AB123CD",
            "paradas": [{ "ciudad": "Rosario", "km_recorridos": 120 }],
            "pedidos": [1, 2],
            "id_creador": 7,
            "estado": "EnRuta"
        },
        { "id": "E-2", "patente_camion": "XY987ZW", "estado": "ADespachar" }
    ])
}

fn filas(html: &str) -> usize {
    html.matches("<td class=\"acciones\">").count()
}

#[tokio::test]
async fn test_page_renders_all_shipments() {
    let (base, recibidos) = spawn_upstream(StatusCode::OK, dos_envios()).await;

    let (status, html) = get(test_app(&base, None), "/web/envios/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(filas(&html), 2);
    assert!(html.contains("<td>AB123CD</td>"));
    assert!(html.contains("<tr><td>Rosario</td><td>120</td></tr>"));
    assert!(html.contains("<td>1 2</td>"));
    assert!(html.contains("No hay paradas disponibles"));
    assert!(html.contains("No hay pedidos disponibles"));
    assert!(html.contains("href=\"form.html?id=E-2&amp;tipo=FINALIZAR\""));

    let recibidos = recibidos.lock().unwrap();
    assert_eq!(recibidos.len(), 1);
    assert_eq!(recibidos[0].uri, "/envios");
    assert_eq!(recibidos[0].user_agent.as_deref(), Some("PostmanRuntime/7.33.0"));
    assert_eq!(recibidos[0].accept.as_deref(), Some("*/*"));
    assert_eq!(recibidos[0].accept_encoding.as_deref(), Some("gzip, deflate, br"));
    assert_eq!(recibidos[0].connection.as_deref(), Some("keep-alive"));
    assert!(recibidos[0].authorization.is_none());
}

#[tokio::test]
async fn test_gzip_response_is_decoded() {
    let (base, encodings) = spawn_upstream_gzip(dos_envios()).await;

    let (status, html) = get(test_app(&base, None), "/web/envios/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(filas(&html), 2);
    assert!(html.contains("<td>XY987ZW</td>"));
    assert_eq!(*encodings.lock().unwrap(), vec!["gzip".to_string()]);
}

#[tokio::test]
async fn test_date_range_filter_sets_both_params() {
    let (base, recibidos) = spawn_upstream(StatusCode::OK, dos_envios()).await;

    let (status, html) = get(
        test_app(&base, None),
        "/web/envios/filtrar?tipo=fecha&FechaDesde=2023-10-01&FechaHasta=2023-10-31",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        recibidos.lock().unwrap()[0].uri,
        "/envios?fechaCreacionComienzo=2023-10-01&fechaCreacionFin=2023-10-31"
    );
    assert!(html.contains("id=\"FechaDesde\" name=\"FechaDesde\" value=\"2023-10-01\""));
}

#[tokio::test]
async fn test_city_filter_uses_ultima_parada() {
    let (base, recibidos) = spawn_upstream(StatusCode::OK, json!([])).await;

    get(test_app(&base, None), "/web/envios/filtrar?tipo=ciudad&FiltroCiudad=Santa%20Fe").await;

    assert_eq!(recibidos.lock().unwrap()[0].uri, "/envios?ultimaParada=Santa+Fe");
}

#[tokio::test]
async fn test_unknown_filter_kind_queries_pedidos() {
    let (base, recibidos) = spawn_upstream(StatusCode::OK, json!([])).await;

    let (status, _) = get(
        test_app(&base, None),
        "/web/envios/filtrar?tipo=camion&FiltroPatente=AB123CD",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(recibidos.lock().unwrap()[0].uri, "/pedidos");
}

#[tokio::test]
async fn test_failed_fetch_shows_alert_and_no_rows() {
    let (base, _) = spawn_upstream(StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": "boom" })).await;

    let (status, html) = get(test_app(&base, None), "/web/envios/").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(html.contains("role=\"alert\">Error en la solicitud al servidor.</div>"));
    assert_eq!(filas(&html), 0);
}

#[tokio::test]
async fn test_unreachable_api_shows_alert() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let (status, html) = get(test_app(&format!("http://{}", addr), None), "/web/envios/").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(html.contains("Error en la solicitud al servidor."));
    assert_eq!(filas(&html), 0);
}

#[tokio::test]
async fn test_null_body_renders_empty_table() {
    let (base, _) = spawn_upstream(StatusCode::OK, Value::Null).await;

    let (status, html) = get(test_app(&base, None), "/web/envios/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<tbody>\n</tbody>"));
}

#[tokio::test]
async fn test_table_fragment() {
    let (base, recibidos) = spawn_upstream(StatusCode::OK, dos_envios()).await;

    let (status, html) = get(
        test_app(&base, None),
        "/web/envios/tabla?tipo=estado&FiltroEstado=EnRuta",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.starts_with("<tbody>"));
    assert_eq!(filas(&html), 2);
    assert_eq!(recibidos.lock().unwrap()[0].uri, "/envios?estado=EnRuta");
}

#[tokio::test]
async fn test_table_fragment_failure_is_bad_gateway() {
    let (base, _) = spawn_upstream(StatusCode::NOT_FOUND, json!({})).await;

    let (status, html) = get(test_app(&base, None), "/web/envios/tabla").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(html.contains("Error en la solicitud al servidor."));
}

#[tokio::test]
async fn test_json_listing_with_plate_filter() {
    let (base, recibidos) = spawn_upstream(StatusCode::OK, dos_envios()).await;

    let (status, body) = get(
        test_app(&base, Some("token-123")),
        "/api/envios?tipo=patente&FiltroPatente=AB123CD",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_str(&body).expect("json");
    assert_eq!(body["success"], true);
    assert_eq!(body["data"].as_array().map(Vec::len), Some(2));
    assert_eq!(body["data"][0]["patente_camion"], "AB123CD");

    let recibidos = recibidos.lock().unwrap();
    assert_eq!(recibidos[0].uri, "/envios?patente=AB123CD");
    assert_eq!(recibidos[0].authorization.as_deref(), Some("Bearer token-123"));
}

#[tokio::test]
async fn test_json_listing_failure_is_structured_error() {
    let (base, _) = spawn_upstream(StatusCode::SERVICE_UNAVAILABLE, json!({ "error": "down" })).await;

    let (status, body) = get(test_app(&base, None), "/api/envios").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    let body: Value = serde_json::from_str(&body).expect("json");
    assert_eq!(body["code"], "SOLICITUD_FALLIDA");
    assert_eq!(body["details"]["status"], 503);
}

#[tokio::test]
async fn test_page_without_trailing_slash_redirects() {
    let (base, _) = spawn_upstream(StatusCode::OK, json!([])).await;

    let request = Request::get("/web/envios").body(Body::empty()).expect("request");
    let response = test_app(&base, None).oneshot(request).await.expect("response");

    assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(response.headers()["location"], "/web/envios/");
}

#[tokio::test]
async fn test_health_endpoint() {
    let (status, body) = get(test_app("http://localhost:8080", None), "/test").await;

    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_str(&body).expect("json");
    assert_eq!(body["status"], "ok");
}
