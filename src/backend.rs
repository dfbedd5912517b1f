use axum::{
    body::Bytes,
    extract::{ConnectInfo, State},
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    response::IntoResponse,
    routing::{any, get},
    Json, Router,
};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::{
    fs::{File, OpenOptions},
    io::Write,
    net::SocketAddr,
    path::{Path, PathBuf},
    sync::atomic::{AtomicU64, Ordering as AtomicOrdering},
    sync::{Arc, Mutex},
    time::{SystemTime, UNIX_EPOCH},
};
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing_subscriber::EnvFilter;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_STATIC_DIR: &str = "dist";
const DEFAULT_LOG_FILTER: &str = "info";
const DEFAULT_LOG_FORMAT: LogFormat = LogFormat::Pretty;

const PORT_BOUNDS: (u16, u16) = (1, u16::MAX);
const FORWARDED_FOR_HEADER: &str = "x-forwarded-for";
const REQUEST_ID_HEADER: &str = "x-request-id";
const METHOD_NOT_ALLOWED_MESSAGE: &str = "Only the POST method is allowed";
const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LogFormat {
    Pretty,
    Json,
}

#[derive(Clone, Debug, PartialEq)]
struct ServerConfig {
    port: u16,
    static_dir: PathBuf,
    log_filter: String,
    log_format: LogFormat,
    visit_log_path: Option<PathBuf>,
}

impl ServerConfig {
    fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = parse_u16_with_bounds(lookup("PORT"), DEFAULT_PORT, PORT_BOUNDS);
        let static_dir = non_empty(lookup("STATIC_DIR"))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));
        let log_filter =
            non_empty(lookup("LOG_LEVEL")).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        let log_format = parse_log_format(lookup("LOG_FORMAT"), DEFAULT_LOG_FORMAT);
        let visit_log_path = non_empty(lookup("VISIT_LOG_PATH")).map(PathBuf::from);

        Self {
            port,
            static_dir,
            log_filter,
            log_format,
            visit_log_path,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("failed to serialize visit record: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write visit record: {0}")]
    Io(#[from] std::io::Error),
    #[error("visit log file lock was poisoned")]
    Poisoned,
}

#[derive(Debug, thiserror::Error)]
enum LocationRequestError {
    #[error("request body is not a location payload: {0}")]
    MalformedBody(#[source] serde_json::Error),
    #[error(transparent)]
    Sink(#[from] SinkError),
}

impl LocationRequestError {
    fn error_class(&self) -> &'static str {
        match self {
            Self::MalformedBody(_) => "malformed_body",
            Self::Sink(_) => "sink_failed",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LocationRecord {
    ip: String,
    latitude: f64,
    longitude: f64,
    timestamp: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VisitEntry {
    Visitor { ip: String },
    Location(LocationRecord),
}

/// Destination for visitor records.
pub trait VisitSink: Send + Sync {
    fn record(&self, entry: &VisitEntry) -> Result<(), SinkError>;
}

struct TracingSink;

impl VisitSink for TracingSink {
    fn record(&self, entry: &VisitEntry) -> Result<(), SinkError> {
        match entry {
            VisitEntry::Visitor { ip } => {
                tracing::info!(event = "visitor_ip", ip = %ip, "visitor connected");
            }
            VisitEntry::Location(record) => {
                tracing::info!(
                    event = "location_received",
                    ip = %record.ip,
                    latitude = record.latitude,
                    longitude = record.longitude,
                    timestamp = %record.timestamp,
                    "precise location received"
                );
            }
        }
        Ok(())
    }
}

/// Appends one JSON object per line.
struct JsonLinesSink {
    file: Mutex<File>,
}

impl JsonLinesSink {
    fn open(path: &Path) -> Result<Self, SinkError> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl VisitSink for JsonLinesSink {
    fn record(&self, entry: &VisitEntry) -> Result<(), SinkError> {
        let mut line = serde_json::to_vec(entry)?;
        line.push(b'\n');

        let mut file = self.file.lock().map_err(|_| SinkError::Poisoned)?;
        file.write_all(&line)?;
        file.flush()?;
        Ok(())
    }
}

struct FanoutSink {
    sinks: Vec<Box<dyn VisitSink>>,
}

impl VisitSink for FanoutSink {
    fn record(&self, entry: &VisitEntry) -> Result<(), SinkError> {
        for sink in &self.sinks {
            sink.record(entry)?;
        }
        Ok(())
    }
}

impl FanoutSink {
    /// Runs `durable` before `announce`; a durable failure stops the chain.
    fn new(durable: Option<Box<dyn VisitSink>>, announce: Box<dyn VisitSink>) -> Self {
        let sinks = durable.into_iter().chain(std::iter::once(announce)).collect();
        Self { sinks }
    }
}

fn build_sink(config: &ServerConfig) -> Result<Arc<dyn VisitSink>, SinkError> {
    let durable = match config.visit_log_path.as_deref() {
        Some(path) => Some(Box::new(JsonLinesSink::open(path)?) as Box<dyn VisitSink>),
        None => None,
    };

    Ok(Arc::new(FanoutSink::new(durable, Box::new(TracingSink))))
}

#[derive(Clone)]
pub struct AppState {
    sink: Arc<dyn VisitSink>,
}

#[derive(Serialize)]
struct IpPayload {
    ip: String,
}

#[derive(Deserialize)]
struct LocationBody {
    latitude: f64,
    longitude: f64,
}

#[derive(Serialize)]
struct LocationSuccessPayload {
    success: bool,
    data: LocationRecord,
}

#[derive(Serialize)]
struct FailurePayload {
    success: bool,
    message: &'static str,
}

#[derive(Serialize)]
struct MessagePayload {
    message: &'static str,
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env();
    init_tracing(&config);

    let state = AppState {
        sink: build_sink(&config)?,
    };
    let app = router(state, &config.static_dir);

    let bind_address = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    tracing::info!(
        event = "server_listening",
        address = %format!("http://127.0.0.1:{}", config.port),
        static_dir = %config.static_dir.display(),
        visit_log = config.visit_log_path.is_some(),
        "server listening"
    );
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;
    Ok(())
}

fn init_tracing(config: &ServerConfig) {
    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let installed = match config.log_format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.try_init(),
    };

    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

fn router(state: AppState, static_dir: &Path) -> Router {
    let static_service =
        ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/api/ip", get(get_ip))
        .route("/api/getIp", get(get_ip))
        .route("/api/location", any(log_location))
        .route("/api/log-location", any(log_location))
        .fallback_service(static_service)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn get_ip(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let request_id = resolve_request_id(&headers);
    let ip = client_ip(&headers, peer);

    if let Err(error) = state.sink.record(&VisitEntry::Visitor { ip: ip.clone() }) {
        tracing::error!(
            event = "visitor_ip_log_failed",
            request_id = %request_id,
            error = %error,
            "failed to record visitor ip"
        );
    }

    json_response(StatusCode::OK, Json(IpPayload { ip }), &request_id)
}

async fn log_location(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let request_id = resolve_request_id(&headers);

    if method != Method::POST {
        tracing::info!(
            event = "location_method_rejected",
            request_id = %request_id,
            method = %method,
            "rejected non-POST location request"
        );
        let mut response = json_response(
            StatusCode::METHOD_NOT_ALLOWED,
            Json(MessagePayload {
                message: METHOD_NOT_ALLOWED_MESSAGE,
            }),
            &request_id,
        );
        response
            .headers_mut()
            .insert(header::ALLOW, HeaderValue::from_static("POST"));
        return response;
    }

    let ip = client_ip(&headers, peer);
    match record_location(state.sink.as_ref(), ip, &body) {
        Ok(record) => json_response(
            StatusCode::OK,
            Json(LocationSuccessPayload {
                success: true,
                data: record,
            }),
            &request_id,
        ),
        Err(error) => {
            tracing::error!(
                event = "location_log_failed",
                request_id = %request_id,
                error_class = error.error_class(),
                error = %error,
                "failed to record location"
            );
            json_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(FailurePayload {
                    success: false,
                    message: INTERNAL_ERROR_MESSAGE,
                }),
                &request_id,
            )
        }
    }
}

fn record_location(
    sink: &dyn VisitSink,
    ip: String,
    body: &[u8],
) -> Result<LocationRecord, LocationRequestError> {
    let LocationBody {
        latitude,
        longitude,
    } = serde_json::from_slice(body).map_err(LocationRequestError::MalformedBody)?;

    let record = LocationRecord {
        ip,
        latitude,
        longitude,
        timestamp: iso_timestamp_now(),
    };
    sink.record(&VisitEntry::Location(record.clone()))?;
    Ok(record)
}

fn client_ip(headers: &HeaderMap, peer: SocketAddr) -> String {
    headers
        .get(FORWARDED_FOR_HEADER)
        .and_then(|raw| raw.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
        .unwrap_or_else(|| peer.ip().to_string())
}

fn iso_timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn json_response(
    status: StatusCode,
    payload: impl IntoResponse,
    request_id: &str,
) -> axum::response::Response {
    let mut headers = HeaderMap::new();
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    response_with_request_id(status, headers, payload, request_id)
}

fn response_with_request_id(
    status: StatusCode,
    mut headers: HeaderMap,
    payload: impl IntoResponse,
    request_id: &str,
) -> axum::response::Response {
    if let Ok(request_id_header) = HeaderValue::from_str(request_id) {
        headers.insert(REQUEST_ID_HEADER, request_id_header);
    }
    (status, headers, payload).into_response()
}

fn parse_u16_with_bounds(value: Option<String>, default: u16, bounds: (u16, u16)) -> u16 {
    value
        .and_then(|value| value.trim().parse::<u16>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_log_format(value: Option<String>, default: LogFormat) -> LogFormat {
    match non_empty(value)
        .map(|value| value.to_ascii_lowercase())
        .as_deref()
    {
        Some("json") => LogFormat::Json,
        Some("pretty") => LogFormat::Pretty,
        _ => default,
    }
}

fn now_unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis())
        .unwrap_or(0)
}

fn generate_request_id() -> String {
    let counter = REQUEST_ID_COUNTER.fetch_add(1, AtomicOrdering::Relaxed);
    format!("req-{}-{counter}", now_unix_millis())
}

fn resolve_request_id(headers: &HeaderMap) -> String {
    let value = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|raw| raw.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string);

    value.unwrap_or_else(generate_request_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemorySink {
        entries: Mutex<Vec<VisitEntry>>,
    }

    impl MemorySink {
        fn entries(&self) -> Vec<VisitEntry> {
            self.entries.lock().expect("sink lock").clone()
        }
    }

    impl VisitSink for MemorySink {
        fn record(&self, entry: &VisitEntry) -> Result<(), SinkError> {
            self.entries.lock().expect("sink lock").push(entry.clone());
            Ok(())
        }
    }

    struct SharedSink(Arc<MemorySink>);

    impl VisitSink for SharedSink {
        fn record(&self, entry: &VisitEntry) -> Result<(), SinkError> {
            self.0.record(entry)
        }
    }

    struct FailingSink;

    impl VisitSink for FailingSink {
        fn record(&self, _entry: &VisitEntry) -> Result<(), SinkError> {
            Err(SinkError::Poisoned)
        }
    }

    async fn spawn_server(sink: Arc<dyn VisitSink>) -> SocketAddr {
        let app = router(AppState { sink }, Path::new("dist"));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test listener");
        let address = listener.local_addr().expect("listener address");

        tokio::spawn(async move {
            axum::serve(
                listener,
                app.into_make_service_with_connect_info::<SocketAddr>(),
            )
            .await
            .expect("test server");
        });

        address
    }

    fn test_config(values: &[(&str, &str)]) -> ServerConfig {
        let values: HashMap<String, String> = values
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        ServerConfig::from_lookup(|name| values.get(name).cloned())
    }

    fn temp_log_path(label: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "skyling-{label}-{}-{}.jsonl",
            std::process::id(),
            now_unix_millis()
        ))
    }

    #[test]
    fn config_uses_defaults_when_unset() {
        let config = test_config(&[]);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.static_dir, PathBuf::from(DEFAULT_STATIC_DIR));
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.visit_log_path, None);
    }

    #[test]
    fn config_reads_overrides_and_rejects_out_of_range_port() {
        let config = test_config(&[
            ("PORT", " 3000 "),
            ("STATIC_DIR", "public"),
            ("LOG_LEVEL", "debug,tower_http=info"),
            ("LOG_FORMAT", "JSON"),
            ("VISIT_LOG_PATH", "/var/log/visits.jsonl"),
        ]);
        assert_eq!(config.port, 3000);
        assert_eq!(config.static_dir, PathBuf::from("public"));
        assert_eq!(config.log_filter, "debug,tower_http=info");
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(
            config.visit_log_path,
            Some(PathBuf::from("/var/log/visits.jsonl"))
        );

        assert_eq!(test_config(&[("PORT", "0")]).port, DEFAULT_PORT);
        assert_eq!(test_config(&[("PORT", "99999")]).port, DEFAULT_PORT);
        assert_eq!(
            test_config(&[("LOG_FORMAT", "xml")]).log_format,
            LogFormat::Pretty
        );
    }

    #[test]
    fn client_ip_prefers_forwarded_header() {
        let peer: SocketAddr = "10.0.0.7:51000".parse().expect("valid socket address");
        let mut headers = HeaderMap::new();
        assert_eq!(client_ip(&headers, peer), "10.0.0.7");

        headers.insert(FORWARDED_FOR_HEADER, HeaderValue::from_static("   "));
        assert_eq!(client_ip(&headers, peer), "10.0.0.7");

        headers.insert(
            FORWARDED_FOR_HEADER,
            HeaderValue::from_static(" 203.0.113.5 "),
        );
        assert_eq!(client_ip(&headers, peer), "203.0.113.5");
    }

    #[test]
    fn request_id_is_echoed_or_generated() {
        let mut headers = HeaderMap::new();
        assert!(resolve_request_id(&headers).starts_with("req-"));

        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("abc-123"));
        assert_eq!(resolve_request_id(&headers), "abc-123");
    }

    #[test]
    fn json_lines_sink_appends_one_record_per_line() {
        let path = temp_log_path("sink");
        let sink = JsonLinesSink::open(&path).expect("open visit log");

        sink.record(&VisitEntry::Visitor {
            ip: "198.51.100.1".to_string(),
        })
        .expect("write visitor");
        sink.record(&VisitEntry::Location(LocationRecord {
            ip: "198.51.100.1".to_string(),
            latitude: 1.5,
            longitude: 2.5,
            timestamp: "2026-01-01T00:00:00.000Z".to_string(),
        }))
        .expect("write location");

        let contents = std::fs::read_to_string(&path).expect("read visit log");
        let _ = std::fs::remove_file(&path);
        let lines: Vec<serde_json::Value> = contents
            .lines()
            .map(|line| serde_json::from_str(line).expect("json line"))
            .collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["kind"], "visitor");
        assert_eq!(lines[0]["ip"], "198.51.100.1");
        assert_eq!(lines[1]["kind"], "location");
        assert_eq!(lines[1]["latitude"], 1.5);
    }

    #[test]
    fn failed_durable_write_skips_the_announcement() {
        let announced = Arc::new(MemorySink::default());
        let fanout = FanoutSink::new(
            Some(Box::new(FailingSink)),
            Box::new(SharedSink(announced.clone())),
        );

        let result = fanout.record(&VisitEntry::Visitor {
            ip: "203.0.113.5".to_string(),
        });

        assert!(matches!(result, Err(SinkError::Poisoned)));
        assert!(announced.entries().is_empty());
    }

    #[test]
    fn fanout_without_durable_sink_still_announces() {
        let announced = Arc::new(MemorySink::default());
        let fanout = FanoutSink::new(None, Box::new(SharedSink(announced.clone())));
        let entry = VisitEntry::Visitor {
            ip: "198.51.100.1".to_string(),
        };

        fanout.record(&entry).expect("record visitor");

        assert_eq!(announced.entries(), vec![entry]);
    }

    #[test]
    fn malformed_location_body_is_not_recorded() {
        let sink = MemorySink::default();
        let result = record_location(&sink, "203.0.113.5".to_string(), b"{\"latitude\":\"north\"}");

        assert!(matches!(
            result,
            Err(LocationRequestError::MalformedBody(_))
        ));
        assert!(sink.entries().is_empty());
    }

    #[tokio::test]
    async fn ip_endpoint_returns_forwarded_address_and_logs_it() {
        let sink = Arc::new(MemorySink::default());
        let address = spawn_server(sink.clone()).await;

        let response = reqwest::Client::new()
            .get(format!("http://{address}/api/ip"))
            .header(FORWARDED_FOR_HEADER, "203.0.113.5")
            .send()
            .await
            .expect("ip request");

        assert_eq!(response.status(), reqwest::StatusCode::OK);
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));
        let body: serde_json::Value = response.json().await.expect("json body");
        assert_eq!(body, serde_json::json!({ "ip": "203.0.113.5" }));
        assert_eq!(
            sink.entries(),
            vec![VisitEntry::Visitor {
                ip: "203.0.113.5".to_string()
            }]
        );
    }

    #[tokio::test]
    async fn ip_endpoint_falls_back_to_peer_address() {
        let sink = Arc::new(MemorySink::default());
        let address = spawn_server(sink).await;

        let body: serde_json::Value = reqwest::get(format!("http://{address}/api/getIp"))
            .await
            .expect("ip request")
            .json()
            .await
            .expect("json body");

        assert_eq!(body["ip"], "127.0.0.1");
    }

    #[tokio::test]
    async fn location_endpoint_rejects_get_without_logging() {
        let sink = Arc::new(MemorySink::default());
        let address = spawn_server(sink.clone()).await;

        let response = reqwest::get(format!("http://{address}/api/location"))
            .await
            .expect("location request");

        assert_eq!(response.status(), reqwest::StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            response
                .headers()
                .get(header::ALLOW)
                .and_then(|value| value.to_str().ok()),
            Some("POST")
        );
        let body: serde_json::Value = response.json().await.expect("json body");
        assert_eq!(body["message"], METHOD_NOT_ALLOWED_MESSAGE);
        assert!(sink.entries().is_empty());
    }

    #[tokio::test]
    async fn location_endpoint_records_coordinates_with_timestamp() {
        let sink = Arc::new(MemorySink::default());
        let address = spawn_server(sink.clone()).await;
        let before = Utc::now();

        let response = reqwest::Client::new()
            .post(format!("http://{address}/api/log-location"))
            .header(FORWARDED_FOR_HEADER, "203.0.113.5")
            .json(&serde_json::json!({ "latitude": 10.5, "longitude": -20.25 }))
            .send()
            .await
            .expect("location request");
        let after = Utc::now();

        assert_eq!(response.status(), reqwest::StatusCode::OK);
        let body: serde_json::Value = response.json().await.expect("json body");
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["ip"], "203.0.113.5");
        assert_eq!(body["data"]["latitude"], 10.5);
        assert_eq!(body["data"]["longitude"], -20.25);

        let timestamp = body["data"]["timestamp"]
            .as_str()
            .expect("timestamp string");
        assert!(timestamp.ends_with('Z'));
        let parsed = DateTime::parse_from_rfc3339(timestamp)
            .expect("ISO-8601 timestamp")
            .with_timezone(&Utc);
        let millis = chrono::Duration::milliseconds(1);
        assert!(parsed >= before - millis && parsed <= after + millis);

        let entries = sink.entries();
        assert_eq!(entries.len(), 1);
        match &entries[0] {
            VisitEntry::Location(record) => {
                assert_eq!(record.ip, "203.0.113.5");
                assert_eq!(record.timestamp, timestamp);
            }
            other => panic!("unexpected entry {other:?}"),
        }
    }

    #[tokio::test]
    async fn location_endpoint_maps_bad_body_to_generic_failure() {
        let sink = Arc::new(MemorySink::default());
        let address = spawn_server(sink.clone()).await;

        let response = reqwest::Client::new()
            .post(format!("http://{address}/api/location"))
            .body("not json")
            .send()
            .await
            .expect("location request");

        assert_eq!(
            response.status(),
            reqwest::StatusCode::INTERNAL_SERVER_ERROR
        );
        let body: serde_json::Value = response.json().await.expect("json body");
        assert_eq!(
            body,
            serde_json::json!({ "success": false, "message": INTERNAL_ERROR_MESSAGE })
        );
        assert!(sink.entries().is_empty());
    }

    #[tokio::test]
    async fn location_endpoint_reports_sink_failure_as_internal_error() {
        let address = spawn_server(Arc::new(FailingSink)).await;

        let response = reqwest::Client::new()
            .post(format!("http://{address}/api/location"))
            .json(&serde_json::json!({ "latitude": 1.0, "longitude": 2.0 }))
            .send()
            .await
            .expect("location request");

        assert_eq!(
            response.status(),
            reqwest::StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
