use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use std::{
    cmp::Ordering,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};
use tower_http::services::{ServeDir, ServeFile};

use crate::catalog::{self, ProjectId, ProjectRecord};

const DEFAULT_PORT: u64 = 8080;
const DEFAULT_DIST_DIR: &str = "dist";
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const PORT_BOUNDS: (u64, u64) = (1, 65_535);

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum LogLevel {
    Debug,
    Info,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
        }
    }
}

#[derive(Clone)]
struct SiteRuntimeConfig {
    port: u16,
    dist_dir: PathBuf,
    log_level: LogLevel,
}

impl SiteRuntimeConfig {
    fn from_env() -> Self {
        let port = parse_env_u64_with_bounds("PORT", DEFAULT_PORT, PORT_BOUNDS) as u16;
        let dist_dir = parse_env_non_empty_string("DIST_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));
        let log_level = parse_log_level("LOG_LEVEL", DEFAULT_LOG_LEVEL);

        Self {
            port,
            dist_dir,
            log_level,
        }
    }
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = SiteRuntimeConfig::from_env();
    let bind_address = format!("0.0.0.0:{}", config.port);

    let static_service = ServeDir::new(&config.dist_dir)
        .not_found_service(ServeFile::new(config.dist_dir.join("index.html")));

    let app = Router::new()
        .route("/api/projects", get(get_projects))
        .route("/api/projects/{id}", get(get_project))
        .fallback_service(static_service)
        .with_state(config.clone());

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    log_event(
        &config,
        LogLevel::Info,
        "server_started",
        serde_json::json!({
            "port": config.port,
            "distDir": config.dist_dir.display().to_string(),
            "projects": catalog::all().len(),
        }),
    );
    axum::serve(listener, app).await?;
    Ok(())
}

async fn get_projects(State(config): State<SiteRuntimeConfig>) -> Json<&'static [ProjectRecord]> {
    log_event(
        &config,
        LogLevel::Debug,
        "projects_served",
        serde_json::json!({ "count": catalog::all().len() }),
    );
    Json(catalog::all())
}

async fn get_project(
    State(config): State<SiteRuntimeConfig>,
    Path(id): Path<ProjectId>,
) -> axum::response::Response {
    match catalog::find(id) {
        Some(record) => {
            log_event(
                &config,
                LogLevel::Debug,
                "project_served",
                serde_json::json!({ "id": id }),
            );
            Json(record).into_response()
        }
        None => {
            log_event(
                &config,
                LogLevel::Debug,
                "project_not_found",
                serde_json::json!({ "id": id }),
            );
            (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({ "ok": false, "error": "unknown project id" })),
            )
                .into_response()
        }
    }
}

fn log_event(config: &SiteRuntimeConfig, level: LogLevel, event: &str, fields: serde_json::Value) {
    if level < config.log_level {
        return;
    }

    let mut payload = serde_json::Map::new();
    payload.insert(
        "ts".to_string(),
        serde_json::Value::Number(serde_json::Number::from(now_unix_seconds())),
    );
    payload.insert(
        "level".to_string(),
        serde_json::Value::String(level.as_str().to_string()),
    );
    payload.insert(
        "event".to_string(),
        serde_json::Value::String(event.to_string()),
    );

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    println!("{}", serde_json::Value::Object(payload));
}

fn now_unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_secs())
        .unwrap_or(0)
}

fn parse_env_u64_with_bounds(name: &str, default: u64, bounds: (u64, u64)) -> u64 {
    std::env::var(name)
        .ok()
        .and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_env_non_empty_string(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_log_level(name: &str, default: LogLevel) -> LogLevel {
    match parse_env_non_empty_string(name)
        .unwrap_or_else(|| default.as_str().to_string())
        .to_ascii_lowercase()
        .as_str()
    {
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_ranks_below_info() {
        assert!(LogLevel::Debug < LogLevel::Info);
    }

    #[test]
    fn missing_env_value_falls_back_to_default() {
        assert_eq!(
            parse_env_u64_with_bounds("VEGA_PORT_TEST_UNSET", DEFAULT_PORT, PORT_BOUNDS),
            DEFAULT_PORT
        );
    }

    #[test]
    fn out_of_bounds_env_value_falls_back_to_default() {
        std::env::set_var("VEGA_PORT_TEST_OOB", "70000");
        assert_eq!(
            parse_env_u64_with_bounds("VEGA_PORT_TEST_OOB", DEFAULT_PORT, PORT_BOUNDS),
            DEFAULT_PORT
        );
    }

    #[test]
    fn in_bounds_env_value_is_used() {
        std::env::set_var("VEGA_PORT_TEST_OK", " 3000 ");
        assert_eq!(
            parse_env_u64_with_bounds("VEGA_PORT_TEST_OK", DEFAULT_PORT, PORT_BOUNDS),
            3000
        );
    }

    #[test]
    fn unknown_log_level_falls_back_to_default() {
        std::env::set_var("VEGA_LOG_LEVEL_TEST", "verbose");
        assert_eq!(
            parse_log_level("VEGA_LOG_LEVEL_TEST", DEFAULT_LOG_LEVEL),
            DEFAULT_LOG_LEVEL
        );

        std::env::set_var("VEGA_LOG_LEVEL_TEST_DEBUG", "DEBUG");
        assert_eq!(
            parse_log_level("VEGA_LOG_LEVEL_TEST_DEBUG", DEFAULT_LOG_LEVEL),
            LogLevel::Debug
        );
    }

    #[test]
    fn project_payload_uses_camel_case_and_omits_absent_media() {
        let value = serde_json::to_value(catalog::all()).expect("catalog serializes");
        let records = value.as_array().expect("array payload");
        assert_eq!(records.len(), catalog::all().len());

        let first = &records[0];
        assert!(first.get("shortDescription").is_some());
        assert!(first.get("video").is_some());
        assert!(first.get("short_description").is_none());

        // Record 2 carries neither video nor link; both keys must be absent,
        // not null, so the frontend's optional branches stay skipped.
        let second = &records[1];
        assert!(second.get("video").is_none());
        assert!(second.get("link").is_none());
    }
}
