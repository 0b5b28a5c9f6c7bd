mod config;
mod state;
mod routes;
mod handlers;
mod endpoint;
mod translate;

use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use config::{Config, SystemConfig};
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("translation_endpoint=debug,tower_http=debug")),
        )
        .init();

    let config = load_config()?;
    let system_config = &config.system_config;

    let app_state = AppState::new(&config)?;
    info!("Using translator: {}", app_state.translator.name());

    let app = Router::new()
        .merge(routes::create_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    let listener = bind_listener(system_config).await?;
    info!("Starting server on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}

/// `host` may be an IP address or a resolvable name such as `localhost`
async fn bind_listener(system_config: &SystemConfig) -> Result<TcpListener> {
    let addr = (system_config.host.as_str(), system_config.port);
    TcpListener::bind(addr).await.map_err(|e| {
        anyhow::anyhow!("Failed to bind {}:{}: {}", system_config.host, system_config.port, e)
    })
}

/// First existing config file wins; built-in defaults otherwise.
/// A file that exists but cannot be parsed is a startup error.
fn load_config() -> Result<Config> {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| std::path::PathBuf::from("."));

    let config_paths: Vec<String> = vec![
        std::env::var("CONFIG_PATH").ok(),
        Some("conf.yaml".to_string()),
        Some("conf.json".to_string()),
        exe_dir.join("conf.yaml").to_str().map(|s| s.to_string()),
        exe_dir.join("conf.json").to_str().map(|s| s.to_string()),
    ]
    .into_iter()
    .flatten()
    .collect();

    for path in &config_paths {
        if !std::path::Path::new(path).exists() {
            tracing::debug!("No config file at {}", path);
            continue;
        }
        let cfg = Config::load(path)
            .map_err(|e| anyhow::anyhow!("Failed to load config from {}: {}", path, e))?;
        info!("Loaded configuration from: {}", path);
        return Ok(cfg);
    }

    warn!("No configuration file found (tried {:?}), using defaults", config_paths);
    Ok(Config::default())
}
