//! # Serve Command Server Logic
//!
//! File: cli/src/commands/serve/server_logic.rs
//!
//! ## Overview
//!
//! Builds the axum application and runs it until Ctrl+C or SIGTERM:
//!
//! - `/api/*` routes from `chat_api`.
//! - Everything else from the site directory via `ServeDir`. In SPA mode a
//!   path with no matching file gets the index file, so client-side routes
//!   such as `/work/onboarding` load the app.
//! - Request tracing on every route; permissive CORS on static files unless
//!   disabled.
//!
//! If the requested port is taken, the next ports are tried (10 in total).
//!
use super::chat_api::{self, AppState};
use super::config::ServerConfig;
use super::utils;
use crate::core::error::{FolioError, Result};
use anyhow::Context;
use axum::Router;
use std::net::{IpAddr, SocketAddr};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, warn, Level};

const MAX_PORT_ATTEMPTS: u8 = 10;

pub async fn run_server(config: ServerConfig, state: AppState) -> Result<()> {
    let addr = find_available_port(config.host, config.port, MAX_PORT_ATTEMPTS).await?;
    utils::log_site_summary(&config.directory, &config.index_file);

    let llm_enabled = state.generator.is_some();
    let entries = state.knowledge.len();
    let app = create_app(&config, state);

    println!("\n=================================================================");
    println!("📂 Serving site from:  {}", config.directory.display());
    println!("🌐 Local URL:          http://localhost:{}", addr.port());
    if let Some(ip) = utils::get_local_ip() {
        if config.host.is_unspecified() {
            println!("🔗 Network URL:        http://{}:{}", ip, addr.port());
        }
    }
    println!("⚙️  Binding to address: {}", addr);
    println!("❓ Index file:         {} (SPA fallback: {})", config.index_file, config.spa_fallback);
    println!("🔒 CORS (static):      {}", config.enable_cors);
    println!("💬 /api/chat LLM:      {}", if llm_enabled { "configured" } else { "not configured" });
    println!("📚 /api/answer:        {} knowledge entries", entries);
    println!("=================================================================\n");

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind TCP listener to address {}", addr))?;
    info!("Listening on {}", addr);
    println!("Server starting! Press Ctrl+C to stop.");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    println!("\nServer shutdown complete.");
    Ok(())
}

/// Resolves once Ctrl+C or SIGTERM arrives.
async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down..."),
            Err(e) => {
                error!("Failed to listen for Ctrl+C: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
                info!("Received SIGTERM, shutting down...");
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// Returns the first address in `start_port..start_port + max_attempts` that
/// can be bound on `host`.
async fn find_available_port(host: IpAddr, start_port: u16, max_attempts: u8) -> Result<SocketAddr> {
    let mut port = start_port;
    for attempt in 0..max_attempts {
        let addr = SocketAddr::new(host, port);
        match TcpListener::bind(addr).await {
            Ok(listener) => {
                drop(listener);
                if attempt > 0 {
                    info!("Port {} was busy, using {} instead.", start_port, port);
                }
                return Ok(addr);
            }
            Err(e) => {
                warn!("Port {} on {} unavailable ({}), trying next.", port, host, e);
                port = match port.checked_add(1) {
                    Some(next) => next,
                    None => break,
                };
            }
        }
    }

    anyhow::bail!(FolioError::Server(format!(
        "No free port on {} in {}..{}",
        host,
        start_port,
        start_port.saturating_add(u16::from(max_attempts))
    )))
}

pub fn create_app(config: &ServerConfig, state: AppState) -> Router {
    let cors_layer = if config.enable_cors {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
    };

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::default().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let api = chat_api::router(state);
    let serve_dir = ServeDir::new(&config.directory);

    let app = if config.spa_fallback {
        let index = ServeFile::new(config.index_path());
        api.fallback_service(
            ServiceBuilder::new()
                .layer(cors_layer)
                .service(serve_dir.fallback(index)),
        )
    } else {
        api.fallback_service(ServiceBuilder::new().layer(cors_layer).service(serve_dir))
    };

    app.layer(trace_layer)
}
