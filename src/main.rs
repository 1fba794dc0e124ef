use clap::Parser;
use cli::Args;
use std::process::ExitCode;
use std::time::Duration;
use storage::interface::SessionRepo;

mod app_context;
mod auth;
mod cli;
mod health;
mod http;
mod logging;
mod map;
mod rounds;
mod samples;
mod storage;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(&args);
    auth::init(&args);
    let samples = match samples::init(&args) {
        Ok(samples) => samples,
        Err(err) => {
            tracing::error!("Failed to load samples: {err}");
            return ExitCode::FAILURE;
        }
    };
    let app_context = app_context::init(samples);
    let _ = app_context.sessions.spawn_idle_eviction(
        Duration::from_secs(args.session_sweep_interval_secs.max(1)),
        Duration::from_secs(args.session_idle_timeout_secs),
    );
    let sessions = app_context.sessions.clone();
    let router = http::router::new(&args, app_context);

    let listener = match tokio::net::TcpListener::bind(args.listen_address).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("Failed to bind to {}: {err}", args.listen_address);
            return ExitCode::FAILURE;
        }
    };
    tracing::info!("Listening on {}.", args.listen_address);
    if let Err(err) = axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!("Server stopped unexpectedly: {err}");
        return ExitCode::FAILURE;
    }
    let sessions_count = sessions.count().await;
    tracing::info!(
        sessions_count,
        "Shut down, dropping all sessions."
    );
    ExitCode::SUCCESS
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for the shutdown signal: {err}");
    }
}
