//! # Second Brain API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

#[cfg(feature = "scheduler")]
mod background;
mod config;
mod handlers;
mod middleware;
mod observability;
mod state;
mod telemetry;

use config::AppConfig;
use observability::RequestIdMiddleware;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!(
        "Starting Second Brain API Server on {}:{}",
        config.host,
        config.port
    );

    let state = AppState::new(&config)
        .await
        .map_err(std::io::Error::other)?;
    let token_service = AppState::token_service(&config);

    #[cfg(feature = "scheduler")]
    let scheduler = start_scheduler(&config, &state).await;

    HttpServer::new(move || {
        let app = App::new()
            .wrap(RequestIdMiddleware)
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()));

        // Left unregistered without a secret; protected routes then answer 500
        let app = match &token_service {
            Some(tokens) => app.app_data(web::Data::new(tokens.clone())),
            None => app,
        };

        app.configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    #[cfg(feature = "scheduler")]
    if let Some(mut scheduler) = scheduler {
        if let Err(e) = scheduler.shutdown().await {
            tracing::warn!("Scheduler shutdown failed: {}", e);
        }
    }

    Ok(())
}

/// Purge expired codes when they expire and live in process memory.
#[cfg(feature = "scheduler")]
async fn start_scheduler(config: &AppConfig, state: &AppState) -> Option<background::Scheduler> {
    use background::{Scheduler, SchedulerConfig};

    let (Some(_), Some(cache)) = (config.otp_ttl, state.memory_cache.clone()) else {
        return None;
    };

    let result = async {
        let scheduler = Scheduler::new(SchedulerConfig::from_env()).await?;
        scheduler.add_otp_purge(cache).await?;
        scheduler.start().await?;
        Ok::<_, tokio_cron_scheduler::JobSchedulerError>(scheduler)
    }
    .await;

    match result {
        Ok(scheduler) => Some(scheduler),
        Err(e) => {
            tracing::error!("Failed to start scheduler: {}", e);
            None
        }
    }
}
