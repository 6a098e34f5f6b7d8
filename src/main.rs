use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use anyhow::Context;
use clap::Parser;
use golf_smart::args::{Cli, load_config};
use golf_smart::controller::backend::{BackendConfig, backend_from_config};
use golf_smart::controller::http_handlers::{AppState, configure};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config(Cli::parse()).context("load configuration")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &config.backend {
        BackendConfig::Http { endpoints, bearer_token } => {
            info!(rounds = %endpoints.rounds, scan = %endpoints.scan, "using backend api");
            if bearer_token.is_none() {
                warn!("no bearer token configured, authenticated endpoints will reject requests");
            }
        }
        BackendConfig::Fixture(path) => {
            info!(fixture = %path.display(), "serving offline fixture data");
        }
    }
    if config.user_id.is_none() {
        warn!("no user id configured, score submission is disabled");
    }

    let backend = backend_from_config(&config.backend).context("build backend")?;
    let state = Data::new(AppState::new(backend, config.user_id.clone()));

    info!(bind = %config.bind, "starting golf-smart");
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(configure)
    })
    .bind(&config.bind)
    .with_context(|| format!("bind {}", config.bind))?
    .run()
    .await?;
    Ok(())
}
