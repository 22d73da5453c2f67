//! Social Compass server binary.
//!
//! Wires the file-backed store, the email notifier, and the HTTP API
//! together from environment configuration and serves until shutdown.

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use social_compass::adapters::email::{NoopNotifier, ResendNotifier};
use social_compass::adapters::http::{questionnaire_routes, QuestionnaireHandlers};
use social_compass::adapters::storage::FileResultStore;
use social_compass::application::handlers::{LookupResultHandler, SubmitQuestionnaireHandler};
use social_compass::config::AppConfig;
use social_compass::ports::ResultNotifier;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.server.log_level)?)
        .init();

    let store = Arc::new(FileResultStore::load(&config.storage.data_path).await?);

    let notifier: Arc<dyn ResultNotifier> = if config.email.enabled() {
        tracing::info!(
            recipient = %config.email.practitioner_email,
            "practitioner notifications enabled"
        );
        Arc::new(ResendNotifier::new(&config.email))
    } else {
        tracing::warn!("no email API key configured, practitioner notifications disabled");
        Arc::new(NoopNotifier)
    };

    let submit_handler = Arc::new(SubmitQuestionnaireHandler::new(
        store.clone(),
        notifier,
        config.scoring.tom_policy,
    ));
    let lookup_handler = Arc::new(LookupResultHandler::new(store));
    let handlers = QuestionnaireHandlers::new(submit_handler, lookup_handler);

    let cors = cors_mode(&config)?;
    if matches!(cors, CorsMode::Disabled) {
        tracing::info!("no CORS origins configured in production; cross-origin requests disabled");
    }

    let app = Router::new()
        .nest("/api", questionnaire_routes(handlers))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors_layer(cors));

    let addr = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "social compass server ready");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Cross-origin posture derived from configuration.
///
/// Explicit origins always win. Without them, development stays permissive
/// for local frontends while production keeps cross-origin requests disabled.
#[derive(Debug, PartialEq, Eq)]
enum CorsMode {
    Permissive,
    Disabled,
    AllowList(Vec<HeaderValue>),
}

fn cors_mode(config: &AppConfig) -> Result<CorsMode, Box<dyn Error>> {
    let origins = config.server.cors_origins_list();
    if !origins.is_empty() {
        let mut parsed = Vec::with_capacity(origins.len());
        for origin in &origins {
            parsed.push(origin.parse::<HeaderValue>()?);
        }
        return Ok(CorsMode::AllowList(parsed));
    }
    if config.is_production() {
        Ok(CorsMode::Disabled)
    } else {
        Ok(CorsMode::Permissive)
    }
}

fn cors_layer(mode: CorsMode) -> CorsLayer {
    match mode {
        CorsMode::Permissive => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsMode::Disabled => CorsLayer::new(),
        CorsMode::AllowList(origins) => CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any),
    }
}
