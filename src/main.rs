//! Calldeck dashboard server
//!
//! Serves the admin dashboard API for a voice-assistant deployment: the
//! inbound scheduling-assistant call list and the outbound claim-status
//! campaign batches, normalized from the upstream voice API into
//! display-ready rows.

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{http::header, middleware, web, App, HttpResponse, HttpServer};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use calldeck_api::{configure_batches, configure_calls};
use calldeck_client::UpstreamClient;
use calldeck_core::config::AppConfig;
use calldeck_core::traits::CallDirectory;

/// Health check endpoint
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "calldeck",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Configure API routes
fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .route("/health", web::get().to(health_check))
            .configure(configure_calls)
            .configure(configure_batches),
    );
}

/// Initialize tracing/logging
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("calldeck=info,calldeck_api=info,calldeck_client=info,actix_web=info")
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .init();
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    info!("Starting Calldeck v{}", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load().map_err(|e| std::io::Error::other(e.to_string()))?;

    let client = UpstreamClient::new(config.upstream.clone())
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    let directory: Arc<dyn CallDirectory> = Arc::new(client);
    let directory = web::Data::from(directory);

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let workers = config.server.workers;
    let cors_origins = config.server.cors_origins.clone();

    info!(
        "Upstream: calls={}, batches={}",
        config.upstream.calls_base_url, config.upstream.batches_base_url
    );
    info!(
        "Starting HTTP server on {} with {} workers",
        bind_addr, workers
    );

    HttpServer::new(move || {
        // Clone cors_origins for each worker
        let cors_origins_inner = cors_origins.clone();
        let cors = Cors::default()
            .allowed_origin_fn(move |origin, _req_head| {
                let origins: Vec<&str> = cors_origins_inner.split(',').collect();
                if let Ok(origin_str) = origin.to_str() {
                    origins.iter().any(|o| o.trim() == origin_str)
                } else {
                    false
                }
            })
            .allowed_methods(vec!["GET", "OPTIONS"])
            .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
            .max_age(3600);

        App::new()
            .app_data(directory.clone())
            .app_data(web::QueryConfig::default().error_handler(|err, _req| {
                let error_message = err.to_string();
                actix_web::error::InternalError::from_response(
                    err,
                    HttpResponse::BadRequest().json(serde_json::json!({
                        "error": "invalid_query",
                        "message": error_message
                    })),
                )
                .into()
            }))
            .wrap(cors)
            .wrap(tracing_actix_web::TracingLogger::default())
            .wrap(middleware::Compress::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_routes)
            // Root redirect to health
            .route(
                "/",
                web::get().to(|| async {
                    HttpResponse::Found()
                        .append_header(("Location", "/api/v1/health"))
                        .finish()
                }),
            )
    })
    .workers(workers)
    .bind(&bind_addr)?
    .run()
    .await
}
