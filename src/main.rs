use actix_web::{web, App, HttpServer};
use anyhow::Context;
use gstdesk::config::{Config, LogFormat};
use gstdesk::documents::DocumentService;
use gstdesk::middleware::cors;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("gstdesk={},actix_web=info", config.app.log_level).into()
    });
    let registry = tracing_subscriber::registry().with(filter);
    match config.app.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }

    config
        .validate()
        .context("Configuration validation failed")?;

    tracing::info!("Starting gstdesk GST calculation service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!(
        state_code = %config.company.state_code,
        gstin = config.company.gstin.as_deref().unwrap_or("unregistered"),
        "Company registration"
    );
    tracing::info!("Server binding to: {}", config.server.bind_address());

    let document_service = web::Data::new(DocumentService::new(config.company.state_code.clone()));
    let allowed_origins = config.server.cors_allowed_origins.clone();

    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(cors(&allowed_origins))
            .wrap(TracingLogger::default())
            .app_data(document_service.clone())
            .configure(gstdesk::configure_routes)
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await.context("Server terminated with an error")
}
