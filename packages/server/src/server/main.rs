// Main entry point for the Holibay API server

use std::sync::Arc;

use anyhow::{Context, Result};
use server_core::common::Config;
use server_core::kernel::scheduled_tasks::start_scheduler;
use server_core::server::app::{build_app, build_deps, build_engine, AxumAppState};
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Holibay marketplace API");

    dotenvy::dotenv().ok();
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Migrations complete");

    // Wire dependencies, engine, and the notification tick
    let server_deps = build_deps(pool.clone(), &config);
    let engine = Arc::new(build_engine(server_deps.clone()));

    let _scheduler = start_scheduler(pool.clone(), server_deps.stream_hub.clone())
        .await
        .context("Failed to start scheduled tasks")?;

    let state = AxumAppState {
        db_pool: pool,
        engine,
        server_deps: Arc::new(server_deps),
    };
    let app = build_app(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("GraphQL playground: http://localhost:{}/graphql", config.port);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
