//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::{Extension, Request},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use courier::{CourierOptions, CourierService};
use ripple::Engine;
use sqlx::PgPool;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::common::{AuthUser, Config};
use crate::kernel::{
    BucketStorageClient, CourierAdapter, PgNotificationSink, ServerDeps, StreamHub,
};
use crate::server::graphql::{create_schema, GraphQLContext};
use crate::server::middleware::session_auth_middleware;
use crate::server::routes::{
    graphql_batch_handler, graphql_handler, graphql_playground, health_handler, stream_handler,
};

// Import effect builder functions from each domain
use crate::domains::notifications::effects::{
    booking_notification_effect, property_notification_effect, service_notification_effect,
};

/// Shared application state
#[derive(Clone)]
pub struct AxumAppState {
    pub db_pool: PgPool,
    pub engine: Arc<Engine<ServerDeps>>,
    pub server_deps: Arc<ServerDeps>,
}

/// Assemble production dependencies from config.
pub fn build_deps(pool: PgPool, config: &Config) -> ServerDeps {
    let courier = Arc::new(CourierService::new(CourierOptions {
        api_key: config.courier_api_key.clone(),
        base_url: config.courier_base_url.clone(),
        from: config.email_from.clone(),
    }));

    ServerDeps::new(
        pool.clone(),
        Arc::new(PgNotificationSink::new(pool)),
        Arc::new(CourierAdapter::new(courier)),
        Arc::new(BucketStorageClient::new(
            config.storage_endpoint.clone(),
            config.storage_api_key.clone(),
        )),
        StreamHub::new(),
        config.app_base_url.clone(),
    )
}

/// Build the ripple engine with all domain effects
pub fn build_engine(server_deps: ServerDeps) -> Engine<ServerDeps> {
    Engine::with_deps(server_deps)
        .effect(property_notification_effect())
        .effect(service_notification_effect())
        .effect(booking_notification_effect())
}

/// Middleware to create GraphQLContext per-request
async fn create_graphql_context(
    Extension(state): Extension<AxumAppState>,
    mut request: Request,
    next: Next,
) -> Response {
    // Auth user is populated by session_auth_middleware further out
    let auth_user = request.extensions().get::<AuthUser>().cloned();

    let context = GraphQLContext::new(
        state.db_pool.clone(),
        state.engine.clone(),
        state.server_deps.clone(),
        auth_user,
    );

    request.extensions_mut().insert(context);

    next.run(request).await
}

/// Build the router around prepared state.
pub fn build_app(state: AxumAppState) -> Router {
    let schema = Arc::new(create_schema());

    Router::new()
        .route("/health", get(health_handler))
        .route("/graphql", get(graphql_playground).post(graphql_handler))
        .route("/graphql/batch", post(graphql_batch_handler))
        .route("/streams/:topic", get(stream_handler))
        .with_state(schema)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(Extension(state))
                .layer(middleware::from_fn(session_auth_middleware))
                .layer(middleware::from_fn(create_graphql_context)),
        )
}
