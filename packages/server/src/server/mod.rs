//! HTTP server: axum app, GraphQL schema, routes, middleware.

pub mod app;
pub mod graphql;
pub mod middleware;
pub mod routes;
