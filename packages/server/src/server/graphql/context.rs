//! GraphQL request context
//!
//! Shared resources plus the per-request identity extracted by the auth
//! middleware. Authorization checks happen in resolvers via `require_*`.

use std::sync::Arc;

use juniper::{FieldError, FieldResult};
use ripple::Engine;
use sqlx::PgPool;

use crate::common::AuthUser;
use crate::kernel::ServerDeps;

#[derive(Clone)]
pub struct GraphQLContext {
    pub db_pool: PgPool,
    pub engine: Arc<Engine<ServerDeps>>,
    deps: Arc<ServerDeps>,
    pub auth_user: Option<AuthUser>,
}

impl juniper::Context for GraphQLContext {}

impl GraphQLContext {
    pub fn new(
        db_pool: PgPool,
        engine: Arc<Engine<ServerDeps>>,
        deps: Arc<ServerDeps>,
        auth_user: Option<AuthUser>,
    ) -> Self {
        Self {
            db_pool,
            engine,
            deps,
            auth_user,
        }
    }

    pub fn deps(&self) -> &ServerDeps {
        &self.deps
    }

    /// The calling user, or an authentication error.
    pub fn require_user(&self) -> FieldResult<&AuthUser> {
        self.auth_user
            .as_ref()
            .ok_or_else(|| FieldError::new("Authentication required", juniper::Value::null()))
    }

    /// The calling user if they are an admin, or an authorization error.
    pub fn require_admin(&self) -> FieldResult<&AuthUser> {
        let user = self.require_user()?;
        if !user.is_admin() {
            return Err(FieldError::new(
                "Admin authorization required",
                juniper::Value::null(),
            ));
        }
        Ok(user)
    }
}
