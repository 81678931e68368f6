//! Identity forwarded by the upstream gateway.
//!
//! The gateway terminates the session and forwards the authenticated user's
//! id and role; this process never validates credentials itself.
//! Authorization checks happen in GraphQL resolvers, not in middleware.

use crate::common::{UserId, UserRole};

#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: UserId,
    pub role: UserRole,
}

impl AuthUser {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}
