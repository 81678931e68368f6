//! Identity extraction.
//!
//! The upstream gateway terminates the session and forwards the verified
//! identity as headers (`x-user-id`, `x-user-role`). This middleware only
//! lifts those into an [`AuthUser`] extension; it never blocks a request.
//! Authorization checks happen in GraphQL resolvers.

use axum::{extract::Request, middleware::Next, response::Response};

use crate::common::{AuthUser, UserId, UserRole};

pub async fn session_auth_middleware(mut request: Request, next: Next) -> Response {
    if let Some(user) = extract_auth_user(&request) {
        request.extensions_mut().insert(user);
    }

    next.run(request).await
}

fn extract_auth_user(request: &Request) -> Option<AuthUser> {
    let user_id = request
        .headers()
        .get("x-user-id")?
        .to_str()
        .ok()
        .and_then(|raw| UserId::parse(raw).ok())?;

    let role = request
        .headers()
        .get("x-user-role")
        .and_then(|value| value.to_str().ok())
        .and_then(|raw| raw.parse::<UserRole>().ok())
        .unwrap_or(UserRole::Guest);

    Some(AuthUser { user_id, role })
}
