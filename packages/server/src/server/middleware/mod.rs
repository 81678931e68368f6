pub mod session_auth;

pub use session_auth::session_auth_middleware;
