//! Environment-driven configuration. Missing required vars fail at boot.

use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_url: String,

    /// Transactional email (courier).
    pub courier_api_key: String,
    pub courier_base_url: String,
    pub email_from: String,

    /// Object storage for listing images.
    pub storage_endpoint: String,
    pub storage_api_key: String,

    /// Base URL used when composing notification deep links.
    pub app_base_url: String,

    /// Emails granted admin role when identity headers carry no role claim.
    pub admin_emails: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .context("PORT must be a number")?;

        let courier_api_key =
            std::env::var("COURIER_API_KEY").context("COURIER_API_KEY must be set")?;
        let courier_base_url = std::env::var("COURIER_BASE_URL")
            .unwrap_or_else(|_| "https://api.courier.holibay.app".to_string());
        let email_from = std::env::var("EMAIL_FROM")
            .unwrap_or_else(|_| "Holibay <no-reply@holibay.app>".to_string());

        let storage_endpoint = std::env::var("STORAGE_ENDPOINT")
            .unwrap_or_else(|_| "https://storage.holibay.app".to_string());
        let storage_api_key =
            std::env::var("STORAGE_API_KEY").context("STORAGE_API_KEY must be set")?;

        let app_base_url = std::env::var("APP_BASE_URL")
            .unwrap_or_else(|_| "https://holibay.app".to_string());

        let admin_emails = std::env::var("ADMIN_EMAILS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            port,
            database_url,
            courier_api_key,
            courier_base_url,
            email_from,
            storage_endpoint,
            storage_api_key,
            app_base_url,
            admin_emails,
        })
    }
}
