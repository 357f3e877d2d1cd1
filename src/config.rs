use anyhow::{bail, Context};
use serde::Deserialize;

/// Settings for token signing and the session cookie.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    pub token_secret: String,
    pub cookie_secure: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub frontend_origin: String,
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Load configuration from the environment.
    ///
    /// There is deliberately no default for `TOKEN_SECRET`: running with a
    /// missing or blank signing secret is a startup failure, never a
    /// fallback.
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL is required")?;
        let token_secret = std::env::var("TOKEN_SECRET").context("TOKEN_SECRET is required")?;
        check_secret(&token_secret)?;

        let environment = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let frontend_origin =
            std::env::var("FRONTEND_ORIGIN").unwrap_or_else(|_| "http://localhost:3000".into());

        Ok(Self {
            database_url,
            frontend_origin,
            auth: AuthConfig {
                token_secret,
                // Cookies travel only over encrypted transport in
                // production; one flag serves register and login alike.
                cookie_secure: environment == "production",
            },
        })
    }
}

fn check_secret(secret: &str) -> anyhow::Result<()> {
    if secret.trim().is_empty() {
        bail!("TOKEN_SECRET must not be blank");
    }
    Ok(())
}
