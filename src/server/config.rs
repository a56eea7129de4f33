/**
 * Server Configuration
 *
 * This module loads the server configuration from the environment once at
 * startup. The token-signing secret is required and has no default: it is
 * never compiled into the source, and a process without one refuses to
 * start. Rotating the secret invalidates all outstanding tokens.
 */

use thiserror::Error;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The signing secret is mandatory; there is no baked-in fallback.
    #[error("JWT_SECRET must be set")]
    MissingJwtSecret,
}

/// Process-wide server configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// SQLite database URL
    pub database_url: String,
    /// HS256 token-signing secret
    pub jwt_secret: String,
    /// TCP port to listen on
    pub port: u16,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// - `DATABASE_URL` - defaults to a local SQLite file
    /// - `JWT_SECRET` - required
    /// - `SERVER_PORT` - defaults to 3000
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| {
            tracing::warn!("DATABASE_URL not set, using local SQLite file");
            "sqlite:edforge.db?mode=rwc".to_string()
        });

        let jwt_secret = std::env::var("JWT_SECRET").map_err(|_| {
            tracing::error!("JWT_SECRET not set; refusing to start without a signing secret");
            ConfigError::MissingJwtSecret
        })?;

        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);

        Ok(Self {
            database_url,
            jwt_secret,
            port,
        })
    }
}
