//! EdForge - Authentication Backend
//!
//! EdForge is a minimal authentication backend for a web front end: user
//! registration, login and profile read/update, backed by a single
//! relational table and stateless JWT bearer tokens.
//!
//! # Module Structure
//!
//! - **`auth`** - the authentication core: password hashing, token
//!   issuance/verification, the user store and the orchestrating service
//! - **`error`** - the error taxonomy and its HTTP rendering
//! - **`middleware`** - bearer-token authentication for protected routes
//! - **`routes`** - route wiring and router assembly
//! - **`server`** - configuration, application state and startup
//!
//! # Security
//!
//! - Passwords are stored only as bcrypt hashes
//! - Tokens are HS256 JWTs signed with a secret injected at startup,
//!   expiring after 30 days; there is no revocation list, so rotating the
//!   secret invalidates every outstanding token
//! - Login failures are indistinguishable between "unknown email" and
//!   "wrong password"
//!
//! # Usage
//!
//! ```rust,no_run
//! use edforge::server::config::ServerConfig;
//! use edforge::server::init::create_app;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! // Serve `app` with axum
//! # Ok(())
//! # }
//! ```

/// Authentication core
pub mod auth;

/// Error taxonomy and HTTP rendering
pub mod error;

/// HTTP middleware
pub mod middleware;

/// Route configuration
pub mod routes;

/// Server configuration, state and startup
pub mod server;
