//! Authentication Module
//!
//! This module implements the authentication and session-identity core of
//! the backend: password handling, token issuance and verification, the
//! user store, and the service that orchestrates them.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs         - Module exports and documentation
//! ├── credentials.rs - Password hashing and verification
//! ├── sessions.rs    - JWT token issuance and verification
//! ├── users.rs       - User model and store
//! ├── service.rs     - Registration/login/profile orchestration
//! └── handlers/      - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: validate fields, hash the password, create the user,
//!    return a JWT token plus the public user view
//! 2. **Login**: look up by email, verify the password, return a token
//! 3. **Profile**: verify the bearer token, load the user, return or
//!    update the public view
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage
//! - Tokens are stateless JWTs, expiring after 30 days
//! - Invalid credentials return one indistinguishable error
//! - The public user view never includes the password hash

/// Password hashing and verification
pub mod credentials;

/// JWT token issuance and verification
pub mod sessions;

/// User model and store
pub mod users;

/// Registration, login and profile orchestration
pub mod service;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{AuthResponse, LoginRequest, RegisterRequest, UserView};
pub use handlers::{get_profile, login, register, update_profile};
pub use service::AuthService;
pub use sessions::SessionService;
pub use users::{User, UserStore, UserType};
