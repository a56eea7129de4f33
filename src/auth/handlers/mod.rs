//! Authentication Handlers Module
//!
//! This module contains the HTTP handlers for the authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Handler exports
//! ├── types.rs    - Request and response types
//! ├── register.rs - User registration handler
//! ├── login.rs    - User authentication handler
//! └── profile.rs  - Profile fetch and update handlers
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /api/auth/register
//! - **`login`** - POST /api/auth/login
//! - **`get_profile`** - GET /api/auth/profile (requires bearer token)
//! - **`update_profile`** - PUT /api/auth/profile (requires bearer token)

/// Request and response types
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Profile fetch and update handlers
pub mod profile;

// Re-export commonly used types
pub use types::{
    AuthResponse, LoginRequest, ProfileResponse, RegisterRequest, UpdateProfileRequest,
    UpdateProfileResponse, UserView,
};

// Re-export handlers
pub use login::login;
pub use profile::{get_profile, update_profile};
pub use register::register;
