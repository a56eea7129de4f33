//! Error Module
//!
//! This module defines the error taxonomy for the authentication backend.
//! Every fallible operation in the crate funnels into [`AuthError`], which
//! knows its HTTP status code and the message that may cross the boundary
//! to a client.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definition and accessors
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Error Categories
//!
//! - `Validation` / `DuplicateEmail` - recoverable, user-correctable (400)
//! - `InvalidCredentials` - recoverable, deliberately indistinguishable
//!   from "user not found" (401)
//! - `MissingToken` / `TokenInvalid` / `TokenExpired` - recoverable by
//!   re-authenticating (401)
//! - `NotFound` - the resolved identity no longer exists (404)
//! - `Database` / `Hash` / `TokenSigning` - unexpected failures (500);
//!   only a generic message is returned to the client, the detail is logged

/// Error type definition
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::AuthError;
