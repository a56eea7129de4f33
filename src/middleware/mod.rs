//! Middleware Module
//!
//! This module contains the HTTP middleware for the backend server.
//!
//! - **`auth`** - bearer-token authentication for protected routes

pub mod auth;

pub use auth::{auth_middleware, AuthenticatedUser, AuthUser};
