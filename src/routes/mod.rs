//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs        - Module exports and documentation
//! ├── router.rs     - Main router creation
//! └── api_routes.rs - API endpoint wiring
//! ```
//!
//! # Routes
//!
//! - `POST /api/auth/register` - user registration
//! - `POST /api/auth/login` - user login
//! - `GET /api/auth/profile` - fetch current user
//! - `PUT /api/auth/profile` - update current user
//! - `GET /api/health` - health check

/// Main router creation
pub mod router;

/// API endpoint wiring
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
