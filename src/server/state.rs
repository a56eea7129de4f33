/**
 * Application State Management
 *
 * This module defines the application state structure and implements the
 * `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is the composition root's hand-off to the request path: the
 * user store and the session keys are constructed once at startup and
 * injected here; no module-level globals exist. Everything in the state is
 * cheap to clone (a pool handle and key material) and safe for
 * unrestricted concurrent read access.
 */

use axum::extract::FromRef;

use crate::auth::service::AuthService;
use crate::auth::sessions::SessionService;
use crate::auth::users::UserStore;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Orchestrates registration, login and profile access
    pub auth: AuthService,
    /// Issues and verifies bearer tokens; used directly by the
    /// authentication middleware
    pub sessions: SessionService,
}

impl AppState {
    /// Assemble the application state from its injected collaborators.
    pub fn new(store: UserStore, sessions: SessionService) -> Self {
        Self {
            auth: AuthService::new(store, sessions.clone()),
            sessions,
        }
    }
}

/// Allow handlers to extract the auth service with `State(AuthService)`.
impl FromRef<AppState> for AuthService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth.clone()
    }
}

/// Allow the middleware to extract the session service directly.
impl FromRef<AppState> for SessionService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.sessions.clone()
    }
}
