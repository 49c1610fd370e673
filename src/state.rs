//! Application state shared across handlers

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;

use crate::{
    repositories::{CatalogRepository, UserRepository},
    session::SessionStore,
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub user_repository: UserRepository,
    pub catalog_repository: CatalogRepository,
    pub sessions: SessionStore,
    pub cookie_key: Key,
}

// Lets SignedCookieJar pull its signing key out of the shared state.
impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Key {
        state.cookie_key.clone()
    }
}
