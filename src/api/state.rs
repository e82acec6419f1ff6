//! Application state for the quotation engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::ConfigLoader;
use crate::session::QuoteSession;

/// Shared application state.
///
/// Holds the single interactive quotation session behind a lock. The lock
/// exists only to satisfy the shared-state requirements of the server
/// runtime; input arrives serially from one user-driven form at a time.
#[derive(Clone)]
pub struct AppState {
    session: Arc<RwLock<QuoteSession>>,
}

impl AppState {
    /// Creates a new application state from the given configuration loader.
    ///
    /// The session starts empty, with the configured default markup rates.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            session: Arc::new(RwLock::new(QuoteSession::new(config.config().clone()))),
        }
    }

    /// Returns a handle to the quotation session.
    pub fn session(&self) -> &Arc<RwLock<QuoteSession>> {
        &self.session
    }
}
