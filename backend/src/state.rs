//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction. The calculator is
//! stateless, so the state only carries configuration.

use crate::config::AppConfig;
use macrotrack_shared::TagPolicy;
use std::sync::Arc;

/// Shared application state
///
/// `config` is wrapped in Arc, cloning is O(1).
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Tag policy for resolving request inputs
    #[inline]
    pub fn tag_policy(&self) -> TagPolicy {
        self.config.api.tag_policy()
    }
}
