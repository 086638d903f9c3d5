//! Docqet landing site.
//!
//! Server-rendered marketing page for Docqet, secure document sharing with AI.
//!
//! # Architecture
//!
//! - **UI**: Leptos SSR components; a root layout carrying shared head
//!   metadata wraps every page
//! - **Server**: Axum router serving the rendered pages, the stylesheet and
//!   a liveness endpoint
//! - **Export**: writes the same pages to disk for static hosting
//!
//! # Modules
//!
//! - [`ui`]: Page components, layout and metadata
//! - [`render`]: HTML render entry points
//! - [`server`]: HTTP routing and server bootstrap
//! - [`export`]: Static site export
//! - [`config`]: Layered configuration

pub mod config;
pub mod error;
pub mod export;
pub mod render;
pub mod server;
pub mod telemetry;
pub mod ui;

use std::sync::Arc;

use crate::config::AppConfig;

/// Application state shared across all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Global Configuration
    pub config: Arc<AppConfig>,
}
