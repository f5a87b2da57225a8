//! Електрик 220В website.
//!
//! Server-rendered marketing site for an electrical-services business:
//! services, cost calculator, gallery, testimonials, blog, FAQ and the
//! quote request form.

use std::sync::Arc;

pub mod config;
pub mod content;
pub mod error;
pub mod pricing;
pub mod quote;
pub mod routes;

use config::Config;
use content::SiteContent;
use quote::QuoteRelay;

/// Shared, read-only application state
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<SiteContent>,
    pub relay: Arc<dyn QuoteRelay>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(content: SiteContent, relay: Arc<dyn QuoteRelay>, config: Config) -> Self {
        Self {
            content: Arc::new(content),
            relay,
            config: Arc::new(config),
        }
    }
}

pub use routes::{app, unavailable_app};
