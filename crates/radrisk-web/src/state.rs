//! Shared application state for the web server.

use minijinja::Environment;
use radrisk_config::Config;
use std::sync::Arc;

use crate::callbacks::{default_registry, CallbackRegistry};

pub const INDEX_TEMPLATE: &str = "index.html";

/// Shared state injected into every Axum handler. Immutable after startup.
pub struct AppState {
    pub config: Config,
    pub templates: Environment<'static>,
    pub callbacks: CallbackRegistry,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, minijinja::Error> {
        let mut templates = Environment::new();
        templates.add_template(INDEX_TEMPLATE, include_str!("../templates/index.html"))?;

        Ok(Self {
            config,
            templates,
            callbacks: default_registry(),
        })
    }
}

pub type SharedState = Arc<AppState>;
