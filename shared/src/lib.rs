pub mod config;
pub mod cors;

use std::sync::Arc;

use catalog_atoms::DocumentStore;

pub use config::Config;
pub use cors::OriginGate;

/// Process-lifetime state handed to every request.
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub origin_gate: OriginGate,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            origin_gate: OriginGate::default(),
        }
    }

    pub fn with_origin_gate(mut self, origin_gate: OriginGate) -> Self {
        self.origin_gate = origin_gate;
        self
    }
}
