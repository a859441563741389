use crate::registry::ActivityRegistry;

/// Shared handler state. Cloning is cheap; the registry is reference counted.
#[derive(Debug, Clone)]
pub struct AppState {
    pub registry: ActivityRegistry,
}

impl AppState {
    pub fn new(registry: ActivityRegistry) -> Self {
        Self { registry }
    }
}
