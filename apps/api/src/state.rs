use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The analysis parser keeps no state of its own; only configuration is shared.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}
