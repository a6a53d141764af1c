use crate::gazetteer::Gazetteer;

/// Shared server state. The gazetteer is read-only after startup, so
/// handlers share it without locking.
pub struct AppState {
    pub gazetteer: Gazetteer,
}
