//! Host navigation callback

use crate::domain::value_objects::Destination;

/// Navigation owned by the host UI
///
/// Flows call this synchronously on terminal success or explicit back
/// navigation and never hold internal locks while doing so.
pub trait Navigator: Send + Sync {
    fn navigate_to(&self, destination: Destination);
}
