//! Navigation targets handed to the host navigator

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the host should navigate when a flow finishes or is abandoned
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "route")]
pub enum Destination {
    /// Return to the previous screen
    Back,
    /// Continue to a named route
    Route(String),
}

impl Destination {
    /// Create a route destination
    pub fn route(name: impl Into<String>) -> Self {
        Destination::Route(name.into())
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Back => write!(f, "back"),
            Destination::Route(name) => write!(f, "route:{}", name),
        }
    }
}
