//! Schema changes as reported by the diff engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a change affects existing consumers of the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Criticality {
    /// Existing operations stop working
    Breaking,
    /// Existing operations keep working but may behave differently
    Dangerous,
    /// Additive, no impact on existing operations
    Safe,
}

impl Criticality {
    /// Section heading used in summaries
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Breaking => "Breaking",
            Self::Dangerous => "Dangerous",
            Self::Safe => "Safe",
        }
    }
}

impl fmt::Display for Criticality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single detected schema change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Change {
    /// Impact level
    pub criticality: Criticality,
    /// Human-readable description
    pub message: String,
    /// Dotted schema coordinate, e.g. `Query.user.id`
    pub path: String,
}

impl Change {
    /// Create a new change.
    #[must_use]
    pub fn new(criticality: Criticality, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            criticality,
            message: message.into(),
            path: path.into(),
        }
    }

    /// Whether this change breaks consumers
    #[must_use]
    pub fn is_breaking(&self) -> bool {
        self.criticality == Criticality::Breaking
    }
}
