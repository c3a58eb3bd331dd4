use serde::{Deserialize, Serialize};

use crate::Labels;

/// A logical deployment unit as reported by the orchestration platform.
///
/// Services are read-only snapshots: the query layer never mutates them, and
/// a fresh collection is supplied for every render pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    /// Service name, unique within a stack.
    pub name: String,
    /// Metadata attached to the service.
    #[serde(default, skip_serializing_if = "Labels::is_empty")]
    pub labels: Labels,
}

impl Service {
    /// Create a service with the given name and labels.
    pub fn new<N>(name: N, labels: Labels) -> Self
    where
        N: Into<String>,
    {
        Self {
            name: name.into(),
            labels,
        }
    }
}
