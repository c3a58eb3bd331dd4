use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Labels;

/// A physical or virtual node running containers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Host {
    /// Platform-assigned identifier.
    pub uuid: Uuid,
    /// Metadata attached to the host.
    #[serde(default, skip_serializing_if = "Labels::is_empty")]
    pub labels: Labels,
}

impl Host {
    /// Create a host with the given identifier and labels.
    pub fn new(uuid: Uuid, labels: Labels) -> Self {
        Self { uuid, labels }
    }
}

#[cfg(test)]
mod tests {
    use super::Host;
    use uuid::Uuid;

    #[test]
    fn serde_roundtrip() {
        let host = Host::new(Uuid::new_v4(), [("rack", "r1")].into_iter().collect());
        let json = serde_json::to_string(&host).unwrap();
        let back: Host = serde_json::from_str(&json).unwrap();
        assert_eq!(back, host);
    }
}
