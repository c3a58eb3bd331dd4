use serde::{Deserialize, Serialize};

use crate::Labels;

/// One running instance of a service.
///
/// Containers are identified by the orchestration platform; the snapshot only
/// carries the name of the owning service, which is empty for standalone
/// containers started outside any service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    /// Name of the owning service, empty for standalone containers.
    #[serde(default)]
    pub service: String,
    /// Metadata attached to the container.
    #[serde(default, skip_serializing_if = "Labels::is_empty")]
    pub labels: Labels,
}

impl Container {
    /// Create a container owned by the given service.
    pub fn new<S>(service: S, labels: Labels) -> Self
    where
        S: Into<String>,
    {
        Self {
            service: service.into(),
            labels,
        }
    }

    /// Create a container with no owning service.
    pub fn standalone(labels: Labels) -> Self {
        Self {
            service: String::new(),
            labels,
        }
    }

    /// Returns `true` if the container does not belong to a service.
    pub fn is_standalone(&self) -> bool {
        self.service.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::Container;
    use crate::Labels;

    #[test]
    fn standalone_has_empty_service() {
        let c = Container::standalone(Labels::new());
        assert!(c.is_standalone());
        assert_eq!(c.service, "");
    }

    #[test]
    fn owned_container_is_not_standalone() {
        let c = Container::new("web", Labels::new());
        assert!(!c.is_standalone());
    }

    #[test]
    fn missing_service_deserializes_as_standalone() {
        let c: Container = serde_json::from_str(r#"{"labels":{"a":"1"}}"#).unwrap();
        assert!(c.is_standalone());
        assert_eq!(c.labels.get("a"), Some("1"));
    }
}
