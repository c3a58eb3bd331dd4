use std::fmt;

use serde::{Deserialize, Serialize};

/// The three queryable entity kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntityKind {
    Service,
    Container,
    Host,
}

impl EntityKind {
    /// Stable lowercase name, used in error messages and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Service => "service",
            EntityKind::Container => "container",
            EntityKind::Host => "host",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::EntityKind;

    #[test]
    fn display_uses_lowercase_names() {
        assert_eq!(EntityKind::Service.to_string(), "service");
        assert_eq!(EntityKind::Container.to_string(), "container");
        assert_eq!(EntityKind::Host.to_string(), "host");
    }
}
