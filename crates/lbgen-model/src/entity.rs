use serde::{Deserialize, Serialize};

use crate::{Container, EntityKind, Host, Labels, Service};

/// Capability shared by every entity kind: access to its label map.
///
/// Query operations are written once against this trait (plus
/// [`ServiceScoped`] where name filtering applies) instead of repeating a
/// per-kind switch in every operation.
pub trait Labeled {
    /// The entity's label map.
    fn labels(&self) -> &Labels;
}

/// Capability of entities that belong to a named service.
///
/// Implemented by [`Service`] (its own name) and [`Container`] (the owning
/// service, empty for standalone containers). Hosts are never scoped to a
/// service and do not implement this.
pub trait ServiceScoped: Labeled {
    /// The service name this entity is filtered by.
    fn service_name(&self) -> &str;
}

impl Labeled for Service {
    fn labels(&self) -> &Labels {
        &self.labels
    }
}

impl Labeled for Container {
    fn labels(&self) -> &Labels {
        &self.labels
    }
}

impl Labeled for Host {
    fn labels(&self) -> &Labels {
        &self.labels
    }
}

impl ServiceScoped for Service {
    fn service_name(&self) -> &str {
        &self.name
    }
}

impl ServiceScoped for Container {
    fn service_name(&self) -> &str {
        &self.service
    }
}

/// A single queryable entity, tagged by kind.
///
/// Used where one element of a collection crosses the template boundary on
/// its own (e.g. the `first` helper).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum Entity {
    Service(Service),
    Container(Container),
    Host(Host),
}

impl Entity {
    /// The concrete kind of this entity.
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Service(_) => EntityKind::Service,
            Entity::Container(_) => EntityKind::Container,
            Entity::Host(_) => EntityKind::Host,
        }
    }

    /// The entity's label map.
    pub fn labels(&self) -> &Labels {
        match self {
            Entity::Service(s) => &s.labels,
            Entity::Container(c) => &c.labels,
            Entity::Host(h) => &h.labels,
        }
    }
}

impl From<Service> for Entity {
    fn from(s: Service) -> Self {
        Entity::Service(s)
    }
}

impl From<Container> for Entity {
    fn from(c: Container) -> Self {
        Entity::Container(c)
    }
}

impl From<Host> for Entity {
    fn from(h: Host) -> Self {
        Entity::Host(h)
    }
}

#[cfg(test)]
mod tests {
    use super::{Entity, Labeled, ServiceScoped};
    use crate::{Container, EntityKind, Labels, Service};

    #[test]
    fn service_is_scoped_to_its_own_name() {
        let svc = Service::new("web", Labels::new());
        assert_eq!(svc.service_name(), "web");
    }

    #[test]
    fn container_is_scoped_to_owning_service() {
        let c = Container::new("db", [("a", "1")].into_iter().collect());
        assert_eq!(c.service_name(), "db");
        assert_eq!(c.labels().get("a"), Some("1"));
    }

    #[test]
    fn entity_reports_concrete_kind() {
        let e: Entity = Service::new("web", Labels::new()).into();
        assert_eq!(e.kind(), EntityKind::Service);
    }
}
