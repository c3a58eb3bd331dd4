use serde::{Deserialize, Serialize};

use crate::{Container, Entity, EntityKind, Host, Service};

/// A homogeneous collection of entities of one concrete kind.
///
/// This is the closed polymorphic input type of every query operation: a
/// collection is always all-services, all-containers or all-hosts, so the
/// kind is dispatched once per call instead of per element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Collection {
    Services(Vec<Service>),
    Containers(Vec<Container>),
    Hosts(Vec<Host>),
}

impl Collection {
    /// The concrete kind of the elements.
    pub fn kind(&self) -> EntityKind {
        match self {
            Collection::Services(_) => EntityKind::Service,
            Collection::Containers(_) => EntityKind::Container,
            Collection::Hosts(_) => EntityKind::Host,
        }
    }

    /// Number of entities in the collection.
    pub fn len(&self) -> usize {
        match self {
            Collection::Services(xs) => xs.len(),
            Collection::Containers(xs) => xs.len(),
            Collection::Hosts(xs) => xs.len(),
        }
    }

    /// Returns `true` if the collection holds no entities.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// An empty collection of the same kind as `self`.
    pub fn empty_like(&self) -> Collection {
        match self {
            Collection::Services(_) => Collection::Services(Vec::new()),
            Collection::Containers(_) => Collection::Containers(Vec::new()),
            Collection::Hosts(_) => Collection::Hosts(Vec::new()),
        }
    }

    /// Iterate over the elements as tagged [`Entity`] values, in input order.
    ///
    /// Elements are cloned: collections are small per-render snapshots and
    /// the template layer consumes owned values.
    pub fn iter(&self) -> Box<dyn Iterator<Item = Entity> + '_> {
        match self {
            Collection::Services(xs) => Box::new(xs.iter().cloned().map(Entity::Service)),
            Collection::Containers(xs) => Box::new(xs.iter().cloned().map(Entity::Container)),
            Collection::Hosts(xs) => Box::new(xs.iter().cloned().map(Entity::Host)),
        }
    }

    /// The first element, if any.
    pub fn first(&self) -> Option<Entity> {
        self.iter().next()
    }
}

impl From<Vec<Service>> for Collection {
    fn from(xs: Vec<Service>) -> Self {
        Collection::Services(xs)
    }
}

impl From<Vec<Container>> for Collection {
    fn from(xs: Vec<Container>) -> Self {
        Collection::Containers(xs)
    }
}

impl From<Vec<Host>> for Collection {
    fn from(xs: Vec<Host>) -> Self {
        Collection::Hosts(xs)
    }
}

#[cfg(test)]
mod tests {
    use super::Collection;
    use crate::{Entity, EntityKind, Labels, Service};

    fn services() -> Collection {
        Collection::Services(vec![
            Service::new("web", Labels::new()),
            Service::new("db", Labels::new()),
        ])
    }

    #[test]
    fn kind_and_len() {
        let coll = services();
        assert_eq!(coll.kind(), EntityKind::Service);
        assert_eq!(coll.len(), 2);
        assert!(!coll.is_empty());
    }

    #[test]
    fn empty_like_preserves_kind() {
        let empty = services().empty_like();
        assert_eq!(empty.kind(), EntityKind::Service);
        assert!(empty.is_empty());
    }

    #[test]
    fn iter_preserves_input_order() {
        let names: Vec<String> = services()
            .iter()
            .map(|e| match e {
                Entity::Service(s) => s.name,
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(names, vec!["web", "db"]);
    }
}
