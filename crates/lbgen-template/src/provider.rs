use thiserror::Error;
use uuid::Uuid;

use lbgen_model::{Container, Host, Service};

/// Failure of the metadata backend itself.
///
/// "Not found" is not an error at this boundary: lookups return `Option` /
/// empty collections so templates can degrade to an empty result instead of
/// aborting the render.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("metadata backend error: {0}")]
    Backend(String),
}

/// Source of entity snapshots for one render pass.
///
/// Implemented by the orchestration-platform client; the query layer only
/// reads through this trait and never retains the returned collections
/// beyond the call.
pub trait MetadataProvider: Send + Sync {
    /// Look up one service by name. `None` when the service does not exist.
    fn service(&self, name: &str) -> Result<Option<Service>, ProviderError>;

    /// All services in the stack.
    fn services(&self) -> Result<Vec<Service>, ProviderError>;

    /// All containers, including standalone ones.
    fn containers(&self) -> Result<Vec<Container>, ProviderError>;

    /// Look up one host by platform UUID. `None` when unknown.
    fn host(&self, uuid: &Uuid) -> Result<Option<Host>, ProviderError>;

    /// All hosts.
    fn hosts(&self) -> Result<Vec<Host>, ProviderError>;
}

/// In-memory snapshot provider, used by tests and demos.
#[derive(Default, Debug, Clone)]
pub struct StaticProvider {
    services: Vec<Service>,
    containers: Vec<Container>,
    hosts: Vec<Host>,
}

impl StaticProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_services(mut self, services: Vec<Service>) -> Self {
        self.services = services;
        self
    }

    pub fn with_containers(mut self, containers: Vec<Container>) -> Self {
        self.containers = containers;
        self
    }

    pub fn with_hosts(mut self, hosts: Vec<Host>) -> Self {
        self.hosts = hosts;
        self
    }
}

impl MetadataProvider for StaticProvider {
    fn service(&self, name: &str) -> Result<Option<Service>, ProviderError> {
        Ok(self.services.iter().find(|s| s.name == name).cloned())
    }

    fn services(&self) -> Result<Vec<Service>, ProviderError> {
        Ok(self.services.clone())
    }

    fn containers(&self) -> Result<Vec<Container>, ProviderError> {
        Ok(self.containers.clone())
    }

    fn host(&self, uuid: &Uuid) -> Result<Option<Host>, ProviderError> {
        Ok(self.hosts.iter().find(|h| h.uuid == *uuid).cloned())
    }

    fn hosts(&self) -> Result<Vec<Host>, ProviderError> {
        Ok(self.hosts.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::{MetadataProvider, StaticProvider};
    use lbgen_model::{Labels, Service};
    use uuid::Uuid;

    #[test]
    fn missing_service_is_none_not_error() {
        let provider = StaticProvider::new();
        assert!(provider.service("ghost").unwrap().is_none());
    }

    #[test]
    fn lookup_finds_seeded_service() {
        let provider =
            StaticProvider::new().with_services(vec![Service::new("web", Labels::new())]);
        let svc = provider.service("web").unwrap().unwrap();
        assert_eq!(svc.name, "web");
    }

    #[test]
    fn missing_host_is_none_not_error() {
        let provider = StaticProvider::new();
        assert!(provider.host(&Uuid::new_v4()).unwrap().is_none());
    }
}
