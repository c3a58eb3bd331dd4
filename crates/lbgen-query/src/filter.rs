//! Selection of the entities belonging to one named service.

use lbgen_model::{Collection, EntityKind, ServiceScoped};

use crate::error::{QueryError, QueryResult};

/// Entities whose service name equals `service`, in input order.
///
/// Defined for services (matched on their own name) and containers (matched
/// on the owning service); hosts cannot be filtered by service and fail with
/// [`QueryError::UnsupportedOperation`].
pub fn by_service(service: &str, coll: &Collection) -> QueryResult<Collection> {
    match coll {
        Collection::Services(xs) => Ok(Collection::Services(keep_scoped(xs, service))),
        Collection::Containers(xs) => Ok(Collection::Containers(keep_scoped(xs, service))),
        Collection::Hosts(_) => Err(QueryError::UnsupportedOperation(EntityKind::Host)),
    }
}

fn keep_scoped<T>(items: &[T], service: &str) -> Vec<T>
where
    T: ServiceScoped + Clone,
{
    items
        .iter()
        .filter(|item| item.service_name() == service)
        .cloned()
        .collect()
}
