//! Grouping of entities by label-derived keys.
//!
//! Keys come out in sorted order ([`BTreeMap`]) and every group keeps its
//! entities in encounter order, so rendered output is reproducible across
//! runs with identical input. An entity whose label value splits into several
//! items appears under every resulting key.

use std::collections::BTreeMap;

use tracing::trace;

use lbgen_model::{Collection, Container, Host, Labeled, Service, ServiceScoped};

/// Mapping from a derived label key to the entities that produced it.
pub type GroupMap = BTreeMap<String, Collection>;

/// Group entities by the raw value of `label`.
///
/// Entities lacking the label, or carrying it with an empty value, are
/// skipped. Never fails.
pub fn group_by_label(label: &str, coll: &Collection) -> GroupMap {
    dispatch(coll, label, None, |_| true)
}

/// Group entities by each item of the label value split by `sep`.
pub fn group_by_multi(label: &str, sep: &str, coll: &Collection) -> GroupMap {
    dispatch(coll, label, Some(sep), |_| true)
}

/// As [`group_by_multi`], restricted to services named `filter` and
/// containers owned by `filter`.
///
/// Hosts carry no service name and are never filtered. Useful for treating
/// standalone containers (empty owning-service name) as their own group by
/// passing an empty filter.
pub fn group_by_multi_filter(filter: &str, label: &str, sep: &str, coll: &Collection) -> GroupMap {
    dispatch(coll, label, Some(sep), |scope| scope == filter)
}

// `scoped` is applied to the service name of services and containers; hosts
// are admitted unconditionally.
fn dispatch(
    coll: &Collection,
    label: &str,
    sep: Option<&str>,
    scoped: impl Fn(&str) -> bool,
) -> GroupMap {
    let groups = match coll {
        Collection::Services(xs) => wrap(
            group_items(xs, label, sep, |s: &Service| scoped(s.service_name())),
            Collection::Services,
        ),
        Collection::Containers(xs) => wrap(
            group_items(xs, label, sep, |c: &Container| scoped(c.service_name())),
            Collection::Containers,
        ),
        Collection::Hosts(xs) => wrap(
            group_items(xs, label, sep, |_: &Host| true),
            Collection::Hosts,
        ),
    };
    trace!(label, groups = groups.len(), "grouped collection");
    groups
}

fn group_items<T>(
    items: &[T],
    label: &str,
    sep: Option<&str>,
    include: impl Fn(&T) -> bool,
) -> BTreeMap<String, Vec<T>>
where
    T: Labeled + Clone,
{
    let mut groups: BTreeMap<String, Vec<T>> = BTreeMap::new();
    for item in items {
        if !include(item) {
            continue;
        }
        let Some(value) = item.labels().get(label) else {
            continue;
        };
        if value.is_empty() {
            continue;
        }
        match sep {
            Some(sep) => {
                for key in value.split(sep) {
                    groups.entry(key.to_string()).or_default().push(item.clone());
                }
            }
            None => groups.entry(value.to_string()).or_default().push(item.clone()),
        }
    }
    groups
}

fn wrap<T>(groups: BTreeMap<String, Vec<T>>, ctor: fn(Vec<T>) -> Collection) -> GroupMap {
    groups.into_iter().map(|(key, items)| (key, ctor(items))).collect()
}
