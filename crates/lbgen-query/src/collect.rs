//! Collection of every split label value across a set of entities.

use lbgen_model::{Collection, Container, Labeled, Service, ServiceScoped};

/// Sentinel filter meaning "match every entity regardless of service name".
pub const WILDCARD: &str = "*";

/// Every item of `label`'s value, split by `sep`, across matching entities.
///
/// A `filter` of [`WILDCARD`] matches everything; any other value restricts
/// services and containers to those named by / owned by `filter`. Hosts are
/// never name-filtered. Each matching entity contributes its split items in
/// split order, entities in input order; entities lacking the label or
/// carrying an empty value contribute nothing. Duplicates are kept.
pub fn all_label_values(filter: &str, label: &str, sep: &str, coll: &Collection) -> Vec<String> {
    match coll {
        Collection::Services(xs) => collect_items(xs, label, sep, |s: &Service| {
            filter == WILDCARD || s.service_name() == filter
        }),
        Collection::Containers(xs) => collect_items(xs, label, sep, |c: &Container| {
            filter == WILDCARD || c.service_name() == filter
        }),
        Collection::Hosts(xs) => collect_items(xs, label, sep, |_| true),
    }
}

fn collect_items<T>(
    items: &[T],
    label: &str,
    sep: &str,
    matches: impl Fn(&T) -> bool,
) -> Vec<String>
where
    T: Labeled,
{
    let mut out = Vec::new();
    for item in items {
        if !matches(item) {
            continue;
        }
        let Some(value) = item.labels().get(label) else {
            continue;
        };
        if value.is_empty() {
            continue;
        }
        out.extend(value.split(sep).map(str::to_string));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use lbgen_model::{Container, Host, Labels, Service};
    use uuid::Uuid;

    fn services() -> Collection {
        Collection::Services(vec![
            Service::new("web", [("vhost", "a.com,b.com")].into_iter().collect()),
            Service::new("db", [("vhost", "c.com")].into_iter().collect()),
            Service::new("cache", Labels::new()),
        ])
    }

    #[test]
    fn wildcard_collects_from_every_entity() {
        let values = all_label_values("*", "vhost", ",", &services());
        assert_eq!(values, vec!["a.com", "b.com", "c.com"]);
    }

    #[test]
    fn named_filter_restricts_to_one_service() {
        let values = all_label_values("web", "vhost", ",", &services());
        assert_eq!(values, vec!["a.com", "b.com"]);
    }

    #[test]
    fn filter_applies_to_owning_service_for_containers() {
        let coll = Collection::Containers(vec![
            Container::new("web", [("port", "80,443")].into_iter().collect()),
            Container::new("db", [("port", "5432")].into_iter().collect()),
        ]);
        let values = all_label_values("web", "port", ",", &coll);
        assert_eq!(values, vec!["80", "443"]);
    }

    #[test]
    fn hosts_ignore_the_filter() {
        let hosts = Collection::Hosts(vec![Host::new(
            Uuid::new_v4(),
            [("zone", "eu,us")].into_iter().collect(),
        )]);
        let values = all_label_values("no-such-service", "zone", ",", &hosts);
        assert_eq!(values, vec!["eu", "us"]);
    }

    #[test]
    fn duplicates_across_entities_are_kept() {
        let coll = Collection::Services(vec![
            Service::new("a", [("vhost", "x.com")].into_iter().collect()),
            Service::new("b", [("vhost", "x.com")].into_iter().collect()),
        ]);
        let values = all_label_values("*", "vhost", ",", &coll);
        assert_eq!(values, vec!["x.com", "x.com"]);
    }

    #[test]
    fn empty_values_contribute_nothing() {
        let coll = Collection::Services(vec![Service::new(
            "a",
            [("vhost", "")].into_iter().collect(),
        )]);
        assert!(all_label_values("*", "vhost", ",", &coll).is_empty());
    }
}
