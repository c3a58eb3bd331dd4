//! Predicate-based filtering of a collection by one label.
//!
//! The algorithm is written once, generically, against a label test of shape
//! `Fn(Option<&str>) -> bool`; the three public selectors (exists / equals /
//! matches) are concrete predicates over the same filter.

use regex::Regex;

use lbgen_model::{Collection, Labeled};

use crate::error::{QueryError, QueryResult};

/// Filter a collection down to entities whose label satisfies `test`.
///
/// `test` receives the label value if the key is present (`Some("")` for a
/// present-but-empty value) and `None` otherwise. Relative input order is
/// preserved.
pub fn where_label<F>(label: &str, test: F, coll: &Collection) -> QueryResult<Collection>
where
    F: Fn(Option<&str>) -> bool,
{
    if label.is_empty() {
        return Err(QueryError::EmptyLabelKey);
    }

    Ok(match coll {
        Collection::Services(xs) => Collection::Services(keep(xs, label, &test)),
        Collection::Containers(xs) => Collection::Containers(keep(xs, label, &test)),
        Collection::Hosts(xs) => Collection::Hosts(keep(xs, label, &test)),
    })
}

fn keep<T, F>(items: &[T], label: &str, test: &F) -> Vec<T>
where
    T: Labeled + Clone,
    F: Fn(Option<&str>) -> bool,
{
    items
        .iter()
        .filter(|item| test(item.labels().get(label)))
        .cloned()
        .collect()
}

/// Entities that have the label key present, regardless of value.
pub fn where_label_exists(label: &str, coll: &Collection) -> QueryResult<Collection> {
    where_label(label, |value| value.is_some(), coll)
}

/// Entities whose label value case-insensitively equals `target`.
pub fn where_label_equals(label: &str, target: &str, coll: &Collection) -> QueryResult<Collection> {
    let want = target.to_lowercase();
    where_label(
        label,
        |value| value.is_some_and(|v| v.to_lowercase() == want),
        coll,
    )
}

/// Entities whose label value matches the regex `pattern`.
///
/// An invalid pattern fails before any entity is visited.
pub fn where_label_matches(
    label: &str,
    pattern: &str,
    coll: &Collection,
) -> QueryResult<Collection> {
    let rx = Regex::new(pattern)?;
    where_label(label, |value| value.is_some_and(|v| rx.is_match(v)), coll)
}
