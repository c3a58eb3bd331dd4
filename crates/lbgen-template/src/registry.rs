//! Fixed table mapping template function names to operations.
//!
//! The table is built once at startup and read-only afterwards. Names and
//! argument order are the boundary contract with existing templates and must
//! not change.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::instrument;

use crate::error::{TemplateError, TemplateResult};
use crate::funcs;
use crate::provider::MetadataProvider;
use crate::util;
use crate::value::Value;

type TemplateFn = Box<dyn Fn(&[Value]) -> TemplateResult + Send + Sync>;

/// Immutable registry of template functions.
pub struct Registry {
    funcs: BTreeMap<&'static str, TemplateFn>,
}

impl Registry {
    /// Registry with every provider-independent function.
    pub fn new() -> Self {
        let mut reg = Self {
            funcs: BTreeMap::new(),
        };

        // label-query surface
        reg.add("whereLabelExists", funcs::where_label_exists);
        reg.add("whereLabelEquals", funcs::where_label_equals);
        reg.add("whereLabelMatches", funcs::where_label_matches);
        reg.add("groupByLabel", funcs::group_by_label);
        reg.add("groupByMulti", funcs::group_by_multi);
        reg.add("groupByMultiFilter", funcs::group_by_multi_filter);
        reg.add("getAllLabelValue", funcs::get_all_label_value);
        reg.add("filterByService", funcs::filter_by_service);
        reg.add("concatenateUnique", funcs::concatenate_unique);

        // utility helpers
        reg.add("split", util::split);
        reg.add("join", util::join);
        reg.add("toUpper", util::to_upper);
        reg.add("toLower", util::to_lower);
        reg.add("contains", util::contains);
        reg.add("replace", util::replace);
        reg.add("trim", util::trim);
        reg.add("trimSuffix", util::trim_suffix);
        reg.add("closest", util::closest);
        reg.add("first", util::first);
        reg.add("coalesce", util::coalesce);
        reg.add("dict", util::dict);
        reg.add("env", util::env);
        reg.add("exists", util::exists);
        reg.add("dirList", util::dir_list);
        reg.add("timestamp", util::timestamp);
        reg.add("base", util::base);
        reg.add("dir", util::dir);

        reg
    }

    /// Registry extended with the entity lookups backed by `provider`.
    pub fn with_provider(provider: Arc<dyn MetadataProvider>) -> Self {
        let mut reg = Self::new();

        let p = Arc::clone(&provider);
        reg.add("service", move |args: &[Value]| {
            funcs::service(p.as_ref(), args)
        });
        let p = Arc::clone(&provider);
        reg.add("services", move |args: &[Value]| {
            funcs::services(p.as_ref(), args)
        });
        let p = Arc::clone(&provider);
        reg.add("containers", move |args: &[Value]| {
            funcs::containers(p.as_ref(), args)
        });
        let p = Arc::clone(&provider);
        reg.add("host", move |args: &[Value]| funcs::host(p.as_ref(), args));
        reg.add("hosts", move |args: &[Value]| {
            funcs::hosts(provider.as_ref(), args)
        });

        reg
    }

    fn add<F>(&mut self, name: &'static str, func: F)
    where
        F: Fn(&[Value]) -> TemplateResult + Send + Sync + 'static,
    {
        self.funcs.insert(name, Box::new(func));
    }

    /// Returns `true` if a function with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.funcs.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.funcs.keys().copied()
    }

    /// Invoke a registered function by name.
    #[instrument(level = "debug", skip(self, args), fields(argc = args.len()))]
    pub fn call(&self, name: &str, args: &[Value]) -> TemplateResult {
        let func = self
            .funcs
            .get(name)
            .ok_or_else(|| TemplateError::UnknownFunction(name.to_string()))?;
        func(args)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::StaticProvider;
    use lbgen_model::{Collection, Container, Labels, Service};

    fn registry() -> Registry {
        Registry::new()
    }

    fn services_value() -> Value {
        Value::Entities(Collection::Services(vec![
            Service::new("web", [("tier", "front,edge")].into_iter().collect()),
            Service::new("db", [("tier", "back")].into_iter().collect()),
        ]))
    }

    #[test]
    fn exposes_the_full_query_surface() {
        let reg = registry();
        for name in [
            "whereLabelExists",
            "whereLabelEquals",
            "whereLabelMatches",
            "groupByLabel",
            "groupByMulti",
            "groupByMultiFilter",
            "getAllLabelValue",
            "filterByService",
            "concatenateUnique",
        ] {
            assert!(reg.contains(name), "missing function {name}");
        }
    }

    #[test]
    fn unknown_name_is_a_typed_error() {
        let err = registry().call("nope", &[]).unwrap_err();
        assert!(matches!(err, TemplateError::UnknownFunction(name) if name == "nope"));
    }

    #[test]
    fn where_label_matches_uses_regex_not_equality() {
        // A bare substring pattern must behave as a regex match.
        let out = registry()
            .call(
                "whereLabelMatches",
                &["tier".into(), "fr.nt".into(), services_value()],
            )
            .unwrap();
        assert_eq!(out.as_entities().unwrap().len(), 1);
    }

    #[test]
    fn group_by_multi_end_to_end() {
        let out = registry()
            .call("groupByMulti", &["tier".into(), ",".into(), services_value()])
            .unwrap();
        match out {
            Value::Groups(map) => {
                let keys: Vec<_> = map.keys().cloned().collect();
                assert_eq!(keys, vec!["back", "edge", "front"]);
            }
            other => panic!("unexpected value: {other:?}"),
        }
    }

    #[test]
    fn filter_by_service_keeps_owned_containers() {
        let coll = Value::Entities(Collection::Containers(vec![
            Container::new("web", Labels::new()),
            Container::new("db", Labels::new()),
        ]));
        let out = registry()
            .call("filterByService", &["web".into(), coll])
            .unwrap();
        assert_eq!(out.as_entities().unwrap().len(), 1);
    }

    #[test]
    fn concatenate_unique_through_registry() {
        let out = registry()
            .call(
                "concatenateUnique",
                &[
                    Value::StrList(vec!["a".into(), "b".into()]),
                    Value::StrList(vec!["b".into(), "c".into()]),
                ],
            )
            .unwrap();
        assert_eq!(out.as_str_list().unwrap(), &["a", "b", "c"]);
    }

    #[test]
    fn provider_lookups_are_registered() {
        let provider = StaticProvider::new().with_services(vec![Service::new(
            "web",
            [("tier", "front")].into_iter().collect(),
        )]);
        let reg = Registry::with_provider(Arc::new(provider));

        assert!(reg.contains("service"));
        assert!(reg.contains("hosts"));

        let out = reg.call("services", &[]).unwrap();
        assert_eq!(out.as_entities().unwrap().len(), 1);

        let out = reg.call("service", &["ghost".into()]).unwrap();
        assert!(out.is_null());
    }

    #[test]
    fn names_are_sorted_and_stable() {
        let reg = registry();
        let names: Vec<_> = reg.names().collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }
}
