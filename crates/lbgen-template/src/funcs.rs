//! The label-query and lookup functions exposed to templates.
//!
//! Each function decodes its arguments from [`Value`]s, delegates to
//! `lbgen-query` or the metadata provider, and reports shape problems as
//! typed failures carrying the template-visible function name. A nil value
//! where a collection is required is `NilInput`; any other non-collection
//! shape is `UnsupportedKind`.

use tracing::debug;

use lbgen_model::{Collection, Entity};
use lbgen_query as query;
use uuid::Uuid;

use crate::error::{TemplateError, TemplateResult};
use crate::provider::MetadataProvider;
use crate::value::Value;

pub(crate) fn arity(
    func: &'static str,
    args: &[Value],
    expected: usize,
) -> Result<(), TemplateError> {
    if args.len() != expected {
        return Err(TemplateError::Arity {
            func,
            expected,
            got: args.len(),
        });
    }
    Ok(())
}

pub(crate) fn str_arg<'a>(
    func: &'static str,
    args: &'a [Value],
    index: usize,
) -> Result<&'a str, TemplateError> {
    match &args[index] {
        Value::Str(s) => Ok(s),
        other => Err(TemplateError::argument(func, index, "string", other)),
    }
}

pub(crate) fn int_arg(
    func: &'static str,
    args: &[Value],
    index: usize,
) -> Result<i64, TemplateError> {
    args[index]
        .as_int()
        .ok_or_else(|| TemplateError::argument(func, index, "int", &args[index]))
}

pub(crate) fn entities_arg<'a>(
    func: &'static str,
    args: &'a [Value],
    index: usize,
) -> Result<&'a Collection, TemplateError> {
    match &args[index] {
        Value::Entities(coll) => Ok(coll),
        Value::Null => Err(TemplateError::NilInput { func }),
        other => Err(TemplateError::UnsupportedKind {
            func,
            got: other.type_name(),
        }),
    }
}

// A nil sequence is tolerated and reads as empty.
pub(crate) fn str_list_arg<'a>(
    func: &'static str,
    args: &'a [Value],
    index: usize,
) -> Result<&'a [String], TemplateError> {
    match &args[index] {
        Value::StrList(xs) => Ok(xs),
        Value::Null => Ok(&[]),
        other => Err(TemplateError::argument(func, index, "string list", other)),
    }
}

pub fn where_label_exists(args: &[Value]) -> TemplateResult {
    const FUNC: &str = "whereLabelExists";
    arity(FUNC, args, 2)?;
    let label = str_arg(FUNC, args, 0)?;
    let coll = entities_arg(FUNC, args, 1)?;
    query::where_label_exists(label, coll)
        .map(Value::from)
        .map_err(|e| TemplateError::query(FUNC, e))
}

pub fn where_label_equals(args: &[Value]) -> TemplateResult {
    const FUNC: &str = "whereLabelEquals";
    arity(FUNC, args, 3)?;
    let label = str_arg(FUNC, args, 0)?;
    let target = str_arg(FUNC, args, 1)?;
    let coll = entities_arg(FUNC, args, 2)?;
    query::where_label_equals(label, target, coll)
        .map(Value::from)
        .map_err(|e| TemplateError::query(FUNC, e))
}

pub fn where_label_matches(args: &[Value]) -> TemplateResult {
    const FUNC: &str = "whereLabelMatches";
    arity(FUNC, args, 3)?;
    let label = str_arg(FUNC, args, 0)?;
    let pattern = str_arg(FUNC, args, 1)?;
    let coll = entities_arg(FUNC, args, 2)?;
    query::where_label_matches(label, pattern, coll)
        .map(Value::from)
        .map_err(|e| TemplateError::query(FUNC, e))
}

pub fn group_by_label(args: &[Value]) -> TemplateResult {
    const FUNC: &str = "groupByLabel";
    arity(FUNC, args, 2)?;
    let label = str_arg(FUNC, args, 0)?;
    let coll = entities_arg(FUNC, args, 1)?;
    Ok(query::group_by_label(label, coll).into())
}

pub fn group_by_multi(args: &[Value]) -> TemplateResult {
    const FUNC: &str = "groupByMulti";
    arity(FUNC, args, 3)?;
    let label = str_arg(FUNC, args, 0)?;
    let sep = str_arg(FUNC, args, 1)?;
    let coll = entities_arg(FUNC, args, 2)?;
    Ok(query::group_by_multi(label, sep, coll).into())
}

pub fn group_by_multi_filter(args: &[Value]) -> TemplateResult {
    const FUNC: &str = "groupByMultiFilter";
    arity(FUNC, args, 4)?;
    let filter = str_arg(FUNC, args, 0)?;
    let label = str_arg(FUNC, args, 1)?;
    let sep = str_arg(FUNC, args, 2)?;
    let coll = entities_arg(FUNC, args, 3)?;
    Ok(query::group_by_multi_filter(filter, label, sep, coll).into())
}

pub fn get_all_label_value(args: &[Value]) -> TemplateResult {
    const FUNC: &str = "getAllLabelValue";
    arity(FUNC, args, 4)?;
    let filter = str_arg(FUNC, args, 0)?;
    let label = str_arg(FUNC, args, 1)?;
    let sep = str_arg(FUNC, args, 2)?;
    let coll = entities_arg(FUNC, args, 3)?;
    Ok(query::all_label_values(filter, label, sep, coll).into())
}

pub fn filter_by_service(args: &[Value]) -> TemplateResult {
    const FUNC: &str = "filterByService";
    arity(FUNC, args, 2)?;
    let service = str_arg(FUNC, args, 0)?;
    let coll = entities_arg(FUNC, args, 1)?;
    query::by_service(service, coll)
        .map(Value::from)
        .map_err(|e| TemplateError::query(FUNC, e))
}

pub fn concatenate_unique(args: &[Value]) -> TemplateResult {
    const FUNC: &str = "concatenateUnique";
    arity(FUNC, args, 2)?;
    let a = str_list_arg(FUNC, args, 0)?;
    let b = str_list_arg(FUNC, args, 1)?;
    Ok(query::concatenate_unique(a, b).into())
}

pub fn service(provider: &dyn MetadataProvider, args: &[Value]) -> TemplateResult {
    const FUNC: &str = "service";
    arity(FUNC, args, 1)?;
    let name = str_arg(FUNC, args, 0)?;
    match provider
        .service(name)
        .map_err(|e| TemplateError::Provider { func: FUNC, source: e })?
    {
        Some(svc) => Ok(Entity::Service(svc).into()),
        None => {
            debug!(name, "service not found");
            Ok(Value::Null)
        }
    }
}

pub fn services(provider: &dyn MetadataProvider, args: &[Value]) -> TemplateResult {
    const FUNC: &str = "services";
    arity(FUNC, args, 0)?;
    provider
        .services()
        .map(|xs| Collection::Services(xs).into())
        .map_err(|e| TemplateError::Provider { func: FUNC, source: e })
}

pub fn containers(provider: &dyn MetadataProvider, args: &[Value]) -> TemplateResult {
    const FUNC: &str = "containers";
    arity(FUNC, args, 0)?;
    provider
        .containers()
        .map(|xs| Collection::Containers(xs).into())
        .map_err(|e| TemplateError::Provider { func: FUNC, source: e })
}

pub fn host(provider: &dyn MetadataProvider, args: &[Value]) -> TemplateResult {
    const FUNC: &str = "host";
    arity(FUNC, args, 1)?;
    let raw = str_arg(FUNC, args, 0)?;
    let uuid = Uuid::parse_str(raw)
        .map_err(|_| TemplateError::argument(FUNC, 0, "host uuid", &args[0]))?;
    match provider
        .host(&uuid)
        .map_err(|e| TemplateError::Provider { func: FUNC, source: e })?
    {
        Some(h) => Ok(Entity::Host(h).into()),
        None => {
            debug!(%uuid, "host not found");
            Ok(Value::Null)
        }
    }
}

pub fn hosts(provider: &dyn MetadataProvider, args: &[Value]) -> TemplateResult {
    const FUNC: &str = "hosts";
    arity(FUNC, args, 0)?;
    provider
        .hosts()
        .map(|xs| Collection::Hosts(xs).into())
        .map_err(|e| TemplateError::Provider { func: FUNC, source: e })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::StaticProvider;
    use lbgen_model::{Labels, Service};

    fn services_value() -> Value {
        Value::Entities(Collection::Services(vec![
            Service::new("web", [("tier", "front,edge")].into_iter().collect()),
            Service::new("db", [("tier", "back")].into_iter().collect()),
        ]))
    }

    #[test]
    fn nil_collection_is_nil_input() {
        let err =
            where_label_exists(&["tier".into(), Value::Null]).unwrap_err();
        assert!(matches!(
            err,
            TemplateError::NilInput { func: "whereLabelExists" }
        ));
    }

    #[test]
    fn non_collection_is_unsupported_kind() {
        let err = group_by_multi(&["tier".into(), ",".into(), "oops".into()]).unwrap_err();
        match err {
            TemplateError::UnsupportedKind { func, got } => {
                assert_eq!(func, "groupByMulti");
                assert_eq!(got, "string");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn wrong_arity_is_reported() {
        let err = group_by_multi(&["tier".into()]).unwrap_err();
        assert!(matches!(
            err,
            TemplateError::Arity { expected: 3, got: 1, .. }
        ));
    }

    #[test]
    fn where_label_equals_is_case_insensitive() {
        let out = where_label_equals(&["tier".into(), "BACK".into(), services_value()]).unwrap();
        let coll = out.as_entities().unwrap();
        assert_eq!(coll.len(), 1);
    }

    #[test]
    fn group_by_multi_splits_values() {
        let out = group_by_multi(&["tier".into(), ",".into(), services_value()]).unwrap();
        match out {
            Value::Groups(map) => {
                let keys: Vec<_> = map.keys().cloned().collect();
                assert_eq!(keys, vec!["back", "edge", "front"]);
            }
            other => panic!("unexpected value: {other:?}"),
        }
    }

    #[test]
    fn concatenate_unique_tolerates_nil_lists() {
        let out = concatenate_unique(&[
            Value::StrList(vec!["a".into(), "b".into()]),
            Value::Null,
        ])
        .unwrap();
        assert_eq!(out.as_str_list().unwrap(), &["a", "b"]);
    }

    #[test]
    fn service_lookup_miss_is_null() {
        let provider = StaticProvider::new();
        let out = service(&provider, &["ghost".into()]).unwrap();
        assert!(out.is_null());
    }

    #[test]
    fn service_lookup_hit_is_entity() {
        let provider =
            StaticProvider::new().with_services(vec![Service::new("web", Labels::new())]);
        let out = service(&provider, &["web".into()]).unwrap();
        assert!(matches!(out, Value::Entity(_)));
    }

    #[test]
    fn host_rejects_malformed_uuid() {
        let provider = StaticProvider::new();
        let err = host(&provider, &["not-a-uuid".into()]).unwrap_err();
        assert!(matches!(err, TemplateError::Argument { func: "host", .. }));
    }
}
