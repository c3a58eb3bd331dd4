//! Plain utility helpers registered alongside the label-query surface:
//! string manipulation, path pieces, environment and filesystem probes.

use std::collections::BTreeMap;
use std::path::Path;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::warn;

use crate::error::{TemplateError, TemplateResult};
use crate::funcs::{arity, int_arg, str_arg, str_list_arg};
use crate::value::Value;

pub fn split(args: &[Value]) -> TemplateResult {
    const FUNC: &str = "split";
    arity(FUNC, args, 2)?;
    let s = str_arg(FUNC, args, 0)?;
    let sep = str_arg(FUNC, args, 1)?;
    Ok(s.split(sep).map(str::to_string).collect::<Vec<_>>().into())
}

pub fn join(args: &[Value]) -> TemplateResult {
    const FUNC: &str = "join";
    arity(FUNC, args, 2)?;
    let xs = str_list_arg(FUNC, args, 0)?;
    let sep = str_arg(FUNC, args, 1)?;
    Ok(xs.join(sep).into())
}

pub fn to_upper(args: &[Value]) -> TemplateResult {
    const FUNC: &str = "toUpper";
    arity(FUNC, args, 1)?;
    Ok(str_arg(FUNC, args, 0)?.to_uppercase().into())
}

pub fn to_lower(args: &[Value]) -> TemplateResult {
    const FUNC: &str = "toLower";
    arity(FUNC, args, 1)?;
    Ok(str_arg(FUNC, args, 0)?.to_lowercase().into())
}

pub fn contains(args: &[Value]) -> TemplateResult {
    const FUNC: &str = "contains";
    arity(FUNC, args, 2)?;
    let s = str_arg(FUNC, args, 0)?;
    let needle = str_arg(FUNC, args, 1)?;
    Ok(s.contains(needle).into())
}

/// `replace(s, old, new, n)` — replace the first `n` occurrences, all of them
/// when `n` is negative.
pub fn replace(args: &[Value]) -> TemplateResult {
    const FUNC: &str = "replace";
    arity(FUNC, args, 4)?;
    let s = str_arg(FUNC, args, 0)?;
    let old = str_arg(FUNC, args, 1)?;
    let new = str_arg(FUNC, args, 2)?;
    let n = int_arg(FUNC, args, 3)?;
    let out = if n < 0 {
        s.replace(old, new)
    } else {
        s.replacen(old, new, n as usize)
    };
    Ok(out.into())
}

pub fn trim(args: &[Value]) -> TemplateResult {
    const FUNC: &str = "trim";
    arity(FUNC, args, 1)?;
    Ok(str_arg(FUNC, args, 0)?.trim().into())
}

pub fn trim_suffix(args: &[Value]) -> TemplateResult {
    const FUNC: &str = "trimSuffix";
    arity(FUNC, args, 2)?;
    let s = str_arg(FUNC, args, 0)?;
    let suffix = str_arg(FUNC, args, 1)?;
    Ok(s.strip_suffix(suffix).unwrap_or(s).into())
}

/// Longest candidate that is contained in `input`, empty when none is.
pub fn closest(args: &[Value]) -> TemplateResult {
    const FUNC: &str = "closest";
    arity(FUNC, args, 2)?;
    let candidates = str_list_arg(FUNC, args, 0)?;
    let input = str_arg(FUNC, args, 1)?;
    let best = candidates
        .iter()
        .filter(|c| input.contains(c.as_str()))
        .max_by_key(|c| c.len())
        .cloned()
        .unwrap_or_default();
    Ok(best.into())
}

/// First element of a sequence value, `Null` when empty or nil.
pub fn first(args: &[Value]) -> TemplateResult {
    const FUNC: &str = "first";
    arity(FUNC, args, 1)?;
    match &args[0] {
        Value::Null => Ok(Value::Null),
        Value::Entities(coll) => Ok(coll.first().map(Value::Entity).unwrap_or(Value::Null)),
        Value::StrList(xs) => Ok(xs.first().cloned().map(Value::Str).unwrap_or(Value::Null)),
        other => Err(TemplateError::argument(FUNC, 0, "sequence", other)),
    }
}

/// First non-nil argument, `Null` when all are nil.
pub fn coalesce(args: &[Value]) -> TemplateResult {
    Ok(args
        .iter()
        .find(|v| !v.is_null())
        .cloned()
        .unwrap_or(Value::Null))
}

/// Build a string-keyed bag from alternating key/value arguments.
pub fn dict(args: &[Value]) -> TemplateResult {
    const FUNC: &str = "dict";
    if args.len() % 2 != 0 {
        return Err(TemplateError::InvalidCall {
            func: FUNC,
            reason: "requires an even number of arguments",
        });
    }
    let mut map = BTreeMap::new();
    for pair in args.chunks(2) {
        let key = pair[0]
            .as_str()
            .ok_or_else(|| TemplateError::argument(FUNC, 0, "string key", &pair[0]))?;
        map.insert(key.to_string(), pair[1].clone());
    }
    Ok(Value::Dict(map))
}

/// Environment variable value, empty string when unset.
pub fn env(args: &[Value]) -> TemplateResult {
    const FUNC: &str = "env";
    arity(FUNC, args, 1)?;
    let name = str_arg(FUNC, args, 0)?;
    Ok(std::env::var(name).unwrap_or_default().into())
}

/// Whether a filesystem path exists.
pub fn exists(args: &[Value]) -> TemplateResult {
    const FUNC: &str = "exists";
    arity(FUNC, args, 1)?;
    let path = str_arg(FUNC, args, 0)?;
    Ok(Path::new(path).exists().into())
}

/// Sorted names of a directory's entries.
///
/// An unreadable directory degrades to an empty list with a warning, so a
/// render never fails on an optional include directory.
pub fn dir_list(args: &[Value]) -> TemplateResult {
    const FUNC: &str = "dirList";
    arity(FUNC, args, 1)?;
    let path = str_arg(FUNC, args, 0)?;
    let mut names = Vec::new();
    match std::fs::read_dir(path) {
        Ok(entries) => {
            for entry in entries.flatten() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
            names.sort();
        }
        Err(err) => {
            warn!(path, %err, "directory listing failed");
        }
    }
    Ok(names.into())
}

/// Current UTC time in RFC 3339.
pub fn timestamp(args: &[Value]) -> TemplateResult {
    const FUNC: &str = "timestamp";
    arity(FUNC, args, 0)?;
    let now = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default();
    Ok(now.into())
}

/// Last component of a path.
pub fn base(args: &[Value]) -> TemplateResult {
    const FUNC: &str = "base";
    arity(FUNC, args, 1)?;
    let path = str_arg(FUNC, args, 0)?;
    let out = Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string());
    Ok(out.into())
}

/// Path with its last component removed.
pub fn dir(args: &[Value]) -> TemplateResult {
    const FUNC: &str = "dir";
    arity(FUNC, args, 1)?;
    let path = str_arg(FUNC, args, 0)?;
    let out = Path::new(path)
        .parent()
        .map(|p| p.to_string_lossy().into_owned())
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| ".".to_string());
    Ok(out.into())
}
