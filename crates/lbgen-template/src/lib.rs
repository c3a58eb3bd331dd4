//! Template-facing layer over the label-query operations.
//!
//! A template engine talks to this crate through two pieces: the dynamic
//! [`Value`] type and the [`Registry`] of named functions. The registry is
//! built once at startup (optionally bound to a [`MetadataProvider`] for the
//! entity lookups) and invoked by name during rendering; every failure comes
//! back as a typed [`TemplateError`] carrying the function name.

mod value;
pub use value::Value;

mod error;
pub use error::{TemplateError, TemplateResult};

mod provider;
pub use provider::{MetadataProvider, ProviderError, StaticProvider};

mod funcs;
mod util;

mod registry;
pub use registry::Registry;
