//! Label-query operations over orchestration entity collections.
//!
//! Every operation is a pure, single-pass function over an immutable
//! [`Collection`](lbgen_model::Collection) snapshot: filtering by label
//! predicate, grouping by (possibly multi-valued) label values, collecting
//! split label values, and filtering by owning service. Output ordering is
//! deterministic so that configuration rendered from the results is
//! reproducible.

pub mod collect;
pub mod filter;
pub mod group;
pub mod selector;
pub mod set;

mod error;
pub use error::{QueryError, QueryResult};

pub use collect::{WILDCARD, all_label_values};
pub use filter::by_service;
pub use group::{GroupMap, group_by_label, group_by_multi, group_by_multi_filter};
pub use selector::{where_label, where_label_equals, where_label_exists, where_label_matches};
pub use set::concatenate_unique;
