mod labels;
pub use labels::Labels;

mod service;
pub use service::Service;

mod container;
pub use container::Container;

mod host;
pub use host::Host;

mod kind;
pub use kind::EntityKind;

mod entity;
pub use entity::{Entity, Labeled, ServiceScoped};

mod collection;
pub use collection::Collection;
