mod macros;
pub(crate) use macros::{strenum, properties, getter, setter, InsertValue, ReadValue};
pub use macros::TypeValueError;

mod field;
pub use field::{Field, FieldErr};

mod error;
pub use error::{DecodeError, CompactError};

pub mod config;
pub use config::Config;

mod natural;
pub use natural::{NaturalValue, NaturalValueBuilder, Language};

mod property;
pub use property::Property;

mod base;
pub use base::{Base, BaseType};

mod node;
pub use node::Node;

mod object;
pub use object::{Object, ObjectBuilder, ObjectType};

mod link;
pub use link::{Link, LinkBuilder, LinkType};

pub mod jsonld;
pub use jsonld::LD;

/// the activitystreams namespace every document is compacted against
pub const CONTEXT: &str = "https://www.w3.org/ns/activitystreams";

/// media type for activitystreams documents
pub const MEDIA_TYPE: &str = "application/activity+json";

pub type Map = serde_json::Map<String, serde_json::Value>;
