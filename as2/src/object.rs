use crate::{Base, BaseType, DecodeError, Field, InsertValue, Map, NaturalValue, NaturalValueBuilder, Property, ReadValue};
use crate::field::OptionalField;

crate::strenum! {
	pub enum ObjectType {
		Object;
	};
}

/// the generic activitystreams Object, only identity and name
///
/// see <https://www.w3.org/TR/activitystreams-vocabulary/#dfn-object>
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Object {
	id: Option<url::Url>,
	name: Option<NaturalValue>,
}

#[derive(Debug, Clone, Default)]
pub struct ObjectBuilder {
	id: Option<url::Url>,
	name: Option<NaturalValue>,
}

impl ObjectBuilder {
	crate::setter! { id -> url::Url }
	crate::setter! { name -> NaturalValue }

	pub fn build(self) -> Object {
		Object {
			id: self.id,
			name: self.name,
		}
	}
}

impl Object {
	pub fn builder() -> ObjectBuilder {
		ObjectBuilder::default()
	}
}

impl Base for Object {
	fn base_type(&self) -> BaseType {
		BaseType::Object(ObjectType::Object)
	}

	fn id(&self) -> Field<&url::Url> {
		self.id.as_ref().field("id")
	}

	fn name(&self) -> Field<&NaturalValue> {
		self.name.as_ref().field("name")
	}

	fn to_json_embedded(&self) -> Map {
		let mut obj = Map::new();
		obj.insert_str(Property::Type, Some(self.base_type().as_ref()));
		obj.insert_str(Property::Id, self.id.as_ref().map(|x| x.as_str()));
		obj.insert_natural(Property::Name, Property::NameMap, self.name.as_ref());
		obj
	}

	fn from_json_object(obj: &Map) -> Result<Option<Self>, DecodeError> {
		let mut builder = Object::builder();
		let mut name : Option<NaturalValueBuilder> = None;

		for (key, value) in obj {
			match Property::from(key.as_str()) {
				Property::Context => {},
				Property::Type => {
					if value.as_str() != Some(ObjectType::Object.as_ref()) {
						tracing::debug!("ignoring type {value} while decoding Object");
					}
				},
				Property::Id => builder = builder.set_id(Some(value.read_id()?)),
				p @ (Property::Name | Property::NameMap) => name = Some(value.read_natural(p, name)?),
				Property::Href | Property::Rel | Property::MediaType | Property::Hreflang
				| Property::Height | Property::Width | Property::Preview | Property::Unrecognized =>
					tracing::warn!("property not found: key={key}, value={value}"),
			}
		}

		Ok(Some(builder.set_name(name.map(|x| x.build())).build()))
	}
}
