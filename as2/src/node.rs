use crate::{Base, BaseType, DecodeError, Field, FieldErr, Link, LinkType, Map, Object, Property};

/// an embedded vocabulary value: either an Object, a Link, or nothing at all
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Node {
	Object(Box<Object>),
	Link(Box<Link>),
	#[default]
	Empty,
}

impl From<Object> for Node {
	fn from(value: Object) -> Self {
		Node::Object(Box::new(value))
	}
}

impl From<Link> for Node {
	fn from(value: Link) -> Self {
		Node::Link(Box::new(value))
	}
}

impl<T : Into<Node>> From<Option<T>> for Node {
	fn from(value: Option<T>) -> Self {
		match value {
			Some(x) => x.into(),
			None => Node::Empty,
		}
	}
}

impl Node {
	/// true only if Node is empty
	pub fn is_nothing(&self) -> bool {
		matches!(self, Node::Empty)
	}

	/// true only if Node is link
	pub fn is_link(&self) -> bool {
		matches!(self, Node::Link(_))
	}

	/// true only if Node contains an object
	pub fn is_object(&self) -> bool {
		matches!(self, Node::Object(_))
	}

	pub fn get_object(&self) -> Option<&Object> {
		match self {
			Node::Object(x) => Some(x),
			Node::Link(_) | Node::Empty => None,
		}
	}

	pub fn get_link(&self) -> Option<&Link> {
		match self {
			Node::Link(x) => Some(x),
			Node::Object(_) | Node::Empty => None,
		}
	}

	/// returns id of embedded value: href for links without an id, error if empty
	pub fn id(&self) -> Field<&url::Url> {
		match self {
			Node::Empty => Err(FieldErr("id")),
			Node::Object(obj) => obj.id(),
			Node::Link(link) => Ok(link.id().unwrap_or(link.href())),
		}
	}

	pub fn base_type(&self) -> Field<BaseType> {
		match self {
			Node::Empty => Err(FieldErr("type")),
			Node::Object(obj) => Ok(obj.base_type()),
			Node::Link(link) => Ok(link.base_type()),
		}
	}

	/// nested json shape of the contained value, nothing if empty
	pub fn to_json_embedded(&self) -> Option<Map> {
		match self {
			Node::Empty => None,
			Node::Object(obj) => Some(obj.to_json_embedded()),
			Node::Link(link) => Some(link.to_json_embedded()),
		}
	}

	/// decode a nested value: bare strings are links, objects are links if typed as such or if they
	/// carry an href, otherwise objects
	pub fn from_json_value(value: &serde_json::Value) -> Result<Self, DecodeError> {
		match value {
			serde_json::Value::String(_) => {
				let mut obj = Map::new();
				obj.insert(Property::Href.as_ref().to_string(), value.clone());
				Ok(Link::from_json_object(&obj)?.into())
			},
			serde_json::Value::Object(obj) => {
				let is_link = obj.get(Property::Type.as_ref())
					.and_then(|t| t.as_str())
					.is_some_and(|t| LinkType::try_from(t).is_ok())
					|| obj.contains_key(Property::Href.as_ref());
				if is_link {
					let link = Link::from_json_object(obj)?;
					if link.is_none() {
						tracing::warn!("dropping link without href: value={value}");
					}
					Ok(link.into())
				} else {
					Ok(Object::from_json_object(obj)?.into())
				}
			},
			serde_json::Value::Null => Ok(Node::Empty),
			_ => Err(DecodeError::UnexpectedValue { property: Property::Preview.key(), expected: "a link or an object" }),
		}
	}
}

#[cfg(test)]
mod test {
	use crate::{BaseType, Link, LinkType, Node, Object, ObjectType};

	#[test]
	fn node_from_option_is_empty_on_none() {
		let node = Node::from(None::<Object>);
		assert!(node.is_nothing());
		assert!(node.id().is_err());
		assert!(node.to_json_embedded().is_none());
	}

	#[test]
	fn link_node_id_falls_back_to_href() {
		let node = Node::from(Link::builder("https://example.org/abc.png".parse().unwrap()).build());
		assert!(node.is_link());
		assert_eq!(node.id().unwrap().as_str(), "https://example.org/abc.png");
		assert_eq!(node.base_type(), Ok(BaseType::Link(LinkType::Link)));
	}

	#[test]
	fn typed_link_without_href_is_nothing() {
		let node = Node::from_json_value(&serde_json::json!({ "type": "Link", "name": "dangling" })).unwrap();
		assert!(node.is_nothing());
	}

	#[test]
	fn untyped_object_is_an_object() {
		let node = Node::from_json_value(&serde_json::json!({ "id": "https://example.org/thumb", "type": "Image" })).unwrap();
		assert!(node.is_object());
		assert_eq!(node.base_type(), Ok(BaseType::Object(ObjectType::Object)));
		assert_eq!(node.get_object().and_then(|x| crate::Base::id(x).ok()).map(|x| x.as_str()), Some("https://example.org/thumb"));
	}

	#[test]
	fn scalars_are_not_nodes() {
		assert!(Node::from_json_value(&serde_json::json!(42)).is_err());
		assert!(Node::from_json_value(&serde_json::Value::Null).unwrap().is_nothing());
	}
}
