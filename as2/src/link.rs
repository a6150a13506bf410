use crate::{Base, BaseType, DecodeError, Field, InsertValue, Map, NaturalValue, NaturalValueBuilder, Node, Property, ReadValue};
use crate::field::OptionalField;

crate::strenum! {
	pub enum LinkType {
		Link;
	};
}

/// a typed reference to a resource, plus metadata on how to render it
///
/// see <https://www.w3.org/TR/activitystreams-vocabulary/#dfn-link>
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
	href: url::Url,
	id: Option<url::Url>,
	name: Option<NaturalValue>,
	rel: Option<String>,
	media_type: Option<String>,
	hreflang: Option<String>,
	height: Option<u64>,
	width: Option<u64>,
	preview: Node,
}

#[derive(Debug, Clone)]
pub struct LinkBuilder {
	href: url::Url,
	id: Option<url::Url>,
	name: Option<NaturalValue>,
	rel: Option<String>,
	media_type: Option<String>,
	hreflang: Option<String>,
	height: Option<u64>,
	width: Option<u64>,
	preview: Node,
}

impl LinkBuilder {
	pub fn new(href: url::Url) -> Self {
		LinkBuilder {
			href,
			id: None,
			name: None,
			rel: None,
			media_type: None,
			hreflang: None,
			height: None,
			width: None,
			preview: Node::Empty,
		}
	}

	crate::setter! { id -> url::Url }
	crate::setter! { name -> NaturalValue }
	crate::setter! { rel -> &str }
	crate::setter! { media_type -> &str }
	crate::setter! { hreflang -> &str }
	crate::setter! { height -> u64 }
	crate::setter! { width -> u64 }
	crate::setter! { preview -> node }

	pub fn build(self) -> Link {
		Link {
			href: self.href,
			id: self.id,
			name: self.name,
			rel: self.rel,
			media_type: self.media_type,
			hreflang: self.hreflang,
			height: self.height,
			width: self.width,
			preview: self.preview,
		}
	}
}

impl Link {
	pub fn builder(href: url::Url) -> LinkBuilder {
		LinkBuilder::new(href)
	}

	pub fn href(&self) -> &url::Url {
		&self.href
	}

	crate::getter! { rel -> &str }
	crate::getter! { media_type::mediaType -> &str }
	crate::getter! { hreflang -> &str }
	crate::getter! { height -> u64 }
	crate::getter! { width -> u64 }

	pub fn preview(&self) -> &Node {
		&self.preview
	}
}

impl Base for Link {
	fn base_type(&self) -> BaseType {
		BaseType::Link(LinkType::Link)
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
		obj.insert_str(Property::Href, Some(self.href.as_str()));
		obj.insert_natural(Property::Name, Property::NameMap, self.name.as_ref());
		obj.insert_str(Property::Rel, self.rel.as_deref());
		obj.insert_str(Property::MediaType, self.media_type.as_deref());
		obj.insert_str(Property::Hreflang, self.hreflang.as_deref());
		obj.insert_uint(Property::Height, self.height);
		obj.insert_uint(Property::Width, self.width);
		obj.insert_node(Property::Preview, &self.preview);
		obj
	}

	fn from_json_object(obj: &Map) -> Result<Option<Self>, DecodeError> {
		let Some(href) = obj.get(Property::Href.as_ref()) else {
			return Ok(None);
		};
		let mut builder = Link::builder(href.read_href()?);
		let mut name : Option<NaturalValueBuilder> = None;

		for (key, value) in obj {
			match Property::from(key.as_str()) {
				Property::Context | Property::Href => {},
				Property::Type => {
					if value.as_str() != Some(LinkType::Link.as_ref()) {
						tracing::debug!("ignoring type {value} while decoding Link");
					}
				},
				Property::Id => builder = builder.set_id(Some(value.read_id()?)),
				p @ (Property::Name | Property::NameMap) => name = Some(value.read_natural(p, name)?),
				p @ Property::Rel => builder = builder.set_rel(Some(value.read_str(p)?)),
				p @ Property::MediaType => builder = builder.set_media_type(Some(value.read_str(p)?)),
				p @ Property::Hreflang => builder = builder.set_hreflang(Some(value.read_str(p)?)),
				p @ Property::Height => builder = builder.set_height(Some(value.read_uint(p)?)),
				p @ Property::Width => builder = builder.set_width(Some(value.read_uint(p)?)),
				Property::Preview => builder = builder.set_preview(Node::from_json_value(value)?),
				Property::Unrecognized => tracing::warn!("property not found: key={key}, value={value}"),
			}
		}

		Ok(Some(builder.set_name(name.map(|x| x.build())).build()))
	}
}

#[cfg(test)]
mod test {
	use crate::{Base, DecodeError, Link, NaturalValue, Node, Object};

	const TEST_HREF: &str = "https://example.org/abc.png";
	const TEST_REL: &str = "canonical";
	const TEST_MEDIA_TYPE: &str = "image/png";
	const TEST_NAME: &str = "Image Link";
	const TEST_HREFLANG: &str = "en";
	const TEST_HEIGHT: u64 = 900;
	const TEST_WIDTH: u64 = 600;

	fn as_map(value: serde_json::Value) -> crate::Map {
		let serde_json::Value::Object(obj) = value else { panic!("fixture is not an object") };
		obj
	}

	fn full_link() -> Link {
		Link::builder(TEST_HREF.parse().unwrap())
			.set_rel(Some(TEST_REL))
			.set_media_type(Some(TEST_MEDIA_TYPE))
			.set_name(Some(NaturalValue::builder().with_value(TEST_NAME).build()))
			.set_hreflang(Some(TEST_HREFLANG))
			.set_height(Some(TEST_HEIGHT))
			.set_width(Some(TEST_WIDTH))
			.build()
	}

	#[test]
	fn minimal_link_serializes_only_href() {
		let link = Link::builder(TEST_HREF.parse().unwrap()).build();
		let result: serde_json::Value = serde_json::from_str(&link.to_json()).unwrap();

		assert_eq!(
			result,
			serde_json::json!({
				"@context": "https://www.w3.org/ns/activitystreams",
				"type": "Link",
				"href": TEST_HREF,
			})
		);
	}

	#[test]
	fn link_serializes_all_properties() {
		let result: serde_json::Value = serde_json::from_str(&full_link().to_json()).unwrap();

		assert_eq!(
			result,
			serde_json::json!({
				"@context": "https://www.w3.org/ns/activitystreams",
				"type": "Link",
				"href": TEST_HREF,
				"name": TEST_NAME,
				"rel": TEST_REL,
				"mediaType": TEST_MEDIA_TYPE,
				"hreflang": TEST_HREFLANG,
				"height": TEST_HEIGHT,
				"width": TEST_WIDTH,
			})
		);
	}

	#[test]
	fn zero_dimensions_are_not_absent() {
		let link = Link::builder(TEST_HREF.parse().unwrap())
			.set_height(Some(0))
			.build();
		let result = link.to_json_object();

		assert_eq!(result.get("height"), Some(&serde_json::json!(0)));
		assert!(result.get("width").is_none());
		assert_eq!(link.height(), Ok(0));
		assert_eq!(link.width(), Err(crate::FieldErr("width")));
	}

	#[test]
	fn href_only_link_decodes_and_encodes_back() {
		let link = Link::from_json_object(&as_map(serde_json::json!({ "href": TEST_HREF })))
			.unwrap()
			.unwrap();

		assert_eq!(link.href().as_str(), TEST_HREF);
		assert!(link.id().is_err());
		assert!(link.name().is_err());
		assert!(link.rel().is_err());
		assert!(link.media_type().is_err());
		assert!(link.hreflang().is_err());
		assert!(link.height().is_err());
		assert!(link.width().is_err());
		assert!(link.preview().is_nothing());
		assert_eq!(
			serde_json::Value::Object(link.to_json_object()),
			serde_json::json!({
				"@context": "https://www.w3.org/ns/activitystreams",
				"type": "Link",
				"href": TEST_HREF,
			})
		);
	}

	#[test]
	fn dimensions_are_coerced_from_strings() {
		let link = Link::from_json_object(&as_map(serde_json::json!({
			"type": "Link",
			"height": "100",
			"width": "100",
			"href": "http://example.org/image.png",
		})))
			.unwrap()
			.unwrap();

		assert_eq!(link.href().as_str(), "http://example.org/image.png");
		assert_eq!(link.height(), Ok(100));
		assert_eq!(link.width(), Ok(100));
	}

	#[test]
	fn missing_href_is_no_result() {
		let fixtures = [
			serde_json::json!({}),
			serde_json::json!({ "type": "Link" }),
			serde_json::json!({ "type": "Link", "name": TEST_NAME, "height": "not a number" }),
			serde_json::json!({ "id": "not even a uri", "rel": TEST_REL }),
		];

		for fixture in fixtures {
			assert!(matches!(Link::from_json_object(&as_map(fixture)), Ok(None)));
		}
	}

	#[test]
	fn malformed_numbers_fail_decode() {
		let fixtures = [
			serde_json::json!({ "href": TEST_HREF, "height": "tall" }),
			serde_json::json!({ "href": TEST_HREF, "width": -3 }),
			serde_json::json!({ "href": TEST_HREF, "width": 1.5 }),
			serde_json::json!({ "href": TEST_HREF, "height": true }),
		];

		for fixture in fixtures {
			assert!(matches!(
				Link::from_json_object(&as_map(fixture)),
				Err(DecodeError::MalformedNumber { .. })
			));
		}
	}

	#[test]
	fn malformed_href_fails_decode() {
		assert!(matches!(
			Link::from_json_object(&as_map(serde_json::json!({ "href": "abc.png" }))),
			Err(DecodeError::InvalidHref { .. })
		));
		assert!(matches!(
			Link::from_json_object(&as_map(serde_json::json!({ "href": 12 }))),
			Err(DecodeError::UnexpectedValue { property: "href", .. })
		));
	}

	#[test]
	fn unknown_properties_are_skipped() {
		let plain = Link::from_json_object(&as_map(serde_json::json!({ "href": TEST_HREF, "rel": TEST_REL })));
		let extra = Link::from_json_object(&as_map(serde_json::json!({ "href": TEST_HREF, "rel": TEST_REL, "summary": "nope" })));

		assert_eq!(plain.unwrap(), extra.unwrap());
	}

	#[test]
	fn links_round_trip() {
		let links = [
			Link::builder(TEST_HREF.parse().unwrap()).build(),
			full_link(),
			Link::builder(TEST_HREF.parse().unwrap())
				.set_id(Some("https://example.org/links/1".parse().unwrap()))
				.set_name(Some(
					NaturalValue::builder()
						.with_language_value("en", "An example link")
						.with_language_value("it", "Un link di esempio")
						.build()
				))
				.build(),
		];

		for link in links {
			let decoded = Link::from_json_object(&link.to_json_object()).unwrap().unwrap();
			assert_eq!(decoded, link);
		}
	}

	#[test]
	fn preview_is_encoded_nested_without_context() {
		let preview = Object::builder()
			.set_name(Some(NaturalValue::builder().with_value("thumbnail").build()))
			.build();
		let link = Link::builder(TEST_HREF.parse().unwrap())
			.set_preview(Node::from(preview))
			.build();
		let result = link.to_json_object();

		assert_eq!(
			result.get("preview"),
			Some(&serde_json::json!({ "type": "Object", "name": "thumbnail" }))
		);
	}

	#[test]
	fn preview_decodes_back_into_same_variant() {
		let object_preview = Link::builder(TEST_HREF.parse().unwrap())
			.set_preview(Node::from(
				Object::builder()
					.set_id(Some("https://example.org/preview/1".parse().unwrap()))
					.build()
			))
			.build();
		let link_preview = Link::builder(TEST_HREF.parse().unwrap())
			.set_preview(Node::from(
				Link::builder("https://example.org/abc-small.png".parse().unwrap())
					.set_width(Some(64))
					.build()
			))
			.build();

		for link in [object_preview, link_preview] {
			let decoded = Link::from_json_object(&link.to_json_object()).unwrap().unwrap();
			assert_eq!(decoded, link);
		}
	}

	#[test]
	fn bare_string_preview_is_a_link() {
		let link = Link::from_json_object(&as_map(serde_json::json!({
			"href": TEST_HREF,
			"preview": "https://example.org/abc-small.png",
		})))
			.unwrap()
			.unwrap();

		let preview = link.preview().get_link().expect("preview should be a link");
		assert_eq!(preview.href().as_str(), "https://example.org/abc-small.png");
	}

	#[cfg(feature = "jsonld")]
	fn fixture(json: &str) -> Link {
		Link::from_json(json)
			.expect("link failed decoding")
			.expect("document is not a link")
	}

	#[test]
	#[cfg(feature = "jsonld")]
	fn vocabulary_example_link_decodes() {
		let link = fixture(include_str!("../fixtures/link-vocabulary-ex2.json"));

		assert_eq!(link.href().as_str(), "http://example.org/abc");
		assert_eq!(link.name().unwrap().value(), Some("An example link"));
		assert_eq!(link.media_type(), Ok("text/html"));
		assert_eq!(link.hreflang(), Ok("en"));
	}

	#[test]
	#[cfg(feature = "jsonld")]
	fn numeric_dimensions_decode() {
		let link = fixture(include_str!("../fixtures/link-dimensions.json"));

		assert_eq!(link.href().as_str(), "http://example.org/image.png");
		assert_eq!(link.height(), Ok(100));
		assert_eq!(link.width(), Ok(100));
	}

	#[test]
	#[cfg(feature = "jsonld")]
	fn nested_preview_document_decodes() {
		let link = fixture(include_str!("../fixtures/link-preview.json"));
		let preview = link.preview().get_link().expect("preview should be a link");

		assert_eq!(preview.href().as_str(), "http://example.org/abc-thumb.png");
		assert_eq!(preview.media_type(), Ok("image/png"));
		assert_eq!(preview.width(), Ok(64));
		assert_eq!(preview.height(), Ok(64));
	}

	#[test]
	#[cfg(feature = "jsonld")]
	fn document_without_href_is_no_result() {
		assert!(matches!(Link::from_json(include_str!("../fixtures/link-no-href.json")), Ok(None)));
	}
}
