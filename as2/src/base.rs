use crate::{config::WriterConfig, DecodeError, Field, LinkType, Map, NaturalValue, ObjectType, LD};

crate::strenum! {
	pub enum BaseType {
		;
		Object(ObjectType),
		Link(LinkType)
	};
}

/// common contract of every vocabulary type: identity, name and the json codec
pub trait Base : Sized {
	/// fixed discriminant, also written as `type` on the wire
	fn base_type(&self) -> BaseType;
	fn id(&self) -> Field<&url::Url>;
	fn name(&self) -> Field<&NaturalValue>;

	/// `type` plus own properties, without `@context`: the shape used when nesting
	fn to_json_embedded(&self) -> Map;

	/// decode an already compacted json-ld object
	///
	/// `Ok(None)` means the object is well formed but can't be this type, malformed members fail
	/// the whole decode
	fn from_json_object(obj: &Map) -> Result<Option<Self>, DecodeError>;

	fn to_json_object(&self) -> Map {
		self.to_json_embedded().ld_context()
	}

	fn to_json(&self) -> String {
		self.to_json_with(&WriterConfig::default())
	}

	fn to_json_with(&self, cfg: &WriterConfig) -> String {
		let out = cfg.render(&self.to_json_object());
		tracing::trace!(
			id = self.id().map(|x| x.as_str()).unwrap_or_default(),
			r#type = %self.base_type(),
			"converted to json: {out}"
		);
		out
	}

	/// compact a raw json-ld document and decode it, `Ok(None)` if it can't be normalized
	#[cfg(feature = "jsonld")]
	fn from_json(json: &str) -> Result<Option<Self>, DecodeError> {
		match crate::jsonld::compact(json) {
			Ok(obj) => Self::from_json_object(&obj),
			Err(e) => {
				tracing::warn!("could not normalize json-ld document: {e}");
				Ok(None)
			},
		}
	}
}
