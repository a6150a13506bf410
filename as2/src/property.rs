crate::properties! {
	pub enum Property {
		/// json-ld context, always consumed upstream
		Context => "@context" | "context",
		Id => "id" | "@id",
		Type => "type" | "@type",
		Name => "name",
		/// language map form of [`Property::Name`]
		NameMap => "nameMap",
		Href => "href",
		Rel => "rel",
		MediaType => "mediaType",
		Hreflang => "hreflang",
		Height => "height",
		Width => "width",
		Preview => "preview",
	}
}

#[cfg(test)]
mod test {
	use super::Property;

	#[test]
	fn keywords_and_compacted_aliases_resolve_to_same_property() {
		assert_eq!(Property::from("@id"), Property::Id);
		assert_eq!(Property::from("id"), Property::Id);
		assert_eq!(Property::from("@type"), Property::Type);
		assert_eq!(Property::from("type"), Property::Type);
		assert_eq!(Property::from("@context"), Property::Context);
		assert_eq!(Property::from("context"), Property::Context);
	}

	#[test]
	fn canonical_keys_round_trip() {
		for prop in Property::ALL {
			assert_eq!(Property::from(prop.as_ref()), *prop);
		}
		assert_eq!(Property::MediaType.as_ref(), "mediaType");
		assert_eq!(Property::Context.as_ref(), "@context");
	}

	#[test]
	fn unknown_keys_fall_through() {
		assert_eq!(Property::from("summary"), Property::Unrecognized);
		assert_eq!(Property::from("Name"), Property::Unrecognized);
		assert_eq!(Property::from("media_type"), Property::Unrecognized);
	}
}
