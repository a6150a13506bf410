use std::collections::BTreeMap;

/// language tag for a natural language value
///
/// tags compare case insensitively: they are stored in their canonical BCP 47 casing, and both
/// the `und` tag and the empty string collapse onto [`Language::Undefined`]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Language {
	/// no language, or a language we can't tell
	Undefined,
	Tag(String),
}

impl Language {
	pub const UNDEFINED: &'static str = "und";

	pub fn is_undefined(&self) -> bool {
		matches!(self, Language::Undefined)
	}
}

impl From<&str> for Language {
	fn from(value: &str) -> Self {
		let value = value.trim();
		if value.is_empty() || value.eq_ignore_ascii_case(Language::UNDEFINED) {
			return Language::Undefined;
		}
		let tag = value
			.split('-')
			.enumerate()
			.map(|(i, subtag)| match (i, subtag.len()) {
				(0, _) => subtag.to_ascii_lowercase(),
				(_, 2) => subtag.to_ascii_uppercase(),
				(_, 4) if subtag.is_ascii() => {
					let mut script = subtag.to_ascii_lowercase();
					script[..1].make_ascii_uppercase();
					script
				},
				_ => subtag.to_ascii_lowercase(),
			})
			.collect::<Vec<String>>()
			.join("-");
		Language::Tag(tag)
	}
}

impl AsRef<str> for Language {
	fn as_ref(&self) -> &str {
		match self {
			Language::Undefined => Language::UNDEFINED,
			Language::Tag(tag) => tag,
		}
	}
}

impl std::fmt::Display for Language {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_ref())
	}
}

/// text which may be given in many languages, at most one string per language
///
/// see <https://www.w3.org/TR/activitystreams-core/#naturalLanguageValues>
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NaturalValue {
	language: Language,
	values: BTreeMap<Language, String>,
}

#[derive(Debug, Clone)]
pub struct NaturalValueBuilder {
	inner: NaturalValue,
}

impl NaturalValueBuilder {
	/// set text for the builder default language
	pub fn with_value(mut self, text: &str) -> Self {
		let lang = self.inner.language.clone();
		self.inner.values.insert(lang, text.to_string());
		self
	}

	/// set text for an explicit language tag, `und` meaning no language
	pub fn with_language_value(mut self, language: &str, text: &str) -> Self {
		self.inner.values.insert(Language::from(language), text.to_string());
		self
	}

	pub fn build(self) -> NaturalValue {
		self.inner
	}
}

impl NaturalValue {
	/// builder whose default language is [`Language::Undefined`]
	pub fn builder() -> NaturalValueBuilder {
		NaturalValueBuilder {
			inner: NaturalValue {
				language: Language::Undefined,
				values: BTreeMap::new(),
			},
		}
	}

	/// builder with an explicit default language
	pub fn builder_for(language: &str) -> NaturalValueBuilder {
		NaturalValueBuilder {
			inner: NaturalValue {
				language: Language::from(language),
				values: BTreeMap::new(),
			},
		}
	}

	pub fn default_language(&self) -> &Language {
		&self.language
	}

	/// text for the default language, even if other languages are present
	pub fn value(&self) -> Option<&str> {
		self.values.get(&self.language).map(|x| x.as_str())
	}

	pub fn language_value(&self, language: &str) -> Option<&str> {
		self.values.get(&Language::from(language)).map(|x| x.as_str())
	}

	pub fn has_value_for(&self, language: &str) -> bool {
		self.values.contains_key(&Language::from(language))
	}

	pub fn has_multiple_languages(&self) -> bool {
		self.values.len() > 1
	}

	pub fn all_values(&self) -> impl Iterator<Item = (&Language, &str)> {
		self.values.iter().map(|(k, v)| (k, v.as_str()))
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}
}
