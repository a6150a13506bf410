//! just enough json-ld compaction to read activitystreams documents
//!
//! this is not a json-ld processor: documents are flattened against the activitystreams
//! namespace only, remote contexts are never fetched, and inline contexts are only consulted
//! for a default `@language` and for term aliases pointing into the activitystreams vocabulary

use std::collections::HashMap;

use serde_json::Value;

use super::LD;
use crate::{config::ReaderConfig, CompactError, Language, Map, CONTEXT};

const AS_PREFIX: &str = "as:";
const AS_HTTP: &str = "http://www.w3.org/ns/activitystreams";
const NATURAL_LANGUAGE_PROPERTIES: [&str; 3] = ["name", "summary", "content"];

/// normalize a raw json-ld document against the activitystreams context with default settings
pub fn compact(json: &str) -> Result<Map, CompactError> {
	compact_with(json, &ReaderConfig::default())
}

pub fn compact_with(json: &str, cfg: &ReaderConfig) -> Result<Map, CompactError> {
	let Value::Object(document) = serde_json::from_str::<Value>(json)? else {
		return Err(CompactError::NotAnObject);
	};

	let mut ctx = ActiveContext::default();
	if let Some(context) = document.get("@context") {
		ctx.learn(context);
	}

	if !ctx.activitystreams {
		if cfg.require_context {
			return Err(CompactError::MissingContext);
		}
		tracing::debug!("document doesn't declare activitystreams context, assuming it");
	}

	Ok(ctx.normalize(document).ld_context())
}

fn is_namespace(iri: &str) -> bool {
	let iri = iri.trim_end_matches('#');
	iri == CONTEXT || iri == AS_HTTP
}

fn vocabulary_term(iri: &str) -> Option<&str> {
	if let Some(term) = iri.strip_prefix(AS_PREFIX) {
		return Some(term).filter(|t| !t.is_empty());
	}
	let (ns, term) = iri.split_once('#')?;
	if is_namespace(ns) && !term.is_empty() {
		Some(term)
	} else {
		None
	}
}

#[derive(Debug, Default)]
struct ActiveContext {
	activitystreams: bool,
	language: Option<Language>,
	aliases: HashMap<String, String>,
}

impl ActiveContext {
	fn learn(&mut self, context: &Value) {
		match context {
			Value::String(iri) if is_namespace(iri) => self.activitystreams = true,
			Value::String(iri) => tracing::debug!("not loading remote context {iri}"),
			Value::Array(contexts) => {
				for ctx in contexts {
					self.learn(ctx);
				}
			},
			Value::Object(definitions) => {
				for (term, definition) in definitions {
					match (term.as_str(), definition) {
						("@language", Value::String(lang)) => self.language = Some(Language::from(lang.as_str())),
						("@language", Value::Null) => self.language = None,
						("@vocab", Value::String(iri)) if is_namespace(iri) => self.activitystreams = true,
						(keyword, _) if keyword.starts_with('@') => tracing::debug!("ignoring context keyword {keyword}"),
						(_, Value::String(iri)) => self.alias(term, iri),
						(_, Value::Object(expanded)) => match expanded.get("@id").and_then(|x| x.as_str()) {
							Some(iri) => self.alias(term, iri),
							None => tracing::debug!("ignoring term definition for {term}"),
						},
						_ => tracing::debug!("ignoring term definition for {term}"),
					}
				}
			},
			_ => tracing::debug!("ignoring malformed context {context}"),
		}
	}

	fn alias(&mut self, term: &str, iri: &str) {
		match vocabulary_term(iri) {
			Some(target) if target != term => {
				self.aliases.insert(term.to_string(), target.to_string());
			},
			Some(_) => {},
			None => tracing::debug!("term {term} is outside activitystreams vocabulary"),
		}
	}

	fn term(&self, key: &str) -> String {
		match key {
			"@id" => "id".to_string(),
			"@type" => "type".to_string(),
			_ => match self.aliases.get(key) {
				Some(target) => target.clone(),
				None => vocabulary_term(key).unwrap_or(key).to_string(),
			},
		}
	}

	fn normalize(&self, obj: Map) -> Map {
		let mut out = Map::new();
		for (key, value) in obj {
			if key == "@context" {
				continue;
			}
			let term = self.term(&key);
			if NATURAL_LANGUAGE_PROPERTIES.contains(&term.as_str()) {
				self.fold_natural(&mut out, &term, value);
			} else if term.strip_suffix("Map").is_some_and(|base| NATURAL_LANGUAGE_PROPERTIES.contains(&base)) {
				self.fold_language_map(&mut out, &term, value);
			} else {
				out.insert(term, self.normalize_value(value));
			}
		}
		out
	}

	fn normalize_value(&self, value: Value) -> Value {
		match value {
			Value::Object(mut obj) => match obj.remove("@value") {
				Some(inner) => inner,
				None => Value::Object(self.normalize(obj)),
			},
			Value::Array(mut values) if values.len() == 1 => self.normalize_value(values.remove(0)),
			Value::Array(values) => Value::Array(values.into_iter().map(|x| self.normalize_value(x)).collect()),
			x => x,
		}
	}

	fn fold_natural(&self, out: &mut Map, term: &str, value: Value) {
		match value {
			Value::String(text) => match &self.language {
				Some(lang) if !lang.is_undefined() => insert_language(out, term, lang.as_ref(), text),
				_ => {
					out.insert(term.to_string(), Value::String(text));
				},
			},
			Value::Object(mut obj) if obj.contains_key("@value") => {
				let lang = obj.get("@language").and_then(|x| x.as_str()).map(Language::from);
				match (obj.remove("@value"), lang) {
					(Some(Value::String(text)), Some(Language::Tag(tag))) => insert_language(out, term, &tag, text),
					(Some(inner), _) => {
						out.insert(term.to_string(), inner);
					},
					(None, _) => {},
				}
			},
			Value::Array(values) => {
				for value in values {
					self.fold_natural(out, term, value);
				}
			},
			x => {
				out.insert(term.to_string(), x);
			},
		}
	}

	fn fold_language_map(&self, out: &mut Map, term: &str, value: Value) {
		let Value::Object(languages) = value else {
			out.insert(term.to_string(), value);
			return;
		};
		let base = term.trim_end_matches("Map");
		for (lang, text) in languages {
			let text = match text {
				Value::Array(mut texts) if !texts.is_empty() => texts.remove(0),
				x => x,
			};
			let Value::String(text) = text else {
				tracing::debug!("dropping non-string value for {term}.{lang}");
				continue;
			};
			if lang == "@none" {
				out.insert(base.to_string(), Value::String(text));
			} else {
				insert_language(out, base, &lang, text);
			}
		}
	}
}

fn insert_language(out: &mut Map, term: &str, lang: &str, text: String) {
	let map = out
		.entry(format!("{term}Map"))
		.or_insert_with(|| Value::Object(Map::new()));
	if let Value::Object(map) = map {
		map.insert(lang.to_string(), Value::String(text));
	}
}
