//! json-ld context handling for activitystreams documents

use serde_json::Value;

use crate::{Map, CONTEXT};

#[cfg(feature = "jsonld")]
mod compaction;
#[cfg(feature = "jsonld")]
pub use compaction::{compact, compact_with};

pub trait LD {
	fn ld_context(self) -> Self;
}

impl LD for Map {
	fn ld_context(self) -> Self {
		let mut out = Map::new();
		out.insert("@context".to_string(), Value::String(CONTEXT.to_string()));
		for (k, v) in self {
			if k != "@context" {
				out.insert(k, v);
			}
		}
		out
	}
}
