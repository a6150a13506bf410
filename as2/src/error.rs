#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
	#[error("invalid identifier '{value}': {source}")]
	InvalidId {
		value: String,
		source: url::ParseError,
	},

	#[error("invalid href '{value}': {source}")]
	InvalidHref {
		value: String,
		source: url::ParseError,
	},

	#[error("malformed numeric field '{property}': {value}")]
	MalformedNumber {
		property: &'static str,
		value: serde_json::Value,
	},

	#[error("unexpected value for '{property}', expected {expected}")]
	UnexpectedValue {
		property: &'static str,
		expected: &'static str,
	},
}

#[derive(Debug, thiserror::Error)]
pub enum CompactError {
	#[error("malformed json document: {0}")]
	Json(#[from] serde_json::Error),

	#[error("json-ld document must be an object")]
	NotAnObject,

	#[error("document is not in the activitystreams context")]
	MissingContext,
}
