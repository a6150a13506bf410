use serde::Serialize;

#[serde_inline_default::serde_inline_default]
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize, serde_default::DefaultFromSerde)]
pub struct Config {
	#[serde(default)]
	pub writer: WriterConfig,

	#[serde(default)]
	pub reader: ReaderConfig,
}

#[serde_inline_default::serde_inline_default]
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize, serde_default::DefaultFromSerde)]
pub struct WriterConfig {
	#[serde_inline_default(true)]
	/// render documents on multiple indented lines
	pub pretty: bool,

	#[serde_inline_default(4)]
	/// spaces per indentation level, only used when pretty
	pub indent: usize,
}

#[serde_inline_default::serde_inline_default]
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize, serde_default::DefaultFromSerde)]
pub struct ReaderConfig {
	#[serde(default)]
	/// refuse documents which don't declare the activitystreams context
	pub require_context: bool,
}

impl Config {
	pub fn load(path: Option<&std::path::PathBuf>) -> Self {
		let Some(cfg_path) = path else { return Config::default() };
		match std::fs::read_to_string(cfg_path) {
			Ok(x) => match toml::from_str(&x) {
				Ok(cfg) => return cfg,
				Err(e) => tracing::error!("failed parsing config file: {e}"),
			},
			Err(e) => tracing::error!("failed reading config file: {e}"),
		}
		Config::default()
	}
}

impl WriterConfig {
	pub fn render(&self, obj: &crate::Map) -> String {
		let mut buf = Vec::new();
		let res = if self.pretty {
			let indent = " ".repeat(self.indent);
			let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
			let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
			obj.serialize(&mut serializer)
		} else {
			serde_json::to_writer(&mut buf, obj)
		};
		if let Err(e) = res {
			tracing::error!("failed serializing json object: {e}");
		}
		String::from_utf8_lossy(&buf).into_owned()
	}
}

#[cfg(test)]
mod test {
	use super::{Config, WriterConfig};

	#[test]
	fn defaults_apply_to_missing_keys() {
		let cfg: Config = toml::from_str("[writer]\nindent = 2\n").unwrap();
		assert!(cfg.writer.pretty);
		assert_eq!(cfg.writer.indent, 2);
		assert!(!cfg.reader.require_context);
	}

	#[test]
	fn missing_config_file_falls_back_to_defaults() {
		let cfg = Config::load(Some(&std::path::PathBuf::from("/definitely/not/here.toml")));
		assert!(cfg.writer.pretty);
		assert_eq!(cfg.writer.indent, 4);
	}

	#[test]
	fn compact_writer_renders_one_line() {
		let mut obj = crate::Map::new();
		obj.insert("type".to_string(), serde_json::json!("Object"));
		obj.insert("name".to_string(), serde_json::json!("x"));

		let compact = WriterConfig { pretty: false, indent: 4 }.render(&obj);
		assert_eq!(compact, r#"{"type":"Object","name":"x"}"#);

		let pretty = WriterConfig { pretty: true, indent: 2 }.render(&obj);
		assert_eq!(pretty, "{\n  \"type\": \"Object\",\n  \"name\": \"x\"\n}");
	}
}
