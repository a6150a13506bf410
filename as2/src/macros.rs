#[derive(Debug, thiserror::Error)]
#[error("invalid type value")]
pub struct TypeValueError;


macro_rules! strenum {
	( $(pub enum $enum_name:ident { $($flat:ident),* ; $($deep:ident($inner:ident)),* };)+ ) => {
		$(
			#[derive(PartialEq, Eq, Debug, Clone, Copy)]
			pub enum $enum_name {
				$($flat,)*
				$($deep($inner),)*
			}

			impl AsRef<str> for $enum_name {
				fn as_ref(&self) -> &str {
					match self {
						$(Self::$flat => stringify!($flat),)*
						$(Self::$deep(x) => x.as_ref(),)*
					}
				}
			}

			impl std::fmt::Display for $enum_name {
				fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
					f.write_str(self.as_ref())
				}
			}

			impl TryFrom<&str> for $enum_name {
				type Error = $crate::macros::TypeValueError;

				fn try_from(value:&str) -> Result<Self, Self::Error> {
					match value {
						$(stringify!($flat) => Ok(Self::$flat),)*
						_ => {
							$(
								if let Ok(x) = $inner::try_from(value) {
									return Ok(Self::$deep(x));
								}
							)*
							Err($crate::macros::TypeValueError)
						},
					}
				}
			}
		)*
	};
}

pub(crate) use strenum;

macro_rules! properties {
	( pub enum $enum_name:ident { $($(#[$meta:meta])* $variant:ident => $key:literal $(| $alias:literal)*),* $(,)? } ) => {
		#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
		pub enum $enum_name {
			$($(#[$meta])* $variant,)*
			/// any member key outside the known vocabulary
			Unrecognized,
		}

		impl $enum_name {
			/// every recognized property, in declaration order
			pub const ALL: &'static [$enum_name] = &[$(Self::$variant,)*];

			/// canonical wire key, empty for unrecognized members
			pub fn key(&self) -> &'static str {
				match self {
					$(Self::$variant => $key,)*
					Self::Unrecognized => "",
				}
			}
		}

		impl AsRef<str> for $enum_name {
			fn as_ref(&self) -> &str {
				self.key()
			}
		}

		impl std::fmt::Display for $enum_name {
			fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
				f.write_str(self.as_ref())
			}
		}

		impl From<&str> for $enum_name {
			fn from(value: &str) -> Self {
				match value {
					$($key $(| $alias)* => Self::$variant,)*
					_ => Self::Unrecognized,
				}
			}
		}
	};
}

pub(crate) use properties;

macro_rules! getter {
	($name:ident -> &str) => {
		pub fn $name(&self) -> $crate::Field<&str> {
			self.$name.as_deref().ok_or($crate::FieldErr(stringify!($name)))
		}
	};

	($name:ident::$rename:ident -> &str) => {
		pub fn $name(&self) -> $crate::Field<&str> {
			self.$name.as_deref().ok_or($crate::FieldErr(stringify!($rename)))
		}
	};

	($name:ident -> u64) => {
		pub fn $name(&self) -> $crate::Field<u64> {
			self.$name.ok_or($crate::FieldErr(stringify!($name)))
		}
	};
}

pub(crate) use getter;

macro_rules! setter {
	($name:ident -> &str) => {
		paste::item! {
			pub fn [< set_$name >](mut self, val: Option<&str>) -> Self {
				self.$name = val.map(|x| x.to_string());
				self
			}
		}
	};

	($name:ident -> node) => {
		paste::item! {
			pub fn [< set_$name >](mut self, val: $crate::Node) -> Self {
				self.$name = val;
				self
			}
		}
	};

	($name:ident -> $t:ty) => {
		paste::item! {
			pub fn [< set_$name >](mut self, val: Option<$t>) -> Self {
				self.$name = val;
				self
			}
		}
	};
}

pub(crate) use setter;

pub(crate) trait InsertValue {
	fn insert_node(&mut self, k: crate::Property, v: &crate::Node);
	fn insert_str(&mut self, k: crate::Property, v: Option<&str>);
	fn insert_uint(&mut self, k: crate::Property, v: Option<u64>);
	fn insert_natural(&mut self, k: crate::Property, map: crate::Property, v: Option<&crate::NaturalValue>);
}

impl InsertValue for serde_json::Map<String, serde_json::Value> {
	fn insert_node(&mut self, k: crate::Property, node: &crate::Node) {
		if let Some(obj) = node.to_json_embedded() {
			self.insert(
				k.as_ref().to_string(),
				serde_json::Value::Object(obj),
			);
		}
	}

	fn insert_str(&mut self, k: crate::Property, v: Option<&str>) {
		if let Some(v) = v {
			self.insert(
				k.as_ref().to_string(),
				serde_json::Value::String(v.to_string()),
			);
		}
	}

	fn insert_uint(&mut self, k: crate::Property, v: Option<u64>) {
		if let Some(v) = v {
			self.insert(
				k.as_ref().to_string(),
				serde_json::Value::Number(serde_json::Number::from(v)),
			);
		}
	}

	fn insert_natural(&mut self, k: crate::Property, map: crate::Property, v: Option<&crate::NaturalValue>) {
		let Some(natural) = v else { return };
		if natural.has_multiple_languages() {
			let mut languages = serde_json::Map::new();
			for (lang, text) in natural.all_values() {
				languages.insert(lang.as_ref().to_string(), serde_json::Value::String(text.to_string()));
			}
			self.insert(map.as_ref().to_string(), serde_json::Value::Object(languages));
		} else if let Some((_, text)) = natural.all_values().next() {
			// a lone value is written bare whatever its language
			self.insert(k.as_ref().to_string(), serde_json::Value::String(text.to_string()));
		}
	}
}

pub(crate) trait ReadValue {
	fn read_str(&self, k: crate::Property) -> Result<&str, crate::DecodeError>;
	fn read_uint(&self, k: crate::Property) -> Result<u64, crate::DecodeError>;
	fn read_id(&self) -> Result<url::Url, crate::DecodeError>;
	fn read_href(&self) -> Result<url::Url, crate::DecodeError>;
	fn read_natural(&self, k: crate::Property, into: Option<crate::NaturalValueBuilder>) -> Result<crate::NaturalValueBuilder, crate::DecodeError>;
}

impl ReadValue for serde_json::Value {
	fn read_str(&self, k: crate::Property) -> Result<&str, crate::DecodeError> {
		self.as_str().ok_or(crate::DecodeError::UnexpectedValue { property: k.key(), expected: "a string" })
	}

	fn read_uint(&self, k: crate::Property) -> Result<u64, crate::DecodeError> {
		let parsed = match self {
			serde_json::Value::Number(n) => n.as_u64(),
			serde_json::Value::String(s) => s.trim().parse::<u64>().ok(),
			_ => None,
		};
		parsed.ok_or_else(|| crate::DecodeError::MalformedNumber { property: k.key(), value: self.clone() })
	}

	fn read_id(&self) -> Result<url::Url, crate::DecodeError> {
		let value = self.read_str(crate::Property::Id)?;
		url::Url::parse(value)
			.map_err(|source| crate::DecodeError::InvalidId { value: value.to_string(), source })
	}

	fn read_href(&self) -> Result<url::Url, crate::DecodeError> {
		let value = self.read_str(crate::Property::Href)?;
		url::Url::parse(value)
			.map_err(|source| crate::DecodeError::InvalidHref { value: value.to_string(), source })
	}

	fn read_natural(&self, k: crate::Property, into: Option<crate::NaturalValueBuilder>) -> Result<crate::NaturalValueBuilder, crate::DecodeError> {
		let mut builder = into.unwrap_or_else(crate::NaturalValue::builder);
		match self {
			serde_json::Value::String(text) => builder = builder.with_value(text),
			serde_json::Value::Object(languages) => {
				for (lang, text) in languages {
					let text = text.as_str()
						.ok_or(crate::DecodeError::UnexpectedValue { property: k.key(), expected: "a language map of strings" })?;
					builder = builder.with_language_value(lang, text);
				}
			},
			_ => return Err(crate::DecodeError::UnexpectedValue { property: k.key(), expected: "a string or a language map" }),
		}
		Ok(builder)
	}
}
