#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("missing field '{0}'")]
pub struct FieldErr(pub &'static str);

pub type Field<T> = Result<T, FieldErr>;

pub(crate) trait OptionalField<T> {
	fn field(self, name: &'static str) -> Field<T>;
}

impl<T> OptionalField<T> for Option<T> {
	fn field(self, name: &'static str) -> Field<T> {
		self.ok_or(FieldErr(name))
	}
}
