use crate::ArgumentValue;
use crate::types::TypeRef;

/// An argument passed to a selected field.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Argument {
    pub(crate) name: String,
    pub(crate) value: ArgumentValue,
    pub(crate) type_node: TypeRef,
}
impl Argument {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The schema-declared type of this argument. This is independent of the
    /// shape of [`Argument::value()`].
    pub fn type_node(&self) -> &TypeRef {
        &self.type_node
    }

    pub fn value(&self) -> &ArgumentValue {
        &self.value
    }
}
