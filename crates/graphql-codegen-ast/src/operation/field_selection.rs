use crate::operation::Argument;
use crate::operation::SelectionSet;
use crate::types::TypeRef;

/// A selected field.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSelection {
    pub(crate) name: String,
    pub(crate) type_node: TypeRef,
    pub(crate) response_key: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) is_deprecated: Option<bool>,
    pub(crate) args: Option<Vec<Argument>>,
    pub(crate) selection_set: Option<SelectionSet>,
}
impl FieldSelection {
    /// Arguments passed to this field, or `None` when the payload carried no
    /// argument list at all (e.g. for `__typename`).
    pub fn args(&self) -> Option<&[Argument]> {
        self.args.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_deprecated(&self) -> Option<bool> {
        self.is_deprecated
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The key this field's value is returned under: its alias if one was
    /// given, otherwise its name.
    pub fn response_key(&self) -> Option<&str> {
        self.response_key.as_deref()
    }

    /**
     * If a response key was provided for this selection, return it.
     * Otherwise return the name of the field.
     */
    pub fn selected_name(&self) -> &str {
        self.response_key().unwrap_or_else(|| self.name())
    }

    /// Present iff the field's result type is composite.
    pub fn selection_set(&self) -> Option<&SelectionSet> {
        self.selection_set.as_ref()
    }

    pub fn type_node(&self) -> &TypeRef {
        &self.type_node
    }
}
