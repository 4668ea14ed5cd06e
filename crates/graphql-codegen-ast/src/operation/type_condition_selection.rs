use crate::operation::SelectionSet;
use crate::types::TypeRef;

/// An inline fragment (`... on Human { ... }`) that applies only when the
/// runtime type matches [`TypeConditionSelection::type_node()`].
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeConditionSelection {
    pub(crate) type_node: TypeRef,
    pub(crate) selection_set: Option<SelectionSet>,
}
impl TypeConditionSelection {
    pub fn selection_set(&self) -> Option<&SelectionSet> {
        self.selection_set.as_ref()
    }

    pub fn type_node(&self) -> &TypeRef {
        &self.type_node
    }
}
