use crate::named_ref::DerefByNameError;
use crate::operation::NamedVariableRef;
use crate::operation::OperationDocument;
use crate::operation::SelectionSet;
use crate::operation::Variable;

/// A selection gated by `@include(if: $var)` (`inverted == false`) or
/// `@skip(if: $var)` (`inverted == true`).
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BooleanConditionSelection {
    #[serde(rename = "variableName")]
    pub(crate) variable: NamedVariableRef,
    pub(crate) inverted: bool,
    pub(crate) selection_set: Option<SelectionSet>,
}
impl BooleanConditionSelection {
    /// `true` for `@skip`, `false` for `@include`.
    pub fn inverted(&self) -> bool {
        self.inverted
    }

    pub fn selection_set(&self) -> Option<&SelectionSet> {
        self.selection_set.as_ref()
    }

    /// Look up the gating variable among the declared variables of
    /// `operation`.
    pub fn variable<'a>(
        &self,
        operation: &'a OperationDocument,
    ) -> Result<&'a Variable, DerefByNameError> {
        self.variable.deref(&operation.variables)
    }

    pub fn variable_name(&self) -> &str {
        self.variable.name()
    }
}
