use crate::operation::OperationKind;
use crate::operation::SelectionSet;
use crate::operation::Variable;

/// One query, mutation, or subscription.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationDocument {
    pub(crate) operation_name: String,
    pub(crate) operation_type: OperationKind,
    pub(crate) root_type: String,
    pub(crate) file_path: String,
    pub(crate) source: String,
    pub(crate) variables: Vec<Variable>,
    pub(crate) selection_set: SelectionSet,
}
impl OperationDocument {
    pub fn file_path(&self) -> &str {
        self.file_path.as_str()
    }

    pub fn name(&self) -> &str {
        self.operation_name.as_str()
    }

    pub fn operation_kind(&self) -> OperationKind {
        self.operation_type
    }

    /// Name of the schema's root type for this operation's kind (e.g.
    /// `Mutation`).
    pub fn root_type(&self) -> &str {
        self.root_type.as_str()
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }

    /// The raw GraphQL text of the operation, without any fragments it
    /// spreads. See
    /// [`AstDocument::source_with_fragments()`](crate::AstDocument::source_with_fragments).
    pub fn source(&self) -> &str {
        self.source.as_str()
    }

    /// Look up a declared variable by name.
    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.variables.iter().find(|variable| variable.name() == name)
    }

    /// Declared variables in declaration order.
    pub fn variables(&self) -> &[Variable] {
        self.variables.as_slice()
    }
}
