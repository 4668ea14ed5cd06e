mod argument;
mod boolean_condition_selection;
mod field_selection;
mod fragment;
mod fragment_registry;
mod fragment_registry_builder;
mod fragment_spread_selection;
mod operation_document;
mod operation_kind;
mod selection;
mod selection_kind;
mod selection_set;
mod type_condition_selection;
mod variable;

pub use argument::Argument;
pub use boolean_condition_selection::BooleanConditionSelection;
pub use field_selection::FieldSelection;
pub use fragment::Fragment;
pub use fragment::FragmentRef;
pub use fragment_registry::FragmentRegistry;
pub(crate) use fragment_registry_builder::FragmentRegistryBuilder;
pub use fragment_spread_selection::FragmentSpreadSelection;
pub use operation_document::OperationDocument;
pub use operation_kind::OperationKind;
pub use selection::Selection;
pub use selection_kind::SelectionKind;
pub use selection_set::SelectionSet;
pub use type_condition_selection::TypeConditionSelection;
pub use variable::NamedVariableRef;
pub use variable::Variable;

#[cfg(test)]
mod tests;
