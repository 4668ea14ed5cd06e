use crate::named_ref::DerefByName;
use crate::named_ref::DerefByNameError;
use crate::named_ref::NamedRef;
use crate::types::TypeRef;

/// A variable declared by an
/// [`OperationDocument`](crate::operation::OperationDocument).
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Variable {
    pub(crate) name: String,
    #[serde(rename = "type", alias = "typeNode")]
    pub(crate) type_node: TypeRef,
}
impl Variable {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_node(&self) -> &TypeRef {
        &self.type_node
    }
}
impl DerefByName for Variable {
    type Source = Vec<Variable>;

    fn deref_name<'a>(
        variables: &'a Self::Source,
        name: &str,
    ) -> Result<&'a Self, DerefByNameError> {
        variables.iter()
            .find(|variable| variable.name == name)
            .ok_or_else(|| DerefByNameError::DanglingReference(name.to_string()))
    }
}

pub type NamedVariableRef = NamedRef<
    /* TSource = */ Vec<Variable>,
    /* TResource = */ Variable,
>;
