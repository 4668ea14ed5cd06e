use crate::NodeDecodeError;
use crate::types::SchemaTypeKind;
use crate::types::TypeRef;

/// A schema type (enum, input object, ...) that the decoded operations and
/// fragments reference, with the members an emitter needs to generate it.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(try_from = "RawSchemaTypeUsage")]
pub struct SchemaTypeUsage {
    pub(crate) name: String,
    pub(crate) kind: SchemaTypeKind,
    pub(crate) description: Option<String>,
    pub(crate) members: SchemaTypeMembers,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum SchemaTypeMembers {
    Fields(Vec<SchemaField>),
    None,
    Values(Vec<SchemaEnumValue>),
}

impl SchemaTypeUsage {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The fields of an input object, object, or interface type. `None` for
    /// every other kind.
    pub fn fields(&self) -> Option<&[SchemaField]> {
        if let SchemaTypeMembers::Fields(fields) = &self.members {
            Some(fields.as_slice())
        } else {
            None
        }
    }

    pub fn kind(&self) -> SchemaTypeKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The values of an enum type. `None` for every other kind.
    pub fn values(&self) -> Option<&[SchemaEnumValue]> {
        if let SchemaTypeMembers::Values(values) = &self.members {
            Some(values.as_slice())
        } else {
            None
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaField {
    pub(crate) name: String,
    #[serde(rename = "type", alias = "typeNode")]
    pub(crate) type_node: TypeRef,
    pub(crate) description: Option<String>,
    #[serde(default)]
    pub(crate) is_deprecated: bool,
}
impl SchemaField {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_deprecated(&self) -> bool {
        self.is_deprecated
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_node(&self) -> &TypeRef {
        &self.type_node
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaEnumValue {
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    #[serde(default)]
    pub(crate) is_deprecated: bool,
}
impl SchemaEnumValue {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_deprecated(&self) -> bool {
        self.is_deprecated
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

#[derive(serde::Deserialize)]
struct RawSchemaTypeUsage {
    name: String,
    kind: SchemaTypeKind,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    fields: Option<Vec<SchemaField>>,
    #[serde(default)]
    values: Option<Vec<SchemaEnumValue>>,
}

impl std::convert::TryFrom<RawSchemaTypeUsage> for SchemaTypeUsage {
    type Error = NodeDecodeError;

    fn try_from(raw: RawSchemaTypeUsage) -> Result<Self, Self::Error> {
        let kind = raw.kind;
        let missing = |field_name| NodeDecodeError::MissingField {
            node_kind: kind.name(),
            field_name,
        };

        let members = match kind {
            SchemaTypeKind::EnumType =>
                SchemaTypeMembers::Values(raw.values.ok_or_else(|| missing("values"))?),

            SchemaTypeKind::InputObjectType
                | SchemaTypeKind::InterfaceType
                | SchemaTypeKind::ObjectType
                => SchemaTypeMembers::Fields(raw.fields.ok_or_else(|| missing("fields"))?),

            SchemaTypeKind::ScalarType
                | SchemaTypeKind::UnionType
                => SchemaTypeMembers::None,
        };

        Ok(Self {
            name: raw.name,
            kind,
            description: raw.description,
            members,
        })
    }
}
