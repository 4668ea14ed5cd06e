/// The `kind` of a [`SchemaTypeUsage`](crate::types::SchemaTypeUsage).
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
pub enum SchemaTypeKind {
    EnumType,
    InputObjectType,
    InterfaceType,
    ObjectType,
    ScalarType,
    UnionType,
}
impl SchemaTypeKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::EnumType => "EnumType",
            Self::InputObjectType => "InputObjectType",
            Self::InterfaceType => "InterfaceType",
            Self::ObjectType => "ObjectType",
            Self::ScalarType => "ScalarType",
            Self::UnionType => "UnionType",
        }
    }
}
impl std::fmt::Display for SchemaTypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
