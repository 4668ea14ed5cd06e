/// The discriminator of a [`TypeRef`](crate::types::TypeRef) node, exactly
/// as it is spelled in the `kind` field of an AST payload.
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
pub enum TypeRefKind {
    ListType,
    Name,
    NamedType,
    NonNullType,
}
impl TypeRefKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ListType => "ListType",
            Self::Name => "Name",
            Self::NamedType => "NamedType",
            Self::NonNullType => "NonNullType",
        }
    }
}
impl std::fmt::Display for TypeRefKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
