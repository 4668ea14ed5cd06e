/// The `kind` discriminator of a [`Selection`](crate::operation::Selection).
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
pub enum SelectionKind {
    BooleanCondition,
    Field,
    FragmentSpread,
    TypeCondition,
}
impl SelectionKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::BooleanCondition => "BooleanCondition",
            Self::Field => "Field",
            Self::FragmentSpread => "FragmentSpread",
            Self::TypeCondition => "TypeCondition",
        }
    }
}
impl std::fmt::Display for SelectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
