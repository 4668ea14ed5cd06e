use crate::types::TypeRefKind;

/// A [`TypeRef`](crate::types::TypeRef) tree that violates the structural
/// rules the renderer depends on.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum MalformedTypeRef {
    /// A `NamedType` without a `Name` child, or a `ListType`/`NonNullType`
    /// without an inner type.
    #[error("`{kind}` type reference is missing its required child node")]
    MissingRequiredChild {
        kind: TypeRefKind,
    },

    /// A `NonNullType` whose inner rendering has no trailing `?` to strip.
    /// This happens when a `NonNullType` directly wraps another
    /// `NonNullType` (or a bare `Name`).
    #[error(
        "`NonNullType` wraps `{rendered}`, which has no nullable `?` suffix \
        to strip"
    )]
    MissingNullabilitySuffix {
        rendered: String,
    },
}
