use crate::NodeDecodeError;
use crate::types::MalformedTypeRef;
use crate::types::TypeRefKind;

/// A (possibly wrapped) reference to a named schema type, as annotated on a
/// [`Variable`](crate::operation::Variable), an
/// [`Argument`](crate::operation::Argument), a
/// [`FieldSelection`](crate::operation::FieldSelection), or a
/// [`SchemaField`](crate::types::SchemaField).
///
/// Equality is structural: two independently decoded trees are equal when
/// they have the same variant and equal children at every depth.
#[derive(
    Clone,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
#[serde(into = "RawTypeRef", try_from = "RawTypeRef")]
pub enum TypeRef {
    /// A bare identifier. Only valid as the child of a `NamedType`, or on its
    /// own as a terminal node.
    Name(String),

    /// A nullable reference to the type identified by its `Name` child.
    NamedType(Box<TypeRef>),

    /// A nullable list of the inner type.
    ListType(Box<TypeRef>),

    /// The inner type, forced non-null.
    NonNullType(Box<TypeRef>),
}

impl TypeRef {
    pub fn name(value: impl Into<String>) -> Self {
        Self::Name(value.into())
    }

    /// A nullable reference to the named type (`NamedType(Name(value))`).
    pub fn named(value: impl Into<String>) -> Self {
        Self::NamedType(Box::new(Self::name(value)))
    }

    pub fn non_null_named(value: impl Into<String>) -> Self {
        Self::non_null(Self::named(value))
    }

    pub fn list(of: TypeRef) -> Self {
        Self::ListType(Box::new(of))
    }

    pub fn non_null(of: TypeRef) -> Self {
        Self::NonNullType(Box::new(of))
    }

    pub fn non_null_list(of: TypeRef) -> Self {
        Self::non_null(Self::list(of))
    }

    /// The value of the terminal `Name` node at the bottom of this tree.
    ///
    /// Returns `None` only for a `NamedType` whose child is not a `Name`.
    pub fn innermost_name(&self) -> Option<&str> {
        match self {
            Self::Name(value) => Some(value.as_str()),
            Self::NamedType(name) => match name.as_ref() {
                Self::Name(value) => Some(value.as_str()),
                _ => None,
            },
            Self::ListType(of) | Self::NonNullType(of) => of.innermost_name(),
        }
    }

    pub fn kind(&self) -> TypeRefKind {
        match self {
            Self::Name(_) => TypeRefKind::Name,
            Self::NamedType(_) => TypeRefKind::NamedType,
            Self::ListType(_) => TypeRefKind::ListType,
            Self::NonNullType(_) => TypeRefKind::NonNullType,
        }
    }

    /// Indicates if this reference is nullable at its outermost level.
    pub fn nullable(&self) -> bool {
        !matches!(self, Self::NonNullType(_))
    }

    /// Render this reference into target-language type syntax.
    ///
    /// Every named type and every list renders as nullable (a trailing `?`);
    /// a `NonNullType` removes exactly one trailing `?` from the rendering of
    /// its inner type:
    ///
    /// | reference       | rendering       |
    /// |-----------------|-----------------|
    /// | `Episode`       | `Episode?`      |
    /// | `Episode!`      | `Episode`       |
    /// | `[Character]`   | `[Character?]?` |
    /// | `[Character!]`  | `[Character]?`  |
    /// | `[Character]!`  | `[Character?]`  |
    /// | `[Character!]!` | `[Character]`   |
    ///
    /// Fails with [`MalformedTypeRef::MissingNullabilitySuffix`] when a
    /// `NonNullType` has nothing to strip, and with
    /// [`MalformedTypeRef::MissingRequiredChild`] when a `NamedType` does not
    /// wrap a `Name`.
    pub fn render(&self) -> Result<String, MalformedTypeRef> {
        match self {
            Self::Name(value) => Ok(value.to_owned()),

            Self::NamedType(name) => match name.as_ref() {
                Self::Name(value) => Ok(format!("{value}?")),
                _ => Err(MalformedTypeRef::MissingRequiredChild {
                    kind: TypeRefKind::NamedType,
                }),
            },

            Self::ListType(of) => Ok(format!("[{}]?", of.render()?)),

            Self::NonNullType(of) => {
                let rendered = of.render()?;
                match rendered.strip_suffix('?') {
                    Some(non_null) => Ok(non_null.to_string()),
                    None => Err(MalformedTypeRef::MissingNullabilitySuffix {
                        rendered,
                    }),
                }
            },
        }
    }
}

/// Formats the reference in GraphQL type syntax (`[Character!]!`).
impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name(value) => f.write_str(value),
            Self::NamedType(name) => write!(f, "{name}"),
            Self::ListType(of) => write!(f, "[{of}]"),
            Self::NonNullType(of) => write!(f, "{of}!"),
        }
    }
}

/// Payload shape of a [`TypeRef`] node: a `kind` discriminator plus whichever
/// of `value`/`name`/`type` that kind carries.
#[derive(serde::Deserialize, serde::Serialize)]
struct RawTypeRef {
    kind: TypeRefKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<Box<TypeRef>>,

    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    of: Option<Box<TypeRef>>,
}

impl std::convert::TryFrom<RawTypeRef> for TypeRef {
    type Error = NodeDecodeError;

    fn try_from(raw: RawTypeRef) -> Result<Self, Self::Error> {
        let kind = raw.kind;
        let missing_child = || MalformedTypeRef::MissingRequiredChild { kind };

        Ok(match kind {
            TypeRefKind::Name => Self::Name(raw.value.ok_or(
                NodeDecodeError::MissingField {
                    node_kind: TypeRefKind::Name.name(),
                    field_name: "value",
                },
            )?),

            TypeRefKind::NamedType => match raw.name {
                Some(name) if matches!(name.as_ref(), Self::Name(_)) =>
                    Self::NamedType(name),
                _ => return Err(missing_child().into()),
            },

            TypeRefKind::ListType =>
                Self::ListType(raw.of.ok_or_else(missing_child)?),

            TypeRefKind::NonNullType =>
                Self::NonNullType(raw.of.ok_or_else(missing_child)?),
        })
    }
}

impl std::convert::From<TypeRef> for RawTypeRef {
    fn from(type_ref: TypeRef) -> Self {
        let kind = type_ref.kind();
        let mut raw = RawTypeRef {
            kind,
            value: None,
            name: None,
            of: None,
        };
        match type_ref {
            TypeRef::Name(value) => raw.value = Some(value),
            TypeRef::NamedType(name) => raw.name = Some(name),
            TypeRef::ListType(of) | TypeRef::NonNullType(of) => raw.of = Some(of),
        }
        raw
    }
}
