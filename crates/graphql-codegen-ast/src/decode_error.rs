use crate::operation::SelectionKind;
use crate::types::MalformedTypeRef;

/// Failure to decode an [`AstDocument`](crate::AstDocument). Decoding is
/// all-or-nothing: any of these discards the whole document.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum DecodeError {
    #[error(
        "Fragment `{fragment_name}` is defined more than once (first in \
        `{first_file_path}`, again in `{second_file_path}`)."
    )]
    DuplicateFragmentName {
        fragment_name: String,
        first_file_path: String,
        second_file_path: String,
    },

    /// The payload does not have the shape of an AST document. `path` is the
    /// JSON path of the offending node (e.g.
    /// `operations[0].selectionSet.selections[2].typeNode`).
    #[error("Invalid AST payload at `{path}`: {message}")]
    InvalidPayload {
        path: String,
        message: String,
    },
}
impl DecodeError {
    pub(crate) fn from_path_error<E: std::fmt::Display>(
        err: serde_path_to_error::Error<E>,
    ) -> Self {
        Self::InvalidPayload {
            path: err.path().to_string(),
            message: err.into_inner().to_string(),
        }
    }
}

/// A structural violation within a single payload node. These are raised
/// while the node is being decoded and surface to callers inside
/// [`DecodeError::InvalidPayload`].
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum NodeDecodeError {
    #[error("object has more than one entry with key `{key}`")]
    DuplicateKey {
        key: String,
    },

    #[error("`{node_kind}` node is missing required field `{field_name}`")]
    MissingField {
        node_kind: &'static str,
        field_name: &'static str,
    },

    #[error(transparent)]
    MalformedTypeRef(#[from] MalformedTypeRef),

    #[error("invalid `{kind}` selection at `{path}`: {message}")]
    InvalidSelection {
        kind: SelectionKind,
        path: String,
        message: String,
    },

    #[error(
        "number `{number}` cannot be represented as an integer or float \
        without losing precision"
    )]
    UnrepresentableNumber {
        number: String,
    },
}
