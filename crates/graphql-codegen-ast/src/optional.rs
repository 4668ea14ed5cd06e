//! Helpers for the optional, kind-specific values of the selection tree.
//!
//! Optional booleans such as [`is_deprecated`](crate::operation::Selection::is_deprecated)
//! are tri-state: absent means "not applicable to this kind of selection",
//! which is distinct from `false`. These helpers are for call sites that only
//! need a yes/no answer or that require a value to be present.

pub trait OptionalBoolExt {
    /// Coerces an absent value to `false`.
    fn bool_value(self) -> bool;
}
impl OptionalBoolExt for Option<bool> {
    fn bool_value(self) -> bool {
        self.unwrap_or(false)
    }
}

pub trait RequiredExt<T> {
    /// Unwraps a value the caller requires to be present, naming it (`what`)
    /// in the error when it is absent.
    fn required(self, what: &'static str) -> Result<T, UnwrapError>;
}
impl<T> RequiredExt<T> for Option<T> {
    fn required(self, what: &'static str) -> Result<T, UnwrapError> {
        self.ok_or(UnwrapError::UnexpectedNone { what })
    }
}

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum UnwrapError {
    #[error("Expected {what} to be present, but it was absent.")]
    UnexpectedNone {
        what: &'static str,
    },
}
