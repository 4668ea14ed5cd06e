//! The intermediate representation consumed by GraphQL-to-native-type code
//! generators.
//!
//! An [`AstDocument`] is decoded once from a structured (JSON) payload that an
//! upstream GraphQL tool produced for a set of operations, fragments, and the
//! schema types they use. The document is read-only after decoding, so it can
//! be shared by reference across any number of emitters.
//!
//! Type references are rendered into target-language type syntax with
//! [`TypeRef::render()`](types::TypeRef::render), which threads nullability
//! through the tree as a trailing `?` suffix:
//!
//! ```
//! use graphql_codegen_ast::types::TypeRef;
//!
//! let type_ref = TypeRef::non_null_list(TypeRef::named("Character"));
//! assert_eq!(type_ref.render().unwrap(), "[Character?]");
//! assert_eq!(type_ref.to_string(), "[Character]!");
//! ```

mod ast_document;
mod decode_error;
pub mod named_ref;
pub mod operation;
mod optional;
pub mod types;
mod unique_key_json;
mod value;

pub use ast_document::AstDocument;
pub use decode_error::DecodeError;
pub use decode_error::NodeDecodeError;
pub use optional::OptionalBoolExt;
pub use optional::RequiredExt;
pub use optional::UnwrapError;
pub use value::ArgumentValue;

#[cfg(test)]
mod tests;
