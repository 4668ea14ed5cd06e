mod malformed_type_ref;
mod schema_type_kind;
mod schema_type_usage;
mod type_ref;
mod type_ref_kind;

pub use malformed_type_ref::MalformedTypeRef;
pub use schema_type_kind::SchemaTypeKind;
pub use schema_type_usage::SchemaEnumValue;
pub use schema_type_usage::SchemaField;
pub use schema_type_usage::SchemaTypeUsage;
pub use type_ref::TypeRef;
pub use type_ref_kind::TypeRefKind;
