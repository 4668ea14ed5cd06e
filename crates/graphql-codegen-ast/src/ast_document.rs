use crate::DecodeError;
use crate::named_ref::DerefByNameError;
use crate::operation::Fragment;
use crate::operation::FragmentRegistry;
use crate::operation::FragmentRegistryBuilder;
use crate::operation::OperationDocument;
use crate::types::SchemaTypeUsage;
use indexmap::IndexMap;

/// The decoded operations, fragments, and used schema types of one payload.
///
/// An `AstDocument` is immutable once decoded. Emitters hold it by shared
/// reference; it is `Send + Sync` and may be read from many threads at once.
#[derive(Clone, Debug, PartialEq)]
pub struct AstDocument {
    operations: Vec<OperationDocument>,
    fragments: FragmentRegistry,
    types_used: Vec<SchemaTypeUsage>,
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAstDocument {
    operations: Vec<OperationDocument>,
    fragments: Vec<Fragment>,
    types_used: Vec<SchemaTypeUsage>,
}

impl AstDocument {
    /// Decode a document from JSON text. Trailing non-whitespace after the
    /// document is an error.
    pub fn from_json_str(json: &str) -> Result<Self, DecodeError> {
        let mut deserializer = serde_json::Deserializer::from_str(json);
        let doc = Self::decode(&mut deserializer)?;
        deserializer.end().map_err(end_of_input_error)?;
        Ok(doc)
    }

    pub fn from_json_slice(json: &[u8]) -> Result<Self, DecodeError> {
        let mut deserializer = serde_json::Deserializer::from_slice(json);
        let doc = Self::decode(&mut deserializer)?;
        deserializer.end().map_err(end_of_input_error)?;
        Ok(doc)
    }

    pub fn from_json_value(json: serde_json::Value) -> Result<Self, DecodeError> {
        Self::decode(json)
    }

    /// Decode a document from a byte stream. The reader is consumed to its
    /// end; wrap it in a [`std::io::BufReader`] if it is unbuffered.
    pub fn from_reader(reader: impl std::io::Read) -> Result<Self, DecodeError> {
        let mut deserializer = serde_json::Deserializer::from_reader(reader);
        let doc = Self::decode(&mut deserializer)?;
        deserializer.end().map_err(end_of_input_error)?;
        Ok(doc)
    }

    fn decode<'de, D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, DecodeError> {
        let raw: RawAstDocument =
            serde_path_to_error::deserialize(deserializer)
                .map_err(DecodeError::from_path_error)?;

        let mut registry_builder = FragmentRegistryBuilder::new();
        for fragment in raw.fragments {
            registry_builder.add_fragment(fragment)?;
        }

        let doc = Self {
            operations: raw.operations,
            fragments: registry_builder.build(),
            types_used: raw.types_used,
        };
        log::debug!(
            "Decoded AST document: {} operation(s), {} fragment(s), {} used \
            type(s).",
            doc.operations.len(),
            doc.fragments.len(),
            doc.types_used.len(),
        );
        Ok(doc)
    }

    pub fn fragment(&self, name: &str) -> Option<&Fragment> {
        self.fragments.get(name)
    }

    pub fn fragments(&self) -> &FragmentRegistry {
        &self.fragments
    }

    pub fn operation(&self, name: &str) -> Option<&OperationDocument> {
        self.operations.iter().find(|op| op.name() == name)
    }

    pub fn operations(&self) -> &[OperationDocument] {
        self.operations.as_slice()
    }

    /// Every fragment reachable from `operation`, including fragments spread
    /// by other fragments. Each fragment is listed once, at its first
    /// reference in a depth-first walk of the spreads.
    pub fn referenced_fragments(
        &self,
        operation: &OperationDocument,
    ) -> Result<Vec<&Fragment>, DerefByNameError> {
        let mut visited = IndexMap::new();
        for name in operation.selection_set().fragment_spread_names() {
            self.visit_fragment(name, &mut visited)?;
        }
        Ok(visited.into_values().collect())
    }

    fn visit_fragment<'a>(
        &'a self,
        name: &str,
        visited: &mut IndexMap<&'a str, &'a Fragment>,
    ) -> Result<(), DerefByNameError> {
        let fragment = self.fragments.get(name).ok_or_else(
            || DerefByNameError::DanglingReference(name.to_string()),
        )?;
        if visited.insert(fragment.name(), fragment).is_some() {
            return Ok(());
        }
        for nested_name in fragment.selection_set().fragment_spread_names() {
            self.visit_fragment(nested_name, visited)?;
        }
        Ok(())
    }

    /// The operation's source followed by the source of every fragment it
    /// references (see [`AstDocument::referenced_fragments()`]), separated by
    /// newlines.
    pub fn source_with_fragments(
        &self,
        operation: &OperationDocument,
    ) -> Result<String, DerefByNameError> {
        let mut source = operation.source().to_string();
        for fragment in self.referenced_fragments(operation)? {
            source.push('\n');
            source.push_str(fragment.source());
        }
        Ok(source)
    }

    pub fn type_used(&self, name: &str) -> Option<&SchemaTypeUsage> {
        self.types_used.iter().find(|type_used| type_used.name() == name)
    }

    pub fn types_used(&self) -> &[SchemaTypeUsage] {
        self.types_used.as_slice()
    }
}

fn end_of_input_error(err: serde_json::Error) -> DecodeError {
    DecodeError::InvalidPayload {
        path: ".".to_string(),
        message: err.to_string(),
    }
}
