use crate::NodeDecodeError;
use crate::operation::Argument;
use crate::operation::BooleanConditionSelection;
use crate::operation::FieldSelection;
use crate::operation::FragmentSpreadSelection;
use crate::operation::SelectionKind;
use crate::operation::SelectionSet;
use crate::operation::TypeConditionSelection;
use crate::types::TypeRef;
use crate::unique_key_json::UniqueKeyJson;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde::de::Error as _;

/// One item of a [`SelectionSet`].
///
/// The accessors on this enum answer for any kind of selection and return
/// `None` whenever the value is not defined for this kind (e.g.
/// [`Selection::variable_name()`] on a `Field`). Match on the variants to get
/// at the non-optional, kind-specific values directly.
#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    BooleanCondition(BooleanConditionSelection),
    Field(FieldSelection),
    FragmentSpread(FragmentSpreadSelection),
    TypeCondition(TypeConditionSelection),
}
impl Selection {
    pub fn args(&self) -> Option<&[Argument]> {
        self.as_field().and_then(FieldSelection::args)
    }

    pub fn as_field(&self) -> Option<&FieldSelection> {
        if let Self::Field(field) = self {
            Some(field)
        } else {
            None
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.as_field().and_then(FieldSelection::description)
    }

    pub fn fragment_name(&self) -> Option<&str> {
        if let Self::FragmentSpread(spread) = self {
            Some(spread.fragment_name())
        } else {
            None
        }
    }

    pub fn inverted(&self) -> Option<bool> {
        if let Self::BooleanCondition(condition) = self {
            Some(condition.inverted())
        } else {
            None
        }
    }

    pub fn is_conditional(&self) -> Option<bool> {
        if let Self::FragmentSpread(spread) = self {
            spread.is_conditional()
        } else {
            None
        }
    }

    pub fn is_deprecated(&self) -> Option<bool> {
        self.as_field().and_then(FieldSelection::is_deprecated)
    }

    pub fn kind(&self) -> SelectionKind {
        match self {
            Self::BooleanCondition(_) => SelectionKind::BooleanCondition,
            Self::Field(_) => SelectionKind::Field,
            Self::FragmentSpread(_) => SelectionKind::FragmentSpread,
            Self::TypeCondition(_) => SelectionKind::TypeCondition,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.as_field().map(FieldSelection::name)
    }

    pub fn response_key(&self) -> Option<&str> {
        self.as_field().and_then(FieldSelection::response_key)
    }

    pub fn selection_set(&self) -> Option<&SelectionSet> {
        match self {
            Self::BooleanCondition(condition) => condition.selection_set(),
            Self::Field(field) => field.selection_set(),
            Self::FragmentSpread(spread) => spread.selection_set(),
            Self::TypeCondition(condition) => condition.selection_set(),
        }
    }

    pub fn type_node(&self) -> Option<&TypeRef> {
        match self {
            Self::Field(field) => Some(field.type_node()),
            Self::TypeCondition(condition) => Some(condition.type_node()),
            Self::BooleanCondition(_)
                | Self::FragmentSpread(_)
                => None,
        }
    }

    pub fn variable_name(&self) -> Option<&str> {
        if let Self::BooleanCondition(condition) = self {
            Some(condition.variable_name())
        } else {
            None
        }
    }
}

/// Reads the `kind` discriminator first, then decodes only the fields that
/// kind defines. Fields that belong to other kinds are ignored, even when
/// they are present and malformed.
///
/// The node is buffered before the kind is known, and nested selections are
/// buffered again from that buffer, so decoding costs O(depth * size).
impl<'de> Deserialize<'de> for Selection {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        let UniqueKeyJson(node) = UniqueKeyJson::deserialize(deserializer)?;
        let mut node =
            serde_json::Map::<String, serde_json::Value>::deserialize(node)
                .map_err(D::Error::custom)?;

        let kind_value = node.remove("kind").ok_or_else(|| {
            D::Error::custom(NodeDecodeError::MissingField {
                node_kind: "Selection",
                field_name: "kind",
            })
        })?;
        let kind =
            SelectionKind::deserialize(kind_value)
                .map_err(D::Error::custom)?;

        let payload = serde_json::Value::Object(node);
        let selection = match kind {
            SelectionKind::BooleanCondition =>
                decode_variant(kind, payload).map(Self::BooleanCondition),
            SelectionKind::Field =>
                decode_variant(kind, payload).map(Self::Field),
            SelectionKind::FragmentSpread =>
                decode_variant(kind, payload).map(Self::FragmentSpread),
            SelectionKind::TypeCondition =>
                decode_variant(kind, payload).map(Self::TypeCondition),
        };

        selection.map_err(D::Error::custom)
    }
}

fn decode_variant<T: DeserializeOwned>(
    kind: SelectionKind,
    payload: serde_json::Value,
) -> Result<T, NodeDecodeError> {
    serde_path_to_error::deserialize(payload).map_err(|err| {
        NodeDecodeError::InvalidSelection {
            kind,
            path: err.path().to_string(),
            message: err.into_inner().to_string(),
        }
    })
}
