use crate::NodeDecodeError;
use crate::unique_key_json::UniqueKeyJson;
use indexmap::IndexMap;

/// The value passed for an [`Argument`](crate::operation::Argument).
///
/// Literal arguments decode to their literal shape. A variable reference
/// arrives as an `Object` carrying a discriminator and the variable's name
/// (e.g. `{"kind": "Variable", "variableName": "episode"}`); it is kept as
/// opaque payload here and interpreted by the emitter.
///
/// `Object` equality ignores key order. Objects with a repeated key and
/// integers outside the `i64` range are rejected rather than coerced.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(try_from = "UniqueKeyJson")]
pub enum ArgumentValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<ArgumentValue>),
    Object(IndexMap<String, ArgumentValue>),
}
impl ArgumentValue {
    pub fn as_bool(&self) -> Option<bool> {
        if let Self::Bool(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        if let Self::Int(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    pub fn as_list(&self) -> Option<&[ArgumentValue]> {
        if let Self::List(values) = self {
            Some(values.as_slice())
        } else {
            None
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, ArgumentValue>> {
        if let Self::Object(entries) = self {
            Some(entries)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(str) = self {
            Some(str.as_str())
        } else {
            None
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl std::convert::TryFrom<serde_json::Value> for ArgumentValue {
    type Error = NodeDecodeError;

    fn try_from(json: serde_json::Value) -> Result<Self, Self::Error> {
        Ok(match json {
            serde_json::Value::Null =>
                Self::Null,

            serde_json::Value::Bool(value) =>
                Self::Bool(value),

            serde_json::Value::Number(number) => {
                if let Some(int) = number.as_i64() {
                    Self::Int(int)
                } else if number.is_f64()
                    && let Some(float) = number.as_f64() {
                    Self::Float(float)
                } else {
                    return Err(NodeDecodeError::UnrepresentableNumber {
                        number: number.to_string(),
                    });
                }
            },

            serde_json::Value::String(value) =>
                Self::String(value),

            serde_json::Value::Array(values) =>
                Self::List(
                    values.into_iter()
                        .map(Self::try_from)
                        .collect::<Result<_, _>>()?,
                ),

            serde_json::Value::Object(entries) =>
                Self::Object(
                    entries.into_iter()
                        .map(|(key, value)| Ok((key, Self::try_from(value)?)))
                        .collect::<Result<_, NodeDecodeError>>()?,
                ),
        })
    }
}

impl std::convert::TryFrom<UniqueKeyJson> for ArgumentValue {
    type Error = NodeDecodeError;

    fn try_from(json: UniqueKeyJson) -> Result<Self, Self::Error> {
        Self::try_from(json.0)
    }
}

impl serde::Serialize for ArgumentValue {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(value) => serializer.serialize_bool(*value),
            Self::Int(value) => serializer.serialize_i64(*value),
            Self::Float(value) => serializer.serialize_f64(*value),
            Self::String(value) => serializer.serialize_str(value),
            Self::List(values) => serializer.collect_seq(values),
            Self::Object(entries) => serializer.collect_map(entries),
        }
    }
}

impl std::fmt::Display for ArgumentValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::String(value) => write!(f, "{value:?}"),
            Self::List(values) => {
                f.write_str("[")?;
                for (idx, value) in values.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{value}")?;
                }
                f.write_str("]")
            },
            Self::Object(entries) => {
                f.write_str("{")?;
                for (idx, (key, value)) in entries.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            },
        }
    }
}
