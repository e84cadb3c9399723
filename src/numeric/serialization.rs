// ============================================================================
// Serde Support
// Numeric values travel as JSON strings to keep every digit
// ============================================================================

use super::errors::ParseError;
use super::value::NumericValue;
use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::{Serialize, Serializer};
use std::fmt;

impl Serialize for NumericValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Never a bare number: JSON consumers would round it through f64
        serializer.serialize_str(self.as_str())
    }
}

struct NumericValueVisitor;

impl NumericValueVisitor {
    fn unsupported<E: de::Error>(type_name: &'static str) -> E {
        de::Error::custom(ParseError::UnsupportedType { type_name })
    }
}

impl<'de> Visitor<'de> for NumericValueVisitor {
    type Value = NumericValue;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a numeric value (integer, float, or numeric string)")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        NumericValue::parse(v).map_err(de::Error::custom)
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        NumericValue::parse(v).map_err(de::Error::custom)
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(NumericValue::from(v))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(NumericValue::from(v))
    }

    fn visit_i128<E>(self, v: i128) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(NumericValue::from(v))
    }

    fn visit_u128<E>(self, v: u128) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(NumericValue::from(v))
    }

    fn visit_bool<E>(self, _v: bool) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Err(Self::unsupported("boolean"))
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Err(Self::unsupported("null"))
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Err(Self::unsupported("null"))
    }

    fn visit_seq<A>(self, _seq: A) -> Result<Self::Value, A::Error>
    where
        A: de::SeqAccess<'de>,
    {
        Err(Self::unsupported("array"))
    }

    fn visit_map<A>(self, _map: A) -> Result<Self::Value, A::Error>
    where
        A: de::MapAccess<'de>,
    {
        Err(Self::unsupported("object"))
    }
}

impl<'de> Deserialize<'de> for NumericValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(NumericValueVisitor)
    }
}

impl TryFrom<&serde_json::Value> for NumericValue {
    type Error = ParseError;

    /// Convert a dynamically typed JSON value.
    ///
    /// Strings follow the numeric-string grammar; JSON numbers keep their
    /// integer or float nature.
    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        use serde_json::Value;

        match value {
            Value::String(text) => NumericValue::parse(text.as_str()),
            Value::Number(number) => {
                if let Some(int) = number.as_i64() {
                    Ok(NumericValue::from(int))
                } else if let Some(uint) = number.as_u64() {
                    Ok(NumericValue::from(uint))
                } else {
                    let float = number.as_f64().ok_or(ParseError::UnsupportedType {
                        type_name: "number",
                    })?;
                    NumericValue::parse(float)
                }
            },
            Value::Null => Err(ParseError::UnsupportedType { type_name: "null" }),
            Value::Bool(_) => Err(ParseError::UnsupportedType {
                type_name: "boolean",
            }),
            Value::Array(_) => Err(ParseError::UnsupportedType { type_name: "array" }),
            Value::Object(_) => Err(ParseError::UnsupportedType {
                type_name: "object",
            }),
        }
    }
}
