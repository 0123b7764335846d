// ABOUTME: Custom serde (de)serializers for validated config values.
// ABOUTME: Maps prefixes and regions between JSON strings and domain types.

use serde::{Deserialize, Deserializer, Serializer};

use crate::types::{FunctionPrefix, Region};

pub fn deserialize_prefix<'de, D>(deserializer: D) -> Result<Option<FunctionPrefix>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    match value {
        None => Ok(None),
        Some(s) => FunctionPrefix::parse_optional(&s).map_err(serde::de::Error::custom),
    }
}

pub fn serialize_prefix<S>(prefix: &Option<FunctionPrefix>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match prefix {
        Some(p) => serializer.serialize_str(p.as_str()),
        None => serializer.serialize_none(),
    }
}

pub fn deserialize_region<'de, D>(deserializer: D) -> Result<Option<Region>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    value
        .map(|s| Region::new(&s).map_err(serde::de::Error::custom))
        .transpose()
}

pub fn serialize_region<S>(region: &Option<Region>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match region {
        Some(r) => serializer.serialize_str(r.as_str()),
        None => serializer.serialize_none(),
    }
}
