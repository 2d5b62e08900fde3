//! Shared pieces of the hand-written `Deserialize` impls.

use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer};

/// The discriminator stored under `tag`, if present and not one of `known`.
pub(crate) fn unsupported_kind(
    value: &serde_json::Value,
    tag: &str,
    known: &[&str],
) -> Option<String> {
    value
        .get(tag)
        .and_then(serde_json::Value::as_str)
        .filter(|kind| !known.contains(kind))
        .map(str::to_string)
}

/// Accept a single item or a list of items. `null` is an empty list.
pub(crate) fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Array(items) => items
            .into_iter()
            .map(|item| T::deserialize(item).map_err(de::Error::custom))
            .collect(),
        serde_json::Value::Null => Ok(vec![]),
        item => T::deserialize(item)
            .map(|one| vec![one])
            .map_err(de::Error::custom),
    }
}
