//! Decoding helpers for stored JSON values.
//!
//! The store may hold values written by other clients or damaged by hand
//! edits. Nothing here fails: a value that cannot be parsed is treated as
//! absent, and a list element that cannot be decoded is skipped. Both cases
//! are logged at `warn`. Skipped elements are carried over verbatim when the
//! list is written back, so a read-modify-write never destroys them.

use serde::de::DeserializeOwned;

/// Decode a JSON array stored under `key`, element by element.
#[must_use]
pub fn decode_list<T: DeserializeOwned>(key: &str, raw: &str) -> Vec<T> {
    let values: Vec<serde_json::Value> = match serde_json::from_str(raw) {
        Ok(values) => values,
        Err(e) => {
            tracing::warn!(key, "stored value is not a JSON array, treating as empty: {e}");
            return Vec::new();
        }
    };

    values
        .into_iter()
        .enumerate()
        .filter_map(|(idx, value)| match serde_json::from_value(value) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::warn!(key, index = idx, "skipping undecodable element: {e}");
                None
            }
        })
        .collect()
}

/// Raw elements of a stored JSON array that do not decode as `T`.
///
/// A value that is not an array yields nothing; it is replaced wholesale on
/// the next write.
#[must_use]
pub fn undecodable_elements<T: DeserializeOwned>(raw: &str) -> Vec<serde_json::Value> {
    let Ok(values) = serde_json::from_str::<Vec<serde_json::Value>>(raw) else {
        return Vec::new();
    };
    values
        .into_iter()
        .filter(|value| serde_json::from_value::<T>(value.clone()).is_err())
        .collect()
}

/// Keep the first occurrence of each ID, preserving order.
#[must_use]
pub fn dedup_ids(ids: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    ids.into_iter().filter(|id| seen.insert(id.clone())).collect()
}
