use serde::{Deserialize, Deserializer};

/// Deserializes a nullable patch field so that an explicit `null` becomes
/// `Some(None)`. Paired with `#[serde(default)]`, a missing field stays `None`.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
