use serde::Deserialize;
use serde::Deserializer;

/// The backend encodes empty lists as `null`. Treat that, and a missing
/// field, as the default value.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let value = Option::<T>::deserialize(deserializer)?;
    return Ok(value.unwrap_or_default());
}
