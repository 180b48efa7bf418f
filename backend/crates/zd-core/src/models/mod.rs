pub mod envelope;
pub mod identity_type;
pub mod page;
pub mod user_identity;

use serde::{Deserialize, Deserializer};

/// Decode an explicit `null` the same as an absent field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
