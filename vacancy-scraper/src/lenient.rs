use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Value(T),
    Malformed(IgnoredAny),
}

/// Decode the field if it has the expected shape, `None` for `null` or anything else.
/// Pair with `#[serde(default)]` so a missing key is accepted too.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    match Lenient::<T>::deserialize(deserializer)? {
        Lenient::Value(value) => Ok(Some(value)),
        Lenient::Malformed(_) => Ok(None),
    }
}
