//! serde_json conveniences over [`marshal`].

use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::{
    error::MarshalError,
    walk::{marshal, Anonymise},
};

/// Anonymises a copy of `value` and encodes it as JSON bytes.
pub fn marshal_json<T>(value: &T) -> Result<Vec<u8>, MarshalError<serde_json::Error>>
where
    T: Anonymise + Clone + Serialize,
{
    marshal(value, serde_json::to_vec)
}

/// Anonymises a copy of `value` and converts it into a `serde_json::Value`.
// `to_value::<&T>` is not general over the borrow's lifetime.
#[allow(clippy::redundant_closure)]
pub fn to_anonymised_json_value<T>(value: &T) -> Result<JsonValue, MarshalError<serde_json::Error>>
where
    T: Anonymise + Clone + Serialize,
{
    marshal(value, |anonymised| serde_json::to_value(anonymised))
}
