//! Adapters for emitting anonymised values through `slog`.
//!
//! This module connects [`Anonymise`] with `slog` by providing `slog::Value`
//! implementations that serialize the anonymised copy of a value as
//! structured JSON via `slog`'s nested-value support.
//!
//! It is responsible for:
//! - Ensuring the logged representation is derived from the anonymised copy,
//!   never from the original value.
//! - Avoiding fallible logging APIs: anonymisation and serialization failures
//!   are represented as placeholder strings rather than propagated as errors.
//!
//! It does not configure `slog` or decide which fields are sensitive.

use serde::Serialize;
use serde_json::Value as JsonValue;
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::{error::MarshalError, json::to_anonymised_json_value, walk::Anonymise};

/// Logged in place of a value whose tags could not be resolved.
pub const ANONYMISE_FAILED: &str = "Failed to anonymise value";

/// Logged in place of a value whose anonymised copy could not be serialized.
pub const SERIALIZE_FAILED: &str = "Failed to serialize anonymised value";

/// A `slog::Value` that emits an anonymised payload as structured JSON.
///
/// The payload is stored as a `serde_json::Value` and emitted via `slog`'s
/// nested-value support.
pub struct AnonymisedJson {
    value: JsonValue,
}

impl AnonymisedJson {
    fn new(value: JsonValue) -> Self {
        Self { value }
    }

    /// The JSON payload that will be logged.
    pub fn as_json(&self) -> &JsonValue {
        &self.value
    }
}

impl SlogValue for AnonymisedJson {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.value.clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

/// Converts values into a `slog::Value` that logs their anonymised form.
///
/// The original value is never serialized. If its tags cannot be resolved the
/// logged value is the string [`ANONYMISE_FAILED`]; if the anonymised copy
/// cannot be converted to JSON it is [`SERIALIZE_FAILED`].
///
/// ## Example
/// ```ignore
/// use anonymise::slog::IntoAnonymisedJson;
///
/// info!(logger, "login"; "user" => user.to_anonymised_json());
/// ```
pub trait IntoAnonymisedJson: Anonymise + Clone + Serialize {
    /// Anonymises a copy of `self` and wraps it for logging.
    fn to_anonymised_json(&self) -> AnonymisedJson {
        let value = match to_anonymised_json_value(self) {
            Ok(value) => value,
            Err(MarshalError::Anonymise(_)) => JsonValue::String(ANONYMISE_FAILED.to_string()),
            Err(MarshalError::Serialize(_)) => JsonValue::String(SERIALIZE_FAILED.to_string()),
        };
        AnonymisedJson::new(value)
    }
}

impl<T> IntoAnonymisedJson for T where T: Anonymise + Clone + Serialize {}
