//! Integration tests for the slog module.
//!
//! These tests verify that:
//! - `to_anonymised_json()` logs the anonymised copy, never the original
//! - The `slog::Value` implementation emits through slog's nested-value API
//! - Failures degrade to placeholder strings instead of errors

#![cfg(feature = "slog")]

use std::{cell::RefCell, collections::HashMap, fmt::Arguments};

use anonymise::{
    slog::{IntoAnonymisedJson, ANONYMISE_FAILED},
    Anonymise,
};
use serde::Serialize;
use serde_json::{json, Value as JsonValue};

// A test serializer that captures serialized key-value pairs
struct CapturingSerializer {
    captured: RefCell<HashMap<String, CapturedValue>>,
}

#[derive(Debug, Clone, PartialEq)]
enum CapturedValue {
    Str(String),
    Other,
    Serde(JsonValue),
}

impl CapturingSerializer {
    fn new() -> Self {
        Self {
            captured: RefCell::new(HashMap::new()),
        }
    }

    fn get(&self, key: &str) -> Option<CapturedValue> {
        self.captured.borrow().get(key).cloned()
    }

    fn insert(&self, key: slog::Key, value: CapturedValue) -> slog::Result {
        self.captured.borrow_mut().insert(key.into(), value);
        Ok(())
    }
}

impl slog::Serializer for CapturingSerializer {
    fn emit_arguments(&mut self, key: slog::Key, val: &Arguments<'_>) -> slog::Result {
        self.insert(key, CapturedValue::Str(val.to_string()))
    }

    fn emit_str(&mut self, key: slog::Key, val: &str) -> slog::Result {
        self.insert(key, CapturedValue::Str(val.into()))
    }

    fn emit_bool(&mut self, key: slog::Key, _val: bool) -> slog::Result {
        self.insert(key, CapturedValue::Other)
    }

    fn emit_unit(&mut self, key: slog::Key) -> slog::Result {
        self.insert(key, CapturedValue::Other)
    }

    fn emit_none(&mut self, key: slog::Key) -> slog::Result {
        self.insert(key, CapturedValue::Other)
    }

    fn emit_serde(&mut self, key: slog::Key, val: &dyn slog::SerdeValue) -> slog::Result {
        // Serialize the value to JSON to capture it
        let json = serde_json::to_value(val.as_serde()).unwrap_or(JsonValue::Null);
        self.insert(key, CapturedValue::Serde(json))
    }
}

/// Helper function to serialize a slog::Value into any Serializer.
fn serialize_to_capture<V: slog::Value, S: slog::Serializer>(
    value: &V,
    key: &'static str,
    serializer: &mut S,
) {
    static RS: slog::RecordStatic<'static> = slog::record_static!(slog::Level::Info, "");
    let args = format_args!("");
    let record = slog::Record::new(&RS, &args, slog::b!());
    value.serialize(&record, key, serializer).unwrap();
}

fn captured_json<V: slog::Value>(value: &V) -> JsonValue {
    let mut serializer = CapturingSerializer::new();
    serialize_to_capture(value, "payload", &mut serializer);
    match serializer.get("payload") {
        Some(CapturedValue::Serde(json)) => json,
        other => panic!("Expected Serde value for 'payload' key, got {other:?}"),
    }
}

#[derive(Clone, Anonymise, Serialize)]
#[anon(skip_debug)]
struct Address {
    #[anon("stars")]
    street: String,
    city: String,
}

#[derive(Clone, Anonymise, Serialize)]
#[anon(skip_debug)]
struct User {
    username: String,
    #[anon("empty")]
    password: String,
    #[anon("stars_with_len")]
    phones: Vec<String>,
    address: Address,
}

fn user() -> User {
    User {
        username: "alice".into(),
        password: "hunter2".into(),
        phones: vec!["555-0100".into()],
        address: Address {
            street: "1 Main St".into(),
            city: "Lisbon".into(),
        },
    }
}

#[test]
fn test_to_anonymised_json_nested_struct() {
    let user = user();
    let logged = user.to_anonymised_json();

    assert_eq!(
        logged.as_json(),
        &json!({
            "username": "alice",
            "password": "",
            "phones": ["********"],
            "address": { "street": "****", "city": "Lisbon" },
        })
    );
    assert_eq!(user.password, "hunter2");
}

#[test]
fn test_slog_value_emits_nested_json() {
    let logged = user().to_anonymised_json();
    let json = captured_json(&logged);

    assert_eq!(json["password"], "");
    assert_eq!(json["address"]["street"], "****");
    assert!(!json.to_string().contains("hunter2"));
}

#[test]
fn test_unknown_tag_logs_placeholder() {
    #[derive(Clone, Anonymise, Serialize)]
    #[anon(skip_debug)]
    struct Broken {
        #[anon("bogus")]
        secret: String,
    }

    let logged = Broken {
        secret: "do not log".into(),
    }
    .to_anonymised_json();

    assert_eq!(logged.as_json(), &JsonValue::String(ANONYMISE_FAILED.into()));
    assert_eq!(captured_json(&logged), json!(ANONYMISE_FAILED));
}

#[test]
fn test_sha512_field_is_logged_as_hash() {
    #[derive(Clone, Anonymise, Serialize)]
    #[anon(skip_debug)]
    struct Audit {
        #[anon("sha512")]
        email: String,
    }

    let logged = Audit {
        email: "alice@example.com".into(),
    }
    .to_anonymised_json();

    let expected = anonymise::sha512("alice@example.com");
    assert_eq!(logged.as_json()["email"], JsonValue::String(expected));
}
