//! Response envelope handling.
//!
//! Every response body from a remote end is wrapped in a
//! `{"value": ...}` envelope. A status other than 200 means the value is
//! an error payload, whatever it looks like.

// ============================================================================
// Imports
// ============================================================================

use serde_json::Value;

use crate::error::{Error, ErrorKind, Result};

// ============================================================================
// Constants
// ============================================================================

/// The only status treated as success.
pub const STATUS_OK: u16 = 200;

// ============================================================================
// WireResponse
// ============================================================================

/// Raw response from the transport.
///
/// # Format
///
/// Success:
/// ```json
/// { "value": "Example Domain" }
/// ```
///
/// Error (any status other than 200):
/// ```json
/// {
///   "value": {
///     "error": "no such element",
///     "message": "Unable to locate element: #missing",
///     "stacktrace": "..."
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct WireResponse {
    /// HTTP status code.
    pub status: u16,

    /// Parsed JSON body (`null` when the body was empty).
    pub body: Value,
}

impl WireResponse {
    /// Creates a response from status and body.
    #[inline]
    #[must_use]
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// Returns `true` if the status is 200.
    #[inline]
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == STATUS_OK
    }

    /// Returns the enveloped value, or `null` if the body has none.
    #[inline]
    #[must_use]
    pub fn value(&self) -> &Value {
        self.body.get("value").unwrap_or(&Value::Null)
    }

    /// Consumes the response and returns the enveloped value.
    #[must_use]
    pub fn into_value(self) -> Value {
        match self.body {
            Value::Object(mut map) => map.remove("value").unwrap_or(Value::Null),
            _ => Value::Null,
        }
    }

    /// Returns `self` on success, the classified error otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Protocol`] with the kind classified from
    /// `value.error` and the message taken from `value.message`.
    pub fn error_for_status(self) -> Result<Self> {
        if self.is_success() {
            return Ok(self);
        }

        let value = self.value();
        let kind = ErrorKind::from_code(value.get("error").and_then(Value::as_str));
        let message = value
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or_default();

        Err(Error::protocol(kind, message))
    }
}

// ============================================================================
// Empty Value Predicate
// ============================================================================

/// Returns `true` for values that carry no data.
///
/// `null`, `""`, `[]` and `{}` are empty. `false` and `0` are not.
#[must_use]
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_success_response() {
        let response = WireResponse::new(200, json!({"value": "Example"}));
        assert!(response.is_success());
        assert_eq!(response.value(), &json!("Example"));
        assert_eq!(response.into_value(), json!("Example"));
    }

    #[test]
    fn test_error_response_is_classified() {
        let response = WireResponse::new(
            404,
            json!({"value": {"error": "no such element", "message": "nope"}}),
        );

        let err = response.error_for_status().unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::NoSuchElement));
        assert!(matches!(err, Error::Protocol { ref message, .. } if message == "nope"));
    }

    #[test]
    fn test_error_response_without_code() {
        let response = WireResponse::new(500, json!({"value": {"message": "boom"}}));
        let err = response.error_for_status().unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::Generic));
    }

    #[test]
    fn test_error_status_with_success_shaped_body() {
        let response = WireResponse::new(500, json!({"value": "looks fine"}));
        assert!(response.error_for_status().is_err());
    }

    #[test]
    fn test_missing_envelope_is_null() {
        let response = WireResponse::new(200, Value::Null);
        assert_eq!(response.value(), &Value::Null);
        assert_eq!(response.into_value(), Value::Null);
    }

    #[test]
    fn test_is_empty_value() {
        assert!(is_empty_value(&Value::Null));
        assert!(is_empty_value(&json!("")));
        assert!(is_empty_value(&json!([])));
        assert!(is_empty_value(&json!({})));

        assert!(!is_empty_value(&json!(false)));
        assert!(!is_empty_value(&json!(0)));
        assert!(!is_empty_value(&json!("x")));
        assert!(!is_empty_value(&json!([1])));
        assert!(!is_empty_value(&json!({"a": 1})));
    }

    proptest! {
        #[test]
        fn prop_non_200_always_errors(
            status in (100u16..600).prop_filter("not ok", |s| *s != 200),
            code in proptest::option::of("[a-z ]{0,24}"),
            message in "[ -~]{0,32}",
        ) {
            let mut value = serde_json::Map::new();
            if let Some(code) = &code {
                value.insert("error".into(), json!(code));
            }
            value.insert("message".into(), json!(message));

            let err = WireResponse::new(status, json!({"value": value}))
                .error_for_status()
                .unwrap_err();

            prop_assert_eq!(err.kind(), Some(ErrorKind::from_code(code.as_deref())));
            let is_same_message =
                matches!(err, Error::Protocol { message: ref m, .. } if *m == message);
            prop_assert!(is_same_message);
        }

        #[test]
        fn prop_200_never_errors(body in prop_oneof![
            Just(Value::Null),
            Just(json!({"value": {"error": "no such element", "message": "x"}})),
            "[ -~]{0,16}".prop_map(|s| json!({"value": s})),
        ]) {
            prop_assert!(WireResponse::new(200, body).error_for_status().is_ok());
        }
    }
}
