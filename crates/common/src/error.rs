use thiserror::Error;

/// Common error types used across the polling pipeline.
///
/// Variants fall into two families: operational failures that are forwarded
/// to the chat itself (`must_notify() == true`), and structural failures
/// that are only logged.
#[derive(Debug, Error)]
pub enum CourierError {
    /// Transport-level failure reaching the review API (DNS, refused
    /// connection, timeout, TLS).
    #[error("connection error: {source} (GET {url}, from_date={from_date})")]
    Connection {
        url: String,
        from_date: i64,
        #[source]
        source: reqwest::Error,
    },

    /// The review API answered with something other than the expected code.
    #[error(
        "unexpected response from server (expected HTTP {expected}, got {actual}, GET {url}, from_date={from_date})"
    )]
    WrongStatusCode {
        expected: u16,
        actual: u16,
        url: String,
        from_date: i64,
    },

    /// The response body could not be decoded as JSON.
    #[error("could not decode response body as JSON: {source} (GET {url}, from_date={from_date})")]
    Decode {
        url: String,
        from_date: i64,
        #[source]
        source: serde_json::Error,
    },

    /// Chat delivery failed; echoes the chat and text for diagnosis.
    #[error("message not sent: {detail} (chat_id={chat_id}, text: {text})")]
    MessageNotSent {
        chat_id: String,
        text: String,
        detail: String,
    },

    /// A response (or entry) that should be a JSON object is something else.
    #[error("response is not a JSON object (got {actual} instead)")]
    NotAnObject { actual: &'static str },

    /// A required key is absent from a response object.
    #[error("key `{key}` is missing (present keys: {present:?})")]
    MissingKey {
        key: &'static str,
        present: Vec<String>,
    },

    /// A field is present but carries the wrong JSON type.
    #[error("field `{field}` is not an array (got {actual} instead)")]
    WrongFieldType {
        field: &'static str,
        actual: &'static str,
    },

    /// The homework status value was null or empty.
    #[error("homework status was not received")]
    StatusMissing,

    /// The homework status value is outside the known set.
    #[error("homework status `{0}` is not one of the expected values")]
    UnknownStatus(String),
}

impl CourierError {
    /// Whether this error is forwarded to the chat in addition to the log.
    ///
    /// Operational failures (connectivity, bad response codes, undecodable
    /// bodies, delivery failures) are forwarded so the operator hears about
    /// them in near-real-time. Structural failures stay in the log: they
    /// point at a client-side bug or API contract drift that chat spam
    /// won't help diagnose.
    pub fn must_notify(&self) -> bool {
        matches!(
            self,
            CourierError::Connection { .. }
                | CourierError::WrongStatusCode { .. }
                | CourierError::Decode { .. }
                | CourierError::MessageNotSent { .. }
        )
    }
}

/// Name of a JSON value's type, used in shape-error messages.
pub fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
