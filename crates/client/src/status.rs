use serde_json::Value;

use courier_common::error::{CourierError, json_type_name};
use courier_common::types::ReviewStatus;

/// Build the notification text for a single homework entry.
///
/// Extracts the homework name and status code, resolves the status against
/// the fixed verdict table, and renders the notification template. Missing
/// fields and unknown status codes are domain errors, never panics.
pub fn parse_status(entry: &Value) -> Result<String, CourierError> {
    let object = entry.as_object().ok_or_else(|| CourierError::NotAnObject {
        actual: json_type_name(entry),
    })?;

    let present = || object.keys().cloned().collect::<Vec<_>>();

    let name = object
        .get("homework_name")
        .ok_or_else(|| CourierError::MissingKey {
            key: "homework_name",
            present: present(),
        })?;

    let status = object.get("status").ok_or_else(|| CourierError::MissingKey {
        key: "status",
        present: present(),
    })?;

    let code = match status {
        Value::Null => return Err(CourierError::StatusMissing),
        Value::String(code) if code.is_empty() => return Err(CourierError::StatusMissing),
        Value::String(code) => code.as_str(),
        other => return Err(CourierError::UnknownStatus(other.to_string())),
    };

    let verdict = ReviewStatus::parse(code)
        .ok_or_else(|| CourierError::UnknownStatus(code.to_string()))?
        .verdict();

    // Names are expected to be strings, but anything else is still rendered
    // rather than rejected.
    let name = match name.as_str() {
        Some(name) => name.to_string(),
        None => name.to_string(),
    };

    Ok(format!("Changed review status of \"{name}\". {verdict}"))
}
