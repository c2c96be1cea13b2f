use serde_json::Value;

use courier_common::error::{CourierError, json_type_name};

/// Check a parsed response for the expected envelope shape and return the
/// homework entries untouched (same elements, same order, no filtering).
///
/// The envelope must be an object carrying a `homeworks` array and a
/// `current_date` field. Shape errors name the offending type or the keys
/// actually present, so the failing payload can be reconstructed from the log.
pub fn validate(response: &Value) -> Result<&[Value], CourierError> {
    let object = response
        .as_object()
        .ok_or_else(|| CourierError::NotAnObject {
            actual: json_type_name(response),
        })?;

    let present = || object.keys().cloned().collect::<Vec<_>>();

    let homeworks = object
        .get("homeworks")
        .ok_or_else(|| CourierError::MissingKey {
            key: "homeworks",
            present: present(),
        })?;

    if !object.contains_key("current_date") {
        return Err(CourierError::MissingKey {
            key: "current_date",
            present: present(),
        });
    }

    let entries = homeworks
        .as_array()
        .ok_or_else(|| CourierError::WrongFieldType {
            field: "homeworks",
            actual: json_type_name(homeworks),
        })?;

    Ok(entries)
}
