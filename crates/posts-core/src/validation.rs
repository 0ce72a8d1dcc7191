//! Field validation for post creation.
//!
//! Works on the raw JSON body so that shape errors (wrong types, blank
//! strings, stringly-typed ids) are reported with the same messages no
//! matter how the client encoded them. Checks run in a fixed order and stop
//! at the first failure.

use serde_json::Value;

use crate::domain::NewPost;
use crate::error::ValidationError;

/// Validate and normalize a create-post body.
///
/// On success the strings are trimmed, `user_id` is coerced to an integer
/// and every other key in the body is dropped.
pub fn validate_new_post(body: &Value) -> Result<NewPost, ValidationError> {
    let title = body.get("title");
    let text = body.get("body");
    let user_id = body.get("user_id");

    if !is_present(title) || !is_present(text) || !is_present(user_id) {
        return Err(ValidationError::MissingFields);
    }

    let title = title
        .and_then(non_blank_string)
        .ok_or(ValidationError::InvalidTitle)?;
    let text = text
        .and_then(non_blank_string)
        .ok_or(ValidationError::InvalidBody)?;
    let user_id = user_id
        .and_then(positive_integer)
        .ok_or(ValidationError::InvalidUserId)?;

    Ok(NewPost::new(title, text, user_id))
}

/// Absent, `null`, `false` and `""` count as missing.
fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

fn non_blank_string(value: &Value) -> Option<String> {
    let trimmed = value.as_str()?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn positive_integer(value: &Value) -> Option<i64> {
    let id = match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }?;

    (id >= 1).then_some(id)
}
