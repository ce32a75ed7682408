use serde_json::Value;

use crate::model::search::SearchField;

/// Message surfaced when the listing endpoint answers with a non-success status.
pub const UNEXPECTED_LISTING: &str = "Did not receive expected data";

/// One `GET /bookings/search` call.
///
/// `field` is `None` only for the warm-up search issued on mount, which the
/// server treats as an unfiltered listing (`/search?=`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub field: Option<SearchField>,
    pub value: String,
}

impl SearchRequest {
    pub fn new(field: SearchField, value: impl Into<String>) -> Self {
        Self {
            field: Some(field),
            value: value.into(),
        }
    }

    pub fn warm_up() -> Self {
        Self {
            field: None,
            value: String::new(),
        }
    }

    /// The single query pair sent to the server, not yet URL-encoded.
    pub fn query_pair(&self) -> (&str, &str) {
        (self.field.map_or("", SearchField::name), &self.value)
    }
}

/// Turns a rejected response into the text shown to the user.
///
/// The server usually answers with a bare JSON string such as
/// `"email is required"`; that is shown without quotes. Other JSON is shown
/// compact, and anything that is not JSON is shown trimmed. A body with
/// nothing to show falls back to `HTTP <status> <status_text>`.
pub fn render_error_body(status: u16, status_text: &str, body: &str) -> String {
    let message = render_payload(body);
    if message.is_empty() {
        format!("HTTP {} {}", status, status_text).trim_end().to_string()
    } else {
        message
    }
}

fn render_payload(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::String(message)) => message.trim().to_string(),
        Ok(Value::Object(map)) if map.len() == 1 => match map.values().next() {
            Some(Value::String(message)) => message.clone(),
            _ => Value::Object(map).to_string(),
        },
        Ok(other) => other.to_string(),
        Err(_) => body.trim().to_string(),
    }
}
