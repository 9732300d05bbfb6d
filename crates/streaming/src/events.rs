//! Wire types for the position feed.
//!
//! The transport itself (handshake, reconnects) is a black box owned by the
//! composition root; this module only defines the event envelope it emits
//! and the tolerant payload parsing applied to position updates.

use foundation::geo::GeoPosition;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One event from the feed, tagged the way the transport frames it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum FeedMessage {
    /// A position payload. Kept as raw JSON: the feed is loose about types
    /// and about error reporting, so validation happens in [`parse_position`].
    PositionUpdate(Value),
    Connected,
    ConnectionError { message: String },
    Disconnected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadError {
    /// The payload itself reported a feed-side error.
    ErrorIndicator(String),
    NotAnObject,
    MissingField(&'static str),
    NotNumeric(&'static str),
    NonFinite(&'static str),
}

impl std::fmt::Display for PayloadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PayloadError::ErrorIndicator(msg) => write!(f, "feed reported error: {msg}"),
            PayloadError::NotAnObject => write!(f, "payload is not an object"),
            PayloadError::MissingField(field) => write!(f, "payload missing {field}"),
            PayloadError::NotNumeric(field) => write!(f, "payload {field} is not numeric"),
            PayloadError::NonFinite(field) => write!(f, "payload {field} is not finite"),
        }
    }
}

impl std::error::Error for PayloadError {}

/// Validates a position payload and coerces it into a [`GeoPosition`].
///
/// Latitude and longitude may arrive as JSON numbers or numeric strings; the
/// region attribute defaults to the unknown sentinel when absent.
pub fn parse_position(payload: &Value) -> Result<GeoPosition, PayloadError> {
    let obj = payload.as_object().ok_or(PayloadError::NotAnObject)?;

    if let Some(err) = obj.get("error") {
        if !err.is_null() {
            let msg = err
                .as_str()
                .map(str::to_string)
                .unwrap_or_else(|| err.to_string());
            return Err(PayloadError::ErrorIndicator(msg));
        }
    }

    let latitude = coerce_field(obj.get("latitude"), "latitude")?;
    let longitude = coerce_field(obj.get("longitude"), "longitude")?;

    let region = obj
        .get("country_code")
        .or_else(|| obj.get("auxiliary"))
        .and_then(|v| v.as_str())
        .map(str::to_string);

    Ok(GeoPosition::new(latitude, longitude, region))
}

fn coerce_field(value: Option<&Value>, field: &'static str) -> Result<f64, PayloadError> {
    let value = value.ok_or(PayloadError::MissingField(field))?;
    let num = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .ok_or(PayloadError::NotNumeric(field))?;

    if !num.is_finite() {
        return Err(PayloadError::NonFinite(field));
    }
    Ok(num)
}
