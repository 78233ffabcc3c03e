//! Payload validation for the booking endpoints.
//!
//! Works on raw `serde_json::Value` payloads so that a missing field and a
//! wrongly-typed field get their own error instead of a blanket
//! deserialization failure. Pure functions, no storage access.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde_json::Value;
use thiserror::Error;

use crate::models::booking::NewBooking;

// Letters, apostrophes, hyphens, spaces. Rejects the empty string.
static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z' -]+$").expect("name pattern"));

// local@domain.tld: one @, at least one dot after it.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+$").expect("email pattern"));

pub const DEFAULT_STATUS: &str = "not paid";

/// Fields a create payload must carry. `status` is optional on create and
/// defaults to [`DEFAULT_STATUS`]; update is a full replacement and requires
/// it too.
const REQUIRED_FIELDS: &[&str] = &[
    "first_name",
    "last_name",
    "number_of_adults",
    "number_of_children",
    "number_of_rooms",
    "room_type",
    "email",
    "phone",
    "start_date",
    "end_date",
    "booking_time",
    "price",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing field: {0}")]
    MissingField(&'static str),
    #[error("{field} must be {expected}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
    },
    #[error("invalid {0} format")]
    InvalidFormat(&'static str),
    #[error("invalid data format: {0}")]
    InvalidShape(&'static str),
    #[error("id must be a positive integer")]
    InvalidId,
}

pub fn validate_create(payload: &Value) -> Result<NewBooking, ValidationError> {
    validate_payload(payload, false)
}

pub fn validate_update(payload: &Value) -> Result<NewBooking, ValidationError> {
    validate_payload(payload, true)
}

/// Checks a raw path segment. Ids are positive integers; anything else is
/// rejected here so the router never turns a malformed id into a 404.
pub fn validate_id(raw: &str) -> Result<i64, ValidationError> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ValidationError::InvalidId),
    }
}

fn validate_payload(payload: &Value, status_required: bool) -> Result<NewBooking, ValidationError> {
    for &name in REQUIRED_FIELDS {
        field(payload, name)?;
    }
    if status_required {
        field(payload, "status")?;
    }

    let booking = NewBooking {
        first_name: text(payload, "first_name")?,
        last_name: text(payload, "last_name")?,
        number_of_adults: integer(payload, "number_of_adults")?,
        number_of_children: integer(payload, "number_of_children")?,
        number_of_rooms: integer(payload, "number_of_rooms")?,
        room_type: text(payload, "room_type")?,
        status: match payload.get("status") {
            None | Some(Value::Null) => DEFAULT_STATUS.to_owned(),
            Some(_) => text(payload, "status")?,
        },
        email: text(payload, "email")?,
        phone: text(payload, "phone")?,
        start_date: date(payload, "start_date")?,
        end_date: date(payload, "end_date")?,
        booking_time: text(payload, "booking_time")?,
        price: number(payload, "price")?,
    };

    if !NAME_RE.is_match(&booking.first_name) {
        return Err(ValidationError::InvalidFormat("first_name"));
    }
    if !NAME_RE.is_match(&booking.last_name) {
        return Err(ValidationError::InvalidFormat("last_name"));
    }
    if !EMAIL_RE.is_match(&booking.email) {
        return Err(ValidationError::InvalidFormat("email"));
    }

    if booking.number_of_adults < 0 {
        return Err(ValidationError::InvalidShape(
            "number_of_adults must not be negative",
        ));
    }
    if booking.number_of_children < 0 {
        return Err(ValidationError::InvalidShape(
            "number_of_children must not be negative",
        ));
    }
    if booking.number_of_rooms <= 0 {
        return Err(ValidationError::InvalidShape(
            "number_of_rooms must be positive",
        ));
    }
    if booking.price < 0.0 {
        return Err(ValidationError::InvalidShape("price must not be negative"));
    }
    if booking.room_type.is_empty() {
        return Err(ValidationError::InvalidShape("room_type must not be empty"));
    }
    if booking.status.is_empty() {
        return Err(ValidationError::InvalidShape("status must not be empty"));
    }
    if booking.phone.is_empty() {
        return Err(ValidationError::InvalidShape("phone must not be empty"));
    }
    if booking.booking_time.is_empty() {
        return Err(ValidationError::InvalidShape(
            "booking_time must not be empty",
        ));
    }

    Ok(booking)
}

fn field<'a>(payload: &'a Value, name: &'static str) -> Result<&'a Value, ValidationError> {
    match payload.get(name) {
        None | Some(Value::Null) => Err(ValidationError::MissingField(name)),
        Some(value) => Ok(value),
    }
}

fn text(payload: &Value, name: &'static str) -> Result<String, ValidationError> {
    field(payload, name)?
        .as_str()
        .map(str::to_owned)
        .ok_or(ValidationError::InvalidType {
            field: name,
            expected: "a string",
        })
}

fn integer(payload: &Value, name: &'static str) -> Result<i64, ValidationError> {
    field(payload, name)?
        .as_i64()
        .ok_or(ValidationError::InvalidType {
            field: name,
            expected: "an integer",
        })
}

fn number(payload: &Value, name: &'static str) -> Result<f64, ValidationError> {
    field(payload, name)?
        .as_f64()
        .ok_or(ValidationError::InvalidType {
            field: name,
            expected: "a number",
        })
}

fn date(payload: &Value, name: &'static str) -> Result<NaiveDate, ValidationError> {
    let raw = text(payload, name)?;
    NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|_| ValidationError::InvalidFormat(name))
}
