use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted booking row. `id` is assigned by the store and never reused.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub number_of_adults: i64,
    pub number_of_children: i64,
    pub number_of_rooms: i64,
    pub room_type: String,
    pub status: String,
    pub email: String,
    pub phone: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub booking_time: String,
    pub price: f64,
}

/// A booking that passed validation and is ready to be written.
/// Carries every column except `id`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBooking {
    pub first_name: String,
    pub last_name: String,
    pub number_of_adults: i64,
    pub number_of_children: i64,
    pub number_of_rooms: i64,
    pub room_type: String,
    pub status: String,
    pub email: String,
    pub phone: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub booking_time: String,
    pub price: f64,
}
