use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Row, SqlitePool};
use thiserror::Error;

use crate::models::booking::{Booking, NewBooking};

/// One canonical schema: status column with its payment default, unique
/// email and phone, and a (start_date, end_date, booking_time) stay range.
const CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS bookings (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    number_of_adults INTEGER NOT NULL,
    number_of_children INTEGER NOT NULL,
    number_of_rooms INTEGER NOT NULL,
    room_type TEXT NOT NULL,
    status TEXT NOT NULL DEFAULT 'not paid',
    email TEXT NOT NULL UNIQUE,
    phone TEXT NOT NULL UNIQUE,
    start_date DATE NOT NULL,
    end_date DATE NOT NULL,
    booking_time TEXT NOT NULL,
    price REAL NOT NULL
)
"#;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0} already in use")]
    Duplicate(&'static str),
    #[error("booking not found")]
    NotFound,
    #[error("storage unavailable")]
    Unavailable(#[source] sqlx::Error),
}

/// Durable storage for booking records. Each operation is a single
/// statement against the `bookings` table; connections come from the pool
/// per call and are released on every exit path.
pub struct BookingStore {
    pool: SqlitePool,
}

impl BookingStore {
    /// Opens the database at `database_url` and performs idempotent schema
    /// setup. Called once at process start.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await
            .map_err(StoreError::Unavailable)?;
        Self::with_pool(pool).await
    }

    /// Wraps an existing pool; used by tests running against in-memory
    /// databases.
    pub async fn with_pool(pool: SqlitePool) -> Result<Self, StoreError> {
        sqlx::query(CREATE_TABLE)
            .execute(&pool)
            .await
            .map_err(StoreError::Unavailable)?;
        Ok(Self { pool })
    }

    /// All bookings, ascending by id.
    pub async fn list_all(&self) -> Result<Vec<Booking>, StoreError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::Unavailable)
    }

    /// Persists a validated booking and returns the assigned id.
    pub async fn create(&self, booking: &NewBooking) -> Result<i64, StoreError> {
        let row = sqlx::query(
            r#"
            INSERT INTO bookings (
                first_name, last_name, number_of_adults, number_of_children,
                number_of_rooms, room_type, status, email, phone,
                start_date, end_date, booking_time, price
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&booking.first_name)
        .bind(&booking.last_name)
        .bind(booking.number_of_adults)
        .bind(booking.number_of_children)
        .bind(booking.number_of_rooms)
        .bind(&booking.room_type)
        .bind(&booking.status)
        .bind(&booking.email)
        .bind(&booking.phone)
        .bind(booking.start_date)
        .bind(booking.end_date)
        .bind(&booking.booking_time)
        .bind(booking.price)
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_err)?;
        Ok(row.get::<i64, _>("id"))
    }

    /// Replaces every field of the row matching `id`. Zero rows touched
    /// means the id does not exist.
    pub async fn update(&self, id: i64, booking: &NewBooking) -> Result<(), StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE bookings
            SET first_name = ?, last_name = ?, number_of_adults = ?,
                number_of_children = ?, number_of_rooms = ?, room_type = ?,
                status = ?, email = ?, phone = ?, start_date = ?, end_date = ?,
                booking_time = ?, price = ?
            WHERE id = ?
            "#,
        )
        .bind(&booking.first_name)
        .bind(&booking.last_name)
        .bind(booking.number_of_adults)
        .bind(booking.number_of_children)
        .bind(booking.number_of_rooms)
        .bind(&booking.room_type)
        .bind(&booking.status)
        .bind(&booking.email)
        .bind(&booking.phone)
        .bind(booking.start_date)
        .bind(booking.end_date)
        .bind(&booking.booking_time)
        .bind(booking.price)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_write_err)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    /// Removes the row matching `id`.
    pub async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(StoreError::Unavailable)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}

/// Unique-constraint conflicts become a clean, field-level error; everything
/// else stays a storage fault. Constraint text never leaves this function.
fn map_write_err(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db) = &err {
        if db.is_unique_violation() {
            // SQLite reports "UNIQUE constraint failed: bookings.<column>"
            let field = if db.message().contains("bookings.phone") {
                "phone"
            } else {
                "email"
            };
            return StoreError::Duplicate(field);
        }
    }
    StoreError::Unavailable(err)
}
