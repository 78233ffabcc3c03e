use actix_web::{web, HttpResponse, Responder};
use serde_json::Value;

use crate::db::{BookingStore, StoreError};
use crate::validation::{self, ValidationError};

// Helper error struct
#[derive(serde::Serialize)]
struct ErrorResponse {
    error: String,
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(list_bookings))
        .route("/booking", web::post().to(create_booking))
        .route("/update-booking/{id}", web::put().to(update_booking))
        .route("/delete-booking/{id}", web::delete().to(delete_booking));
}

pub async fn list_bookings(store: web::Data<BookingStore>) -> impl Responder {
    match store.list_all().await {
        Ok(bookings) => HttpResponse::Ok().json(bookings),
        Err(err) => store_error(err),
    }
}

pub async fn create_booking(
    store: web::Data<BookingStore>,
    body: web::Json<Value>,
) -> impl Responder {
    let booking = match validation::validate_create(&body) {
        Ok(booking) => booking,
        Err(err) => return bad_request(&err),
    };

    match store.create(&booking).await {
        Ok(_id) => HttpResponse::Created().json(serde_json::json!({"status": "success"})),
        Err(err) => store_error(err),
    }
}

pub async fn update_booking(
    store: web::Data<BookingStore>,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> impl Responder {
    let raw = path.into_inner();
    let id = match validation::validate_id(&raw) {
        Ok(id) => id,
        Err(err) => return bad_request(&err),
    };
    let booking = match validation::validate_update(&body) {
        Ok(booking) => booking,
        Err(err) => return bad_request(&err),
    };

    match store.update(id, &booking).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({"status": "success"})),
        Err(err) => store_error(err),
    }
}

pub async fn delete_booking(store: web::Data<BookingStore>, path: web::Path<String>) -> impl Responder {
    let raw = path.into_inner();
    let id = match validation::validate_id(&raw) {
        Ok(id) => id,
        Err(err) => return bad_request(&err),
    };

    match store.delete(id).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({"status": "success"})),
        Err(err) => store_error(err),
    }
}

fn bad_request(err: &ValidationError) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: err.to_string(),
    })
}

fn store_error(err: StoreError) -> HttpResponse {
    match &err {
        StoreError::Duplicate(_) => HttpResponse::BadRequest().json(ErrorResponse {
            error: err.to_string(),
        }),
        StoreError::NotFound => HttpResponse::NotFound().json(ErrorResponse {
            error: err.to_string(),
        }),
        StoreError::Unavailable(source) => {
            // Driver detail goes to the log, never to the caller.
            log::error!("storage unavailable: {source}");
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: err.to_string(),
            })
        }
    }
}
