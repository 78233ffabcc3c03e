use std::env;

use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;

use crate::db::BookingStore;

mod db;
mod handlers;
mod models;
mod validation;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger and environment
    dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let database_url =
        env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:bookings.db?mode=rwc".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(8080);

    log::info!("Connecting to database...");
    let store = BookingStore::connect(&database_url)
        .await
        .expect("Failed to initialize booking store");

    log::info!("Starting server at http://localhost:{port}");

    let store_data = web::Data::new(store);

    HttpServer::new(move || {
        App::new()
            .app_data(store_data.clone())
            .wrap(middleware::Logger::default())
            .configure(handlers::bookings::routes)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
