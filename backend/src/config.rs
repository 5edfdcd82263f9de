use anyhow::Result;
use env_logger::Builder;
use lazy_static::lazy_static;
use log::{info, LevelFilter};
use rocket::http::Method;
use rocket_cors::{AllowedHeaders, AllowedOrigins, CorsOptions};
use std::env;

lazy_static! {
    pub static ref YOUTUBE_API_KEY: String =
        env::var("YOUTUBE_API_KEY").expect("YOUTUBE_API_KEY environment variable must be set");
    pub static ref FRONTEND_ORIGIN: String =
        env::var("FRONTEND_ORIGIN").unwrap_or_else(|_| "http://localhost:8080".to_string());
}

pub fn init_logger() {
    Builder::new().filter_level(LevelFilter::Info).init();
    info!("Starting Tubio backend...");
}

pub fn load_environment() {
    dotenv::dotenv().ok();
}

pub fn create_cors() -> Result<rocket_cors::Cors> {
    let cors = CorsOptions::default()
        .allowed_origins(AllowedOrigins::some_exact(&[FRONTEND_ORIGIN.as_str()]))
        .allowed_methods(
            vec![Method::Get, Method::Options]
                .into_iter()
                .map(From::from)
                .collect(),
        )
        .allowed_headers(AllowedHeaders::some(&["Accept", "Content-Type"]))
        .to_cors()
        .map_err(|e| anyhow::anyhow!("Failed to create CORS options: {}", e))?;

    Ok(cors)
}
