#[macro_use]
extern crate rocket;

mod api;
mod config;
mod models;
mod niche;
mod services;
mod utils;

use rocket::{Build, Rocket};
use rocket_cors::Cors;

use crate::services::youtube::YouTubeClient;

pub struct AppState {
    pub youtube: YouTubeClient,
}

fn build_rocket(state: AppState, cors: Cors) -> Rocket<Build> {
    rocket::build()
        .manage(state)
        .mount(
            "/search",
            routes![api::search::search_videos, api::search::suggest],
        )
        .mount("/feed", routes![api::feed::feed, api::feed::trending])
        .mount("/analytics", routes![api::analytics::analytics])
        .mount(
            "/ideas",
            routes![api::ideas::list_ideas, api::ideas::generate_idea],
        )
        .attach(cors)
}

#[launch]
fn rocket() -> _ {
    config::load_environment();
    config::init_logger();

    let state = AppState {
        youtube: YouTubeClient::from_env(),
    };
    let cors = config::create_cors().expect("Failed to create CORS options");

    build_rocket(state, cors)
}
