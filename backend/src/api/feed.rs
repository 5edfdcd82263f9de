use crate::models::{FeedResponse, SearchPage};
use crate::services::aggregator;
use crate::AppState;
use log::info;
use rocket::serde::json::Json;
use rocket::{get, State};

#[get("/")]
pub async fn feed(state: &State<AppState>) -> Json<FeedResponse> {
    let videos = aggregator::discovery_feed(&state.youtube).await;
    info!("Discovery feed assembled with {} videos", videos.len());
    Json(FeedResponse { videos })
}

#[get("/trending?<page_token>")]
pub async fn trending(page_token: Option<String>, state: &State<AppState>) -> Json<SearchPage> {
    Json(aggregator::trending_page(&state.youtube, page_token.as_deref()).await)
}
