use crate::models::SearchPage;
use crate::niche::NicheFilter;
use crate::services::youtube::VideoSource;
use crate::AppState;
use log::info;
use rocket::serde::json::Json;
use rocket::{get, State};

const DEFAULT_PAGE_SIZE: u32 = 20;
const MAX_PAGE_SIZE: u32 = 50;

#[get("/?<query>&<niche>&<max_results>&<page_token>")]
pub async fn search_videos(
    query: Option<String>,
    niche: Option<String>,
    max_results: Option<u32>,
    page_token: Option<String>,
    state: &State<AppState>,
) -> Json<SearchPage> {
    let query = query.unwrap_or_default();
    let niche = NicheFilter::from_param(niche.as_deref().unwrap_or("All"));
    let max_results = max_results.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE);

    let page = state
        .youtube
        .search(&query, niche, max_results, page_token.as_deref())
        .await;
    info!(
        "Search {query:?} in {niche:?} returned {} videos",
        page.videos.len()
    );
    Json(page)
}

#[get("/suggest?<query>")]
pub async fn suggest(query: Option<String>, state: &State<AppState>) -> Json<Vec<String>> {
    let suggestions = state
        .youtube
        .suggestions(query.as_deref().unwrap_or(""))
        .await;
    Json(suggestions)
}
