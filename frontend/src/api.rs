use crate::config::BACKEND_URL;
use crate::models::{AnalyticsResponse, ContentIdea, FeedResponse, SearchPage, Video};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Failed to connect to backend: {e}"))?;

    if !response.ok() {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        return Err(format!("Request failed: HTTP {status} - {text}"));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {e}"))
}

pub async fn search_videos(
    query: &str,
    niche: &str,
    max_results: u32,
    page_token: Option<&str>,
) -> Result<SearchPage, String> {
    let mut url = format!(
        "{}/search/?query={}&niche={}&max_results={}",
        &*BACKEND_URL,
        urlencoding::encode(query),
        urlencoding::encode(niche),
        max_results
    );
    if let Some(token) = page_token {
        url.push_str(&format!("&page_token={}", urlencoding::encode(token)));
    }
    get_json(&url).await
}

pub async fn fetch_suggestions(query: &str) -> Result<Vec<String>, String> {
    let url = format!(
        "{}/search/suggest?query={}",
        &*BACKEND_URL,
        urlencoding::encode(query)
    );
    get_json(&url).await
}

pub async fn fetch_feed() -> Result<Vec<Video>, String> {
    let url = format!("{}/feed/", &*BACKEND_URL);
    get_json::<FeedResponse>(&url).await.map(|r| r.videos)
}

pub async fn fetch_trending(page_token: Option<&str>) -> Result<SearchPage, String> {
    let mut url = format!("{}/feed/trending", &*BACKEND_URL);
    if let Some(token) = page_token {
        url.push_str(&format!("?page_token={}", urlencoding::encode(token)));
    }
    get_json(&url).await
}

pub async fn fetch_analytics() -> Result<AnalyticsResponse, String> {
    let url = format!("{}/analytics/", &*BACKEND_URL);
    get_json(&url).await
}

pub async fn fetch_ideas() -> Result<Vec<ContentIdea>, String> {
    let url = format!("{}/ideas/", &*BACKEND_URL);
    get_json(&url).await
}

pub async fn generate_idea(topic: &str) -> Result<Option<ContentIdea>, String> {
    let url = format!(
        "{}/ideas/generate?topic={}",
        &*BACKEND_URL,
        urlencoding::encode(topic)
    );
    get_json(&url).await
}
