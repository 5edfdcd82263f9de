use crate::config::YOUTUBE_API_KEY;
use crate::models::{SearchPage, Video};
use crate::niche::{CategoryMap, NicheFilter};
use crate::utils::{format_duration, parse_count};
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use log::{debug, error};
use serde::Deserialize;

const SEARCH_URL: &str = "https://www.googleapis.com/youtube/v3/search";
const VIDEOS_URL: &str = "https://www.googleapis.com/youtube/v3/videos";
const SUGGEST_URL: &str = "https://suggestqueries.google.com/complete/search";

const AVATAR_URL: &str = "https://api.dicebear.com/7.x/avataaars/svg";
const MIN_SUGGEST_QUERY_CHARS: usize = 2;

/// Anything that can serve one bounded page of normalized video results.
/// Implemented by the real API client and by stubs in tests.
#[async_trait]
pub trait VideoSource: Send + Sync {
    async fn search(
        &self,
        query: &str,
        niche: NicheFilter,
        max_results: u32,
        page_token: Option<&str>,
    ) -> SearchPage;
}

pub struct YouTubeClient {
    http: reqwest::Client,
    api_key: String,
    search_url: String,
    videos_url: String,
    suggest_url: String,
    categories: CategoryMap,
}

impl YouTubeClient {
    pub fn from_env() -> Self {
        Self::new(YOUTUBE_API_KEY.clone())
    }

    pub fn new(api_key: String) -> Self {
        Self::with_base_urls(api_key, SEARCH_URL, VIDEOS_URL, SUGGEST_URL)
    }

    /// Base URLs are injectable so tests can point the client at a local
    /// mock server.
    pub fn with_base_urls(
        api_key: String,
        search_url: &str,
        videos_url: &str,
        suggest_url: &str,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            search_url: search_url.to_string(),
            videos_url: videos_url.to_string(),
            suggest_url: suggest_url.to_string(),
            categories: CategoryMap::default(),
        }
    }

    /// Best-effort autocomplete. Any failure yields an empty list.
    pub async fn suggestions(&self, query: &str) -> Vec<String> {
        if query.chars().count() < MIN_SUGGEST_QUERY_CHARS {
            return Vec::new();
        }
        match self.try_suggestions(query).await {
            Ok(suggestions) => suggestions,
            Err(e) => {
                error!("Suggestion lookup for {query:?} failed: {e:#}");
                Vec::new()
            }
        }
    }

    async fn try_suggestions(&self, query: &str) -> Result<Vec<String>> {
        // Unofficial endpoint; the payload is a two-element array whose second
        // element is the suggestion list.
        let body: serde_json::Value = self
            .http
            .get(&self.suggest_url)
            .query(&[("client", "youtube"), ("ds", "yt"), ("q", query)])
            .send()
            .await
            .context("suggestion request failed")?
            .error_for_status()
            .context("suggestion endpoint returned an error status")?
            .json()
            .await
            .context("suggestion payload was not JSON")?;

        Ok(body
            .get(1)
            .and_then(|v| v.as_array())
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|s| s.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn try_search(
        &self,
        query: &str,
        niche: NicheFilter,
        max_results: u32,
        page_token: Option<&str>,
    ) -> Result<SearchPage> {
        // The niche doubles as a search term when one is selected.
        let search_query = match (query.is_empty(), niche) {
            (false, NicheFilter::Only(n)) => format!("{query} {n}"),
            (false, NicheFilter::All) => query.to_string(),
            (true, NicheFilter::Only(n)) => n.to_string(),
            (true, NicheFilter::All) => String::new(),
        };

        let mut params: Vec<(&str, String)> = vec![
            ("part", "snippet".to_string()),
            ("type", "video".to_string()),
            ("q", search_query),
            ("maxResults", max_results.to_string()),
            ("key", self.api_key.clone()),
        ];
        if let Some(token) = page_token {
            params.push(("pageToken", token.to_string()));
        }
        if let Some(category) = self.categories.category_for_niche(niche) {
            params.push(("videoCategoryId", category.to_string()));
        }

        let listing: SearchListing = self
            .http
            .get(&self.search_url)
            .query(&params)
            .send()
            .await
            .context("keyword search request failed")?
            .error_for_status()
            .context("keyword search returned an error status")?
            .json()
            .await
            .context("keyword search payload was malformed")?;

        let ids: Vec<String> = listing
            .items
            .iter()
            .filter_map(|item| item.id.video_id.clone())
            .collect();

        if ids.is_empty() {
            debug!("Keyword search returned no ids, skipping detail lookup");
            return Ok(SearchPage::default());
        }

        let details: VideoListing = self
            .http
            .get(&self.videos_url)
            .query(&[
                ("part", "snippet,statistics,contentDetails".to_string()),
                ("id", ids.join(",")),
                ("key", self.api_key.clone()),
            ])
            .send()
            .await
            .context("video detail request failed")?
            .error_for_status()
            .context("video detail lookup returned an error status")?
            .json()
            .await
            .context("video detail payload was malformed")?;

        let videos = details
            .items
            .into_iter()
            .map(|item| self.normalize(item))
            .collect();

        Ok(SearchPage {
            videos,
            next_page_token: listing.next_page_token,
        })
    }

    fn normalize(&self, item: VideoItem) -> Video {
        let snippet = item.snippet;
        let avatar_seed = if snippet.channel_title.is_empty() {
            "channel"
        } else {
            snippet.channel_title.as_str()
        };
        let channel_avatar = format!("{AVATAR_URL}?seed={avatar_seed}");
        let thumbnail_url = snippet
            .thumbnails
            .high
            .or(snippet.thumbnails.default)
            .map(|t| t.url)
            .unwrap_or_default();

        Video {
            id: item.id,
            title: snippet.title,
            channel_name: snippet.channel_title,
            channel_avatar,
            thumbnail_url,
            view_count: parse_count(item.statistics.view_count.as_deref()),
            like_count: parse_count(item.statistics.like_count.as_deref()),
            comment_count: parse_count(item.statistics.comment_count.as_deref()),
            duration: format_duration(item.content_details.duration.as_deref().unwrap_or("")),
            published_at: snippet
                .published_at
                .unwrap_or_else(|| Utc::now().to_rfc3339()),
            niche: self.categories.niche_for_category(snippet.category_id.as_deref()),
        }
    }
}

#[async_trait]
impl VideoSource for YouTubeClient {
    async fn search(
        &self,
        query: &str,
        niche: NicheFilter,
        max_results: u32,
        page_token: Option<&str>,
    ) -> SearchPage {
        match self.try_search(query, niche, max_results, page_token).await {
            Ok(page) => page,
            Err(e) => {
                error!("Video search for {query:?} ({niche:?}) failed: {e:#}");
                SearchPage::default()
            }
        }
    }
}

// Wire types for the two API endpoints. Everything is optional or defaulted;
// a partial payload must never fail normalization.

#[derive(Debug, Deserialize)]
struct SearchListing {
    #[serde(default)]
    items: Vec<SearchItem>,
    #[serde(rename = "nextPageToken")]
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    #[serde(default)]
    id: SearchItemId,
}

#[derive(Debug, Default, Deserialize)]
struct SearchItemId {
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct VideoListing {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
struct VideoItem {
    #[serde(default)]
    id: String,
    #[serde(default)]
    snippet: Snippet,
    #[serde(default)]
    statistics: Statistics,
    #[serde(rename = "contentDetails", default)]
    content_details: ContentDetails,
}

#[derive(Debug, Default, Deserialize)]
struct Snippet {
    #[serde(default)]
    title: String,
    #[serde(rename = "channelTitle", default)]
    channel_title: String,
    #[serde(rename = "publishedAt")]
    published_at: Option<String>,
    #[serde(rename = "categoryId")]
    category_id: Option<String>,
    #[serde(default)]
    thumbnails: Thumbnails,
}

#[derive(Debug, Default, Deserialize)]
struct Thumbnails {
    high: Option<Thumbnail>,
    default: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    #[serde(default)]
    url: String,
}

#[derive(Debug, Default, Deserialize)]
struct Statistics {
    #[serde(rename = "viewCount")]
    view_count: Option<String>,
    #[serde(rename = "likeCount")]
    like_count: Option<String>,
    #[serde(rename = "commentCount")]
    comment_count: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ContentDetails {
    duration: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::niche::Niche;
    use mockito::{Matcher, Server};
    use serde_json::json;

    fn client_for(server: &Server) -> YouTubeClient {
        let base = server.url();
        YouTubeClient::with_base_urls(
            "test-key".to_string(),
            &format!("{base}/search"),
            &format!("{base}/videos"),
            &format!("{base}/suggest"),
        )
    }

    #[tokio::test]
    async fn zero_ids_from_keyword_search_skips_the_detail_call() {
        let mut server = Server::new_async().await;
        let search_mock = server
            .mock("GET", "/search")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(json!({ "items": [] }).to_string())
            .create_async()
            .await;
        let videos_mock = server
            .mock("GET", "/videos")
            .match_query(Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let client = client_for(&server);
        let page = client
            .search("dogs", NicheFilter::All, 20, None)
            .await;

        assert!(page.videos.is_empty());
        assert!(page.next_page_token.is_none());
        search_mock.assert_async().await;
        videos_mock.assert_async().await;
    }

    #[tokio::test]
    async fn results_are_normalized_and_token_passed_through() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/search")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(
                json!({
                    "items": [
                        { "id": { "videoId": "vid-1" } },
                        { "id": { "videoId": "vid-2" } },
                        { "id": { "kind": "youtube#channel" } }
                    ],
                    "nextPageToken": "CAUQAA"
                })
                .to_string(),
            )
            .create_async()
            .await;
        server
            .mock("GET", "/videos")
            .match_query(Matcher::UrlEncoded("id".into(), "vid-1,vid-2".into()))
            .with_status(200)
            .with_body(
                json!({
                    "items": [
                        {
                            "id": "vid-1",
                            "snippet": {
                                "title": "Goal compilation",
                                "channelTitle": "Sports Hub",
                                "publishedAt": "2026-08-01T10:00:00Z",
                                "categoryId": "17",
                                "thumbnails": {
                                    "high": { "url": "https://img.example/high.jpg" },
                                    "default": { "url": "https://img.example/default.jpg" }
                                }
                            },
                            "statistics": {
                                "viewCount": "1234",
                                "commentCount": "not-a-number"
                            },
                            "contentDetails": { "duration": "PT5M9S" }
                        },
                        {
                            "id": "vid-2",
                            "snippet": { "title": "Untitled" }
                        }
                    ]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = client_for(&server);
        let page = client
            .search("goals", NicheFilter::Only(Niche::Sports), 20, None)
            .await;

        assert_eq!(page.next_page_token.as_deref(), Some("CAUQAA"));
        assert_eq!(page.videos.len(), 2);

        let first = &page.videos[0];
        assert_eq!(first.id, "vid-1");
        assert_eq!(first.view_count, 1234);
        assert_eq!(first.like_count, 0, "missing stat normalizes to zero");
        assert_eq!(first.comment_count, 0, "non-numeric stat normalizes to zero");
        assert_eq!(first.duration, "5:09");
        assert_eq!(first.niche, Niche::Sports);
        assert_eq!(first.thumbnail_url, "https://img.example/high.jpg");
        assert!(first.channel_avatar.contains("seed=Sports Hub"));

        let second = &page.videos[1];
        assert_eq!(second.duration, "0:00");
        assert_eq!(second.niche, CategoryMap::DEFAULT_NICHE);
        assert!(!second.published_at.is_empty(), "absent timestamp is defaulted");
    }

    #[tokio::test]
    async fn remote_failures_collapse_to_an_empty_page() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/search")
            .match_query(Matcher::Any)
            .with_status(403)
            .with_body("quota exceeded")
            .create_async()
            .await;

        let client = client_for(&server);
        let page = client.search("anything", NicheFilter::All, 20, None).await;
        assert!(page.videos.is_empty());
        assert!(page.next_page_token.is_none());
    }

    #[tokio::test]
    async fn malformed_payloads_collapse_to_an_empty_page() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/search")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("<html>not json</html>")
            .create_async()
            .await;

        let client = client_for(&server);
        let page = client.search("anything", NicheFilter::All, 20, None).await;
        assert!(page.videos.is_empty());
    }

    #[tokio::test]
    async fn suggestions_come_from_the_second_array_element() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/suggest")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(json!(["rust", ["rust tutorial", "rust lang"]]).to_string())
            .create_async()
            .await;

        let client = client_for(&server);
        let suggestions = client.suggestions("rust").await;
        assert_eq!(suggestions, vec!["rust tutorial", "rust lang"]);
    }

    #[tokio::test]
    async fn short_queries_never_hit_the_suggestion_endpoint() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/suggest")
            .match_query(Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let client = client_for(&server);
        assert!(client.suggestions("r").await.is_empty());
        assert!(client.suggestions("").await.is_empty());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn failed_suggestion_lookups_yield_an_empty_list() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/suggest")
            .match_query(Matcher::Any)
            .with_status(503)
            .create_async()
            .await;

        let client = client_for(&server);
        assert!(client.suggestions("rust").await.is_empty());
    }
}
