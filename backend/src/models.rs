use crate::niche::Niche;
use serde::{Deserialize, Serialize};

/// Normalized video record. Immutable once built; identity is the platform's
/// video id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub channel_name: String,
    pub channel_avatar: String,
    pub thumbnail_url: String,
    pub view_count: u64,
    pub like_count: u64,
    pub comment_count: u64,
    pub duration: String,     // clock format, "1:02:03" or "5:09"
    pub published_at: String, // RFC 3339
    pub niche: Niche,
}

/// One page of search results. A missing token means no further pages exist.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchPage {
    pub videos: Vec<Video>,
    pub next_page_token: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FeedResponse {
    pub videos: Vec<Video>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementSummary {
    pub avg_views: u64,
    pub avg_likes: u64,
    pub avg_comments: u64,
    /// (likes + comments) / views, percent, two decimals.
    pub engagement_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NicheStats {
    pub niche: Niche,
    pub video_count: usize,
    pub avg_views: u64,
    pub avg_likes: u64,
    pub engagement_rate: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyticsResponse {
    pub top_viewed: Vec<Video>,
    pub most_liked: Vec<Video>,
    pub most_commented: Vec<Video>,
    pub summary: EngagementSummary,
    pub niches: Vec<NicheStats>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Synthetic suggestion derived from one inspiring video. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentIdea {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub difficulty: Difficulty,
    pub estimated_time: String,
    pub related_videos: Vec<Video>,
    pub inspiration_source: Option<String>,
}
