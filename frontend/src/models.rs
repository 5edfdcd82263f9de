use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Niche {
    Entertainment,
    Sports,
    Business,
    #[serde(rename = "AI")]
    Ai,
    Science,
}

impl Niche {
    pub fn all() -> [Niche; 5] {
        [
            Niche::Entertainment,
            Niche::Sports,
            Niche::Business,
            Niche::Ai,
            Niche::Science,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Niche::Entertainment => "Entertainment",
            Niche::Sports => "Sports",
            Niche::Business => "Business",
            Niche::Ai => "AI",
            Niche::Science => "Science",
        }
    }
}

impl fmt::Display for Niche {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

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
    pub duration: String,
    pub published_at: String,
    pub niche: Niche,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchPage {
    pub videos: Vec<Video>,
    pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedResponse {
    pub videos: Vec<Video>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementSummary {
    pub avg_views: u64,
    pub avg_likes: u64,
    pub avg_comments: u64,
    pub engagement_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NicheStats {
    pub niche: Niche,
    pub video_count: usize,
    pub avg_views: u64,
    pub avg_likes: u64,
    pub engagement_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
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

impl Difficulty {
    pub fn display_name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Difficulty::Easy => "bg-green-100 text-green-800",
            Difficulty::Medium => "bg-yellow-100 text-yellow-800",
            Difficulty::Hard => "bg-red-100 text-red-800",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
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
