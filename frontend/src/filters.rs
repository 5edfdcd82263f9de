//! Re-ordering and thinning of already-fetched video lists. Nothing in here
//! issues a network request.

use crate::models::Video;
use chrono::{DateTime, Datelike, Duration, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Relevance,
    Date,
    Views,
    Rating,
    Title,
}

impl SortKey {
    pub fn all() -> [SortKey; 5] {
        [
            SortKey::Relevance,
            SortKey::Date,
            SortKey::Views,
            SortKey::Rating,
            SortKey::Title,
        ]
    }

    /// Unrecognized keys sort as `Relevance`, which keeps the API order.
    pub fn from_key(key: &str) -> Self {
        match key {
            "date" => SortKey::Date,
            "views" => SortKey::Views,
            "rating" => SortKey::Rating,
            "title" => SortKey::Title,
            _ => SortKey::Relevance,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            SortKey::Relevance => "relevance",
            SortKey::Date => "date",
            SortKey::Views => "views",
            SortKey::Rating => "rating",
            SortKey::Title => "title",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Relevance => "Relevance",
            SortKey::Date => "Upload date",
            SortKey::Views => "View count",
            SortKey::Rating => "Rating",
            SortKey::Title => "Title",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateBucket {
    Any,
    Today,
    Week,
    Month,
    Year,
}

impl DateBucket {
    pub fn all() -> [DateBucket; 5] {
        [
            DateBucket::Any,
            DateBucket::Today,
            DateBucket::Week,
            DateBucket::Month,
            DateBucket::Year,
        ]
    }

    pub fn from_key(key: &str) -> Self {
        match key {
            "today" => DateBucket::Today,
            "week" => DateBucket::Week,
            "month" => DateBucket::Month,
            "year" => DateBucket::Year,
            _ => DateBucket::Any,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            DateBucket::Any => "any",
            DateBucket::Today => "today",
            DateBucket::Week => "week",
            DateBucket::Month => "month",
            DateBucket::Year => "year",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DateBucket::Any => "Any time",
            DateBucket::Today => "Today",
            DateBucket::Week => "This week",
            DateBucket::Month => "This month",
            DateBucket::Year => "This year",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    /// Inclusive duration range in minutes.
    pub duration_minutes: (u32, u32),
    pub min_views: u64,
    pub min_likes: u64,
    pub min_comments: u64,
    pub upload_date: DateBucket,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            duration_minutes: (0, 60),
            min_views: 1000,
            min_likes: 100,
            min_comments: 10,
            upload_date: DateBucket::Any,
        }
    }
}

/// Stable in-place sort. `Relevance` leaves the API order untouched.
pub fn sort_videos(videos: &mut [Video], key: SortKey) {
    match key {
        SortKey::Relevance => {}
        SortKey::Date => {
            videos.sort_by_key(|v| std::cmp::Reverse(published_timestamp(v)));
        }
        SortKey::Views => videos.sort_by(|a, b| b.view_count.cmp(&a.view_count)),
        SortKey::Rating => videos.sort_by(|a, b| b.like_count.cmp(&a.like_count)),
        SortKey::Title => videos.sort_by(|a, b| a.title.cmp(&b.title)),
    }
}

/// A record is retained only if every threshold holds.
pub fn filter_videos(videos: &[Video], filters: &FilterState, now: DateTime<Utc>) -> Vec<Video> {
    videos
        .iter()
        .filter(|video| retained(video, filters, now))
        .cloned()
        .collect()
}

/// Substring match over title and channel name, case-insensitive. Used for
/// searching within an already-fetched list.
pub fn matches_query(video: &Video, query: &str) -> bool {
    let query = query.to_lowercase();
    video.title.to_lowercase().contains(&query)
        || video.channel_name.to_lowercase().contains(&query)
}

/// Minutes represented by a clock string ("1:02:03" or "5:09").
pub fn duration_minutes(clock: &str) -> u32 {
    let parts: Vec<&str> = clock.split(':').collect();
    match parts.len() {
        3 => parts[0].parse::<u32>().unwrap_or(0) * 60 + parts[1].parse::<u32>().unwrap_or(0),
        2 => parts[0].parse::<u32>().unwrap_or(0),
        _ => 0,
    }
}

pub fn published_timestamp(video: &Video) -> i64 {
    video
        .published_at
        .parse::<DateTime<Utc>>()
        .map(|d| d.timestamp())
        .unwrap_or(0)
}

fn retained(video: &Video, filters: &FilterState, now: DateTime<Utc>) -> bool {
    let minutes = duration_minutes(&video.duration);
    if minutes < filters.duration_minutes.0 || minutes > filters.duration_minutes.1 {
        return false;
    }
    if video.view_count < filters.min_views
        || video.like_count < filters.min_likes
        || video.comment_count < filters.min_comments
    {
        return false;
    }
    match filters.upload_date {
        DateBucket::Any => true,
        bucket => video
            .published_at
            .parse::<DateTime<Utc>>()
            .map(|published| in_bucket(published, bucket, now))
            .unwrap_or(false),
    }
}

fn in_bucket(published: DateTime<Utc>, bucket: DateBucket, now: DateTime<Utc>) -> bool {
    match bucket {
        DateBucket::Any => true,
        DateBucket::Today => published.date_naive() == now.date_naive(),
        DateBucket::Week => published >= now - Duration::days(7),
        DateBucket::Month => published.month() == now.month() && published.year() == now.year(),
        DateBucket::Year => published.year() == now.year(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Niche;
    use chrono::TimeZone;

    fn video(id: &str, title: &str, views: u64, likes: u64, comments: u64, duration: &str, published: &str) -> Video {
        Video {
            id: id.to_string(),
            title: title.to_string(),
            channel_name: "Channel".to_string(),
            channel_avatar: String::new(),
            thumbnail_url: String::new(),
            view_count: views,
            like_count: likes,
            comment_count: comments,
            duration: duration.to_string(),
            published_at: published.to_string(),
            niche: Niche::Entertainment,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 28, 12, 0, 0).unwrap()
    }

    #[test]
    fn clock_strings_convert_to_minutes() {
        assert_eq!(duration_minutes("1:02:03"), 62);
        assert_eq!(duration_minutes("5:09"), 5);
        assert_eq!(duration_minutes("0:45"), 0);
        assert_eq!(duration_minutes("bogus"), 0);
    }

    #[test]
    fn view_sort_is_descending_and_idempotent() {
        let mut videos = vec![
            video("a", "A", 10, 0, 0, "5:09", "2026-08-01T00:00:00Z"),
            video("b", "B", 500, 0, 0, "5:09", "2026-08-01T00:00:00Z"),
            video("c", "C", 100, 0, 0, "5:09", "2026-08-01T00:00:00Z"),
        ];
        sort_videos(&mut videos, SortKey::Views);
        let once = videos.clone();
        assert_eq!(
            once.iter().map(|v| v.view_count).collect::<Vec<_>>(),
            vec![500, 100, 10]
        );
        sort_videos(&mut videos, SortKey::Views);
        assert_eq!(videos, once);
    }

    #[test]
    fn unrecognized_sort_key_keeps_original_order() {
        let original = vec![
            video("a", "Zebra", 10, 0, 0, "5:09", "2026-08-01T00:00:00Z"),
            video("b", "Apple", 500, 0, 0, "5:09", "2026-08-02T00:00:00Z"),
        ];
        let mut videos = original.clone();
        sort_videos(&mut videos, SortKey::from_key("magic"));
        assert_eq!(videos, original);
    }

    #[test]
    fn date_sort_puts_newest_first() {
        let mut videos = vec![
            video("old", "Old", 0, 0, 0, "5:09", "2024-01-01T00:00:00Z"),
            video("new", "New", 0, 0, 0, "5:09", "2026-08-27T00:00:00Z"),
            video("mid", "Mid", 0, 0, 0, "5:09", "2025-06-15T00:00:00Z"),
        ];
        sort_videos(&mut videos, SortKey::Date);
        let ids: Vec<&str> = videos.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "mid", "old"]);
    }

    #[test]
    fn title_sort_is_lexicographic() {
        let mut videos = vec![
            video("b", "Bravo", 0, 0, 0, "5:09", "2026-08-01T00:00:00Z"),
            video("a", "Alpha", 0, 0, 0, "5:09", "2026-08-01T00:00:00Z"),
        ];
        sort_videos(&mut videos, SortKey::Title);
        assert_eq!(videos[0].title, "Alpha");
    }

    #[test]
    fn all_thresholds_must_hold() {
        let filters = FilterState {
            duration_minutes: (1, 30),
            min_views: 1000,
            min_likes: 100,
            min_comments: 10,
            upload_date: DateBucket::Any,
        };
        let keep = video("k", "K", 5000, 200, 50, "5:09", "2026-08-01T00:00:00Z");
        let too_short = video("s", "S", 5000, 200, 50, "0:45", "2026-08-01T00:00:00Z");
        let too_long = video("l", "L", 5000, 200, 50, "1:02:03", "2026-08-01T00:00:00Z");
        let few_views = video("v", "V", 999, 200, 50, "5:09", "2026-08-01T00:00:00Z");
        let few_likes = video("i", "I", 5000, 99, 50, "5:09", "2026-08-01T00:00:00Z");
        let few_comments = video("c", "C", 5000, 200, 9, "5:09", "2026-08-01T00:00:00Z");

        let input = vec![keep.clone(), too_short, too_long, few_views, few_likes, few_comments];
        let kept = filter_videos(&input, &filters, now());
        assert_eq!(kept, vec![keep]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let filters = FilterState::default();
        let input = vec![
            video("a", "A", 5000, 200, 50, "5:09", "2026-08-01T00:00:00Z"),
            video("b", "B", 10, 0, 0, "5:09", "2026-08-01T00:00:00Z"),
        ];
        let once = filter_videos(&input, &filters, now());
        let twice = filter_videos(&once, &filters, now());
        assert_eq!(once, twice);
    }

    #[test]
    fn date_buckets_are_calendar_relative() {
        let same_day = Utc.with_ymd_and_hms(2026, 8, 28, 3, 0, 0).unwrap();
        let six_days_ago = Utc.with_ymd_and_hms(2026, 8, 22, 12, 0, 0).unwrap();
        let same_month = Utc.with_ymd_and_hms(2026, 8, 2, 0, 0, 0).unwrap();
        let same_year = Utc.with_ymd_and_hms(2026, 1, 2, 0, 0, 0).unwrap();
        let last_year = Utc.with_ymd_and_hms(2025, 12, 31, 0, 0, 0).unwrap();

        assert!(in_bucket(same_day, DateBucket::Today, now()));
        assert!(!in_bucket(six_days_ago, DateBucket::Today, now()));
        assert!(in_bucket(six_days_ago, DateBucket::Week, now()));
        assert!(in_bucket(same_month, DateBucket::Month, now()));
        assert!(!in_bucket(same_year, DateBucket::Month, now()));
        assert!(in_bucket(same_year, DateBucket::Year, now()));
        assert!(!in_bucket(last_year, DateBucket::Year, now()));
    }

    #[test]
    fn bucket_filter_drops_unparseable_timestamps() {
        let filters = FilterState {
            upload_date: DateBucket::Year,
            min_views: 0,
            min_likes: 0,
            min_comments: 0,
            ..FilterState::default()
        };
        let bad = video("a", "A", 10, 10, 10, "5:09", "yesterday-ish");
        assert!(filter_videos(&[bad], &filters, now()).is_empty());
    }

    #[test]
    fn local_search_matches_title_or_channel() {
        let mut v = video("a", "Rust async deep dive", 0, 0, 0, "5:09", "2026-08-01T00:00:00Z");
        v.channel_name = "Ferris Weekly".to_string();
        assert!(matches_query(&v, "ASYNC"));
        assert!(matches_query(&v, "ferris"));
        assert!(!matches_query(&v, "python"));
    }
}
