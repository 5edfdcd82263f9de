use crate::models::{AnalyticsResponse, EngagementSummary, NicheStats, SearchPage, Video};
use crate::niche::{Niche, NicheFilter};
use crate::services::youtube::VideoSource;
use chrono::{Datelike, Utc};
use log::debug;
use rand::seq::SliceRandom;

/// Niches fanned out on every aggregate pull, in request order.
pub const NICHES: [Niche; 5] = [
    Niche::Entertainment,
    Niche::Sports,
    Niche::Business,
    Niche::Ai,
    Niche::Science,
];

const FEED_PER_NICHE: u32 = 5;
const ANALYTICS_PER_NICHE: u32 = 10;
const RANKING_SIZE: usize = 5;
const TRENDING_PAGE_SIZE: u32 = 20;

/// One bounded empty-query search per niche, awaited sequentially. A niche
/// whose request fails contributes zero results; the pull never aborts and
/// nothing is retried.
async fn pull_all_niches(source: &dyn VideoSource, per_niche: u32) -> Vec<Video> {
    let mut all_videos = Vec::new();
    for niche in NICHES {
        let page = source
            .search("", NicheFilter::Only(niche), per_niche, None)
            .await;
        debug!("Niche {niche} contributed {} videos", page.videos.len());
        // Results carry the niche they were fetched under, not the remote
        // platform's lossy category mapping.
        all_videos.extend(page.videos.into_iter().map(|mut video| {
            video.niche = niche;
            video
        }));
    }
    all_videos
}

/// Discovery feed: a few videos from every niche, randomly shuffled.
pub async fn discovery_feed(source: &dyn VideoSource) -> Vec<Video> {
    let mut videos = pull_all_niches(source, FEED_PER_NICHE).await;
    videos.shuffle(&mut rand::thread_rng());
    videos
}

/// Analytics: one aggregate pull, three independent top-N rankings plus the
/// engagement summary and per-niche breakdown derived from the view ranking.
pub async fn analytics_overview(source: &dyn VideoSource) -> AnalyticsResponse {
    let videos = pull_all_niches(source, ANALYTICS_PER_NICHE).await;

    let top_viewed = ranked_by(&videos, |v| v.view_count);
    let most_liked = ranked_by(&videos, |v| v.like_count);
    let most_commented = ranked_by(&videos, |v| v.comment_count);

    let summary = engagement_summary(&top_viewed);
    let niches = niche_breakdown(&top_viewed);

    AnalyticsResponse {
        top_viewed,
        most_liked,
        most_commented,
        summary,
        niches,
    }
}

/// The API has no trending endpoint; a dated query across all niches is the
/// stand-in the original product shipped with.
pub async fn trending_page(source: &dyn VideoSource, page_token: Option<&str>) -> SearchPage {
    let now = Utc::now();
    let query = format!("trending {}-{}", now.year(), now.month());
    source
        .search(&query, NicheFilter::All, TRENDING_PAGE_SIZE, page_token)
        .await
}

fn ranked_by(videos: &[Video], key: impl Fn(&Video) -> u64) -> Vec<Video> {
    let mut ranked = videos.to_vec();
    ranked.sort_by(|a, b| key(b).cmp(&key(a)));
    ranked.truncate(RANKING_SIZE);
    ranked
}

fn engagement_summary(videos: &[Video]) -> EngagementSummary {
    if videos.is_empty() {
        return EngagementSummary {
            avg_views: 0,
            avg_likes: 0,
            avg_comments: 0,
            engagement_rate: 0.0,
        };
    }

    let count = videos.len() as f64;
    let views: u64 = videos.iter().map(|v| v.view_count).sum();
    let likes: u64 = videos.iter().map(|v| v.like_count).sum();
    let comments: u64 = videos.iter().map(|v| v.comment_count).sum();

    EngagementSummary {
        avg_views: (views as f64 / count).round() as u64,
        avg_likes: (likes as f64 / count).round() as u64,
        avg_comments: (comments as f64 / count).round() as u64,
        engagement_rate: engagement_rate(likes, comments, views),
    }
}

/// (likes + comments) / views as a percentage, two decimal places.
fn engagement_rate(likes: u64, comments: u64, views: u64) -> f64 {
    if views == 0 {
        return 0.0;
    }
    ((likes + comments) as f64 / views as f64 * 100.0 * 100.0).round() / 100.0
}

fn niche_breakdown(top_viewed: &[Video]) -> Vec<NicheStats> {
    NICHES
        .iter()
        .map(|&niche| {
            let videos: Vec<&Video> = top_viewed.iter().filter(|v| v.niche == niche).collect();
            if videos.is_empty() {
                return NicheStats {
                    niche,
                    video_count: 0,
                    avg_views: 0,
                    avg_likes: 0,
                    engagement_rate: 0.0,
                };
            }
            let count = videos.len() as f64;
            let views: u64 = videos.iter().map(|v| v.view_count).sum();
            let likes: u64 = videos.iter().map(|v| v.like_count).sum();
            let comments: u64 = videos.iter().map(|v| v.comment_count).sum();
            NicheStats {
                niche,
                video_count: videos.len(),
                avg_views: (views as f64 / count).round() as u64,
                avg_likes: (likes as f64 / count).round() as u64,
                engagement_rate: engagement_rate(likes, comments, views),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    fn video(id: &str, views: u64, likes: u64, comments: u64) -> Video {
        Video {
            id: id.to_string(),
            title: format!("Video {id}"),
            channel_name: "Channel".to_string(),
            channel_avatar: String::new(),
            thumbnail_url: String::new(),
            view_count: views,
            like_count: likes,
            comment_count: comments,
            duration: "5:09".to_string(),
            published_at: "2026-08-01T00:00:00Z".to_string(),
            niche: Niche::Entertainment,
        }
    }

    /// Serves a fixed number of videos per niche; Sports and Science behave
    /// like failed requests and serve nothing.
    struct FlakySource;

    #[async_trait]
    impl VideoSource for FlakySource {
        async fn search(
            &self,
            _query: &str,
            niche: NicheFilter,
            max_results: u32,
            _page_token: Option<&str>,
        ) -> SearchPage {
            let videos = match niche {
                NicheFilter::Only(Niche::Sports) | NicheFilter::Only(Niche::Science) => Vec::new(),
                _ => (0..max_results)
                    .map(|i| video(&format!("{niche:?}-{i}"), 100 * (i as u64 + 1), 10, 1))
                    .collect(),
            };
            SearchPage {
                videos,
                next_page_token: None,
            }
        }
    }

    #[tokio::test]
    async fn failing_niches_contribute_zero_results_without_aborting() {
        let videos = pull_all_niches(&FlakySource, 10).await;
        // 3 of 5 niches served 10 results each.
        assert_eq!(videos.len(), 30);
        for niche in [Niche::Entertainment, Niche::Business, Niche::Ai] {
            assert_eq!(videos.iter().filter(|v| v.niche == niche).count(), 10);
        }
        assert!(videos.iter().all(|v| v.niche != Niche::Sports));
    }

    #[tokio::test]
    async fn feed_contains_every_successful_niche() {
        let feed = discovery_feed(&FlakySource).await;
        assert_eq!(feed.len(), 15);
        for niche in [Niche::Entertainment, Niche::Business, Niche::Ai] {
            assert_eq!(feed.iter().filter(|v| v.niche == niche).count(), 5);
        }
    }

    #[tokio::test]
    async fn trending_uses_a_dated_query_across_all_niches() {
        struct CaptureSource;

        #[async_trait]
        impl VideoSource for CaptureSource {
            async fn search(
                &self,
                query: &str,
                niche: NicheFilter,
                max_results: u32,
                page_token: Option<&str>,
            ) -> SearchPage {
                assert!(query.starts_with("trending "));
                assert_eq!(niche, NicheFilter::All);
                assert_eq!(max_results, TRENDING_PAGE_SIZE);
                assert_eq!(page_token, Some("token-1"));
                SearchPage::default()
            }
        }

        trending_page(&CaptureSource, Some("token-1")).await;
    }

    #[test]
    fn rankings_are_descending_and_idempotent() {
        let videos = vec![
            video("a", 10, 5, 1),
            video("b", 500, 1, 9),
            video("c", 100, 50, 2),
            video("d", 900, 2, 7),
            video("e", 50, 80, 3),
            video("f", 700, 3, 4),
        ];

        let once = ranked_by(&videos, |v| v.view_count);
        assert_eq!(once.len(), RANKING_SIZE);
        let views: Vec<u64> = once.iter().map(|v| v.view_count).collect();
        assert_eq!(views, vec![900, 700, 500, 100, 50]);

        let twice = ranked_by(&once, |v| v.view_count);
        assert_eq!(once, twice);

        let by_likes = ranked_by(&videos, |v| v.like_count);
        assert_eq!(by_likes[0].like_count, 80);
    }

    #[test]
    fn engagement_summary_matches_hand_computation() {
        let videos = vec![video("a", 1000, 50, 10), video("b", 3000, 70, 30)];
        let summary = engagement_summary(&videos);
        assert_eq!(summary.avg_views, 2000);
        assert_eq!(summary.avg_likes, 60);
        assert_eq!(summary.avg_comments, 20);
        // (120 + 40) / 4000 * 100 = 4.00
        assert_eq!(summary.engagement_rate, 4.0);
    }

    #[test]
    fn empty_pull_yields_a_zeroed_summary() {
        let summary = engagement_summary(&[]);
        assert_eq!(summary.avg_views, 0);
        assert_eq!(summary.engagement_rate, 0.0);
    }

    #[test]
    fn niche_breakdown_covers_all_niches_even_when_absent() {
        let mut a = video("a", 1000, 50, 10);
        a.niche = Niche::Ai;
        let mut b = video("b", 2000, 30, 20);
        b.niche = Niche::Ai;

        let stats = niche_breakdown(&[a, b]);
        assert_eq!(stats.len(), NICHES.len());

        let ai = stats.iter().find(|s| s.niche == Niche::Ai).unwrap();
        assert_eq!(ai.video_count, 2);
        assert_eq!(ai.avg_views, 1500);

        let sports = stats.iter().find(|s| s.niche == Niche::Sports).unwrap();
        assert_eq!(sports.video_count, 0);
        assert_eq!(sports.engagement_rate, 0.0);
    }
}
