use crate::models::{ContentIdea, Difficulty, Video};
use crate::niche::{Niche, NicheFilter};
use crate::services::aggregator::NICHES;
use crate::services::youtube::VideoSource;
use chrono::{Datelike, Utc};
use rand::Rng;

const IDEA_SEED_RESULTS: u32 = 5;
const MIN_KEYWORD_CHARS: usize = 4;
const MAX_KEYWORDS: usize = 3;

/// View-count thresholds standing in for competition level.
const EASY_VIEW_CEILING: u64 = 100_000;
const HARD_VIEW_FLOOR: u64 = 500_000;

/// One idea per niche, each seeded by that niche's current trending results.
/// Niches whose search comes back empty are skipped.
pub async fn initial_ideas(source: &dyn VideoSource) -> Vec<ContentIdea> {
    let mut ideas = Vec::new();
    for niche in NICHES {
        let page = source
            .search("trending", NicheFilter::Only(niche), IDEA_SEED_RESULTS, None)
            .await;
        if let Some(seed) = page.videos.first() {
            ideas.push(idea_from_video(seed, &page.videos, Some(niche)));
        }
    }
    ideas
}

/// One idea from a free-text topic, searched across all niches. The niche is
/// taken from the first hit; no hits means no idea.
pub async fn idea_for_topic(source: &dyn VideoSource, topic: &str) -> Option<ContentIdea> {
    let page = source
        .search(topic, NicheFilter::All, IDEA_SEED_RESULTS, None)
        .await;
    let seed = page.videos.first()?;
    Some(idea_from_video(seed, &page.videos, Some(seed.niche)))
}

/// Derive one content idea from a seed video. Deterministic apart from the
/// time/random id suffix.
pub fn idea_from_video(video: &Video, related: &[Video], niche: Option<Niche>) -> ContentIdea {
    let year = Utc::now().year();
    let keywords = title_keywords(&video.title);
    let title = title_template(niche, &keywords, year);

    let niche_label = niche
        .map(|n| n.to_string())
        .unwrap_or_else(|| "general".to_string());
    let description = format!(
        "Create a comprehensive {} video that explores {}. Based on trending content, \
         this topic has high viewer interest and engagement potential.",
        niche_label.to_lowercase(),
        title.to_lowercase()
    );

    let tags = vec![
        niche_label,
        keywords.first().copied().unwrap_or("content").to_string(),
        keywords.get(1).copied().unwrap_or("creator").to_string(),
        "tutorial".to_string(),
        "guide".to_string(),
        year.to_string(),
    ];

    let difficulty = difficulty_for_views(video.view_count);

    ContentIdea {
        id: format!(
            "idea-{}-{}",
            Utc::now().timestamp_millis(),
            rand::thread_rng().gen_range(0..1000)
        ),
        title,
        description,
        tags,
        difficulty,
        estimated_time: estimated_time(difficulty).to_string(),
        related_videos: related.to_vec(),
        inspiration_source: Some(video.title.clone()),
    }
}

/// Competition proxy: very popular seed videos mean a crowded topic.
pub fn difficulty_for_views(views: u64) -> Difficulty {
    if views > HARD_VIEW_FLOOR {
        Difficulty::Hard
    } else if views < EASY_VIEW_CEILING {
        Difficulty::Easy
    } else {
        Difficulty::Medium
    }
}

pub fn estimated_time(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "2-3 hours",
        Difficulty::Medium => "4-6 hours",
        Difficulty::Hard => "8+ hours",
    }
}

/// Up to three words longer than four characters, in title order.
fn title_keywords(title: &str) -> Vec<&str> {
    title
        .split_whitespace()
        .filter(|word| word.chars().count() > MIN_KEYWORD_CHARS)
        .take(MAX_KEYWORDS)
        .collect()
}

fn title_template(niche: Option<Niche>, keywords: &[&str], year: i32) -> String {
    let kw = |index: usize, fallback: &str| -> String {
        keywords.get(index).copied().unwrap_or(fallback).to_string()
    };

    match niche {
        Some(Niche::Entertainment) => format!(
            "Top 10 {} {} Moments of {year}",
            kw(0, "Trending"),
            kw(1, "Entertainment")
        ),
        Some(Niche::Sports) => format!(
            "How to Master {} {} Techniques",
            kw(0, "Professional"),
            kw(1, "Sports")
        ),
        Some(Niche::Business) => format!(
            "{} {} Strategies for Beginners",
            kw(0, "Successful"),
            kw(1, "Business")
        ),
        Some(Niche::Ai) => format!(
            "The Future of {} {}: What's Coming Next",
            kw(0, "Artificial"),
            kw(1, "Intelligence")
        ),
        Some(Niche::Science) => format!(
            "Explaining {} {} Concepts Simply",
            kw(0, "Complex"),
            kw(1, "Scientific")
        ),
        None => format!(
            "How to Create Engaging Content About {} {}",
            kw(0, "Popular"),
            kw(1, "Topics")
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SearchPage;
    use async_trait::async_trait;

    fn video(title: &str, views: u64, niche: Niche) -> Video {
        Video {
            id: "vid".to_string(),
            title: title.to_string(),
            channel_name: "Channel".to_string(),
            channel_avatar: String::new(),
            thumbnail_url: String::new(),
            view_count: views,
            like_count: 0,
            comment_count: 0,
            duration: "5:09".to_string(),
            published_at: "2026-08-01T00:00:00Z".to_string(),
            niche,
        }
    }

    #[test]
    fn popular_ai_seed_yields_a_hard_long_form_idea() {
        let seed = video("Neural networks explained visually", 600_000, Niche::Ai);
        let idea = idea_from_video(&seed, std::slice::from_ref(&seed), Some(Niche::Ai));

        assert_eq!(idea.difficulty, Difficulty::Hard);
        assert_eq!(idea.estimated_time, "8+ hours");
        assert!(idea.title.starts_with("The Future of "));
        assert!(idea.title.ends_with(": What's Coming Next"));
        assert_eq!(idea.inspiration_source.as_deref(), Some(seed.title.as_str()));
        assert_eq!(idea.related_videos.len(), 1);
    }

    #[test]
    fn difficulty_thresholds_are_exclusive_bounds() {
        assert_eq!(difficulty_for_views(99_999), Difficulty::Easy);
        assert_eq!(difficulty_for_views(100_000), Difficulty::Medium);
        assert_eq!(difficulty_for_views(500_000), Difficulty::Medium);
        assert_eq!(difficulty_for_views(500_001), Difficulty::Hard);
    }

    #[test]
    fn keywords_are_long_words_in_title_order() {
        assert_eq!(
            title_keywords("The best amazing incredible video about trains ever"),
            vec!["amazing", "incredible", "video"]
        );
        assert!(title_keywords("a b c d").is_empty());
        // Exactly four characters is not long enough.
        assert!(title_keywords("tiny four word list").is_empty());
    }

    #[test]
    fn templates_fall_back_to_fixed_words_without_keywords() {
        let year = Utc::now().year();
        let title = title_template(Some(Niche::Sports), &[], year);
        assert_eq!(title, "How to Master Professional Sports Techniques");

        let generic = title_template(None, &["cooking"], year);
        assert_eq!(generic, "How to Create Engaging Content About cooking Topics");
    }

    #[test]
    fn tags_name_the_niche_and_the_current_year() {
        let seed = video("Quantum computing breakthrough announced today", 50_000, Niche::Science);
        let idea = idea_from_video(&seed, &[], Some(Niche::Science));
        assert_eq!(idea.tags.len(), 6);
        assert_eq!(idea.tags[0], "Science");
        assert_eq!(idea.tags[1], "Quantum");
        assert_eq!(idea.tags[5], Utc::now().year().to_string());
        assert_eq!(idea.difficulty, Difficulty::Easy);
        assert_eq!(idea.estimated_time, "2-3 hours");
    }

    /// Serves results for AI only; every other niche comes back empty.
    struct AiOnlySource;

    #[async_trait]
    impl VideoSource for AiOnlySource {
        async fn search(
            &self,
            _query: &str,
            niche: NicheFilter,
            _max_results: u32,
            _page_token: Option<&str>,
        ) -> SearchPage {
            match niche {
                NicheFilter::Only(Niche::Ai) | NicheFilter::All => SearchPage {
                    videos: vec![video("Large language models in production", 800_000, Niche::Ai)],
                    next_page_token: None,
                },
                _ => SearchPage::default(),
            }
        }
    }

    #[tokio::test]
    async fn niches_without_results_produce_no_idea() {
        let ideas = initial_ideas(&AiOnlySource).await;
        assert_eq!(ideas.len(), 1);
        assert_eq!(ideas[0].tags[0], "AI");
    }

    #[tokio::test]
    async fn topic_idea_takes_its_niche_from_the_first_hit() {
        let idea = idea_for_topic(&AiOnlySource, "llm agents").await.unwrap();
        assert!(idea.title.starts_with("The Future of "));
        assert_eq!(idea.difficulty, Difficulty::Hard);
    }

    #[tokio::test]
    async fn topic_with_no_hits_yields_no_idea() {
        struct EmptySource;

        #[async_trait]
        impl VideoSource for EmptySource {
            async fn search(
                &self,
                _query: &str,
                _niche: NicheFilter,
                _max_results: u32,
                _page_token: Option<&str>,
            ) -> SearchPage {
                SearchPage::default()
            }
        }

        assert!(idea_for_topic(&EmptySource, "anything").await.is_none());
    }
}
