mod analytics;
mod discover;
mod ideas;
mod trending;

pub use analytics::AnalyticsPage;
pub use discover::DiscoverPage;
pub use ideas::IdeasPage;
pub use trending::TrendingPage;
