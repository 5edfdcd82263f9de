pub mod analytics;
pub mod feed;
pub mod ideas;
pub mod search;
