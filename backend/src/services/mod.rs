pub mod aggregator;
pub mod ideas;
pub mod youtube;
