use serde::{Deserialize, Serialize};
use std::fmt;

/// Topical tag assigned to every video, either from the request context or by
/// mapping the remote platform's category taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Niche {
    Entertainment,
    Sports,
    Business,
    #[serde(rename = "AI")]
    Ai,
    Science,
}

impl Niche {
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

/// Search scope: one niche, or no niche constraint at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NicheFilter {
    All,
    Only(Niche),
}

impl NicheFilter {
    pub fn from_param(value: &str) -> Self {
        match value {
            "Entertainment" => NicheFilter::Only(Niche::Entertainment),
            "Sports" => NicheFilter::Only(Niche::Sports),
            "Business" => NicheFilter::Only(Niche::Business),
            "AI" => NicheFilter::Only(Niche::Ai),
            "Science" => NicheFilter::Only(Niche::Science),
            _ => NicheFilter::All,
        }
    }
}

/// Lossy, many-to-one mapping between the platform's numeric video categories
/// and our niches. The table is a policy value rather than a hardcoded match
/// so callers and tests can swap it out.
#[derive(Debug, Clone)]
pub struct CategoryMap {
    to_niche: Vec<(u32, Niche)>,
    to_category: Vec<(Niche, u32)>,
}

impl CategoryMap {
    /// Niche assigned when a category id is absent or unmapped.
    pub const DEFAULT_NICHE: Niche = Niche::Entertainment;

    /// Best-effort niche for a remote category id (the API serves it as a
    /// string).
    pub fn niche_for_category(&self, category_id: Option<&str>) -> Niche {
        category_id
            .and_then(|id| id.parse::<u32>().ok())
            .and_then(|id| {
                self.to_niche
                    .iter()
                    .find(|(category, _)| *category == id)
                    .map(|(_, niche)| *niche)
            })
            .unwrap_or(Self::DEFAULT_NICHE)
    }

    /// Category id used to constrain a keyword search, if the scope names one.
    pub fn category_for_niche(&self, filter: NicheFilter) -> Option<u32> {
        match filter {
            NicheFilter::All => None,
            NicheFilter::Only(niche) => self
                .to_category
                .iter()
                .find(|(n, _)| *n == niche)
                .map(|(_, category)| *category),
        }
    }
}

impl Default for CategoryMap {
    // Category ids per https://developers.google.com/youtube/v3/docs/videoCategories
    fn default() -> Self {
        Self {
            to_niche: vec![
                (17, Niche::Sports),        // Sports
                (20, Niche::Entertainment), // Gaming
                (24, Niche::Entertainment), // Entertainment
                (28, Niche::Science),       // Science & Technology
                (22, Niche::Ai),            // People & Blogs
                (27, Niche::Ai),            // Education
                (19, Niche::Business),      // Travel & Events
                (25, Niche::Business),      // News & Politics
            ],
            to_category: vec![
                (Niche::Sports, 17),
                (Niche::Entertainment, 24),
                (Niche::Science, 28),
                (Niche::Ai, 27),
                (Niche::Business, 25),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_categories_map_to_their_niche() {
        let map = CategoryMap::default();
        assert_eq!(map.niche_for_category(Some("17")), Niche::Sports);
        assert_eq!(map.niche_for_category(Some("20")), Niche::Entertainment);
        assert_eq!(map.niche_for_category(Some("27")), Niche::Ai);
        assert_eq!(map.niche_for_category(Some("28")), Niche::Science);
        assert_eq!(map.niche_for_category(Some("25")), Niche::Business);
    }

    #[test]
    fn unknown_or_missing_category_falls_back_to_default() {
        let map = CategoryMap::default();
        assert_eq!(map.niche_for_category(None), CategoryMap::DEFAULT_NICHE);
        assert_eq!(map.niche_for_category(Some("999")), CategoryMap::DEFAULT_NICHE);
        assert_eq!(map.niche_for_category(Some("pets")), CategoryMap::DEFAULT_NICHE);
    }

    #[test]
    fn niche_scope_resolves_to_a_category_constraint() {
        let map = CategoryMap::default();
        assert_eq!(map.category_for_niche(NicheFilter::Only(Niche::Sports)), Some(17));
        assert_eq!(map.category_for_niche(NicheFilter::Only(Niche::Ai)), Some(27));
        assert_eq!(map.category_for_niche(NicheFilter::All), None);
    }

    #[test]
    fn filter_parses_known_labels_and_defaults_to_all() {
        assert_eq!(NicheFilter::from_param("AI"), NicheFilter::Only(Niche::Ai));
        assert_eq!(NicheFilter::from_param("Sports"), NicheFilter::Only(Niche::Sports));
        assert_eq!(NicheFilter::from_param("All"), NicheFilter::All);
        assert_eq!(NicheFilter::from_param("polka"), NicheFilter::All);
    }

    #[test]
    fn niche_serializes_as_its_display_label() {
        let json = serde_json::to_string(&Niche::Ai).unwrap();
        assert_eq!(json, "\"AI\"");
        let back: Niche = serde_json::from_str("\"Science\"").unwrap();
        assert_eq!(back, Niche::Science);
    }
}
