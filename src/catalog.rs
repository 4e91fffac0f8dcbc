//! Read-only style catalog

use crate::error::CatalogError;
use crate::types::StyleEntry;
use std::collections::HashSet;

/// Lookup table of swim styles, kept in definition order.
///
/// Definition order is significant: it is the tie-break order when two
/// styles score the same.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleCatalog {
    entries: Vec<StyleEntry>,
}

impl StyleCatalog {
    /// Build a catalog, rejecting duplicate keys and catalogs too small to rank
    pub fn new(entries: Vec<StyleEntry>) -> Result<Self, CatalogError> {
        if entries.len() < 2 {
            return Err(CatalogError::TooSmall(entries.len()));
        }

        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.key.as_str()) {
                return Err(CatalogError::DuplicateKey(entry.key.clone()));
            }
        }

        Ok(Self { entries })
    }

    pub fn all(&self) -> &[StyleEntry] {
        &self.entries
    }

    pub fn get(&self, key: &str) -> Result<&StyleEntry, CatalogError> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .ok_or_else(|| CatalogError::NotFound(key.to_string()))
    }

    /// Position of `key` in definition order
    pub fn index_of(&self, key: &str) -> Result<usize, CatalogError> {
        self.entries
            .iter()
            .position(|e| e.key == key)
            .ok_or_else(|| CatalogError::NotFound(key.to_string()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The nine reference styles
    pub fn builtin() -> Self {
        Self {
            entries: vec![
                style(
                    "freestyle",
                    "Freestyle (Front Crawl)",
                    &["fitness", "cardio", "weight_loss", "speed", "open_water"],
                    &[
                        "Most efficient all-around fitness stroke",
                        "Best for endurance and calorie burn",
                        "Easy to progress with drills and pacing",
                    ],
                    &["Catch-up drill", "Side kick + breathing", "Finger drag drill"],
                ),
                style(
                    "breaststroke",
                    "Breaststroke",
                    &["fitness", "low_impact", "technique", "open_water"],
                    &[
                        "Comfortable breathing rhythm and control",
                        "Great for steady pace and long swims",
                        "Good technique builder (timing + glide)",
                    ],
                    &["2 kicks 1 pull drill", "Glide timing practice", "Frog kick at wall"],
                ),
                style(
                    "backstroke",
                    "Backstroke",
                    &["confidence", "low_impact", "technique", "fitness"],
                    &[
                        "Face stays above water, so breathing is easier",
                        "Improves balance, posture, and rotation",
                        "Great low-impact endurance option",
                    ],
                    &["3-6-3 drill", "Single-arm backstroke", "Kick on back (streamline)"],
                ),
                style(
                    "butterfly",
                    "Butterfly",
                    &["challenge", "cardio", "speed", "technique"],
                    &[
                        "High intensity stroke for power and cardio",
                        "Builds strong core timing and rhythm",
                        "Perfect for short hard sets",
                    ],
                    &["Dolphin kick (on front)", "Single-arm fly", "Body wave drill"],
                ),
                // Survival and water-confidence skills
                style(
                    "elementary_backstroke",
                    "Elementary Backstroke (survival back)",
                    &["confidence", "safety", "low_impact"],
                    &[
                        "Very beginner-friendly survival stroke",
                        "Keeps you afloat with minimal effort",
                        "Excellent confidence builder",
                    ],
                    &["Starfish float", "Gentle scull on back", "Back glide to recovery"],
                ),
                style(
                    "sidestroke",
                    "Sidestroke",
                    &["safety", "open_water", "low_impact", "fitness"],
                    &[
                        "Efficient and calm for long-distance swimming",
                        "Great in open water and for safety scenarios",
                        "Breathing is easy and controlled",
                    ],
                    &["Side glide practice", "Scissor kick drill", "One-arm pull + glide"],
                ),
                style(
                    "dog_paddle",
                    "Dog Paddle",
                    &["confidence", "safety"],
                    &[
                        "Simple movement pattern for beginners",
                        "Helps you stay afloat while learning",
                        "Good stepping stone to real strokes",
                    ],
                    &[
                        "Front float + gentle paddle",
                        "Short 5–10m repeats",
                        "Breathe-then-paddle rhythm",
                    ],
                ),
                style(
                    "treading",
                    "Treading Water",
                    &["safety", "confidence", "open_water", "fitness"],
                    &[
                        "Most important safety skill in deep water",
                        "Builds confidence and endurance",
                        "Useful for open water and rest breaks",
                    ],
                    &[
                        "Eggbeater (or frog kick) practice",
                        "Hands out of water challenge",
                        "30s → 60s holds",
                    ],
                ),
                style(
                    "sculling",
                    "Sculling (feel for the water)",
                    &["technique", "confidence", "low_impact"],
                    &[
                        "Improves feel and control in the water",
                        "Boosts balance and stability fast",
                        "Great low-impact technique builder",
                    ],
                    &["Front scull", "Mid scull", "Back scull"],
                ),
            ],
        }
    }
}

fn style(key: &str, name: &str, tags: &[&str], reasons: &[&str], drills: &[&str]) -> StyleEntry {
    StyleEntry {
        key: key.to_string(),
        name: name.to_string(),
        tags: owned(tags),
        reasons: owned(reasons),
        drills: owned(drills),
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_keys_are_unique() {
        let builtin = StyleCatalog::builtin();
        assert_eq!(builtin.len(), 9);
        assert!(StyleCatalog::new(builtin.all().to_vec()).is_ok());
    }

    #[test]
    fn rejects_duplicates_and_tiny_catalogs() {
        let a = style("a", "A", &[], &[], &[]);
        assert!(matches!(
            StyleCatalog::new(vec![a.clone()]),
            Err(CatalogError::TooSmall(1))
        ));
        assert!(matches!(
            StyleCatalog::new(vec![a.clone(), a]),
            Err(CatalogError::DuplicateKey(k)) if k == "a"
        ));
    }

    #[test]
    fn get_unknown_key_is_not_found() {
        let builtin = StyleCatalog::builtin();
        assert_eq!(builtin.get("sidestroke").unwrap().name, "Sidestroke");
        assert!(matches!(builtin.get("crawl"), Err(CatalogError::NotFound(_))));
        assert_eq!(builtin.index_of("sculling").unwrap(), 8);
    }
}
