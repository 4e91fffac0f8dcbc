//! RecommendationEngine: scores a profile and assembles the recommendation

use crate::catalog::StyleCatalog;
use crate::error::CatalogError;
use crate::scoring::{score_profile, CompiledRules, ScoreMap, ScoreRules};
use crate::selection::{pick_top, Pick};
use crate::session::{advisory_notes, session_plan};
use crate::types::*;
use std::sync::Arc;
use tracing::debug;

/// Immutable engine: catalog plus resolved scoring rules.
///
/// Holds no per-request state, so one instance can be shared freely.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    catalog: StyleCatalog,
    rules: CompiledRules,
}

pub type SharedRecommendationEngine = Arc<RecommendationEngine>;

impl RecommendationEngine {
    /// Fails with `NotFound` if the rules mention a style the catalog lacks
    pub fn new(catalog: StyleCatalog, rules: &ScoreRules) -> Result<Self, CatalogError> {
        let rules = CompiledRules::compile(rules, &catalog)?;
        Ok(Self { catalog, rules })
    }

    /// Engine over the built-in styles and rule tables
    pub fn builtin() -> Self {
        Self::new(StyleCatalog::builtin(), &ScoreRules::default())
            .expect("built-in rules reference only built-in styles")
    }

    pub fn catalog(&self) -> &StyleCatalog {
        &self.catalog
    }

    /// Raw per-style scores for a profile, after the floor clamp
    pub fn scores(&self, profile: &InputProfile) -> ScoreMap<'_> {
        score_profile(&self.catalog, &self.rules, profile)
    }

    /// Main entry point. Pure: the same profile always yields the same result.
    pub fn recommend(&self, profile: &InputProfile) -> Recommendation {
        let scores = self.scores(profile);
        debug!(
            "Scores for level={} goal={} focus={} age={}: {:?}",
            profile.level,
            profile.goal,
            profile.focus,
            profile.age,
            scores.iter().map(|(s, v)| (s.key.as_str(), v)).collect::<Vec<_>>()
        );

        let selection = pick_top(&scores, self.rules.secondary_margin)
            .expect("catalog holds at least two styles");

        let primary = self.scored(selection.primary);
        let secondary = selection.secondary.map(|pick| self.scored(pick));

        let session = session_plan(&primary.style.name, profile.level, profile.age);
        let notes = advisory_notes(profile);

        debug!(
            "Picked {} ({}), backup {:?}, {} notes",
            primary.style.key,
            primary.score,
            secondary.as_ref().map(|s| s.style.key.as_str()),
            notes.len()
        );

        Recommendation {
            primary,
            secondary,
            session,
            notes,
        }
    }

    fn scored(&self, (idx, score): Pick) -> ScoredStyle {
        ScoredStyle {
            style: self.catalog.all()[idx].clone(),
            score,
        }
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::builtin()
    }
}
