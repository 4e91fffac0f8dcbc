//! Additive scoring passes over the style catalog

use crate::catalog::StyleCatalog;
use crate::error::CatalogError;
use crate::types::*;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// One signed point delta applied to one style
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adjustment {
    pub style: String,
    pub delta: i32,
}

/// Categorical label -> adjustments applied when the input carries that label
pub type PassTable = BTreeMap<String, Vec<Adjustment>>;

/// Hand-authored scoring configuration.
///
/// Fields missing from a deserialized document fall back to the built-in
/// tables, so a config file may override a single pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreRules {
    pub level: PassTable,
    /// Goal-specific deltas layered on top of the tag bonus
    pub goal_nudges: PassTable,
    pub focus: PassTable,
    pub age: PassTable,
    /// Flat bonus for every style tagged with the chosen goal
    pub tag_bonus: i32,
    pub score_floor: i32,
    /// Max gap between first and second place for the runner-up to be shown
    pub secondary_margin: i32,
}

pub const DEFAULT_TAG_BONUS: i32 = 4;
pub const DEFAULT_SCORE_FLOOR: i32 = -2;
pub const DEFAULT_SECONDARY_MARGIN: i32 = 2;

impl ScoreRules {
    /// No pass tables, default constants. Useful as a base for custom rule sets.
    pub fn empty() -> Self {
        Self {
            level: PassTable::new(),
            goal_nudges: PassTable::new(),
            focus: PassTable::new(),
            age: PassTable::new(),
            tag_bonus: DEFAULT_TAG_BONUS,
            score_floor: DEFAULT_SCORE_FLOOR,
            secondary_margin: DEFAULT_SECONDARY_MARGIN,
        }
    }
}

impl Default for ScoreRules {
    fn default() -> Self {
        Self {
            level: table(&[
                (
                    "beginner",
                    &[
                        ("elementary_backstroke", 4),
                        ("dog_paddle", 3),
                        ("backstroke", 3),
                        ("breaststroke", 2),
                        ("freestyle", 2),
                        ("butterfly", -5),
                    ],
                ),
                (
                    "intermediate",
                    &[
                        ("freestyle", 4),
                        ("backstroke", 3),
                        ("breaststroke", 3),
                        ("sidestroke", 2),
                        ("sculling", 2),
                        ("butterfly", 1),
                    ],
                ),
                (
                    "expert",
                    &[
                        ("freestyle", 5),
                        ("butterfly", 5),
                        ("backstroke", 3),
                        ("breaststroke", 2),
                        ("sidestroke", 2),
                        ("treading", 2),
                        ("sculling", 2),
                    ],
                ),
            ]),
            goal_nudges: table(&[
                (
                    "safety",
                    &[("treading", 5), ("sidestroke", 3), ("elementary_backstroke", 3)],
                ),
                (
                    "open_water",
                    &[
                        ("sidestroke", 4),
                        ("treading", 4),
                        ("freestyle", 2),
                        ("breaststroke", 2),
                    ],
                ),
                (
                    "technique",
                    &[("sculling", 5), ("backstroke", 3), ("breaststroke", 2)],
                ),
                ("speed", &[("freestyle", 4), ("butterfly", 3)]),
                (
                    "confidence",
                    &[
                        ("elementary_backstroke", 4),
                        ("backstroke", 3),
                        ("dog_paddle", 2),
                    ],
                ),
            ]),
            focus: table(&[
                (
                    "easy",
                    &[
                        ("elementary_backstroke", 3),
                        ("dog_paddle", 2),
                        ("backstroke", 2),
                        ("breaststroke", 2),
                        ("freestyle", 1),
                        ("butterfly", -3),
                    ],
                ),
                (
                    "balanced",
                    &[
                        ("freestyle", 2),
                        ("backstroke", 2),
                        ("breaststroke", 2),
                        ("sidestroke", 1),
                        ("sculling", 1),
                        ("treading", 1),
                    ],
                ),
                (
                    "challenge",
                    &[
                        ("butterfly", 5),
                        ("freestyle", 3),
                        ("treading", 2),
                        ("sculling", 2),
                    ],
                ),
            ]),
            age: table(&[
                (
                    "kid",
                    &[
                        ("dog_paddle", 3),
                        ("elementary_backstroke", 3),
                        ("backstroke", 2),
                        ("treading", 2),
                        ("butterfly", -2),
                    ],
                ),
                ("teen", &[("freestyle", 2), ("backstroke", 1), ("butterfly", 1)]),
                ("adult", &[("freestyle", 2), ("sidestroke", 1), ("treading", 1)]),
                (
                    "mature",
                    &[("backstroke", 2), ("breaststroke", 2), ("sidestroke", 2)],
                ),
                (
                    "senior",
                    &[
                        ("backstroke", 4),
                        ("breaststroke", 3),
                        ("sidestroke", 3),
                        ("sculling", 2),
                        ("butterfly", -3),
                    ],
                ),
            ]),
            tag_bonus: DEFAULT_TAG_BONUS,
            score_floor: DEFAULT_SCORE_FLOOR,
            secondary_margin: DEFAULT_SECONDARY_MARGIN,
        }
    }
}

/// Build a pass table from literal rows
pub fn table(rows: &[(&str, &[(&str, i32)])]) -> PassTable {
    rows.iter()
        .map(|(label, deltas)| {
            let adjustments: Vec<Adjustment> = deltas
                .iter()
                .map(|(style, delta)| Adjustment {
                    style: style.to_string(),
                    delta: *delta,
                })
                .collect();
            (label.to_string(), adjustments)
        })
        .collect()
}

type CompiledPass = HashMap<String, Vec<(usize, i32)>>;

/// Rules with style keys resolved to catalog positions.
///
/// Resolution happens once, so scoring a profile never does a fallible lookup.
#[derive(Debug, Clone)]
pub struct CompiledRules {
    level: CompiledPass,
    goal_nudges: CompiledPass,
    focus: CompiledPass,
    age: CompiledPass,
    pub tag_bonus: i32,
    pub score_floor: i32,
    pub secondary_margin: i32,
}

impl CompiledRules {
    /// Resolve keys and reject tables whose totals could leave the `i32` range
    pub fn compile(rules: &ScoreRules, catalog: &StyleCatalog) -> Result<Self, CatalogError> {
        let compiled = Self {
            level: compile_pass(&rules.level, catalog)?,
            goal_nudges: compile_pass(&rules.goal_nudges, catalog)?,
            focus: compile_pass(&rules.focus, catalog)?,
            age: compile_pass(&rules.age, catalog)?,
            tag_bonus: rules.tag_bonus,
            score_floor: rules.score_floor,
            secondary_margin: rules.secondary_margin,
        };
        compiled.check_range(catalog)?;
        Ok(compiled)
    }

    /// Each pass fires for at most one label, so a style's worst case is the
    /// largest absolute row per pass plus the tag bonus.
    fn check_range(&self, catalog: &StyleCatalog) -> Result<(), CatalogError> {
        let mut bound = vec![i64::from(self.tag_bonus).abs(); catalog.len()];

        for pass in [&self.level, &self.goal_nudges, &self.focus, &self.age] {
            let mut worst = vec![0i64; catalog.len()];
            for adjustments in pass.values() {
                let mut row = vec![0i64; catalog.len()];
                for &(idx, delta) in adjustments {
                    row[idx] += i64::from(delta).abs();
                }
                for (w, r) in worst.iter_mut().zip(row) {
                    *w = (*w).max(r);
                }
            }
            for (b, w) in bound.iter_mut().zip(worst) {
                *b += w;
            }
        }

        for (entry, b) in catalog.all().iter().zip(bound) {
            if b > i64::from(i32::MAX) {
                return Err(CatalogError::ScoreOutOfRange(entry.key.clone()));
            }
        }
        Ok(())
    }
}

fn compile_pass(pass: &PassTable, catalog: &StyleCatalog) -> Result<CompiledPass, CatalogError> {
    let mut compiled = CompiledPass::new();
    for (label, adjustments) in pass {
        let resolved = adjustments
            .iter()
            .map(|adj| catalog.index_of(&adj.style).map(|idx| (idx, adj.delta)))
            .collect::<Result<Vec<_>, CatalogError>>()?;
        compiled.insert(label.clone(), resolved);
    }
    Ok(compiled)
}

/// Per-request scores, one per catalog entry in definition order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreMap<'a> {
    catalog: &'a StyleCatalog,
    scores: Vec<i32>,
}

impl<'a> ScoreMap<'a> {
    pub fn zeroed(catalog: &'a StyleCatalog) -> Self {
        Self {
            catalog,
            scores: vec![0; catalog.len()],
        }
    }

    pub fn get(&self, key: &str) -> Option<i32> {
        self.catalog.index_of(key).ok().map(|idx| self.scores[idx])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a StyleEntry, i32)> + '_ {
        self.catalog.all().iter().zip(self.scores.iter().copied())
    }

    /// (catalog index, score) pairs, best first. The sort is stable, so equal
    /// scores keep definition order.
    pub fn ranked(&self) -> Vec<(usize, i32)> {
        let mut ranked: Vec<(usize, i32)> = self.scores.iter().copied().enumerate().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    fn apply(&mut self, adjustments: &[(usize, i32)]) {
        for &(idx, delta) in adjustments {
            self.scores[idx] += delta;
        }
    }

    fn clamp_floor(&mut self, floor: i32) {
        for score in self.scores.iter_mut() {
            *score = (*score).max(floor);
        }
    }
}

/// Run the four passes for one profile and clamp to the floor
pub fn score_profile<'a>(
    catalog: &'a StyleCatalog,
    rules: &CompiledRules,
    profile: &InputProfile,
) -> ScoreMap<'a> {
    let mut scores = ScoreMap::zeroed(catalog);

    apply_pass(&mut scores, &rules.level, profile.level.label());

    apply_tag_bonus(&mut scores, &profile.goal, rules.tag_bonus);
    apply_pass(&mut scores, &rules.goal_nudges, Some(profile.goal.as_str()));

    apply_pass(&mut scores, &rules.focus, profile.focus.label());
    apply_pass(&mut scores, &rules.age, profile.age.label());

    scores.clamp_floor(rules.score_floor);
    scores
}

/// Unknown or unrecognized labels find no row and leave scores untouched
fn apply_pass(scores: &mut ScoreMap<'_>, pass: &CompiledPass, label: Option<&str>) {
    if let Some(adjustments) = label.and_then(|l| pass.get(l)) {
        scores.apply(adjustments);
    }
}

fn apply_tag_bonus(scores: &mut ScoreMap<'_>, goal: &str, bonus: i32) {
    let tagged: Vec<(usize, i32)> = scores
        .catalog
        .all()
        .iter()
        .enumerate()
        .filter(|(_, entry)| entry.has_tag(goal))
        .map(|(idx, _)| (idx, bonus))
        .collect();
    scores.apply(&tagged);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin_scores(profile: &InputProfile) -> Vec<(String, i32)> {
        let catalog = StyleCatalog::builtin();
        let rules = CompiledRules::compile(&ScoreRules::default(), &catalog).unwrap();
        score_profile(&catalog, &rules, profile)
            .iter()
            .map(|(entry, score)| (entry.key.clone(), score))
            .collect()
    }

    #[test]
    fn builtin_rules_resolve_against_builtin_catalog() {
        let catalog = StyleCatalog::builtin();
        assert!(CompiledRules::compile(&ScoreRules::default(), &catalog).is_ok());
    }

    #[test]
    fn dangling_rule_key_is_not_found() {
        let catalog = StyleCatalog::builtin();
        let mut rules = ScoreRules::empty();
        rules.age = table(&[("kid", &[("crawl_stroke", 1)])]);
        let err = CompiledRules::compile(&rules, &catalog).unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(k) if k == "crawl_stroke"));
    }

    #[test]
    fn overflowing_deltas_are_rejected() {
        let catalog = StyleCatalog::new(vec![
            StyleEntry {
                key: "a".to_string(),
                name: "A".to_string(),
                tags: vec!["fitness".to_string()],
                reasons: vec![],
                drills: vec![],
            },
            StyleEntry {
                key: "b".to_string(),
                name: "B".to_string(),
                tags: vec![],
                reasons: vec![],
                drills: vec![],
            },
        ])
        .unwrap();

        // i32::MAX alone fits, but the tag bonus on top would not
        let mut rules = ScoreRules::empty();
        rules.level = table(&[("expert", &[("a", i32::MAX)])]);
        let err = CompiledRules::compile(&rules, &catalog).unwrap_err();
        assert!(matches!(err, CatalogError::ScoreOutOfRange(k) if k == "a"));

        // Deltas in different passes add up
        let mut rules = ScoreRules::empty();
        rules.tag_bonus = 0;
        rules.focus = table(&[("easy", &[("b", i32::MIN + 1)])]);
        rules.age = table(&[("adult", &[("b", -10)])]);
        let err = CompiledRules::compile(&rules, &catalog).unwrap_err();
        assert!(matches!(err, CatalogError::ScoreOutOfRange(k) if k == "b"));

        // Rows under different labels of one pass never stack
        let mut rules = ScoreRules::empty();
        rules.tag_bonus = 0;
        rules.level = table(&[
            ("beginner", &[("a", i32::MAX)]),
            ("expert", &[("a", i32::MAX)]),
        ]);
        assert!(CompiledRules::compile(&rules, &catalog).is_ok());
    }

    #[test]
    fn beginner_butterfly_hits_the_floor() {
        let scores = builtin_scores(&InputProfile::new(
            Level::Beginner,
            "safety",
            Focus::Easy,
            AgeGroup::Kid,
        ));
        let fly = scores.iter().find(|(k, _)| k == "butterfly").unwrap().1;
        // -5 -3 -2 before clamping
        assert_eq!(fly, DEFAULT_SCORE_FLOOR);
    }

    #[test]
    fn ranked_keeps_definition_order_on_ties() {
        let catalog = StyleCatalog::builtin();
        let scores = ScoreMap::zeroed(&catalog);
        let order: Vec<usize> = scores.ranked().into_iter().map(|(idx, _)| idx).collect();
        assert_eq!(order, (0..catalog.len()).collect::<Vec<_>>());
    }
}
