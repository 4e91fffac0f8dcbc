//! Top-pick selection with a closeness rule for the runner-up

use crate::scoring::ScoreMap;

/// Catalog index and score of a selected style
pub type Pick = (usize, i32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub primary: Pick,
    pub secondary: Option<Pick>,
}

/// Pick the best style, plus the runner-up when it trails by at most `margin`.
///
/// Ties resolve to the style defined first in the catalog. Returns `None` only
/// for an empty score map.
pub fn pick_top(scores: &ScoreMap<'_>, margin: i32) -> Option<Selection> {
    let ranked = scores.ranked();
    let primary = *ranked.first()?;

    let secondary = ranked
        .get(1)
        .copied()
        .filter(|&(_, second)| i64::from(primary.1) - i64::from(second) <= i64::from(margin));

    Some(Selection { primary, secondary })
}
