//! Error types for catalog construction and loading

use thiserror::Error;

/// Failures while building or loading a style catalog and its scoring rules.
///
/// None of these can be triggered by a recommendation request: they surface
/// when the engine is assembled at startup.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A key referenced by the rules (or a lookup) is absent from the catalog
    #[error("style not found: {0}")]
    NotFound(String),

    /// Two catalog entries share the same key
    #[error("duplicate style key: {0}")]
    DuplicateKey(String),

    /// Catalog has fewer entries than a ranking needs
    #[error("catalog needs at least 2 styles, got {0}")]
    TooSmall(usize),

    /// The rules could push this style's total outside the `i32` range
    #[error("score range exceeded for style: {0}")]
    ScoreOutOfRange(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
