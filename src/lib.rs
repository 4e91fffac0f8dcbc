//! strokefinder - Swim Style Recommender
//!
//! Recommends a swimming style from four categorical answers with:
//! - Fixed, hand-authored additive score passes (level, goal, focus, age)
//! - Tag-match bonus with stacked goal nudges
//! - Stable top-pick selection with a close runner-up
//! - Session plan, advisory notes and renderable content

pub mod types;
pub mod error;
pub mod catalog;
pub mod scoring;
pub mod selection;
pub mod session;
pub mod engine;
pub mod presenter;
pub mod config;
pub mod server;

pub use types::*;
pub use error::CatalogError;
pub use catalog::StyleCatalog;
pub use scoring::{Adjustment, PassTable, ScoreMap, ScoreRules};
pub use engine::{RecommendationEngine, SharedRecommendationEngine};
pub use presenter::{present, ContentBlock, RenderableContent};
pub use config::ServerConfig;
