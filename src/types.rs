//! Core type definitions for swim-style recommendation

use serde::{Deserialize, Serialize};
use std::fmt;

/// Swimmer's self-reported skill level
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Beginner,
    Intermediate,
    Expert,
    /// Any label outside the known set; scoring treats it as a no-op
    #[serde(other)]
    Unrecognized,
}

/// Preferred session intensity
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Focus {
    Easy,
    Balanced,
    Challenge,
    #[serde(other)]
    Unrecognized,
}

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeGroup {
    Kid,
    Teen,
    Adult,
    Mature,
    Senior,
    #[serde(other)]
    Unrecognized,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Expert];

    /// Label used as the rule-table key; `None` for values outside the known set
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Level::Beginner => Some("beginner"),
            Level::Intermediate => Some("intermediate"),
            Level::Expert => Some("expert"),
            Level::Unrecognized => None,
        }
    }
}

impl Focus {
    pub const ALL: [Focus; 3] = [Focus::Easy, Focus::Balanced, Focus::Challenge];

    pub fn label(&self) -> Option<&'static str> {
        match self {
            Focus::Easy => Some("easy"),
            Focus::Balanced => Some("balanced"),
            Focus::Challenge => Some("challenge"),
            Focus::Unrecognized => None,
        }
    }
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 5] = [
        AgeGroup::Kid,
        AgeGroup::Teen,
        AgeGroup::Adult,
        AgeGroup::Mature,
        AgeGroup::Senior,
    ];

    pub fn label(&self) -> Option<&'static str> {
        match self {
            AgeGroup::Kid => Some("kid"),
            AgeGroup::Teen => Some("teen"),
            AgeGroup::Adult => Some("adult"),
            AgeGroup::Mature => Some("mature"),
            AgeGroup::Senior => Some("senior"),
            AgeGroup::Unrecognized => None,
        }
    }
}

impl From<&str> for Level {
    fn from(label: &str) -> Self {
        Level::ALL
            .into_iter()
            .find(|l| l.label() == Some(label))
            .unwrap_or(Level::Unrecognized)
    }
}

impl From<&str> for Focus {
    fn from(label: &str) -> Self {
        Focus::ALL
            .into_iter()
            .find(|f| f.label() == Some(label))
            .unwrap_or(Focus::Unrecognized)
    }
}

impl From<&str> for AgeGroup {
    fn from(label: &str) -> Self {
        AgeGroup::ALL
            .into_iter()
            .find(|a| a.label() == Some(label))
            .unwrap_or(AgeGroup::Unrecognized)
    }
}

/// The four answers a swimmer gives on the recommendation form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputProfile {
    pub level: Level,
    pub goal: String, // opaque label, matched against style tags
    pub focus: Focus,
    pub age: AgeGroup,
}

impl InputProfile {
    pub fn new(level: Level, goal: impl Into<String>, focus: Focus, age: AgeGroup) -> Self {
        Self {
            level,
            goal: goal.into(),
            focus,
            age,
        }
    }

    /// Build a profile from raw form labels; unknown labels become `Unrecognized`
    pub fn from_labels(level: &str, goal: &str, focus: &str, age: &str) -> Self {
        Self::new(level.into(), goal, focus.into(), age.into())
    }
}

/// One candidate swim style with its fixed descriptive metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleEntry {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub reasons: Vec<String>,
    #[serde(default)]
    pub drills: Vec<String>,
}

impl StyleEntry {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// A style together with the score it earned for one profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredStyle {
    pub style: StyleEntry,
    pub score: i32,
}

/// Engine output for a single request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub primary: ScoredStyle,
    pub secondary: Option<ScoredStyle>,
    pub session: String,
    pub notes: Vec<String>,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label().unwrap_or("unrecognized"))
    }
}

impl fmt::Display for Focus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label().unwrap_or("unrecognized"))
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label().unwrap_or("unrecognized"))
    }
}
