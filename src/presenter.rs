//! Turns a Recommendation into ordered, renderable content blocks

use crate::types::Recommendation;
use anyhow::Result;
use serde::Serialize;
use std::fmt;
use std::io::Write;

/// Number of reasons shown for the backup option
const BACKUP_REASONS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Heading { text: String },
    Paragraph { label: String, text: String },
    List { label: String, items: Vec<String> },
}

/// Presentation-ready projection of a recommendation.
///
/// Optional sections are absent rather than empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderableContent {
    pub blocks: Vec<ContentBlock>,
}

impl RenderableContent {
    /// Labels of the list/paragraph blocks, in order
    pub fn labels(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .filter_map(|b| match b {
                ContentBlock::Heading { .. } => None,
                ContentBlock::Paragraph { label, .. } | ContentBlock::List { label, .. } => {
                    Some(label.as_str())
                }
            })
            .collect()
    }
}

pub fn present(rec: &Recommendation) -> RenderableContent {
    let primary = &rec.primary.style;
    let mut blocks = vec![ContentBlock::Heading {
        text: format!("Recommended Style: {}", primary.name),
    }];
    push_list(&mut blocks, "Why this fits you:".to_string(), primary.reasons.clone());
    push_list(&mut blocks, "Try these drills:".to_string(), primary.drills.clone());

    if !rec.session.is_empty() {
        blocks.push(ContentBlock::Paragraph {
            label: "Starter session:".to_string(),
            text: rec.session.clone(),
        });
    }

    if let Some(ref secondary) = rec.secondary {
        push_list(
            &mut blocks,
            format!("Backup option (also fits you): {}", secondary.style.name),
            secondary.style.reasons.iter().take(BACKUP_REASONS).cloned().collect(),
        );
    }

    push_list(&mut blocks, "Extra tips:".to_string(), rec.notes.clone());

    RenderableContent { blocks }
}

/// Lists without items are dropped along with their label
fn push_list(blocks: &mut Vec<ContentBlock>, label: String, items: Vec<String>) {
    if !items.is_empty() {
        blocks.push(ContentBlock::List { label, items });
    }
}

impl fmt::Display for RenderableContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, block) in self.blocks.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            match block {
                ContentBlock::Heading { text } => writeln!(f, "{text}")?,
                ContentBlock::Paragraph { label, text } => writeln!(f, "{label} {text}")?,
                ContentBlock::List { label, items } => {
                    writeln!(f, "{label}")?;
                    for item in items {
                        writeln!(f, "  - {item}")?;
                    }
                }
            }
        }
        Ok(())
    }
}

/// Output collaborator that displays rendered content
pub trait RenderSurface {
    fn name(&self) -> &'static str;

    fn render(&mut self, content: &RenderableContent) -> Result<()>;
}

/// Plain-text surface over any writer (stdout in the CLI)
pub struct TextSurface<W: Write> {
    out: W,
}

impl<W: Write> TextSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderSurface for TextSurface<W> {
    fn name(&self) -> &'static str {
        "text"
    }

    fn render(&mut self, content: &RenderableContent) -> Result<()> {
        write!(self.out, "{content}")?;
        self.out.flush()?;
        Ok(())
    }
}
