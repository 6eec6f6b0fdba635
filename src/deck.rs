// ABOUTME: Slide deck module for the ds-slides application
// ABOUTME: Defines the ordered slide sequence and the standard data structures deck

use crate::errors::{Result, SlidesError};
use serde::Serialize;
use std::collections::HashSet;

/// One discrete presentation panel, identified by a unique string id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slide {
    pub id: String,
    pub title: String,
}

impl Slide {
    pub fn new(id: &str, title: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
        }
    }
}

/// An ordered, fixed sequence of slides. Insertion order defines the
/// presentation order; the deck never changes after construction.
#[derive(Debug, Clone)]
pub struct SlideDeck {
    slides: Vec<Slide>,
}

impl SlideDeck {
    /// Build a deck from an ordered list of slides.
    /// The list must be non-empty and slide ids must be unique.
    pub fn new(slides: Vec<Slide>) -> Result<Self> {
        if slides.is_empty() {
            return Err(SlidesError::ValidationError(
                "A slide deck must contain at least one slide".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for slide in &slides {
            if !seen.insert(slide.id.as_str()) {
                return Err(SlidesError::ValidationError(format!(
                    "Duplicate slide id: {}",
                    slide.id
                )));
            }
        }

        Ok(Self { slides })
    }

    /// The standard data structures deck, in presentation order.
    pub fn standard() -> Self {
        Self {
            slides: vec![
                Slide::new("introduction", "Algorithms & Data Structures"),
                Slide::new("arrays", "Arrays"),
                Slide::new("linked-lists", "Linked Lists"),
                Slide::new("stacks-queues", "Stacks & Queues"),
                Slide::new("trees", "Trees"),
                Slide::new("hash-tables", "Hash Tables"),
                Slide::new("graphs", "Graphs"),
                Slide::new("summary", "Summary & Review"),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Position of a slide id in the presentation order.
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.slides.iter().position(|slide| slide.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Slide> {
        self.slides.iter()
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }
}
