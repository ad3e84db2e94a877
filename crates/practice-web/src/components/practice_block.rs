//! One rotation day laid out as a practice session

use askama::Template;
use practice_core::{DayBlocks, PracticeDay};

/// A practice day with its sections and sorted focus exercises
#[derive(Debug, Clone, Template)]
#[template(path = "components/practice_block.html")]
pub struct PracticeBlock {
    /// Day title
    pub title: String,
    /// Warm-up text, empty when the day has none
    pub warmup: String,
    /// Scales text, empty when the day has none
    pub scales: String,
    /// Technical focus A exercises in display order
    pub block_a: Vec<String>,
    /// Technical focus B exercises in display order
    pub block_b: Vec<String>,
    /// Repertoire text, empty when the day has none
    pub repertoire: String,
}

impl PracticeBlock {
    /// Lay out a day, sorting both focus blocks by display order
    #[must_use]
    pub fn new(day: &PracticeDay) -> Self {
        let blocks = DayBlocks::of(day);
        let texts = |exercises: &[&practice_core::Exercise]| {
            exercises
                .iter()
                .map(|e| e.exercise_text.clone())
                .collect::<Vec<_>>()
        };

        Self {
            title: day.title.clone(),
            warmup: day.warmup.clone().unwrap_or_default(),
            scales: day.scales.clone().unwrap_or_default(),
            block_a: texts(blocks.block_a_exercises()),
            block_b: texts(blocks.block_b_exercises()),
            repertoire: day.repertoire.clone().unwrap_or_default(),
        }
    }
}
