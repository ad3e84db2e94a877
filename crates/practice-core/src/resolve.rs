//! Lookups over already-fetched practice data
//!
//! Every page resolves the same things: the instrument named in the URL, that
//! instrument's active template, a day of the rotation, and the exercise
//! blocks of a day in display order. These helpers are the only place that
//! logic lives.

use crate::types::{BlockType, Exercise, ExerciseBlock, Instrument, PracticeDay, PracticeTemplate};

/// Outcome of resolving an instrument name to its active template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// Both the instrument and an active template were found
    Found {
        /// The matched instrument
        instrument: &'a Instrument,
        /// First active template of that instrument
        template: &'a PracticeTemplate,
    },
    /// No instrument name matched
    InstrumentNotFound,
    /// The instrument exists but has no active template
    NoActiveTemplate {
        /// The matched instrument
        instrument: &'a Instrument,
    },
}

impl<'a> Resolution<'a> {
    /// The active template, if resolution succeeded
    #[must_use]
    pub const fn template(&self) -> Option<&'a PracticeTemplate> {
        match *self {
            Self::Found { template, .. } => Some(template),
            _ => None,
        }
    }

    /// The matched instrument, if any
    #[must_use]
    pub const fn instrument(&self) -> Option<&'a Instrument> {
        match *self {
            Self::Found { instrument, .. } | Self::NoActiveTemplate { instrument } => {
                Some(instrument)
            }
            Self::InstrumentNotFound => None,
        }
    }
}

/// Find the instrument whose name matches `name`, ignoring case
#[must_use]
pub fn find_instrument<'a>(instruments: &'a [Instrument], name: &str) -> Option<&'a Instrument> {
    let wanted = name.to_lowercase();
    instruments.iter().find(|i| i.name.to_lowercase() == wanted)
}

/// All templates belonging to an instrument, in backend order
pub fn templates_for_instrument(
    templates: &[PracticeTemplate],
    instrument_id: i64,
) -> impl Iterator<Item = &PracticeTemplate> {
    templates.iter().filter(move |t| t.instrument_id == instrument_id)
}

/// First active template of an instrument
///
/// The backend is expected to keep a single active template per instrument;
/// when it does not, the first one in backend order is used.
#[must_use]
pub fn find_active_template(
    templates: &[PracticeTemplate],
    instrument_id: i64,
) -> Option<&PracticeTemplate> {
    templates_for_instrument(templates, instrument_id).find(|t| t.is_active)
}

/// Resolve an instrument name to the instrument and its active template
#[must_use]
pub fn resolve_active_template<'a>(
    instruments: &'a [Instrument],
    templates: &'a [PracticeTemplate],
    name: &str,
) -> Resolution<'a> {
    let Some(instrument) = find_instrument(instruments, name) else {
        return Resolution::InstrumentNotFound;
    };

    match find_active_template(templates, instrument.id) {
        Some(template) => Resolution::Found {
            instrument,
            template,
        },
        None => Resolution::NoActiveTemplate { instrument },
    }
}

/// Day of the rotation with the given number
#[must_use]
pub fn find_day(template: &PracticeTemplate, day_number: u32) -> Option<&PracticeDay> {
    template
        .practice_days
        .iter()
        .find(|d| d.day_number == day_number)
}

/// Clamp a requested day into `1..=days_count`
///
/// A template with zero days still yields day 1.
#[must_use]
pub fn clamp_day(day_number: u32, days_count: u32) -> u32 {
    day_number.clamp(1, days_count.max(1))
}

/// First block of the given type within a day
#[must_use]
pub fn find_block(day: &PracticeDay, block_type: BlockType) -> Option<&ExerciseBlock> {
    day.exercise_blocks
        .iter()
        .find(|b| b.block_type == block_type)
}

/// Exercises of a block sorted by ascending display order
///
/// The sort is stable, so equal display orders keep the backend order.
#[must_use]
pub fn sorted_exercises(block: &ExerciseBlock) -> Vec<&Exercise> {
    let mut exercises: Vec<&Exercise> = block.exercises.iter().collect();
    exercises.sort_by_key(|e| e.display_order);
    exercises
}

/// The two technical focus blocks of a day, each sorted for display
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayBlocks<'a> {
    /// Technical focus A exercises, if the day has that block
    pub block_a: Option<Vec<&'a Exercise>>,
    /// Technical focus B exercises, if the day has that block
    pub block_b: Option<Vec<&'a Exercise>>,
}

impl<'a> DayBlocks<'a> {
    /// Look up and sort both focus blocks of a day
    #[must_use]
    pub fn of(day: &'a PracticeDay) -> Self {
        Self {
            block_a: find_block(day, BlockType::BlockA).map(sorted_exercises),
            block_b: find_block(day, BlockType::BlockB).map(sorted_exercises),
        }
    }

    /// Focus blocks for a day number, empty when the day does not exist
    #[must_use]
    pub fn for_day(template: &'a PracticeTemplate, day_number: u32) -> Self {
        find_day(template, day_number).map_or_else(Self::default, Self::of)
    }

    /// Technical focus A exercises, empty when the block is missing
    #[must_use]
    pub fn block_a_exercises(&self) -> &[&'a Exercise] {
        self.block_a.as_deref().unwrap_or_default()
    }

    /// Technical focus B exercises, empty when the block is missing
    #[must_use]
    pub fn block_b_exercises(&self) -> &[&'a Exercise] {
        self.block_b.as_deref().unwrap_or_default()
    }
}
