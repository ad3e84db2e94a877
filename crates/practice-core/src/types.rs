//! Data types exchanged with the practice journal backend

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Backend record identifier
pub type RecordId = i64;

/// An instrument the user practices
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Instrument {
    /// Unique identifier
    pub id: RecordId,
    /// Display name, also used as the URL segment
    pub name: String,
    /// Optional short description
    #[serde(default)]
    pub description: Option<String>,
}

/// A multi-day practice rotation for one instrument
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PracticeTemplate {
    /// Unique identifier
    pub id: RecordId,
    /// Instrument this template belongs to
    pub instrument_id: RecordId,
    /// Template name
    pub name: String,
    /// Optional description of the rotation
    #[serde(default)]
    pub description: Option<String>,
    /// Rotation length in days
    pub days_count: u32,
    /// Whether this is the instrument's current template
    #[serde(default)]
    pub is_active: bool,
    /// Days of the rotation; only filled in by the detail endpoint
    #[serde(default)]
    pub practice_days: Vec<PracticeDay>,
}

/// One day of a practice rotation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PracticeDay {
    /// Unique identifier
    #[serde(default)]
    pub id: RecordId,
    /// Position in the rotation, starting at 1
    pub day_number: u32,
    /// Day title
    pub title: String,
    /// Warm-up instructions
    #[serde(default)]
    pub warmup: Option<String>,
    /// Scales and arpeggios instructions
    #[serde(default)]
    pub scales: Option<String>,
    /// Repertoire focus
    #[serde(default)]
    pub repertoire: Option<String>,
    /// Technical focus blocks
    #[serde(default)]
    pub exercise_blocks: Vec<ExerciseBlock>,
}

/// Kind of technical focus block
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BlockType {
    /// Technical focus A
    #[serde(rename = "blockA")]
    BlockA,
    /// Technical focus B, skipped on short days
    #[serde(rename = "blockB")]
    BlockB,
    /// Any block type this interface does not display
    #[serde(other)]
    Other,
}

impl std::fmt::Display for BlockType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlockA => write!(f, "blockA"),
            Self::BlockB => write!(f, "blockB"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// A group of alternative exercises for one technical focus
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExerciseBlock {
    /// Unique identifier
    #[serde(default)]
    pub id: RecordId,
    /// Which focus block this is
    pub block_type: BlockType,
    /// Position of the block within the day
    #[serde(default)]
    pub display_order: i32,
    /// Exercises, in whatever order the backend returned them
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}

/// A single exercise option
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Exercise {
    /// Unique identifier
    pub id: RecordId,
    /// Exercise description
    pub exercise_text: String,
    /// Sort key within the block
    pub display_order: i32,
}

/// Section of a practice session recorded in a log
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionType {
    /// Warm-up
    #[serde(rename = "warmup")]
    Warmup,
    /// Scales and arpeggios
    #[serde(rename = "scales")]
    Scales,
    /// Technical focus A
    #[serde(rename = "techA")]
    TechA,
    /// Technical focus B
    #[serde(rename = "techB")]
    TechB,
    /// Repertoire work
    #[serde(rename = "repertoire")]
    Repertoire,
}

impl SectionType {
    /// All sections in submission order
    pub const ALL: [Self; 5] = [
        Self::Warmup,
        Self::Scales,
        Self::TechA,
        Self::TechB,
        Self::Repertoire,
    ];

    /// Wire name of the section
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Warmup => "warmup",
            Self::Scales => "scales",
            Self::TechA => "techA",
            Self::TechB => "techB",
            Self::Repertoire => "repertoire",
        }
    }

    /// Wire name with its first letter capitalised, as shown on history cards
    #[must_use]
    pub fn label(self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_uppercase().chain(chars).collect()
        })
    }
}

impl std::fmt::Display for SectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recorded practice session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PracticeLog {
    /// Unique identifier
    pub id: RecordId,
    /// Template the session followed
    pub template_id: RecordId,
    /// Rotation day practiced
    pub day_number: u32,
    /// Calendar date of the session
    pub practice_date: NaiveDate,
    /// Session length in minutes
    pub duration_minutes: u32,
    /// Free-form notes
    #[serde(default)]
    pub notes: Option<String>,
    /// Per-section details
    #[serde(default)]
    pub log_details: Vec<LogDetail>,
}

/// Content recorded for one section of a session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogDetail {
    /// Unique identifier, present on backend responses
    #[serde(default)]
    pub id: Option<RecordId>,
    /// Owning log, present on backend responses
    #[serde(default)]
    pub log_id: Option<RecordId>,
    /// Which section this is
    pub section_type: SectionType,
    /// What was practiced
    #[serde(default)]
    pub content: Option<String>,
}

impl LogDetail {
    /// Content if it is present and not blank
    #[must_use]
    pub fn non_empty_content(&self) -> Option<&str> {
        self.content.as_deref().filter(|c| !c.trim().is_empty())
    }
}

/// Request body for creating a practice log
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewPracticeLog {
    /// Template the session followed
    pub template_id: RecordId,
    /// Rotation day practiced
    pub day_number: u32,
    /// Calendar date of the session
    pub practice_date: NaiveDate,
    /// Session length in minutes
    pub duration_minutes: u32,
    /// Free-form notes
    pub notes: String,
    /// Non-empty section details
    pub log_details: Vec<NewLogDetail>,
}

/// One section of a log being created
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewLogDetail {
    /// Which section this is
    pub section_type: SectionType,
    /// What was practiced
    pub content: String,
}

/// Aggregate statistics for a template, computed by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalyticsSummary {
    /// Number of logged sessions
    pub total_sessions: u32,
    /// Sum of session durations
    pub total_minutes: u32,
    /// Mean session duration in minutes
    pub average_duration: f64,
    /// Session count keyed by rotation day number
    #[serde(default)]
    pub sessions_by_day: BTreeMap<String, u32>,
}

impl AnalyticsSummary {
    /// Per-day session counts ordered by numeric day
    ///
    /// Keys that are not day numbers are skipped.
    #[must_use]
    pub fn sessions_per_day(&self) -> Vec<(u32, u32)> {
        let mut days: Vec<(u32, u32)> = self
            .sessions_by_day
            .iter()
            .filter_map(|(day, count)| day.parse().ok().map(|day| (day, *count)))
            .collect();
        days.sort_unstable_by_key(|(day, _)| *day);
        days
    }
}
