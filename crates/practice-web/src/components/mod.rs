//! Stateless display components rendered from already-fetched data

pub mod analytics_summary;
pub mod day_selector;
pub mod history_card;
pub mod notice;
pub mod practice_block;

pub use analytics_summary::AnalyticsSummaryCard;
pub use day_selector::DaySelector;
pub use history_card::HistoryCard;
pub use notice::Notice;
pub use practice_block::PracticeBlock;
