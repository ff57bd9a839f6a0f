//! Streakwatch - pattern detection over round outcomes
//!
//! Tracks a bounded history of Home / Draw / Away outcomes for one table and
//! derives, on every query:
//!
//! - **Patterns**: fifteen fixed shape predicates over the history
//! - **Frequencies**: rounded percentage of each outcome
//! - **Suggestion**: an outcome to favor next, with a bounded confidence
//!
//! This is a deterministic rule matcher with a heuristic tie-break, not a
//! validated predictor.
//!
//! # Architecture
//!
//! ```text
//!  append / clear
//!        │
//! ┌──────▼────────┐   ┌────────────────┐
//! │ HistoryBuffer │──▶│ PatternCatalog │──┐
//! └──────┬────────┘   └────────────────┘  │   ┌──────────────────┐
//!        │            ┌──────────────────┐ ├──▶│ SuggestionEngine │
//!        └───────────▶│ FrequencyCounter │─┘   └──────────────────┘
//!                     └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use streakwatch::{Engine, Outcome};
//!
//! let mut engine = Engine::builder().seed(7).build();
//! engine.append(Outcome::Home);
//! engine.append(Outcome::Home);
//! engine.append(Outcome::Home);
//!
//! let suggestion = engine.query_suggestion();
//! assert!(suggestion.should_suggest);
//! ```

pub mod catalog;
pub mod config;
pub mod engine;
pub mod frequency;
pub mod history;
pub mod suggestion;
pub mod types;

// Re-export main types
pub use catalog::{Pattern, PatternCatalog, PatternResult};
pub use config::{OutputFormat, StreakwatchConfig};
pub use engine::{Engine, EngineBuilder, EngineSnapshot};
pub use frequency::{FrequencyCounter, FrequencyTable};
pub use history::{HistoryBuffer, HISTORY_CAPACITY};
pub use suggestion::{SuggestionEngine, SuggestionRecord, NO_PATTERN_REASON};
pub use types::*;
