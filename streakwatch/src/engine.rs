//! Engine - the caller-facing facade.
//!
//! Owns one table's history and recomputes every derived view on demand.
//! Tables are independent: give each one its own engine.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[cfg(feature = "typescript")]
use ts_rs::TS;

use crate::catalog::{PatternCatalog, PatternResult};
use crate::config::EngineConfig;
use crate::frequency::{FrequencyCounter, FrequencyTable};
use crate::history::{tail_streak, HistoryBuffer};
use crate::suggestion::{SuggestionEngine, SuggestionRecord};
use crate::types::{parse_sequence, Outcome, Result, Streak};

/// Everything a dashboard renders for one table, computed together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct EngineSnapshot {
    /// Table identifier
    pub table_id: String,
    /// History, oldest first
    pub history: Vec<Outcome>,
    /// Result of every catalog pattern
    pub patterns: PatternResult,
    /// Outcome percentages
    pub frequencies: FrequencyTable,
    /// Suggestion for the next round
    pub suggestion: SuggestionRecord,
    /// Run of identical outcomes at the tail
    pub streak: Option<Streak>,
}

/// Pattern detection and suggestion engine for one table.
pub struct Engine {
    /// Table identifier
    table_id: String,
    /// Recorded outcomes
    history: HistoryBuffer,
    /// Pattern catalog
    catalog: PatternCatalog,
    /// Suggestion policy and its random source
    suggestions: SuggestionEngine,
}

impl Engine {
    /// Create an engine with default configuration.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create with custom configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        let suggestions = match config.seed {
            Some(seed) => SuggestionEngine::seeded(seed),
            None => SuggestionEngine::new(),
        };

        info!(table_id = %config.table_id, seeded = config.seed.is_some(), "Engine created");

        Self {
            table_id: config.table_id,
            history: HistoryBuffer::new(),
            catalog: PatternCatalog::new(),
            suggestions,
        }
    }

    /// Create a builder for custom configuration.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    /// Get table ID.
    pub fn table_id(&self) -> &str {
        &self.table_id
    }

    /// Record a new outcome.
    pub fn append(&mut self, outcome: Outcome) {
        self.history.append(outcome);
        debug!(
            table_id = %self.table_id,
            outcome = %outcome,
            len = self.history.len(),
            "Outcome recorded"
        );
    }

    /// Parse and record a single outcome token.
    ///
    /// The history is unchanged when the token is invalid.
    pub fn append_raw(&mut self, token: &str) -> Result<()> {
        let outcome = token.parse::<Outcome>()?;
        self.append(outcome);
        Ok(())
    }

    /// Parse and record a sequence of outcomes, returning how many were added.
    ///
    /// The whole sequence is validated first; one bad token rejects all of it.
    pub fn append_sequence(&mut self, input: &str) -> Result<usize> {
        let outcomes = parse_sequence(input)?;
        for &outcome in &outcomes {
            self.append(outcome);
        }
        Ok(outcomes.len())
    }

    /// Forget every recorded outcome.
    pub fn clear(&mut self) {
        self.history.clear();
        debug!(table_id = %self.table_id, "History cleared");
    }

    /// History, oldest first.
    pub fn history(&self) -> &[Outcome] {
        self.history.view()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Evaluate every catalog pattern.
    pub fn query_patterns(&self) -> PatternResult {
        self.catalog.analyze_all(self.history.view())
    }

    /// Outcome percentages over the current history.
    pub fn query_frequencies(&self) -> FrequencyTable {
        FrequencyCounter::compute(self.history.view())
    }

    /// Suggestion for the next round.
    pub fn query_suggestion(&mut self) -> SuggestionRecord {
        self.suggestions.suggest(self.history.view())
    }

    /// Run of identical outcomes at the tail.
    pub fn current_streak(&self) -> Option<Streak> {
        tail_streak(self.history.view())
    }

    /// Compute every view at once.
    pub fn snapshot(&mut self) -> EngineSnapshot {
        let history = self.history.view();
        let patterns = self.catalog.analyze_all(history);
        let suggestion = self.suggestions.suggest_from_patterns(history, &patterns);

        EngineSnapshot {
            table_id: self.table_id.clone(),
            history: history.to_vec(),
            frequencies: suggestion.frequencies,
            patterns,
            suggestion,
            streak: tail_streak(history),
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for Engine configuration.
pub struct EngineBuilder {
    config: EngineConfig,
}

impl EngineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    /// Set table ID.
    pub fn table_id(mut self, table_id: impl Into<String>) -> Self {
        self.config.table_id = table_id.into();
        self
    }

    /// Seed the tie-break random source.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Build the engine.
    pub fn build(self) -> Engine {
        Engine::with_config(self.config)
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
