//! Next-outcome suggestion.
//!
//! Combines the pattern catalog with the frequency tally: when at least one
//! pattern matches, the least frequent outcome is suggested, with confidence
//! growing with the number of matched patterns.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[cfg(feature = "typescript")]
use ts_rs::TS;

use crate::catalog::{Pattern, PatternCatalog, PatternResult};
use crate::frequency::{FrequencyCounter, FrequencyTable};
use crate::history::last_n;
use crate::types::Outcome;

/// Reason reported when no pattern matched.
pub const NO_PATTERN_REASON: &str = "no reliable pattern identified";

/// Order in which candidates are scanned; earlier entries win ties.
pub const SELECTION_PRIORITY: [Outcome; 3] = [Outcome::Away, Outcome::Home, Outcome::Draw];

/// Confidence added to every positive suggestion.
const BASE_CONFIDENCE: usize = 20;
/// Upper bound on confidence.
const MAX_CONFIDENCE: usize = 90;
/// Recent outcomes echoed back in each record.
const LAST_SHOWN: usize = 3;

/// Suggestion derived from one history snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct SuggestionRecord {
    /// Whether a suggestion is offered
    pub should_suggest: bool,
    /// Outcome to favor, absent when no suggestion is offered
    pub entry: Option<Outcome>,
    /// Names of matched patterns, or the no-pattern reason
    pub reasons: Vec<String>,
    /// Confidence score (0 - 90)
    pub confidence: u8,
    /// Frequencies the pick was based on
    pub frequencies: FrequencyTable,
    /// Up to three most recent outcomes, oldest first
    pub last_three: Vec<Outcome>,
}

/// Produces suggestion records.
///
/// Owns the random source used when the frequency tally cannot separate the
/// outcomes, so callers can seed it for reproducible runs.
pub struct SuggestionEngine {
    catalog: PatternCatalog,
    rng: StdRng,
}

impl SuggestionEngine {
    /// Create an engine seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create an engine with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Create an engine around an existing random source.
    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            catalog: PatternCatalog::new(),
            rng,
        }
    }

    /// Evaluate the catalog and derive a suggestion for `history`.
    pub fn suggest(&mut self, history: &[Outcome]) -> SuggestionRecord {
        let patterns = self.catalog.analyze_all(history);
        self.suggest_from_patterns(history, &patterns)
    }

    /// Derive a suggestion from an already evaluated catalog.
    ///
    /// `patterns` must have been computed from `history`.
    pub fn suggest_from_patterns(
        &mut self,
        history: &[Outcome],
        patterns: &PatternResult,
    ) -> SuggestionRecord {
        let frequencies = FrequencyCounter::compute(history);
        let last_three = last_n(history, LAST_SHOWN).to_vec();
        let reasons: Vec<String> = patterns.matched().map(|p| p.name().to_string()).collect();

        if reasons.is_empty() {
            debug!(len = history.len(), "No pattern matched, withholding suggestion");
            return SuggestionRecord {
                should_suggest: false,
                entry: None,
                reasons: vec![NO_PATTERN_REASON.to_string()],
                confidence: 0,
                frequencies,
                last_three,
            };
        }

        let entry = select_entry(&frequencies, &mut self.rng);
        let confidence = confidence_for(reasons.len());

        debug!(
            entry = %entry,
            confidence = confidence,
            matched = reasons.len(),
            "Suggestion derived"
        );

        SuggestionRecord {
            should_suggest: true,
            entry: Some(entry),
            reasons,
            confidence,
            frequencies,
            last_three,
        }
    }
}

impl Default for SuggestionEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Pick the outcome to favor from a frequency table.
///
/// Candidates are scanned in [`SELECTION_PRIORITY`] order and a candidate
/// replaces the pick only when strictly less frequent, so the earliest
/// candidate at the minimum wins. When all three frequencies are equal the
/// pick is drawn uniformly from `rng` instead.
pub fn select_entry<R: Rng + ?Sized>(frequencies: &FrequencyTable, rng: &mut R) -> Outcome {
    let mut pick = None;
    let mut lowest = u16::MAX;
    for &candidate in &SELECTION_PRIORITY {
        let frequency = u16::from(frequencies.get(candidate));
        if frequency < lowest {
            lowest = frequency;
            pick = Some(candidate);
        }
    }

    match pick {
        Some(outcome) if !frequencies.is_uniform() => outcome,
        _ => {
            let outcome = Outcome::ALL[rng.gen_range(0..Outcome::ALL.len())];
            debug!(entry = %outcome, "Frequencies tied, suggestion drawn at random");
            outcome
        }
    }
}

/// Confidence for `matched` patterns: `min(90, floor(matched / 15 * 100) + 20)`.
pub fn confidence_for(matched: usize) -> u8 {
    let scaled = matched * 100 / Pattern::COUNT;
    (scaled + BASE_CONFIDENCE).min(MAX_CONFIDENCE) as u8
}
