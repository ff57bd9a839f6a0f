//! Pattern catalog.
//!
//! Fifteen fixed shape patterns evaluated against the outcome history:
//! - **Runs**: simple streak, streak break, 3-then-1, 4-then-1
//! - **Alternation**: zig-zag, zig-zag break, wave, draw sandwich
//! - **Blocks**: repeated pairs, staircase, 3-then-3, 4-then-4
//! - **Distribution**: recurring draw, mirror, recent majority

mod predicates;
mod window;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::trace;

#[cfg(feature = "typescript")]
use ts_rs::TS;

use crate::types::Outcome;

/// A named shape pattern.
///
/// Variants are declared in catalog order, which is also their sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum Pattern {
    /// Three equal outcomes in a row
    SimpleStreak,
    /// Every adjacent pair in the history differs
    ZigZag,
    /// Three equal outcomes followed by a different one
    StreakBreak,
    /// Alternating run that ends in a repeated pair
    ZigZagBreak,
    /// Two equal pairs holding different outcomes
    RepeatedPairs,
    /// Draws returning every 2 to 4 rounds
    RecurringDraw,
    /// Step followed by two flat pairs at different levels
    Staircase,
    /// History reads the same forward and backward
    Mirror,
    /// A draw between two different non-draw outcomes
    DrawSandwich,
    /// Two outcomes interleaved over four rounds
    Wave,
    /// One outcome in at least 3 of the last 5 rounds
    RecentMajority,
    /// Three equal outcomes then one different
    ThreeThenOne,
    /// Block of three followed by a different block of three
    ThreeThenThree,
    /// Block of four followed by a different block of four
    FourThenFour,
    /// Four equal outcomes then one different
    FourThenOne,
}

impl Pattern {
    /// Every pattern, in catalog order.
    pub const ALL: [Pattern; 15] = [
        Pattern::SimpleStreak,
        Pattern::ZigZag,
        Pattern::StreakBreak,
        Pattern::ZigZagBreak,
        Pattern::RepeatedPairs,
        Pattern::RecurringDraw,
        Pattern::Staircase,
        Pattern::Mirror,
        Pattern::DrawSandwich,
        Pattern::Wave,
        Pattern::RecentMajority,
        Pattern::ThreeThenOne,
        Pattern::ThreeThenThree,
        Pattern::FourThenFour,
        Pattern::FourThenOne,
    ];

    /// Number of patterns in the catalog.
    pub const COUNT: usize = Self::ALL.len();

    /// Human-readable name, used as a suggestion reason.
    pub fn name(&self) -> &'static str {
        match self {
            Pattern::SimpleStreak => "Simple streak",
            Pattern::ZigZag => "Zig-zag",
            Pattern::StreakBreak => "Streak break",
            Pattern::ZigZagBreak => "Zig-zag break",
            Pattern::RepeatedPairs => "Repeated pairs",
            Pattern::RecurringDraw => "Recurring draw",
            Pattern::Staircase => "Staircase",
            Pattern::Mirror => "Mirror",
            Pattern::DrawSandwich => "Draw-sandwich alternation",
            Pattern::Wave => "Wave",
            Pattern::RecentMajority => "Recent majority",
            Pattern::ThreeThenOne => "3-then-1",
            Pattern::ThreeThenThree => "3-then-3",
            Pattern::FourThenFour => "4-then-4",
            Pattern::FourThenOne => "4-then-1",
        }
    }

    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Pattern::SimpleStreak => "simple_streak",
            Pattern::ZigZag => "zig_zag",
            Pattern::StreakBreak => "streak_break",
            Pattern::ZigZagBreak => "zig_zag_break",
            Pattern::RepeatedPairs => "repeated_pairs",
            Pattern::RecurringDraw => "recurring_draw",
            Pattern::Staircase => "staircase",
            Pattern::Mirror => "mirror",
            Pattern::DrawSandwich => "draw_sandwich",
            Pattern::Wave => "wave",
            Pattern::RecentMajority => "recent_majority",
            Pattern::ThreeThenOne => "three_then_one",
            Pattern::ThreeThenThree => "three_then_three",
            Pattern::FourThenFour => "four_then_four",
            Pattern::FourThenOne => "four_then_one",
        }
    }

    /// Shortest history that can match.
    pub fn min_len(&self) -> usize {
        match self {
            Pattern::Mirror => 2,
            Pattern::SimpleStreak | Pattern::DrawSandwich | Pattern::RecurringDraw => 3,
            Pattern::ZigZag
            | Pattern::StreakBreak
            | Pattern::RepeatedPairs
            | Pattern::Wave
            | Pattern::ThreeThenOne => 4,
            Pattern::ZigZagBreak | Pattern::RecentMajority | Pattern::FourThenOne => 5,
            Pattern::Staircase | Pattern::ThreeThenThree => 6,
            Pattern::FourThenFour => 8,
        }
    }

    /// Evaluate this pattern against an oldest-first history.
    pub fn matches(&self, history: &[Outcome]) -> bool {
        match self {
            Pattern::SimpleStreak => predicates::simple_streak(history),
            Pattern::ZigZag => predicates::zig_zag(history),
            Pattern::StreakBreak => predicates::streak_break(history),
            Pattern::ZigZagBreak => predicates::zig_zag_break(history),
            Pattern::RepeatedPairs => predicates::repeated_pairs(history),
            Pattern::RecurringDraw => predicates::recurring_draw(history),
            Pattern::Staircase => predicates::staircase(history),
            Pattern::Mirror => predicates::mirror(history),
            Pattern::DrawSandwich => predicates::draw_sandwich(history),
            Pattern::Wave => predicates::wave(history),
            Pattern::RecentMajority => predicates::recent_majority(history),
            Pattern::ThreeThenOne => predicates::three_then_one(history),
            Pattern::ThreeThenThree => predicates::three_then_three(history),
            Pattern::FourThenFour => predicates::four_then_four(history),
            Pattern::FourThenOne => predicates::four_then_one(history),
        }
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Match state of every catalog pattern for one history snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct PatternResult(BTreeMap<Pattern, bool>);

impl PatternResult {
    /// Whether `pattern` matched.
    pub fn get(&self, pattern: Pattern) -> bool {
        self.0.get(&pattern).copied().unwrap_or(false)
    }

    /// Matched patterns, in catalog order.
    pub fn matched(&self) -> impl Iterator<Item = Pattern> + '_ {
        self.0
            .iter()
            .filter(|&(_, &hit)| hit)
            .map(|(&pattern, _)| pattern)
    }

    pub fn match_count(&self) -> usize {
        self.matched().count()
    }

    /// Every pattern with its result, in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (Pattern, bool)> + '_ {
        self.0.iter().map(|(&p, &hit)| (p, hit))
    }
}

/// Evaluates the full pattern catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternCatalog;

impl PatternCatalog {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate all fifteen patterns against `history`.
    ///
    /// Every pattern is evaluated; none short-circuits another.
    pub fn analyze_all(&self, history: &[Outcome]) -> PatternResult {
        let results = Pattern::ALL
            .iter()
            .map(|&pattern| {
                let hit = pattern.matches(history);
                if hit {
                    trace!(pattern = pattern.as_str(), len = history.len(), "Pattern matched");
                }
                (pattern, hit)
            })
            .collect();

        PatternResult(results)
    }
}
