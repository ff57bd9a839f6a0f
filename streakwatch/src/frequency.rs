//! Outcome frequency tally.

use serde::{Deserialize, Serialize};

#[cfg(feature = "typescript")]
use ts_rs::TS;

use crate::types::Outcome;

/// Rounded percentage of each outcome in a history.
///
/// Each value is rounded on its own (half-up), so the three need not sum
/// to exactly 100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct FrequencyTable {
    pub home: u8,
    pub draw: u8,
    pub away: u8,
}

impl FrequencyTable {
    /// Build a table from literal percentages.
    pub fn new(home: u8, draw: u8, away: u8) -> Self {
        Self { home, draw, away }
    }

    /// Percentage recorded for `outcome`.
    pub fn get(&self, outcome: Outcome) -> u8 {
        match outcome {
            Outcome::Home => self.home,
            Outcome::Draw => self.draw,
            Outcome::Away => self.away,
        }
    }

    /// True when all three percentages are identical.
    pub fn is_uniform(&self) -> bool {
        self.home == self.draw && self.draw == self.away
    }

    /// Every outcome with its percentage, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Outcome, u8)> + '_ {
        Outcome::ALL.iter().map(move |&o| (o, self.get(o)))
    }
}

/// Tallies outcome percentages over a history.
pub struct FrequencyCounter;

impl FrequencyCounter {
    /// Compute the percentage of each outcome in `history`.
    ///
    /// An empty history yields the all-zero table.
    pub fn compute(history: &[Outcome]) -> FrequencyTable {
        let total = history.len();
        if total == 0 {
            return FrequencyTable::default();
        }

        let percent = |outcome: Outcome| {
            let count = history.iter().filter(|&&o| o == outcome).count();
            round_half_up_percent(count, total)
        };

        FrequencyTable {
            home: percent(Outcome::Home),
            draw: percent(Outcome::Draw),
            away: percent(Outcome::Away),
        }
    }
}

/// `round(count / total * 100)` with halves rounded up, in exact integers.
fn round_half_up_percent(count: usize, total: usize) -> u8 {
    let rounded = (count * 200 + total) / (2 * total);
    // count <= total, so the result never exceeds 100.
    rounded.min(100) as u8
}
