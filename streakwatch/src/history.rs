//! Bounded outcome history.

use tracing::trace;

use crate::types::{Outcome, Streak};

/// Maximum number of outcomes retained.
pub const HISTORY_CAPACITY: usize = 27;

/// Ordered record of the most recent outcomes, oldest first.
///
/// Appending to a full buffer evicts the oldest entry, so the length never
/// exceeds [`HISTORY_CAPACITY`].
#[derive(Debug, Clone, Default)]
pub struct HistoryBuffer {
    entries: Vec<Outcome>,
}

impl HistoryBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(HISTORY_CAPACITY),
        }
    }

    /// Record an outcome at the tail.
    pub fn append(&mut self, outcome: Outcome) {
        if self.entries.len() == HISTORY_CAPACITY {
            let evicted = self.entries.remove(0);
            trace!(evicted = %evicted, "History full, evicting oldest outcome");
        }
        self.entries.push(outcome);
        debug_assert!(self.entries.len() <= HISTORY_CAPACITY);
    }

    /// Drop every recorded outcome.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Oldest-first view of the history.
    pub fn view(&self) -> &[Outcome] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Up to `n` most recent outcomes of `history`, oldest first.
pub fn last_n(history: &[Outcome], n: usize) -> &[Outcome] {
    &history[history.len().saturating_sub(n)..]
}

/// Run of identical outcomes at the tail of `history`.
pub fn tail_streak(history: &[Outcome]) -> Option<Streak> {
    let last = *history.last()?;
    let length = history.iter().rev().take_while(|&&o| o == last).count();
    Some(Streak {
        outcome: last,
        length,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_and_view() {
        let mut history = HistoryBuffer::new();
        history.append(Outcome::Home);
        history.append(Outcome::Away);

        assert_eq!(history.len(), 2);
        assert_eq!(history.view(), &[Outcome::Home, Outcome::Away]);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut history = HistoryBuffer::new();
        history.append(Outcome::Draw);
        for _ in 0..HISTORY_CAPACITY {
            history.append(Outcome::Home);
        }

        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert!(history.view().iter().all(|&o| o == Outcome::Home));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut history = HistoryBuffer::new();
        history.append(Outcome::Home);
        history.clear();
        history.clear();
        assert!(history.is_empty());
        assert!(history.view().is_empty());
    }

    #[test]
    fn test_last_n() {
        let mut history = HistoryBuffer::new();
        assert!(last_n(history.view(), 3).is_empty());

        history.append(Outcome::Home);
        history.append(Outcome::Draw);
        assert_eq!(last_n(history.view(), 3), &[Outcome::Home, Outcome::Draw]);

        history.append(Outcome::Away);
        history.append(Outcome::Home);
        assert_eq!(
            last_n(history.view(), 3),
            &[Outcome::Draw, Outcome::Away, Outcome::Home]
        );
    }

    #[test]
    fn test_tail_streak() {
        assert_eq!(tail_streak(&[]), None);

        let streak = tail_streak(&[Outcome::Away, Outcome::Home, Outcome::Home]).unwrap();
        assert_eq!(streak.outcome, Outcome::Home);
        assert_eq!(streak.length, 2);

        let single = tail_streak(&[Outcome::Home, Outcome::Draw]).unwrap();
        assert_eq!(single.length, 1);
    }
}
