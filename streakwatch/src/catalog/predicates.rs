//! Shape predicates over the outcome history.
//!
//! Each predicate is pure and independent. Windowed predicates match when any
//! single position satisfies the shape.

use super::window::{any_window, uniform};
use crate::history::last_n;
use crate::types::Outcome;

/// Size of the tail inspected by [`recent_majority`].
const RECENT_WINDOW: usize = 5;
/// Occurrences within the recent tail that count as a majority (60% of 5).
const RECENT_MAJORITY: usize = 3;

pub(crate) fn simple_streak(h: &[Outcome]) -> bool {
    any_window::<3>(h, |w| uniform(w))
}

/// Every adjacent pair in the whole history differs.
pub(crate) fn zig_zag(h: &[Outcome]) -> bool {
    h.len() >= 4 && h.windows(2).all(|p| p[0] != p[1])
}

pub(crate) fn streak_break(h: &[Outcome]) -> bool {
    any_window::<4>(h, |&[a, b, c, d]| a == b && b == c && c != d)
}

/// Two alternating steps, then a repeated pair at the last two positions.
pub(crate) fn zig_zag_break(h: &[Outcome]) -> bool {
    any_window::<5>(h, |&[a, b, c, d, e]| a != b && b != c && d == e)
}

pub(crate) fn repeated_pairs(h: &[Outcome]) -> bool {
    any_window::<4>(h, |&[a, b, c, d]| a == b && c == d && a != c)
}

/// Two consecutive draws sit 2 to 4 rounds apart.
pub(crate) fn recurring_draw(h: &[Outcome]) -> bool {
    let draws: Vec<usize> = h
        .iter()
        .enumerate()
        .filter(|&(_, &o)| o == Outcome::Draw)
        .map(|(i, _)| i)
        .collect();

    draws
        .windows(2)
        .any(|p| (2..=4).contains(&(p[1] - p[0])))
}

/// Step, flat pair, then a second flat pair at a different level three
/// positions later.
pub(crate) fn staircase(h: &[Outcome]) -> bool {
    any_window::<6>(h, |&[a, b, c, _, e, f]| a != b && b == c && e == f && b != e)
}

/// The history reads the same forward and backward.
///
/// The first `floor(len / 2)` outcomes are compared against the last ones in
/// reverse; an odd history's middle entry is not compared.
pub(crate) fn mirror(h: &[Outcome]) -> bool {
    let half = h.len() / 2;
    if half == 0 {
        return false;
    }
    h[..half].iter().eq(h[h.len() - half..].iter().rev())
}

/// A draw between two different non-draw outcomes.
pub(crate) fn draw_sandwich(h: &[Outcome]) -> bool {
    any_window::<3>(h, |&[a, b, c]| {
        a != Outcome::Draw && b == Outcome::Draw && c != Outcome::Draw && a != c
    })
}

pub(crate) fn wave(h: &[Outcome]) -> bool {
    any_window::<4>(h, |&[a, b, c, d]| a == c && b == d && a != b)
}

/// One outcome fills at least 60% of the last five rounds.
pub(crate) fn recent_majority(h: &[Outcome]) -> bool {
    if h.len() < RECENT_WINDOW {
        return false;
    }
    let recent = last_n(h, RECENT_WINDOW);
    Outcome::ALL
        .iter()
        .any(|o| recent.iter().filter(|&r| r == o).count() >= RECENT_MAJORITY)
}

pub(crate) fn three_then_one(h: &[Outcome]) -> bool {
    any_window::<4>(h, |w| uniform(&w[..3]) && w[3] != w[0])
}

pub(crate) fn three_then_three(h: &[Outcome]) -> bool {
    any_window::<6>(h, |w| blocks_differ(&w[..3], &w[3..]))
}

pub(crate) fn four_then_four(h: &[Outcome]) -> bool {
    any_window::<8>(h, |w| blocks_differ(&w[..4], &w[4..]))
}

pub(crate) fn four_then_one(h: &[Outcome]) -> bool {
    any_window::<5>(h, |w| uniform(&w[..4]) && w[4] != w[0])
}

/// Two uniform blocks holding different outcomes.
fn blocks_differ(first: &[Outcome], second: &[Outcome]) -> bool {
    uniform(first) && uniform(second) && first[0] != second[0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Outcome::{Away as A, Draw as D, Home as H};

    #[test]
    fn test_simple_streak() {
        assert!(simple_streak(&[H, H, H]));
        assert!(simple_streak(&[A, D, D, D, H]));
        assert!(!simple_streak(&[H, H, A, H, H]));
    }

    #[test]
    fn test_zig_zag_is_global() {
        assert!(zig_zag(&[H, A, H, A]));
        assert!(zig_zag(&[H, D, A, H, D]));
        assert!(!zig_zag(&[H, A, H]));
        // One repeat anywhere breaks it, even with a long alternating tail.
        assert!(!zig_zag(&[H, H, A, H, A, H]));
    }

    #[test]
    fn test_streak_break() {
        assert!(streak_break(&[H, H, H, A]));
        assert!(streak_break(&[D, A, A, A, D]));
        assert!(!streak_break(&[H, H, H, H]));
        assert!(!streak_break(&[H, H, H]));
    }

    #[test]
    fn test_zig_zag_break() {
        assert!(zig_zag_break(&[H, A, H, D, D]));
        assert!(zig_zag_break(&[D, H, A, H, A, A]));
        assert!(!zig_zag_break(&[H, A, H, A, H]));
        assert!(!zig_zag_break(&[H, H, A, D, D]));
        assert!(!zig_zag_break(&[H, A, H, D]));
    }

    #[test]
    fn test_repeated_pairs() {
        assert!(repeated_pairs(&[H, H, A, A]));
        assert!(repeated_pairs(&[D, D, H, H]));
        assert!(!repeated_pairs(&[H, H, H, H]));
        assert!(!repeated_pairs(&[H, A, A, H]));
    }

    #[test]
    fn test_recurring_draw() {
        assert!(recurring_draw(&[D, H, D]));
        assert!(recurring_draw(&[D, H, A, H, D]));
        assert!(!recurring_draw(&[D, D]));
        assert!(!recurring_draw(&[D, H, A, H, A, D]));
        assert!(!recurring_draw(&[D, H, A]));
        assert!(!recurring_draw(&[]));
    }

    #[test]
    fn test_recurring_draw_uses_consecutive_draws_only() {
        // Draws at 0, 1 and 6: gaps of 1 and 5, never 2..=4.
        assert!(!recurring_draw(&[D, D, H, A, H, A, D]));
    }

    #[test]
    fn test_staircase() {
        assert!(staircase(&[H, A, A, D, H, H]));
        assert!(staircase(&[D, A, H, H, A, D, D]));
        assert!(!staircase(&[H, A, A, D, A, A]));
        assert!(!staircase(&[H, H, H, D, A, A]));
        assert!(!staircase(&[H, A, A, D, H]));
    }

    #[test]
    fn test_mirror() {
        assert!(mirror(&[H, H]));
        assert!(mirror(&[H, A, A, H]));
        assert!(mirror(&[D, A, A, D]));
        assert!(!mirror(&[H, A]));
        assert!(!mirror(&[H, A, H, A]));
        assert!(!mirror(&[H]));
        assert!(!mirror(&[]));
    }

    #[test]
    fn test_mirror_odd_length_skips_middle() {
        assert!(mirror(&[H, A, D, A, H]));
        assert!(mirror(&[D, H, D]));
        assert!(mirror(&[A, A, A]));
        // Only the oldest entry breaks the symmetry.
        assert!(!mirror(&[A, H, D, D, H]));
        assert!(!mirror(&[H, H, A, D, H]));
    }

    #[test]
    fn test_draw_sandwich() {
        assert!(draw_sandwich(&[H, D, A]));
        assert!(draw_sandwich(&[H, D, H, D, A]));
        assert!(!draw_sandwich(&[H, D, H]));
        // Both flanks equal in every window.
        assert!(!draw_sandwich(&[H, D, H, D, H]));
        assert!(!draw_sandwich(&[D, D, A]));
        assert!(!draw_sandwich(&[H, A, D]));
    }

    #[test]
    fn test_wave() {
        assert!(wave(&[H, A, H, A]));
        assert!(wave(&[D, D, H, D, H]));
        assert!(!wave(&[H, H, H, H]));
        assert!(!wave(&[H, A, D, A]));
    }

    #[test]
    fn test_recent_majority() {
        assert!(recent_majority(&[H, A, H, D, H]));
        assert!(recent_majority(&[A, A, A, H, D, H, D, D]));
        assert!(!recent_majority(&[H, A, H, D, D, A]));
        assert!(!recent_majority(&[H, H, H, H]));
    }

    #[test]
    fn test_three_then_one() {
        assert!(three_then_one(&[H, H, H, A]));
        assert!(!three_then_one(&[H, H, H, H]));
        assert!(!three_then_one(&[H, H, A, A]));
    }

    #[test]
    fn test_three_then_three() {
        assert!(three_then_three(&[H, H, H, A, A, A]));
        assert!(three_then_three(&[D, A, A, A, D, D, D]));
        assert!(!three_then_three(&[H, H, H, H, H, H]));
        assert!(!three_then_three(&[H, H, H, A, A, D]));
    }

    #[test]
    fn test_four_then_four() {
        assert!(four_then_four(&[D, D, D, D, A, A, A, A]));
        assert!(!four_then_four(&[D, D, D, A, A, A, A, A]));
        assert!(!four_then_four(&[D, D, D, D, A, A, A]));
    }

    #[test]
    fn test_four_then_one() {
        assert!(four_then_one(&[A, A, A, A, H]));
        assert!(!four_then_one(&[A, A, A, A, A]));
        assert!(!four_then_one(&[A, A, A, H]));
    }
}
