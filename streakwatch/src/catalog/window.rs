//! Fixed-size window scanning.

use crate::types::Outcome;

/// True when `pred` holds for at least one contiguous window of `W` outcomes.
///
/// Histories shorter than `W` have no windows and never match.
pub(crate) fn any_window<const W: usize>(
    history: &[Outcome],
    pred: impl Fn(&[Outcome; W]) -> bool,
) -> bool {
    history
        .windows(W)
        .filter_map(|w| <&[Outcome; W]>::try_from(w).ok())
        .any(pred)
}

/// True when every value in `block` is the same.
pub(crate) fn uniform(block: &[Outcome]) -> bool {
    block.windows(2).all(|p| p[0] == p[1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Outcome::{Away as A, Draw as D, Home as H};

    #[test]
    fn test_short_history_never_matches() {
        assert!(!any_window::<3>(&[H, H], |_| true));
        assert!(!any_window::<3>(&[], |_| true));
    }

    #[test]
    fn test_any_position_is_enough() {
        let history = [H, D, A, A];
        assert!(any_window::<2>(&history, |&[a, b]| a == b));
        assert!(!any_window::<2>(&history, |&[a, b]| a == D && b == H));
    }

    #[test]
    fn test_uniform() {
        assert!(uniform(&[A, A, A]));
        assert!(uniform(&[D]));
        assert!(!uniform(&[A, A, H]));
    }
}
