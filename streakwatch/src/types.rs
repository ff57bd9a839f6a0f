//! Core types for the streakwatch engine.
//!
//! With the `typescript` feature enabled, the dashboard-facing types can be
//! exported to TypeScript using ts-rs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// Result of a single round.
///
/// The declaration order is also the display order used by frequency tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Home side won the round
    Home,
    /// Round ended level
    Draw,
    /// Away side won the round
    Away,
}

impl Outcome {
    /// All outcomes, in display order.
    pub const ALL: [Outcome; 3] = [Outcome::Home, Outcome::Draw, Outcome::Away];

    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Home => "home",
            Outcome::Draw => "draw",
            Outcome::Away => "away",
        }
    }

    /// One-letter symbol used in compact history strings.
    pub fn symbol(&self) -> char {
        match self {
            Outcome::Home => 'H',
            Outcome::Draw => 'D',
            Outcome::Away => 'A',
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Outcome {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home" | "h" => Ok(Outcome::Home),
            "draw" | "d" | "tie" | "t" => Ok(Outcome::Draw),
            "away" | "a" => Ok(Outcome::Away),
            _ => Err(EngineError::InvalidOutcome(s.to_string())),
        }
    }
}

impl TryFrom<char> for Outcome {
    type Error = EngineError;

    fn try_from(c: char) -> Result<Self> {
        match c.to_ascii_uppercase() {
            'H' => Ok(Outcome::Home),
            'D' | 'T' => Ok(Outcome::Draw),
            'A' => Ok(Outcome::Away),
            _ => Err(EngineError::InvalidOutcome(c.to_string())),
        }
    }
}

/// Parse a sequence of outcomes.
///
/// Accepts either a compact run of symbols (`"HHDA"`) or words separated by
/// commas and/or whitespace (`"home, draw away"`). Nothing is returned unless
/// every token is valid.
pub fn parse_sequence(input: &str) -> Result<Vec<Outcome>> {
    let tokens: Vec<&str> = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect();

    let mut outcomes = Vec::new();
    for token in tokens {
        match token.parse::<Outcome>() {
            Ok(outcome) => outcomes.push(outcome),
            // A compact run like "HHDA" is a single token.
            Err(_) if token.chars().count() > 1 => {
                for c in token.chars() {
                    outcomes.push(Outcome::try_from(c).map_err(|_| {
                        EngineError::InvalidOutcome(token.to_string())
                    })?);
                }
            }
            Err(e) => return Err(e),
        }
    }
    Ok(outcomes)
}

/// Maximal run of identical outcomes at the tail of the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct Streak {
    /// Outcome repeated at the tail
    pub outcome: Outcome,
    /// Number of consecutive repetitions (at least 1)
    pub length: usize,
}

/// Error types for streakwatch.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Input did not name Home, Draw or Away
    #[error("Invalid outcome: {0:?} (expected home, draw or away)")]
    InvalidOutcome(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_words() {
        assert_eq!("home".parse::<Outcome>().unwrap(), Outcome::Home);
        assert_eq!(" Draw ".parse::<Outcome>().unwrap(), Outcome::Draw);
        assert_eq!("TIE".parse::<Outcome>().unwrap(), Outcome::Draw);
        assert_eq!("a".parse::<Outcome>().unwrap(), Outcome::Away);
    }

    #[test]
    fn test_parse_invalid() {
        let err = "penalty".parse::<Outcome>().unwrap_err();
        assert!(matches!(err, EngineError::InvalidOutcome(ref s) if s == "penalty"));
        assert!(Outcome::try_from('x').is_err());
    }

    #[test]
    fn test_parse_sequence_forms() {
        let compact = parse_sequence("HHdA").unwrap();
        assert_eq!(
            compact,
            vec![Outcome::Home, Outcome::Home, Outcome::Draw, Outcome::Away]
        );

        let words = parse_sequence("home, draw  away").unwrap();
        assert_eq!(words, vec![Outcome::Home, Outcome::Draw, Outcome::Away]);

        assert!(parse_sequence("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_sequence_rejects_bad_token() {
        let err = parse_sequence("HHXA").unwrap_err();
        assert!(matches!(err, EngineError::InvalidOutcome(ref s) if s == "HHXA"));
        assert!(parse_sequence("home, banana").is_err());
    }

    #[test]
    fn test_symbol_and_display() {
        let rendered: String = Outcome::ALL.iter().map(Outcome::symbol).collect();
        assert_eq!(rendered, "HDA");
        assert_eq!(Outcome::Away.to_string(), "away");
    }
}
