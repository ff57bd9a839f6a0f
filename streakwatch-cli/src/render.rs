//! Output rendering for snapshots and single projections.

use std::fmt::Write as _;

use streakwatch::{
    EngineSnapshot, FrequencyTable, OutputFormat, Outcome, Pattern, PatternResult,
    SuggestionRecord,
};

/// Rendering options taken from the display config.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    pub format: OutputFormat,
    pub show_frequencies: bool,
}

impl Renderer {
    pub fn snapshot(&self, snapshot: &EngineSnapshot) -> anyhow::Result<String> {
        if self.format == OutputFormat::Json {
            return Ok(serde_json::to_string_pretty(snapshot)?);
        }

        let mut out = String::new();
        writeln!(out, "Table:    {}", snapshot.table_id)?;
        writeln!(
            out,
            "History:  {} ({} rounds)",
            compact(&snapshot.history),
            snapshot.history.len()
        )?;
        match snapshot.streak {
            Some(streak) => writeln!(out, "Streak:   {} x{}", streak.outcome, streak.length)?,
            None => writeln!(out, "Streak:   -")?,
        }
        if self.show_frequencies {
            out.push_str(&frequency_lines(&snapshot.frequencies));
        }
        out.push_str(&suggestion_lines(&snapshot.suggestion));
        Ok(out)
    }

    pub fn patterns(&self, patterns: &PatternResult) -> anyhow::Result<String> {
        if self.format == OutputFormat::Json {
            return Ok(serde_json::to_string_pretty(patterns)?);
        }

        let mut out = String::new();
        for (pattern, hit) in patterns.iter() {
            let mark = if hit { "x" } else { " " };
            writeln!(out, "[{}] {}", mark, pattern.name())?;
        }
        Ok(out)
    }

    pub fn frequencies(&self, table: &FrequencyTable) -> anyhow::Result<String> {
        if self.format == OutputFormat::Json {
            return Ok(serde_json::to_string_pretty(table)?);
        }
        Ok(frequency_lines(table))
    }

    pub fn suggestion(&self, record: &SuggestionRecord) -> anyhow::Result<String> {
        if self.format == OutputFormat::Json {
            return Ok(serde_json::to_string_pretty(record)?);
        }
        Ok(suggestion_lines(record))
    }
}

/// Text listing of the catalog with minimum history lengths.
pub fn catalog() -> String {
    Pattern::ALL
        .iter()
        .map(|p| format!("{:<28} min {}\n", p.name(), p.min_len()))
        .collect()
}

fn compact(history: &[Outcome]) -> String {
    if history.is_empty() {
        return "-".to_string();
    }
    history.iter().map(Outcome::symbol).collect()
}

fn frequency_lines(table: &FrequencyTable) -> String {
    let parts: Vec<String> = table
        .iter()
        .map(|(outcome, pct)| format!("{} {}%", outcome, pct))
        .collect();
    format!("Freq:     {}\n", parts.join(", "))
}

fn suggestion_lines(record: &SuggestionRecord) -> String {
    let mut out = String::new();
    match record.entry.filter(|_| record.should_suggest) {
        Some(entry) => {
            out.push_str(&format!(
                "Suggest:  {} (confidence {}%)\n",
                entry, record.confidence
            ));
        }
        None => out.push_str("Suggest:  none\n"),
    }
    out.push_str(&format!("Reasons:  {}\n", record.reasons.join(", ")));
    out.push_str(&format!("Last 3:   {}\n", compact(&record.last_three)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use streakwatch::Engine;

    fn text() -> Renderer {
        Renderer {
            format: OutputFormat::Text,
            show_frequencies: true,
        }
    }

    #[test]
    fn test_text_snapshot() {
        let mut engine = Engine::builder().table_id("t1").seed(1).build();
        engine.append_sequence("HHHA").unwrap();

        let out = text().snapshot(&engine.snapshot()).unwrap();
        assert!(out.contains("History:  HHHA (4 rounds)"));
        assert!(out.contains("Streak:   away x1"));
        assert!(out.contains("Freq:     home 75%, draw 0%, away 25%"));
        assert!(out.contains("Suggest:  draw (confidence 40%)"));
        assert!(out.contains("Last 3:   HHA"));
    }

    #[test]
    fn test_text_snapshot_without_frequencies() {
        let renderer = Renderer {
            show_frequencies: false,
            ..text()
        };
        let mut engine = Engine::builder().seed(1).build();
        let out = renderer.snapshot(&engine.snapshot()).unwrap();
        assert!(!out.contains("Freq:"));
        assert!(out.contains("Suggest:  none"));
        assert!(out.contains("History:  - (0 rounds)"));
    }

    #[test]
    fn test_json_patterns() {
        let renderer = Renderer {
            format: OutputFormat::Json,
            show_frequencies: true,
        };
        let mut engine = Engine::builder().seed(1).build();
        engine.append_sequence("HHH").unwrap();

        let out = renderer.patterns(&engine.query_patterns()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["simple_streak"], serde_json::json!(true));
    }

    #[test]
    fn test_catalog_lists_every_pattern() {
        let listing = catalog();
        assert_eq!(listing.lines().count(), Pattern::COUNT);
        assert!(listing.contains("4-then-4"));
    }
}
