//! Metrics value object and its human-readable report.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use super::LONG_SENTENCE_WORDS;

/// Text statistics and heuristic alerts for one input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextMetrics {
    /// Number of word tokens.
    pub word_count: usize,
    /// Number of non-empty sentence segments.
    pub sentence_count: usize,
    /// Number of non-empty paragraph segments.
    pub paragraph_count: usize,
    /// Words per sentence, rounded to 2 decimals (0 without sentences).
    pub average_sentence_length: f64,
    /// Words per paragraph, rounded to 2 decimals (0 without paragraphs).
    pub average_paragraph_length: f64,
    /// Sentences with more than [`LONG_SENTENCE_WORDS`] tokens, in source order.
    pub long_sentences: Vec<String>,
    /// Runs of 2+ whitespace characters, verbatim, in source order.
    pub repeated_space_runs: Vec<String>,
    /// Typography warnings, one per triggered rule.
    pub typography_alerts: Vec<String>,
}

impl TextMetrics {
    /// Whitespace runs other than plain line breaks.
    ///
    /// Paragraph separators (`\n\n`, `\r\n\r\n`) are reported in
    /// [`repeated_space_runs`](Self::repeated_space_runs) but are not spacing
    /// mistakes.
    pub fn spacing_issues(&self) -> impl Iterator<Item = &str> {
        self.repeated_space_runs
            .iter()
            .map(String::as_str)
            .filter(|run| !run.chars().all(|c| matches!(c, '\n' | '\r')))
    }

    /// Whether any warning-level finding is present.
    pub fn has_warnings(&self) -> bool {
        !self.long_sentences.is_empty()
            || self.spacing_issues().next().is_some()
            || !self.typography_alerts.is_empty()
    }
}

/// Render metrics as a markdown report.
pub fn format_report(metrics: &TextMetrics) -> String {
    let mut out = String::from("## Text metrics\n");
    // Writing into a String cannot fail.
    let _ = writeln!(out, "- Words: {}", metrics.word_count);
    let _ = writeln!(out, "- Sentences: {}", metrics.sentence_count);
    let _ = writeln!(out, "- Paragraphs: {}", metrics.paragraph_count);
    let _ = writeln!(
        out,
        "- Average sentence length: {} words",
        metrics.average_sentence_length
    );
    let _ = writeln!(
        out,
        "- Average paragraph length: {} words",
        metrics.average_paragraph_length
    );
    out.push('\n');

    if !metrics.long_sentences.is_empty() {
        let _ = writeln!(out, "Long sentences (more than {LONG_SENTENCE_WORDS} words):");
        for sentence in &metrics.long_sentences {
            let _ = writeln!(out, "- {sentence}");
        }
        out.push('\n');
    }

    if !metrics.repeated_space_runs.is_empty() {
        out.push_str("Warning: repeated whitespace found.\n");
    }

    if !metrics.typography_alerts.is_empty() {
        out.push_str("Typography alerts:\n");
        for alert in &metrics.typography_alerts {
            let _ = writeln!(out, "- {alert}");
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TextMetrics {
        TextMetrics {
            word_count: 10,
            sentence_count: 3,
            paragraph_count: 1,
            average_sentence_length: 3.33,
            average_paragraph_length: 10.0,
            ..TextMetrics::default()
        }
    }

    #[test]
    fn report_lists_every_number() {
        let report = format_report(&sample());
        assert!(report.contains("- Words: 10\n"));
        assert!(report.contains("- Sentences: 3\n"));
        assert!(report.contains("- Paragraphs: 1\n"));
        assert!(report.contains("- Average sentence length: 3.33 words\n"));
        assert!(report.contains("- Average paragraph length: 10 words\n"));
    }

    #[test]
    fn empty_lists_omit_sections() {
        let report = format_report(&sample());
        assert!(!report.contains("Long sentences"));
        assert!(!report.contains("repeated whitespace"));
        assert!(!report.contains("Typography alerts"));
    }

    #[test]
    fn one_long_sentence_gets_header_and_one_bullet() {
        let metrics = TextMetrics {
            long_sentences: vec!["a very long sentence".to_string()],
            ..sample()
        };
        let report = format_report(&metrics);
        assert!(report.contains("Long sentences (more than 30 words):\n- a very long sentence\n"));
        let bullets = report
            .lines()
            .filter(|l| *l == "- a very long sentence")
            .count();
        assert_eq!(bullets, 1);
    }

    #[test]
    fn repeated_space_flag_line() {
        let metrics = TextMetrics {
            repeated_space_runs: vec!["  ".to_string(), "   ".to_string()],
            ..sample()
        };
        let report = format_report(&metrics);
        assert_eq!(report.matches("Warning: repeated whitespace found.").count(), 1);
    }

    #[test]
    fn typography_alerts_listed() {
        let metrics = TextMetrics {
            typography_alerts: vec![
                "remove space before comma.".to_string(),
                "avoid consecutive question marks.".to_string(),
            ],
            ..sample()
        };
        let report = format_report(&metrics);
        assert!(report.contains(
            "Typography alerts:\n- remove space before comma.\n- avoid consecutive question marks.\n"
        ));
    }

    #[test]
    fn has_warnings_tracks_lists() {
        assert!(!sample().has_warnings());
        let metrics = TextMetrics {
            typography_alerts: vec!["x".to_string()],
            ..sample()
        };
        assert!(metrics.has_warnings());
    }

    #[test]
    fn paragraph_breaks_are_not_spacing_issues() {
        let metrics = TextMetrics {
            repeated_space_runs: vec!["\n\n".to_string(), "\r\n\r\n".to_string()],
            ..sample()
        };
        assert!(!metrics.has_warnings());

        let metrics = TextMetrics {
            repeated_space_runs: vec!["\n\n".to_string(), "  ".to_string(), " \n\n".to_string()],
            ..sample()
        };
        assert_eq!(metrics.spacing_issues().collect::<Vec<_>>(), vec!["  ", " \n\n"]);
        assert!(metrics.has_warnings());
    }
}
