//! Prose analysis.
//!
//! [`analyze`] computes word, sentence, and paragraph statistics plus a set
//! of heuristic alerts for one piece of text. It is a pure function: any
//! string is valid input, and identical input yields identical output.
//! [`format_report`] renders the result for terminal or file output.

pub mod reports;
pub mod typography;

pub use reports::{TextMetrics, format_report};

use crate::text;

/// Sentences with more whitespace-delimited tokens than this are "long".
pub const LONG_SENTENCE_WORDS: usize = 30;

/// Analyze raw text.
///
/// Never fails; empty input and input without sentence terminators are
/// handled by treating zero denominators as a zero average.
#[tracing::instrument(skip(input), fields(text_len = input.len()))]
pub fn analyze(input: &str) -> TextMetrics {
    let paragraphs = text::split_paragraphs(input);
    let sentences = text::split_sentences(input);
    let word_count = text::count_words(input);

    let long_sentences: Vec<String> = sentences
        .iter()
        .filter(|s| text::count_whitespace_tokens(s) > LONG_SENTENCE_WORDS)
        .map(|s| (*s).to_string())
        .collect();

    let repeated_space_runs: Vec<String> = text::whitespace_runs(input)
        .into_iter()
        .map(str::to_string)
        .collect();

    let metrics = TextMetrics {
        word_count,
        sentence_count: sentences.len(),
        paragraph_count: paragraphs.len(),
        average_sentence_length: average(word_count, sentences.len()),
        average_paragraph_length: average(word_count, paragraphs.len()),
        long_sentences,
        repeated_space_runs,
        typography_alerts: typography::check_typography(input),
    };

    tracing::debug!(
        words = metrics.word_count,
        sentences = metrics.sentence_count,
        paragraphs = metrics.paragraph_count,
        "analysis complete"
    );
    metrics
}

/// `total / count` rounded to 2 decimals, or 0 when `count` is 0.
fn average(total: usize, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    round2(total as f64 / count as f64)
}

/// Round to 2 decimal places, ties away from zero.
fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn deterministic() {
        let text = "First  sentence , here. Second one! Third?\n\nNew paragraph.";
        assert_eq!(analyze(text), analyze(text));
    }

    #[test]
    fn empty_input_is_all_zero() {
        let m = analyze("");
        assert_eq!(m.word_count, 0);
        assert_eq!(m.sentence_count, 0);
        assert_eq!(m.paragraph_count, 0);
        assert_eq!(m.average_sentence_length, 0.0);
        assert_eq!(m.average_paragraph_length, 0.0);
        assert!(m.long_sentences.is_empty());
        assert!(m.repeated_space_runs.is_empty());
        assert!(m.typography_alerts.is_empty());
    }

    #[test]
    fn punctuation_only_input() {
        let m = analyze("...!!!");
        assert_eq!(m.word_count, 0);
        assert_eq!(m.sentence_count, 0);
        assert_eq!(m.paragraph_count, 1);
        assert_eq!(m.average_sentence_length, 0.0);
        assert_eq!(m.average_paragraph_length, 0.0);
    }

    #[test]
    fn word_count() {
        assert_eq!(analyze("hello world").word_count, 2);
    }

    #[test]
    fn paragraph_split() {
        assert_eq!(analyze("A.\n\nB.").paragraph_count, 2);
    }

    #[test]
    fn sentence_split() {
        assert_eq!(analyze("One. Two! Three?").sentence_count, 3);
    }

    #[test]
    fn no_terminators_still_one_sentence() {
        let m = analyze("just some words");
        assert_eq!(m.sentence_count, 1);
        assert_eq!(m.average_sentence_length, 3.0);
    }

    #[test]
    fn long_sentence_boundary() {
        let thirty = format!("{}.", words(30));
        assert!(analyze(&thirty).long_sentences.is_empty());

        let thirty_one = format!("{}.", words(31));
        let m = analyze(&thirty_one);
        assert_eq!(m.long_sentences, vec![words(31)]);
    }

    #[test]
    fn long_sentences_keep_source_order() {
        let first = format!("alpha {}", words(30));
        let second = format!("omega {}", words(30));
        let text = format!("{first}. Short one. {second}.");
        assert_eq!(analyze(&text).long_sentences, vec![first, second]);
    }

    #[test]
    fn repeated_spaces() {
        assert_eq!(analyze("a  b   c").repeated_space_runs, vec!["  ", "   "]);
    }

    #[test]
    fn paragraph_break_counts_as_repeated_whitespace() {
        assert_eq!(analyze("A.\n\nB.").repeated_space_runs, vec!["\n\n"]);
    }

    #[test]
    fn comma_alert_once() {
        let m = analyze("word , next , again");
        assert_eq!(
            m.typography_alerts
                .iter()
                .filter(|a| *a == "remove space before comma.")
                .count(),
            1
        );
    }

    #[test]
    fn averages_rounded_to_two_places() {
        // 10 words over 3 sentences.
        let m = analyze("one two three. four five six. seven eight nine ten.");
        assert_eq!(m.word_count, 10);
        assert_eq!(m.sentence_count, 3);
        assert_eq!(m.average_sentence_length, 3.33);
        assert_eq!(m.average_paragraph_length, 10.0);
    }

    #[test]
    fn rounding_helper() {
        assert_eq!(round2(2.0 / 3.0), 0.67);
        assert_eq!(round2(12.5), 12.5);
        assert_eq!(average(7, 0), 0.0);
        assert_eq!(average(7, 2), 3.5);
    }

    #[test]
    fn persian_text() {
        let text = "این یک جمله است. آیا جمله دوم است؟\n\nپاراگراف دوم!";
        let m = analyze(text);
        assert_eq!(m.word_count, 10);
        assert_eq!(m.sentence_count, 3);
        assert_eq!(m.paragraph_count, 2);
        assert_eq!(m.average_paragraph_length, 5.0);
    }
}
