//! Text segmentation utilities.
//!
//! Splits raw text into paragraphs, sentences, and word tokens for the
//! analyzer. Segmentation is deliberately shallow: sentences end at any
//! terminator character, regardless of abbreviations or decimals.

use regex::Regex;
use std::sync::LazyLock;

/// Unicode word-character runs (letters, marks, digits, connectors).
///
/// The join controls ZWNJ and ZWJ separate tokens, so a compound such as
/// `می‌روم` is two words.
static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\w&&[^\x{200C}\x{200D}]]+").expect("valid regex"));

/// Runs of two or more whitespace characters.
static WHITESPACE_RUN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("valid regex"));

/// Paragraph separator.
const PARAGRAPH_BREAK: &str = "\n\n";

/// Characters that end a sentence: ASCII, Arabic-script and full-width forms.
const fn is_sentence_terminator(ch: char) -> bool {
    matches!(ch, '.' | '?' | '!' | '\u{061F}' | '\u{FF01}' | '\u{FF1F}' | '\u{FF0E}')
}

/// Split text into paragraphs (separated by a blank line).
///
/// Each paragraph is trimmed; empty paragraphs are dropped.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    text.split(PARAGRAPH_BREAK)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Split text into sentences at every terminator character.
///
/// Terminators are consumed by the split. Each sentence is trimmed; empty
/// segments (e.g. between `?!`) are dropped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(is_sentence_terminator)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Count word tokens: maximal runs of Unicode word characters.
pub fn count_words(text: &str) -> usize {
    WORD_PATTERN.find_iter(text).count()
}

/// Count whitespace-delimited tokens.
pub fn count_whitespace_tokens(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Find every run of two or more whitespace characters, verbatim, in order.
pub fn whitespace_runs(text: &str) -> Vec<&str> {
    WHITESPACE_RUN_PATTERN
        .find_iter(text)
        .map(|m| m.as_str())
        .collect()
}

/// Convert `\r\n` line endings to `\n`.
///
/// Apply to file contents before analysis so paragraph breaks in CRLF files
/// match the `\n\n` separator.
pub fn normalize_line_endings(text: String) -> String {
    if text.contains("\r\n") {
        text.replace("\r\n", "\n")
    } else {
        text
    }
}
