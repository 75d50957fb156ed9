//! Extractive summaries built from the leading sentences of a document.
//!
//! Sentence boundaries are approximated by the literal `". "` delimiter, so
//! abbreviations and decimal numbers split sentences too. Lengths are
//! counted in characters, never bytes.

use serde::{Deserialize, Serialize};

/// Delimiter used both to split sentences and to join the selected ones.
pub const SENTENCE_DELIMITER: &str = ". ";

/// Marker appended to a truncated section title.
pub const ELLIPSIS: &str = "...";

/// Tunables for [`summarize_with`] and [`section_title`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryConfig {
    /// Candidates of this many characters or fewer are dropped.
    pub min_sentence_chars: usize,
    /// Number of surviving sentences kept, in original order.
    pub max_sentences: usize,
    /// Section titles longer than this are cut and suffixed with [`ELLIPSIS`].
    pub title_max_chars: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            min_sentence_chars: 20,
            max_sentences: 3,
            title_max_chars: 80,
        }
    }
}

/// Summarize `text` with the default [`SummaryConfig`].
pub fn summarize(text: &str) -> String {
    summarize_with(text, &SummaryConfig::default())
}

/// Summarize `text` by joining its first few sufficiently long sentences.
///
/// 1. Newlines become spaces
/// 2. Split on `". "`
/// 3. Trim each candidate and drop those of `min_sentence_chars` or fewer
/// 4. Join the first `max_sentences` survivors with `". "`
/// 5. Append a period if the result is non-empty and lacks one
///
/// Returns an empty string when no candidate survives.
pub fn summarize_with(text: &str, config: &SummaryConfig) -> String {
    let flattened = text.replace('\n', " ");

    let selected: Vec<&str> = flattened
        .split(SENTENCE_DELIMITER)
        .map(str::trim)
        .filter(|s| s.chars().count() > config.min_sentence_chars)
        .take(config.max_sentences)
        .collect();

    let mut summary = selected.join(SENTENCE_DELIMITER).trim().to_string();
    if !summary.is_empty() && !summary.ends_with('.') {
        summary.push('.');
    }
    summary
}

/// Shorten `summary` to at most `max_chars` characters, appending
/// [`ELLIPSIS`] only when something was cut.
pub fn section_title(summary: &str, max_chars: usize) -> String {
    match summary.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{}", &summary[..cut], ELLIPSIS),
        None => summary.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO: &str = "This is a clear test sentence here. Another valid sentence follows along. A third one completes it. A fourth is ignored.";

    #[test]
    fn takes_first_three_long_sentences() {
        assert_eq!(
            summarize(SCENARIO),
            "This is a clear test sentence here. Another valid sentence follows along. A third one completes it."
        );
    }

    #[test]
    fn short_fragments_are_filtered() {
        let text = "1. Intro. Short one. This sentence is long enough to keep. Tiny";
        assert_eq!(summarize(text), "This sentence is long enough to keep.");
    }

    #[test]
    fn exactly_twenty_chars_is_dropped() {
        let twenty = "abcdefghijklmnopqrst";
        assert_eq!(twenty.chars().count(), 20);
        assert_eq!(summarize(twenty), "");
        assert_eq!(summarize("abcdefghijklmnopqrstu"), "abcdefghijklmnopqrstu.");
    }

    #[test]
    fn newlines_are_flattened() {
        let text = "A sentence that spans\ntwo lines of the page. And another fairly long one";
        assert_eq!(
            summarize(text),
            "A sentence that spans two lines of the page. And another fairly long one."
        );
    }

    #[test]
    fn newline_after_period_splits() {
        // ".\n" flattens to ". " and acts as a delimiter
        let text = "First sentence long enough here.\nSecond sentence long enough here.";
        assert_eq!(
            summarize(text),
            "First sentence long enough here. Second sentence long enough here."
        );
    }

    #[test]
    fn empty_and_whitespace_inputs() {
        assert_eq!(summarize(""), "");
        assert_eq!(summarize("   \n  "), "");
    }

    #[test]
    fn existing_trailing_period_is_kept_single() {
        let text = "Only one sentence in this document, ending properly.";
        assert_eq!(summarize(text), text);
    }

    #[test]
    fn length_is_selection_plus_at_most_one_period() {
        // (text, characters in the selected sentences joined by ". ", summary length)
        let cases = [
            (SCENARIO, 98, 99),
            ("no delimiters at all but plenty of characters to survive", 56, 57),
            ("a. b. c. the last one is the longest sentence", 36, 37),
            ("Ends with its own period and nothing else to add.", 49, 49),
            (
                "Ünïcödé sentence with accents, long enough. Ωμέγα second sentence is fine too",
                77,
                78,
            ),
        ];
        for (text, selected_chars, expected) in cases {
            let summary = summarize(text);
            assert_eq!(summary.chars().count(), expected, "{text}");
            assert!(expected <= selected_chars + 1);
            assert!(summary.ends_with('.'));
        }
    }

    #[test]
    fn multibyte_characters_count_as_one() {
        // 21 characters, 42 bytes
        let text = "ééééééééééééééééééééé";
        assert_eq!(summarize(text), format!("{text}."));
    }

    #[test]
    fn custom_config_changes_selection() {
        let config = SummaryConfig {
            min_sentence_chars: 5,
            max_sentences: 1,
            title_max_chars: 80,
        };
        assert_eq!(summarize_with("Short one. Another", &config), "Short one.");
    }

    #[test]
    fn title_short_summary_unchanged() {
        let summary = "Fits easily.";
        assert_eq!(section_title(summary, 80), summary);
    }

    #[test]
    fn title_exactly_at_limit_unchanged() {
        let summary = "x".repeat(80);
        assert_eq!(section_title(&summary, 80), summary);
    }

    #[test]
    fn title_truncated_with_ellipsis() {
        let summary = "y".repeat(81);
        let title = section_title(&summary, 80);
        assert_eq!(title, format!("{}...", "y".repeat(80)));
        assert_eq!(title.chars().count(), 83);
    }

    #[test]
    fn title_truncation_respects_char_boundaries() {
        let summary = "é".repeat(100);
        let title = section_title(&summary, 80);
        assert_eq!(title.chars().count(), 83);
        assert!(title.starts_with(&"é".repeat(80)));
    }
}
