//! Review summarization.
//!
//! The engine treats the summarizer as an optional collaborator: absence or
//! failure is a normal path and degrades to plain truncation, never an
//! error surfaced to the caller.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("no sentences found in input")]
    EmptyInput,
}

/// A pluggable text summarizer.
pub trait Summarizer {
    /// Reduces `text` to roughly `sentence_count` sentences.
    ///
    /// # Errors
    ///
    /// Returns [`SummarizeError::EmptyInput`] when `text` contains nothing
    /// to summarize.
    fn summarize(&self, text: &str, sentence_count: usize) -> Result<String, SummarizeError>;
}

/// Extractive summarizer: scores each sentence by the normalized document
/// frequency of its words and returns the top `sentence_count` sentences in
/// their original order.
#[derive(Debug, Default, Clone, Copy)]
pub struct FrequencySummarizer;

impl Summarizer for FrequencySummarizer {
    #[allow(clippy::cast_precision_loss)]
    fn summarize(&self, text: &str, sentence_count: usize) -> Result<String, SummarizeError> {
        let sentences = split_sentences(text);
        if sentences.is_empty() || sentence_count == 0 {
            return Err(SummarizeError::EmptyInput);
        }

        let frequencies = word_frequencies(text);
        let max_freq = frequencies.values().copied().max().unwrap_or(1) as f64;

        let mut scored: Vec<(usize, f64)> = sentences
            .iter()
            .enumerate()
            .map(|(idx, sentence)| {
                let words: Vec<String> = tokenize(sentence).collect();
                if words.is_empty() {
                    return (idx, 0.0);
                }
                let total: f64 = words
                    .iter()
                    .map(|w| frequencies.get(w).copied().unwrap_or(0) as f64 / max_freq)
                    .sum();
                // Average rather than sum, so long rambling sentences don't
                // dominate purely by word count.
                (idx, total / words.len() as f64)
            })
            .collect();

        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        let mut picked: Vec<usize> = scored
            .into_iter()
            .take(sentence_count)
            .map(|(idx, _)| idx)
            .collect();
        picked.sort_unstable();

        Ok(picked
            .into_iter()
            .map(|idx| sentences[idx].clone())
            .collect::<Vec<_>>()
            .join(" "))
    }
}

/// Truncation degrade policy: the first `max_chars` characters plus a
/// literal ellipsis marker. Applied whenever summarization is unavailable
/// or fails.
#[must_use]
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    let truncated: String = text.chars().take(max_chars).collect();
    format!("{truncated}...")
}

fn split_sentences(text: &str) -> Vec<String> {
    text.split_inclusive(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty() && s.chars().any(char::is_alphanumeric))
        .map(str::to_string)
        .collect()
}

fn tokenize(sentence: &str) -> impl Iterator<Item = String> + '_ {
    sentence
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
}

fn word_frequencies(text: &str) -> std::collections::HashMap<String, usize> {
    let mut frequencies = std::collections::HashMap::new();
    for word in tokenize(text) {
        *frequencies.entry(word).or_insert(0) += 1;
    }
    frequencies
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_appends_ellipsis_even_when_short() {
        assert_eq!(truncate_with_ellipsis("short text", 300), "short text...");
    }

    #[test]
    fn truncate_cuts_at_char_budget() {
        assert_eq!(truncate_with_ellipsis("abcdefgh", 4), "abcd...");
    }

    #[test]
    fn truncate_respects_multibyte_boundaries() {
        assert_eq!(truncate_with_ellipsis("₹₹₹₹₹", 3), "₹₹₹...");
    }

    #[test]
    fn summarize_empty_input_is_an_error() {
        let result = FrequencySummarizer.summarize("   ", 3);
        assert!(matches!(result, Err(SummarizeError::EmptyInput)));
    }

    #[test]
    fn summarize_caps_sentence_count() {
        let text = "Picture is sharp. Sound is weak. Remote feels cheap. Setup was easy.";
        let summary = FrequencySummarizer.summarize(text, 2).unwrap();
        let sentences: Vec<&str> = summary.split_inclusive('.').filter(|s| !s.trim().is_empty()).collect();
        assert_eq!(sentences.len(), 2);
    }

    #[test]
    fn summarize_short_input_returns_everything() {
        let text = "Picture is sharp.";
        let summary = FrequencySummarizer.summarize(text, 3).unwrap();
        assert_eq!(summary, "Picture is sharp.");
    }

    #[test]
    fn summarize_preserves_document_order() {
        let text = "The picture quality is excellent. Nothing notable here. The picture and the quality impressed everyone.";
        let summary = FrequencySummarizer.summarize(text, 2).unwrap();
        let first = summary.find("The picture quality is excellent.").unwrap();
        let second = summary
            .find("The picture and the quality impressed everyone.")
            .unwrap();
        assert!(first < second);
    }

    #[test]
    fn summarize_prefers_high_frequency_sentences() {
        let text = "Sharp picture with great picture contrast and picture depth. \
                    Unrelated rant about delivery packaging tape residue smell. \
                    Overall the picture makes this picture panel worth it.";
        let summary = FrequencySummarizer.summarize(text, 2).unwrap();
        assert!(!summary.contains("delivery packaging"));
    }
}
