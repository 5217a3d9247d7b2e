//! Sentence segmentation with protected spans and a length bound.
//!
//! Segmentation runs in four steps:
//!
//! 1. **Protect**: quoted and bracketed spans become atomic tokens
//! 2. **Split**: boundaries go after terminal punctuation (`。？！`) unless
//!    more terminal punctuation follows
//! 3. **Restore**: each sentence is rebuilt from its tokens
//! 4. **Bound**: sentences longer than `max_len` chars are re-split on
//!    `。？！?!`, each fragment closed with `。`
//!
//! # Example
//!
//! ```
//! let sentences = sentclean::segment("今天天气很好。明天也不错！");
//! assert_eq!(sentences, vec!["今天天气很好。", "明天也不错！"]);
//! ```

mod boundary;
pub mod protect;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub use protect::{protect, ProtectedSpan, Token, TokenizedText};

/// Default upper bound on sentence length, in chars.
pub const DEFAULT_MAX_LEN: usize = 160;

/// Terminal marks used for boundary detection by default.
pub const DEFAULT_TERMINALS: [char; 3] = ['。', '？', '！'];

/// Marks used to re-split over-length sentences by default.
pub const DEFAULT_FALLBACK_TERMINALS: [char; 5] = ['。', '？', '！', '?', '!'];

/// Mark appended to every fragment produced by the length fallback.
const FALLBACK_CLOSER: char = '。';

/// Options for sentence segmentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentOptions {
    /// Maximum sentence length in chars before the fallback splitter runs
    pub max_len: usize,

    /// Marks that end a sentence
    pub terminals: Vec<char>,

    /// Marks the fallback splitter cuts on
    pub fallback_terminals: Vec<char>,

    /// Keep quoted and bracketed spans whole
    pub protect_spans: bool,
}

impl SegmentOptions {
    /// Create new segment options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum sentence length.
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }

    /// Set the terminal marks.
    pub fn with_terminals(mut self, terminals: impl IntoIterator<Item = char>) -> Self {
        self.terminals = terminals.into_iter().collect();
        self
    }

    /// Set the fallback marks.
    pub fn with_fallback_terminals(mut self, terminals: impl IntoIterator<Item = char>) -> Self {
        self.fallback_terminals = terminals.into_iter().collect();
        self
    }

    /// Enable or disable span protection.
    pub fn with_span_protection(mut self, protect: bool) -> Self {
        self.protect_spans = protect;
        self
    }

    /// Check that the options can drive a segmenter.
    pub fn validate(&self) -> Result<()> {
        if self.max_len == 0 {
            return Err(Error::InvalidOptions(
                "max_len must be a positive number of characters".to_string(),
            ));
        }
        if self.terminals.is_empty() {
            return Err(Error::InvalidOptions(
                "at least one terminal mark is required".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self {
            max_len: DEFAULT_MAX_LEN,
            terminals: DEFAULT_TERMINALS.to_vec(),
            fallback_terminals: DEFAULT_FALLBACK_TERMINALS.to_vec(),
            protect_spans: true,
        }
    }
}

/// Statistics collected while segmenting one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentStats {
    /// Number of sentences emitted
    pub sentence_count: usize,

    /// Number of protected spans found
    pub protected_span_count: usize,

    /// Number of over-length sentences rewritten by the fallback splitter
    pub fallback_split_count: usize,

    /// Length in chars of the longest emitted sentence
    pub max_sentence_len: usize,
}

/// Sentence segmenter.
#[derive(Debug, Clone, Default)]
pub struct Segmenter {
    options: SegmentOptions,
}

impl Segmenter {
    /// Create a segmenter, rejecting unusable options.
    pub fn new(options: SegmentOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    /// Create a default segmenter with a custom length bound.
    pub fn with_max_len(max_len: usize) -> Result<Self> {
        Self::new(SegmentOptions::default().with_max_len(max_len))
    }

    /// Options this segmenter was built with.
    pub fn options(&self) -> &SegmentOptions {
        &self.options
    }

    /// Split `content` into sentences.
    pub fn segment(&self, content: &str) -> Vec<String> {
        self.segment_with_stats(content).0
    }

    /// Split `content` into sentences and report what happened.
    pub fn segment_with_stats(&self, content: &str) -> (Vec<String>, SegmentStats) {
        let mut stats = SegmentStats::default();
        if content.is_empty() {
            return (Vec::new(), stats);
        }

        let text = if self.options.protect_spans {
            protect(content)
        } else {
            TokenizedText::plain(content)
        };
        stats.protected_span_count = text.spans().len();

        let mut sentences = Vec::new();
        for range in boundary::sentence_ranges(&text, &self.options.terminals) {
            let sentence = text.render(range);
            if sentence.chars().count() > self.options.max_len {
                stats.fallback_split_count += 1;
                sentences.extend(split_over_length(
                    &sentence,
                    &self.options.fallback_terminals,
                ));
            } else {
                sentences.push(sentence);
            }
        }

        stats.sentence_count = sentences.len();
        stats.max_sentence_len = sentences
            .iter()
            .map(|s| s.chars().count())
            .max()
            .unwrap_or(0);

        log::debug!(
            "segmented {} chars into {} sentences ({} protected spans, {} fallback splits)",
            content.chars().count(),
            stats.sentence_count,
            stats.protected_span_count,
            stats.fallback_split_count
        );

        (sentences, stats)
    }
}

/// Cut an over-length sentence on `marks`, closing each fragment with `。`.
///
/// A sentence with none of the marks comes back as one fragment; it may
/// still exceed the bound.
fn split_over_length(sentence: &str, marks: &[char]) -> Vec<String> {
    sentence
        .split(|c: char| marks.contains(&c))
        .filter(|fragment| !fragment.is_empty())
        .map(|fragment| {
            let mut fragment = fragment.to_string();
            fragment.push(FALLBACK_CLOSER);
            fragment
        })
        .collect()
}

/// Split `content` into sentences of at most 160 chars (best effort).
pub fn segment(content: &str) -> Vec<String> {
    Segmenter::default().segment(content)
}

/// Split `content` into sentences with a custom length bound.
///
/// Fails with [`Error::InvalidOptions`] when `max_len` is zero.
pub fn segment_with_max_len(content: &str, max_len: usize) -> Result<Vec<String>> {
    Ok(Segmenter::with_max_len(max_len)?.segment(content))
}
