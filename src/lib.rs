//! # sentclean
//!
//! Text sanitization and sentence segmentation for CJK documents.
//!
//! The library takes raw document text, strips markup, annotations and
//! personally-identifying noise (emails, URLs, IP addresses), and splits the
//! result into sentences. Quoted and bracketed spans are never split, and
//! sentences are kept under a configurable length.
//!
//! ## Quick Start
//!
//! ```
//! let clean = sentclean::sanitize("联系邮箱：a.b@example.com。价格1,000元！");
//! assert_eq!(clean, "联系邮箱：。价格1000元！");
//!
//! let sentences = sentclean::segment("他说：“今天。天气好。”真的。");
//! assert_eq!(sentences, vec!["他说：“今天。天气好。”", "真的。"]);
//! ```
//!
//! ## Features
//!
//! - **Sanitizer**: ordered pipeline of named stages with presets
//! - **Segmenter**: terminal-punctuation boundaries, span protection, length bound
//! - **Numeric helpers**: digit-grouping normalization and digit padding
//! - **Batch processing**: independent documents processed in parallel with Rayon
//! - **JSON output**: serde serialization of results

pub mod error;
pub mod locate;
pub mod numeric;
pub mod render;
pub mod sanitize;
pub mod segment;

// Re-export commonly used types
pub use error::{Error, Result};
pub use locate::{find_str, find_subsequence};
pub use numeric::{normalize_numbers, pad_digits};
pub use render::JsonFormat;
pub use sanitize::{sanitize, SanitizeOptions, SanitizePreset, SanitizeStage, Sanitizer};
pub use segment::{
    segment, segment_with_max_len, ProtectedSpan, SegmentOptions, SegmentStats, Segmenter,
    DEFAULT_MAX_LEN,
};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Sanitize raw bytes, which must be UTF-8 text.
///
/// # Example
///
/// ```
/// use sentclean::{sanitize_bytes, Error};
///
/// assert_eq!(sanitize_bytes("a b".as_bytes()).unwrap(), "ab");
/// assert!(matches!(sanitize_bytes(&[0xff, 0xfe]), Err(Error::InvalidInput(_))));
/// ```
pub fn sanitize_bytes(content: &[u8]) -> Result<String> {
    let text = std::str::from_utf8(content)?;
    Ok(sanitize(text))
}

/// Segment raw bytes, which must be UTF-8 text.
pub fn segment_bytes(content: &[u8]) -> Result<Vec<String>> {
    let text = std::str::from_utf8(content)?;
    Ok(segment(text))
}

/// Sanitize and segment `content` with default options.
///
/// # Example
///
/// ```
/// let processed = sentclean::process("第一句。 第二句！<br>").unwrap();
/// assert_eq!(processed.sanitized, "第一句。第二句！");
/// assert_eq!(processed.sentences, vec!["第一句。", "第二句！"]);
/// ```
pub fn process(content: &str) -> Result<Processed> {
    Sentclean::new().process(content)
}

/// Sanitize and segment many documents. Results keep input order.
pub fn process_batch<S: AsRef<str> + Sync>(documents: &[S]) -> Result<Vec<Processed>> {
    Sentclean::new().process_batch(documents)
}

/// Builder for the sanitize → segment chain.
///
/// # Example
///
/// ```
/// use sentclean::{Sentclean, SanitizePreset};
///
/// let processed = Sentclean::new()
///     .with_preset(SanitizePreset::Standard)
///     .with_max_len(80)
///     .process("访问 http://example.com/a 了解详情。谢谢！")?;
/// assert_eq!(processed.sentences, vec!["访问了解详情。", "谢谢！"]);
/// # Ok::<(), sentclean::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Sentclean {
    sanitize_options: SanitizeOptions,
    segment_options: SegmentOptions,
    skip_sanitize: bool,
    parallel: bool,
}

impl Sentclean {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            sanitize_options: SanitizeOptions::default(),
            segment_options: SegmentOptions::default(),
            skip_sanitize: false,
            parallel: true,
        }
    }

    /// Set sanitize preset.
    pub fn with_preset(mut self, preset: SanitizePreset) -> Self {
        self.sanitize_options = SanitizeOptions::from_preset(preset);
        self
    }

    /// Set sanitize options.
    pub fn with_sanitize_options(mut self, options: SanitizeOptions) -> Self {
        self.sanitize_options = options;
        self
    }

    /// Set segment options.
    pub fn with_segment_options(mut self, options: SegmentOptions) -> Self {
        self.segment_options = options;
        self
    }

    /// Set the maximum sentence length.
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.segment_options.max_len = max_len;
        self
    }

    /// Segment the raw text without sanitizing it first.
    pub fn raw(mut self) -> Self {
        self.skip_sanitize = true;
        self
    }

    /// Enable or disable parallel batch processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel batch processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Sanitize (unless raw) and segment one document.
    pub fn process(&self, content: &str) -> Result<Processed> {
        let segmenter = Segmenter::new(self.segment_options.clone())?;
        Ok(self.run(&self.sanitizer(), &segmenter, content))
    }

    /// Process one document given as UTF-8 bytes.
    pub fn process_bytes(&self, content: &[u8]) -> Result<Processed> {
        self.process(std::str::from_utf8(content)?)
    }

    /// Process independent documents, in parallel unless disabled.
    pub fn process_batch<S: AsRef<str> + Sync>(&self, documents: &[S]) -> Result<Vec<Processed>> {
        let segmenter = Segmenter::new(self.segment_options.clone())?;
        let sanitizer = self.sanitizer();

        let results: Vec<Processed> = if self.parallel {
            documents
                .par_iter()
                .map(|doc| self.run(&sanitizer, &segmenter, doc.as_ref()))
                .collect()
        } else {
            documents
                .iter()
                .map(|doc| self.run(&sanitizer, &segmenter, doc.as_ref()))
                .collect()
        };

        log::debug!(
            "processed batch of {} documents ({})",
            results.len(),
            if self.parallel { "parallel" } else { "sequential" }
        );
        Ok(results)
    }

    fn sanitizer(&self) -> Sanitizer {
        Sanitizer::new(self.sanitize_options.clone())
    }

    fn run(&self, sanitizer: &Sanitizer, segmenter: &Segmenter, content: &str) -> Processed {
        let sanitized = if self.skip_sanitize {
            content.to_string()
        } else {
            sanitizer.process(content)
        };
        let (sentences, stats) = segmenter.segment_with_stats(&sanitized);
        Processed {
            sanitized,
            sentences,
            stats,
        }
    }
}

impl Default for Sentclean {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of processing one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Processed {
    /// The sanitized text (the input itself when sanitizing was skipped)
    pub sanitized: String,

    /// Sentences in document order
    pub sentences: Vec<String>,

    /// Segmentation statistics
    pub stats: SegmentStats,
}

impl Processed {
    /// Number of sentences.
    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    /// Whether no sentences were produced.
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}
