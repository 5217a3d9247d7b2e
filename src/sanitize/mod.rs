//! Text sanitization: numeric normalization plus removal of markup, PII and whitespace.
//!
//! The pipeline is an ordered list of [`SanitizeStage`]s chosen by
//! [`SanitizeOptions`]. The standard pipeline runs:
//!
//! 1. digit-grouping comma removal (`1,000` → `1000`)
//! 2. `<...>` tag removal
//! 3. `【...】` annotation removal
//! 4. email removal (two patterns)
//! 5. URL removal
//! 6. IPv4 removal
//! 7. whitespace stripping

mod options;
pub mod stages;

pub use options::{SanitizeOptions, SanitizePreset};
pub use stages::SanitizeStage;

/// Text sanitize pipeline.
#[derive(Debug, Clone)]
pub struct Sanitizer {
    options: SanitizeOptions,
    stages: Vec<SanitizeStage>,
}

impl Sanitizer {
    /// Create a new sanitizer with the given options.
    pub fn new(options: SanitizeOptions) -> Self {
        let stages = options.stages();
        Self { options, stages }
    }

    /// Create a sanitizer from a preset.
    pub fn from_preset(preset: SanitizePreset) -> Self {
        Self::new(SanitizeOptions::from_preset(preset))
    }

    /// Options this sanitizer was built with.
    pub fn options(&self) -> &SanitizeOptions {
        &self.options
    }

    /// Stages that will run, in order.
    pub fn stages(&self) -> &[SanitizeStage] {
        &self.stages
    }

    /// Run `content` through every enabled stage.
    pub fn process(&self, content: &str) -> String {
        if content.is_empty() {
            return String::new();
        }

        let mut result = content.to_string();
        let tracing = log::log_enabled!(log::Level::Trace);
        for stage in &self.stages {
            if !tracing {
                result = stage.apply(&result);
                continue;
            }
            let before = result.chars().count();
            result = stage.apply(&result);
            log::trace!(
                "sanitize stage {}: {} -> {} chars",
                stage.name(),
                before,
                result.chars().count()
            );
        }

        log::debug!(
            "sanitized {} bytes into {} bytes ({} stages)",
            content.len(),
            result.len(),
            self.stages.len()
        );
        result
    }
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::new(SanitizeOptions::default())
    }
}

/// Sanitize `content` with the standard pipeline.
///
/// # Example
///
/// ```
/// let clean = sentclean::sanitize("联系 a.b@example.com 获取<b>1,000</b>元");
/// assert_eq!(clean, "联系获取1000元");
/// ```
pub fn sanitize(content: &str) -> String {
    Sanitizer::default().process(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_noop() {
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn test_markup_before_pii() {
        // The address lives inside the tag and goes away with it
        let text = r#"<a href="mailto:x@y.com">联系我们</a>"#;
        assert_eq!(sanitize(text), "联系我们");
    }

    #[test]
    fn test_numbers_normalized_before_ip_match() {
        let text = "共1,234人访问10.0.0.1";
        assert_eq!(sanitize(text), "共1234人访问");
    }

    #[test]
    fn test_minimal_keeps_urls() {
        let sanitizer = Sanitizer::from_preset(SanitizePreset::Minimal);
        let result = sanitizer.process("访问 www.example.com 了解 1,000 项");
        assert_eq!(result, "访问www.example.com了解1000项");
    }

    #[test]
    fn test_aggressive_removes_replacement_char() {
        let sanitizer = Sanitizer::from_preset(SanitizePreset::Aggressive);
        assert_eq!(sanitizer.process("文本\u{FFFD}内容"), "文本内容");
    }

    #[test]
    fn test_untraced_run_applies_every_stage() {
        // No logger is installed in unit tests
        assert!(!log::log_enabled!(log::Level::Trace));

        let sanitizer = Sanitizer::from_preset(SanitizePreset::Aggressive);
        let text = "<b>邮箱</b> a@b.c，共1,000\u{E000}人";
        let expected = sanitizer
            .stages()
            .iter()
            .fold(text.to_string(), |acc, stage| stage.apply(&acc));
        assert_eq!(sanitizer.process(text), expected);
        assert_eq!(expected, "邮箱，共1000人");
    }

    #[test]
    fn test_custom_options() {
        let options = SanitizeOptions {
            strip_whitespace: false,
            ..SanitizeOptions::standard()
        };
        let sanitizer = Sanitizer::new(options);
        assert_eq!(sanitizer.process("a <b>c</b>"), "a c");
        assert_eq!(sanitizer.stages().len(), 6);
    }
}
