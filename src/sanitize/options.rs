//! Sanitizer options and presets.

use serde::{Deserialize, Serialize};

use super::SanitizeStage;

/// Sanitize preset levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SanitizePreset {
    /// Numeric normalization and whitespace stripping only
    Minimal,
    /// Markup, annotation, email, URL and IP removal plus whitespace stripping
    #[default]
    Standard,
    /// Standard plus Unicode NFC and removal of PUA / replacement characters
    Aggressive,
}

/// Options for text sanitization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SanitizeOptions {
    /// Normalize Unicode to NFC form
    pub normalize_unicode: bool,

    /// Remove Private Use Area (PUA) characters
    pub remove_pua: bool,

    /// Remove Unicode replacement character (U+FFFD)
    pub remove_replacement_char: bool,

    /// Collapse digit-grouping commas (1,000 → 1000)
    pub normalize_numbers: bool,

    /// Remove `<...>` tags
    pub strip_tags: bool,

    /// Remove `【...】` annotations
    pub strip_annotations: bool,

    /// Remove email addresses
    pub strip_emails: bool,

    /// Remove URLs
    pub strip_urls: bool,

    /// Remove IPv4 addresses
    pub strip_ip_addresses: bool,

    /// Trim and remove whitespace / line breaks
    pub strip_whitespace: bool,
}

impl SanitizeOptions {
    /// Create options from a preset.
    pub fn from_preset(preset: SanitizePreset) -> Self {
        match preset {
            SanitizePreset::Minimal => Self::minimal(),
            SanitizePreset::Standard => Self::standard(),
            SanitizePreset::Aggressive => Self::aggressive(),
        }
    }

    /// Minimal sanitize options.
    pub fn minimal() -> Self {
        Self {
            normalize_unicode: false,
            remove_pua: false,
            remove_replacement_char: false,
            normalize_numbers: true,
            strip_tags: false,
            strip_annotations: false,
            strip_emails: false,
            strip_urls: false,
            strip_ip_addresses: false,
            strip_whitespace: true,
        }
    }

    /// Standard sanitize options.
    pub fn standard() -> Self {
        Self {
            normalize_unicode: false,
            remove_pua: false,
            remove_replacement_char: false,
            normalize_numbers: true,
            strip_tags: true,
            strip_annotations: true,
            strip_emails: true,
            strip_urls: true,
            strip_ip_addresses: true,
            strip_whitespace: true,
        }
    }

    /// Aggressive sanitize options.
    pub fn aggressive() -> Self {
        Self {
            normalize_unicode: true,
            remove_pua: true,
            remove_replacement_char: true,
            ..Self::standard()
        }
    }

    /// The enabled stages, in the order they run.
    ///
    /// Tags are stripped before PII, so an address inside a tag attribute goes
    /// with the tag.
    pub fn stages(&self) -> Vec<SanitizeStage> {
        [
            (self.normalize_unicode, SanitizeStage::NormalizeUnicode),
            (self.remove_pua, SanitizeStage::RemovePua),
            (self.remove_replacement_char, SanitizeStage::RemoveReplacementChar),
            (self.normalize_numbers, SanitizeStage::NormalizeNumbers),
            (self.strip_tags, SanitizeStage::StripTags),
            (self.strip_annotations, SanitizeStage::StripAnnotations),
            (self.strip_emails, SanitizeStage::StripEmails),
            (self.strip_urls, SanitizeStage::StripUrls),
            (self.strip_ip_addresses, SanitizeStage::StripIpAddresses),
            (self.strip_whitespace, SanitizeStage::StripWhitespace),
        ]
        .into_iter()
        .filter_map(|(enabled, stage)| enabled.then_some(stage))
        .collect()
    }
}

impl Default for SanitizeOptions {
    fn default() -> Self {
        Self::standard()
    }
}
