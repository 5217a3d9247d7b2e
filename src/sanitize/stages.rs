//! Individual sanitizer stages.
//!
//! Every stage is a pure `&str -> String` transform. [`SanitizeStage`] names
//! them so a [`Sanitizer`](super::Sanitizer) can run them in a fixed order.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use unicode_normalization::UnicodeNormalization;

use crate::numeric::normalize_numbers;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<.*?>").expect("valid tag pattern"));

static ANNOTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"【.*?】").expect("valid annotation pattern"));

static EMAIL_STRICT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-z0-9_.\-]+@[\da-z.\-]+\.[a-z.]{2,6}").expect("valid email pattern")
});

// Accepts one-letter top-level labels such as `a@b.c`
static EMAIL_LOOSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-z\d]+(?:\.[a-z\d]+)*@(?:[\da-z](?:-[\da-z])?)+(?:\.{1,2}[a-z]+)+")
        .expect("valid email pattern")
});

// The path tail is ASCII only so it never eats the CJK text that follows
static URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:https?://)?[\da-z.\-]+\.[a-z.]{2,6}[/0-9A-Za-z_.\-?=&%#~+:]*")
        .expect("valid url pattern")
});

// Whole digit runs, so range checks see complete octets
static IPV4: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9]+(?:\.[0-9]+){3}").expect("valid ipv4 pattern")
});

/// A named step of the sanitizer pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SanitizeStage {
    /// Unicode NFC normalization
    NormalizeUnicode,
    /// Drop Private Use Area characters
    RemovePua,
    /// Drop U+FFFD replacement characters
    RemoveReplacementChar,
    /// Collapse digit-grouping commas (`1,000` → `1000`)
    NormalizeNumbers,
    /// Remove `<...>` markup tags
    StripTags,
    /// Remove `【...】` annotations
    StripAnnotations,
    /// Remove email addresses
    StripEmails,
    /// Remove URLs
    StripUrls,
    /// Remove IPv4 addresses
    StripIpAddresses,
    /// Trim the text and delete inner whitespace
    StripWhitespace,
}

impl SanitizeStage {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            SanitizeStage::NormalizeUnicode => "normalize_unicode",
            SanitizeStage::RemovePua => "remove_pua",
            SanitizeStage::RemoveReplacementChar => "remove_replacement_char",
            SanitizeStage::NormalizeNumbers => "normalize_numbers",
            SanitizeStage::StripTags => "strip_tags",
            SanitizeStage::StripAnnotations => "strip_annotations",
            SanitizeStage::StripEmails => "strip_emails",
            SanitizeStage::StripUrls => "strip_urls",
            SanitizeStage::StripIpAddresses => "strip_ip_addresses",
            SanitizeStage::StripWhitespace => "strip_whitespace",
        }
    }

    /// Run this stage on `text`.
    pub fn apply(&self, text: &str) -> String {
        match self {
            SanitizeStage::NormalizeUnicode => text.nfc().collect(),
            SanitizeStage::RemovePua => remove_pua(text),
            SanitizeStage::RemoveReplacementChar => text.replace('\u{FFFD}', ""),
            SanitizeStage::NormalizeNumbers => normalize_numbers(text),
            SanitizeStage::StripTags => strip_tags(text),
            SanitizeStage::StripAnnotations => strip_annotations(text),
            SanitizeStage::StripEmails => strip_emails(text),
            SanitizeStage::StripUrls => strip_urls(text),
            SanitizeStage::StripIpAddresses => strip_ip_addresses(text),
            SanitizeStage::StripWhitespace => strip_whitespace(text),
        }
    }
}

/// Remove every minimal `<...>` span.
pub fn strip_tags(text: &str) -> String {
    TAG.replace_all(text, "").into_owned()
}

/// Remove every minimal `【...】` span.
pub fn strip_annotations(text: &str) -> String {
    ANNOTATION.replace_all(text, "").into_owned()
}

/// Remove email addresses. Both patterns always run.
pub fn strip_emails(text: &str) -> String {
    let text = EMAIL_STRICT.replace_all(text, "");
    EMAIL_LOOSE.replace_all(&text, "").into_owned()
}

/// Remove URLs with an optional scheme and path/query tail.
pub fn strip_urls(text: &str) -> String {
    URL.replace_all(text, "").into_owned()
}

/// Remove dotted-quad IPv4 addresses (octets 0-255).
///
/// Dotted numbers with an out-of-range octet are left untouched.
pub fn strip_ip_addresses(text: &str) -> String {
    IPV4.replace_all(text, |caps: &Captures| {
        let candidate = &caps[0];
        if candidate.split('.').all(is_octet) {
            String::new()
        } else {
            candidate.to_string()
        }
    })
    .into_owned()
}

fn is_octet(part: &str) -> bool {
    part.len() <= 3 && part.parse::<u16>().is_ok_and(|n| n <= 255)
}

/// Trim the edges, then delete tabs, spaces, CR, LF, U+3000 and U+00A0 everywhere.
pub fn strip_whitespace(text: &str) -> String {
    text.trim()
        .chars()
        .filter(|c| !matches!(c, '\t' | ' ' | '\r' | '\n' | '\u{3000}' | '\u{00A0}'))
        .collect()
}

fn remove_pua(text: &str) -> String {
    text.chars()
        .filter(|c| {
            let code = *c as u32;
            !(0xE000..=0xF8FF).contains(&code)
                && !(0xF0000..=0xFFFFD).contains(&code)
                && !(0x100000..=0x10FFFD).contains(&code)
        })
        .collect()
}
