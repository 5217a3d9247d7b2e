//! Protection of quoted and bracketed spans.
//!
//! Instead of swapping spans for a placeholder string, the text is turned into
//! a token list where each protected span is a single [`Token::Span`] that
//! points back at its [`ProtectedSpan`] record. Nothing in the input can
//! collide with the bookkeeping.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

static PROTECTED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"“.+?”|（.+?）|《.+?》|〈.+?〉|【.+?】|‘.+?’|「.+?」|『.+?』|".+?"|'.+?'"#)
        .expect("valid protected span pattern")
});

/// Opening marks of quoted speech, as opposed to titles and asides.
const QUOTE_OPENERS: &[char] = &['“', '‘', '「', '『', '"', '\''];

/// A quoted or bracketed span kept whole during segmentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtectedSpan {
    /// Char offset of the opening delimiter in the source text
    pub start: usize,
    /// Original text, delimiters included
    pub text: String,
}

impl ProtectedSpan {
    /// Length in chars, delimiters included.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Last char before the closing delimiter.
    pub fn last_inner_char(&self) -> Option<char> {
        let chars: Vec<char> = self.text.chars().collect();
        // A two-char span has no inner text
        if chars.len() < 3 {
            return None;
        }
        Some(chars[chars.len() - 2])
    }

    /// Whether this span is quoted speech rather than a title or aside.
    pub fn is_quotation(&self) -> bool {
        self.text
            .chars()
            .next()
            .is_some_and(|c| QUOTE_OPENERS.contains(&c))
    }
}

/// One unit of the segmentation input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// An ordinary character
    Char(char),
    /// A protected span, by index into [`TokenizedText::spans`]
    Span(usize),
}

/// Text split into chars and atomic protected spans.
#[derive(Debug, Clone, Default)]
pub struct TokenizedText {
    tokens: Vec<Token>,
    spans: Vec<ProtectedSpan>,
}

impl TokenizedText {
    /// Tokenize without protecting anything.
    pub fn plain(content: &str) -> Self {
        Self {
            tokens: content.chars().map(Token::Char).collect(),
            spans: Vec::new(),
        }
    }

    /// Tokens in document order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Protected spans in document order.
    pub fn spans(&self) -> &[ProtectedSpan] {
        &self.spans
    }

    /// Rebuild the text covered by `range`, substituting spans back by index.
    pub fn render(&self, range: Range<usize>) -> String {
        let mut out = String::new();
        for token in &self.tokens[range] {
            match token {
                Token::Char(c) => out.push(*c),
                Token::Span(index) => out.push_str(&self.spans[*index].text),
            }
        }
        out
    }
}

/// Tokenize `content`, turning every non-overlapping quoted or bracketed span
/// into a single token.
///
/// Unterminated delimiters are not an error; they simply stay ordinary chars.
pub fn protect(content: &str) -> TokenizedText {
    let mut tokens = Vec::with_capacity(content.len());
    let mut spans = Vec::new();
    let mut last_end = 0;
    let mut char_pos = 0;

    for m in PROTECTED.find_iter(content) {
        for c in content[last_end..m.start()].chars() {
            tokens.push(Token::Char(c));
            char_pos += 1;
        }

        let span = ProtectedSpan {
            start: char_pos,
            text: m.as_str().to_string(),
        };
        char_pos += span.char_len();
        tokens.push(Token::Span(spans.len()));
        spans.push(span);
        last_end = m.end();
    }

    tokens.extend(content[last_end..].chars().map(Token::Char));

    log::trace!("protected {} spans", spans.len());
    TokenizedText { tokens, spans }
}
