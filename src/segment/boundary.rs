//! Sentence boundary detection over protected token lists.

use std::ops::Range;

use super::protect::{Token, TokenizedText};

/// Clause punctuation that keeps a closing quote attached to what follows.
const CONTINUATION: &[char] = &['，', '、', '；', '：', ',', ';', ':'];

/// Split `text` into sentence token ranges.
///
/// A boundary sits between two tokens when the left one ends a sentence and
/// the right one is not itself a terminal mark, so runs like `！！！` stay
/// together. A quoted-speech span ends a sentence when its inner text ends with
/// a terminal mark and it is not followed by clause punctuation. Titles and
/// bracketed asides never end a sentence. Boundaries never
/// fall inside a span. The ranges cover every token exactly once, in order.
pub(crate) fn sentence_ranges(text: &TokenizedText, terminals: &[char]) -> Vec<Range<usize>> {
    let tokens = text.tokens();
    let mut ranges = Vec::new();
    if tokens.is_empty() {
        return ranges;
    }

    let is_terminal = |token: &Token| matches!(token, Token::Char(c) if terminals.contains(c));

    let mut start = 0;
    for i in 1..tokens.len() {
        let next = &tokens[i];
        let boundary = match tokens[i - 1] {
            Token::Char(c) => terminals.contains(&c) && !is_terminal(next),
            Token::Span(index) => {
                let span = &text.spans()[index];
                let closes = span.is_quotation()
                    && span
                        .last_inner_char()
                        .is_some_and(|c| terminals.contains(&c));
                let continues = matches!(next, Token::Char(c) if CONTINUATION.contains(c));
                closes && !is_terminal(next) && !continues
            }
        };

        if boundary {
            ranges.push(start..i);
            start = i;
        }
    }
    ranges.push(start..tokens.len());

    ranges
}
