#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

use crate::{ChangeKind, sequence};

/// One token of a word-level comparison between two lines.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordSpan {
    pub kind: ChangeKind,
    pub text: String,
}

/// Compare two lines token by token.
///
/// Tokens are maximal runs of letters (and `_`), of digits, or of non-word
/// characters, with a further split at lower-to-upper case seams, so
/// punctuation and whitespace keep their own boundaries and a suffix edit
/// inside a word stays localized (`line2` diffs against `lineTWO` as an
/// unchanged `line` plus a changed tail). Spans tagged Unchanged or Removed
/// concatenate back to `old`; spans tagged Unchanged or Added concatenate
/// back to `new`.
#[must_use]
pub fn word_diff(old: &str, new: &str) -> Vec<WordSpan> {
    let old_tokens = tokenize(old);
    let new_tokens = tokenize(new);

    let mut spans = Vec::new();
    let mut pos = 0usize;
    for region in sequence::changed_regions(&old_tokens, &new_tokens) {
        push_spans(&mut spans, ChangeKind::Unchanged, &old_tokens[pos..region.old.start]);
        push_spans(&mut spans, ChangeKind::Removed, &old_tokens[region.old.clone()]);
        push_spans(&mut spans, ChangeKind::Added, &new_tokens[region.new.clone()]);
        pos = region.old.end;
    }
    push_spans(&mut spans, ChangeKind::Unchanged, &old_tokens[pos..]);

    spans
}

fn push_spans(spans: &mut Vec<WordSpan>, kind: ChangeKind, tokens: &[&str]) {
    for token in tokens {
        spans.push(WordSpan {
            kind,
            text: (*token).to_owned(),
        });
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TokenClass {
    Letter,
    Digit,
    Other,
}

fn class_of(ch: char) -> TokenClass {
    if ch.is_alphabetic() || ch == '_' {
        TokenClass::Letter
    } else if ch.is_numeric() {
        TokenClass::Digit
    } else {
        TokenClass::Other
    }
}

/// Token boundaries: class transitions, plus lower-to-upper seams inside a
/// letter run.
fn splits_at(prev: char, next: char) -> bool {
    if class_of(prev) != class_of(next) {
        return true;
    }
    class_of(next) == TokenClass::Letter && next.is_uppercase() && !prev.is_uppercase()
}

fn tokenize(line: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0usize;
    let mut prev: Option<char> = None;

    for (idx, ch) in line.char_indices() {
        if let Some(prev_ch) = prev
            && splits_at(prev_ch, ch)
        {
            tokens.push(&line[start..idx]);
            start = idx;
        }
        prev = Some(ch);
    }
    if start < line.len() {
        tokens.push(&line[start..]);
    }

    tokens
}
