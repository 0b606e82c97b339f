#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

use crate::word_diff::{WordSpan, word_diff};
use crate::{ChangeKind, sequence};

/// One row of a line-level diff.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineChange {
    pub kind: ChangeKind,
    /// Line content without its terminator.
    pub text: String,
    /// 1-based position in the old text; present for Unchanged and Removed.
    pub old_line: Option<usize>,
    /// 1-based position in the new text; present for Unchanged and Added.
    pub new_line: Option<usize>,
    /// Word-level detail, present on both members of a replacement pair and
    /// identical between them.
    pub word_diff: Option<Vec<WordSpan>>,
}

impl LineChange {
    fn new(kind: ChangeKind, text: &str, old_line: Option<usize>, new_line: Option<usize>) -> Self {
        Self {
            kind,
            text: text.to_owned(),
            old_line,
            new_line,
            word_diff: None,
        }
    }
}

/// Compare two texts line by line.
///
/// Lines come from a plain `'\n'` split, so a trailing newline contributes a
/// final empty line and the empty string counts as one empty line. Identical
/// inputs produce an all-Unchanged script; there is no failure mode.
#[must_use]
pub fn line_diff(old: &str, new: &str) -> Vec<LineChange> {
    let old_lines: Vec<&str> = old.split('\n').collect();
    let new_lines: Vec<&str> = new.split('\n').collect();

    let mut entries = Vec::with_capacity(old_lines.len().max(new_lines.len()));
    let mut old_no = 1usize;
    let mut new_no = 1usize;
    let mut pos = 0usize;

    for region in sequence::changed_regions(&old_lines, &new_lines) {
        for line in &old_lines[pos..region.old.start] {
            entries.push(LineChange::new(
                ChangeKind::Unchanged,
                line,
                Some(old_no),
                Some(new_no),
            ));
            old_no += 1;
            new_no += 1;
        }
        for line in &old_lines[region.old.clone()] {
            entries.push(LineChange::new(ChangeKind::Removed, line, Some(old_no), None));
            old_no += 1;
        }
        for line in &new_lines[region.new.clone()] {
            entries.push(LineChange::new(ChangeKind::Added, line, None, Some(new_no)));
            new_no += 1;
        }
        pos = region.old.end;
    }
    for line in &old_lines[pos..] {
        entries.push(LineChange::new(
            ChangeKind::Unchanged,
            line,
            Some(old_no),
            Some(new_no),
        ));
        old_no += 1;
        new_no += 1;
    }

    pair_replacements(&mut entries);
    entries
}

/// Attach word-level detail to each adjacent removed/added run, pairing lines
/// positionally: first removed with first added, one pair per index. Leftover
/// lines of the longer run keep `word_diff: None`. Pairing is strictly
/// positional, not similarity-based; changing that would change observable
/// output.
fn pair_replacements(entries: &mut [LineChange]) {
    let mut idx = 0usize;
    while idx < entries.len() {
        if entries[idx].kind != ChangeKind::Removed {
            idx += 1;
            continue;
        }
        let removed_start = idx;
        while idx < entries.len() && entries[idx].kind == ChangeKind::Removed {
            idx += 1;
        }
        let added_start = idx;
        while idx < entries.len() && entries[idx].kind == ChangeKind::Added {
            idx += 1;
        }

        let pairs = (added_start - removed_start).min(idx - added_start);
        for offset in 0..pairs {
            let detail = word_diff(
                entries[removed_start + offset].text.as_str(),
                entries[added_start + offset].text.as_str(),
            );
            entries[removed_start + offset].word_diff = Some(detail.clone());
            entries[added_start + offset].word_diff = Some(detail);
        }
    }
}
