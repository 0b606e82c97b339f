#![forbid(unsafe_code)]

//! Diff core for `mddiff`: line diffs with word-level detail, Markdown-aware
//! block diffs, and the textual/HTML views built on them.
//!
//! Everything in here is a pure function over two in-memory strings. There is
//! no I/O, no shared state, and no failure mode: any pair of inputs, empty
//! strings included, produces a well-defined result.

pub mod block_diff;
pub mod blocks;
mod fence;
pub mod line_diff;
pub mod markdown;
pub mod render;
mod sequence;
pub mod word_diff;

use serde::{Deserialize, Serialize};

/// Classification shared by every diff granularity (lines, words, blocks).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Unchanged,
    Added,
    Removed,
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use crate::block_diff::{BlockDiffOutcome, block_diff};
    use crate::line_diff::line_diff;
    use crate::{ChangeKind, word_diff};

    #[test]
    fn line_replacement_end_to_end() {
        let entries = line_diff("line1\nline2\nline3", "line1\nlineTWO\nline3");

        let summary: Vec<(ChangeKind, &str, Option<usize>, Option<usize>)> = entries
            .iter()
            .map(|e| (e.kind, e.text.as_str(), e.old_line, e.new_line))
            .collect();
        assert_eq!(
            summary,
            [
                (ChangeKind::Unchanged, "line1", Some(1), Some(1)),
                (ChangeKind::Removed, "line2", Some(2), None),
                (ChangeKind::Added, "lineTWO", None, Some(2)),
                (ChangeKind::Unchanged, "line3", Some(3), Some(3)),
            ]
        );

        let detail = entries[1].word_diff.as_deref();
        assert!(detail.is_some(), "replacement pair should carry word detail");
        assert_eq!(entries[2].word_diff.as_deref(), detail);

        let spans = detail.unwrap_or_default();
        let unchanged: String = spans
            .iter()
            .filter(|s| s.kind == ChangeKind::Unchanged)
            .map(|s| s.text.as_str())
            .collect();
        assert_eq!(unchanged, "line");
        assert!(
            spans
                .iter()
                .any(|s| s.kind == ChangeKind::Removed && s.text == "2")
        );
        assert!(
            spans
                .iter()
                .any(|s| s.kind == ChangeKind::Added && s.text == "TWO")
        );
    }

    #[test]
    fn block_addition_end_to_end() {
        let outcome = block_diff("# Title\n\nBody text.", "# Title\n\nBody text.\n\nMore.");

        let BlockDiffOutcome::Changed(entries) = outcome else {
            panic!("expected changes");
        };
        let summary: Vec<(ChangeKind, &str)> =
            entries.iter().map(|e| (e.kind, e.block.as_str())).collect();
        assert_eq!(
            summary,
            [
                (ChangeKind::Unchanged, "# Title"),
                (ChangeKind::Unchanged, "Body text."),
                (ChangeKind::Added, "More."),
            ]
        );
    }

    #[test]
    fn word_diff_reconstructs_both_lines() {
        let spans = word_diff::word_diff("foo bar", "foo baz");
        assert!(!spans.is_empty());

        let old: String = spans
            .iter()
            .filter(|s| s.kind != ChangeKind::Added)
            .map(|s| s.text.as_str())
            .collect();
        let new: String = spans
            .iter()
            .filter(|s| s.kind != ChangeKind::Removed)
            .map(|s| s.text.as_str())
            .collect();
        assert_eq!(old, "foo bar");
        assert_eq!(new, "foo baz");
    }
}
