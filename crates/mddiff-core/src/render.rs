#![forbid(unsafe_code)]

//! Textual and HTML views over diff results. Thin templating only; the
//! engines stay pure and these consumers never reorder their output.

use std::fmt::Write as _;

use crate::ChangeKind;
use crate::block_diff::{BlockChange, BlockDiffOutcome};
use crate::line_diff::LineChange;
use crate::markdown;

/// Sentinel container emitted when the two documents are identical.
pub const NO_CHANGES_HTML: &str = "<div class=\"diff-no-changes\"></div>\n";

/// Render a line diff as a single-column view with ` `/`-`/`+` prefixes and
/// both line-number gutters.
#[must_use]
pub fn unified(entries: &[LineChange]) -> String {
    let mut out = String::new();
    for entry in entries {
        let prefix = match entry.kind {
            ChangeKind::Unchanged => ' ',
            ChangeKind::Removed => '-',
            ChangeKind::Added => '+',
        };
        let row = format!(
            "{} {} {prefix} {}",
            number_cell(entry.old_line),
            number_cell(entry.new_line),
            entry.text
        );
        out.push_str(row.trim_end());
        out.push('\n');
    }
    out
}

/// Render a line diff as two blank-padded columns: old text on the left, new
/// on the right, with a change marker between them.
#[must_use]
pub fn side_by_side(entries: &[LineChange]) -> String {
    let width = entries
        .iter()
        .filter(|e| e.kind != ChangeKind::Added)
        .map(|e| e.text.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for entry in entries {
        let (marker, left, right) = match entry.kind {
            ChangeKind::Unchanged => (' ', entry.text.as_str(), entry.text.as_str()),
            ChangeKind::Removed => ('<', entry.text.as_str(), ""),
            ChangeKind::Added => ('>', "", entry.text.as_str()),
        };
        let row = format!(
            "{} {left:<width$} {marker} {} {right}",
            number_cell(entry.old_line),
            number_cell(entry.new_line),
        );
        out.push_str(row.trim_end());
        out.push('\n');
    }
    out
}

/// Render a block diff as one kind-tagged HTML container per block, in diff
/// order.
#[must_use]
pub fn block_html(outcome: &BlockDiffOutcome) -> String {
    let BlockDiffOutcome::Changed(entries) = outcome else {
        return NO_CHANGES_HTML.to_owned();
    };

    let mut out = String::new();
    for entry in entries {
        push_container(&mut out, entry);
    }
    out
}

/// Like [`block_html`], but an adjacent removed-run/added-run is interleaved
/// pairwise by index for a this-became-that grouping. A run with no opposite
/// side renders sequentially, and leftovers of the longer run follow their
/// pair partners.
#[must_use]
pub fn block_html_paired(outcome: &BlockDiffOutcome) -> String {
    let BlockDiffOutcome::Changed(entries) = outcome else {
        return NO_CHANGES_HTML.to_owned();
    };

    let mut out = String::new();
    let mut idx = 0usize;
    while idx < entries.len() {
        if entries[idx].kind != ChangeKind::Removed {
            push_container(&mut out, &entries[idx]);
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

        let removed = &entries[removed_start..added_start];
        let added = &entries[added_start..idx];
        for offset in 0..removed.len().max(added.len()) {
            if let Some(entry) = removed.get(offset) {
                push_container(&mut out, entry);
            }
            if let Some(entry) = added.get(offset) {
                push_container(&mut out, entry);
            }
        }
    }
    out
}

fn push_container(out: &mut String, entry: &BlockChange) {
    let _ = writeln!(out, "<div class=\"{}\">", kind_class(entry.kind));
    out.push_str(&markdown::to_html(&entry.block));
    out.push_str("</div>\n");
}

const fn kind_class(kind: ChangeKind) -> &'static str {
    match kind {
        ChangeKind::Unchanged => "diff-unchanged",
        ChangeKind::Added => "diff-added",
        ChangeKind::Removed => "diff-removed",
    }
}

fn number_cell(number: Option<usize>) -> String {
    number.map_or_else(|| " ".repeat(4), |n| format!("{n:>4}"))
}
