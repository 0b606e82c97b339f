#![forbid(unsafe_code)]

use std::ops::Range;

use imara_diff::{Algorithm, Diff, InternedInput};

/// One changed region between two token sequences: the old-side tokens in
/// `old` were replaced by the new-side tokens in `new`. Either range may be
/// empty (pure insertion or deletion).
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Replacement {
    pub(crate) old: Range<usize>,
    pub(crate) new: Range<usize>,
}

/// Ordered changed regions between `old` and `new`, comparing tokens by exact
/// equality. Tokens outside every returned region are common to both sides.
///
/// The line, word, and block engines all funnel through here so they share
/// one diff algorithm.
pub(crate) fn changed_regions(old: &[&str], new: &[&str]) -> Vec<Replacement> {
    let mut input = InternedInput::default();
    input.update_before(old.iter().copied());
    input.update_after(new.iter().copied());

    let mut diff = Diff::compute(Algorithm::Histogram, &input);
    diff.postprocess_lines(&input);

    diff.hunks()
        .map(|hunk| Replacement {
            old: hunk.before.start as usize..hunk.before.end as usize,
            new: hunk.after.start as usize..hunk.after.end as usize,
        })
        .collect()
}
