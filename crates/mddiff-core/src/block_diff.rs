#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

use crate::blocks::split_blocks;
use crate::{ChangeKind, sequence};

/// One element of a block-level diff.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockChange {
    pub kind: ChangeKind,
    /// The full block text, exactly as the splitter produced it.
    pub block: String,
}

/// The result of comparing two Markdown documents block by block.
///
/// Equal inputs short-circuit to [`BlockDiffOutcome::Identical`] without
/// splitting anything; the distinct shape is part of the contract, so
/// consumers can render a dedicated no-changes state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockDiffOutcome {
    Identical,
    Changed(Vec<BlockChange>),
}

/// Compare two Markdown documents as sequences of atomic blocks.
///
/// Blocks are matched by exact string equality, so a table, fence, or list is
/// always added or removed as a whole.
#[must_use]
pub fn block_diff(old: &str, new: &str) -> BlockDiffOutcome {
    if old == new {
        return BlockDiffOutcome::Identical;
    }

    let old_blocks = split_blocks(old);
    let new_blocks = split_blocks(new);
    let old_refs: Vec<&str> = old_blocks.iter().map(String::as_str).collect();
    let new_refs: Vec<&str> = new_blocks.iter().map(String::as_str).collect();

    let mut entries = Vec::with_capacity(old_blocks.len().max(new_blocks.len()));
    let mut pos = 0usize;
    for region in sequence::changed_regions(&old_refs, &new_refs) {
        push_entries(&mut entries, ChangeKind::Unchanged, &old_blocks[pos..region.old.start]);
        push_entries(&mut entries, ChangeKind::Removed, &old_blocks[region.old.clone()]);
        push_entries(&mut entries, ChangeKind::Added, &new_blocks[region.new.clone()]);
        pos = region.old.end;
    }
    push_entries(&mut entries, ChangeKind::Unchanged, &old_blocks[pos..]);

    BlockDiffOutcome::Changed(entries)
}

fn push_entries(entries: &mut Vec<BlockChange>, kind: ChangeKind, blocks: &[String]) {
    for block in blocks {
        entries.push(BlockChange {
            kind,
            block: block.clone(),
        });
    }
}
