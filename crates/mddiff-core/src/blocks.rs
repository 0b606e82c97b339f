#![forbid(unsafe_code)]

use crate::fence::FenceState;

/// What the currently accumulating block is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BlockKind {
    Fence,
    Table,
    Quote,
    List,
    Paragraph,
}

/// Split Markdown source into structurally atomic blocks.
///
/// Blank lines separate blocks and are not kept. A fenced code block runs
/// from its opener to its matching closer inclusive, blank body lines and
/// all; an unclosed fence runs to the end of the input. Contiguous table rows
/// (`|`), quote lines (`>`), and list items group into one block each, and
/// entering or leaving such a run is a boundary even without a blank line.
/// Everything else accumulates into paragraph blocks.
#[must_use]
pub fn split_blocks(text: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current = String::new();
    let mut kind: Option<BlockKind> = None;
    let mut fence: Option<FenceState> = None;

    for line in text.split('\n') {
        if let Some(open) = fence {
            push_line(&mut current, line);
            if open.closed_by(line) {
                fence = None;
                flush(&mut blocks, &mut current, &mut kind);
            }
            continue;
        }

        if line.trim().is_empty() {
            flush(&mut blocks, &mut current, &mut kind);
            continue;
        }

        if let Some(open) = FenceState::open(line) {
            flush(&mut blocks, &mut current, &mut kind);
            kind = Some(BlockKind::Fence);
            fence = Some(open);
            push_line(&mut current, line);
            continue;
        }

        let next = classify(line, kind);
        if kind != Some(next) {
            flush(&mut blocks, &mut current, &mut kind);
            kind = Some(next);
        }
        push_line(&mut current, line);
    }
    flush(&mut blocks, &mut current, &mut kind);

    blocks
}

fn classify(line: &str, current: Option<BlockKind>) -> BlockKind {
    if line.starts_with('|') {
        BlockKind::Table
    } else if line.starts_with('>') {
        BlockKind::Quote
    } else if is_list_marker(line) {
        BlockKind::List
    } else if current == Some(BlockKind::List) && is_list_continuation(line) {
        BlockKind::List
    } else {
        BlockKind::Paragraph
    }
}

fn flush(blocks: &mut Vec<String>, current: &mut String, kind: &mut Option<BlockKind>) {
    if kind.take().is_some() {
        blocks.push(std::mem::take(current));
    }
}

fn push_line(current: &mut String, line: &str) {
    if !current.is_empty() {
        current.push('\n');
    }
    current.push_str(line);
}

/// A bullet (`-`/`*`/`+`) or ordered (`1.`/`1)`) marker followed by
/// whitespace, at any indent.
fn is_list_marker(line: &str) -> bool {
    let trimmed = line.trim_start();
    if let Some(rest) = trimmed.strip_prefix(['-', '*', '+']) {
        return rest.starts_with([' ', '\t']);
    }

    let digits = trimmed.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return false;
    }
    match trimmed[digits..].strip_prefix(['.', ')']) {
        Some(rest) => rest.starts_with([' ', '\t']),
        None => false,
    }
}

/// Leading whitespace followed by content continues an open list item.
fn is_list_continuation(line: &str) -> bool {
    line.starts_with([' ', '\t']) && !line.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paragraphs_split_on_blank_lines() {
        let blocks = split_blocks("first paragraph\nstill first\n\nsecond");
        assert_eq!(blocks, ["first paragraph\nstill first", "second"]);
    }

    #[test]
    fn blank_line_runs_are_not_preserved() {
        let blocks = split_blocks("a\n\n\n\nb");
        assert_eq!(blocks, ["a", "b"]);
    }

    #[test]
    fn fence_keeps_blank_body_lines_together() {
        let blocks = split_blocks("```\na\n\nb\n```");
        assert_eq!(blocks, ["```\na\n\nb\n```"]);
    }

    #[test]
    fn fence_requires_matching_closer() {
        let blocks = split_blocks("````\ncode with ``` inside\n````\nafter");
        assert_eq!(blocks, ["````\ncode with ``` inside\n````", "after"]);
    }

    #[test]
    fn tilde_and_backtick_fences_are_distinct() {
        let blocks = split_blocks("~~~\n```\nstill code\n~~~");
        assert_eq!(blocks, ["~~~\n```\nstill code\n~~~"]);
    }

    #[test]
    fn unclosed_fence_runs_to_end_of_input() {
        let blocks = split_blocks("before\n\n```rust\nlet x = 1;\n\nlet y = 2;");
        assert_eq!(blocks, ["before", "```rust\nlet x = 1;\n\nlet y = 2;"]);
    }

    #[test]
    fn table_rows_group_into_one_block() {
        let blocks = split_blocks("para\n\n|a|b|\n|-|-|\n|1|2|\n\npara2");
        assert_eq!(blocks, ["para", "|a|b|\n|-|-|\n|1|2|", "para2"]);
    }

    #[test]
    fn table_boundary_needs_no_blank_line() {
        let blocks = split_blocks("text\n|a|b|\n|1|2|\nmore text");
        assert_eq!(blocks, ["text", "|a|b|\n|1|2|", "more text"]);
    }

    #[test]
    fn quote_lines_group_into_one_block() {
        let blocks = split_blocks("> one\n> two\nplain");
        assert_eq!(blocks, ["> one\n> two", "plain"]);
    }

    #[test]
    fn list_absorbs_markers_and_continuations() {
        let blocks = split_blocks("- first\n- second\n  continued\n  1. nested\nplain");
        assert_eq!(blocks, ["- first\n- second\n  continued\n  1. nested", "plain"]);
    }

    #[test]
    fn ordered_markers_start_lists() {
        let blocks = split_blocks("intro\n1. one\n2) two");
        assert_eq!(blocks, ["intro", "1. one\n2) two"]);
    }

    #[test]
    fn list_marker_requires_following_whitespace() {
        let blocks = split_blocks("-not a list\n*also not\n1.nope");
        assert_eq!(blocks, ["-not a list\n*also not\n1.nope"]);
    }

    #[test]
    fn empty_input_has_no_blocks() {
        assert_eq!(split_blocks(""), Vec::<String>::new());
        assert_eq!(split_blocks("\n\n"), Vec::<String>::new());
    }
}
