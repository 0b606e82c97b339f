#![forbid(unsafe_code)]

/// An open fenced code block: the marker character and the opener run length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct FenceState {
    marker: u8,
    marker_len: usize,
}

impl FenceState {
    /// Recognize a fence opener: three or more backticks or tildes at line
    /// start, optionally followed by an info string.
    pub(crate) fn open(line: &str) -> Option<Self> {
        let first = *line.as_bytes().first()?;
        if first != b'`' && first != b'~' {
            return None;
        }
        let marker_len = line.bytes().take_while(|byte| *byte == first).count();
        (marker_len >= 3).then_some(Self {
            marker: first,
            marker_len,
        })
    }

    /// A closer repeats the opening marker at least as many times as the
    /// opener, after optional leading whitespace, with nothing else but
    /// trailing whitespace. Backtick and tilde fences never close each other.
    pub(crate) fn closed_by(self, line: &str) -> bool {
        let trimmed = line.trim_start();
        let run = trimmed
            .bytes()
            .take_while(|byte| *byte == self.marker)
            .count();
        run >= self.marker_len && trimmed[run..].trim().is_empty()
    }
}
