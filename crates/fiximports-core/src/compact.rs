//! Import block compaction
//!
//! A purely line-syntactic pass over Go source: blank lines between a line
//! reading `import (` and the closing `)` are dropped so the formatter sees a
//! single group and can regroup it. The pass has no lexer, so string
//! literals or comments that happen to read `import (` are treated the same
//! way as real import blocks.

/// Marker that flags a file as generated and therefore not to be rewritten.
pub const GENERATED_MARKER: &[u8] = b"DO NOT EDIT";

const IMPORT_OPEN: &[u8] = b"import (";
const IMPORT_CLOSE: &[u8] = b")";

/// Result of compacting one source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compacted {
    /// Source with blank lines inside import blocks removed
    pub source: Vec<u8>,
    /// Whether the generated-file marker appeared anywhere in the input
    pub generated: bool,
    /// Number of blank lines dropped
    pub removed_lines: usize,
}

impl Compacted {
    /// Whether compaction changed the source at all.
    pub fn is_changed(&self) -> bool {
        self.removed_lines > 0
    }
}

/// Remove blank lines inside `import ( ... )` blocks and detect the
/// generated-file marker.
///
/// Retained lines are copied byte-for-byte together with their own line
/// terminators, so text outside import blocks is never altered.
pub fn compact(source: &[u8]) -> Compacted {
    let mut out = Vec::with_capacity(source.len());
    let mut in_imports = false;
    let mut generated = false;
    let mut removed_lines = 0;

    for line in source.split_inclusive(|&b| b == b'\n') {
        let trimmed = trim_space(line);
        if trimmed == IMPORT_OPEN {
            in_imports = true;
        } else if in_imports && trimmed.is_empty() {
            removed_lines += 1;
            continue;
        } else if in_imports && trimmed == IMPORT_CLOSE {
            in_imports = false;
        }

        if !generated && contains(line, GENERATED_MARKER) {
            generated = true;
        }

        out.extend_from_slice(line);
    }

    Compacted {
        source: out,
        generated,
        removed_lines,
    }
}

/// Trim Unicode whitespace from both ends of a line.
///
/// Invalid UTF-8 at an edge stops trimming on that side.
fn trim_space(line: &[u8]) -> &[u8] {
    let head = line.utf8_chunks().next().map_or("", |chunk| chunk.valid());
    let start = head.len() - head.trim_start().len();

    let tail = line
        .utf8_chunks()
        .last()
        .filter(|chunk| chunk.invalid().is_empty())
        .map_or("", |chunk| chunk.valid());
    let end = line.len() - (tail.len() - tail.trim_end().len());

    if start >= end { &[] } else { &line[start..end] }
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|window| window == needle)
}
