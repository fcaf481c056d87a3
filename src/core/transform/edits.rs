use std::{cmp::Ordering, ops::Range};

use crate::core::error::{TransformError, TransformResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditKind {
    Insert,
    Replace,
}

/// A pending change to the source text, addressed by byte offsets.
#[derive(Debug, Clone)]
pub struct TextEdit {
    range: Range<usize>,
    kind: EditKind,
    text: String,
    seq: usize,
}

impl TextEdit {
    fn order_key(&self) -> (usize, u8, usize) {
        let kind = match self.kind {
            EditKind::Insert => 0,
            EditKind::Replace => 1,
        };
        (self.range.start, kind, self.seq)
    }
}

impl PartialEq for TextEdit {
    fn eq(&self, other: &Self) -> bool {
        self.order_key() == other.order_key()
    }
}

impl Eq for TextEdit {}

impl Ord for TextEdit {
    fn cmp(&self, other: &Self) -> Ordering {
        self.order_key().cmp(&other.order_key())
    }
}

impl PartialOrd for TextEdit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Ordered set of edits recorded during one traversal and applied once at the end.
///
/// Inserts at the same offset keep the order they were recorded in and land before a
/// replacement starting at that offset.
#[derive(Debug, Default)]
pub struct EditList {
    edits: Vec<TextEdit>,
}

impl EditList {
    pub fn insert(&mut self, at: usize, text: impl Into<String>) {
        self.push(at..at, EditKind::Insert, text.into());
    }

    pub fn replace(&mut self, range: Range<usize>, text: impl Into<String>) {
        self.push(range, EditKind::Replace, text.into());
    }

    fn push(&mut self, range: Range<usize>, kind: EditKind, text: String) {
        let seq = self.edits.len();
        self.edits.push(TextEdit {
            range,
            kind,
            text,
            seq,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Render `source` with every edit applied.
    pub fn apply(mut self, source: &str) -> TransformResult<String> {
        self.edits.sort();

        let extra: usize = self.edits.iter().map(|e| e.text.len()).sum();
        let mut out = String::with_capacity(source.len() + extra);
        let mut cursor = 0;

        for edit in &self.edits {
            if edit.range.start < cursor || edit.range.end > source.len() {
                return Err(TransformError::OverlappingEdit {
                    start: edit.range.start,
                    end: edit.range.end,
                });
            }
            out.push_str(&source[cursor..edit.range.start]);
            out.push_str(&edit.text);
            cursor = edit.range.end;
        }
        out.push_str(&source[cursor..]);

        Ok(out)
    }
}
