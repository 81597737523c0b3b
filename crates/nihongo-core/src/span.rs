use std::ops::Range;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Span<C> {
    pub category: C,
    /// Index into the detection list the span came from, `None` for fill
    pub ref_index: Option<usize>,
    pub start: usize,
    pub end: usize,
}

impl<C> Span<C> {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// One `(category, ref_index)` cell per code point. Passes paint ranges in
/// increasing priority, each overwriting what lies beneath.
#[derive(Debug, Clone)]
pub struct Classification<C> {
    cells: Vec<(C, Option<usize>)>,
}

impl<C: Copy + PartialEq> Classification<C> {
    /// `len` cells, all set to `fill` with no reference
    pub fn new(len: usize, fill: C) -> Self {
        Self {
            cells: vec![(fill, None); len],
        }
    }

    /// Overwrite `range` with `category`. Out of bounds positions are ignored.
    pub fn paint(&mut self, range: Range<usize>, category: C, ref_index: usize) {
        let end = range.end.min(self.cells.len());
        for cell in self.cells.iter_mut().take(end).skip(range.start) {
            *cell = (category, Some(ref_index));
        }
    }

    /// Collapse equal neighbours into spans that partition the text
    pub fn into_spans(self) -> Vec<Span<C>> {
        let mut spans: Vec<Span<C>> = Vec::new();

        for (position, (category, ref_index)) in self.cells.into_iter().enumerate() {
            match spans.last_mut() {
                Some(last) if last.category == category && last.ref_index == ref_index => {
                    last.end = position + 1;
                }
                _ => spans.push(Span {
                    category,
                    ref_index,
                    start: position,
                    end: position + 1,
                }),
            }
        }

        spans
    }
}
