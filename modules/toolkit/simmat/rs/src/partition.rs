use std::iter::FusedIterator;

use derive_getters::Getters;

/// Number of unordered pairs {(i, j) : i < j < n}.
pub fn total_pairs(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Contiguous run of the row-major pair enumeration (i ascending, then j ascending).
#[derive(Copy, Clone, Eq, PartialEq, Debug, Getters)]
pub struct Chunk {
    /// Position of the chunk in the partition
    index: usize,
    /// Number of sequences
    n: usize,
    /// First pair of the chunk
    first: (usize, usize),
    /// Number of pairs in the chunk, never zero
    len: usize,
}

impl Chunk {
    pub fn pairs(&self) -> Pairs {
        Pairs {
            n: self.n,
            next: self.first,
            remaining: self.len,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Pairs {
    n: usize,
    next: (usize, usize),
    remaining: usize,
}

impl Iterator for Pairs {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let item = self.next;
        let (i, j) = item;
        self.next = if j + 1 < self.n { (i, j + 1) } else { (i + 1, i + 2) };
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Pairs {}

impl FusedIterator for Pairs {}

/// Split all pairs of `n` sequences into chunks of `max(1, total / target)` pairs.
/// The last chunk may be shorter. Every pair belongs to exactly one chunk.
pub fn partition(n: usize, target: usize) -> Vec<Chunk> {
    let total = total_pairs(n);
    if total == 0 {
        return Vec::new();
    }
    let size = (total / target.max(1)).max(1);

    let mut chunks = Vec::with_capacity(total.div_ceil(size));
    // Linear index of the first pair in the current row
    let (mut row, mut row_start) = (0, 0);
    let mut start = 0;
    while start < total {
        while start >= row_start + (n - row - 1) {
            row_start += n - row - 1;
            row += 1;
        }
        let first = (row, row + 1 + (start - row_start));
        let len = size.min(total - start);

        chunks.push(Chunk {
            index: chunks.len(),
            n,
            first,
            len,
        });
        start += len;
    }
    chunks
}
