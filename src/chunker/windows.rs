// windows.rs - fixed-size partitioning of a token sequence

/// Splits a token sequence into consecutive windows of at most `size` ids
pub(crate) struct TokenWindows {
    size: usize,
}

impl TokenWindows {
    pub(crate) fn new(size: usize) -> Self {
        Self { size }
    }

    /// Disjoint, exhaustive, order-preserving windows. The last may be short.
    /// A zero size yields no windows.
    pub(crate) fn split<'a>(&self, ids: &'a [u32]) -> Vec<&'a [u32]> {
        if self.size == 0 {
            return vec![];
        }
        ids.chunks(self.size).collect()
    }
}

/// Number of windows a sequence of `len` tokens splits into; 0 for a zero size
pub(crate) fn window_count(len: usize, size: usize) -> usize {
    if size == 0 {
        0
    } else {
        len.div_ceil(size)
    }
}
