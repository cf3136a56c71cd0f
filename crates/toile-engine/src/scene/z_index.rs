use core::cmp::Ordering;

/// Draw-order key. Higher values draw later, therefore on top.
///
/// Live shapes start out holding a permutation of `0..live_count`; deleting
/// a shape does *not* renumber the survivors, so gaps can appear. Reordering
/// swaps two values and keeps whatever set currently exists.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct ZIndex(pub i32);

impl ZIndex {
    #[inline]
    pub const fn new(v: i32) -> Self {
        Self(v)
    }
}

impl Ord for ZIndex {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl PartialOrd for ZIndex {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
