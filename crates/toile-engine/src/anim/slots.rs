/// One of the four animation kinds a shape can run.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum AnimKind {
    Rotate,
    Zoom,
    Color,
    Bounce,
}

impl AnimKind {
    /// Advances the armed-animation cursor one step:
    /// None → Rotate → Zoom → Color → Bounce → None.
    pub fn cycle_forward(current: Option<Self>) -> Option<Self> {
        match current {
            None => Some(AnimKind::Rotate),
            Some(AnimKind::Rotate) => Some(AnimKind::Zoom),
            Some(AnimKind::Zoom) => Some(AnimKind::Color),
            Some(AnimKind::Color) => Some(AnimKind::Bounce),
            Some(AnimKind::Bounce) => None,
        }
    }

    /// Steps the armed-animation cursor the other way:
    /// None → Bounce → Color → Zoom → Rotate → None.
    pub fn cycle_backward(current: Option<Self>) -> Option<Self> {
        match current {
            None => Some(AnimKind::Bounce),
            Some(AnimKind::Bounce) => Some(AnimKind::Color),
            Some(AnimKind::Color) => Some(AnimKind::Zoom),
            Some(AnimKind::Zoom) => Some(AnimKind::Rotate),
            Some(AnimKind::Rotate) => None,
        }
    }
}

/// Up to three distinct animation kinds, kept compacted (occupied entries
/// always precede the free ones).
///
/// Semantically a set with capacity 3, but the array keeps the execution
/// order stable: kinds run in the order they were added.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct AnimSlots {
    kinds: [Option<AnimKind>; 3],
}

impl AnimSlots {
    pub const CAPACITY: usize = 3;

    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.kinds.iter().filter(|k| k.is_some()).count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.kinds[0].is_none()
    }

    #[inline]
    pub fn contains(&self, kind: AnimKind) -> bool {
        self.kinds.contains(&Some(kind))
    }

    /// Occupied slots, in execution order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = AnimKind> + '_ {
        self.kinds.iter().filter_map(|k| *k)
    }

    /// Adds `kind` if absent (and there is room), removes it if present.
    ///
    /// Returns `true` when the kind is armed after the call. Removal
    /// compacts the array so no gap precedes an occupied slot. A full set
    /// that does not contain `kind` is left unchanged.
    pub fn toggle(&mut self, kind: AnimKind) -> bool {
        if self.contains(kind) {
            self.kinds
                .iter_mut()
                .filter(|k| **k == Some(kind))
                .for_each(|k| *k = None);
            self.compact();
            false
        } else if let Some(free) = self.kinds.iter_mut().find(|k| k.is_none()) {
            *free = Some(kind);
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn clear(&mut self) {
        self.kinds = [None; 3];
    }

    fn compact(&mut self) {
        let mut packed = [None; 3];
        let mut n = 0;
        for kind in self.kinds.iter().flatten() {
            packed[n] = Some(*kind);
            n += 1;
        }
        self.kinds = packed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── cursor cycling ────────────────────────────────────────────────────

    #[test]
    fn forward_cycle_visits_all_kinds() {
        let mut cur = None;
        let mut seen = Vec::new();
        for _ in 0..5 {
            cur = AnimKind::cycle_forward(cur);
            seen.push(cur);
        }
        assert_eq!(
            seen,
            vec![
                Some(AnimKind::Rotate),
                Some(AnimKind::Zoom),
                Some(AnimKind::Color),
                Some(AnimKind::Bounce),
                None,
            ]
        );
    }

    #[test]
    fn backward_undoes_forward() {
        for cur in [
            None,
            Some(AnimKind::Rotate),
            Some(AnimKind::Zoom),
            Some(AnimKind::Color),
            Some(AnimKind::Bounce),
        ] {
            assert_eq!(AnimKind::cycle_backward(AnimKind::cycle_forward(cur)), cur);
        }
    }

    // ── slot set ──────────────────────────────────────────────────────────

    #[test]
    fn toggle_adds_then_removes() {
        let mut slots = AnimSlots::new();
        assert!(slots.toggle(AnimKind::Rotate));
        assert!(slots.contains(AnimKind::Rotate));
        assert!(!slots.toggle(AnimKind::Rotate));
        assert!(slots.is_empty());
    }

    #[test]
    fn toggle_round_trip_restores_set() {
        let mut slots = AnimSlots::new();
        slots.toggle(AnimKind::Rotate);
        slots.toggle(AnimKind::Color);
        let before = slots;

        slots.toggle(AnimKind::Zoom);
        slots.toggle(AnimKind::Zoom);
        assert_eq!(slots, before);
    }

    #[test]
    fn capacity_is_three() {
        let mut slots = AnimSlots::new();
        assert!(slots.toggle(AnimKind::Rotate));
        assert!(slots.toggle(AnimKind::Zoom));
        assert!(slots.toggle(AnimKind::Color));
        assert!(!slots.toggle(AnimKind::Bounce));
        assert_eq!(slots.len(), 3);
        assert!(!slots.contains(AnimKind::Bounce));
    }

    #[test]
    fn removal_compacts_remaining_slots() {
        let mut slots = AnimSlots::new();
        slots.toggle(AnimKind::Rotate);
        slots.toggle(AnimKind::Zoom);
        slots.toggle(AnimKind::Rotate);

        assert_eq!(slots.len(), 1);
        assert_eq!(slots.iter().next(), Some(AnimKind::Zoom));
    }

    #[test]
    fn no_duplicates_ever() {
        let mut slots = AnimSlots::new();
        slots.toggle(AnimKind::Color);
        slots.toggle(AnimKind::Color);
        slots.toggle(AnimKind::Color);
        assert_eq!(slots.iter().filter(|k| *k == AnimKind::Color).count(), 1);
    }
}
