//! Once-only bookkeeping for scroll-triggered reveals.
//!
//! Every observed element is registered here and tagged with the returned
//! id. The intersection callback asks the registry whether to act, so an
//! element is revealed at most once even when the host reports it
//! intersecting again before the unobserve takes effect.

pub const REVEAL_ID_ATTRIBUTE: &str = "data-reveal-id";

/// What to do when an observed element comes into view. An element can be
/// both a fade target and a grid, in which case both apply.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealKind {
    /// Mark the element itself visible.
    pub fade: bool,
    /// Mark each child visible with a staggered delay.
    pub stagger: bool,
}

impl RevealKind {
    pub const FADE: Self = Self {
        fade: true,
        stagger: false,
    };
    pub const GRID: Self = Self {
        fade: false,
        stagger: true,
    };

    pub fn union(self, other: Self) -> Self {
        Self {
            fade: self.fade || other.fade,
            stagger: self.stagger || other.stagger,
        }
    }
}

/// Merges the fade and grid matches into one entry per element, in
/// first-seen order.
pub fn classify<T: PartialEq + Clone>(fades: &[T], grids: &[T]) -> Vec<(T, RevealKind)> {
    let mut targets: Vec<(T, RevealKind)> = Vec::with_capacity(fades.len() + grids.len());
    let tagged = fades
        .iter()
        .map(|element| (element, RevealKind::FADE))
        .chain(grids.iter().map(|element| (element, RevealKind::GRID)));

    for (element, kind) in tagged {
        match targets.iter_mut().find(|(existing, _)| existing == element) {
            Some((_, existing_kind)) => *existing_kind = existing_kind.union(kind),
            None => targets.push((element.clone(), kind)),
        }
    }

    targets
}

pub type RevealId = usize;

#[derive(Clone, Copy, Debug)]
struct RevealSlot {
    kind: RevealKind,
    revealed: bool,
}

#[derive(Debug, Default)]
pub struct RevealRegistry {
    slots: Vec<RevealSlot>,
}

impl RevealRegistry {
    pub fn register(&mut self, kind: RevealKind) -> RevealId {
        self.slots.push(RevealSlot {
            kind,
            revealed: false,
        });
        self.slots.len() - 1
    }

    /// Returns the reveal to perform, or `None` if there is nothing to do.
    pub fn on_intersection(&mut self, id: RevealId, is_intersecting: bool) -> Option<RevealKind> {
        if !is_intersecting {
            return None;
        }

        let slot = self.slots.get_mut(id)?;
        if slot.revealed {
            return None;
        }

        slot.revealed = true;
        Some(slot.kind)
    }

    pub fn pending(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.revealed).count()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }
}

/// Inline `transition-delay` for the grid child at `index`.
pub fn stagger_delay(index: usize, step_ms: u32) -> String {
    let delay = index as u64 * u64::from(step_ms);
    format!("{delay}ms")
}

pub fn parse_reveal_id(raw: Option<&str>) -> Option<RevealId> {
    raw?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_reveals_only_on_first_intersection() {
        let mut registry = RevealRegistry::default();
        let id = registry.register(RevealKind::FADE);

        assert_eq!(registry.on_intersection(id, true), Some(RevealKind::FADE));
        assert_eq!(registry.on_intersection(id, true), None);
        assert_eq!(registry.on_intersection(id, true), None);
    }

    #[test]
    fn non_intersecting_entries_do_not_consume_the_reveal() {
        let mut registry = RevealRegistry::default();
        let id = registry.register(RevealKind::GRID);

        assert_eq!(registry.on_intersection(id, false), None);
        assert_eq!(registry.pending(), 1);
        assert_eq!(registry.on_intersection(id, true), Some(RevealKind::GRID));
        assert_eq!(registry.pending(), 0);
    }

    #[test]
    fn elements_are_tracked_independently() {
        let mut registry = RevealRegistry::default();
        let fade = registry.register(RevealKind::FADE);
        let grid = registry.register(RevealKind::GRID);

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.on_intersection(grid, true), Some(RevealKind::GRID));
        assert_eq!(registry.on_intersection(fade, true), Some(RevealKind::FADE));
    }

    #[test]
    fn grid_that_also_fades_gets_one_slot_with_both_reveals() {
        let targets = classify(&["hero", "stats"], &["stats", "team"]);

        assert_eq!(
            targets,
            vec![
                ("hero", RevealKind::FADE),
                ("stats", RevealKind { fade: true, stagger: true }),
                ("team", RevealKind::GRID),
            ]
        );

        let mut registry = RevealRegistry::default();
        let ids: Vec<_> = targets.iter().map(|(_, kind)| registry.register(*kind)).collect();
        assert_eq!(registry.len(), 3);

        let both = registry.on_intersection(ids[1], true).expect("first intersection reveals");
        assert!(both.fade && both.stagger);
        assert_eq!(registry.on_intersection(ids[1], true), None);
        assert_eq!(registry.pending(), 2);
    }

    #[test]
    fn unknown_id_is_ignored() {
        let mut registry = RevealRegistry::default();
        assert_eq!(registry.on_intersection(7, true), None);
    }

    #[test]
    fn stagger_delay_grows_by_step_per_child() {
        assert_eq!(stagger_delay(0, 100), "0ms");
        assert_eq!(stagger_delay(1, 100), "100ms");
        assert_eq!(stagger_delay(7, 100), "700ms");
        assert_eq!(stagger_delay(3, 40), "120ms");
    }

    #[test]
    fn reveal_id_attribute_round_trips() {
        assert_eq!(parse_reveal_id(Some("12")), Some(12));
        assert_eq!(parse_reveal_id(Some("x")), None);
        assert_eq!(parse_reveal_id(None), None);
    }
}
