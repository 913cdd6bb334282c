//! Fixed catalog of trash types and the per-process collection registry

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of trash types in the catalog
pub const TRASH_KIND_COUNT: usize = 10;

/// A trash type, identified by a small integer id (1..=10)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TrashKind(u8);

/// Catalog row
#[derive(Debug, Clone, Copy)]
pub struct TrashInfo {
    pub points: u32,
    /// Detail image shown in the popup and codex
    pub image: &'static str,
}

const CATALOG: [TrashInfo; TRASH_KIND_COUNT] = [
    TrashInfo { points: 1, image: "trash1" },
    TrashInfo { points: 1, image: "trash2" },
    TrashInfo { points: 1, image: "trash3" },
    TrashInfo { points: 1, image: "trash4" },
    TrashInfo { points: 1, image: "trash5" },
    TrashInfo { points: 1, image: "trash6" },
    TrashInfo { points: 1, image: "trash7" },
    TrashInfo { points: 1, image: "trash8" },
    TrashInfo { points: 1, image: "trash9" },
    TrashInfo { points: 1, image: "trash10" },
];

/// Image used for every collectible lying in the world
pub const WORLD_SPRITE: &str = "trashbag";

impl TrashKind {
    /// `None` for ids outside 1..=10
    pub fn from_id(id: u8) -> Option<Self> {
        (1..=TRASH_KIND_COUNT as u8).contains(&id).then_some(Self(id))
    }

    /// Zero-based catalog index
    pub fn from_index(index: usize) -> Option<Self> {
        (index < TRASH_KIND_COUNT).then(|| Self(index as u8 + 1))
    }

    /// Uniformly random type
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.random_range(1..=TRASH_KIND_COUNT as u8))
    }

    pub fn all() -> impl Iterator<Item = TrashKind> {
        (1..=TRASH_KIND_COUNT as u8).map(TrashKind)
    }

    pub fn id(&self) -> u8 {
        self.0
    }

    pub fn index(&self) -> usize {
        self.0 as usize - 1
    }

    pub fn info(&self) -> &'static TrashInfo {
        &CATALOG[self.index()]
    }

    pub fn points(&self) -> u32 {
        self.info().points
    }

    pub fn image(&self) -> &'static str {
        self.info().image
    }
}

/// Which types have been seen at least once (the codex / data book)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionRegistry {
    collected: [bool; TRASH_KIND_COUNT],
}

impl CollectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `kind` as collected. Returns true on the first sighting.
    pub fn record(&mut self, kind: TrashKind) -> bool {
        let slot = &mut self.collected[kind.index()];
        let first = !*slot;
        *slot = true;
        first
    }

    pub fn is_collected(&self, kind: TrashKind) -> bool {
        self.collected[kind.index()]
    }

    pub fn count(&self) -> usize {
        self.collected.iter().filter(|c| **c).count()
    }

    pub fn is_complete(&self) -> bool {
        self.count() == TRASH_KIND_COUNT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_one_based() {
        assert!(TrashKind::from_id(0).is_none());
        assert!(TrashKind::from_id(11).is_none());
        let kind = TrashKind::from_id(10).unwrap();
        assert_eq!(kind.index(), 9);
        assert_eq!(kind.image(), "trash10");
        assert_eq!(TrashKind::from_index(0), TrashKind::from_id(1));
        assert_eq!(TrashKind::all().count(), TRASH_KIND_COUNT);
    }

    #[test]
    fn test_every_kind_is_worth_one_point() {
        assert!(TrashKind::all().all(|k| k.points() == 1));
    }

    #[test]
    fn test_registry_first_sighting_only_once() {
        let mut registry = CollectionRegistry::new();
        let kind = TrashKind::from_id(3).unwrap();
        assert!(!registry.is_collected(kind));
        assert!(registry.record(kind));
        assert!(!registry.record(kind));
        assert!(registry.is_collected(kind));
        assert_eq!(registry.count(), 1);
        assert!(!registry.is_complete());
    }

    #[test]
    fn test_registry_complete() {
        let mut registry = CollectionRegistry::new();
        for kind in TrashKind::all() {
            registry.record(kind);
        }
        assert!(registry.is_complete());
    }
}
