//! Loot drop components and the drop roll.

use bevy::prelude::*;

/// Loot bounding box in pixels.
pub const ITEM_SIZE: IVec2 = IVec2::new(28, 28);

/// Fixed pickup-watch tick interval.
pub const PICKUP_TICK: f32 = 0.03;

/// What a dropped item grants on pickup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// One mana pip, accepted while below the cap
    Mana,
    /// One heart, accepted while below the archetype maximum
    Life,
    /// One emerald, always accepted
    Emerald,
}

/// A dropped item waiting on the floor.
#[derive(Component)]
pub struct Item {
    pub kind: ItemKind,
    pub tick: Timer,
}

impl Item {
    pub fn new(kind: ItemKind) -> Self {
        Self {
            kind,
            tick: Timer::from_seconds(PICKUP_TICK, TimerMode::Repeating),
        }
    }
}

/// Resolve a skeleton's death drop from a uniform draw in [0, 1).
///
/// Thresholds: the bottom 30% drops nothing, then equal 30% bands for mana
/// and life, and the top 10% drops an emerald.
pub fn roll_loot(r: f64) -> Option<ItemKind> {
    if r <= 0.3 {
        None
    } else if r <= 0.6 {
        Some(ItemKind::Mana)
    } else if r <= 0.9 {
        Some(ItemKind::Life)
    } else {
        Some(ItemKind::Emerald)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_draw_drops_nothing() {
        assert_eq!(roll_loot(0.1), None);
        assert_eq!(roll_loot(0.3), None);
    }

    #[test]
    fn middle_bands_drop_mana_then_life() {
        assert_eq!(roll_loot(0.5), Some(ItemKind::Mana));
        assert_eq!(roll_loot(0.6), Some(ItemKind::Mana));
        assert_eq!(roll_loot(0.75), Some(ItemKind::Life));
        assert_eq!(roll_loot(0.9), Some(ItemKind::Life));
    }

    #[test]
    fn top_band_drops_emerald() {
        assert_eq!(roll_loot(0.95), Some(ItemKind::Emerald));
        assert_eq!(roll_loot(0.999), Some(ItemKind::Emerald));
    }
}
