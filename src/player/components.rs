//! Warrior-related components.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Mana pips a warrior can hold.
pub const MANA_CAP: u8 = 10;

/// Emeralds needed to win the match.
pub const EMERALD_GOAL: u8 = 10;

/// Warrior bounding box in pixels.
pub const WARRIOR_SIZE: IVec2 = IVec2::new(32, 32);

/// Marker component for the player-controlled warrior.
#[derive(Component)]
pub struct Warrior;

/// The three playable warrior archetypes.
///
/// The archetype fixes base health, movement speed, and which attack and
/// ultimate behaviors the combat systems dispatch to.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    /// Melee lunge, channeled damage aura
    Soldier,
    /// Ranged bolt, area blast
    Magician,
    /// Contact bombs, rocket barrage
    Priest,
}

impl Archetype {
    pub fn base_health(self) -> i32 {
        match self {
            Archetype::Soldier => 7,
            Archetype::Magician => 3,
            Archetype::Priest => 5,
        }
    }

    /// Pixels moved per movement tick.
    pub fn speed(self) -> i32 {
        match self {
            Archetype::Soldier => 5,
            Archetype::Magician => 7,
            Archetype::Priest => 5,
        }
    }

    /// Delay between primary attacks. The soldier swings freely.
    pub fn attack_cooldown(self) -> Option<f32> {
        match self {
            Archetype::Soldier => None,
            Archetype::Magician => Some(0.5),
            Archetype::Priest => Some(1.0),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Archetype::Soldier => "Soldier",
            Archetype::Magician => "Magician",
            Archetype::Priest => "Priest",
        }
    }
}

/// Mana pips currently held (0..=MANA_CAP).
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Mana(pub u8);

impl Mana {
    /// Append a pip, saturating at the cap.
    pub fn add(&mut self) {
        if self.0 < MANA_CAP {
            self.0 += 1;
        }
    }

    /// Drop every pip.
    pub fn clear(&mut self) {
        self.0 = 0;
    }

    pub fn is_full(self) -> bool {
        self.0 >= MANA_CAP
    }

    /// The ultimate is usable only on an empty or a full gauge.
    pub fn allows_ultimate(self) -> bool {
        self.0 == 0 || self.is_full()
    }
}

/// Emeralds collected this match.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Emeralds(pub u8);

/// While set, skeleton contact damage does not apply. Ability damage is
/// never gated by this flag.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Invincible(pub bool);

/// The archetype chosen on the selection screen, consumed when the match
/// starts.
#[derive(Resource, Debug, Clone, Copy)]
pub struct SelectedArchetype(pub Archetype);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mana_saturates_at_cap() {
        let mut mana = Mana::default();
        for _ in 0..15 {
            mana.add();
        }
        assert_eq!(mana.0, MANA_CAP);
        assert!(mana.is_full());
    }

    #[test]
    fn ultimate_gate_is_empty_or_full() {
        assert!(Mana(0).allows_ultimate());
        assert!(Mana(10).allows_ultimate());
        assert!(!Mana(4).allows_ultimate());
    }
}
