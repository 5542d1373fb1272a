//! Global events used for cross-system communication.
//!
//! Events allow decoupled systems to communicate. For example, the enemy
//! AI sends WarriorStruck when a skeleton lands a hit, and the player
//! module receives it to apply the damage. This keeps systems independent
//! and testable.

use bevy::prelude::*;

/// Sent when a skeleton should take damage.
///
/// Written by whichever ability or projectile scored the hit; a single
/// system applies the health reduction so deaths are detected in one place.
#[derive(Event)]
pub struct DamageSkeleton {
    /// Skeleton entity receiving damage
    pub target: Entity,
    /// Damage amount
    pub amount: i32,
}

/// Sent when a skeleton lands contact damage on the warrior.
///
/// Contact damage is always a single point; the AI has already checked the
/// skeleton's own attack cooldown and the warrior's invincibility.
#[derive(Event)]
pub struct WarriorStruck;

/// Sent by the player input system when the attack key is pressed.
#[derive(Event)]
pub struct AttackInput;

/// Sent by the player input system when the ultimate key is pressed and
/// the mana gate (0 or 10) is satisfied.
#[derive(Event)]
pub struct UltimateInput;
