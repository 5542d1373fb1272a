//! Combat-related components and tuning constants.

use bevy::prelude::*;

use crate::world::geometry::Dir;

// === Soldier ===

/// Pixels the soldier lunges on attack.
pub const SOLDIER_LUNGE: i32 = 20;
/// Damage of the soldier's melee strike.
pub const SOLDIER_ATTACK_DAMAGE: i32 = 3;
/// How long the attack pose (and its invincibility) lasts.
pub const ATTACK_POSE_SECS: f32 = 0.4;
/// Soldier ultimate channel duration.
pub const SOLDIER_CHANNEL_SECS: f32 = 2.5;
/// How long the damage aura stays up after the channel.
pub const AURA_SECS: f32 = 10.0;
/// Aura damage tick interval.
pub const AURA_TICK: f32 = 0.01;
/// Damage per aura tick to each skeleton touching the warrior.
pub const AURA_DAMAGE: i32 = 3;

// === Magician ===

/// Bolt step in pixels per tick.
pub const BOLT_STEP: i32 = 10;
/// Bolt movement tick interval.
pub const BOLT_TICK: f32 = 0.01;
/// Damage a bolt deals on impact.
pub const BOLT_DAMAGE: i32 = 1;
/// Bolt impact explosion lifetime.
pub const BOLT_EXPLOSION_SECS: f32 = 0.35;
/// Channel time until the area blast lands.
pub const MAGICIAN_IMPACT_SECS: f32 = 1.5;
/// Total magician channel lockout.
pub const MAGICIAN_CHANNEL_SECS: f32 = 3.0;
/// Side length of the square blast area centered on the warrior.
pub const MAGICIAN_BLAST_SIZE: i32 = 800;
/// Damage dealt to every skeleton inside the blast area.
pub const MAGICIAN_BLAST_DAMAGE: i32 = 3;
/// Per-victim explosion lifetime.
pub const MAGICIAN_EXPLOSION_SECS: f32 = 0.5;

// === Priest ===

/// Bomb bounding box side length.
pub const BOMB_SIZE: i32 = 25;
/// Bomb contact-check tick interval.
pub const BOMB_TICK: f32 = 0.02;
/// Blast rectangle of bombs and rockets.
pub const BLAST_SIZE: IVec2 = IVec2::new(100, 110);
/// Blast offset relative to a detonating bomb.
pub const BOMB_BLAST_OFFSET: IVec2 = IVec2::new(-40, -40);
/// Blast offset relative to a detonating rocket.
pub const ROCKET_BLAST_OFFSET: IVec2 = IVec2::new(-50, -40);
/// Damage dealt inside a blast.
pub const BLAST_DAMAGE: i32 = 3;
/// Blast explosion lifetime.
pub const BLAST_EXPLOSION_SECS: f32 = 0.7;
/// Rocket bounding box.
pub const ROCKET_SIZE: IVec2 = IVec2::new(20, 60);
/// Rocket fall step in pixels per tick.
pub const ROCKET_FALL: i32 = 15;
/// Rocket movement tick interval.
pub const ROCKET_TICK: f32 = 0.01;
/// Interval between rocket launches during the barrage.
pub const BOMBARD_INTERVAL: f32 = 0.1;
/// Total barrage duration.
pub const BOMBARD_SECS: f32 = 2.0;
/// Horizontal launch band: x in MIN..MIN+SPAN.
pub const ROCKET_X_MIN: i32 = 116;
pub const ROCKET_X_SPAN: i32 = 1770;

/// Component for entities that can take damage.
#[derive(Component, Debug, Clone, Copy)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

impl Health {
    pub fn new(max: i32) -> Self {
        Self { current: max, max }
    }

    /// Health may go negative; anything at or below zero is dead.
    pub fn take_damage(&mut self, amount: i32) {
        self.current -= amount;
    }

    pub fn heal(&mut self, amount: i32) {
        self.current = (self.current + amount).min(self.max);
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0
    }
}

/// Delay between primary attacks. Starts ready so the first attack of the
/// match is never held back.
#[derive(Component)]
pub struct AttackCooldown(pub Timer);

impl AttackCooldown {
    pub fn ready(seconds: f32) -> Self {
        let mut timer = Timer::from_seconds(seconds, TimerMode::Once);
        let duration = timer.duration();
        timer.set_elapsed(duration);
        Self(timer)
    }

    pub fn is_ready(&self) -> bool {
        self.0.finished()
    }

    pub fn restart(&mut self) {
        self.0.reset();
    }
}

/// Marker for a warrior locked in an ultimate channel: immobile and deaf
/// to further input until the channel resolves.
#[derive(Component)]
pub struct Channeling;

/// Soldier ultimate phase one: charging up before the aura ignites.
#[derive(Component)]
pub struct SoldierChannel(pub Timer);

impl Default for SoldierChannel {
    fn default() -> Self {
        Self(Timer::from_seconds(SOLDIER_CHANNEL_SECS, TimerMode::Once))
    }
}

/// Soldier ultimate phase two: the active damage aura.
#[derive(Component)]
pub struct Aura {
    pub tick: Timer,
    pub remaining: Timer,
}

impl Default for Aura {
    fn default() -> Self {
        Self {
            tick: Timer::from_seconds(AURA_TICK, TimerMode::Repeating),
            remaining: Timer::from_seconds(AURA_SECS, TimerMode::Once),
        }
    }
}

/// Magician ultimate: the blast lands at `impact`, the lockout (and
/// invincibility) clears at `unlock`.
#[derive(Component)]
pub struct MagicianChannel {
    pub impact: Timer,
    pub unlock: Timer,
}

impl Default for MagicianChannel {
    fn default() -> Self {
        Self {
            impact: Timer::from_seconds(MAGICIAN_IMPACT_SECS, TimerMode::Once),
            unlock: Timer::from_seconds(MAGICIAN_CHANNEL_SECS, TimerMode::Once),
        }
    }
}

/// Priest ultimate: rockets launch on `spawn` until `duration` runs out.
#[derive(Component)]
pub struct Bombardment {
    pub spawn: Timer,
    pub duration: Timer,
}

impl Default for Bombardment {
    fn default() -> Self {
        Self {
            spawn: Timer::from_seconds(BOMBARD_INTERVAL, TimerMode::Repeating),
            duration: Timer::from_seconds(BOMBARD_SECS, TimerMode::Once),
        }
    }
}

/// Soldier attack animation state; invincibility lasts until it reverts.
#[derive(Component)]
pub struct AttackPose {
    pub timer: Timer,
    pub dir: Dir,
}

impl AttackPose {
    pub fn new(dir: Dir) -> Self {
        Self {
            timer: Timer::from_seconds(ATTACK_POSE_SECS, TimerMode::Once),
            dir,
        }
    }
}

/// A magician bolt in flight.
#[derive(Component)]
pub struct Bolt {
    pub dir: Dir,
    pub tick: Timer,
}

impl Bolt {
    pub fn new(dir: Dir) -> Self {
        Self {
            dir,
            tick: Timer::from_seconds(BOLT_TICK, TimerMode::Repeating),
        }
    }

    /// Bolts are wider than tall when flying horizontally.
    pub fn size(dir: Dir) -> IVec2 {
        match dir {
            Dir::Left | Dir::Right => IVec2::new(25, 20),
            Dir::Up | Dir::Down => IVec2::new(20, 25),
        }
    }
}

/// A priest bomb waiting for a skeleton to step on it.
#[derive(Component)]
pub struct Bomb {
    pub tick: Timer,
}

impl Default for Bomb {
    fn default() -> Self {
        Self {
            tick: Timer::from_seconds(BOMB_TICK, TimerMode::Repeating),
        }
    }
}

/// A falling barrage rocket.
#[derive(Component)]
pub struct Rocket {
    pub tick: Timer,
}

impl Default for Rocket {
    fn default() -> Self {
        Self {
            tick: Timer::from_seconds(ROCKET_TICK, TimerMode::Repeating),
        }
    }
}

/// Marker for a transient explosion visual.
#[derive(Component)]
pub struct Explosion;

/// Despawn timer for transient visuals.
#[derive(Component)]
pub struct Lifetime(pub Timer);

impl Lifetime {
    pub fn seconds(seconds: f32) -> Self {
        Self(Timer::from_seconds(seconds, TimerMode::Once))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_tracks_damage_exactly() {
        let mut health = Health::new(2);
        health.take_damage(3);
        assert_eq!(health.current, -1);
        assert!(health.is_dead());
    }

    #[test]
    fn health_dead_only_at_or_below_zero() {
        let mut health = Health::new(2);
        health.take_damage(1);
        assert!(!health.is_dead());
        health.take_damage(1);
        assert!(health.is_dead());
    }

    #[test]
    fn heal_caps_at_max() {
        let mut health = Health::new(5);
        health.take_damage(2);
        health.heal(10);
        assert_eq!(health.current, 5);
    }

    #[test]
    fn cooldown_starts_ready() {
        let cooldown = AttackCooldown::ready(0.5);
        assert!(cooldown.is_ready());
        let mut restarted = cooldown;
        restarted.restart();
        assert!(!restarted.is_ready());
    }
}
