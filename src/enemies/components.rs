//! Skeleton components and tuning constants.

use bevy::prelude::*;

/// Skeleton bounding box in pixels.
pub const SKELETON_SIZE: IVec2 = IVec2::new(32, 32);

/// Pixels moved per AI tick.
pub const SKELETON_SPEED: i32 = 3;

/// Fixed AI tick interval.
pub const AI_TICK: f32 = 0.01;

/// Axis distance at which the chase switches to fine alignment.
pub const PROXIMITY_THRESHOLD: i32 = 32;

/// Delay between contact hits from the same skeleton.
pub const CONTACT_COOLDOWN_SECS: f32 = 1.0;

/// Seconds between spawner activations.
pub const SPAWN_INTERVAL: f32 = 2.0;

/// Placement rejection-sampling attempts before the safe-spawn fallback.
pub const SPAWN_RETRY_CAP: u32 = 128;

/// Death explosion bounding box and lifetime.
pub const DEATH_EXPLOSION_SIZE: IVec2 = IVec2::new(70, 70);
pub const DEATH_EXPLOSION_SECS: f32 = 0.5;

/// Marker component for all skeletons.
#[derive(Component)]
pub struct Skeleton;

/// Per-skeleton contact-damage cooldown. Starts ready: a freshly spawned
/// skeleton that reaches the warrior hits immediately.
#[derive(Component)]
pub struct ContactCooldown(pub Timer);

impl Default for ContactCooldown {
    fn default() -> Self {
        let mut timer = Timer::from_seconds(CONTACT_COOLDOWN_SECS, TimerMode::Once);
        let duration = timer.duration();
        timer.set_elapsed(duration);
        Self(timer)
    }
}

impl ContactCooldown {
    pub fn is_ready(&self) -> bool {
        self.0.finished()
    }

    pub fn restart(&mut self) {
        self.0.reset();
    }
}
