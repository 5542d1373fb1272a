//! Pickup watching.
//!
//! Each dropped item re-checks the warrior on its own fixed tick. An item
//! whose acceptance condition fails (full mana, full hearts) stays on the
//! floor and is checked again next tick, so it is consumable the moment
//! space frees up.

use bevy::prelude::*;

use super::components::{Item, ItemKind};
use crate::combat::Health;
use crate::core::{body, BodySize, Position};
use crate::player::{Emeralds, Mana, Warrior, EMERALD_GOAL, MANA_CAP};

/// Watch every dropped item for pickup.
pub fn watch_pickups(
    time: Res<Time>,
    mut commands: Commands,
    mut items: Query<(Entity, &mut Item, &Position, &BodySize), Without<Warrior>>,
    mut warrior: Query<
        (&Position, &BodySize, &mut Health, &mut Mana, &mut Emeralds),
        With<Warrior>,
    >,
) {
    let Ok((warrior_pos, warrior_size, mut health, mut mana, mut emeralds)) =
        warrior.get_single_mut()
    else {
        return;
    };

    // A dead or already-victorious warrior collects nothing; the items are
    // swept up with the rest of the match.
    if health.is_dead() || emeralds.0 >= EMERALD_GOAL {
        return;
    }

    let warrior_box = body(warrior_pos, warrior_size);

    for (entity, mut item, position, size) in items.iter_mut() {
        item.tick.tick(time.delta());
        if item.tick.times_finished_this_tick() == 0 {
            continue;
        }
        if !body(position, size).intersects(&warrior_box) {
            continue;
        }

        match item.kind {
            ItemKind::Mana if mana.0 < MANA_CAP => {
                mana.add();
                commands.entity(entity).despawn();
            }
            ItemKind::Life if health.current < health.max => {
                health.heal(1);
                commands.entity(entity).despawn();
            }
            ItemKind::Emerald => {
                emeralds.0 += 1;
                commands.entity(entity).despawn();
            }
            // Not acceptable right now; stays for the next tick.
            _ => {}
        }
    }
}
