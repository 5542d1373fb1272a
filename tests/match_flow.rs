//! End-to-end match flow tests on a headless app.
//!
//! The harness runs the real gameplay plugins under MinimalPlugins with a
//! manually-stepped clock, an in-memory ranking gateway, and a tiny open
//! arena, then drives fixed 5 ms frames through the schedule.

use std::sync::Mutex;
use std::time::Duration;

use bevy::app::App;
use bevy::input::ButtonInput;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;

use fallen_legends::combat::{CombatPlugin, Health};
use fallen_legends::core::{
    BodySize, CorePlugin, GameState, MatchEntity, Pose, Position, Speed, TeardownSet,
};
use fallen_legends::enemies::{
    ContactCooldown, EnemyPlugin, Skeleton, SKELETON_SIZE, SKELETON_SPEED,
};
use fallen_legends::items::{Item, ItemKind, ItemPlugin, ITEM_SIZE};
use fallen_legends::player::{Archetype, Emeralds, Mana, PlayerPlugin, SelectedArchetype, Warrior};
use fallen_legends::ranking::{
    self, ActiveUser, Gateway, RankingBoard, RankingError, RankingGateway, RoundRecord,
    UserRecord, UserRegistry,
};
use fallen_legends::world::geometry::{is_clear_of_walls, is_inside_walkable_area, Rect};
use fallen_legends::world::Arena;

/// Gateway double that records inserts in memory.
#[derive(Default)]
struct MemoryGateway {
    users: Mutex<Vec<UserRecord>>,
    rounds: Mutex<Vec<RoundRecord>>,
}

impl RankingGateway for MemoryGateway {
    fn list_users(&self) -> Result<Vec<UserRecord>, RankingError> {
        Ok(self.users.lock().unwrap().clone())
    }

    fn list_rounds(&self) -> Result<Vec<RoundRecord>, RankingError> {
        Ok(self.rounds.lock().unwrap().clone())
    }

    fn insert_user(&self, name: &str) -> Result<u64, RankingError> {
        let mut users = self.users.lock().unwrap();
        let id = users.len() as u64;
        users.push(UserRecord {
            id,
            name: name.to_string(),
        });
        Ok(id)
    }

    fn insert_round(
        &self,
        warrior: Archetype,
        seconds: f64,
        user_id: u64,
    ) -> Result<(), RankingError> {
        self.rounds.lock().unwrap().push(RoundRecord {
            warrior,
            seconds,
            user_id,
        });
        Ok(())
    }

    fn lookup_user_id(&self, name: &str) -> Result<Option<u64>, RankingError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.name == name)
            .map(|u| u.id))
    }
}

/// One large open room with a single border wall at the top.
fn test_arena() -> Arena {
    Arena {
        name: "test".to_string(),
        bounds: IVec2::new(1920, 1080),
        player_start: IVec2::new(400, 400),
        safe_spawn: IVec2::new(600, 400),
        walls: vec![Rect::new(0, 0, 1920, 16)],
        floors: vec![Rect::new(16, 16, 1888, 1048)],
    }
}

/// Build the headless app with 5 ms manually-stepped frames.
fn harness(archetype: Archetype) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(5)));
    app.insert_resource(ButtonInput::<KeyCode>::default());
    app.insert_resource(test_arena());
    app.insert_resource(SelectedArchetype(archetype));

    app.add_plugins((CorePlugin, PlayerPlugin, CombatPlugin, EnemyPlugin, ItemPlugin));

    // Ranking wiring with the in-memory gateway.
    let gateway = MemoryGateway::default();
    gateway.insert_user("tester").unwrap();
    app.insert_resource(Gateway(Box::new(gateway)));
    let mut registry = UserRegistry::default();
    registry.create("tester").unwrap();
    app.insert_resource(registry);
    app.init_resource::<RankingBoard>();
    app.insert_resource(ActiveUser(Some("tester".to_string())));
    app.add_systems(
        OnEnter(GameState::Victory),
        ranking::record_victory.before(TeardownSet),
    );

    app
}

/// Step into the active match: the first update lands in Loading (no
/// loading systems are registered here), the second enters InGame.
fn enter_match(app: &mut App) {
    app.update();
    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::InGame);
    app.update();
}

fn warrior_health(app: &mut App) -> i32 {
    let mut query = app.world_mut().query_filtered::<&Health, With<Warrior>>();
    query.single(app.world()).current
}

fn current_state(app: &App) -> GameState {
    *app.world().resource::<State<GameState>>().get()
}

fn match_entity_count(app: &mut App) -> usize {
    let mut query = app.world_mut().query_filtered::<Entity, With<MatchEntity>>();
    query.iter(app.world()).count()
}

/// Spawn a skeleton directly on top of the warrior.
fn spawn_overlapping_skeleton(app: &mut App) {
    let mut query = app.world_mut().query_filtered::<&Position, With<Warrior>>();
    let warrior_pos = query.single(app.world()).0;
    app.world_mut().spawn((
        Skeleton,
        Position(warrior_pos),
        BodySize(SKELETON_SIZE),
        Speed(SKELETON_SPEED),
        Pose::default(),
        Health::new(2),
        ContactCooldown::default(),
        MatchEntity,
    ));
}

#[test]
fn contact_damage_applies_once_per_cooldown_window() {
    let mut app = harness(Archetype::Soldier);
    enter_match(&mut app);
    assert_eq!(warrior_health(&mut app), 7);

    spawn_overlapping_skeleton(&mut app);

    // 0.5 s of overlapping 10 ms AI ticks: exactly one hit lands.
    for _ in 0..100 {
        app.update();
    }
    assert_eq!(warrior_health(&mut app), 6);

    // Past the 1 s cooldown: exactly one more.
    for _ in 0..150 {
        app.update();
    }
    assert_eq!(warrior_health(&mut app), 5);
}

#[test]
fn ten_emeralds_win_the_match_and_record_one_round() {
    let mut app = harness(Archetype::Magician);
    enter_match(&mut app);

    {
        let mut query = app
            .world_mut()
            .query_filtered::<&mut Emeralds, With<Warrior>>();
        let mut emeralds = query.single_mut(app.world_mut());
        emeralds.0 = 10;
    }

    // One frame to detect the win, one for the transition to apply.
    app.update();
    app.update();
    assert_eq!(current_state(&app), GameState::Victory);

    // Exactly one round, with the archetype that was played.
    {
        let board = app.world().resource::<RankingBoard>();
        assert_eq!(board.len(), 1);
        let round = board.iter().next().unwrap();
        assert_eq!(round.warrior, Archetype::Magician);
        assert_eq!(round.user, "tester");
    }

    // The user's own history got it too.
    let registry = app.world().resource::<UserRegistry>();
    assert_eq!(registry.get("tester").unwrap().rounds.len(), 1);

    // Persisted through the gateway exactly once.
    let gateway = app.world().resource::<Gateway>();
    assert_eq!(gateway.0.list_rounds().unwrap().len(), 1);

    // The play surface is empty.
    assert_eq!(match_entity_count(&mut app), 0);

    // The result screen hands control back to the menu.
    for _ in 0..700 {
        app.update();
    }
    assert_eq!(current_state(&app), GameState::MainMenu);
}

#[test]
fn death_ends_the_match_without_recording() {
    let mut app = harness(Archetype::Priest);
    enter_match(&mut app);

    {
        let mut query = app
            .world_mut()
            .query_filtered::<&mut Health, With<Warrior>>();
        let mut health = query.single_mut(app.world_mut());
        health.current = 0;
    }

    app.update();
    app.update();
    assert_eq!(current_state(&app), GameState::Defeat);

    assert!(app.world().resource::<RankingBoard>().is_empty());
    let gateway = app.world().resource::<Gateway>();
    assert!(gateway.0.list_rounds().unwrap().is_empty());

    assert_eq!(match_entity_count(&mut app), 0);
}

#[test]
fn unacceptable_item_waits_until_space_frees() {
    let mut app = harness(Archetype::Soldier);
    enter_match(&mut app);

    let warrior_pos = {
        let mut query = app.world_mut().query_filtered::<&Position, With<Warrior>>();
        query.single(app.world()).0
    };
    {
        let mut query = app.world_mut().query_filtered::<&mut Mana, With<Warrior>>();
        query.single_mut(app.world_mut()).0 = 10;
    }

    // Drop a mana pip directly on the full-gauge warrior.
    app.world_mut().spawn((
        Item::new(ItemKind::Mana),
        Position(warrior_pos),
        BodySize(ITEM_SIZE),
        MatchEntity,
    ));

    // Several pickup ticks pass; the item is not consumed.
    for _ in 0..20 {
        app.update();
    }
    let mut items = app.world_mut().query_filtered::<Entity, With<Item>>();
    assert_eq!(items.iter(app.world()).count(), 1);

    // Space frees up: the very item left on the floor is collected.
    {
        let mut query = app.world_mut().query_filtered::<&mut Mana, With<Warrior>>();
        query.single_mut(app.world_mut()).0 = 9;
    }
    for _ in 0..20 {
        app.update();
    }
    let mut items = app.world_mut().query_filtered::<Entity, With<Item>>();
    assert_eq!(items.iter(app.world()).count(), 0);
    let mut query = app.world_mut().query_filtered::<&Mana, With<Warrior>>();
    assert_eq!(query.single(app.world()).0, 10);
}

#[test]
fn skeletons_spawn_on_walkable_ground_during_play() {
    let mut app = harness(Archetype::Soldier);
    enter_match(&mut app);

    // 2.5 s: past the first spawner activation.
    for _ in 0..500 {
        app.update();
    }

    let arena = test_arena();
    let mut found = 0;
    let mut query = app
        .world_mut()
        .query_filtered::<(&Position, &BodySize), With<Skeleton>>();
    for (position, size) in query.iter(app.world()) {
        found += 1;
        let body = Rect::from_pos_size(position.0, size.0);
        assert!(is_inside_walkable_area(&body, &arena.floors));
        assert!(is_clear_of_walls(&body, &arena.walls));
    }
    assert!(found > 0, "spawner produced no skeletons in 2.5s");
}
