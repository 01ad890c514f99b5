// Host-side tests for spawn scheduling and note mapping.

mod common;

use bubbles_core::*;
use common::*;
use glam::Vec2;
use std::time::Duration;

fn config(policy: SpawnPolicy) -> AnimationConfig {
    AnimationConfig {
        policy,
        bubble: BubbleStyle {
            duration: Duration::from_secs(10),
            ..BubbleStyle::default()
        },
        ..AnimationConfig::default()
    }
}

#[test]
fn sound_index_maps_edges_of_wide_surface() {
    assert_eq!(sound_index_for_x(0.0, 1024.0, 12), 0);
    assert_eq!(sound_index_for_x(1023.0, 1024.0, 12), 11);
    assert_eq!(sound_index_for_x(1024.0, 1024.0, 12), 11);
}

#[test]
fn sound_index_is_monotonic_and_covers_every_note() {
    let width = 1024.0;
    let count = 12;
    let mut seen = vec![false; count];
    let mut prev = 0;
    for px in 0..=1024 {
        let idx = sound_index_for_x(px as f32, width, count);
        assert!(idx >= prev, "index decreased at x={px}");
        assert!(idx < count);
        seen[idx] = true;
        prev = idx;
    }
    assert!(seen.iter().all(|s| *s), "not every note reachable: {seen:?}");
}

#[test]
fn sound_index_clamps_out_of_range_positions() {
    assert_eq!(sound_index_for_x(-40.0, 400.0, 5), 0);
    assert_eq!(sound_index_for_x(9_999.0, 400.0, 5), 4);
    assert_eq!(sound_index_for_x(10.0, 400.0, 0), 0);
}

#[test]
fn quarter_note_at_140_bpm_is_428_ms() {
    let d = note_length(1.0, 140.0);
    assert!((d.as_secs_f64() * 1000.0 - 428.5714).abs() < 1e-3, "{d:?}");
    let whole = note_length(4.0, 140.0);
    assert!((whole.as_secs_f64() * 1000.0 - 1714.2857).abs() < 1e-3);
}

#[test]
fn unrepresentable_note_length_saturates() {
    assert_eq!(note_length(4.0, 1e-20), Duration::MAX);
}

#[test]
fn rhythmic_scheduler_draws_first_interval_at_construction() {
    let dice = ScriptedDice::new().index_fallback(QUARTER_INDEX);
    let scheduler = SpawnScheduler::new(&config(SpawnPolicy::Rhythmic), dice);
    let next = scheduler.next_duration().unwrap();
    assert!((next.as_secs_f64() * 1000.0 - 428.5714).abs() < 1e-3);
}

#[test]
fn rhythmic_spawn_requires_strictly_exceeding_interval() {
    let mut surface = MemorySurface::new(400.0, 300.0);
    let mut bank = RecordingSoundBank::new(12);
    let dice = ScriptedDice::new().index_fallback(QUARTER_INDEX);
    let mut scheduler = SpawnScheduler::new(&config(SpawnPolicy::Rhythmic), dice);
    let next = scheduler.next_duration().unwrap();

    scheduler.update(next, &mut surface, &mut bank);
    assert_eq!(scheduler.spawned(), 0, "equal to the interval must not fire");

    scheduler.update(Duration::from_nanos(1), &mut surface, &mut bank);
    assert_eq!(scheduler.spawned(), 1);
    assert_eq!(scheduler.last_made(), scheduler.time_alive());
}

#[test]
fn rhythmic_spawns_once_per_window_even_after_long_gap() {
    let mut surface = MemorySurface::new(400.0, 300.0);
    let mut bank = RecordingSoundBank::new(12);
    let dice = ScriptedDice::new().index_fallback(QUARTER_INDEX);
    let mut scheduler = SpawnScheduler::new(&config(SpawnPolicy::Rhythmic), dice);

    scheduler.update(ms(400), &mut surface, &mut bank);
    scheduler.update(ms(28), &mut surface, &mut bank);
    assert_eq!(scheduler.spawned(), 0);
    scheduler.update(ms(1), &mut surface, &mut bank);
    assert_eq!(scheduler.spawned(), 1);

    scheduler.update(ms(100), &mut surface, &mut bank);
    assert_eq!(scheduler.spawned(), 1);

    // twelve intervals' worth of stall still yields a single spawn
    scheduler.update(ms(5_000), &mut surface, &mut bank);
    assert_eq!(scheduler.spawned(), 2);
    assert_eq!(bank.plays().len(), 2);
}

#[test]
fn rhythmic_interval_is_redrawn_after_each_spawn() {
    let mut surface = MemorySurface::new(400.0, 300.0);
    let mut bank = RecordingSoundBank::new(12);
    // first draw: quarter; after the spawn: whole note (index 9)
    let dice = ScriptedDice::new().indices([QUARTER_INDEX, 9]);
    let mut scheduler = SpawnScheduler::new(&config(SpawnPolicy::Rhythmic), dice);

    let before = scheduler.next_duration().unwrap();
    scheduler.update(ms(500), &mut surface, &mut bank);
    let after = scheduler.next_duration().unwrap();
    assert_eq!(scheduler.spawned(), 1);
    assert!((after.as_secs_f64() - before.as_secs_f64() * 4.0).abs() < 1e-6);
}

#[test]
fn rhythmic_spawn_position_comes_from_dice() {
    let mut surface = MemorySurface::new(400.0, 300.0);
    let mut bank = RecordingSoundBank::new(12);
    let dice = ScriptedDice::new()
        .index_fallback(QUARTER_INDEX)
        .units([0.0, 0.5, 0.99, 0.25]);
    let mut scheduler = SpawnScheduler::new(&config(SpawnPolicy::Rhythmic), dice);

    scheduler.update(ms(500), &mut surface, &mut bank);
    scheduler.update(ms(500), &mut surface, &mut bank);

    let positions: Vec<Vec2> = scheduler.bubbles().iter().map(|b| b.position()).collect();
    assert_eq!(positions.len(), 2);
    assert_eq!(positions[0], Vec2::new(0.0, 150.0));
    assert!(approx(positions[1].x, 396.0, 1e-3));
    assert!(approx(positions[1].y, 75.0, 1e-3));
    assert_eq!(bank.plays(), &[0, 11]);
}

#[test]
fn ambient_spawns_only_when_roll_matches_trigger() {
    let mut surface = MemorySurface::new(400.0, 300.0);
    let mut bank = RecordingSoundBank::new(12);
    let rolls = [0, 50, 49, 51, 100, 50, 7];
    let dice = ScriptedDice::new().rolls(rolls);
    let mut scheduler =
        SpawnScheduler::new(&config(SpawnPolicy::Ambient { trigger: 50 }), dice);
    assert!(scheduler.next_duration().is_none());

    let mut expected = 0;
    for roll in rolls {
        scheduler.update(ms(16), &mut surface, &mut bank);
        if roll == 50 {
            expected += 1;
        }
        assert_eq!(scheduler.spawned(), expected, "after roll {roll}");
    }
    assert_eq!(expected, 2);
}

#[test]
fn interactive_click_spawns_with_position_note() {
    let mut surface = MemorySurface::new(1024.0, 768.0);
    let mut bank = RecordingSoundBank::new(12);
    let mut scheduler = SpawnScheduler::new(&config(SpawnPolicy::Interactive), ScriptedDice::new());

    assert!(scheduler.click(Vec2::new(0.0, 10.0), &mut surface, &mut bank));
    assert!(scheduler.click(Vec2::new(1023.0, 700.0), &mut surface, &mut bank));
    assert_eq!(bank.plays(), &[0, 11]);
    assert_eq!(scheduler.live_count(), 2);
    assert_eq!(scheduler.bubbles()[1].sound(), 11);
}

#[test]
fn interactive_scheduler_never_spawns_on_its_own() {
    let mut surface = MemorySurface::new(400.0, 300.0);
    let mut bank = RecordingSoundBank::new(12);
    let mut scheduler = SpawnScheduler::new(&config(SpawnPolicy::Interactive), ScriptedDice::new());
    for _ in 0..600 {
        scheduler.update(ms(16), &mut surface, &mut bank);
    }
    assert_eq!(scheduler.spawned(), 0);
}

#[test]
fn clicks_are_ignored_under_timed_policies() {
    let mut surface = MemorySurface::new(400.0, 300.0);
    let mut bank = RecordingSoundBank::new(12);
    let mut scheduler = SpawnScheduler::new(
        &config(SpawnPolicy::Ambient { trigger: 3 }),
        ScriptedDice::new(),
    );
    assert!(!scheduler.click(Vec2::new(10.0, 10.0), &mut surface, &mut bank));
    assert_eq!(scheduler.spawned(), 0);
    assert!(bank.plays().is_empty());
}

#[test]
fn dead_bubbles_are_pruned_without_double_release() {
    let mut surface = MemorySurface::new(400.0, 300.0);
    let mut bank = RecordingSoundBank::new(12);
    let mut cfg = config(SpawnPolicy::Interactive);
    cfg.bubble.duration = ms(100);
    let mut scheduler = SpawnScheduler::new(&cfg, ScriptedDice::new());

    scheduler.click(Vec2::new(10.0, 10.0), &mut surface, &mut bank);
    scheduler.update(ms(50), &mut surface, &mut bank);
    scheduler.click(Vec2::new(20.0, 10.0), &mut surface, &mut bank);
    assert_eq!(scheduler.live_count(), 2);

    scheduler.update(ms(50), &mut surface, &mut bank);
    assert_eq!(scheduler.live_count(), 1);
    assert_eq!(surface.released_count(), 1);

    scheduler.update(ms(50), &mut surface, &mut bank);
    assert_eq!(scheduler.live_count(), 0);
    assert_eq!(surface.released_count(), 2);
    assert_eq!(surface.live_count(), 0);
}

#[test]
fn scheduler_clock_accumulates_elapsed() {
    let mut surface = MemorySurface::new(400.0, 300.0);
    let mut bank = RecordingSoundBank::new(12);
    let mut scheduler = SpawnScheduler::new(&config(SpawnPolicy::Interactive), ScriptedDice::new());
    for _ in 0..10 {
        scheduler.update(ms(16), &mut surface, &mut bank);
    }
    assert_eq!(scheduler.time_alive(), ms(160));
}
