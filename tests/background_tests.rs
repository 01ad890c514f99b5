// Host-side tests for the background hue cycle.

mod common;

use bubbles_core::*;
use common::*;
use std::time::Duration;

fn cycle(surface: &mut MemorySurface, hue: f32) -> BackgroundCycle {
    BackgroundCycle::new(surface, Duration::from_secs(30), hue)
}

#[test]
fn creates_full_surface_white_rectangle() {
    let mut surface = MemorySurface::new(640.0, 480.0);
    let bg = cycle(&mut surface, 0.3);
    let shape = surface.shape(bg.shape()).unwrap();
    assert_eq!(
        shape.kind,
        ShapeKind::Rectangle {
            origin: glam::Vec2::ZERO,
            size: glam::Vec2::new(640.0, 480.0)
        }
    );
    assert_eq!(shape.fill, Some(Hsl::WHITE));
}

#[test]
fn update_advances_hue_and_recolors() {
    let mut surface = MemorySurface::new(400.0, 300.0);
    let mut bg = cycle(&mut surface, 0.25);
    bg.update(Duration::from_secs(3), &mut surface);
    assert!(approx(bg.hue(), 0.35, 1e-5));

    let fill = surface.shape(bg.shape()).unwrap().fill.unwrap();
    assert_eq!(fill.hue, bg.hue());
    assert_eq!(fill.saturation, BACKGROUND_SATURATION);
    assert_eq!(fill.lightness, BACKGROUND_LIGHTNESS);
}

#[test]
fn hue_wraps_past_one() {
    let mut surface = MemorySurface::new(400.0, 300.0);
    let mut bg = cycle(&mut surface, 0.9);
    bg.update(Duration::from_secs(6), &mut surface);
    assert!(approx(bg.hue(), 0.1, 1e-5), "hue={}", bg.hue());
}

#[test]
fn hue_is_periodic_in_cycle_time() {
    let mut surface = MemorySurface::new(400.0, 300.0);
    let mut bg = cycle(&mut surface, 0.4);
    for _ in 0..60 {
        bg.update(Duration::from_millis(500), &mut surface);
    }
    assert!(approx(bg.hue(), 0.4, 1e-4), "hue={}", bg.hue());
}

#[test]
fn hue_stays_in_unit_interval_for_any_elapsed_sequence() {
    let mut surface = MemorySurface::new(400.0, 300.0);
    let mut bg = cycle(&mut surface, 0.0);
    let mut dice = SeededDice::new(7);
    for i in 0..5_000 {
        // mostly frame-sized steps with the occasional very long stall
        let ms = if i % 97 == 0 {
            (dice.unit() as f64 * 1.0e8) as u64
        } else {
            (dice.unit() * 50.0) as u64
        };
        bg.update(Duration::from_millis(ms), &mut surface);
        let h = bg.hue();
        assert!((0.0..1.0).contains(&h), "hue {h} out of range at step {i}");
    }
}

#[test]
fn exact_full_turn_lands_on_zero_not_one() {
    let mut surface = MemorySurface::new(400.0, 300.0);
    let mut bg = cycle(&mut surface, 0.0);
    bg.update(Duration::from_secs(30), &mut surface);
    assert!(bg.hue() < 1.0);
    assert!(approx(bg.hue(), 0.0, 1e-6));
}

#[test]
fn initial_hue_is_wrapped() {
    let mut surface = MemorySurface::new(400.0, 300.0);
    let bg = cycle(&mut surface, 2.75);
    assert!(approx(bg.hue(), 0.75, 1e-6));
}
