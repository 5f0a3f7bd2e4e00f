// Host-side tests for the particle simulation.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod particles {
        include!("../src/core/particles.rs");
    }
}

use crate::core::constants::*;
use crate::core::particles::*;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn particle(x: f32, y: f32, vx: f32, vy: f32) -> Particle {
    Particle {
        pos: Vec2::new(x, y),
        vel: Vec2::new(vx, vy),
        radius: 1.0,
        opacity: 0.2,
    }
}

#[test]
fn random_field_respects_ranges() {
    let bounds = Vec2::new(1280.0, 720.0);
    let mut rng = StdRng::seed_from_u64(7);
    let field = ParticleField::new(PARTICLE_COUNT, bounds, &mut rng);
    assert_eq!(field.particles().len(), 30);
    for p in field.particles() {
        assert!(p.pos.x >= 0.0 && p.pos.x <= bounds.x);
        assert!(p.pos.y >= 0.0 && p.pos.y <= bounds.y);
        assert!(p.vel.x.abs() <= PARTICLE_SPEED / 2.0);
        assert!(p.vel.y.abs() <= PARTICLE_SPEED / 2.0);
        assert!(p.radius >= 0.8 && p.radius <= 2.0);
        assert!(p.opacity >= 0.1 && p.opacity <= 0.4);
    }
}

#[test]
fn zero_sized_canvas_does_not_panic() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut field = ParticleField::new(5, Vec2::ZERO, &mut rng);
    field.step();
    assert_eq!(field.particles().len(), 5);
}

#[test]
fn left_edge_reflection_keeps_particle_in_bounds() {
    let bounds = Vec2::new(100.0, 100.0);
    let mut p = particle(0.0, 50.0, -0.2, 0.0);
    p.step(bounds);
    assert!(p.pos.x < 0.0);
    assert!(p.vel.x > 0.0, "velocity should flip at the left edge");
    p.step(bounds);
    assert!(p.pos.x >= 0.0 && p.pos.x <= bounds.x);
}

#[test]
fn right_and_bottom_edges_reflect_independently() {
    let bounds = Vec2::new(100.0, 50.0);
    let mut p = particle(99.9, 49.9, 0.2, 0.2);
    p.step(bounds);
    assert!(p.vel.x < 0.0);
    assert!(p.vel.y < 0.0);

    let mut q = particle(99.9, 10.0, 0.2, 0.1);
    q.step(bounds);
    assert!(q.vel.x < 0.0);
    assert!(q.vel.y > 0.0, "y is untouched while inside");
}

#[test]
fn particle_stranded_by_resize_heads_back_inside() {
    let mut field =
        ParticleField::with_particles(vec![particle(900.0, 300.0, 0.2, 0.0)], Vec2::new(1000.0, 600.0));
    field.resize(Vec2::new(800.0, 600.0));
    // position kept after resize
    assert_eq!(field.particles()[0].pos.x, 900.0);

    field.step();
    let vx = field.particles()[0].vel.x;
    assert!(vx < 0.0);
    // keeps heading in; never flips back while still outside
    let mut prev = field.particles()[0].pos.x;
    for _ in 0..2000 {
        field.step();
        let p = field.particles()[0];
        assert!(p.vel.x < 0.0 || p.pos.x <= 800.0);
        if p.pos.x > 800.0 {
            assert!(p.pos.x < prev);
        }
        prev = p.pos.x;
    }
    assert!(field.particles()[0].pos.x <= 800.0);
}

#[test]
fn long_run_stays_near_bounds() {
    let bounds = Vec2::new(640.0, 480.0);
    let mut rng = StdRng::seed_from_u64(99);
    let mut field = ParticleField::new(PARTICLE_COUNT, bounds, &mut rng);
    for _ in 0..10_000 {
        field.step();
    }
    let slack = PARTICLE_SPEED;
    for p in field.particles() {
        assert!(p.pos.x >= -slack && p.pos.x <= bounds.x + slack);
        assert!(p.pos.y >= -slack && p.pos.y <= bounds.y + slack);
    }
}

#[test]
fn fill_style_uses_fixed_hue() {
    let p = particle(0.0, 0.0, 0.0, 0.0);
    assert_eq!(p.fill_style(), "rgba(0, 122, 255, 0.2)");
}
