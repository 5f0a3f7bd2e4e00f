use super::constants::*;
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub opacity: f32,
}

impl Particle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, bounds: Vec2) -> Self {
        // gen::<f32>() * extent instead of gen_range so a zero-sized canvas
        // does not produce an empty range.
        Self {
            pos: Vec2::new(rng.gen::<f32>() * bounds.x, rng.gen::<f32>() * bounds.y),
            vel: Vec2::new(
                (rng.gen::<f32>() - 0.5) * PARTICLE_SPEED,
                (rng.gen::<f32>() - 0.5) * PARTICLE_SPEED,
            ),
            radius: rng.gen::<f32>() * PARTICLE_RADIUS_SPAN + PARTICLE_RADIUS_MIN,
            opacity: rng.gen::<f32>() * PARTICLE_OPACITY_SPAN + PARTICLE_OPACITY_MIN,
        }
    }

    /// Move one tick and bounce off the `[0, bounds]` box, one axis at a
    /// time. A component is only flipped while it still points away from
    /// the box, so a particle stranded outside after a resize heads back in
    /// instead of jittering in place.
    #[inline]
    pub fn step(&mut self, bounds: Vec2) {
        self.pos += self.vel;
        self.vel.x = reflect(self.pos.x, self.vel.x, bounds.x);
        self.vel.y = reflect(self.pos.y, self.vel.y, bounds.y);
    }

    pub fn fill_style(&self) -> String {
        let [r, g, b] = PARTICLE_RGB;
        format!("rgba({}, {}, {}, {})", r, g, b, self.opacity)
    }
}

#[inline]
fn reflect(p: f32, v: f32, max: f32) -> f32 {
    if (p < 0.0 && v < 0.0) || (p > max && v > 0.0) {
        -v
    } else {
        v
    }
}

/// Fixed-size set of drifting particles on a `bounds`-sized surface.
#[derive(Clone, Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: Vec2,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(count: usize, bounds: Vec2, rng: &mut R) -> Self {
        let particles = (0..count).map(|_| Particle::random(&mut *rng, bounds)).collect();
        Self { particles, bounds }
    }

    pub fn with_particles(particles: Vec<Particle>, bounds: Vec2) -> Self {
        Self { particles, bounds }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    /// New surface size. Positions are kept as-is; anything now outside is
    /// pulled back by the regular bounce.
    pub fn resize(&mut self, bounds: Vec2) {
        self.bounds = bounds;
    }

    pub fn step(&mut self) {
        let bounds = self.bounds;
        for p in &mut self.particles {
            p.step(bounds);
        }
    }
}
