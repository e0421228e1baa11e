//! Particle field (stateful).

use std::ops::RangeInclusive;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::chars::PARTICLE_CHARS;

/// Most particles alive at once.
pub const MAX_PARTICLES: usize = 15;

/// Chance per tick of spawning a particle while below the cap.
const SPAWN_CHANCE: f64 = 0.3;

/// Lifetime of a new particle, in ticks.
const LIFE_RANGE: RangeInclusive<i32> = 20..=60;

/// Progress above which a particle is still fading in.
const FADE_IN_ABOVE: f32 = 0.7;
/// Progress below which a particle is fading out.
const FADE_OUT_BELOW: f32 = 0.3;

/// Seed taken from the system clock, for runs that should differ.
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// A single decorative sparkle.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Column in terminal cells.
    x: u16,
    /// Row in terminal cells.
    y: u16,
    /// Ticks left to live.
    life: i32,
    /// Lifetime the particle was created with.
    max_life: i32,
    /// Glyph the particle is drawn with.
    glyph: char,
}

impl Particle {
    pub fn new(x: u16, y: u16, life: i32, glyph: char) -> Self {
        Self {
            x,
            y,
            life,
            max_life: life,
            glyph,
        }
    }

    pub fn x(&self) -> u16 {
        self.x
    }

    pub fn y(&self) -> u16 {
        self.y
    }

    pub fn glyph(&self) -> char {
        self.glyph
    }

    pub fn life(&self) -> i32 {
        self.life
    }

    pub fn max_life(&self) -> i32 {
        self.max_life
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0
    }

    /// Brightness in `0.0..=1.0`: ramps up over the first 30% of the
    /// lifetime, holds, then ramps down over the last 30%.
    pub fn brightness(&self) -> f32 {
        if self.max_life <= 0 {
            return 0.0;
        }
        let progress = self.life as f32 / self.max_life as f32;
        let brightness = if progress > FADE_IN_ABOVE {
            (1.0 - progress) / (1.0 - FADE_IN_ABOVE)
        } else if progress < FADE_OUT_BELOW {
            progress / FADE_OUT_BELOW
        } else {
            1.0
        };
        brightness.clamp(0.0, 1.0)
    }

    fn tick(&mut self) {
        self.life -= 1;
    }
}

/// Owns the live particles and the random source that spawns them.
#[derive(Debug)]
pub struct ParticleSystem<R = StdRng> {
    particles: Vec<Particle>,
    rng: R,
}

impl ParticleSystem<StdRng> {
    /// A particle system driven by a `StdRng` seeded with `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ParticleSystem<R> {
    pub fn new(rng: R) -> Self {
        Self {
            particles: Vec::with_capacity(MAX_PARTICLES),
            rng,
        }
    }

    /// Run one tick: sweep particles that expired last tick, maybe spawn a
    /// new one inside `width` x `height`, then age every particle.
    ///
    /// A particle whose life reaches zero this tick is still returned, with
    /// brightness 0, and is swept on the next call.
    pub fn advance(&mut self, width: u16, height: u16) -> &[Particle] {
        self.particles.retain(Particle::is_alive);

        if self.particles.len() < MAX_PARTICLES
            && width > 0
            && height > 0
            && self.rng.gen_bool(SPAWN_CHANCE)
        {
            let particle = self.spawn(width, height);
            self.particles.push(particle);
        }

        for particle in &mut self.particles {
            particle.tick();
        }

        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    fn spawn(&mut self, width: u16, height: u16) -> Particle {
        let x = self.rng.gen_range(0..width);
        let y = self.rng.gen_range(0..height);
        let life = self.rng.gen_range(LIFE_RANGE);
        let glyph = PARTICLE_CHARS[self.rng.gen_range(0..PARTICLE_CHARS.len())];
        Particle::new(x, y, life, glyph)
    }
}
