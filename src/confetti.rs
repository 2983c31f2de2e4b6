//! Confetti particle simulator
//!
//! Decorative only: nothing here feeds back into the interaction. The sim
//! advances one step per animation frame and reports when it has drained so
//! the caller can stop rescheduling frames.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::device::DeviceType;

/// Confetti colors (warm sunset palette)
pub const PALETTE: [[u8; 3]; 5] = [
    [0xff, 0xb3, 0x47],
    [0xff, 0x5f, 0x6d],
    [0x24, 0xc6, 0xdc],
    [0xff, 0xff, 0xff],
    [0xff, 0xe2, 0x9f],
];

/// A single confetti square
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub pos: Vec2,
    /// Travel direction (radians)
    pub angle: f32,
    /// px per frame
    pub speed: f32,
    /// Half-size of the square (px)
    pub radius: f32,
    pub color: [u8; 3],
    /// Degrees; rendering converts to radians
    pub rotation: f32,
    /// Degrees per frame
    pub rotation_speed: f32,
    /// Frames lived so far
    pub age: u32,
    /// Frames until expiry
    pub max_age: u32,
}

impl Particle {
    /// Opacity fades linearly from 1 at birth to 0 at expiry
    pub fn alpha(&self) -> f32 {
        (1.0 - self.age as f32 / self.max_age as f32).clamp(0.0, 1.0)
    }
}

/// Burst size for the given device class. Mobile gets none so video
/// playback stays smooth on tight frame budgets.
pub fn burst_count(device: DeviceType) -> usize {
    match device {
        DeviceType::Mobile => 0,
        DeviceType::Tablet | DeviceType::Desktop => CONFETTI_COUNT,
    }
}

/// Particle set plus the RNG that feeds new bursts
#[derive(Debug, Clone)]
pub struct ConfettiSim {
    particles: Vec<Particle>,
    rng: Pcg32,
}

impl ConfettiSim {
    pub fn new(seed: u64) -> Self {
        Self {
            particles: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Replace the particle set with a fresh burst at `origin`
    pub fn burst(&mut self, origin: Vec2, count: usize) {
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            self.particles.push(Particle {
                pos: origin,
                angle: self.rng.random_range(0.0..std::f32::consts::TAU),
                speed: self.rng.random_range(CONFETTI_SPEED),
                radius: self.rng.random_range(CONFETTI_RADIUS),
                color: PALETTE[self.rng.random_range(0..PALETTE.len())],
                rotation: self.rng.random_range(0.0..360.0),
                rotation_speed: self.rng.random_range(CONFETTI_SPIN),
                age: 0,
                max_age: self.rng.random_range(CONFETTI_LIFE),
            });
        }
    }

    /// Advance every particle one frame and drop the expired ones
    pub fn tick(&mut self) {
        for p in &mut self.particles {
            p.pos.x += p.angle.cos() * p.speed;
            p.pos.y += p.angle.sin() * p.speed + CONFETTI_GRAVITY;
            p.rotation += p.rotation_speed;
            p.age += 1;
        }
        self.particles.retain(|p| p.age < p.max_age);
    }

    /// True while any particle is alive; the frame loop stops when this
    /// goes false.
    pub fn is_active(&self) -> bool {
        !self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_count_per_device() {
        assert_eq!(burst_count(DeviceType::Mobile), 0);
        assert_eq!(burst_count(DeviceType::Tablet), CONFETTI_COUNT);
        assert_eq!(burst_count(DeviceType::Desktop), CONFETTI_COUNT);
    }

    #[test]
    fn test_burst_allocates_requested_particles() {
        let mut sim = ConfettiSim::new(1);
        sim.burst(Vec2::new(320.0, 160.0), 140);
        assert_eq!(sim.particles().len(), 140);
        assert!(sim.is_active());
        for p in sim.particles() {
            assert_eq!(p.pos, Vec2::new(320.0, 160.0));
            assert!(CONFETTI_SPEED.contains(&p.speed));
            assert!(CONFETTI_RADIUS.contains(&p.radius));
            assert!(CONFETTI_LIFE.contains(&p.max_age));
            assert!(PALETTE.contains(&p.color));
        }
    }

    #[test]
    fn test_zero_burst_is_inert() {
        let mut sim = ConfettiSim::new(1);
        sim.burst(Vec2::ZERO, 0);
        assert!(!sim.is_active());
        sim.tick();
        assert!(!sim.is_active());
    }

    #[test]
    fn test_alpha_fades_to_zero() {
        let mut sim = ConfettiSim::new(77);
        sim.burst(Vec2::ZERO, 1);

        let mut p = sim.particles()[0];
        assert_eq!(p.alpha(), 1.0);

        // Alpha is non-increasing over the particle's whole life and hits
        // exactly zero at expiry
        let mut prev = p.alpha();
        for _ in 0..p.max_age {
            p.age += 1;
            assert!(p.alpha() <= prev);
            prev = p.alpha();
        }
        assert_eq!(p.alpha(), 0.0);
    }

    #[test]
    fn test_sim_drains_within_max_life() {
        let mut sim = ConfettiSim::new(3);
        sim.burst(Vec2::ZERO, 140);

        let longest = sim.particles().iter().map(|p| p.max_age).max().unwrap();
        for _ in 0..longest {
            sim.tick();
        }
        assert!(!sim.is_active());
    }

    #[test]
    fn test_gravity_pulls_down() {
        let mut sim = ConfettiSim::new(9);
        sim.burst(Vec2::ZERO, 50);
        let before: Vec<Vec2> = sim.particles().iter().map(|p| p.pos).collect();
        sim.tick();
        for (p, &start) in sim.particles().iter().zip(&before) {
            let expected = start
                + Vec2::new(p.angle.cos(), p.angle.sin()) * p.speed
                + Vec2::new(0.0, CONFETTI_GRAVITY);
            assert!((p.pos - expected).length() < 1e-4);
        }
    }
}
