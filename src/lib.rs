//! Goa or No - a single-page "Will you come to Goa with me?" prompt
//!
//! Core modules:
//! - `evade`: Deterministic evasive-button core (placement sampling, tween)
//! - `confetti`: Particle simulator for the acceptance celebration
//! - `device`: Viewport-width device classification
//! - `telemetry`: Optional fire-and-forget response logging
//! - `share`: WhatsApp share link construction
//!
//! Everything outside `main.rs` is pure and natively testable; the wasm
//! entry point only measures the DOM and paints what the core decides.

pub mod confetti;
pub mod device;
pub mod evade;
pub mod share;
pub mod telemetry;

pub use confetti::ConfettiSim;
pub use device::DeviceType;
pub use evade::{EvadeParams, EvasionController};

/// Interaction tuning constants
pub mod consts {
    /// Inset (px) kept between the decline button and its container edges
    pub const EVADE_PADDING: f32 = 12.0;
    /// A jump must move the button at least this far on one axis
    pub const MIN_DISPLACEMENT: f32 = 24.0;
    /// Rejection-sampling cap before the anti-overlap constraint is relaxed
    pub const MAX_SAMPLE_TRIES: u32 = 30;
    /// Jump tween duration (ms)
    pub const JUMP_DURATION_MS: f64 = 260.0;
    /// Shake visual cue duration (ms)
    pub const SHAKE_DURATION_MS: i32 = 260;
    /// Accept-button pressed cue duration (ms)
    pub const YES_CLICK_FLASH_MS: i32 = 450;
    /// Declines before the taunts give way to the fixed give-in message
    pub const GIVE_IN_THRESHOLD: u32 = 5;

    /// Particles per confetti burst (non-mobile)
    pub const CONFETTI_COUNT: usize = 140;
    /// Downward bias applied to every particle each frame (px)
    pub const CONFETTI_GRAVITY: f32 = 0.2;
    /// Particle speed range (px/frame)
    pub const CONFETTI_SPEED: std::ops::Range<f32> = 4.0..7.5;
    /// Particle half-size range (px)
    pub const CONFETTI_RADIUS: std::ops::Range<f32> = 3.0..6.0;
    /// Particle spin range (deg/frame)
    pub const CONFETTI_SPIN: std::ops::Range<f32> = -6.0..6.0;
    /// Particle lifespan range (frames)
    pub const CONFETTI_LIFE: std::ops::Range<u32> = 60..100;

    /// Viewport widths at or below this are classified mobile
    pub const MOBILE_MAX_WIDTH: f64 = 768.0;
    /// Viewport widths at or below this (and above mobile) are tablets
    pub const TABLET_MAX_WIDTH: f64 = 1024.0;
}
