//! Evasive decline-button core
//!
//! All placement logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Layout measured by the caller, passed in by value
//! - No rendering or platform dependencies

pub mod geometry;
pub mod state;
pub mod tween;

pub use geometry::{Rect, placement_span};
pub use state::{
    EvadeParams, EvasionController, GIVE_IN_MESSAGE, Jump, Layout, TAUNTS,
};
pub use tween::{Tween, ease_out_quad};
