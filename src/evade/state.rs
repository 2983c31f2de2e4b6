//! Evasive-button controller
//!
//! Pure and deterministic: the wasm layer measures the DOM, hands the
//! measurements over, and applies whatever position comes back. Seeded RNG
//! only, so every jump sequence is reproducible in tests.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::geometry::{Rect, placement_span};
use super::tween::Tween;
use crate::consts::*;

/// Taunts shown while the user keeps trying to decline
pub const TAUNTS: [&str; 6] = [
    "Try again 😜",
    "You know you want to 😉",
    "Goa is calling 📞",
    "The beach misses you 🌴",
    "Sunsets > excuses 🌅",
    "Come on, live a little ✨",
];

/// Shown once the decline count reaches [`GIVE_IN_THRESHOLD`]
pub const GIVE_IN_MESSAGE: &str =
    "Okay, you tried. Maybe Goa on the Yes side isn't such a bad idea 😇";

/// Placement tuning, overridable in tests
#[derive(Debug, Clone, Copy)]
pub struct EvadeParams {
    /// Inset kept between the button and the container edges
    pub padding: f32,
    /// Minimum move on at least one axis for a jump to feel like a jump
    pub min_displacement: f32,
    /// Sampling attempts before the anti-overlap constraint is relaxed
    pub max_tries: u32,
    /// Jump tween duration (ms)
    pub jump_duration_ms: f64,
}

impl Default for EvadeParams {
    fn default() -> Self {
        Self {
            padding: EVADE_PADDING,
            min_displacement: MIN_DISPLACEMENT,
            max_tries: MAX_SAMPLE_TRIES,
            jump_duration_ms: JUMP_DURATION_MS,
        }
    }
}

/// Live layout measurements, taken fresh before every placement decision.
/// All values are container-local pixels.
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    /// Current top-left of the decline button
    pub origin: Vec2,
    /// Container width/height
    pub container: Vec2,
    /// Decline button width/height
    pub control: Vec2,
    /// Bounding box of the accept button (must never be covered)
    pub accept: Rect,
}

/// One accepted relocation: where to animate and what to say
#[derive(Debug, Clone, Copy)]
pub struct Jump {
    pub from: Vec2,
    pub to: Vec2,
    /// 1-based decline count after this jump
    pub attempt: u32,
    pub message: &'static str,
}

/// State machine behind the decline button
#[derive(Debug, Clone)]
pub struct EvasionController {
    params: EvadeParams,
    rng: Pcg32,
    /// Current container-local top-left (tween-interpolated while moving)
    pos: Vec2,
    attempts: u32,
    activated: bool,
    tween: Option<Tween>,
}

impl EvasionController {
    pub fn new(seed: u64) -> Self {
        Self::with_params(seed, EvadeParams::default())
    }

    pub fn with_params(seed: u64, params: EvadeParams) -> Self {
        Self {
            params,
            rng: Pcg32::seed_from_u64(seed),
            pos: Vec2::ZERO,
            attempts: 0,
            activated: false,
            tween: None,
        }
    }

    /// Anchor the controller at the button's measured position. Idempotent;
    /// only the first call takes effect.
    pub fn activate(&mut self, origin: Vec2) {
        if self.activated {
            return;
        }
        self.activated = true;
        self.pos = origin;
    }

    pub fn is_activated(&self) -> bool {
        self.activated
    }

    /// True while a jump tween is in flight. Presses during this window
    /// are dropped entirely.
    pub fn is_moving(&self) -> bool {
        self.tween.is_some()
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn position(&self) -> Vec2 {
        self.pos
    }

    /// Pick a new target and start the jump tween. Returns `None` without
    /// touching any state while a previous jump is still animating.
    pub fn relocate(&mut self, layout: &Layout, now_ms: f64) -> Option<Jump> {
        self.activate(layout.origin);
        if self.tween.is_some() {
            return None;
        }

        let target = self.pick_target(layout);
        self.attempts += 1;
        let message = self.pick_message();

        let jump = Jump {
            from: self.pos,
            to: target,
            attempt: self.attempts,
            message,
        };
        self.tween = Some(Tween::new(
            self.pos,
            target,
            now_ms,
            self.params.jump_duration_ms,
        ));
        Some(jump)
    }

    /// Advance the jump tween. Returns the position to paint this frame,
    /// or `None` once the jump has settled (or none is running).
    pub fn step(&mut self, now_ms: f64) -> Option<Vec2> {
        let tween = self.tween?;
        let (pos, done) = tween.sample(now_ms);
        self.pos = pos;
        if done {
            self.tween = None;
        }
        Some(pos)
    }

    /// Bounded rejection sampling for the next position.
    ///
    /// Preference order: displaced AND clear of the accept button, then
    /// (past `max_tries`) merely displaced, then (past `2 * max_tries`,
    /// reachable only in degenerate containers) whatever came up last.
    fn pick_target(&mut self, layout: &Layout) -> Vec2 {
        let p = self.params;
        let span = Vec2::new(
            placement_span(layout.container.x, layout.control.x, p.padding),
            placement_span(layout.container.y, layout.control.y, p.padding),
        );

        let mut displaced_only: Option<Vec2> = None;
        let mut candidate = Vec2::splat(p.padding);

        for tries in 0..(2 * p.max_tries) {
            candidate = Vec2::new(
                p.padding + self.rng.random::<f32>() * span.x,
                p.padding + self.rng.random::<f32>() * span.y,
            );

            let displaced = (candidate.x - self.pos.x).abs() >= p.min_displacement
                || (candidate.y - self.pos.y).abs() >= p.min_displacement;
            let clear = !Rect::new(candidate, layout.control).intersects(&layout.accept);

            if displaced && clear {
                return candidate;
            }
            if displaced {
                displaced_only.get_or_insert(candidate);
                if tries >= p.max_tries {
                    break;
                }
            }
        }

        displaced_only.unwrap_or(candidate)
    }

    fn pick_message(&mut self) -> &'static str {
        if self.attempts >= GIVE_IN_THRESHOLD {
            GIVE_IN_MESSAGE
        } else {
            TAUNTS[self.rng.random_range(0..TAUNTS.len())]
        }
    }
}
