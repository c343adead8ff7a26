//! Score progression - fixed-cadence score advancement with observers
//!
//! The progression is a small state machine: `Uninitialized` until the first
//! [`ScoreProgression::init`], then `Ready` for the rest of the session.
//! `init` doubles as the session reset. Observers are plain closures held in
//! registration order and invoked synchronously on every score change.

use canvas_boot_types::{BASE_SCORE_INTERVAL, BASE_SCORE_STEP, SCORE_DECAY_RATE};

/// Observer invoked with the new total whenever the score changes.
pub type ScoreHandler = Box<dyn FnMut(u32)>;

/// Time-driven score state machine.
///
/// Owns its state exclusively; mutation happens only inside [`update`].
/// The countdown invariant: `remaining` never permanently stays at or below
/// zero — the same update step that grants points adds the base interval
/// back, carrying any overshoot forward so the cadence stays decay-accurate
/// over a long session instead of resetting drift each grant.
///
/// [`update`]: ScoreProgression::update
pub struct ScoreProgression {
    score: u32,
    remaining: f64,
    base_score: u32,
    base_interval: f64,
    initialized: bool,
    handlers: Vec<ScoreHandler>,
}

impl ScoreProgression {
    /// Create a progression with the standard tuning.
    pub fn new() -> Self {
        Self::with_tuning(BASE_SCORE_STEP, BASE_SCORE_INTERVAL)
    }

    /// Create a progression with explicit tuning values.
    pub fn with_tuning(base_score: u32, base_interval: f64) -> Self {
        Self {
            score: 0,
            remaining: 0.0,
            base_score,
            base_interval,
            initialized: false,
            handlers: Vec::new(),
        }
    }

    /// Start (or restart) a session: score back to zero, countdown refilled.
    ///
    /// Idempotent. Must run before the first [`update`]; updates received
    /// while uninitialized are refused.
    ///
    /// [`update`]: ScoreProgression::update
    pub fn init(&mut self) {
        self.score = 0;
        self.remaining = self.base_interval;
        self.initialized = true;
    }

    /// Advance the countdown by one frame's elapsed time.
    ///
    /// Called once per frame tick. Returns `true` when the score changed
    /// this step. Refuses to run (returns `false`, state untouched) until
    /// [`init`] has been called. Zero elapsed time is a no-op, and negative
    /// elapsed time is a contract violation treated the same way (with a
    /// debug assertion to catch broken callers early).
    ///
    /// On expiry the countdown is replenished by *adding* the base interval,
    /// not resetting to it, so a large elapsed value leaves the overshoot
    /// as a deficit against the next grant.
    ///
    /// [`init`]: ScoreProgression::init
    pub fn update(&mut self, elapsed: f64) -> bool {
        if !self.initialized {
            return false;
        }

        debug_assert!(elapsed >= 0.0, "elapsed time must be non-negative");
        if !(elapsed > 0.0) {
            // No time passed (or negative elapsed, ignored): nothing to do.
            // A carried deficit waits for the next real frame.
            return false;
        }

        self.remaining -= elapsed * SCORE_DECAY_RATE;
        if self.remaining <= 0.0 {
            self.score += self.base_score;
            let score = self.score;
            for handler in &mut self.handlers {
                handler(score);
            }
            self.remaining += self.base_interval;
            return true;
        }

        false
    }

    /// Register a score-change observer.
    ///
    /// Handlers fire synchronously, in registration order, with the new
    /// total. No deduplication; the list lives as long as the progression.
    pub fn on_score_change<F>(&mut self, handler: F)
    where
        F: FnMut(u32) + 'static,
    {
        self.handlers.push(Box::new(handler));
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn initialized(&self) -> bool {
        self.initialized
    }

    /// Remaining time units until the next grant.
    pub fn remaining(&self) -> f64 {
        self.remaining
    }
}

impl Default for ScoreProgression {
    fn default() -> Self {
        Self::new()
    }
}
