//! Transition engine - the single in-flight swap animation.
//!
//! A transition exists only while one swap is animating; its presence blocks
//! new interactions. Progress is accumulated from tick deltas and eased with
//! an in/out quadratic before the render layer interpolates tile positions.
//! Completion is reported to the engine, which commits the swap (and only
//! then evaluates the win condition).

/// Ease-in-out quadratic: t < 0.5 ? 2t^2 : -1 + (4 - 2t)t.
pub fn ease_in_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

/// One animated swap between two grid positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    a: usize,
    b: usize,
    elapsed_ms: u32,
    duration_ms: u32,
}

impl Transition {
    pub fn new(a: usize, b: usize, duration_ms: u32) -> Self {
        Self {
            a,
            b,
            elapsed_ms: 0,
            duration_ms: duration_ms.max(1),
        }
    }

    pub fn positions(&self) -> (usize, usize) {
        (self.a, self.b)
    }

    /// Advance by a tick delta. Returns true once the animation has finished.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        self.is_complete()
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }

    /// Linear progress in [0, 1].
    pub fn raw_progress(&self) -> f32 {
        (self.elapsed_ms as f32 / self.duration_ms as f32).clamp(0.0, 1.0)
    }

    /// Eased progress for position interpolation.
    pub fn progress(&self) -> f32 {
        ease_in_out_quad(self.raw_progress())
    }
}
