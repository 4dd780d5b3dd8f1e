//! Animation engine for per-frame eased values.
//!
//! An [`Animation`] is a single scalar chasing a target. The host advances it
//! once per frame with the frame's partial-tick fraction; discrete state
//! changes only ever move the target, never the displayed value.

/// Remaining distance below which an animation snaps onto its target.
pub const SNAP_EPSILON: f32 = 1e-3;

/// Cubic ease-out, `1 - (1 - t)^3`, with `t` clamped to `[0, 1]`.
#[must_use]
pub fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

/// A single animated value.
///
/// Invariant: while inactive, `current == target`. Each [`update`](Self::update)
/// strictly shrinks the remaining distance and never crosses the target.
#[derive(Debug, Clone)]
pub struct Animation {
    /// Current (displayed) value.
    current: f32,
    /// Target value.
    target: f32,
    /// Approach rate.
    rate: f32,
    /// Whether the value is still moving.
    active: bool,
}

impl Animation {
    /// Creates an animation resting at `initial`.
    #[must_use]
    pub fn new(initial: f32, rate: f32) -> Self {
        Self {
            current: initial,
            target: initial,
            rate,
            active: false,
        }
    }

    /// Creates an animation at `initial` already heading for `target`.
    #[must_use]
    pub fn toward(initial: f32, target: f32, rate: f32) -> Self {
        let mut anim = Self::new(initial, rate);
        anim.animate_to(target);
        anim
    }

    /// Returns the current value.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.current
    }

    /// Returns the target value.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Returns true while the value is still moving.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Sets a new target, easing from the current value.
    ///
    /// Calling again with the same target changes nothing.
    pub fn animate_to(&mut self, target: f32) {
        self.target = target;
        if (target - self.current).abs() < SNAP_EPSILON {
            self.current = target;
            self.active = false;
        } else {
            self.active = true;
        }
    }

    /// Jumps straight to `value` without easing.
    pub fn set_value(&mut self, value: f32) {
        self.current = value;
        self.target = value;
        self.active = false;
    }

    /// Advances the animation by one frame.
    ///
    /// `partial_ticks` is the host's interpolation fraction for this frame.
    pub fn update(&mut self, partial_ticks: f32) {
        if !self.active {
            return;
        }

        let delta = self.target - self.current;
        if delta.abs() < SNAP_EPSILON {
            self.snap();
            return;
        }

        let step = (self.rate * partial_ticks.max(0.0) * delta.abs()).min(1.0);
        let shaped = ease_out_cubic(step);
        self.current += delta * shaped;

        if (self.target - self.current).abs() < SNAP_EPSILON {
            self.snap();
        }
    }

    fn snap(&mut self) {
        self.current = self.target;
        self.active = false;
    }
}

impl Default for Animation {
    fn default() -> Self {
        Self::new(0.0, 8.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cubic_out_bounds() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(7.0), 1.0);
        assert_eq!(ease_out_cubic(-3.0), 0.0);
        assert!(ease_out_cubic(0.5) > 0.5, "ease-out front-loads progress");
    }

    #[test]
    fn test_animation_reaches_target() {
        let mut anim = Animation::new(0.0, 10.0);
        anim.animate_to(1.0);

        for _ in 0..1_000 {
            anim.update(0.5);
        }

        assert_eq!(anim.value(), 1.0);
        assert!(!anim.is_active());
    }

    #[test]
    fn test_convergence_is_monotonic() {
        for (start, target) in [(0.0, 1.0), (1.0, 0.0), (-40.0, 12.5), (3.0, 3.5)] {
            let mut anim = Animation::new(start, 2.0);
            anim.animate_to(target);

            let mut last = (target - anim.value()).abs();
            let mut steps = 0;
            while anim.is_active() {
                anim.update(0.25);
                let remaining = (target - anim.value()).abs();
                assert!(remaining <= last, "{start}->{target}: {remaining} > {last}");
                last = remaining;
                steps += 1;
                assert!(steps < 100_000, "{start}->{target} never settled");
            }

            assert_eq!(anim.value(), target);
        }
    }

    #[test]
    fn test_never_overshoots() {
        let mut anim = Animation::new(0.0, 1_000.0);
        anim.animate_to(5.0);
        anim.update(1.0);
        assert!(anim.value() <= 5.0);
    }

    #[test]
    fn test_set_value_skips_easing() {
        let mut anim = Animation::toward(0.0, 1.0, 4.0);
        assert!(anim.is_active());

        anim.set_value(0.25);
        assert_eq!(anim.value(), 0.25);
        assert_eq!(anim.target(), 0.25);
        assert!(!anim.is_active());
    }

    #[test]
    fn test_inactive_update_is_noop() {
        let mut anim = Animation::new(0.7, 8.0);
        anim.update(1.0);
        assert_eq!(anim.value(), 0.7);
    }

    #[test]
    fn test_retarget_midway() {
        let mut anim = Animation::new(1.0, 10.0);
        anim.animate_to(0.0);
        anim.update(0.05);
        let midway = anim.value();
        assert!(midway > 0.0 && midway < 1.0);

        anim.animate_to(1.0);
        assert_eq!(anim.target(), 1.0);
        assert_eq!(anim.value(), midway);
    }
}
