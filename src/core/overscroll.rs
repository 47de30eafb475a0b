//! Pull-to-stretch past the top of the list.
//!
//! Desktop scrollables stop hard at offset 0, so the positive half of the
//! scroll offset is synthesized here: wheel input at the top edge builds up a
//! pull (with rubber-band resistance), and every frame lets it relax back
//! toward zero with exponential ease-out.

/// Below this many pixels the pull snaps to rest.
const SETTLE_PX: f32 = 0.4;

#[derive(Debug, Clone)]
pub struct Overscroll {
    /// Current stretch in pixels, always in `0..=max_pull`.
    pull: f32,
    max_pull: f32,
    /// Damping per frame: `pull *= 1 - speed`.
    speed: f32,
}

impl Overscroll {
    pub fn new(max_pull: f32, speed: f32) -> Self {
        Self {
            pull: 0.0,
            max_pull: max_pull.max(0.0),
            speed: speed.clamp(0.05, 0.95),
        }
    }

    pub fn pull(&self) -> f32 {
        self.pull
    }

    pub fn max_pull(&self) -> f32 {
        self.max_pull
    }

    /// New ceiling (the image height changed). Clamps the current pull.
    pub fn set_max_pull(&mut self, max_pull: f32) {
        self.max_pull = max_pull.max(0.0);
        self.pull = self.pull.min(self.max_pull);
    }

    /// Apply wheel movement in pixels (positive = pull further down).
    ///
    /// Positive deltas are damped by how close the pull already is to its
    /// ceiling. Negative deltas drain the pull; the part the pull could not
    /// absorb is returned.
    pub fn apply(&mut self, delta: f32) -> f32 {
        if !delta.is_finite() || self.max_pull <= 0.0 {
            return delta;
        }

        if delta >= 0.0 {
            let resistance = 1.0 - self.pull / self.max_pull;
            self.pull = (self.pull + delta * resistance).min(self.max_pull);
            return 0.0;
        }

        let drained = (-delta).min(self.pull);
        self.pull -= drained;
        delta + drained
    }

    /// Relax one frame toward rest.
    pub fn tick(&mut self) {
        self.pull *= 1.0 - self.speed;
        if self.pull < SETTLE_PX {
            self.pull = 0.0;
        }
    }

    pub fn is_animating(&self) -> bool {
        self.pull != 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_rest() {
        let o = Overscroll::new(200.0, 0.25);
        assert_eq!(o.pull(), 0.0);
        assert!(!o.is_animating());
    }

    #[test]
    fn first_pull_is_undamped() {
        let mut o = Overscroll::new(200.0, 0.25);
        assert_eq!(o.apply(40.0), 0.0);
        assert_eq!(o.pull(), 40.0);
    }

    #[test]
    fn resistance_grows_toward_ceiling() {
        let mut o = Overscroll::new(200.0, 0.25);
        o.apply(100.0);
        o.apply(100.0);
        // second step only gets half: 100 * (1 - 100/200)
        assert_eq!(o.pull(), 150.0);

        for _ in 0..100 {
            o.apply(500.0);
        }
        assert!(o.pull() <= o.max_pull());
    }

    #[test]
    fn negative_delta_drains_then_passes_through() {
        let mut o = Overscroll::new(200.0, 0.25);
        o.apply(30.0);

        assert_eq!(o.apply(-10.0), 0.0);
        assert_eq!(o.pull(), 20.0);

        assert_eq!(o.apply(-50.0), -30.0);
        assert_eq!(o.pull(), 0.0);
    }

    #[test]
    fn relaxes_to_exact_zero() {
        let mut o = Overscroll::new(200.0, 0.25);
        o.apply(120.0);

        let mut frames = 0;
        while o.is_animating() {
            let before = o.pull();
            o.tick();
            assert!(o.pull() < before);
            frames += 1;
            assert!(frames < 1000, "pull never settled");
        }
        assert_eq!(o.pull(), 0.0);
    }

    #[test]
    fn shrinking_ceiling_clamps_pull() {
        let mut o = Overscroll::new(200.0, 0.25);
        o.apply(150.0);
        o.set_max_pull(100.0);
        assert_eq!(o.pull(), 100.0);
    }

    #[test]
    fn speed_is_clamped() {
        let mut o = Overscroll::new(100.0, 5.0);
        o.apply(50.0);
        o.tick();
        // 0.95 damping leaves 2.5px
        assert!((o.pull() - 2.5).abs() < 1e-4);
    }

    #[test]
    fn zero_ceiling_passes_everything_through() {
        let mut o = Overscroll::new(0.0, 0.25);
        assert_eq!(o.apply(25.0), 25.0);
        assert_eq!(o.pull(), 0.0);
    }
}
