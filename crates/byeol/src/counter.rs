//! Animated count-up for the on-screen particle stat.

/// How long a count-up takes to reach its target.
const DURATION_MS: f32 = 2000.0;

/// Counts from zero toward a target over [`DURATION_MS`], pinning exactly at
/// the target. Restarted whenever the target changes.
#[derive(Debug, Default)]
pub struct CountUp {
    target: usize,
    current: f32,
}

impl CountUp {
    pub fn new(target: usize) -> Self {
        Self {
            target,
            current: 0.0,
        }
    }

    /// Point at a new target and restart the animation. A same-target call
    /// leaves the animation alone.
    pub fn retarget(&mut self, target: usize) {
        if target != self.target {
            self.target = target;
            self.current = 0.0;
        }
    }

    pub fn update(&mut self, delta_ms: u64) {
        let increment = self.target as f32 * delta_ms as f32 / DURATION_MS;
        self.current = (self.current + increment).min(self.target as f32);
    }

    /// Currently displayed value.
    pub fn value(&self) -> usize {
        self.current as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramps_up_and_pins_at_the_target() {
        let mut counter = CountUp::new(32);
        assert_eq!(counter.value(), 0);
        counter.update(1000);
        assert_eq!(counter.value(), 16);
        counter.update(1000);
        assert_eq!(counter.value(), 32);
        counter.update(1000);
        assert_eq!(counter.value(), 32);
    }

    #[test]
    fn retarget_restarts_only_on_change() {
        let mut counter = CountUp::new(32);
        counter.update(2000);
        counter.retarget(32);
        assert_eq!(counter.value(), 32);
        counter.retarget(80);
        assert_eq!(counter.value(), 0);
    }

    #[test]
    fn zero_target_stays_at_zero() {
        let mut counter = CountUp::new(0);
        counter.update(5000);
        assert_eq!(counter.value(), 0);
    }
}
