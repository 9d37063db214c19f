/// A closed-open range of ray parameters, `[min, max)`.
///
/// Hit distances equal to `min` are admitted. Distances equal to `max` are not.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// An interval from `min` to positive infinity.
    pub const fn from_min(min: f32) -> Self {
        Self::new(min, f32::INFINITY)
    }

    /// Returns true if x is within the interval [min, max) (upper bound excluded).
    #[inline]
    pub fn admits(&self, x: f32) -> bool {
        self.min <= x && x < self.max
    }

    /// Clamps x to be within the interval [min, max].
    #[inline]
    pub fn clamp(&self, x: f32) -> f32 {
        x.clamp(self.min, self.max)
    }

    /// Same interval with a new upper bound.
    #[inline]
    pub fn with_max(self, max: f32) -> Interval {
        Interval::new(self.min, max)
    }

    /// The unit interval [0, 1].
    pub const UNIT: Interval = Interval { min: 0.0, max: 1.0 };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_admits() {
        let interval = Interval::new(0.5, 10.0);

        // Lower bound included, upper bound excluded
        assert!(interval.admits(0.5));
        assert!(interval.admits(5.0));
        assert!(!interval.admits(10.0));

        assert!(!interval.admits(0.4999));
        assert!(!interval.admits(f32::NAN));
    }

    #[test]
    fn test_interval_from_min() {
        let interval = Interval::from_min(1e-4);
        assert!(interval.admits(1e30));
        assert!(!interval.admits(f32::INFINITY));
        assert!(!interval.admits(0.0));
    }

    #[test]
    fn test_interval_with_max() {
        let interval = Interval::from_min(1.0).with_max(4.0);
        assert_eq!(interval, Interval::new(1.0, 4.0));
    }

    #[test]
    fn test_unit_clamp() {
        assert_eq!(Interval::UNIT.clamp(-5.0), 0.0);
        assert_eq!(Interval::UNIT.clamp(0.25), 0.25);
        assert_eq!(Interval::UNIT.clamp(15.0), 1.0);
    }
}
