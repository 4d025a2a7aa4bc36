use crate::rtweekend::INFINITY;

/// Closed scalar range `[min, max]`, used for accepted hit distances and
/// for clamping output intensities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    pub const EMPTY: Self = Self::new(INFINITY, -INFINITY);
    pub const UNIVERSE: Self = Self::new(-INFINITY, INFINITY);

    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn size(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, x: f64) -> bool {
        self.min <= x && x <= self.max
    }

    /// Strict containment; the endpoints themselves are rejected.
    pub fn surrounds(&self, x: f64) -> bool {
        self.min < x && x < self.max
    }

    pub fn clamp(&self, x: f64) -> f64 {
        if x < self.min {
            self.min
        } else if x > self.max {
            self.max
        } else {
            x
        }
    }

    /// Same bounds with a new upper limit.
    pub fn with_max(self, max: f64) -> Self {
        Self::new(self.min, max)
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surrounds_excludes_endpoints() {
        let i = Interval::new(0.001, 10.0);
        assert!(!i.surrounds(0.001));
        assert!(!i.surrounds(10.0));
        assert!(i.surrounds(5.0));
        assert!(i.contains(0.001));
        assert!(i.contains(10.0));
    }

    #[test]
    fn clamp_saturates_inclusively() {
        let i = Interval::new(0.0, 0.999);
        assert_eq!(i.clamp(-1.0), 0.0);
        assert_eq!(i.clamp(2.0), 0.999);
        assert_eq!(i.clamp(0.5), 0.5);
    }

    #[test]
    fn empty_contains_nothing() {
        assert!(!Interval::EMPTY.contains(0.0));
        assert!(Interval::UNIVERSE.contains(1e300));
        assert_eq!(Interval::default(), Interval::EMPTY);
        assert_eq!(Interval::new(2.0, 7.0).size(), 5.0);
    }
}
