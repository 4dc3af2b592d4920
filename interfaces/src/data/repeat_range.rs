use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid repeat range: min {min} is greater than max {max}")]
pub struct InvalidRepeatRange {
    pub min: u32,
    pub max: u32,
}

/// Inclusive bounds for how many times a task repeats in one run.
/// `min == max` gives a fixed count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepeatRange {
    min: u32,
    max: u32,
}

impl RepeatRange {
    pub fn new(min: u32, max: u32) -> Result<Self, InvalidRepeatRange> {
        if min > max {
            return Err(InvalidRepeatRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn fixed(count: u32) -> Self {
        Self {
            min: count,
            max: count,
        }
    }

    pub fn is_fixed(&self) -> bool {
        self.min == self.max
    }

    /// Draws a count uniformly from `[min, max]`.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        if self.is_fixed() {
            return self.min;
        }
        rng.gen_range(self.min..=self.max)
    }
}

impl fmt::Display for RepeatRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_fixed() {
            write!(f, "{}", self.min)
        } else {
            write!(f, "{}..={}", self.min, self.max)
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng as _};

    use super::*;

    #[test]
    fn test_rejects_inverted_bounds() {
        assert_eq!(
            RepeatRange::new(3, 2),
            Err(InvalidRepeatRange { min: 3, max: 2 })
        );
    }

    #[test]
    fn test_draw_stays_within_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        for (min, max) in [(1, 2), (0, 5), (3, 3), (10, 20)] {
            let range = RepeatRange::new(min, max).unwrap();
            for _ in 0..1000 {
                let count = range.draw(&mut rng);
                assert!(min <= count && count <= max, "{count} outside {range}");
            }
        }
    }

    #[test]
    fn test_draw_reaches_both_ends() {
        let mut rng = StdRng::seed_from_u64(1);
        let range = RepeatRange::new(1, 2).unwrap();
        let draws: Vec<u32> = (0..100).map(|_| range.draw(&mut rng)).collect();
        assert!(draws.contains(&1));
        assert!(draws.contains(&2));
    }

    #[test]
    fn test_fixed() {
        let range = RepeatRange::fixed(1);
        assert!(range.is_fixed());
        assert_eq!(range.to_string(), "1");
        assert_eq!(RepeatRange::new(1, 2).unwrap().to_string(), "1..=2");
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(range.draw(&mut rng), 1);
    }
}
