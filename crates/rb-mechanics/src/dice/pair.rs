//! A single outcome of rolling both battle dice.

use serde::{Deserialize, Serialize};

/// The values shown by the two battle dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FacePair {
    /// Value on the first die.
    pub first: u32,
    /// Value on the second die.
    pub second: u32,
}

impl FacePair {
    /// Create a face pair from two die values.
    pub fn new(first: u32, second: u32) -> Self {
        Self { first, second }
    }

    /// The higher of the two values.
    pub fn high(&self) -> u32 {
        self.first.max(self.second)
    }

    /// The lower of the two values.
    pub fn low(&self) -> u32 {
        self.first.min(self.second)
    }

    /// Absolute difference between the two values.
    pub fn difference(&self) -> u32 {
        self.first.abs_diff(self.second)
    }
}

impl std::fmt::Display for FacePair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.first, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_and_low() {
        let pair = FacePair::new(1, 3);
        assert_eq!(pair.high(), 3);
        assert_eq!(pair.low(), 1);

        let swapped = FacePair::new(3, 1);
        assert_eq!(swapped.high(), 3);
        assert_eq!(swapped.low(), 1);
    }

    #[test]
    fn difference_is_symmetric() {
        assert_eq!(FacePair::new(0, 3).difference(), 3);
        assert_eq!(FacePair::new(3, 0).difference(), 3);
        assert_eq!(FacePair::new(2, 2).difference(), 0);
    }

    #[test]
    fn display() {
        assert_eq!(FacePair::new(2, 0).to_string(), "[2, 0]");
    }
}
