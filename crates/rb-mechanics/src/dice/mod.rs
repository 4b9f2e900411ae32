//! The battle die and face-pair enumeration.
//!
//! Both battle dice are identical twelve-sided dice carrying the values
//! 0 to 3, each printed on three faces. Every calculation walks the full
//! 12×12 face space, so duplicated values are counted as separate faces.

pub mod pair;

pub use pair::FacePair;

use rand::Rng;
use rand::rngs::StdRng;

/// A die described by the values printed on its faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Die {
    faces: [u32; 12],
}

impl Die {
    /// The twelve-sided battle die: {0,0,0, 1,1,1, 2,2,2, 3,3,3}.
    pub const BATTLE: Die = Die {
        faces: [0, 0, 0, 1, 1, 1, 2, 2, 2, 3, 3, 3],
    };

    /// The face values in face order.
    pub fn faces(&self) -> &[u32] {
        &self.faces
    }

    /// Returns the number of faces on this die.
    pub fn sides(&self) -> usize {
        self.faces.len()
    }

    /// Distinct face values in ascending order.
    pub fn distinct_values(&self) -> Vec<u32> {
        let mut values = self.faces.to_vec();
        values.sort_unstable();
        values.dedup();
        values
    }

    /// Roll this die once using the given RNG.
    pub fn roll(&self, rng: &mut StdRng) -> u32 {
        self.faces[rng.random_range(0..self.faces.len())]
    }
}

/// Number of equally likely face pairs for two battle dice.
pub const TOTAL_FACE_PAIRS: u32 = 144;

/// Every ordered face pair of the two battle dice, first die index-major.
pub fn face_pairs() -> impl Iterator<Item = FacePair> {
    let first = Die::BATTLE;
    let second = Die::BATTLE;
    first.faces.into_iter().flat_map(move |a| {
        second
            .faces
            .into_iter()
            .map(move |b| FacePair::new(a, b))
    })
}

/// Roll both battle dice once.
pub fn roll_pair(rng: &mut StdRng) -> FacePair {
    let first = Die::BATTLE.roll(rng);
    let second = Die::BATTLE.roll(rng);
    FacePair::new(first, second)
}
