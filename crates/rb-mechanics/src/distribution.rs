//! Difference distribution of the two battle dice.
//!
//! For every face pair the absolute difference of the two values is
//! bucketed into exact matches (`=0` to `=3`) and thresholds (`>0` to
//! `>2`). Counts are reported as percentages of all 144 face pairs.

use serde::Serialize;

use crate::dice::{TOTAL_FACE_PAIRS, face_pairs};

/// Percentage of face pairs matching each difference predicate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistributionStats {
    /// Difference equals 0.
    pub eq0: f64,
    /// Difference equals 1.
    pub eq1: f64,
    /// Difference equals 2.
    pub eq2: f64,
    /// Difference equals 3.
    pub eq3: f64,
    /// Difference greater than 0.
    pub gt0: f64,
    /// Difference greater than 1.
    pub gt1: f64,
    /// Difference greater than 2.
    pub gt2: f64,
}

impl DistributionStats {
    /// Chart labels and values in display order.
    pub fn entries(&self) -> [(&'static str, f64); 7] {
        [
            ("=0", self.eq0),
            ("=1", self.eq1),
            ("=2", self.eq2),
            ("=3", self.eq3),
            (">0", self.gt0),
            (">1", self.gt1),
            (">2", self.gt2),
        ]
    }
}

#[derive(Default)]
struct Counts {
    eq: [u32; 4],
    gt: [u32; 3],
}

/// Enumerate all face pairs and compute the difference distribution.
pub fn compute_distribution() -> DistributionStats {
    let mut counts = Counts::default();

    for pair in face_pairs() {
        let diff = pair.difference() as usize;
        if let Some(slot) = counts.eq.get_mut(diff) {
            *slot += 1;
        }
        for (threshold, slot) in counts.gt.iter_mut().enumerate() {
            if diff > threshold {
                *slot += 1;
            }
        }
    }

    let pct = |count: u32| f64::from(count) / f64::from(TOTAL_FACE_PAIRS) * 100.0;

    DistributionStats {
        eq0: pct(counts.eq[0]),
        eq1: pct(counts.eq[1]),
        eq2: pct(counts.eq[2]),
        eq3: pct(counts.eq[3]),
        gt0: pct(counts.gt[0]),
        gt1: pct(counts.gt[1]),
        gt2: pct(counts.gt[2]),
    }
}
