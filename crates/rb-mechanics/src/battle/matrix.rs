//! Loss matrix indexed by (attacker loss, defender loss).

use serde::Serialize;

/// Occurrence counts of each (attacker loss, defender loss) pair.
///
/// The last row and column form the cap bucket: any loss at or above
/// [`ResultMatrix::cap`] is counted there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultMatrix {
    cap: u32,
    cells: Vec<Vec<u32>>,
}

impl ResultMatrix {
    /// Create an empty matrix with buckets `0..=cap`.
    pub fn new(cap: u32) -> Self {
        let size = cap as usize + 1;
        Self {
            cap,
            cells: vec![vec![0; size]; size],
        }
    }

    /// The loss value that represents "cap or more".
    pub fn cap(&self) -> u32 {
        self.cap
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Count one scenario, bucketing losses beyond the cap.
    pub fn record(&mut self, attacker_loss: u32, defender_loss: u32) {
        let row = attacker_loss.min(self.cap) as usize;
        let col = defender_loss.min(self.cap) as usize;
        self.cells[row][col] += 1;
    }

    /// Count at a cell, or 0 outside the matrix.
    pub fn get(&self, attacker_loss: usize, defender_loss: usize) -> u32 {
        self.cells
            .get(attacker_loss)
            .and_then(|row| row.get(defender_loss))
            .copied()
            .unwrap_or(0)
    }

    /// Rows indexed by attacker loss.
    pub fn rows(&self) -> &[Vec<u32>] {
        &self.cells
    }

    /// Sum of all cells.
    pub fn total(&self) -> u32 {
        self.cells.iter().flatten().sum()
    }

    /// Scenario counts per attacker loss.
    pub fn row_sums(&self) -> Vec<u32> {
        self.cells.iter().map(|row| row.iter().sum()).collect()
    }

    /// Scenario counts per defender loss.
    pub fn col_sums(&self) -> Vec<u32> {
        (0..self.size())
            .map(|col| self.cells.iter().map(|row| row[col]).sum())
            .collect()
    }

    /// A count as a percentage of all recorded scenarios.
    pub fn percent(&self, count: u32) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        f64::from(count) / f64::from(total) * 100.0
    }

    /// Axis label for a bucket; the cap bucket reads e.g. `4+`.
    pub fn label(&self, index: usize) -> String {
        if index == self.cap as usize {
            format!("{index}+")
        } else {
            index.to_string()
        }
    }
}
