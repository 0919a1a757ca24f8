//! Dense matrices over GF(2)

/// Row-major binary matrix, one byte per entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMatrix {
    rows: usize,
    cols: usize,
    data: Vec<u8>,
}

impl BitMatrix {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0; rows * cols],
        }
    }

    pub fn identity(size: usize) -> Self {
        let mut m = Self::zeros(size, size);
        for i in 0..size {
            m.set(i, i, 1);
        }
        m
    }

    /// Single-row matrix
    pub fn row_vector(bits: &[u8]) -> Self {
        Self {
            rows: 1,
            cols: bits.len(),
            data: bits.iter().map(|b| b & 1).collect(),
        }
    }

    /// Single-column matrix
    pub fn column_vector(bits: &[u8]) -> Self {
        Self {
            rows: bits.len(),
            cols: 1,
            data: bits.iter().map(|b| b & 1).collect(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.data[row * self.cols + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        self.data[row * self.cols + col] = value & 1;
    }

    pub fn column(&self, col: usize) -> Vec<u8> {
        (0..self.rows).map(|r| self.get(r, col)).collect()
    }

    /// All entries in row-major order
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn transpose(&self) -> Self {
        let mut t = Self::zeros(self.cols, self.rows);
        for r in 0..self.rows {
            for c in 0..self.cols {
                t.set(c, r, self.get(r, c));
            }
        }
        t
    }

    /// Product with AND as multiply and XOR as add
    ///
    /// Returns `None` if the inner dimensions disagree.
    pub fn mul(&self, rhs: &BitMatrix) -> Option<BitMatrix> {
        if self.cols != rhs.rows {
            return None;
        }
        let mut out = Self::zeros(self.rows, rhs.cols);
        for r in 0..self.rows {
            for c in 0..rhs.cols {
                let v = (0..self.cols).fold(0u8, |acc, k| acc ^ (self.get(r, k) & rhs.get(k, c)));
                out.set(r, c, v);
            }
        }
        Some(out)
    }

    /// `[self | rhs]`; `None` if the row counts differ
    pub fn hstack(&self, rhs: &BitMatrix) -> Option<BitMatrix> {
        if self.rows != rhs.rows {
            return None;
        }
        let mut out = Self::zeros(self.rows, self.cols + rhs.cols);
        for r in 0..self.rows {
            for c in 0..self.cols {
                out.set(r, c, self.get(r, c));
            }
            for c in 0..rhs.cols {
                out.set(r, self.cols + c, rhs.get(r, c));
            }
        }
        Some(out)
    }
}
