use std::fmt;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Column layout of a benchmark table
// ---------------------------------------------------------------------------

/// Column holding the partition selector (`0` = baseline, `1` = variant).
pub const SELECTOR: usize = 0;
/// Column holding the input width (x axis).
pub const WIDTH: usize = 1;
/// Column holding the measured metric that is compared.
pub const METRIC: usize = 3;

/// Smallest column count a table needs for the ratio computation.
pub const REQUIRED_COLUMNS: usize = METRIC + 1;

// ---------------------------------------------------------------------------
// Partition – which side of the ratio a row belongs to
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Partition {
    /// Rows with selector `0`; numerator of the ratio.
    Baseline,
    /// Rows with selector `1`; denominator of the ratio.
    Variant,
}

impl Partition {
    /// Selector value identifying this partition in column 0.
    pub fn selector(self) -> f64 {
        match self {
            Partition::Baseline => 0.0,
            Partition::Variant => 1.0,
        }
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Partition::Baseline => write!(f, "baseline (selector 0)"),
            Partition::Variant => write!(f, "variant (selector 1)"),
        }
    }
}

// ---------------------------------------------------------------------------
// DataError
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    #[error("line {line}, column {column}: '{token}' is not a number")]
    InvalidNumber {
        line: usize,
        column: usize,
        token: String,
    },
    #[error("line {line}: expected {expected} columns but found {found}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("table has {found} columns, at least {required} are required")]
    TooFewColumns { required: usize, found: usize },
    #[error("no rows in the {0} partition")]
    EmptyPartition(Partition),
    #[error("partition shapes differ: {baseline} baseline rows vs {variant} variant rows")]
    ShapeMismatch { baseline: usize, variant: usize },
}

// ---------------------------------------------------------------------------
// NumericTable – one loaded file
// ---------------------------------------------------------------------------

/// Rectangular, row-major table of `f64` values.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericTable {
    values: Vec<f64>,
    n_rows: usize,
    n_cols: usize,
}

impl NumericTable {
    /// Build a table from parsed rows. All rows must have the same length;
    /// the loader checks that before calling this.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        debug_assert!(rows.iter().all(|r| r.len() == n_cols));
        let values = rows.into_iter().flatten().collect();
        NumericTable {
            values,
            n_rows,
            n_cols,
        }
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Value at (`row`, `col`). Panics when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.n_rows && col < self.n_cols, "index out of bounds");
        self.values[row * self.n_cols + col]
    }

    /// Iterator over all rows in file order.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        // chunks_exact panics on a zero chunk size
        self.values.chunks_exact(self.n_cols.max(1))
    }
}

// ---------------------------------------------------------------------------
// Series – one plotted curve
// ---------------------------------------------------------------------------

/// A labelled curve: x = input width, y = degradation ratio.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub points: Vec<[f64; 2]>,
}

impl Series {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Points with a finite ratio. A zero metric yields `inf` or `NaN`;
    /// those points are left out of the drawn curve and the plot bounds.
    pub fn finite_points(&self) -> Vec<[f64; 2]> {
        self.points
            .iter()
            .filter(|p| p[0].is_finite() && p[1].is_finite())
            .copied()
            .collect()
    }

    /// Min, mean and max of the y values, ignoring NaN.
    /// `None` when no finite comparison is possible.
    pub fn ratio_summary(&self) -> Option<(f64, f64, f64)> {
        let ys: Vec<f64> = self
            .points
            .iter()
            .map(|p| p[1])
            .filter(|y| !y.is_nan())
            .collect();
        if ys.is_empty() {
            return None;
        }
        let min = ys.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = ys.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let mean = ys.iter().sum::<f64>() / ys.len() as f64;
        Some((min, mean, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_layout_is_row_major() {
        let table = NumericTable::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        assert_eq!(table.n_rows(), 2);
        assert_eq!(table.n_cols(), 3);
        assert_eq!(table.get(1, 0), 4.0);
        let rows: Vec<&[f64]> = table.rows().collect();
        assert_eq!(rows, vec![&[1.0, 2.0, 3.0][..], &[4.0, 5.0, 6.0][..]]);
    }

    #[test]
    fn empty_table_has_no_rows() {
        let table = NumericTable::from_rows(Vec::new());
        assert_eq!(table.n_rows(), 0);
        assert_eq!(table.n_cols(), 0);
        assert_eq!(table.rows().count(), 0);
    }

    #[test]
    fn ratio_summary_skips_nan() {
        let series = Series {
            label: "a".into(),
            points: vec![[1.0, 2.0], [2.0, f64::NAN], [3.0, 4.0]],
        };
        assert_eq!(series.ratio_summary(), Some((2.0, 3.0, 4.0)));

        let empty = Series {
            label: "b".into(),
            points: Vec::new(),
        };
        assert_eq!(empty.ratio_summary(), None);
    }

    #[test]
    fn finite_points_drop_inf_and_nan() {
        let series = Series {
            label: "zero-metric".into(),
            points: vec![
                [256.0, 1.5],
                [512.0, f64::INFINITY],
                [1024.0, f64::NAN],
                [2048.0, f64::NEG_INFINITY],
                [4096.0, 0.5],
            ],
        };
        assert_eq!(series.finite_points(), vec![[256.0, 1.5], [4096.0, 0.5]]);
        assert_eq!(series.len(), 5);
    }

    #[test]
    fn error_messages_name_the_problem() {
        let err = DataError::EmptyPartition(Partition::Variant);
        assert_eq!(err.to_string(), "no rows in the variant (selector 1) partition");

        let err = DataError::InvalidNumber {
            line: 3,
            column: 2,
            token: "abc".into(),
        };
        assert_eq!(err.to_string(), "line 3, column 2: 'abc' is not a number");
    }
}
