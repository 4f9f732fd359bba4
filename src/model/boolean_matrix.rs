//! Boolean relation between entities and contexts.
//!
//! Rows are entities, columns are contexts (or the other way round after
//! `transpose()`). Each row is a sorted, de-duplicated list of column indices.

use serde::{Deserialize, Serialize};

/// Read-only sparse binary relation, queryable by row.
///
/// This is the contract between the correlation engine and whatever loads
/// the interaction data.
pub trait BooleanMatrix {
    /// Number of rows.
    fn num_rows(&self) -> usize;

    /// Number of columns.
    fn num_columns(&self) -> usize;

    /// Column indices set in `row`, ascending. Rows out of range are empty.
    fn entries_by_row(&self, row: usize) -> &[usize];

    /// Number of columns set in `row`.
    fn num_entries_by_row(&self, row: usize) -> usize {
        self.entries_by_row(row).len()
    }

    /// The same relation with rows and columns swapped.
    fn transpose(&self) -> SparseBooleanMatrix;
}

/// Row-major sparse boolean matrix.
///
/// Deserialization normalizes like `from_rows`: rows are sorted and
/// de-duplicated, and `num_columns` grows to cover every stored index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawSparseBooleanMatrix")]
pub struct SparseBooleanMatrix {
    rows: Vec<Vec<usize>>,
    num_columns: usize,
}

/// Wire form of `SparseBooleanMatrix`, before normalization.
#[derive(Deserialize)]
struct RawSparseBooleanMatrix {
    rows: Vec<Vec<usize>>,
    #[serde(default)]
    num_columns: usize,
}

impl From<RawSparseBooleanMatrix> for SparseBooleanMatrix {
    fn from(raw: RawSparseBooleanMatrix) -> Self {
        let mut matrix = Self::from_rows(raw.rows);
        matrix.num_columns = matrix.num_columns.max(raw.num_columns);
        matrix
    }
}

impl SparseBooleanMatrix {
    /// Empty matrix with a fixed shape.
    pub fn new(num_rows: usize, num_columns: usize) -> Self {
        Self {
            rows: vec![Vec::new(); num_rows],
            num_columns,
        }
    }

    /// Build from per-row column lists. Each row is sorted and de-duplicated;
    /// the column count grows to cover the largest index seen.
    pub fn from_rows(rows: impl IntoIterator<Item = impl IntoIterator<Item = usize>>) -> Self {
        let mut num_columns = 0;
        let rows = rows
            .into_iter()
            .map(|row| {
                let mut row: Vec<usize> = row.into_iter().collect();
                row.sort_unstable();
                row.dedup();
                if let Some(&last) = row.last() {
                    num_columns = num_columns.max(last + 1);
                }
                row
            })
            .collect();
        Self { rows, num_columns }
    }

    /// Build a `num_rows × num_columns` matrix from `(row, column)` pairs.
    /// Shape grows if a pair lies outside it.
    pub fn from_pairs(
        num_rows: usize,
        num_columns: usize,
        pairs: impl IntoIterator<Item = (usize, usize)>,
    ) -> Self {
        let mut matrix = Self::new(num_rows, num_columns);
        for (row, column) in pairs {
            matrix.set(row, column);
        }
        matrix
    }

    /// Set `(row, column)` to true.
    pub fn set(&mut self, row: usize, column: usize) {
        if row >= self.rows.len() {
            self.rows.resize_with(row + 1, Vec::new);
        }
        self.num_columns = self.num_columns.max(column + 1);

        let entries = &mut self.rows[row];
        if let Err(pos) = entries.binary_search(&column) {
            entries.insert(pos, column);
        }
    }

    pub fn contains(&self, row: usize, column: usize) -> bool {
        self.entries_by_row(row).binary_search(&column).is_ok()
    }

    /// Total number of true cells.
    pub fn num_entries(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }
}

impl BooleanMatrix for SparseBooleanMatrix {
    fn num_rows(&self) -> usize {
        self.rows.len()
    }

    fn num_columns(&self) -> usize {
        self.num_columns
    }

    fn entries_by_row(&self, row: usize) -> &[usize] {
        self.rows.get(row).map(Vec::as_slice).unwrap_or(&[])
    }

    fn transpose(&self) -> SparseBooleanMatrix {
        let mut rows = vec![Vec::new(); self.num_columns];
        // Visiting source rows in order keeps every transposed row sorted.
        for (row, columns) in self.rows.iter().enumerate() {
            for &column in columns {
                rows[column].push(row);
            }
        }
        SparseBooleanMatrix {
            rows,
            num_columns: self.rows.len(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
