use super::{MAX_EXTENSION, ScoreDataError};
use crate::profile::{NUM_TRANSITIONS, Transition};
use std::ops::{Index, IndexMut};

/// Allocates a vector of `len` copies of `value`, reporting allocation failure
/// instead of aborting.
#[inline]
pub(crate) fn try_filled<T: Clone>(len: usize, value: T) -> Result<Vec<T>, ScoreDataError> {
    let mut v = Vec::new();
    v.try_reserve_exact(len)?;
    v.resize(len, value);
    Ok(v)
}

/// Copies `src` into a new vector, reporting allocation failure instead of
/// aborting.
#[inline]
pub(crate) fn try_copy<T: Clone>(src: &[T]) -> Result<Vec<T>, ScoreDataError> {
    let mut v = Vec::new();
    v.try_reserve_exact(src.len())?;
    v.extend_from_slice(src);
    Ok(v)
}

/// A dense table of scores with one row per model position and one column per
/// symbol code.
///
/// The table is a single contiguous allocation in row-major order.
#[derive(Clone, PartialEq, Debug)]
pub struct ScoreMatrix<T> {
    data: Vec<T>,
    cols: usize,
}

impl<T: Copy> ScoreMatrix<T> {
    /// Allocates a `rows` by `cols` table filled with `fill`.
    pub(crate) fn try_new(rows: usize, cols: usize, fill: T) -> Result<Self, ScoreDataError> {
        let len = rows.checked_mul(cols).ok_or(ScoreDataError::OutOfMemory)?;
        Ok(ScoreMatrix {
            data: try_filled(len, fill)?,
            cols,
        })
    }

    /// The number of rows (model positions, including row 0).
    #[inline]
    #[must_use]
    pub fn rows(&self) -> usize {
        self.data.len().checked_div(self.cols).unwrap_or(0)
    }

    /// The number of columns (symbol codes).
    #[inline]
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The score at `pos` for `symbol`, or `None` if out of range.
    #[inline]
    #[must_use]
    pub fn get(&self, pos: usize, symbol: usize) -> Option<T> {
        if symbol < self.cols {
            self.data.get(pos * self.cols + symbol).copied()
        } else {
            None
        }
    }

    /// The scores of every symbol at `pos`.
    ///
    /// ## Panics
    ///
    /// `pos` must be less than [`rows`](ScoreMatrix::rows).
    #[inline]
    #[must_use]
    pub fn row(&self, pos: usize) -> &[T] {
        &self.data[pos * self.cols..(pos + 1) * self.cols]
    }

    /// A mutable view of the scores at `pos`.
    ///
    /// ## Panics
    ///
    /// `pos` must be less than [`rows`](ScoreMatrix::rows).
    #[inline]
    pub fn row_mut(&mut self, pos: usize) -> &mut [T] {
        &mut self.data[pos * self.cols..(pos + 1) * self.cols]
    }

    /// The whole table in row-major order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Deep copies the table, reporting allocation failure.
    ///
    /// ## Errors
    ///
    /// [`ScoreDataError::OutOfMemory`] if the copy cannot be allocated.
    pub fn try_clone(&self) -> Result<Self, ScoreDataError> {
        Ok(ScoreMatrix {
            data: try_copy(&self.data)?,
            cols: self.cols,
        })
    }
}

impl<T> Index<(usize, usize)> for ScoreMatrix<T> {
    type Output = T;

    /// Retrieves the score at `(position, symbol)`.
    #[inline]
    fn index(&self, (pos, symbol): (usize, usize)) -> &Self::Output {
        assert!(symbol < self.cols, "symbol code {symbol} is out of range");
        &self.data[pos * self.cols + symbol]
    }
}

impl<T> IndexMut<(usize, usize)> for ScoreMatrix<T> {
    #[inline]
    fn index_mut(&mut self, (pos, symbol): (usize, usize)) -> &mut Self::Output {
        assert!(symbol < self.cols, "symbol code {symbol} is out of range");
        &mut self.data[pos * self.cols + symbol]
    }
}

/// Which representation a [`ScoreTable`] holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScoreMode {
    /// Byte scores for the standard diagonal filter
    Quantized,
    /// Unquantized scores for the index-based diagonal filter
    Float,
}

/// The match emission scores of a [`ScoreData`](super::ScoreData), in exactly
/// one of the two representations.
#[derive(Clone, PartialEq, Debug)]
pub enum ScoreTable {
    Quantized(ScoreMatrix<u8>),
    Float(ScoreMatrix<f32>),
}

impl ScoreTable {
    /// The representation held by the table.
    #[inline]
    #[must_use]
    pub fn mode(&self) -> ScoreMode {
        match self {
            ScoreTable::Quantized(_) => ScoreMode::Quantized,
            ScoreTable::Float(_) => ScoreMode::Float,
        }
    }

    /// The byte scores, if the table is quantized.
    #[inline]
    #[must_use]
    pub fn as_quantized(&self) -> Option<&ScoreMatrix<u8>> {
        match self {
            ScoreTable::Quantized(table) => Some(table),
            ScoreTable::Float(_) => None,
        }
    }

    /// The float scores, if the table is unquantized.
    #[inline]
    #[must_use]
    pub fn as_float(&self) -> Option<&ScoreMatrix<f32>> {
        match self {
            ScoreTable::Float(table) => Some(table),
            ScoreTable::Quantized(_) => None,
        }
    }

    /// The number of rows in the table.
    #[inline]
    #[must_use]
    pub fn rows(&self) -> usize {
        match self {
            ScoreTable::Quantized(table) => table.rows(),
            ScoreTable::Float(table) => table.rows(),
        }
    }

    /// The number of symbol codes per row.
    #[inline]
    #[must_use]
    pub fn cols(&self) -> usize {
        match self {
            ScoreTable::Quantized(table) => table.cols(),
            ScoreTable::Float(table) => table.cols(),
        }
    }

    /// Deep copies the active table, reporting allocation failure.
    ///
    /// ## Errors
    ///
    /// [`ScoreDataError::OutOfMemory`] if the copy cannot be allocated.
    pub fn try_clone(&self) -> Result<Self, ScoreDataError> {
        Ok(match self {
            ScoreTable::Quantized(table) => ScoreTable::Quantized(table.try_clone()?),
            ScoreTable::Float(table) => ScoreTable::Float(table.try_clone()?),
        })
    }
}

/// The direction in which a diagonal is extended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward higher model positions
    Forward,
    /// Toward lower model positions
    Reverse,
}

/// Cumulative best-case extension scores for the internal positions `1..M`.
///
/// Entry `j` of a position's row is the bound for an extension of `j + 1`
/// positions. Rows are non-decreasing.
#[derive(Clone, PartialEq, Debug)]
pub struct ExtensionTable {
    pub(crate) rows: Vec<[f32; MAX_EXTENSION]>,
}

impl ExtensionTable {
    /// Allocates a zeroed table for a model of length `m`.
    pub(crate) fn try_new(m: usize) -> Result<Self, ScoreDataError> {
        Ok(ExtensionTable {
            rows: try_filled(m.saturating_sub(1), [0.0; MAX_EXTENSION])?,
        })
    }

    /// The bounds at internal position `pos`, or `None` if `pos` is not in
    /// `1..M`.
    #[inline]
    #[must_use]
    pub fn get(&self, pos: usize) -> Option<&[f32; MAX_EXTENSION]> {
        pos.checked_sub(1).and_then(|i| self.rows.get(i))
    }

    /// A mutable reference to the bounds at internal position `pos`.
    ///
    /// ## Panics
    ///
    /// `pos` must be in `1..M`.
    #[inline]
    pub fn get_mut(&mut self, pos: usize) -> &mut [f32; MAX_EXTENSION] {
        &mut self.rows[pos - 1]
    }

    /// The number of internal positions covered, `M - 1`.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table covers no positions (a model of length one).
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates over `(position, bounds)` pairs.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[f32; MAX_EXTENSION])> {
        self.rows.iter().enumerate().map(|(i, row)| (i + 1, row))
    }

    /// Deep copies the table, reporting allocation failure.
    ///
    /// ## Errors
    ///
    /// [`ScoreDataError::OutOfMemory`] if the copy cannot be allocated.
    pub fn try_clone(&self) -> Result<Self, ScoreDataError> {
        Ok(ExtensionTable {
            rows: try_copy(&self.rows)?,
        })
    }
}

/// Forward and reverse extension bounds, used to prune diagonals whose score
/// cannot reach the threshold even when extended optimally.
#[derive(Clone, PartialEq, Debug)]
pub struct Extensions {
    pub forward: ExtensionTable,
    pub reverse: ExtensionTable,
}

impl Extensions {
    /// The table for `direction`.
    #[inline]
    #[must_use]
    pub fn table(&self, direction: Direction) -> &ExtensionTable {
        match direction {
            Direction::Forward => &self.forward,
            Direction::Reverse => &self.reverse,
        }
    }

    /// The best score gained by extending `offset` positions (`1..=10`) from
    /// `pos` in `direction`.
    #[inline]
    #[must_use]
    pub fn bound(&self, pos: usize, offset: usize, direction: Direction) -> Option<f32> {
        let j = offset.checked_sub(1)?;
        self.table(direction).get(pos)?.get(j).copied()
    }

    /// Deep copies both tables, reporting allocation failure.
    ///
    /// ## Errors
    ///
    /// [`ScoreDataError::OutOfMemory`] if a copy cannot be allocated.
    pub fn try_clone(&self) -> Result<Self, ScoreDataError> {
        Ok(Extensions {
            forward: self.forward.try_clone()?,
            reverse: self.reverse.try_clone()?,
        })
    }
}

/// Normalized window lengths: how much of the model's insertion budget can be
/// spent to the left (`prefix`) or right (`suffix`) of each position.
#[derive(Clone, PartialEq, Debug)]
pub struct WindowLengths {
    pub(crate) prefix: Vec<f32>,
    pub(crate) suffix: Vec<f32>,
}

impl WindowLengths {
    /// The cumulative prefix budget at `pos`.
    #[inline]
    #[must_use]
    pub fn prefix(&self, pos: usize) -> Option<f32> {
        self.prefix.get(pos).copied()
    }

    /// The cumulative suffix budget at `pos`.
    #[inline]
    #[must_use]
    pub fn suffix(&self, pos: usize) -> Option<f32> {
        self.suffix.get(pos).copied()
    }

    /// All prefix values, indexed `0..=M`.
    #[inline]
    #[must_use]
    pub fn prefixes(&self) -> &[f32] {
        &self.prefix
    }

    /// All suffix values, indexed `0..=M`.
    #[inline]
    #[must_use]
    pub fn suffixes(&self) -> &[f32] {
        &self.suffix
    }

    /// Deep copies both arrays, reporting allocation failure.
    ///
    /// ## Errors
    ///
    /// [`ScoreDataError::OutOfMemory`] if a copy cannot be allocated.
    pub fn try_clone(&self) -> Result<Self, ScoreDataError> {
        Ok(WindowLengths {
            prefix: try_copy(&self.prefix)?,
            suffix: try_copy(&self.suffix)?,
        })
    }
}

/// Per-position transition values for every [`Transition`] kind, stored as a
/// single block of `NUM_TRANSITIONS` rows of length `M + 1`.
#[derive(Clone, PartialEq, Debug)]
pub struct TransitionTable {
    pub(crate) data:   Vec<f32>,
    pub(crate) stride: usize,
}

impl TransitionTable {
    /// Allocates a zeroed table for a model of length `m`.
    pub(crate) fn try_new(m: usize) -> Result<Self, ScoreDataError> {
        let stride = m.checked_add(1).ok_or(ScoreDataError::OutOfMemory)?;
        let len = stride.checked_mul(NUM_TRANSITIONS).ok_or(ScoreDataError::OutOfMemory)?;
        Ok(TransitionTable {
            data: try_filled(len, 0.0)?,
            stride,
        })
    }

    /// The values of `kind` for positions `0..=M`.
    #[inline]
    #[must_use]
    pub fn row(&self, kind: Transition) -> &[f32] {
        let start = usize::from(kind) * self.stride;
        &self.data[start..start + self.stride]
    }

    /// A mutable view of the values of `kind`.
    #[inline]
    pub fn row_mut(&mut self, kind: Transition) -> &mut [f32] {
        let start = usize::from(kind) * self.stride;
        &mut self.data[start..start + self.stride]
    }

    /// The value of `kind` at `pos`, or `None` if `pos` is past the model.
    #[inline]
    #[must_use]
    pub fn get(&self, kind: Transition, pos: usize) -> Option<f32> {
        self.row(kind).get(pos).copied()
    }

    /// Deep copies the table, reporting allocation failure.
    ///
    /// ## Errors
    ///
    /// [`ScoreDataError::OutOfMemory`] if the copy cannot be allocated.
    pub fn try_clone(&self) -> Result<Self, ScoreDataError> {
        Ok(TransitionTable {
            data:   try_copy(&self.data)?,
            stride: self.stride,
        })
    }
}

/// Full-precision emission and transition tables, needed before a filter
/// survivor is scored with Forward/Backward.
#[derive(Clone, PartialEq, Debug)]
pub struct ForwardTables {
    pub emissions:   ScoreMatrix<f32>,
    pub transitions: TransitionTable,
}

impl ForwardTables {
    /// Deep copies both tables, reporting allocation failure.
    ///
    /// ## Errors
    ///
    /// [`ScoreDataError::OutOfMemory`] if a copy cannot be allocated.
    pub fn try_clone(&self) -> Result<Self, ScoreDataError> {
        Ok(ForwardTables {
            emissions:   self.emissions.try_clone()?,
            transitions: self.transitions.try_clone()?,
        })
    }
}
