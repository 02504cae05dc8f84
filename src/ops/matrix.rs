//! Dense row-major matrices and their product.
//!
//! `multiply_single` walks the output in order; `multiply_parallel` hands each
//! output row to a dedicated rayon pool. Both produce identical results.

use std::fmt;
use std::ops::{Add, Mul};

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::error::{AlgoError, Result};

/// Workers used by the `*` operator.
const MUL_THREADS: u8 = 4;

/// Element bound shared by both multiplication paths.
pub trait Element: Add<Output = Self> + Mul<Output = Self> + Copy + Default + fmt::Display {}

impl<T> Element for T where T: Add<Output = T> + Mul<Output = T> + Copy + Default + fmt::Display {}

/// Row-major matrix. Always non-empty with `data.len() == rows * cols`.
#[derive(Clone, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: fmt::Display> Matrix<T> {
    /// Wrap a row-major buffer. Fails unless `data.len() == rows * cols` and
    /// both dimensions are non-zero.
    pub fn new(data: impl Into<Vec<T>>, rows: usize, cols: usize) -> Result<Self> {
        let data = data.into();
        if rows == 0 || cols == 0 {
            return Err(AlgoError::invalid(
                "matrix must have at least one row and one column",
            ));
        }
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(AlgoError::invalid(format!(
                "matrix data has {} elements, expected {rows}x{cols}",
                data.len()
            )));
        }
        Ok(Self { data, rows, cols })
    }

    /// Build from nested rows, rejecting empty or ragged input.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let row_count = rows.len();
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        if let Some(bad) = rows.iter().position(|r| r.len() != cols) {
            return Err(AlgoError::invalid(format!(
                "row {bad} has {} columns, expected {cols}",
                rows[bad].len()
            )));
        }
        let data: Vec<T> = rows.into_iter().flatten().collect();
        Self::new(data, row_count, cols)
    }

}

impl<T> Matrix<T> {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn into_data(self) -> Vec<T> {
        self.data
    }

    #[inline]
    fn at(&self, row: usize, col: usize) -> &T {
        &self.data[row * self.cols + col]
    }
}

fn check_dims<T>(a: &Matrix<T>, b: &Matrix<T>) -> Result<()> {
    if a.cols != b.rows {
        return Err(AlgoError::invalid(format!(
            "cannot multiply {}x{} by {}x{}",
            a.rows, a.cols, b.rows, b.cols
        )));
    }
    Ok(())
}

/// Fill one output row: out[j] = sum_k a[i][k] * b[k][j].
fn fill_row<T: Element>(a: &Matrix<T>, b: &Matrix<T>, i: usize, out: &mut [T]) {
    for (j, cell) in out.iter_mut().enumerate() {
        let mut acc = T::default();
        for k in 0..a.cols {
            acc = acc + *a.at(i, k) * *b.at(k, j);
        }
        *cell = acc;
    }
}

pub fn multiply_single<T: Element>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    check_dims(a, b)?;
    debug!(a_rows = a.rows, a_cols = a.cols, b_cols = b.cols, "multiply_single");

    let mut data = vec![T::default(); a.rows * b.cols];
    for (i, row) in data.chunks_mut(b.cols).enumerate() {
        fill_row(a, b, i, row);
    }

    Ok(Matrix {
        data,
        rows: a.rows,
        cols: b.cols,
    })
}

/// Multiply on a pool of `num_threads` workers (0 is treated as 1).
///
/// Falls back to the sequential path if the pool cannot be built.
pub fn multiply_parallel<T>(a: &Matrix<T>, b: &Matrix<T>, num_threads: u8) -> Result<Matrix<T>>
where
    T: Element + Send + Sync,
{
    check_dims(a, b)?;
    let num_threads = if num_threads == 0 {
        1
    } else {
        num_threads as usize
    };
    debug!(
        a_rows = a.rows,
        a_cols = a.cols,
        b_cols = b.cols,
        num_threads,
        "multiply_parallel"
    );

    let pool = match rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build()
    {
        Ok(pool) => pool,
        Err(err) => {
            warn!(%err, "thread pool unavailable, multiplying sequentially");
            return multiply_single(a, b);
        }
    };

    let mut data = vec![T::default(); a.rows * b.cols];
    pool.install(|| {
        data.par_chunks_mut(b.cols)
            .enumerate()
            .for_each(|(i, row)| fill_row(a, b, i, row));
    });

    Ok(Matrix {
        data,
        rows: a.rows,
        cols: b.cols,
    })
}

impl<T> Mul for Matrix<T>
where
    T: Element + Send + Sync,
{
    type Output = Matrix<T>;

    /// Multiplies on a small worker pool. Panics when the inner dimensions
    /// disagree; use [`multiply_parallel`] to get an error instead.
    fn mul(self, rhs: Self) -> Self::Output {
        match multiply_parallel(&self, &rhs, MUL_THREADS) {
            Ok(product) => product,
            Err(err) => panic!("{err}"),
        }
    }
}

// {1 2 3, 4 5 6} for a 2x3 matrix
impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, row) in self.data.chunks(self.cols).enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{value}")?;
            }
        }
        write!(f, "}}")
    }
}

impl<T: fmt::Display> fmt::Debug for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Matrix(rows={}, cols={}, {})", self.rows, self.cols, self)
    }
}
