//! Matrix engine: multiply, transpose, submatrix extraction and cofactor
//! determinants over square, row-major matrices.
//!
//! Integer matrices use wrapping `i64` arithmetic. The benchmark pipeline
//! chains three products at sizes up to 500, which overflows any fixed
//! width; wrapping keeps the results well defined and the algebra exact
//! modulo 2^64.

use rand::Rng;
use std::time::Instant;

use crate::error::{WorkloadError, WorkloadResult};
use crate::primitives::{random_matrix, MATRIX_VALUE_RANGE};
use crate::report::{MatrixReport, MatrixStageTimings};

/// An `n × n` matrix stored row-major
#[derive(Debug, Clone, PartialEq)]
pub struct SquareMatrix<T> {
    n: usize,
    cells: Vec<T>,
}

impl<T: Copy> SquareMatrix<T> {
    /// Matrix with every cell set to `value`
    pub fn filled(n: usize, value: T) -> Self {
        Self {
            n,
            cells: vec![value; n * n],
        }
    }

    pub(crate) fn from_row_major(n: usize, cells: Vec<T>) -> Self {
        debug_assert_eq!(cells.len(), n * n);
        Self { n, cells }
    }

    /// Build from nested rows; every row must have as many cells as there are rows
    pub fn from_rows(rows: Vec<Vec<T>>) -> WorkloadResult<Self> {
        let n = rows.len();
        if let Some(bad) = rows.iter().find(|row| row.len() != n) {
            return Err(WorkloadError::invalid_parameter(
                "rows",
                format!("expected {} cells per row, found {}", n, bad.len()),
            ));
        }
        Ok(Self {
            n,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    pub fn size(&self) -> usize {
        self.n
    }

    pub fn get(&self, row: usize, col: usize) -> T {
        self.cells[row * self.n + col]
    }

    /// Iterate over rows as slices
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.n.max(1))
    }

    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.rows().map(<[T]>::to_vec).collect()
    }

    /// New matrix with rows and columns swapped
    pub fn transpose(&self) -> Self {
        let n = self.n;
        let mut cells = Vec::with_capacity(n * n);
        for col in 0..n {
            for row in 0..n {
                cells.push(self.get(row, col));
            }
        }
        Self { n, cells }
    }

    /// The `(n-1) × (n-1)` matrix left after deleting `row` and `col`
    pub fn minor(&self, row: usize, col: usize) -> Self {
        let n = self.n.saturating_sub(1);
        let cells = self
            .rows()
            .enumerate()
            .filter(|(r, _)| *r != row)
            .flat_map(|(_, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .filter(|(c, _)| *c != col)
                    .map(|(_, v)| *v)
            })
            .collect();
        Self { n, cells }
    }

    /// Apply `f` to every cell
    pub fn map<U>(&self, f: impl Fn(T) -> U) -> SquareMatrix<U> {
        SquareMatrix {
            n: self.n,
            cells: self.cells.iter().map(|v| f(*v)).collect(),
        }
    }
}

impl SquareMatrix<i64> {
    pub fn identity(n: usize) -> Self {
        let mut m = Self::filled(n, 0);
        for i in 0..n {
            m.cells[i * n + i] = 1;
        }
        m
    }

    /// Triple-loop product, `C[i][j] = Σ_k A[i][k] * B[k][j]`
    pub fn multiply(&self, other: &Self) -> WorkloadResult<Self> {
        if self.n != other.n {
            return Err(WorkloadError::DimensionMismatch {
                left: self.n,
                right: other.n,
            });
        }

        let n = self.n;
        let mut cells = vec![0i64; n * n];
        for i in 0..n {
            for j in 0..n {
                let mut sum = 0i64;
                for k in 0..n {
                    sum = sum.wrapping_add(self.cells[i * n + k].wrapping_mul(other.cells[k * n + j]));
                }
                cells[i * n + j] = sum;
            }
        }
        Ok(Self { n, cells })
    }

    /// Copy the `size × size` block starting at `(row0, col0)` into a float
    /// matrix. Cells that fall outside the source are zero-filled rather
    /// than rejected.
    pub fn extract_submatrix(&self, row0: usize, col0: usize, size: usize) -> SquareMatrix<f64> {
        let mut cells = Vec::with_capacity(size * size);
        for i in 0..size {
            for j in 0..size {
                let (row, col) = (row0 + i, col0 + j);
                let value = if row < self.n && col < self.n {
                    self.get(row, col) as f64
                } else {
                    0.0
                };
                cells.push(value);
            }
        }
        SquareMatrix { n: size, cells }
    }

    /// Wrapping sum of the diagonal
    pub fn trace(&self) -> i64 {
        (0..self.n).fold(0i64, |acc, i| acc.wrapping_add(self.get(i, i)))
    }

    /// Wrapping sum of all cells
    pub fn checksum(&self) -> i64 {
        self.cells.iter().fold(0i64, |acc, v| acc.wrapping_add(*v))
    }
}

impl SquareMatrix<f64> {
    /// Determinant by cofactor expansion along row 0.
    ///
    /// Runs in factorial time; callers must keep `n` small (the HTTP layer
    /// caps it at 10). The empty matrix has determinant 1.
    pub fn determinant(&self) -> f64 {
        match self.n {
            0 => 1.0,
            1 => self.cells[0],
            2 => self.cells[0] * self.cells[3] - self.cells[1] * self.cells[2],
            n => (0..n)
                .map(|j| {
                    let sign = if j % 2 == 0 { 1.0 } else { -1.0 };
                    sign * self.get(0, j) * self.minor(0, j).determinant()
                })
                .sum(),
        }
    }
}

fn elapsed_ns(start: Instant) -> u64 {
    start.elapsed().as_nanos() as u64
}

/// Run the benchmark pipeline on three random `size × size` matrices:
/// `R = (A·B)·C`, then `R·Rᵀ`, then the determinant of its leading
/// `min(size, determinant_max_size)` block.
///
/// The determinant stage is skipped when that block would be empty.
pub fn run_matrix_pipeline<R: Rng + ?Sized>(
    size: usize,
    determinant_max_size: usize,
    rng: &mut R,
) -> WorkloadResult<MatrixReport> {
    let a = random_matrix(size, MATRIX_VALUE_RANGE, rng);
    let b = random_matrix(size, MATRIX_VALUE_RANGE, rng);
    let c = random_matrix(size, MATRIX_VALUE_RANGE, rng);

    let pipeline_start = Instant::now();
    let mut stages = MatrixStageTimings::default();

    let start = Instant::now();
    let ab = a.multiply(&b)?;
    stages.multiply_ab_ns = elapsed_ns(start);

    let start = Instant::now();
    let abc = ab.multiply(&c)?;
    stages.multiply_abc_ns = elapsed_ns(start);

    let start = Instant::now();
    let transposed = abc.transpose();
    stages.transpose_ns = elapsed_ns(start);

    let start = Instant::now();
    let product = abc.multiply(&transposed)?;
    stages.multiply_transpose_ns = elapsed_ns(start);

    let determinant_size = size.min(determinant_max_size);
    let determinant = if determinant_size > 0 {
        let start = Instant::now();
        let det = product.extract_submatrix(0, 0, determinant_size).determinant();
        stages.determinant_ns = Some(elapsed_ns(start));
        Some(det)
    } else {
        None
    };

    let duration_ns = elapsed_ns(pipeline_start);
    tracing::debug!(size, determinant_size, duration_ns, "Matrix pipeline finished");

    Ok(MatrixReport {
        size,
        stages,
        trace: product.trace(),
        checksum: product.checksum(),
        determinant_size,
        determinant,
        duration_ns,
    })
}
