/*!
 * Adapters that turn raw samples and linear formulas into the matrices
 * the kernel operates on.
 */

use crate::matrices::Matrix;
use crate::numeric::{Numeric, ZeroOne};

/**
 * A read only list of raw numeric samples to predict against.
 *
 * The samples are fixed at construction; the only thing to do with them is
 * convert to a feature matrix.
 */
#[derive(Clone, Debug)]
pub struct PredictionData<T> {
    data: Vec<T>,
}

impl <T: Numeric> PredictionData<T> {
    /**
     * Creates prediction data from a non empty list of samples.
     */
    pub fn new(data: Vec<T>) -> PredictionData<T> {
        assert!(!data.is_empty(), "No samples defined");
        PredictionData { data }
    }

    /**
     * The raw samples in the order they were provided.
     */
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /**
     * Converts the samples into an Nx2 feature matrix where each row is
     * `[1, sample]`. The leading 1 is the intercept term, lining up with the
     * `[[offset], [scalar]]` layout of a [Formula](./struct.Formula.html)'s
     * hypothesis vector so that multiplying the two computes
     * `offset + scalar * sample` for every row.
     *
     * ```
     * use predict_ml::matrices::Matrix;
     * use predict_ml::prediction::PredictionData;
     * let data = PredictionData::new(vec![ 2104.0, 1416.0 ]);
     * assert_eq!(data.to_matrix(), Matrix::from(vec![
     *     vec![ 1.0, 2104.0 ],
     *     vec![ 1.0, 1416.0 ]]));
     * ```
     */
    pub fn to_matrix(&self) -> Matrix<T> {
        Matrix::from(
            self.data
                .iter()
                .map(|sample| vec![T::one(), sample.clone()])
                .collect(),
        )
    }
}

/**
 * A linear formula `scalar * x + offset` encoded as the pair of its
 * coefficients.
 */
#[derive(Clone, Debug)]
pub struct Formula<T> {
    scalar: T,
    offset: T,
}

impl <T: Numeric> Formula<T> {
    /**
     * Creates a formula from its slope and intercept.
     */
    pub fn new(scalar: T, offset: T) -> Formula<T> {
        Formula { scalar, offset }
    }

    /**
     * Converts the formula into its 2x1 hypothesis vector `[[offset], [scalar]]`.
     * Row 0 holds the intercept and row 1 the slope, matching the `[1, x]` row
     * layout of [PredictionData](./struct.PredictionData.html)'s feature matrix.
     *
     * ```
     * use predict_ml::matrices::Matrix;
     * use predict_ml::prediction::Formula;
     * let formula = Formula::new(0.25, -40.0);
     * assert_eq!(formula.to_matrix(), Matrix::from(vec![
     *     vec![ -40.0 ],
     *     vec![ 0.25 ]]));
     * ```
     */
    pub fn to_matrix(&self) -> Matrix<T> {
        Matrix::from(vec![vec![self.offset.clone()], vec![self.scalar.clone()]])
    }
}

/**
 * The default formula is the identity prediction `1 * x + 0`.
 */
impl <T: Numeric> Default for Formula<T> {
    fn default() -> Formula<T> {
        Formula {
            scalar: T::one(),
            offset: T::zero(),
        }
    }
}
