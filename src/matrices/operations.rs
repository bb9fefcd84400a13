/*!
 * Matrix operations beyond the container itself: hypothesis vector
 * multiplication and column stacking.
 */

use log::debug;

use crate::matrices::Matrix;
use crate::numeric::Numeric;

/**
 * Multiplies each row of a matrix with a 2x1 hypothesis vector, producing an Nx1
 * matrix of predictions.
 *
 * Only the first and last elements of the vector matrix in row major order
 * are read, and likewise only the first and last cells of each row of the left
 * matrix, so for the intended feature matrix rows of `[1, x]` and hypothesis
 * vectors of `[[offset], [scalar]]` each output row is `offset + scalar * x`
 * without needing a general dot product. A vector taller than 2x1 contributes
 * only its first and last entries.
 *
 * ```
 * use predict_ml::matrices::Matrix;
 * use predict_ml::matrices::operations::multiply_vector;
 * let features = Matrix::from(vec![
 *     vec![ 1.0, 2104.0 ],
 *     vec![ 1.0, 1416.0 ]]);
 * let hypothesis = Matrix::from(vec![
 *     vec![ -40.0 ],
 *     vec![ 0.25 ]]);
 * let predictions = multiply_vector(&features, &hypothesis);
 * assert_eq!(predictions, Matrix::column(vec![ 486.0, 314.0 ]));
 * ```
 */
pub fn multiply_vector<T: Numeric>(matrix: &Matrix<T>, vector: &Matrix<T>) -> Matrix<T> {
    debug!(
        "multiplying {}x{} matrix with {}x{} vector",
        matrix.rows(), matrix.columns(), vector.rows(), vector.columns()
    );
    let first = vector.get(0, 0);
    let last = vector.get(vector.rows() - 1, vector.columns() - 1);
    Matrix::from(
        (0..matrix.rows())
            .map(|row| {
                vec![
                    matrix.get(row, 0) * first.clone()
                        + matrix.get(row, matrix.columns() - 1) * last.clone(),
                ]
            })
            .collect(),
    )
}

/**
 * Stacks N column vectors of equal height M side by side into one MxN matrix,
 * where column j of the output is the jth input vector.
 *
 * ```
 * use predict_ml::matrices::Matrix;
 * use predict_ml::matrices::operations::combine_columns;
 * let combined = combine_columns(&[
 *     Matrix::column(vec![ 1, 2 ]),
 *     Matrix::column(vec![ 3, 4 ]),
 *     Matrix::column(vec![ 5, 6 ])]);
 * assert_eq!(combined, Matrix::from(vec![
 *     vec![ 1, 3, 5 ],
 *     vec![ 2, 4, 6 ]]));
 * ```
 *
 * This will panic if the list is empty, if any input is not a single column,
 * or if the inputs do not all have the same number of rows.
 */
pub fn combine_columns<T: Clone>(columns: &[Matrix<T>]) -> Matrix<T> {
    assert!(!columns.is_empty(), "No columns defined");
    assert!(columns.iter().all(|column| column.columns() == 1), "Not column vectors");
    let rows = columns[0].rows();
    assert!(columns.iter().all(|column| column.rows() == rows), "Mismatched Matrices");

    debug!("combining {} column vectors of {} rows", columns.len(), rows);
    let mut combined = Matrix::empty(columns[0].get(0, 0), (rows, columns.len()));
    for (column, vector) in columns.iter().enumerate() {
        for row in 0..rows {
            combined.set(row, column, vector.get(row, 0));
        }
    }
    combined
}
