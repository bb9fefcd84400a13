extern crate predict_ml;

#[cfg(test)]
mod tests {
    use predict_ml::matrices::Matrix;
    use predict_ml::matrices::operations::{combine_columns, multiply_vector};

    #[test]
    fn check_hypothesis_predictions() {
        let features = Matrix::from(vec![
            vec![1.0, 2104.0],
            vec![1.0, 1416.0],
            vec![1.0, 1534.0],
            vec![1.0, 852.0],
        ]);
        let hypothesis = Matrix::from(vec![vec![-40.0], vec![0.25]]);
        let predictions = multiply_vector(&features, &hypothesis);
        assert_eq!((4, 1), predictions.size());
        assert_eq!(predictions, Matrix::column(vec![486.0, 314.0, 343.5, 173.0]));
    }

    #[test]
    fn check_vector_multiply_reads_first_and_last() {
        // a taller vector contributes only its first and last entries
        let matrix = Matrix::from(vec![vec![2.0, 3.0], vec![5.0, 7.0]]);
        let tall_vector = Matrix::column(vec![10.0, 999.0, 2.0]);
        let result = multiply_vector(&matrix, &tall_vector);
        assert_eq!(result, Matrix::column(vec![2.0 * 10.0 + 3.0 * 2.0, 5.0 * 10.0 + 7.0 * 2.0]));

        // likewise a wider matrix contributes only each row's first and last cells
        let wide_matrix = Matrix::from(vec![vec![2.0, 999.0, 3.0]]);
        let vector = Matrix::column(vec![10.0, 2.0]);
        let result = multiply_vector(&wide_matrix, &vector);
        assert_eq!(result, Matrix::column(vec![2.0 * 10.0 + 3.0 * 2.0]));
    }

    #[test]
    fn check_combine_columns() {
        let combined = combine_columns(&[
            Matrix::column(vec![1, 2, 3, 4]),
            Matrix::column(vec![5, 6, 7, 8]),
            Matrix::column(vec![9, 10, 11, 12]),
        ]);
        assert_eq!((4, 3), combined.size());
        // row i of the combined matrix is [a_i, b_i, c_i]
        assert_eq!(combined, Matrix::from(vec![
            vec![1, 5, 9],
            vec![2, 6, 10],
            vec![3, 7, 11],
            vec![4, 8, 12],
        ]));
    }

    #[test]
    fn check_combine_columns_round_trip() {
        let vectors = [
            Matrix::column(vec![1, 2, 3, 4]),
            Matrix::column(vec![5, 6, 7, 8]),
            Matrix::column(vec![9, 10, 11, 12]),
        ];
        let combined = combine_columns(&vectors);
        for (column, vector) in vectors.iter().enumerate() {
            let extracted: Vec<i32> = combined.column_iter(column).collect();
            let original: Vec<i32> = vector.column_iter(0).collect();
            assert_eq!(extracted, original);
        }
    }

    #[test]
    #[should_panic(expected = "No columns defined")]
    fn check_combine_columns_empty_list() {
        combine_columns::<i32>(&[]);
    }

    #[test]
    #[should_panic(expected = "Mismatched Matrices")]
    fn check_combine_columns_mismatched_heights() {
        combine_columns(&[
            Matrix::column(vec![1, 2, 3]),
            Matrix::column(vec![4, 5]),
        ]);
    }

    #[test]
    #[should_panic(expected = "Not column vectors")]
    fn check_combine_columns_rejects_wide_input() {
        combine_columns(&[Matrix::from(vec![vec![1, 2], vec![3, 4]])]);
    }
}
