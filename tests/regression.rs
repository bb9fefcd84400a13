extern crate predict_ml;

#[cfg(test)]
mod tests {
    use predict_ml::matrices::Matrix;
    use predict_ml::matrices::operations::{combine_columns, multiply_vector};
    use predict_ml::prediction::{Formula, PredictionData};

    #[test]
    fn check_feature_matrix_layout() {
        let data = PredictionData::new(vec![2104.0, 1416.0, 1534.0, 852.0]);
        assert_eq!(data.data(), &[2104.0, 1416.0, 1534.0, 852.0]);
        assert_eq!(data.to_matrix(), Matrix::from(vec![
            vec![1.0, 2104.0],
            vec![1.0, 1416.0],
            vec![1.0, 1534.0],
            vec![1.0, 852.0],
        ]));
    }

    #[test]
    fn check_hypothesis_vector_layout() {
        let formula = Formula::new(0.25, -40.0);
        assert_eq!(formula.to_matrix(), Matrix::from(vec![vec![-40.0], vec![0.25]]));
    }

    #[test]
    fn check_default_formula_is_identity() {
        // the default hypothesis 1 * x + 0 predicts each sample unchanged
        let data = PredictionData::new(vec![2104.0, 1416.0, 1534.0, 852.0]);
        let formula: Formula<f64> = Formula::default();
        let predictions = multiply_vector(&data.to_matrix(), &formula.to_matrix());
        assert_eq!(predictions, Matrix::column(vec![2104.0, 1416.0, 1534.0, 852.0]));
    }

    #[test]
    fn check_predictions_scenario() {
        let data = PredictionData::new(vec![2104.0, 1416.0, 1534.0, 852.0]);
        let formula = Formula::new(0.25, -40.0);
        let predictions = multiply_vector(&data.to_matrix(), &formula.to_matrix());
        assert_eq!(predictions, Matrix::column(vec![486.0, 314.0, 343.5, 173.0]));
    }

    #[test]
    fn check_stacked_hypotheses_match_individual_predictions() {
        let data = PredictionData::new(vec![2104.0, 1416.0, 1534.0, 852.0]);
        let formulas = [
            Formula::new(0.25, -40.0),
            Formula::new(0.1, 200.0),
            Formula::new(0.4, -150.0),
        ];
        let features = data.to_matrix();

        let hypotheses = combine_columns(&[
            formulas[0].to_matrix(),
            formulas[1].to_matrix(),
            formulas[2].to_matrix(),
        ]);
        assert_eq!((2, 3), hypotheses.size());

        let all_predictions = &features * &hypotheses;
        assert_eq!((4, 3), all_predictions.size());

        // multiplying by the stacked matrix is the same as predicting with each
        // hypothesis vector separately and stacking the results
        let separately = combine_columns(&[
            multiply_vector(&features, &formulas[0].to_matrix()),
            multiply_vector(&features, &formulas[1].to_matrix()),
            multiply_vector(&features, &formulas[2].to_matrix()),
        ]);
        assert_eq!(all_predictions, separately);

        assert_eq!(all_predictions, Matrix::from(vec![
            vec![486.0, 410.4, 691.6],
            vec![314.0, 341.6, 416.4],
            vec![343.5, 353.4, 463.6],
            vec![173.0, 285.2, 190.8],
        ]));
    }
}
