//! Demo binary printing every stage of a linear prediction as a titled table.

use log::debug;

use predict_ml::matrices::operations::{combine_columns, multiply_vector};
use predict_ml::prediction::{Formula, PredictionData};

fn main() {
    env_logger::init();

    // house sizes in square feet, priced by three candidate linear formulas
    let data = PredictionData::new(vec![2104.0, 1416.0, 1534.0, 852.0]);
    let formula = Formula::new(0.25, -40.0);
    let formula2 = Formula::new(0.1, 200.0);
    let formula3 = Formula::new(0.4, -150.0);

    let features = data.to_matrix();
    debug!("feature matrix is {}x{}", features.rows(), features.columns());

    features.print("Prediction Data");
    formula.to_matrix().print("Hypothesis Vector 1");
    formula2.to_matrix().print("Hypothesis Vector 2");
    formula3.to_matrix().print("Hypothesis Vector 3");

    let predictions = multiply_vector(&features, &formula.to_matrix());
    let predictions2 = multiply_vector(&features, &formula2.to_matrix());
    let predictions3 = multiply_vector(&features, &formula3.to_matrix());

    predictions.print("Predictions");
    predictions2.print("Predictions 2");
    predictions3.print("Predictions 3");

    let hypotheses = combine_columns(&[
        formula.to_matrix(),
        formula2.to_matrix(),
        formula3.to_matrix(),
    ]);
    hypotheses.print("Combined Hypotheses");

    // one multiplication evaluates every formula on every sample
    let all_predictions = &features * &hypotheses;
    all_predictions.print("All Predictions");
}
