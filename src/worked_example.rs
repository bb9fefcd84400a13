/*!
Worked prediction example

[Overview](https://en.wikipedia.org/wiki/Linear_regression).

# Predicting house prices from a linear hypothesis

The code below walks through the whole crate: raw samples become an
intercept-augmented feature matrix where each row is \[1, x\], linear formulas
become 2x1 hypothesis vectors laid out as \[\[offset\], \[scalar\]\], and
multiplying the two computes `offset + scalar * x` for every sample at once.
Stacking several hypothesis vectors side by side then evaluates every formula
against every sample with a single matrix multiplication.

This example does not fit the formulas to data. The hypothesis coefficients
are chosen by hand; fitting them by least squares would need a matrix inverse,
which this crate deliberately does not provide.

```
use predict_ml::matrices::Matrix;
use predict_ml::matrices::operations::{combine_columns, multiply_vector};
use predict_ml::prediction::{Formula, PredictionData};

// house sizes in square feet
let data = PredictionData::new(vec![2104.0, 1416.0, 1534.0, 852.0]);

// each row of the feature matrix is [1, size]
let features = data.to_matrix();
assert_eq!((4, 2), features.size());

// three candidate pricing formulas, price = scalar * size + offset
let formula = Formula::new(0.25, -40.0);
let formula2 = Formula::new(0.1, 200.0);
let formula3 = Formula::new(0.4, -150.0);

// predict with a single hypothesis: each output row is offset + scalar * size
let predictions = multiply_vector(&features, &formula.to_matrix());
assert_eq!(predictions, Matrix::column(vec![486.0, 314.0, 343.5, 173.0]));

// print any stage as an aligned table
predictions.print("Predictions");

// stack the three hypothesis vectors into a 2x3 matrix, one column per formula
let hypotheses = combine_columns(&[
    formula.to_matrix(),
    formula2.to_matrix(),
    formula3.to_matrix(),
]);
assert_eq!((2, 3), hypotheses.size());

// one matrix multiplication now evaluates every formula on every sample,
// the jth column of the result being the jth formula's predictions
let all_predictions = &features * &hypotheses;
assert_eq!((4, 3), all_predictions.size());
assert_eq!(
    all_predictions.column_iter(0).collect::<Vec<f64>>(),
    vec![486.0, 314.0, 343.5, 173.0]
);
assert_eq!(
    all_predictions.column_iter(1).collect::<Vec<f64>>(),
    vec![410.4, 341.6, 353.4, 285.2]
);
```
*/
