/*!
 * If this is your first time using predict-ml you should check out the
 * [worked example](./worked_example/index.html) to get an overview of how
 * predictions are computed, then study the
 * [Matrix](./matrices/struct.Matrix.html) type for what you need.
 */

pub mod numeric;
pub mod matrices;
pub mod prediction;

// examples
pub mod worked_example;
