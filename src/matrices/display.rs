use std::fmt;

use crate::matrices::Matrix;

// Common formatting logic used for the Matrix Display implementation
pub(crate) fn format_table<T>(matrix: &Matrix<T>, f: &mut fmt::Formatter) -> fmt::Result
where
    T: fmt::Display,
{
    let rows = matrix.rows();
    let columns = matrix.columns();
    // stringify every cell once up front so the width pass and the padding
    // pass agree on what each cell looks like
    let cells: Vec<Vec<String>> = (0..rows)
        .map(|row| {
            (0..columns)
                .map(|column| matrix.get_reference(row, column).to_string())
                .collect()
        })
        .collect();

    let mut widths = vec![0; columns];
    for row in &cells {
        for (column, cell) in row.iter().enumerate() {
            let length = cell.chars().count();
            if widths[column] < length {
                widths[column] = length;
            }
        }
    }

    // every printed row is "| " and " |" around the cells joined with ", ",
    // so the border spans the cell widths plus 4 wrapper characters
    let row_length = 4 + widths.iter().sum::<usize>() + 2 * (columns - 1);
    let border = format!("--{}--", "-".repeat(row_length - 4));

    writeln!(f, "{}", border)?;
    for row in &cells {
        write!(f, "| ")?;
        for (column, cell) in row.iter().enumerate() {
            write!(f, "{:>width$}", cell, width = widths[column])?;
            if column < columns - 1 {
                write!(f, ", ")?;
            }
        }
        writeln!(f, " |")?;
    }
    write!(f, "{}", border)
}

#[test]
fn test_display_hypothesis_vector() {
    let hypothesis = Matrix::from(vec![vec![-40.0], vec![0.25]]);
    assert_eq!(
        hypothesis.to_string(),
        r#"--------
|  -40 |
| 0.25 |
--------"#
    );
}

#[test]
fn test_display_feature_matrix() {
    let features = Matrix::from(vec![
        vec![1.0, 2104.0],
        vec![1.0, 1416.0],
        vec![1.0, 1534.0],
        vec![1.0, 852.0],
    ]);
    assert_eq!(
        features.to_string(),
        r#"-----------
| 1, 2104 |
| 1, 1416 |
| 1, 1534 |
| 1,  852 |
-----------"#
    );
}

#[test]
fn test_display_non_numeric_cells() {
    let labels = Matrix::from(vec![vec!["alpha", "b"], vec!["c", "deep"]]);
    assert_eq!(
        labels.to_string(),
        r#"---------------
| alpha,    b |
|     c, deep |
---------------"#
    );
}

#[test]
fn test_display_row_lengths_match() {
    let matrix = Matrix::from(vec![
        vec![1, 22, 333],
        vec![4444, 5, 66],
    ]);
    let table = matrix.to_string();
    let lines: Vec<&str> = table.lines().collect();
    // border, both rows, border
    assert_eq!(4, lines.len());
    let widths = [4, 2, 3];
    let expected = 4 + widths.iter().sum::<usize>() + 2 * (3 - 1);
    assert!(lines.iter().all(|line| line.chars().count() == expected));
}
