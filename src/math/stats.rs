use crate::math::matrix::Matrix;

/// Per-feature standardization constants of a sample-major matrix.
///
/// `x` has shape (m, nx): one row per data point, one column per feature.
/// Returns `(mean, std)`, each of length nx. The standard deviation is the
/// population one (divides by m, not m - 1).
pub fn normalization_constants(x: &Matrix) -> (Vec<f64>, Vec<f64>) {
    let m = x.rows as f64;

    let mean: Vec<f64> = (0..x.cols)
        .map(|j| x.data.iter().map(|row| row[j]).sum::<f64>() / m)
        .collect();

    let std: Vec<f64> = (0..x.cols)
        .map(|j| {
            let var = x.data.iter()
                .map(|row| (row[j] - mean[j]) * (row[j] - mean[j]))
                .sum::<f64>() / m;
            var.sqrt()
        })
        .collect();

    (mean, std)
}

/// Standardizes `x` (shape (d, nx)) with per-feature constants: each entry
/// becomes `(x[i][j] - mean[j]) / std[j]`, broadcasting the constants across
/// rows. Panics unless both constant slices have exactly `nx` entries. A zero
/// standard deviation divides through to non-finite values; no guard is
/// applied.
pub fn normalize(x: &Matrix, mean: &[f64], std: &[f64]) -> Matrix {
    if mean.len() != x.cols || std.len() != x.cols {
        panic!("Normalization constants are of incorrect sizes")
    }

    Matrix::from_data(
        x.data.iter()
            .map(|row| {
                row.iter()
                    .zip(mean.iter().zip(std.iter()))
                    .map(|(v, (mu, sigma))| (v - mu) / sigma)
                    .collect()
            })
            .collect()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_on_known_matrix() {
        let x = Matrix::from_data(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let (mean, std) = normalization_constants(&x);
        assert_eq!(mean, vec![2.0, 3.0]);
        assert_eq!(std, vec![1.0, 1.0]);
    }

    #[test]
    fn test_normalize_broadcasts_per_feature() {
        let x = Matrix::from_data(vec![vec![1.0, 10.0], vec![3.0, 30.0]]);
        let out = normalize(&x, &[2.0, 20.0], &[1.0, 10.0]);
        assert_eq!(out.data, vec![vec![-1.0, -1.0], vec![1.0, 1.0]]);
    }

    #[test]
    #[should_panic]
    fn test_normalize_rejects_short_constants() {
        // Constants for 2 features must not silently drop a third column.
        let x = Matrix::from_data(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        normalize(&x, &[0.0, 0.0], &[1.0, 1.0]);
    }

    #[test]
    fn test_round_trip_standardizes() {
        // 1000 samples per feature drawn from N(5, 2); after standardizing
        // with its own constants the matrix has mean 0 and std 1 exactly
        // (up to float rounding).
        let x = Matrix::standard_normal(1000, 3).map(|v| 5.0 + 2.0 * v);
        let (mean, std) = normalization_constants(&x);
        let normed = normalize(&x, &mean, &std);
        let (n_mean, n_std) = normalization_constants(&normed);
        for j in 0..3 {
            assert!(n_mean[j].abs() < 1e-9, "mean[{j}] = {}", n_mean[j]);
            assert!((n_std[j] - 1.0).abs() < 1e-9, "std[{j}] = {}", n_std[j]);
        }
    }
}
