//! Dashboard derivations.

/// Income and expense as percentages of their sum.
///
/// A zero sum is replaced by 1, so `(0, 0)` yields `(0, 0)` instead of NaN.
pub fn percent_split(income: f64, expense: f64) -> (f64, f64) {
    let sum = income + expense;
    let denominator = if sum == 0.0 { 1.0 } else { sum };
    (income / denominator * 100.0, expense / denominator * 100.0)
}

/// Bar heights for the sales chart, relative to the tallest bar.
pub fn bar_fractions(values: &[f64]) -> Vec<f64> {
    let max = values.iter().cloned().fold(0.0_f64, f64::max);
    if max <= 0.0 {
        return vec![0.0; values.len()];
    }
    values.iter().map(|v| (v / max).max(0.0)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_split() {
        assert_eq!(percent_split(300.0, 100.0), (75.0, 25.0));
        assert_eq!(percent_split(0.0, 0.0), (0.0, 0.0));
        assert_eq!(percent_split(0.0, 50.0), (0.0, 100.0));
    }

    #[test]
    fn test_bar_fractions() {
        assert_eq!(bar_fractions(&[5.0, 10.0, 0.0]), vec![0.5, 1.0, 0.0]);
        assert_eq!(bar_fractions(&[0.0, 0.0]), vec![0.0, 0.0]);
        assert!(bar_fractions(&[]).is_empty());
    }
}
