//! Quadratic loss used by the output layer.

/// Quadratic loss `½‖output − target‖²` for a single sample.
pub fn quadratic_loss(output: &[f64], target: &[f64]) -> f64 {
    debug_assert_eq!(output.len(), target.len(), "quadratic_loss length mismatch");

    let sum: f64 = output
        .iter()
        .zip(target)
        .map(|(o, t)| (o - t) * (o - t))
        .sum();
    0.5 * sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quadratic_loss_zero_on_match() {
        assert_eq!(quadratic_loss(&[0.25, -1.0], &[0.25, -1.0]), 0.0);
    }

    #[test]
    fn test_quadratic_loss_value() {
        // 0.5 * (1 + 4)
        assert_eq!(quadratic_loss(&[1.0, 0.0], &[0.0, 2.0]), 2.5);
    }
}
