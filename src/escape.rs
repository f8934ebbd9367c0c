//! The escape-time evaluator.  An `EscapeConfig` binds the constant c
//! and the iteration cap into a value, and `evaluate` measures how
//! many times a starting point can be squared (plus c) before its
//! magnitude passes 2.  Binding the parameters into a value instead of
//! a captured closure keeps two differently-configured evaluators
//! fully independent and independently testable.

use num::Complex;

/// The iteration cap used when none is given.  Serialized planes do
/// not record their cap, so a reloaded plane is evaluated with this
/// value.
pub const DEFAULT_LIMIT: u32 = 100;

/// The parameters of the recurrence z ← z² + c.  A configuration is
/// immutable once built; to change c or the cap, replace the whole
/// value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EscapeConfig {
    /// The additive constant c applied after every squaring.
    pub c: Complex<f64>,
    /// The maximum number of squarings to attempt per point.  Must be
    /// positive.
    pub limit: u32,
}

impl EscapeConfig {
    /// Builds a configuration from the constant and the cap.
    pub fn new(c: Complex<f64>, limit: u32) -> EscapeConfig {
        EscapeConfig { c, limit }
    }

    /// The escape time of a single point.
    ///
    /// Returns 1 immediately if the magnitude of `z0` is already
    /// greater than 2.  Otherwise iterates z ← z² + c, a magnitude of
    /// exactly 2 continuing the loop, and returns the number of
    /// squarings the point survived before its magnitude passed 2, or
    /// 0 if the cap was reached first.
    ///
    /// The return value 1 is deliberately ambiguous: it means either
    /// "the input was already too large" or "the point survived
    /// exactly one squaring."  Downstream consumers rely on that
    /// conflation, so it is documented behavior, not a bug to repair.
    /// A point whose very first squaring escapes reports 0, the same
    /// as a point that never escapes at all.
    pub fn evaluate(&self, z0: Complex<f64>) -> u32 {
        if z0.norm_sqr() > 4.0 {
            return 1;
        }
        let mut z = z0;
        let mut n = 0;
        while z.norm_sqr() <= 4.0 {
            z = z * z + self.c;
            if n >= self.limit {
                return 0;
            }
            n += 1;
        }
        n - 1
    }

    /// Evaluates a whole batch of points in one call.  Element i of
    /// the result is exactly `evaluate(points[i])`; this exists so a
    /// grid row can be swept without per-point call overhead, not to
    /// change any semantics.
    pub fn evaluate_all(&self, points: &[Complex<f64>]) -> Vec<u32> {
        points.iter().map(|z| self.evaluate(*z)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_squarings_survived_before_escape() {
        let f = EscapeConfig::new(Complex::new(0.2, 0.2), 100);
        assert_eq!(f.evaluate(Complex::new(0.7, 0.7)), 3);
    }

    #[test]
    fn reports_zero_when_the_cap_is_reached() {
        let f = EscapeConfig::new(Complex::new(0.1, 0.1), 10);
        assert_eq!(f.evaluate(Complex::new(0.1, 0.1)), 0);
    }

    #[test]
    fn reports_the_sentinel_when_the_input_is_already_too_large() {
        let f = EscapeConfig::new(Complex::new(2.0, 2.0), 100);
        assert_eq!(f.evaluate(Complex::new(7.0, 7.0)), 1);
    }

    #[test]
    fn a_magnitude_of_exactly_two_is_not_the_sentinel() {
        // |z0| == 2 enters the loop; the first squaring escapes, which
        // reports 0 rather than the too-large sentinel.
        let f = EscapeConfig::new(Complex::new(2.0, 2.0), 100);
        assert_eq!(f.evaluate(Complex::new(2.0, 0.0)), 0);
    }

    #[test]
    fn identical_calls_yield_identical_results() {
        let f = EscapeConfig::new(Complex::new(0.2, 0.2), 10);
        let first = f.evaluate(Complex::new(0.7, 0.7));
        assert_eq!(f.evaluate(Complex::new(0.7, 0.7)), first);
    }

    #[test]
    fn configurations_do_not_share_state() {
        let f1 = EscapeConfig::new(Complex::new(0.2, 0.2), 10);
        let expected = f1.evaluate(Complex::new(0.7, 0.7));
        // Building a second configuration must not disturb the first,
        // and the two must disagree on the same input.
        let f2 = EscapeConfig::new(Complex::new(-0.2, -0.2), 2);
        assert_eq!(f1.evaluate(Complex::new(0.7, 0.7)), expected);
        assert_ne!(f2.evaluate(Complex::new(0.7, 0.7)), expected);
    }

    #[test]
    fn the_batch_form_matches_the_scalar_form() {
        let f = EscapeConfig::new(Complex::new(-1.037, 0.17), 100);
        let points: Vec<Complex<f64>> = (0..17)
            .map(|i| Complex::new(-2.0 + 0.25 * f64::from(i), 0.3))
            .collect();
        let batch = f.evaluate_all(&points);
        assert_eq!(batch.len(), points.len());
        for (z, n) in points.iter().zip(&batch) {
            assert_eq!(f.evaluate(*z), *n);
        }
    }
}
