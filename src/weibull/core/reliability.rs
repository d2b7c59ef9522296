//! Closed-form reliability functions of the two-parameter Weibull law.
//!
//! Purpose
//! -------
//! Evaluate R(t), h(t), f(t), F(t), and the life metrics (MTTF, median,
//! B-lives) for a validated `(β, η)` pair, and sample them on grids for
//! plotting.
//!
//! Key behaviors
//! -------------
//! - `R(t) = exp(-(t/η)^β)`, `h(t) = (β/η)(t/η)^(β-1)`, `f(t) = h(t)R(t)`,
//!   `F(t) = 1 - R(t)`.
//! - `MTTF = η Γ(1 + 1/β)` via `statrs`' Lanczos gamma.
//! - `B_x = η (-ln(1 - x))^(1/β)` for `x ∈ (0, 1)`.
//!
//! Invariants & assumptions
//! ------------------------
//! - `β` and `η` are finite and strictly positive (checked in
//!   [`WeibullDistribution::new`]).
//! - Times must be finite and `>= 0`; negative or non-finite times are
//!   rejected with `WeibullError::InvalidTime`.
//! - At `t = 0` the hazard and density follow the formula: 0 for `β > 1`,
//!   `1/η` for `β = 1`, and `+∞` for `β < 1`.
use crate::weibull::errors::{AnalysisResult, WeibullError};
use ndarray::Array1;
use statrs::function::gamma::gamma;

/// Two-parameter Weibull distribution with shape `β` and scale `η`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeibullDistribution {
    beta: f64,
    eta: f64,
}

/// Reliability, hazard, and density sampled on a common time grid.
#[derive(Debug, Clone, PartialEq)]
pub struct ReliabilityCurves {
    pub times: Array1<f64>,
    pub reliability: Array1<f64>,
    pub hazard: Array1<f64>,
    pub pdf: Array1<f64>,
}

impl WeibullDistribution {
    /// Validate and store `(β, η)`.
    ///
    /// # Errors
    /// - `WeibullError::InvalidShape` if `β` is non-finite or ≤ 0.
    /// - `WeibullError::InvalidScale` if `η` is non-finite or ≤ 0.
    pub fn new(beta: f64, eta: f64) -> AnalysisResult<Self> {
        if !beta.is_finite() || beta <= 0.0 {
            return Err(WeibullError::InvalidShape { value: beta });
        }
        if !eta.is_finite() || eta <= 0.0 {
            return Err(WeibullError::InvalidScale { value: eta });
        }
        Ok(Self { beta, eta })
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    pub fn eta(&self) -> f64 {
        self.eta
    }

    /// Survival probability `R(t) = exp(-(t/η)^β)`; `R(0) = 1`.
    ///
    /// # Examples
    /// ```rust
    /// # use weibull_reliability::weibull::core::reliability::WeibullDistribution;
    /// let d = WeibullDistribution::new(2.0, 100.0).unwrap();
    /// assert_eq!(d.reliability(0.0).unwrap(), 1.0);
    /// assert!((d.reliability(100.0).unwrap() - (-1.0_f64).exp()).abs() < 1e-12);
    /// ```
    pub fn reliability(&self, t: f64) -> AnalysisResult<f64> {
        check_time(t)?;
        Ok((-self.scaled_power(t)).exp())
    }

    /// Cumulative failure probability `F(t) = 1 - R(t)`.
    pub fn unreliability(&self, t: f64) -> AnalysisResult<f64> {
        check_time(t)?;
        Ok(-(-self.scaled_power(t)).exp_m1())
    }

    /// Instantaneous failure rate `h(t) = (β/η)(t/η)^(β-1)`.
    pub fn hazard_rate(&self, t: f64) -> AnalysisResult<f64> {
        check_time(t)?;
        Ok(self.hazard_unchecked(t))
    }

    /// Probability density `f(t) = h(t) R(t)`.
    pub fn pdf(&self, t: f64) -> AnalysisResult<f64> {
        check_time(t)?;
        Ok(self.hazard_unchecked(t) * (-self.scaled_power(t)).exp())
    }

    /// Mean time to failure, `η Γ(1 + 1/β)`.
    pub fn mttf(&self) -> f64 {
        self.eta * gamma(1.0 + 1.0 / self.beta)
    }

    /// Time by which half the population has failed, `η (ln 2)^(1/β)`.
    pub fn median_life(&self) -> f64 {
        self.eta * std::f64::consts::LN_2.powf(1.0 / self.beta)
    }

    /// Time by which a fraction `x` of the population has failed.
    ///
    /// # Errors
    /// `WeibullError::InvalidFraction` unless `0 < x < 1`.
    pub fn b_life(&self, x: f64) -> AnalysisResult<f64> {
        check_fraction(x)?;
        Ok(self.eta * (-(-x).ln_1p()).powf(1.0 / self.beta))
    }

    /// Time at which reliability has dropped to `p`, i.e. `R(t) = p`.
    ///
    /// # Errors
    /// `WeibullError::InvalidFraction` unless `0 < p < 1`.
    pub fn time_to_reliability(&self, p: f64) -> AnalysisResult<f64> {
        check_fraction(p)?;
        Ok(self.eta * (-p.ln()).powf(1.0 / self.beta))
    }

    /// Reliability at each requested mission time.
    ///
    /// # Errors
    /// `WeibullError::InvalidTime` for the first negative or non-finite time.
    pub fn reliability_at(&self, times: &[f64]) -> AnalysisResult<Vec<f64>> {
        times.iter().map(|&t| self.reliability(t)).collect()
    }

    /// Sample R, h, and f at `t_i = i · t_max / points` for `i = 1..=points`.
    ///
    /// `t = 0` is left out so the `β < 1` hazard singularity never appears
    /// in plotted data.
    ///
    /// # Errors
    /// `WeibullError::InvalidGrid` if `t_max` is not finite and positive or
    /// `points == 0`.
    pub fn curves(&self, t_max: f64, points: usize) -> AnalysisResult<ReliabilityCurves> {
        if !t_max.is_finite() || t_max <= 0.0 {
            return Err(WeibullError::InvalidGrid {
                t_max,
                points,
                reason: "Horizon must be finite and > 0.",
            });
        }
        if points == 0 {
            return Err(WeibullError::InvalidGrid {
                t_max,
                points,
                reason: "At least one point is required.",
            });
        }
        let step = t_max / points as f64;
        let times = Array1::from_iter((1..=points).map(|i| i as f64 * step));
        let reliability = times.mapv(|t| (-self.scaled_power(t)).exp());
        let hazard = times.mapv(|t| self.hazard_unchecked(t));
        let pdf = &hazard * &reliability;
        Ok(ReliabilityCurves { times, reliability, hazard, pdf })
    }

    /// Endpoints of the fitted line `y = β(x - ln η)` in Weibull-plot
    /// coordinates (`x = ln t`, `y = ln(-ln(1 - F))`).
    pub fn linearized_line(&self, x0: f64, x1: f64) -> [(f64, f64); 2] {
        let ln_eta = self.eta.ln();
        [(x0, self.beta * (x0 - ln_eta)), (x1, self.beta * (x1 - ln_eta))]
    }

    // ---- Helper methods ----

    fn scaled_power(&self, t: f64) -> f64 {
        (t / self.eta).powf(self.beta)
    }

    fn hazard_unchecked(&self, t: f64) -> f64 {
        (self.beta / self.eta) * (t / self.eta).powf(self.beta - 1.0)
    }
}

fn check_time(t: f64) -> AnalysisResult<()> {
    if !t.is_finite() || t < 0.0 {
        return Err(WeibullError::InvalidTime { value: t });
    }
    Ok(())
}

fn check_fraction(x: f64) -> AnalysisResult<()> {
    if !(x > 0.0 && x < 1.0) {
        return Err(WeibullError::InvalidFraction {
            value: x,
            reason: "Endpoints 0 and 1 correspond to t = 0 and t = infinity.",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Closed-form values at characteristic points (t = 0, t = η).
    // - Life metrics against known special cases (exponential, Rayleigh).
    // - Argument validation for times, fractions, and grids.
    // - Curve sampling layout and the linearized fitted line.
    // -------------------------------------------------------------------------

    fn dist(beta: f64, eta: f64) -> WeibullDistribution {
        WeibullDistribution::new(beta, eta).unwrap()
    }

    #[test]
    // Purpose
    // -------
    // Constructor rejects non-positive and non-finite parameters.
    fn new_rejects_invalid_parameters() {
        assert_eq!(
            WeibullDistribution::new(0.0, 1.0),
            Err(WeibullError::InvalidShape { value: 0.0 })
        );
        assert!(matches!(
            WeibullDistribution::new(1.0, f64::NAN),
            Err(WeibullError::InvalidScale { .. })
        ));
    }

    #[test]
    // Purpose
    // -------
    // R(0) = 1 and R(η) = e⁻¹ for any shape; F is the complement.
    fn reliability_at_characteristic_points() {
        for beta in [0.5, 1.0, 3.2] {
            let d = dist(beta, 250.0);
            assert_eq!(d.reliability(0.0).unwrap(), 1.0);
            assert_relative_eq!(d.reliability(250.0).unwrap(), (-1.0_f64).exp(), epsilon = 1e-12);
            assert_relative_eq!(
                d.unreliability(180.0).unwrap(),
                1.0 - d.reliability(180.0).unwrap(),
                epsilon = 1e-12
            );
        }
    }

    #[test]
    // Purpose
    // -------
    // R is non-increasing on a grid of increasing times.
    fn reliability_is_non_increasing() {
        let d = dist(1.7, 1000.0);
        let values = d.reliability_at(&[0.0, 10.0, 100.0, 500.0, 1000.0, 5000.0]).unwrap();

        assert!(values.windows(2).all(|w| w[1] <= w[0]));
    }

    #[test]
    // Purpose
    // -------
    // Hazard and density at t = 0 follow the formula for each shape regime.
    fn hazard_at_zero_follows_shape_regime() {
        assert_eq!(dist(2.0, 50.0).hazard_rate(0.0).unwrap(), 0.0);
        assert_relative_eq!(dist(1.0, 50.0).hazard_rate(0.0).unwrap(), 0.02, epsilon = 1e-15);
        assert_eq!(dist(0.5, 50.0).hazard_rate(0.0).unwrap(), f64::INFINITY);
        assert_eq!(dist(0.5, 50.0).pdf(0.0).unwrap(), f64::INFINITY);
    }

    #[test]
    // Purpose
    // -------
    // f(t) = h(t) R(t) away from zero.
    fn pdf_is_hazard_times_reliability() {
        let d = dist(2.5, 40.0);
        let t = 33.0;

        let expected = d.hazard_rate(t).unwrap() * d.reliability(t).unwrap();

        assert_relative_eq!(d.pdf(t).unwrap(), expected, epsilon = 1e-15);
    }

    #[test]
    // Purpose
    // -------
    // Negative and non-finite times are invalid arguments.
    fn functions_reject_invalid_times() {
        let d = dist(2.0, 10.0);
        assert_eq!(d.reliability(-1.0), Err(WeibullError::InvalidTime { value: -1.0 }));
        assert!(d.hazard_rate(f64::NAN).is_err());
        assert!(d.pdf(f64::INFINITY).is_err());
        assert!(d.reliability_at(&[1.0, -3.0]).is_err());
    }

    #[test]
    // Purpose
    // -------
    // MTTF matches the exponential (β = 1) and Rayleigh (β = 2) closed forms.
    fn mttf_special_cases() {
        assert_relative_eq!(dist(1.0, 500.0).mttf(), 500.0, epsilon = 1e-8);
        let rayleigh = 100.0 * std::f64::consts::PI.sqrt() / 2.0;
        assert_relative_eq!(dist(2.0, 100.0).mttf(), rayleigh, epsilon = 1e-8);
    }

    #[test]
    // Purpose
    // -------
    // Median life equals B50 and satisfies R(median) = 0.5.
    fn median_life_matches_b50() {
        let d = dist(1.3, 720.0);

        let median = d.median_life();

        assert_relative_eq!(median, d.b_life(0.5).unwrap(), epsilon = 1e-9);
        assert_relative_eq!(d.reliability(median).unwrap(), 0.5, epsilon = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // B-lives are ordered and invert the unreliability function.
    fn b_life_ordering_and_inversion() {
        let d = dist(2.2, 1500.0);

        let b10 = d.b_life(0.10).unwrap();
        let b50 = d.b_life(0.50).unwrap();
        let b90 = d.b_life(0.90).unwrap();

        assert!(b10 < b50 && b50 < b90);
        assert_relative_eq!(d.unreliability(b10).unwrap(), 0.10, epsilon = 1e-12);
        assert_relative_eq!(d.time_to_reliability(0.9).unwrap(), b10, epsilon = 1e-9);
    }

    #[test]
    // Purpose
    // -------
    // Fractions at or outside the unit interval endpoints are rejected.
    fn b_life_rejects_fraction_endpoints() {
        let d = dist(2.0, 100.0);
        for x in [0.0, 1.0, -0.1, 1.5, f64::NAN] {
            assert!(matches!(d.b_life(x), Err(WeibullError::InvalidFraction { .. })));
            assert!(d.time_to_reliability(x).is_err());
        }
    }

    #[test]
    // Purpose
    // -------
    // Curves start one step after zero, end at the horizon, and agree with
    // the pointwise functions.
    fn curves_sample_expected_grid() {
        let d = dist(0.8, 200.0);

        let c = d.curves(300.0, 6).unwrap();

        assert_eq!(c.times.len(), 6);
        assert_relative_eq!(c.times[0], 50.0, epsilon = 1e-12);
        assert_relative_eq!(c.times[5], 300.0, epsilon = 1e-12);
        assert_relative_eq!(c.reliability[2], d.reliability(150.0).unwrap(), epsilon = 1e-12);
        assert_relative_eq!(c.hazard[2], d.hazard_rate(150.0).unwrap(), epsilon = 1e-12);
        assert_relative_eq!(c.pdf[2], d.pdf(150.0).unwrap(), epsilon = 1e-12);
        assert!(c.hazard.iter().all(|h| h.is_finite()));
    }

    #[test]
    // Purpose
    // -------
    // Empty or non-positive grids are rejected.
    fn curves_reject_invalid_grid() {
        let d = dist(2.0, 100.0);
        assert!(matches!(d.curves(100.0, 0), Err(WeibullError::InvalidGrid { .. })));
        assert!(matches!(d.curves(0.0, 10), Err(WeibullError::InvalidGrid { .. })));
    }

    #[test]
    // Purpose
    // -------
    // The fitted line crosses y = 0 at x = ln η with slope β.
    fn linearized_line_crosses_zero_at_ln_eta() {
        let d = dist(3.0, 100.0);
        let ln_eta = 100.0_f64.ln();

        let [(x0, y0), (x1, y1)] = d.linearized_line(ln_eta, ln_eta + 1.0);

        assert_eq!(x0, ln_eta);
        assert_relative_eq!(y0, 0.0, epsilon = 1e-12);
        assert_eq!(x1, ln_eta + 1.0);
        assert_relative_eq!(y1, 3.0, epsilon = 1e-12);
    }
}
