//! High-level entry point for maximizing a user-provided `LogLikelihood`.
//!
//! This builds a Nelder–Mead simplex around the starting point, wraps the
//! model in an `ArgMinAdapter` (which *minimizes* `-ℓ(θ)`), and delegates
//! the run to `run_nelder_mead`.
use crate::optimization::{
    errors::OptResult,
    loglik_optimizer::{
        OptimOutcome, Theta,
        adapter::ArgMinAdapter,
        builders::build_nelder_mead,
        run::run_nelder_mead,
        traits::{LogLikelihood, MLEOptions},
        validation::validate_theta0,
    },
};

/// Maximize a log-likelihood `ℓ(θ)` with the Nelder–Mead simplex.
///
/// # Behavior
/// - Checks that `theta0` is finite and validates it via `f.check(theta0, data)`.
/// - Wraps `(f, data)` in an `ArgMinAdapter` that exposes a *minimization*
///   problem `c(θ) = -ℓ(θ)` to `argmin`.
/// - Builds the simplex via `build_nelder_mead` and calls `run_nelder_mead`.
/// - With `obs_slog` and `opts.verbose`, prints ℓ(θ₀) once before the run.
///
/// # Errors
/// - Propagates any error from `validate_theta0` or `f.check`.
/// - Propagates builder and runtime errors from `argmin`.
///
/// # Example
/// ```no_run
/// use ndarray::array;
/// use weibull_reliability::optimization::errors::OptResult;
/// use weibull_reliability::optimization::loglik_optimizer::{
///     maximize, LogLikelihood, MLEOptions, Theta,
/// };
///
/// struct Bowl;
/// impl LogLikelihood for Bowl {
///     type Data = ();
///     fn value(&self, theta: &Theta, _: &()) -> OptResult<f64> {
///         Ok(-theta.dot(theta))
///     }
///     fn check(&self, _: &Theta, _: &()) -> OptResult<()> {
///         Ok(())
///     }
/// }
///
/// let out = maximize(&Bowl, array![0.5, -0.3], &(), &MLEOptions::default())?;
/// println!("θ̂ = {:?}", out.theta_hat);
/// # Ok::<(), weibull_reliability::optimization::errors::OptError>(())
/// ```
pub fn maximize<F: LogLikelihood>(
    f: &F, theta0: Theta, data: &F::Data, opts: &MLEOptions,
) -> OptResult<OptimOutcome> {
    validate_theta0(&theta0, theta0.len())?;
    f.check(&theta0, data)?;
    #[cfg(feature = "obs_slog")]
    if opts.verbose {
        eprintln!("init: ell(theta0) = {:.6}", f.value(&theta0, data)?);
    }
    let problem = ArgMinAdapter::new(f, data);
    let solver = build_nelder_mead(&theta0, opts)?;
    run_nelder_mead(opts, problem, solver)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::{
        errors::{OptError, OptResult},
        loglik_optimizer::{Cost, Tolerances},
    };
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    /// ℓ(θ) = -((θ₀ - 3)² + 2(θ₁ + 1)²), maximized at (3, -1).
    struct ShiftedBowl;

    impl LogLikelihood for ShiftedBowl {
        type Data = ();

        fn value(&self, theta: &Theta, _data: &()) -> OptResult<Cost> {
            Ok(-((theta[0] - 3.0).powi(2) + 2.0 * (theta[1] + 1.0).powi(2)))
        }

        fn check(&self, theta: &Theta, _data: &()) -> OptResult<()> {
            if theta.len() != 2 {
                return Err(OptError::ThetaLengthMismatch { expected: 2, actual: theta.len() });
            }
            Ok(())
        }
    }

    /// Same bowl, but only θ₀ > 2.5 is admissible.
    struct ConstrainedBowl;

    impl LogLikelihood for ConstrainedBowl {
        type Data = ();

        fn value(&self, theta: &Theta, data: &()) -> OptResult<Cost> {
            ShiftedBowl.value(theta, data)
        }

        fn check(&self, _theta: &Theta, _data: &()) -> OptResult<()> {
            Ok(())
        }

        fn feasible(&self, theta: &Theta, _data: &()) -> bool {
            theta[0] > 2.5
        }
    }

    #[test]
    // Purpose
    // -------
    // The simplex finds the interior maximum and reports convergence.
    fn maximize_finds_bowl_maximum() {
        let out = maximize(&ShiftedBowl, array![1.0, 1.0], &(), &MLEOptions::default()).unwrap();

        assert!(out.converged, "status: {}", out.status);
        assert_abs_diff_eq!(out.theta_hat[0], 3.0, epsilon = 1e-3);
        assert_abs_diff_eq!(out.theta_hat[1], -1.0, epsilon = 1e-3);
        assert!(out.value <= 0.0 && out.value > -1e-6);
    }

    #[test]
    // Purpose
    // -------
    // Starting inside the feasible region, the search stays inside it.
    fn maximize_respects_feasible_region() {
        let out =
            maximize(&ConstrainedBowl, array![4.0, 0.0], &(), &MLEOptions::default()).unwrap();

        assert!(out.theta_hat[0] > 2.5);
        assert_abs_diff_eq!(out.theta_hat[0], 3.0, epsilon = 1e-3);
    }

    #[test]
    // Purpose
    // -------
    // A tiny iteration cap terminates without reporting convergence.
    fn maximize_reports_iteration_cap_as_not_converged() {
        let opts = MLEOptions::new(Tolerances::new(Some(1e-12), Some(2)).unwrap(), 0.05, false)
            .unwrap();

        let out = maximize(&ShiftedBowl, array![10.0, 10.0], &(), &opts).unwrap();

        assert!(!out.converged);
        assert_eq!(out.iterations, 2);
    }

    #[test]
    // Purpose
    // -------
    // Non-finite starting points and `check` failures surface before solving.
    fn maximize_validates_starting_point() {
        let opts = MLEOptions::default();
        assert!(matches!(
            maximize(&ShiftedBowl, array![f64::NAN, 0.0], &(), &opts),
            Err(OptError::InvalidThetaInput { index: 0, .. })
        ));
        assert!(matches!(
            maximize(&ShiftedBowl, array![1.0], &(), &opts),
            Err(OptError::ThetaLengthMismatch { expected: 2, actual: 1 })
        ));
    }
}
