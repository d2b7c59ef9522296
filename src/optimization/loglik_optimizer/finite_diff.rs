//! loglik_optimizer::finite_diff — numerical curvature of a log-likelihood.
//!
//! Purpose
//! -------
//! Approximate the Hessian `∇²ℓ(θ)` at an estimate so the inference layer
//! can build observed-information bounds without depending directly on the
//! `finitediff` API.
//!
//! Key behaviors
//! -------------
//! - [`loglik_hessian`] differentiates the model's analytic gradient when
//!   one exists, and a central-difference gradient of `ℓ(θ)` otherwise.
//! - [`compute_hessian`] prefers central differences and falls back to
//!   forward differences when validation fails; the result is symmetrized.
//!
//! Invariants & assumptions
//! ------------------------
//! - Errors raised by the model inside a finite-difference closure are
//!   captured in a `RefCell` slot (the closure itself must return plain
//!   numbers) and surfaced afterwards as [`OptError`].
//! - Returned Hessians pass [`validate_hessian`].
//! - Infeasible points are never evaluated here; callers pass an interior
//!   estimate and keep the step away from the region boundary.
use crate::optimization::{
    errors::{OptError, OptResult},
    loglik_optimizer::{
        Grad, Theta,
        traits::LogLikelihood,
        types::Hessian,
        validation::{validate_grad, validate_hessian},
    },
};
use finitediff::FiniteDiff;
use std::cell::RefCell;

/// loglik_hessian — Hessian of `ℓ(θ)` for a [`LogLikelihood`] at `theta`.
///
/// Uses `f.grad` when implemented; on [`OptError::GradientNotImplemented`]
/// the gradient is itself a central difference of `f.value`.
///
/// # Errors
/// - Any model error raised while evaluating the gradient.
/// - [`OptError::InvalidGradient`] / [`OptError::InvalidHessian`] when the
///   derivatives are non-finite.
pub fn loglik_hessian<F: LogLikelihood>(
    f: &F, theta: &Theta, data: &F::Data,
) -> OptResult<Hessian> {
    let dim = theta.len();
    let closure_err: RefCell<Option<OptError>> = RefCell::new(None);
    let record = |err: OptError| {
        let mut slot = closure_err.borrow_mut();
        if slot.is_none() {
            *slot = Some(err);
        }
    };

    let analytic = match f.grad(theta, data) {
        Ok(g) => {
            validate_grad(&g, dim)?;
            true
        }
        Err(OptError::GradientNotImplemented) => false,
        Err(err) => return Err(err),
    };

    let grad_fn = |x: &Theta| -> Grad {
        if analytic {
            match f.grad(x, data) {
                Ok(g) => g,
                Err(err) => {
                    record(err);
                    Grad::from_elem(dim, f64::NAN)
                }
            }
        } else {
            let value_fn = |y: &Theta| -> f64 {
                match f.value(y, data) {
                    Ok(v) => v,
                    Err(err) => {
                        record(err);
                        f64::NAN
                    }
                }
            };
            x.central_diff(&value_fn)
        }
    };

    let hessian = compute_hessian(&grad_fn, theta);
    if let Some(err) = closure_err.take() {
        return Err(err);
    }
    hessian
}

/// compute_hessian — finite-difference Hessian with validation and symmetry.
///
/// Differentiates the gradient map `f` at `theta` with central differences;
/// if that matrix contains non-finite entries, retries with forward
/// differences. The accepted matrix is symmetrized in place.
///
/// # Errors
/// - [`OptError::HessianDimMismatch`] / [`OptError::InvalidHessian`] when the
///   forward-difference fallback also fails validation.
pub fn compute_hessian<F: Fn(&Theta) -> Grad>(f: &F, theta: &Theta) -> OptResult<Hessian> {
    let dim = theta.len();
    let mut cent_hess = theta.central_hessian(f);
    match validate_hessian(&cent_hess, dim) {
        Ok(_) => {
            symmetrize_hess(&mut cent_hess);
            Ok(cent_hess)
        }
        Err(_) => {
            let mut forward_hess = theta.forward_hessian(f);
            validate_hessian(&forward_hess, dim)?;
            symmetrize_hess(&mut forward_hess);
            Ok(forward_hess)
        }
    }
}

// ---- Helper methods ----

/// Average each off-diagonal pair so the matrix is exactly symmetric.
fn symmetrize_hess(hess: &mut Hessian) {
    for i in 0..hess.nrows() {
        for j in 0..i {
            let avg = 0.5 * (hess[[i, j]] + hess[[j, i]]);
            hess[[i, j]] = avg;
            hess[[j, i]] = avg;
        }
    }
}
