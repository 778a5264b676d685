// ─────────────────────────────────────────────────────────────────────
// Solar Axion Flux — Surrogate Fit
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Least-squares fit of [`ApproxFluxParams`] to a flux table.

use crate::approx::ApproxFluxParams;
use crate::table::FluxSample;
use axion_math::optimize::{nelder_mead, NelderMeadConfig};
use axion_types::error::{AxionError, AxionResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitResult {
    pub params: ApproxFluxParams,
    /// Sum of squared residuals at `params`.
    pub loss: f64,
    pub initial_loss: f64,
    pub iterations: usize,
    pub converged: bool,
}

/// Σ (Φ_approx − Φ)² over the table, mass suppression on.
pub fn squared_error(params: &ApproxFluxParams, samples: &[FluxSample]) -> f64 {
    samples
        .iter()
        .map(|s| {
            let model = params.flux_in_units(s.photon_energy, s.axion_mass, true);
            (model - s.flux).powi(2)
        })
        .sum()
}

/// Minimise [`squared_error`] with Nelder–Mead, starting from `initial`.
pub fn fit_approx_flux(
    samples: &[FluxSample],
    initial: ApproxFluxParams,
    config: &NelderMeadConfig,
) -> AxionResult<FitResult> {
    if samples.is_empty() {
        return Err(AxionError::EmptyTable(
            "cannot fit the surrogate to an empty flux table".to_string(),
        ));
    }

    let initial_loss = squared_error(&initial, samples);
    let objective = |p: &[f64]| match ApproxFluxParams::from_slice(p) {
        Some(params) => squared_error(&params, samples),
        None => f64::INFINITY,
    };
    let result = nelder_mead(objective, &initial.to_array(), config);

    let params = ApproxFluxParams::from_slice(&result.x).ok_or_else(|| {
        AxionError::PhysicsViolation(format!(
            "optimiser returned {} parameters, expected 4",
            result.x.len()
        ))
    })?;

    if result.converged {
        log::info!(
            "surrogate fit converged after {} iterations: loss {:.4e} -> {:.4e}",
            result.iterations,
            initial_loss,
            result.fun
        );
    } else {
        log::warn!(
            "surrogate fit stopped after {} iterations without converging (loss {:.4e})",
            result.iterations,
            result.fun
        );
    }

    Ok(FitResult {
        params,
        loss: result.fun,
        initial_loss,
        iterations: result.iterations,
        converged: result.converged,
    })
}
