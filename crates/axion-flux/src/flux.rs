// ─────────────────────────────────────────────────────────────────────
// Solar Axion Flux — Flux Integrator
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Differential axion flux at Earth.
//!
//!   Φ(E) = (E²/π²) · (R☉³/D²) · ∫₀¹ r² f_BE(E, T(r)) Γ(E, r) dr
//!
//! The radial integral uses adaptive Gauss–Kronrod quadrature with a
//! purely relative tolerance by default, so the result does not depend
//! on the base unit of the `UnitSystem`.

use crate::transition::transition_rate;
use axion_math::optimize::{golden_section_max, ScalarOptimum};
use axion_math::quadrature::{integrate, QuadConfig};
use axion_solar::SolarModel;
use axion_types::config::{FluxConfig, PrimakoffParams, QuadratureSettings};
use axion_types::constants::EXP_OVERFLOW_LIMIT;
use axion_types::error::AxionResult;
use axion_types::units::UnitSystem;
use std::f64::consts::PI;

/// Bracket width, relative to the search window, at which the peak search stops.
const PEAK_REL_TOL: f64 = 1e-6;
const PEAK_MAX_ITER: usize = 100;

/// Photon occupation number 1/(exp(E/T) − 1).
///
/// Defined as 0 once E/T exceeds the double-precision overflow point of
/// `exp`.
pub fn bose_einstein_occupation(energy: f64, temperature: f64) -> f64 {
    let x = energy / temperature;
    if x > EXP_OVERFLOW_LIMIT {
        return 0.0;
    }
    1.0 / x.exp_m1()
}

/// Flux with the quadrature diagnostics attached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluxEstimate {
    pub flux: f64,
    /// Quadrature error estimate propagated to the flux.
    pub abs_error: f64,
    pub evaluations: usize,
    pub subdivisions: usize,
    pub converged: bool,
}

impl FluxEstimate {
    fn forbidden() -> Self {
        FluxEstimate {
            flux: 0.0,
            abs_error: 0.0,
            evaluations: 0,
            subdivisions: 0,
            converged: true,
        }
    }
}

/// Quadrature settings in the form the integrator takes.
pub fn quad_config(settings: &QuadratureSettings) -> QuadConfig {
    QuadConfig {
        abs_tol: settings.abs_tol,
        rel_tol: settings.rel_tol,
        max_subdivisions: settings.max_subdivisions,
    }
}

/// Solar axion flux at photon energy `energy`, with diagnostics.
///
/// Returns a zero flux without integrating when `energy < axion_mass`.
pub fn solar_axion_flux_estimate(
    energy: f64,
    solar: &SolarModel,
    units: &UnitSystem,
    params: &PrimakoffParams,
    quad: &QuadConfig,
) -> FluxEstimate {
    if energy < params.axion_mass {
        return FluxEstimate::forbidden();
    }

    let integrand = |r: f64| {
        let occupation = bose_einstein_occupation(energy, solar.temperature(r, units));
        if occupation == 0.0 {
            return 0.0;
        }
        r * r * occupation * transition_rate(energy, r, solar, units, params)
    };
    let result = integrate(integrand, 0.0, 1.0, quad);

    let radius = units.solar_radius();
    let distance = units.sun_earth_distance();
    let geometry = energy * energy / (PI * PI) * radius.powi(3) / (distance * distance);

    if !result.converged {
        log::warn!(
            "radial integral not converged at E = {:.4} keV, ma = {:.4} keV: integral {:.3e} ± {:.2e} after {} subdivisions",
            units.to_kev(energy),
            units.to_kev(params.axion_mass),
            result.value,
            result.abs_error,
            result.subdivisions
        );
    }
    log::debug!(
        "flux E = {:.4} keV: {} evaluations, {} subdivisions",
        units.to_kev(energy),
        result.evaluations,
        result.subdivisions
    );

    FluxEstimate {
        flux: geometry * result.value,
        abs_error: geometry * result.abs_error,
        evaluations: result.evaluations,
        subdivisions: result.subdivisions,
        converged: result.converged,
    }
}

/// Solar axion flux at photon energy `energy` with default quadrature.
pub fn solar_axion_flux(
    energy: f64,
    solar: &SolarModel,
    units: &UnitSystem,
    params: &PrimakoffParams,
) -> f64 {
    solar_axion_flux_estimate(energy, solar, units, params, &QuadConfig::default()).flux
}

/// Flux evaluator bound to one solar model, unit system and parameter set.
#[derive(Debug, Clone, Copy)]
pub struct PrimakoffFlux<'a> {
    solar: &'a SolarModel,
    units: UnitSystem,
    params: PrimakoffParams,
    quad: QuadConfig,
}

impl<'a> PrimakoffFlux<'a> {
    pub fn new(solar: &'a SolarModel, units: UnitSystem, params: PrimakoffParams) -> Self {
        PrimakoffFlux {
            solar,
            units,
            params,
            quad: QuadConfig::default(),
        }
    }

    /// Validate and resolve a configuration record.
    pub fn from_config(
        solar: &'a SolarModel,
        units: UnitSystem,
        config: &FluxConfig,
    ) -> AxionResult<Self> {
        config.validate()?;
        Ok(PrimakoffFlux {
            solar,
            units,
            params: config.resolve(&units),
            quad: quad_config(&config.quadrature),
        })
    }

    pub fn with_quadrature(self, quad: QuadConfig) -> Self {
        PrimakoffFlux { quad, ..self }
    }

    /// Same evaluator for another axion mass (base units).
    pub fn with_axion_mass(self, axion_mass: f64) -> Self {
        PrimakoffFlux {
            params: self.params.with_axion_mass(axion_mass),
            ..self
        }
    }

    pub fn estimate(&self, energy: f64) -> FluxEstimate {
        solar_axion_flux_estimate(energy, self.solar, &self.units, &self.params, &self.quad)
    }

    pub fn flux(&self, energy: f64) -> f64 {
        self.estimate(energy).flux
    }

    /// Flux as a multiple of `prefix` cm⁻² s⁻¹ keV⁻¹.
    pub fn flux_in_units(&self, energy: f64, prefix: f64) -> f64 {
        self.flux(energy) / self.units.flux_unit(prefix)
    }

    /// Spectrum maximum on [lo, hi] by golden-section search.
    ///
    /// `x` is the peak energy and `value` the flux, both in base units.
    pub fn peak(&self, lo: f64, hi: f64) -> ScalarOptimum {
        let tol = PEAK_REL_TOL * (hi - lo).abs();
        golden_section_max(|e| self.flux(e), lo, hi, tol, PEAK_MAX_ITER)
    }
}
