// ─────────────────────────────────────────────────────────────────────
// Solar Axion Flux — Approximate Flux
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Four-parameter empirical surrogate of the solar axion spectrum.
//!
//!   Φ ≈ A · (E/keV)^α · exp(−(E/keV)/β) · S(E, ma, γ)   [10¹⁰ cm⁻² s⁻¹ keV⁻¹]
//!   S = max(0, 1 − (ma/E)^γ)  with suppression, else 1

use axion_types::constants::FLUX_UNIT_PREFIX;
use axion_types::units::UnitSystem;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ApproxFluxParams {
    /// Normalisation [10¹⁰ cm⁻² s⁻¹ keV⁻¹]
    pub a: f64,
    /// Power-law index
    pub alpha: f64,
    /// Exponential cutoff [keV]
    pub beta: f64,
    /// Mass-suppression exponent
    pub gamma: f64,
}

impl ApproxFluxParams {
    /// CAST 2007 parametrisation for g = 10⁻¹⁰ GeV⁻¹, with γ = 1.7.
    pub const CAST_2007: ApproxFluxParams = ApproxFluxParams {
        a: 6.02,
        alpha: 2.481,
        beta: 1.205,
        gamma: 1.7,
    };

    /// Surrogate in units of 10¹⁰ cm⁻² s⁻¹ keV⁻¹, energies in keV.
    pub fn flux_in_units(&self, energy_kev: f64, axion_mass_kev: f64, suppress: bool) -> f64 {
        let s = if suppress {
            suppression_factor(energy_kev, axion_mass_kev, self.gamma)
        } else {
            1.0
        };
        self.a * energy_kev.powf(self.alpha) * (-energy_kev / self.beta).exp() * s
    }

    /// Surrogate flux in the base unit of `units`.
    pub fn flux(&self, energy: f64, axion_mass: f64, units: &UnitSystem, suppress: bool) -> f64 {
        self.flux_in_units(units.to_kev(energy), units.to_kev(axion_mass), suppress)
            * units.flux_unit(FLUX_UNIT_PREFIX)
    }

    pub fn to_array(self) -> [f64; 4] {
        [self.a, self.alpha, self.beta, self.gamma]
    }

    pub fn from_slice(p: &[f64]) -> Option<Self> {
        match *p {
            [a, alpha, beta, gamma] => Some(ApproxFluxParams {
                a,
                alpha,
                beta,
                gamma,
            }),
            _ => None,
        }
    }
}

impl Default for ApproxFluxParams {
    fn default() -> Self {
        Self::CAST_2007
    }
}

/// max(0, 1 − (ma/E)^γ).
pub fn suppression_factor(energy: f64, axion_mass: f64, gamma: f64) -> f64 {
    (1.0 - (axion_mass / energy).powf(gamma)).max(0.0)
}

/// CAST 2007 spectrum for a massless axion.
pub fn cast_2007(energy: f64, units: &UnitSystem) -> f64 {
    ApproxFluxParams::CAST_2007.flux(energy, 0.0, units, false)
}
