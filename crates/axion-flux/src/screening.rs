// ─────────────────────────────────────────────────────────────────────
// Solar Axion Flux — Debye Screening
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Debye–Hückel screening of the target Coulomb fields.
//!
//!   k_s² = 4π α (n_p + n_e + Z_He² n_He) / T

use crate::species::PlasmaDensities;
use std::f64::consts::PI;

/// Squared Debye momentum from explicit densities.
pub fn debye_huckel_k_sqr(
    electron_density: f64,
    proton_density: f64,
    helium_density: f64,
    temperature: f64,
    alpha_em: f64,
) -> f64 {
    let densities = PlasmaDensities {
        electron: electron_density,
        proton: proton_density,
        helium: helium_density,
    };
    debye_momentum_sqr(&densities, temperature, alpha_em)
}

/// k_s² for the local plasma, or 0 with screening disabled.
pub fn screening_scale_sqr(
    densities: &PlasmaDensities,
    temperature: f64,
    alpha_em: f64,
    enabled: bool,
) -> f64 {
    if !enabled {
        return 0.0;
    }
    debye_momentum_sqr(densities, temperature, alpha_em)
}

fn debye_momentum_sqr(densities: &PlasmaDensities, temperature: f64, alpha_em: f64) -> f64 {
    4.0 * PI * alpha_em * densities.charge_weighted_sum() / temperature
}
