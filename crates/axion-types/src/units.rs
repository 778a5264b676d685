// ─────────────────────────────────────────────────────────────────────
// Solar Axion Flux — Units
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Natural-unit bookkeeping (ħ = c = k_B = 1).
//!
//! Every dimensional quantity is expressed as a multiple of one base
//! energy scale. Construct with the numerical value assigned to 1 MeV:
//! `UnitSystem::new(1.0)` works in MeV, `UnitSystem::new(1e6)` in eV.
//! Physical results divided by the matching unit do not depend on the
//! choice.

use crate::constants::{
    ALPHA_EM, BOLTZMANN_SI, ELECTRON_MASS_MEV, ELEMENTARY_CHARGE_SI, HELIUM_MASS_MEV,
    PLANCK_H_SI, PROTON_MASS_MEV, SOLAR_RADIUS_M, SPEED_OF_LIGHT_SI, SUN_EARTH_DISTANCE_M,
};
use std::f64::consts::PI;

/// Conversion factors into the base energy unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitSystem {
    pub mev: f64,
    pub ev: f64,
    pub kev: f64,
    pub gev: f64,
    pub joule: f64,
    pub meter: f64,
    pub cm: f64,
    pub second: f64,
    pub kg: f64,
    pub gram: f64,
    pub kelvin: f64,
    /// Dimensionless, identical in every base unit.
    pub alpha_em: f64,
}

impl UnitSystem {
    /// Build the unit system in which 1 MeV has the numerical value `mev`.
    pub fn new(mev: f64) -> Self {
        assert!(
            mev.is_finite() && mev > 0.0,
            "UnitSystem requires a finite positive MeV scale, got {mev}"
        );

        let hbar_si = PLANCK_H_SI / (2.0 * PI);

        let ev = 1e-6 * mev;
        let kev = 1e-3 * mev;
        let gev = 1e3 * mev;
        let joule = ev / ELEMENTARY_CHARGE_SI;

        // ħ = c = 1: 1 m = (ħc / J) / (ħ_SI c_SI)
        let meter = (1.0 / joule) / (hbar_si * SPEED_OF_LIGHT_SI);
        let cm = 1e-2 * meter;
        let second = SPEED_OF_LIGHT_SI * meter;

        let kg = joule / (meter * meter / (second * second));
        let gram = 1e-3 * kg;
        let kelvin = BOLTZMANN_SI * joule;

        UnitSystem {
            mev,
            ev,
            kev,
            gev,
            joule,
            meter,
            cm,
            second,
            kg,
            gram,
            kelvin,
            alpha_em: ALPHA_EM,
        }
    }

    pub fn proton_mass(&self) -> f64 {
        PROTON_MASS_MEV * self.mev
    }

    pub fn electron_mass(&self) -> f64 {
        ELECTRON_MASS_MEV * self.mev
    }

    pub fn helium_mass(&self) -> f64 {
        HELIUM_MASS_MEV * self.mev
    }

    pub fn solar_radius(&self) -> f64 {
        SOLAR_RADIUS_M * self.meter
    }

    pub fn sun_earth_distance(&self) -> f64 {
        SUN_EARTH_DISTANCE_M * self.meter
    }

    /// Differential flux unit `prefix` cm⁻² s⁻¹ keV⁻¹.
    pub fn flux_unit(&self, prefix: f64) -> f64 {
        prefix / (self.cm * self.cm * self.second * self.kev)
    }

    /// Express an energy in keV.
    pub fn to_kev(&self, energy: f64) -> f64 {
        energy / self.kev
    }

    /// Express a coupling given in GeV⁻¹ in the base unit.
    pub fn coupling_from_gev_inv(&self, g_gev_inv: f64) -> f64 {
        g_gev_inv / self.gev
    }
}

impl Default for UnitSystem {
    /// MeV as the base unit.
    fn default() -> Self {
        UnitSystem::new(1.0)
    }
}
