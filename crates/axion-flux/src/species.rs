// ─────────────────────────────────────────────────────────────────────
// Solar Axion Flux — Target Species
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Charged plasma constituents that act as Primakoff targets.

use axion_solar::SolarModel;
use axion_types::config::ProtonDensityModel;
use axion_types::constants::HELIUM_CHARGE;
use axion_types::units::UnitSystem;

/// Closed set of scattering targets in the solar plasma.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetSpecies {
    Electron,
    Proton,
    /// Fully ionised ⁴He.
    Helium,
}

impl TargetSpecies {
    pub const ALL: [TargetSpecies; 3] = [
        TargetSpecies::Electron,
        TargetSpecies::Proton,
        TargetSpecies::Helium,
    ];

    /// Rest mass in the base unit.
    pub fn mass(self, units: &UnitSystem) -> f64 {
        match self {
            TargetSpecies::Electron => units.electron_mass(),
            TargetSpecies::Proton => units.proton_mass(),
            TargetSpecies::Helium => units.helium_mass(),
        }
    }

    /// Electric charge in units of e.
    pub fn charge(self) -> f64 {
        match self {
            TargetSpecies::Electron => -1.0,
            TargetSpecies::Proton => 1.0,
            TargetSpecies::Helium => HELIUM_CHARGE,
        }
    }

    pub fn density(self, densities: &PlasmaDensities) -> f64 {
        match self {
            TargetSpecies::Electron => densities.electron,
            TargetSpecies::Proton => densities.proton,
            TargetSpecies::Helium => densities.helium,
        }
    }
}

/// Local number densities of the three targets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlasmaDensities {
    pub electron: f64,
    pub proton: f64,
    pub helium: f64,
}

impl PlasmaDensities {
    /// Densities at normalised radius `r`.
    ///
    /// The electron density is ρ/m_p; the proton density follows `model`.
    pub fn at(solar: &SolarModel, r: f64, units: &UnitSystem, model: ProtonDensityModel) -> Self {
        let electron = solar.proton_number_density(r, units);
        let helium = solar.helium_number_density(r, units);
        PlasmaDensities {
            electron,
            proton: model.proton_density(electron, helium),
            helium,
        }
    }

    /// Σ Z²·n over all targets.
    pub fn charge_weighted_sum(&self) -> f64 {
        TargetSpecies::ALL
            .iter()
            .map(|s| s.charge().powi(2) * s.density(self))
            .sum()
    }
}
