// ─────────────────────────────────────────────────────────────────────
// Solar Axion Flux — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::constants::DEFAULT_COUPLING_GEV_INV;
use crate::error::{AxionError, AxionResult};
use crate::units::UnitSystem;
use serde::{Deserialize, Serialize};

/// How the net proton density is derived from the electron density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProtonDensityModel {
    /// n_p = n_e − 2·n_He: local charge neutrality with doubly ionised helium.
    #[default]
    ChargeNeutral,
    /// n_p = n_e.
    EqualToElectron,
}

impl ProtonDensityModel {
    pub fn proton_density(self, electron_density: f64, helium_density: f64) -> f64 {
        match self {
            ProtonDensityModel::ChargeNeutral => electron_density - 2.0 * helium_density,
            ProtonDensityModel::EqualToElectron => electron_density,
        }
    }
}

/// Physics and integration settings for one flux evaluation.
/// Every field is optional in JSON and falls back to its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FluxConfig {
    /// Axion-photon coupling g_aγ [GeV⁻¹] (default: 1e-10)
    #[serde(default = "default_coupling")]
    pub coupling_gev_inv: f64,
    /// Axion mass [keV] (default: 0)
    #[serde(default)]
    pub axion_mass_kev: f64,
    /// Debye-Hückel screening of the target charges (default: true)
    #[serde(default = "default_true")]
    pub debye_screening: bool,
    #[serde(default)]
    pub proton_density: ProtonDensityModel,
    #[serde(default)]
    pub quadrature: QuadratureSettings,
}

/// Tolerances of the radial integral.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadratureSettings {
    /// Relative tolerance (default: 1.49e-8)
    #[serde(default = "default_rel_tol")]
    pub rel_tol: f64,
    /// Absolute tolerance in base units (default: 0, i.e. relative only)
    #[serde(default)]
    pub abs_tol: f64,
    /// Maximum number of interval bisections (default: 200)
    #[serde(default = "default_max_subdivisions")]
    pub max_subdivisions: usize,
}

/// Sampling plan for a tabulated flux grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    /// First photon energy [keV] (default: 0.1)
    #[serde(default = "default_energy_min")]
    pub energy_min_kev: f64,
    /// Photon energies stop below this value [keV] (default: 19)
    #[serde(default = "default_energy_max")]
    pub energy_max_kev: f64,
    /// Largest axion mass of the grid [keV] (default: 4)
    #[serde(default = "default_max_mass")]
    pub max_axion_mass_kev: f64,
    /// Number of masses, linearly spaced from 0 (default: 5)
    #[serde(default = "default_mass_points")]
    pub mass_points: usize,
    /// Energy step as a fraction of the spectrum peak (default: 1e-3)
    #[serde(default = "default_step_fraction")]
    pub step_fraction: f64,
    /// Lower bound on the energy step [keV] (default: 1e-4)
    #[serde(default = "default_min_step")]
    pub min_step_kev: f64,
}

fn default_coupling() -> f64 {
    DEFAULT_COUPLING_GEV_INV
}
fn default_true() -> bool {
    true
}
fn default_rel_tol() -> f64 {
    1.49e-8
}
fn default_max_subdivisions() -> usize {
    200
}
fn default_energy_min() -> f64 {
    0.1
}
fn default_energy_max() -> f64 {
    19.0
}
fn default_max_mass() -> f64 {
    4.0
}
fn default_mass_points() -> usize {
    5
}
fn default_step_fraction() -> f64 {
    1e-3
}
fn default_min_step() -> f64 {
    1e-4
}

impl Default for QuadratureSettings {
    fn default() -> Self {
        QuadratureSettings {
            rel_tol: default_rel_tol(),
            abs_tol: 0.0,
            max_subdivisions: default_max_subdivisions(),
        }
    }
}

impl Default for FluxConfig {
    fn default() -> Self {
        FluxConfig {
            coupling_gev_inv: default_coupling(),
            axion_mass_kev: 0.0,
            debye_screening: true,
            proton_density: ProtonDensityModel::default(),
            quadrature: QuadratureSettings::default(),
        }
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            energy_min_kev: default_energy_min(),
            energy_max_kev: default_energy_max(),
            max_axion_mass_kev: default_max_mass(),
            mass_points: default_mass_points(),
            step_fraction: default_step_fraction(),
            min_step_kev: default_min_step(),
        }
    }
}

/// Physics parameters in the base unit of a [`UnitSystem`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrimakoffParams {
    pub axion_mass: f64,
    pub coupling: f64,
    pub debye_screening: bool,
    pub proton_density: ProtonDensityModel,
}

impl PrimakoffParams {
    /// Reference parameters: massless axion, g = 1e-10 GeV⁻¹, screening on.
    pub fn reference(units: &UnitSystem) -> Self {
        FluxConfig::default().resolve(units)
    }

    pub fn with_axion_mass(self, axion_mass: f64) -> Self {
        PrimakoffParams { axion_mass, ..self }
    }
}

impl FluxConfig {
    /// Load from a JSON file; missing fields take their defaults.
    pub fn from_file(path: &str) -> AxionResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AxionResult<()> {
        if !self.coupling_gev_inv.is_finite() || self.coupling_gev_inv < 0.0 {
            return Err(AxionError::ConfigError(format!(
                "coupling_gev_inv must be finite and >= 0, got {}",
                self.coupling_gev_inv
            )));
        }
        if !self.axion_mass_kev.is_finite() || self.axion_mass_kev < 0.0 {
            return Err(AxionError::ConfigError(format!(
                "axion_mass_kev must be finite and >= 0, got {}",
                self.axion_mass_kev
            )));
        }
        self.quadrature.validate()
    }

    /// Convert to base units once, before entering the physics.
    pub fn resolve(&self, units: &UnitSystem) -> PrimakoffParams {
        PrimakoffParams {
            axion_mass: self.axion_mass_kev * units.kev,
            coupling: units.coupling_from_gev_inv(self.coupling_gev_inv),
            debye_screening: self.debye_screening,
            proton_density: self.proton_density,
        }
    }
}

impl QuadratureSettings {
    pub fn validate(&self) -> AxionResult<()> {
        let tol_ok = |t: f64| t.is_finite() && t >= 0.0;
        if !tol_ok(self.rel_tol) || !tol_ok(self.abs_tol) {
            return Err(AxionError::ConfigError(format!(
                "quadrature tolerances must be finite and >= 0, got rel={} abs={}",
                self.rel_tol, self.abs_tol
            )));
        }
        if self.rel_tol == 0.0 && self.abs_tol == 0.0 {
            return Err(AxionError::ConfigError(
                "at least one quadrature tolerance must be positive".to_string(),
            ));
        }
        if self.max_subdivisions == 0 {
            return Err(AxionError::ConfigError(
                "quadrature max_subdivisions must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl TableConfig {
    pub fn from_file(path: &str) -> AxionResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AxionResult<()> {
        if !(self.energy_min_kev > 0.0 && self.energy_max_kev > self.energy_min_kev) {
            return Err(AxionError::ConfigError(format!(
                "energy window must satisfy 0 < min < max, got [{}, {}]",
                self.energy_min_kev, self.energy_max_kev
            )));
        }
        if !(self.max_axion_mass_kev >= 0.0) || self.mass_points == 0 {
            return Err(AxionError::ConfigError(format!(
                "mass grid needs max_axion_mass_kev >= 0 and mass_points >= 1, got {} / {}",
                self.max_axion_mass_kev, self.mass_points
            )));
        }
        if !(self.step_fraction > 0.0) || !(self.min_step_kev > 0.0) {
            return Err(AxionError::ConfigError(
                "step_fraction and min_step_kev must be > 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Axion masses of the grid [keV], linearly spaced from 0.
    pub fn axion_masses_kev(&self) -> Vec<f64> {
        if self.mass_points == 1 {
            return vec![0.0];
        }
        let step = self.max_axion_mass_kev / (self.mass_points - 1) as f64;
        (0..self.mass_points).map(|i| i as f64 * step).collect()
    }
}
