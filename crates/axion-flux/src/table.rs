// ─────────────────────────────────────────────────────────────────────
// Solar Axion Flux — Flux Tables
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Tabulated flux over an (energy, axion mass) grid, stored as CSV with
//! header `photon_energy,axion_mass,flux`.
//!
//! Energies and masses are in keV, flux in 10¹⁰ cm⁻² s⁻¹ keV⁻¹. The
//! energy grid is adaptive: the step shrinks towards the spectrum peak.

use crate::flux::PrimakoffFlux;
use axion_solar::SolarModel;
use axion_types::config::{FluxConfig, TableConfig};
use axion_types::constants::FLUX_UNIT_PREFIX;
use axion_types::error::AxionResult;
use axion_types::units::UnitSystem;
use csv::{ReaderBuilder, Writer};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FluxSample {
    /// Photon energy [keV]
    pub photon_energy: f64,
    /// Axion mass [keV]
    pub axion_mass: f64,
    /// Flux [10¹⁰ cm⁻² s⁻¹ keV⁻¹]
    pub flux: f64,
}

/// Sample the flux spectrum for every axion mass of `table`.
///
/// For each mass the spectrum maximum Φ_max is located first. The walk
/// then starts at `energy_min_kev`; zero-flux points are skipped with
/// step f·Φ_max, recorded points advance by f·Φ_max + f·(Φ_max − Φ),
/// with f = `step_fraction` and every step at least `min_step_kev`.
pub fn generate_flux_table(
    solar: &SolarModel,
    units: &UnitSystem,
    flux_config: &FluxConfig,
    table: &TableConfig,
) -> AxionResult<Vec<FluxSample>> {
    table.validate()?;
    let base = PrimakoffFlux::from_config(solar, *units, flux_config)?;
    let kev = units.kev;
    let flux_unit = units.flux_unit(FLUX_UNIT_PREFIX);

    let mut samples = Vec::new();
    for axion_mass_kev in table.axion_masses_kev() {
        let evaluator = base.with_axion_mass(axion_mass_kev * kev);
        let flux_at = |e_kev: f64| evaluator.flux(e_kev * kev) / flux_unit;

        // Below ma the spectrum is identically zero
        let search_lo = table.energy_min_kev.max(axion_mass_kev);
        let phi_max = if search_lo < table.energy_max_kev {
            let peak = evaluator.peak(search_lo * kev, table.energy_max_kev * kev);
            log::info!(
                "ma = {axion_mass_kev:.3} keV: peak {:.4} at {:.3} keV",
                peak.value / flux_unit,
                peak.x / kev
            );
            peak.value / flux_unit
        } else {
            log::info!("ma = {axion_mass_kev:.3} keV: above the energy window, no samples");
            0.0
        };
        let step_base = table.step_fraction * phi_max;

        let before = samples.len();
        let mut e_kev = table.energy_min_kev;
        while e_kev < table.energy_max_kev {
            let phi = flux_at(e_kev);
            if phi == 0.0 {
                e_kev += step_base.max(table.min_step_kev);
                continue;
            }
            samples.push(FluxSample {
                photon_energy: e_kev,
                axion_mass: axion_mass_kev,
                flux: phi,
            });
            let step = step_base + table.step_fraction * (phi_max - phi);
            e_kev += step.max(table.min_step_kev);
        }
        log::debug!(
            "ma = {axion_mass_kev:.3} keV: {} samples",
            samples.len() - before
        );
    }
    Ok(samples)
}

pub fn write_flux_table_to<W: Write>(writer: W, samples: &[FluxSample]) -> AxionResult<()> {
    let mut wtr = Writer::from_writer(writer);
    for sample in samples {
        wtr.serialize(sample)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_flux_table(path: &str, samples: &[FluxSample]) -> AxionResult<()> {
    let file = std::fs::File::create(path)?;
    write_flux_table_to(file, samples)
}

pub fn read_flux_table_from<R: Read>(reader: R) -> AxionResult<Vec<FluxSample>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);
    let mut samples = Vec::new();
    for record in rdr.deserialize() {
        samples.push(record?);
    }
    Ok(samples)
}

pub fn read_flux_table(path: &str) -> AxionResult<Vec<FluxSample>> {
    let file = std::fs::File::open(path)?;
    read_flux_table_from(file)
}
