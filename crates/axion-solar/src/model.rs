// ─────────────────────────────────────────────────────────────────────
// Solar Axion Flux — Solar Model
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Radial profile of the solar interior.
//!
//! Reads the whitespace-delimited standard-solar-model layout
//! (Mass, Radius, Temp, Rho, Pres, Lumi, H1, He4, He3, C12, ...) and
//! serves linearly interpolated values at normalised radius r ∈ [0, 1].
//! Only the columns the Primakoff rate needs are kept.

use crate::reference::{helium_fraction, REFERENCE_PROFILE};
use axion_math::interp::{interp1d, is_non_decreasing};
use axion_types::error::{AxionError, AxionResult};
use axion_types::units::UnitSystem;
use ndarray::Array2;
use std::io::Read;

/// Column indices in the model file.
const FILE_RADIUS: usize = 1;
const FILE_TEMPERATURE: usize = 2;
const FILE_DENSITY: usize = 3;
const FILE_HYDROGEN: usize = 6;
const FILE_HELIUM4: usize = 7;

/// Minimum number of columns a model row must carry.
pub const MIN_COLUMNS: usize = FILE_HELIUM4 + 1;

/// Column indices in the stored profile.
const RADIUS: usize = 0;
const TEMPERATURE: usize = 1;
const DENSITY: usize = 2;
const HYDROGEN: usize = 3;
const HELIUM4: usize = 4;

/// Immutable tabulated solar profile.
#[derive(Debug, Clone)]
pub struct SolarModel {
    /// Rows of (r, T [K], ρ [g/cm³], X_H, Y_He4).
    profile: Array2<f64>,
}

impl SolarModel {
    /// Built-in coarse profile, see [`crate::reference`].
    pub fn reference() -> Self {
        let mut profile = Array2::zeros((REFERENCE_PROFILE.len(), 5));
        for (i, &[r, t_mk, rho, x]) in REFERENCE_PROFILE.iter().enumerate() {
            profile[[i, RADIUS]] = r;
            profile[[i, TEMPERATURE]] = t_mk * 1e6;
            profile[[i, DENSITY]] = rho;
            profile[[i, HYDROGEN]] = x;
            profile[[i, HELIUM4]] = helium_fraction(x);
        }
        SolarModel { profile }
    }

    /// Load a model file.
    pub fn from_file(path: &str) -> AxionResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn from_reader<R: Read>(mut reader: R) -> AxionResult<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::parse(&text)
    }

    /// Parse the text of a model file. Blank lines and `#` comments are skipped.
    pub fn parse(text: &str) -> AxionResult<Self> {
        let mut rows: Vec<[f64; 5]> = Vec::new();

        for (idx, raw_line) in text.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let cols = line
                .split_whitespace()
                .map(|tok| parse_value(tok, line_no))
                .collect::<AxionResult<Vec<f64>>>()?;
            if cols.len() < MIN_COLUMNS {
                return Err(AxionError::SolarModelFormat {
                    line: line_no,
                    message: format!("expected at least {MIN_COLUMNS} columns, found {}", cols.len()),
                });
            }

            let radius = cols[FILE_RADIUS];
            if !(0.0..=1.0).contains(&radius) {
                return Err(AxionError::SolarModelFormat {
                    line: line_no,
                    message: format!("radius {radius} outside [0, 1]"),
                });
            }
            if let Some(prev) = rows.last() {
                if radius < prev[RADIUS] {
                    return Err(AxionError::SolarModelFormat {
                        line: line_no,
                        message: format!("radius {radius} decreases (previous {})", prev[RADIUS]),
                    });
                }
            }

            rows.push([
                radius,
                cols[FILE_TEMPERATURE],
                cols[FILE_DENSITY],
                cols[FILE_HYDROGEN],
                cols[FILE_HELIUM4],
            ]);
        }

        if rows.len() < 2 {
            return Err(AxionError::EmptyTable(format!(
                "solar model needs at least 2 rows, found {}",
                rows.len()
            )));
        }

        let mut profile = Array2::zeros((rows.len(), 5));
        for (i, row) in rows.iter().enumerate() {
            for (j, &v) in row.iter().enumerate() {
                profile[[i, j]] = v;
            }
        }
        debug_assert!(is_non_decreasing(profile.column(RADIUS)));
        Ok(SolarModel { profile })
    }

    /// Number of radial nodes in the table.
    pub fn node_count(&self) -> usize {
        self.profile.nrows()
    }

    fn column_at(&self, column: usize, r: f64) -> f64 {
        assert!(
            (0.0..=1.0).contains(&r),
            "normalised solar radius must lie in [0, 1], got {r}"
        );
        interp1d(self.profile.column(RADIUS), self.profile.column(column), r)
    }

    /// Temperature at `r` in energy units.
    ///
    /// # Panics
    /// If `r` is outside [0, 1]; likewise for every other lookup.
    pub fn temperature(&self, r: f64, units: &UnitSystem) -> f64 {
        self.column_at(TEMPERATURE, r) * units.kelvin
    }

    /// Mass density at `r`.
    pub fn density(&self, r: f64, units: &UnitSystem) -> f64 {
        self.column_at(DENSITY, r) * units.gram / units.cm.powi(3)
    }

    /// Nucleon-equivalent number density ρ / m_p.
    ///
    /// Counts one electron per proton mass, so it doubles as the electron
    /// density of a fully ionised H/He plasma.
    pub fn proton_number_density(&self, r: f64, units: &UnitSystem) -> f64 {
        self.density(r, units) / units.proton_mass()
    }

    /// ⁴He nucleus number density ρ·Y / m_He.
    pub fn helium_number_density(&self, r: f64, units: &UnitSystem) -> f64 {
        self.density(r, units) * self.helium_mass_fraction(r) / units.helium_mass()
    }

    pub fn hydrogen_mass_fraction(&self, r: f64) -> f64 {
        self.column_at(HYDROGEN, r)
    }

    pub fn helium_mass_fraction(&self, r: f64) -> f64 {
        self.column_at(HELIUM4, r)
    }
}

fn parse_value(token: &str, line: usize) -> AxionResult<f64> {
    let val = token.parse::<f64>().map_err(|e| AxionError::SolarModelFormat {
        line,
        message: format!("cannot parse '{token}' as a number: {e}"),
    })?;
    if !val.is_finite() {
        return Err(AxionError::SolarModelFormat {
            line,
            message: format!("non-finite value '{token}'"),
        });
    }
    Ok(val)
}
