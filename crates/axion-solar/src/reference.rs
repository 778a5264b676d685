// ─────────────────────────────────────────────────────────────────────
// Solar Axion Flux — Reference Solar Profile
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Coarse built-in standard solar model.
//!
//! 25 radial nodes condensed from a B16-type standard solar model. Good
//! to a few percent in the core, where the Primakoff emission comes
//! from; use a full model file for precision work.

/// Mass fraction of elements heavier than helium.
pub const METALLICITY: f64 = 0.015;

/// Rows of (r / R_sun, T [10⁶ K], ρ [g/cm³], X_H).
pub const REFERENCE_PROFILE: [[f64; 4]; 25] = [
    [0.00, 15.7, 152.0, 0.34],
    [0.02, 15.6, 148.0, 0.35],
    [0.05, 15.0, 132.0, 0.40],
    [0.08, 14.0, 110.0, 0.47],
    [0.10, 13.3, 96.0, 0.52],
    [0.12, 12.5, 83.0, 0.57],
    [0.15, 11.4, 65.0, 0.63],
    [0.20, 9.6, 41.0, 0.68],
    [0.25, 8.1, 24.0, 0.70],
    [0.30, 6.8, 13.5, 0.71],
    [0.35, 5.9, 7.4, 0.72],
    [0.40, 5.2, 4.0, 0.72],
    [0.45, 4.6, 2.2, 0.72],
    [0.50, 4.1, 1.3, 0.72],
    [0.55, 3.6, 0.75, 0.72],
    [0.60, 3.2, 0.45, 0.72],
    [0.65, 2.8, 0.28, 0.72],
    [0.70, 2.3, 0.18, 0.74],
    [0.75, 1.8, 0.12, 0.74],
    [0.80, 1.35, 0.079, 0.74],
    [0.85, 0.95, 0.048, 0.74],
    [0.90, 0.58, 0.024, 0.74],
    [0.95, 0.24, 0.0073, 0.74],
    [0.98, 0.08, 0.0013, 0.74],
    [1.00, 0.0057, 2e-7, 0.74],
];

/// Helium-4 mass fraction that closes X + Y + Z = 1.
pub fn helium_fraction(hydrogen: f64) -> f64 {
    1.0 - hydrogen - METALLICITY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_grid_spans_unit_interval() {
        assert_eq!(REFERENCE_PROFILE[0][0], 0.0);
        assert_eq!(REFERENCE_PROFILE[REFERENCE_PROFILE.len() - 1][0], 1.0);
        for w in REFERENCE_PROFILE.windows(2) {
            assert!(w[1][0] > w[0][0], "radius not increasing at {}", w[1][0]);
        }
    }

    #[test]
    fn test_profile_physically_ordered() {
        for w in REFERENCE_PROFILE.windows(2) {
            assert!(w[1][1] < w[0][1], "temperature must fall outward");
            assert!(w[1][2] < w[0][2], "density must fall outward");
        }
        for row in REFERENCE_PROFILE.iter() {
            let y = helium_fraction(row[3]);
            assert!(y > 0.0 && y < 1.0, "Y = {y} at r = {}", row[0]);
        }
    }
}
