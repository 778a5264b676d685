// ─────────────────────────────────────────────────────────────────────
// Solar Axion Flux — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Physical constants. Values in SI or MeV; conversion into a chosen
//! base unit goes through [`crate::units::UnitSystem`].

/// Planck constant h (J·s), exact SI value.
pub const PLANCK_H_SI: f64 = 6.626_070_15e-34;

/// Speed of light (m/s), exact SI value.
pub const SPEED_OF_LIGHT_SI: f64 = 299_792_458.0;

/// Boltzmann constant (J/K), exact SI value.
pub const BOLTZMANN_SI: f64 = 1.380_649e-23;

/// Elementary charge (C), exact SI value.
pub const ELEMENTARY_CHARGE_SI: f64 = 1.602_176_634e-19;

/// Fine-structure constant at zero momentum transfer.
pub const ALPHA_EM: f64 = 1.0 / 137.035_999_084_21;

/// Proton rest mass (MeV).
pub const PROTON_MASS_MEV: f64 = 938.272_088_16;

/// Electron rest mass (MeV).
pub const ELECTRON_MASS_MEV: f64 = 0.510_998_95;

/// Helium-4 nucleus (alpha particle) rest mass (MeV).
pub const HELIUM_MASS_MEV: f64 = 3727.379_406_6;

/// Nominal solar radius (m), IAU 2015 B3.
pub const SOLAR_RADIUS_M: f64 = 6.957e8;

/// Astronomical unit (m).
pub const SUN_EARTH_DISTANCE_M: f64 = 1.495_978_707e11;

/// Charge number of a fully ionised helium nucleus.
pub const HELIUM_CHARGE: f64 = 2.0;

/// Largest argument for which `f64::exp` stays finite (exp(709.78) overflows).
pub const EXP_OVERFLOW_LIMIT: f64 = 709.0;

/// Reference axion-photon coupling (GeV⁻¹).
pub const DEFAULT_COUPLING_GEV_INV: f64 = 1e-10;

/// Prefix of the conventional helioscope flux unit, 10¹⁰ cm⁻² s⁻¹ keV⁻¹.
pub const FLUX_UNIT_PREFIX: f64 = 1e10;
