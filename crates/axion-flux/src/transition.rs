// ─────────────────────────────────────────────────────────────────────
// Solar Axion Flux — Transition Rate
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Photon → axion conversion rate Γ = Σ_X n_X σ_X at one solar radius.

use crate::cross_section::{is_kinematically_allowed, total_cross_section};
use crate::screening::screening_scale_sqr;
use crate::species::{PlasmaDensities, TargetSpecies};
use axion_solar::SolarModel;
use axion_types::config::PrimakoffParams;
use axion_types::units::UnitSystem;

/// Per-target contributions n_X σ_X.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpeciesRates {
    pub electron: f64,
    pub proton: f64,
    pub helium: f64,
}

impl SpeciesRates {
    pub fn total(&self) -> f64 {
        self.electron + self.proton + self.helium
    }

    pub fn get(&self, species: TargetSpecies) -> f64 {
        match species {
            TargetSpecies::Electron => self.electron,
            TargetSpecies::Proton => self.proton,
            TargetSpecies::Helium => self.helium,
        }
    }

    fn slot(&mut self, species: TargetSpecies) -> &mut f64 {
        match species {
            TargetSpecies::Electron => &mut self.electron,
            TargetSpecies::Proton => &mut self.proton,
            TargetSpecies::Helium => &mut self.helium,
        }
    }
}

/// Conversion rate split by target species.
///
/// A species whose production threshold lies below the axion mass
/// contributes exactly 0; the cross section is not evaluated for it.
pub fn transition_rate_by_species(
    energy: f64,
    r: f64,
    solar: &SolarModel,
    units: &UnitSystem,
    params: &PrimakoffParams,
) -> SpeciesRates {
    let densities = PlasmaDensities::at(solar, r, units, params.proton_density);
    let ks_sqr = screening_scale_sqr(
        &densities,
        solar.temperature(r, units),
        units.alpha_em,
        params.debye_screening,
    );

    let mut rates = SpeciesRates::default();
    for species in TargetSpecies::ALL {
        let mass = species.mass(units);
        if !is_kinematically_allowed(energy, mass, params.axion_mass) {
            continue;
        }
        let sigma = total_cross_section(
            energy,
            ks_sqr,
            species.charge(),
            params.axion_mass,
            mass,
            units.alpha_em,
            params.coupling,
        );
        *rates.slot(species) = species.density(&densities) * sigma;
    }
    rates
}

/// Total conversion rate Γ(E, r).
pub fn transition_rate(
    energy: f64,
    r: f64,
    solar: &SolarModel,
    units: &UnitSystem,
    params: &PrimakoffParams,
) -> f64 {
    transition_rate_by_species(energy, r, solar, units, params).total()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cross_section::production_threshold;

    fn setup() -> (SolarModel, UnitSystem) {
        (SolarModel::reference(), UnitSystem::default())
    }

    #[test]
    fn test_massless_rate_positive_everywhere() {
        let (solar, u) = setup();
        let params = PrimakoffParams::reference(&u);
        for i in 0..=20 {
            let r = i as f64 / 20.0;
            let rates = transition_rate_by_species(3.0 * u.kev, r, &solar, &u, &params);
            assert!(rates.electron > 0.0 && rates.proton > 0.0 && rates.helium > 0.0, "r = {r}: {rates:?}");
        }
    }

    #[test]
    fn test_total_is_sum() {
        let (solar, u) = setup();
        let params = PrimakoffParams::reference(&u);
        let rates = transition_rate_by_species(2.0 * u.kev, 0.1, &solar, &u, &params);
        let total = transition_rate(2.0 * u.kev, 0.1, &solar, &u, &params);
        assert_eq!(total, rates.total());
        let by_get: f64 = TargetSpecies::ALL.iter().map(|&s| rates.get(s)).sum();
        assert!((by_get - total).abs() <= 1e-15 * total);
    }

    #[test]
    fn test_no_screening_gives_zero_rate() {
        let (solar, u) = setup();
        let params = PrimakoffParams {
            debye_screening: false,
            ..PrimakoffParams::reference(&u)
        };
        assert_eq!(transition_rate(5.0 * u.kev, 0.2, &solar, &u, &params), 0.0);
    }

    #[test]
    fn test_electron_drops_out_above_its_threshold() {
        // Electron threshold at 1 keV is ≈ 0.999 keV; heavier targets stay open
        let (solar, u) = setup();
        let e = 1.0 * u.kev;
        let ma = 0.9995 * u.kev;
        assert!(ma > production_threshold(e, u.electron_mass()));
        let params = PrimakoffParams::reference(&u).with_axion_mass(ma);
        let rates = transition_rate_by_species(e, 0.05, &solar, &u, &params);
        assert_eq!(rates.electron, 0.0);
        assert!(rates.proton > 0.0 && rates.helium > 0.0, "{rates:?}");
    }

    #[test]
    fn test_heavy_target_rates_approach_threshold_from_below() {
        let (solar, u) = setup();
        let e = 10.0 * u.kev;
        for species in [TargetSpecies::Proton, TargetSpecies::Helium] {
            let thr = production_threshold(e, species.mass(&u));
            let rate_at = |ma: f64| {
                let params = PrimakoffParams::reference(&u).with_axion_mass(ma);
                transition_rate_by_species(e, 0.1, &solar, &u, &params).get(species)
            };
            let mut previous = rate_at(0.5 * thr);
            for k in 1..=14 {
                let rate = rate_at(thr * (1.0 - 10f64.powi(-k)));
                assert!(rate.is_finite() && rate >= 0.0, "{species:?}, k = {k}: {rate}");
                assert!(rate <= previous, "{species:?}, k = {k}: {rate} > {previous}");
                previous = rate;
            }
            assert_eq!(rate_at(thr), 0.0);
            assert_eq!(rate_at(thr * (1.0 + 1e-12)), 0.0);
        }
    }

    #[test]
    fn test_rate_scales_with_coupling_squared() {
        let (solar, u) = setup();
        let base = PrimakoffParams::reference(&u);
        let doubled = PrimakoffParams {
            coupling: 2.0 * base.coupling,
            ..base
        };
        let a = transition_rate(4.0 * u.kev, 0.15, &solar, &u, &base);
        let b = transition_rate(4.0 * u.kev, 0.15, &solar, &u, &doubled);
        assert!(((b / a) - 4.0).abs() < 1e-12);
    }
}
