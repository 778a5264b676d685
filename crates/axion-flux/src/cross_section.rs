// ─────────────────────────────────────────────────────────────────────
// Solar Axion Flux — Primakoff Cross Section
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Primakoff conversion γ + X → a + X off a charged target.
//!
//! All quantities share the base unit of one `UnitSystem`; the coupling
//! g has dimension 1/energy. E is the photon energy in the target rest
//! frame, M the target mass, Q its charge in units of e.

use axion_math::quadrature::gauss_kronrod_21;

/// q₊² − q₋² below which the window is integrated directly, in units of q₋².
const NARROW_WINDOW: f64 = 1.0;

/// Momentum-transfer window of one kinematic configuration.
#[derive(Debug, Clone, Copy)]
struct Kinematics {
    q_minus: f64,
    q_plus: f64,
    /// q₊² − q₋², computed without subtracting the roots.
    width: f64,
}

fn kinematics(energy: f64, target_mass: f64, axion_mass: f64) -> Kinematics {
    let e = energy;
    let m = target_mass;
    let ma2 = axion_mass * axion_mass;

    // 4E²M² − 4ma²M(E+M) + ma⁴ = (thr² − ma²)·((√(2EM+M²) + M)² − ma²)
    let threshold = production_threshold(e, m);
    let upper = (2.0 * e * m + m * m).sqrt() + m;
    let discriminant = (threshold - axion_mass) * (threshold + axion_mass) * (upper * upper - ma2);

    let spread = e * discriminant.max(0.0).sqrt();
    let centre = 2.0 * e * e * m - ma2 * (e + m);
    let denom = 2.0 * e + m;

    let q_plus = (centre + spread) / denom;
    Kinematics {
        q_minus: ma2 * ma2 * m / (denom * q_plus),
        q_plus,
        width: 2.0 * spread / denom,
    }
}

/// Kinematic roots (q₋², q₊²) of the squared momentum transfer.
///
/// q²± = [2E²M − ma²(E+M) ± E·√(4E²M² − 4ma²M(E+M) + ma⁴)] / (2E + M)
///
/// The discriminant is evaluated in its factored form
/// (thr² − ma²)·((√(2EM+M²) + M)² − ma²), which stays accurate as ma
/// approaches the threshold, and is clamped at zero beyond it. The
/// smaller root is taken from the product q₋²·q₊² = ma⁴M/(2E+M), which
/// avoids the cancellation of the difference form when ma ≪ E. Only
/// meaningful when [`is_kinematically_allowed`] holds.
pub fn momentum_transfer_bounds(energy: f64, target_mass: f64, axion_mass: f64) -> (f64, f64) {
    let k = kinematics(energy, target_mass, axion_mass);
    (k.q_minus, k.q_plus)
}

/// Heaviest axion producible off a target of mass `target_mass`:
/// √(2EM + M²) − M, evaluated as 2EM/(√(2EM + M²) + M).
pub fn production_threshold(energy: f64, target_mass: f64) -> f64 {
    let root = (2.0 * energy * target_mass + target_mass * target_mass).sqrt();
    2.0 * energy * target_mass / (root + target_mass)
}

pub fn is_kinematically_allowed(energy: f64, target_mass: f64, axion_mass: f64) -> bool {
    axion_mass <= production_threshold(energy, target_mass)
}

/// Closed-form total cross section with a screened Coulomb propagator
/// 1/(q² + k_s²)², integrated from q₋² to q₊²:
///
///   σ = αg²Q²/(128E²M²) · { (q₊²−q₋²)(4ma²−8EM−4M²+q₊²+q₋²−2k_s²)
///       + 2 ln((q₊²+k_s²)/(q₋²+k_s²)) [8E²M² + ma⁴ − 4Ema²M − 4ma²M²]
///       + 2 ln((q₊²+k_s²)/(q₋²+k_s²)) [2k_s²(2EM+M²−ma²) + 2ma⁴M²/k_s² + k_s⁴]
///       − 4 ln(q₊²/q₋²) ma⁴M²/k_s² }
///
/// The integrand factorises as
///
///   dσ/dq² = αg²Q²(M²+2EM)/(32E²M²) · (q² − q₋²)(q₊² − q²) / (q²(q² + k_s²))
///
/// and σ is evaluated from the equivalent partial-fraction form
///
///   −w − (q₋²q₊²/k_s²) ln(q₊²/q₋²) + ((q₋²+k_s²)(q₊²+k_s²)/k_s²) ln(1 + w/(q₋²+k_s²))
///
/// with w = q₊² − q₋². Near threshold σ ∝ w³ while each term is O(w), so
/// for w ≤ q₋² the window is integrated with a single 21-point
/// Gauss–Kronrod panel instead. The result is never negative.
///
/// Returns exactly 0 when `ks_sqr == 0`: the unscreened limit is not
/// covered by this expression and is left unimplemented. The caller is
/// responsible for the threshold check.
pub fn total_cross_section(
    energy: f64,
    ks_sqr: f64,
    charge: f64,
    axion_mass: f64,
    target_mass: f64,
    alpha_em: f64,
    coupling: f64,
) -> f64 {
    if ks_sqr == 0.0 {
        // TODO: unscreened total cross section (needs its own q² → 0 treatment)
        return 0.0;
    }

    let e = energy;
    let m = target_mass;
    let ks = ks_sqr;
    let Kinematics {
        q_minus,
        q_plus,
        width,
    } = kinematics(e, m, axion_mass);
    if width == 0.0 {
        return 0.0;
    }

    let coeff =
        alpha_em * coupling * coupling * charge * charge * (m * m + 2.0 * e * m) / (32.0 * e * e * m * m);

    let window = if width <= NARROW_WINDOW * q_minus {
        narrow_window_integral(q_minus, width, ks)
    } else {
        // q₋²q₊² ∝ ma⁴, so the term vanishes with ma and when q₋² underflows
        let log_bounds = if axion_mass == 0.0 || q_minus == 0.0 {
            0.0
        } else {
            q_minus * q_plus / ks * (q_plus / q_minus).ln()
        };
        let log_screened = (width / (q_minus + ks)).ln_1p();
        -width - log_bounds + (q_minus + ks) * (q_plus + ks) / ks * log_screened
    };

    (coeff * window).max(0.0)
}

/// ∫ (q² − q₋²)(q₊² − q²) / (q²(q² + k_s²)) dq² over a window of width w,
/// as w³ ∫₀¹ x(1 − x) / (q²(q² + k_s²)) dx with q² = q₋² + w·x.
fn narrow_window_integral(q_minus: f64, width: f64, ks_sqr: f64) -> f64 {
    let mut integrand = |x: f64| {
        let q_sqr = q_minus + width * x;
        x * (1.0 - x) / (q_sqr * (q_sqr + ks_sqr))
    };
    width.powi(3) * gauss_kronrod_21(&mut integrand, 0.0, 1.0).value
}

/// Squared Debye form factor F² = q²/(q² + k_s²); 1 without screening.
pub fn screened_form_factor_sqr(q_sqr: f64, ks_sqr: f64) -> f64 {
    if ks_sqr == 0.0 {
        return 1.0;
    }
    q_sqr / (q_sqr + ks_sqr)
}

/// dσ/dt in Mandelstam variables (t < 0), including the Debye form factor.
///
/// With s = M² + 2EM, integrating over t ∈ [−q₊², −q₋²] reproduces
/// [`total_cross_section`].
#[allow(clippy::too_many_arguments)]
pub fn differential_cross_section_t(
    s: f64,
    t: f64,
    axion_mass: f64,
    target_mass: f64,
    charge: f64,
    alpha_em: f64,
    coupling: f64,
    ks_sqr: f64,
) -> f64 {
    let m2 = target_mass * target_mass;
    let ma2 = axion_mass * axion_mass;
    let form = screened_form_factor_sqr(-t, ks_sqr);

    let numerator = ma2 * ma2 * m2 - ma2 * t * (s + m2) + t * ((s - m2).powi(2) + s * t);
    let denominator = t * t * (s - m2).powi(2);
    -alpha_em * charge * charge * coupling * coupling * form / 8.0 * numerator / denominator
}

/// Angular distribution off an infinitely heavy target, massless axion:
///
///   dσ/dcosθ = (Q²αg²/16) · (1 + cosθ) / (1 + k_s²/(2ω²) − cosθ)
pub fn differential_cross_section_cos_theta(
    photon_energy: f64,
    cos_theta: f64,
    ks_sqr: f64,
    charge: f64,
    alpha_em: f64,
    coupling: f64,
) -> f64 {
    let coeff = charge * charge * alpha_em * coupling * coupling / 16.0;
    let screening = ks_sqr / (2.0 * photon_energy * photon_energy);
    coeff * (1.0 + cos_theta) / (1.0 + screening - cos_theta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axion_math::quadrature::{integrate, QuadConfig};
    use axion_types::units::UnitSystem;

    fn rel(a: f64, b: f64) -> f64 {
        ((a - b) / b).abs()
    }

    #[test]
    fn test_bounds_massless_axion() {
        // ma = 0: q₋² = 0, q₊² = 4E²M/(2E+M)
        let (qm, qp) = momentum_transfer_bounds(2e-3, 938.0, 0.0);
        assert_eq!(qm, 0.0);
        assert!(rel(qp, 4.0 * 4e-6 * 938.0 / (4e-3 + 938.0)) < 1e-12);
    }

    #[test]
    fn test_bounds_ordered_and_positive() {
        let u = UnitSystem::default();
        let e = 5.0 * u.kev;
        for m in [u.electron_mass(), u.proton_mass(), u.helium_mass()] {
            let ma = 0.5 * production_threshold(e, m).min(3.0 * u.kev);
            let (qm, qp) = momentum_transfer_bounds(e, m, ma);
            assert!(qm > 0.0 && qp > qm, "M = {m}: ({qm}, {qp})");
        }
    }

    #[test]
    fn test_bounds_coincide_at_threshold() {
        let u = UnitSystem::default();
        let e = 10.0 * u.kev;
        let m = u.electron_mass();
        let (qm, qp) = momentum_transfer_bounds(e, m, production_threshold(e, m));
        assert!(qm.is_finite() && qp.is_finite());
        assert!(rel(qp, qm) < 1e-4, "({qm}, {qp})");
    }

    #[test]
    fn test_bounds_product_matches_difference_form() {
        let u = UnitSystem::default();
        let (e, m, ma) = (5.0 * u.kev, u.proton_mass(), 2.0 * u.kev);
        let (qm, qp) = momentum_transfer_bounds(e, m, ma);
        let centre = 2.0 * e * e * m - ma * ma * (e + m);
        let disc = 4.0 * e * e * m * m - 4.0 * ma * ma * m * (e + m) + ma.powi(4);
        let naive = (centre - e * disc.sqrt()) / (2.0 * e + m);
        assert!(rel(qm, naive) < 1e-9, "{qm} vs {naive}");
        assert!(rel(qm * qp, ma.powi(4) * m / (2.0 * e + m)) < 1e-14);
    }

    #[test]
    fn test_light_axion_continuous_with_massless() {
        // q₋² ≈ ma⁴/(4E²) is far below the round-off of the difference form here
        let u = UnitSystem::default();
        let e = 7.0 * u.kev;
        let ks = (9.0 * u.kev).powi(2);
        for m in [u.electron_mass(), u.proton_mass(), u.helium_mass()] {
            let massless = total_cross_section(e, ks, 1.0, 0.0, m, u.alpha_em, 1e-13);
            for ma in [1e-7 * u.kev, 1e-3 * u.kev, 1e-200] {
                let (qm, _) = momentum_transfer_bounds(e, m, ma);
                assert!(qm >= 0.0);
                let sigma = total_cross_section(e, ks, 1.0, ma, m, u.alpha_em, 1e-13);
                assert!(sigma.is_finite() && sigma > 0.0, "M = {m}, ma = {ma}: {sigma}");
                assert!(rel(sigma, massless) < 1e-5, "M = {m}, ma = {ma}");
            }
        }
    }

    #[test]
    fn test_threshold_heavy_target_approaches_energy() {
        // M → ∞: √(2EM + M²) − M → E
        let e = 1e-3;
        let thr = production_threshold(e, 1e6);
        assert!(rel(thr, e) < 1e-8, "thr = {thr}");
        assert!(is_kinematically_allowed(e, 1e6, 0.999 * e));
        assert!(!is_kinematically_allowed(e, 1e6, 1.001 * e));
    }

    #[test]
    fn test_threshold_matches_direct_form() {
        let u = UnitSystem::default();
        for m in [u.electron_mass(), u.proton_mass(), u.helium_mass()] {
            for e_kev in [0.1, 1.0, 10.0, 20.0] {
                let e = e_kev * u.kev;
                let direct = (2.0 * e * m + m * m).sqrt() - m;
                assert!(rel(production_threshold(e, m), direct) < 1e-9, "M = {m}, E = {e_kev}");
            }
        }
    }

    #[test]
    fn test_cross_section_vanishes_smoothly_at_threshold() {
        let u = UnitSystem::default();
        let e = 10.0 * u.kev;
        for m in [u.electron_mass(), u.proton_mass(), u.helium_mass()] {
            let thr = production_threshold(e, m);
            for ks_kev in [0.5, 9.0, 20.0] {
                let ks = (ks_kev * u.kev).powi(2);
                let sigma_at = |ma: f64| total_cross_section(e, ks, 2.0, ma, m, u.alpha_em, 1e-13);
                let mut previous = sigma_at(0.5 * thr);
                for k in 1..=14 {
                    let sigma = sigma_at(thr * (1.0 - 10f64.powi(-k)));
                    assert!(sigma.is_finite() && sigma >= 0.0, "M = {m}, k = {k}: {sigma}");
                    assert!(sigma <= previous, "M = {m}, k = {k}: {sigma} > {previous}");
                    previous = sigma;
                }
                assert_eq!(sigma_at(thr), 0.0);
            }
        }
    }

    #[test]
    fn test_near_threshold_matches_mandelstam_integral() {
        let u = UnitSystem::default();
        let g = 1e-13;
        let e = 10.0 * u.kev;
        let ks = (9.0 * u.kev).powi(2);
        let cfg = QuadConfig {
            rel_tol: 1e-11,
            ..QuadConfig::default()
        };
        for m in [u.proton_mass(), u.helium_mass()] {
            // 0.9 uses the logarithmic form, 0.99 and 0.999 the direct window
            for fraction in [0.9, 0.99, 0.999] {
                let ma = fraction * production_threshold(e, m);
                let s = m * m + 2.0 * e * m;
                let (qm, qp) = momentum_transfer_bounds(e, m, ma);
                let integral = integrate(
                    |q2| differential_cross_section_t(s, -q2, ma, m, 1.0, u.alpha_em, g, ks),
                    qm,
                    qp,
                    &cfg,
                );
                let total = total_cross_section(e, ks, 1.0, ma, m, u.alpha_em, g);
                assert!(
                    rel(integral.value, total) < 1e-6,
                    "M = {m}, fraction {fraction}: {} vs {total}",
                    integral.value
                );
            }
        }
    }

    #[test]
    fn test_zero_screening_returns_zero() {
        assert_eq!(total_cross_section(1e-3, 0.0, 1.0, 0.0, 938.0, 0.0073, 1e-13), 0.0);
        assert_eq!(total_cross_section(1e-2, 0.0, 2.0, 5e-3, 3727.0, 0.0073, 1e-13), 0.0);
    }

    #[test]
    fn test_massless_axion_finite() {
        let u = UnitSystem::default();
        let sigma = total_cross_section(
            u.kev,
            (9.0 * u.kev).powi(2),
            1.0,
            0.0,
            u.proton_mass(),
            u.alpha_em,
            1e-13,
        );
        assert!(sigma.is_finite() && sigma > 0.0, "sigma = {sigma}");
    }

    #[test]
    fn test_charge_squared_scaling() {
        let args = (3e-3, 8e-5, 1e-3, 3727.0, 0.0073, 1e-13);
        let s1 = total_cross_section(args.0, args.1, 1.0, args.2, args.3, args.4, args.5);
        let s2 = total_cross_section(args.0, args.1, -2.0, args.2, args.3, args.4, args.5);
        assert!(rel(s2, 4.0 * s1) < 1e-12);
    }

    #[test]
    fn test_mandelstam_integral_matches_total() {
        let u = UnitSystem::default();
        let g = 1e-13;
        let ks = (9.0 * u.kev).powi(2);
        let cfg = QuadConfig {
            rel_tol: 1e-11,
            ..QuadConfig::default()
        };
        for m in [u.proton_mass(), u.helium_mass()] {
            for (e_kev, ma_kev) in [(1.0, 0.0), (5.0, 2.0), (10.0, 3.0)] {
                let e = e_kev * u.kev;
                let ma = ma_kev * u.kev;
                let s = m * m + 2.0 * e * m;
                let (qm, qp) = momentum_transfer_bounds(e, m, ma);
                let integral = integrate(
                    |q2| differential_cross_section_t(s, -q2, ma, m, 1.0, u.alpha_em, g, ks),
                    qm,
                    qp,
                    &cfg,
                );
                let total = total_cross_section(e, ks, 1.0, ma, m, u.alpha_em, g);
                assert!(
                    rel(integral.value, total) < 1e-6,
                    "M = {m}, E = {e_kev} keV, ma = {ma_kev} keV: {} vs {total}",
                    integral.value
                );
            }
        }
    }

    #[test]
    fn test_angular_integral_matches_heavy_target_total() {
        let u = UnitSystem::default();
        let g = 1e-13;
        for e_kev in [0.5, 1.0, 3.0, 10.0] {
            for ks_kev in [1.0, 9.0] {
                let e = e_kev * u.kev;
                let ks = (ks_kev * u.kev).powi(2);
                let integral = integrate(
                    |c| differential_cross_section_cos_theta(e, c, ks, 1.0, u.alpha_em, g),
                    -1.0,
                    1.0,
                    &QuadConfig::default(),
                );
                let total = total_cross_section(e, ks, 1.0, 0.0, u.helium_mass(), u.alpha_em, g);
                assert!(
                    rel(integral.value, total) < 1e-4,
                    "E = {e_kev} keV, k_s = {ks_kev} keV: {} vs {total}",
                    integral.value
                );
            }
        }
    }

    #[test]
    fn test_form_factor_limits() {
        assert_eq!(screened_form_factor_sqr(1.0, 0.0), 1.0);
        assert_eq!(screened_form_factor_sqr(0.0, 2.0), 0.0);
        assert!((screened_form_factor_sqr(1e6, 1.0) - 1.0).abs() < 1e-5);
    }
}
