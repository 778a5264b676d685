// ─────────────────────────────────────────────────────────────────────
// Solar Axion Flux — Optimize
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Derivative-free optimisers.
//!
//! - [`golden_section_max`]: maximum of a unimodal scalar function on a bracket.
//! - [`nelder_mead`]: downhill simplex minimisation in n dimensions, with the
//!   standard reflection/expansion/contraction/shrink coefficients
//!   (ρ = 1, χ = 2, ψ = 0.5, σ = 0.5).

/// 1/φ = (√5 − 1)/2.
const INV_PHI: f64 = 0.618_033_988_749_894_8;

/// Reflection coefficient.
const RHO: f64 = 1.0;
/// Expansion coefficient.
const CHI: f64 = 2.0;
/// Contraction coefficient.
const PSI: f64 = 0.5;
/// Shrink coefficient.
const SIGMA: f64 = 0.5;

/// Relative perturbation of non-zero coordinates in the initial simplex.
const NONZERO_DELTA: f64 = 0.05;
/// Absolute perturbation of zero coordinates in the initial simplex.
const ZERO_DELTA: f64 = 0.000_25;

#[derive(Debug, Clone, Copy)]
pub struct ScalarOptimum {
    pub x: f64,
    pub value: f64,
    pub iterations: usize,
    pub evaluations: usize,
}

/// Golden-section search for the maximum of `f` on [lo, hi].
///
/// Stops once the bracket is narrower than `tol` or after `max_iter`
/// reductions. For a function that is not unimodal on the bracket the
/// result is a local maximum.
pub fn golden_section_max<F: FnMut(f64) -> f64>(
    mut f: F,
    lo: f64,
    hi: f64,
    tol: f64,
    max_iter: usize,
) -> ScalarOptimum {
    let (mut a, mut b) = if lo <= hi { (lo, hi) } else { (hi, lo) };

    let mut c = b - INV_PHI * (b - a);
    let mut d = a + INV_PHI * (b - a);
    let mut fc = f(c);
    let mut fd = f(d);
    let mut evaluations = 2;
    let mut iterations = 0;

    while (b - a) > tol && iterations < max_iter {
        if fc >= fd {
            b = d;
            d = c;
            fd = fc;
            c = b - INV_PHI * (b - a);
            fc = f(c);
        } else {
            a = c;
            c = d;
            fc = fd;
            d = a + INV_PHI * (b - a);
            fd = f(d);
        }
        evaluations += 1;
        iterations += 1;
    }

    let (x, value) = if fc >= fd { (c, fc) } else { (d, fd) };
    ScalarOptimum {
        x,
        value,
        iterations,
        evaluations,
    }
}

/// Nelder–Mead termination settings.
#[derive(Debug, Clone, Copy)]
pub struct NelderMeadConfig {
    /// Largest vertex distance from the best vertex, per coordinate.
    pub x_tol: f64,
    /// Largest function-value spread across the simplex.
    pub f_tol: f64,
    /// `None` means 200 × dimension.
    pub max_iterations: Option<usize>,
    /// `None` means 200 × dimension.
    pub max_evaluations: Option<usize>,
}

impl Default for NelderMeadConfig {
    fn default() -> Self {
        Self {
            x_tol: 1e-4,
            f_tol: 1e-4,
            max_iterations: None,
            max_evaluations: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MinimizeResult {
    pub x: Vec<f64>,
    pub fun: f64,
    pub iterations: usize,
    pub evaluations: usize,
    /// False when a budget ran out before both tolerances were met.
    pub converged: bool,
}

/// Minimise `f` starting from `x0`.
pub fn nelder_mead<F: FnMut(&[f64]) -> f64>(
    mut f: F,
    x0: &[f64],
    config: &NelderMeadConfig,
) -> MinimizeResult {
    let n = x0.len();
    if n == 0 {
        let fun = f(x0);
        return MinimizeResult {
            x: Vec::new(),
            fun,
            iterations: 0,
            evaluations: 1,
            converged: true,
        };
    }
    let max_iterations = config.max_iterations.unwrap_or(200 * n);
    let max_evaluations = config.max_evaluations.unwrap_or(200 * n);

    let mut evaluations = 0usize;
    let mut eval = |x: &[f64], count: &mut usize| {
        *count += 1;
        f(x)
    };

    // Initial simplex: x0 plus one perturbed vertex per coordinate
    let mut sim: Vec<Vec<f64>> = Vec::with_capacity(n + 1);
    sim.push(x0.to_vec());
    for k in 0..n {
        let mut y = x0.to_vec();
        y[k] = if y[k] != 0.0 {
            (1.0 + NONZERO_DELTA) * y[k]
        } else {
            ZERO_DELTA
        };
        sim.push(y);
    }
    let mut fsim: Vec<f64> = sim.iter().map(|v| eval(v, &mut evaluations)).collect();
    sort_simplex(&mut sim, &mut fsim);

    let mut iterations = 1;
    while evaluations < max_evaluations && iterations < max_iterations {
        let x_spread = sim[1..]
            .iter()
            .flat_map(|v| v.iter().zip(&sim[0]).map(|(a, b)| (a - b).abs()))
            .fold(0.0, f64::max);
        let f_spread = fsim[1..]
            .iter()
            .map(|v| (v - fsim[0]).abs())
            .fold(0.0, f64::max);
        if x_spread <= config.x_tol && f_spread <= config.f_tol {
            break;
        }

        // Centroid of all but the worst vertex
        let mut xbar = vec![0.0; n];
        for v in &sim[..n] {
            for (c, x) in xbar.iter_mut().zip(v) {
                *c += x / n as f64;
            }
        }
        let worst = sim[n].clone();
        let along = |t: f64| -> Vec<f64> {
            xbar.iter()
                .zip(&worst)
                .map(|(c, w)| (1.0 + t) * c - t * w)
                .collect()
        };

        let xr = along(RHO);
        let fxr = eval(&xr, &mut evaluations);
        let mut shrink = false;

        if fxr < fsim[0] {
            let xe = along(RHO * CHI);
            let fxe = eval(&xe, &mut evaluations);
            if fxe < fxr {
                sim[n] = xe;
                fsim[n] = fxe;
            } else {
                sim[n] = xr;
                fsim[n] = fxr;
            }
        } else if fxr < fsim[n - 1] {
            sim[n] = xr;
            fsim[n] = fxr;
        } else if fxr < fsim[n] {
            // Outside contraction
            let xc = along(PSI * RHO);
            let fxc = eval(&xc, &mut evaluations);
            if fxc <= fxr {
                sim[n] = xc;
                fsim[n] = fxc;
            } else {
                shrink = true;
            }
        } else {
            // Inside contraction
            let xcc = along(-PSI);
            let fxcc = eval(&xcc, &mut evaluations);
            if fxcc < fsim[n] {
                sim[n] = xcc;
                fsim[n] = fxcc;
            } else {
                shrink = true;
            }
        }

        if shrink {
            let best = sim[0].clone();
            for j in 1..=n {
                for (x, b) in sim[j].iter_mut().zip(&best) {
                    *x = b + SIGMA * (*x - b);
                }
                fsim[j] = eval(&sim[j], &mut evaluations);
            }
        }

        sort_simplex(&mut sim, &mut fsim);
        iterations += 1;
    }

    let converged = evaluations < max_evaluations && iterations < max_iterations;
    MinimizeResult {
        x: sim[0].clone(),
        fun: fsim[0],
        iterations,
        evaluations,
        converged,
    }
}

/// Order vertices by ascending function value (stable, NaN last).
fn sort_simplex(sim: &mut Vec<Vec<f64>>, fsim: &mut Vec<f64>) {
    let mut order: Vec<usize> = (0..fsim.len()).collect();
    order.sort_by(|&i, &j| fsim[i].total_cmp(&fsim[j]));
    *sim = order.iter().map(|&i| sim[i].clone()).collect();
    *fsim = order.iter().map(|&i| fsim[i]).collect();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rosenbrock(x: &[f64]) -> f64 {
        (1.0 - x[0]).powi(2) + 100.0 * (x[1] - x[0] * x[0]).powi(2)
    }

    #[test]
    fn test_golden_section_parabola() {
        let res = golden_section_max(|x| -(x - 2.7).powi(2) + 5.0, 0.0, 10.0, 1e-9, 200);
        assert!((res.x - 2.7).abs() < 1e-6, "x = {}", res.x);
        assert!((res.value - 5.0).abs() < 1e-10);
        assert_eq!(res.evaluations, res.iterations + 2);
    }

    #[test]
    fn test_golden_section_swapped_bracket() {
        let res = golden_section_max(|x: f64| (-x * x).exp(), 3.0, -1.0, 1e-8, 200);
        assert!(res.x.abs() < 1e-5, "x = {}", res.x);
    }

    #[test]
    fn test_golden_section_monotone_hits_edge() {
        let res = golden_section_max(|x| x, 0.0, 1.0, 1e-6, 200);
        assert!(res.x > 1.0 - 1e-5, "x = {}", res.x);
    }

    #[test]
    fn test_golden_section_iteration_budget() {
        let res = golden_section_max(|x| -(x * x), -1.0, 1.0, 0.0, 7);
        assert_eq!(res.iterations, 7);
    }

    #[test]
    fn test_nelder_mead_quadratic_bowl() {
        let f = |x: &[f64]| (x[0] - 1.5).powi(2) + 4.0 * (x[1] + 0.5).powi(2) + 2.0;
        let res = nelder_mead(
            f,
            &[0.0, 0.0],
            &NelderMeadConfig {
                x_tol: 1e-8,
                f_tol: 1e-12,
                ..NelderMeadConfig::default()
            },
        );
        assert!(res.converged);
        assert!((res.x[0] - 1.5).abs() < 1e-5, "x = {:?}", res.x);
        assert!((res.x[1] + 0.5).abs() < 1e-5, "x = {:?}", res.x);
        assert!((res.fun - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_nelder_mead_rosenbrock() {
        let res = nelder_mead(
            rosenbrock,
            &[-1.2, 1.0],
            &NelderMeadConfig {
                x_tol: 1e-8,
                f_tol: 1e-10,
                max_iterations: Some(5000),
                max_evaluations: Some(10000),
            },
        );
        assert!(res.converged, "{res:?}");
        assert!((res.x[0] - 1.0).abs() < 1e-3, "x = {:?}", res.x);
        assert!((res.x[1] - 1.0).abs() < 1e-3, "x = {:?}", res.x);
    }

    #[test]
    fn test_nelder_mead_never_worse_than_start() {
        let x0 = [0.3, -0.7, 2.0];
        let f = |x: &[f64]| x.iter().map(|v| v.powi(4) + v.sin()).sum::<f64>();
        let start = f(&x0);
        let res = nelder_mead(f, &x0, &NelderMeadConfig::default());
        assert!(res.fun <= start);
        assert!(res.evaluations <= 600 + 2 * x0.len());
    }

    #[test]
    fn test_nelder_mead_budget_reports_not_converged() {
        let res = nelder_mead(
            rosenbrock,
            &[-1.2, 1.0],
            &NelderMeadConfig {
                x_tol: 1e-12,
                f_tol: 1e-12,
                max_iterations: Some(10),
                max_evaluations: None,
            },
        );
        assert!(!res.converged);
        assert_eq!(res.iterations, 10);
    }
}
