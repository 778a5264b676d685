// ─────────────────────────────────────────────────────────────────────
// Solar Axion Flux — Interp
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Piecewise-linear interpolation on a tabulated 1D grid.

use ndarray::ArrayView1;

/// Linear interpolation of `fp(xp)` at `x`.
///
/// `xp` must be non-decreasing. Outside `[xp[0], xp[n-1]]` the end values
/// are returned (no extrapolation).
pub fn interp1d(xp: ArrayView1<f64>, fp: ArrayView1<f64>, x: f64) -> f64 {
    let n = xp.len();
    assert!(n > 0, "interp1d requires at least one node");
    assert_eq!(n, fp.len(), "xp and fp must have equal length");

    if x <= xp[0] {
        return fp[0];
    }
    if x >= xp[n - 1] {
        return fp[n - 1];
    }

    // Bisection: xp[lo] <= x < xp[hi]
    let mut lo = 0usize;
    let mut hi = n - 1;
    while hi - lo > 1 {
        let mid = (lo + hi) / 2;
        if xp[mid] <= x {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    let t = (x - xp[lo]) / (xp[hi] - xp[lo]);
    (1.0 - t) * fp[lo] + t * fp[hi]
}

/// True when every node is >= its predecessor and all are finite.
pub fn is_non_decreasing(xp: ArrayView1<f64>) -> bool {
    xp.iter().all(|v| v.is_finite()) && xp.windows(2).into_iter().all(|w| w[1] >= w[0])
}
