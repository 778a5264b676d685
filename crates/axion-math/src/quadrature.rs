// ─────────────────────────────────────────────────────────────────────
// Solar Axion Flux — Quadrature
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Globally adaptive Gauss–Kronrod quadrature.
//!
//! Each panel is integrated with the 21-point Kronrod extension of the
//! 10-point Gauss rule; the error estimate follows QUADPACK `qk21`:
//!   err = resasc · min(1, (200·|K − G| / resasc)^1.5)
//! bounded below by the round-off level 50·ε·∫|f|. The panel with the
//! largest error is bisected until
//!   Σ err ≤ max(abs_tol, rel_tol · |Σ K|)
//! or the subdivision budget is spent.

/// Kronrod abscissae on [-1, 1] (positive half, descending; odd indices are the Gauss nodes).
const XGK: [f64; 11] = [
    0.995_657_163_025_808_080_735_527_280_689_003,
    0.973_906_528_517_171_720_077_964_012_084_452,
    0.930_157_491_355_708_226_001_207_180_059_508,
    0.865_063_366_688_984_510_732_096_688_423_493,
    0.780_817_726_586_416_897_063_717_578_345_042,
    0.679_409_568_299_024_406_234_327_365_114_874,
    0.562_757_134_668_604_683_339_000_099_272_694,
    0.433_395_394_129_247_190_799_265_943_165_784,
    0.294_392_862_701_460_198_131_126_603_103_866,
    0.148_874_338_981_631_210_884_826_001_129_720,
    0.0,
];

/// Kronrod weights matching `XGK`.
const WGK: [f64; 11] = [
    0.011_694_638_867_371_874_278_064_396_062_192,
    0.032_558_162_307_964_727_478_818_972_459_390,
    0.054_755_896_574_351_996_031_381_300_244_580,
    0.075_039_674_810_919_952_767_043_140_916_190,
    0.093_125_454_583_697_605_535_065_465_083_366,
    0.109_387_158_802_297_641_899_210_590_325_805,
    0.123_491_976_262_065_851_077_208_814_248_337,
    0.134_709_217_311_473_325_928_054_001_771_707,
    0.142_775_938_577_060_080_797_094_273_138_717,
    0.147_739_104_901_338_491_374_841_515_972_068,
    0.149_445_554_002_916_905_664_936_468_389_821,
];

/// 10-point Gauss weights for `XGK[1], XGK[3], ..., XGK[9]`.
const WG: [f64; 5] = [
    0.066_671_344_308_688_137_593_568_809_893_332,
    0.149_451_349_150_580_593_145_776_339_657_697,
    0.219_086_362_515_982_043_995_534_934_228_163,
    0.269_266_719_309_996_355_091_226_921_569_469,
    0.295_524_224_714_752_870_173_892_994_651_338,
];

/// Function evaluations per panel.
pub const POINTS_PER_PANEL: usize = 21;

#[derive(Debug, Clone, Copy)]
pub struct QuadConfig {
    pub abs_tol: f64,
    pub rel_tol: f64,
    pub max_subdivisions: usize,
}

impl Default for QuadConfig {
    fn default() -> Self {
        Self {
            abs_tol: 0.0,
            rel_tol: 1.49e-8,
            max_subdivisions: 200,
        }
    }
}

#[derive(Debug, Clone)]
pub struct QuadResult {
    pub value: f64,
    pub abs_error: f64,
    pub subdivisions: usize,
    pub evaluations: usize,
    pub converged: bool,
}

/// One integrated panel.
#[derive(Debug, Clone, Copy)]
pub struct Panel {
    pub a: f64,
    pub b: f64,
    pub value: f64,
    pub error: f64,
}

/// 21-point Gauss–Kronrod rule on [a, b].
pub fn gauss_kronrod_21<F: FnMut(f64) -> f64>(f: &mut F, a: f64, b: f64) -> Panel {
    let center = 0.5 * (a + b);
    let half = 0.5 * (b - a);
    let abs_half = half.abs();

    let f_center = f(center);
    let mut res_gauss = 0.0;
    let mut res_kronrod = WGK[10] * f_center;
    let mut res_abs = res_kronrod.abs();

    let mut fv1 = [0.0; 10];
    let mut fv2 = [0.0; 10];
    for j in 0..10 {
        let abscissa = half * XGK[j];
        let f1 = f(center - abscissa);
        let f2 = f(center + abscissa);
        fv1[j] = f1;
        fv2[j] = f2;
        res_kronrod += WGK[j] * (f1 + f2);
        res_abs += WGK[j] * (f1.abs() + f2.abs());
        if j % 2 == 1 {
            res_gauss += WG[j / 2] * (f1 + f2);
        }
    }

    let mean = 0.5 * res_kronrod;
    let mut res_asc = WGK[10] * (f_center - mean).abs();
    for j in 0..10 {
        res_asc += WGK[j] * ((fv1[j] - mean).abs() + (fv2[j] - mean).abs());
    }

    let value = res_kronrod * half;
    res_abs *= abs_half;
    res_asc *= abs_half;

    let mut error = ((res_kronrod - res_gauss) * half).abs();
    if res_asc != 0.0 && error != 0.0 {
        error = res_asc * (200.0 * error / res_asc).powf(1.5).min(1.0);
    }
    if res_abs > f64::MIN_POSITIVE / (50.0 * f64::EPSILON) {
        error = error.max(50.0 * f64::EPSILON * res_abs);
    }

    Panel { a, b, value, error }
}

/// Integrate `f` over [a, b].
///
/// The integrand is treated as a black box; it is never evaluated at
/// the end points.
pub fn integrate<F: FnMut(f64) -> f64>(mut f: F, a: f64, b: f64, config: &QuadConfig) -> QuadResult {
    if a == b {
        return QuadResult {
            value: 0.0,
            abs_error: 0.0,
            subdivisions: 0,
            evaluations: 0,
            converged: true,
        };
    }

    let max_panels = config.max_subdivisions.max(1);
    let mut panels = Vec::with_capacity(max_panels);
    panels.push(gauss_kronrod_21(&mut f, a, b));
    let mut evaluations = POINTS_PER_PANEL;

    loop {
        let value: f64 = panels.iter().map(|p| p.value).sum();
        let abs_error: f64 = panels.iter().map(|p| p.error).sum();
        let tolerance = config.abs_tol.max(config.rel_tol * value.abs());

        let converged = abs_error <= tolerance;
        if converged || panels.len() >= max_panels || !abs_error.is_finite() {
            return QuadResult {
                value,
                abs_error,
                subdivisions: panels.len() - 1,
                evaluations,
                converged,
            };
        }

        let worst = panels
            .iter()
            .enumerate()
            .max_by(|x, y| x.1.error.total_cmp(&y.1.error))
            .map(|(i, _)| i)
            .unwrap_or(0);
        let panel = panels.swap_remove(worst);
        let mid = 0.5 * (panel.a + panel.b);

        // Panel too narrow to split in floating point
        if mid <= panel.a.min(panel.b) || mid >= panel.a.max(panel.b) {
            panels.push(panel);
            let value: f64 = panels.iter().map(|p| p.value).sum();
            let abs_error: f64 = panels.iter().map(|p| p.error).sum();
            return QuadResult {
                value,
                abs_error,
                subdivisions: panels.len() - 1,
                evaluations,
                converged: false,
            };
        }

        panels.push(gauss_kronrod_21(&mut f, panel.a, mid));
        panels.push(gauss_kronrod_21(&mut f, mid, panel.b));
        evaluations += 2 * POINTS_PER_PANEL;
    }
}
