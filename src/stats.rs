//! Sample statistics used to place points and reference lines.
//!
//! Moments come from `statrs`; plotting positions, percentile scores and the
//! least-squares line are computed here.

use statrs::statistics::Statistics;

/// Plotting positions `(i - a) / (n - 2a + 1)` for `i = 1..=n`.
///
/// `a = 0` gives the Weibull positions `i / (n + 1)`, `a = 0.5` Hazen's
/// `(i - 0.5) / n`.
pub fn plotting_positions(n: usize, a: f64) -> Vec<f64> {
    let denom = n as f64 - 2.0 * a + 1.0;
    (1..=n).map(|i| (i as f64 - a) / denom).collect()
}

/// Ascending copy of `data`.
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut v = data.to_vec();
    v.sort_by(f64::total_cmp);
    v
}

pub fn mean(x: &[f64]) -> f64 {
    x.mean()
}

/// Standard deviation with `ddof = 0`.
pub fn population_std(x: &[f64]) -> f64 {
    x.population_std_dev()
}

/// Score at percentile `pct` (0..=100) of an ascending slice, linearly
/// interpolating between order statistics.
pub fn score_at_percentile(sorted: &[f64], pct: f64) -> f64 {
    match sorted.len() {
        0 => f64::NAN,
        1 => sorted[0],
        n => {
            let idx = (pct / 100.0).clamp(0.0, 1.0) * (n - 1) as f64;
            let lo = idx.floor() as usize;
            let hi = (lo + 1).min(n - 1);
            let frac = idx - lo as f64;
            sorted[lo] + (sorted[hi] - sorted[lo]) * frac
        }
    }
}

/// Empirical quantiles of an ascending slice at probabilities in `[0, 1]`.
pub fn empirical_quantiles(sorted: &[f64], probs: &[f64]) -> Vec<f64> {
    probs
        .iter()
        .map(|&p| score_at_percentile(sorted, p * 100.0))
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    #[inline]
    pub fn at(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

/// Ordinary least-squares fit of `y` on `x`.
///
/// Returns `None` when the slices differ in length, hold fewer than two
/// points, or `x` has no spread beyond the rounding noise of its mean. The
/// noise floor is relative to the magnitude of `x`, so tiny-valued samples
/// still fit.
pub fn least_squares(x: &[f64], y: &[f64]) -> Option<LinearFit> {
    if x.len() != y.len() || x.len() < 2 {
        return None;
    }
    let mx = mean(x);
    let my = mean(y);
    let (sxy, sxx) = x
        .iter()
        .zip(y)
        .fold((0.0, 0.0), |(sxy, sxx), (&xi, &yi)| {
            let dx = xi - mx;
            (sxy + dx * (yi - my), sxx + dx * dx)
        });
    let n = x.len() as f64;
    let magnitude = x.iter().fold(0.0_f64, |m, v| m.max(v.abs()));
    let noise = n * f64::EPSILON * magnitude;
    if sxx <= n * noise * noise {
        return None;
    }
    let slope = sxy / sxx;
    if !slope.is_finite() {
        return None;
    }
    Some(LinearFit {
        slope,
        intercept: my - slope * mx,
    })
}
