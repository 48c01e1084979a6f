//! The probability-plot configuration object.
//!
//! A [`ProbPlot`] bundles a sample with a reference distribution and knows how
//! to draw Q-Q, P-P and probability plots of it onto an [`Axes`]. Derived
//! arrays (sorted data, plotting positions, quantiles, percentiles) are
//! computed on first use and reused by every later plot call.
//!
//! ```
//! use gofplots::prelude::*;
//!
//! let data = vec![4.2, 3.9, 5.1, 4.8, 4.4, 3.7, 4.9, 5.3];
//! let pp = ProbPlot::with_config(data, &ProbPlotConfig::new().fit(true)).unwrap();
//! assert_eq!(pp.theoretical_quantiles().len(), pp.nobs());
//!
//! let mut ax = Axes::new();
//! pp.ppplot(&mut ax, &PlotOptions::new().line(Line::FortyFive)).unwrap();
//! assert_eq!(ax.x_lim, Some([0.0, 1.0]));
//! ```

use std::borrow::Cow;
use std::sync::OnceLock;

use error_stack::Report;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{Axes, Geometry2D, Layer2D, Scale, Style, Tick};
use crate::dist::{Family, RefDist};
use crate::qqline::{Line, Quartiles, qqline};
use crate::stats;
use crate::{GofError, Result};

/// How a [`ProbPlot`] is built from raw data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbPlotConfig {
    /// Reference distribution family
    pub dist: Family,
    /// Positional shape parameters of `dist`
    pub distargs: Vec<f64>,
    /// Estimate loc and scale from the sample
    pub fit: bool,
    pub loc: Option<f64>,
    pub scale: Option<f64>,
    /// Plotting position offset, `0 <= a < 1`
    pub a: f64,
}

impl Default for ProbPlotConfig {
    fn default() -> Self {
        Self {
            dist: Family::Normal,
            distargs: vec![],
            fit: false,
            loc: None,
            scale: None,
            a: 0.0,
        }
    }
}

impl ProbPlotConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dist(mut self, family: Family) -> Self {
        self.dist = family;
        self
    }

    pub fn distargs(mut self, args: Vec<f64>) -> Self {
        self.distargs = args;
        self
    }

    pub fn fit(mut self, fit: bool) -> Self {
        self.fit = fit;
        self
    }

    pub fn loc(mut self, loc: f64) -> Self {
        self.loc = Some(loc);
        self
    }

    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn a(mut self, a: f64) -> Self {
        self.a = a;
        self
    }
}

/// What to do when two samples of different sizes are compared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TwoSample {
    /// Unequal sizes are an error
    #[default]
    Strict,
    /// Reduce the larger sample to the smaller one's plotting positions
    Interpolate,
}

/// A second sample, either raw or already wrapped.
#[derive(Clone, Copy, Debug)]
pub enum SampleRef<'a> {
    Data(&'a [f64]),
    Plot(&'a ProbPlot),
}

impl<'a> From<&'a [f64]> for SampleRef<'a> {
    fn from(data: &'a [f64]) -> Self {
        SampleRef::Data(data)
    }
}

impl<'a, const N: usize> From<&'a [f64; N]> for SampleRef<'a> {
    fn from(data: &'a [f64; N]) -> Self {
        SampleRef::Data(data)
    }
}

impl<'a> From<&'a Vec<f64>> for SampleRef<'a> {
    fn from(data: &'a Vec<f64>) -> Self {
        SampleRef::Data(data)
    }
}

impl<'a> From<&'a ProbPlot> for SampleRef<'a> {
    fn from(plot: &'a ProbPlot) -> Self {
        SampleRef::Plot(plot)
    }
}

impl<'a> SampleRef<'a> {
    /// Raw data is wrapped in a standard-normal `ProbPlot`.
    pub fn resolve(self) -> Result<Cow<'a, ProbPlot>> {
        match self {
            SampleRef::Data(data) => Ok(Cow::Owned(ProbPlot::new(data.to_vec())?)),
            SampleRef::Plot(plot) => Ok(Cow::Borrowed(plot)),
        }
    }
}

/// Per-call drawing options.
#[derive(Clone, Debug)]
pub struct PlotOptions<'a> {
    pub line: Line,
    /// Compare against a second sample instead of the reference distribution
    pub other: Option<SampleRef<'a>>,
    pub xlabel: Option<String>,
    pub ylabel: Option<String>,
    /// Style of the plotted points
    pub style: Style,
    /// Style of the reference line
    pub line_style: Style,
    /// Probability plot only: plot exceedance instead of non-exceedance
    pub exceed: bool,
    pub two_sample: TwoSample,
}

impl Default for PlotOptions<'_> {
    fn default() -> Self {
        Self {
            line: Line::None,
            other: None,
            xlabel: None,
            ylabel: None,
            style: Style::points(),
            line_style: Style::reference_line(),
            exceed: false,
            two_sample: TwoSample::Strict,
        }
    }
}

impl<'a> PlotOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(mut self, line: Line) -> Self {
        self.line = line;
        self
    }

    pub fn other(mut self, other: impl Into<SampleRef<'a>>) -> Self {
        self.other = Some(other.into());
        self
    }

    pub fn xlabel(mut self, label: impl Into<String>) -> Self {
        self.xlabel = Some(label.into());
        self
    }

    pub fn ylabel(mut self, label: impl Into<String>) -> Self {
        self.ylabel = Some(label.into());
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn line_style(mut self, style: Style) -> Self {
        self.line_style = style;
        self
    }

    pub fn exceed(mut self, exceed: bool) -> Self {
        self.exceed = exceed;
        self
    }

    pub fn two_sample(mut self, policy: TwoSample) -> Self {
        self.two_sample = policy;
        self
    }
}

#[derive(Clone, Debug, Default)]
struct Derived {
    sorted: OnceLock<Vec<f64>>,
    theoretical_percentiles: OnceLock<Vec<f64>>,
    theoretical_quantiles: OnceLock<Vec<f64>>,
    sample_quantiles: OnceLock<Vec<f64>>,
    sample_percentiles: OnceLock<Vec<f64>>,
}

/// A sample paired with a reference distribution.
///
/// When built with `fit`, the reference is the standardized family and the
/// sample quantiles are `(x - loc) / scale` with the fitted `loc`/`scale`.
#[derive(Clone, Debug)]
pub struct ProbPlot {
    data: Vec<f64>,
    dist: RefDist,
    fit_params: Option<(f64, f64)>,
    a: f64,
    derived: Derived,
}

impl ProbPlot {
    /// Against the standard normal distribution.
    pub fn new(data: Vec<f64>) -> Result<Self> {
        Self::with_config(data, &ProbPlotConfig::default())
    }

    pub fn with_config(data: Vec<f64>, config: &ProbPlotConfig) -> Result<Self> {
        if data.is_empty() {
            return Err(Report::new(GofError::InvalidSample("sample is empty".into())));
        }
        if let Some(i) = data.iter().position(|v| !v.is_finite()) {
            return Err(Report::new(GofError::InvalidSample(format!(
                "observation {i} is not finite ({})",
                data[i]
            ))));
        }
        if config.fit && (config.loc.is_some() || config.scale.is_some()) {
            return Err(Report::new(GofError::Configuration(
                "fit estimates loc and scale, they cannot also be given".into(),
            )));
        }
        if !(0.0..1.0).contains(&config.a) {
            return Err(Report::new(GofError::Configuration(format!(
                "plotting position offset must be in [0, 1), got {}",
                config.a
            ))));
        }

        let derived = Derived::default();
        let (dist, fit_params) = if config.fit {
            let dist = RefDist::standard(config.dist, config.distargs.clone())?;
            let sorted = derived.sorted.get_or_init(|| stats::sorted(&data));
            let params = dist.fit(sorted, config.a)?;
            (dist, Some(params))
        } else {
            let dist = RefDist::new(
                config.dist,
                config.distargs.clone(),
                config.loc.unwrap_or(0.0),
                config.scale.unwrap_or(1.0),
            )?;
            (dist, None)
        };

        debug!(
            nobs = data.len(),
            dist = %dist.family(),
            fitted = fit_params.is_some(),
            "built probability plot"
        );
        Ok(Self {
            data,
            dist,
            fit_params,
            a: config.a,
            derived,
        })
    }

    pub fn data(&self) -> &[f64] {
        &self.data
    }

    pub fn nobs(&self) -> usize {
        self.data.len()
    }

    /// The reference distribution (standardized when fitted).
    pub fn dist(&self) -> &RefDist {
        &self.dist
    }

    pub fn is_fitted(&self) -> bool {
        self.fit_params.is_some()
    }

    /// Fitted `(loc, scale)`, if built with `fit`.
    pub fn fit_params(&self) -> Option<(f64, f64)> {
        self.fit_params
    }

    pub fn loc(&self) -> f64 {
        self.fit_params.map_or(self.dist.loc(), |(loc, _)| loc)
    }

    pub fn scale(&self) -> f64 {
        self.fit_params.map_or(self.dist.scale(), |(_, scale)| scale)
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn sorted_data(&self) -> &[f64] {
        self.derived
            .sorted
            .get_or_init(|| stats::sorted(&self.data))
    }

    pub fn theoretical_percentiles(&self) -> &[f64] {
        self.derived
            .theoretical_percentiles
            .get_or_init(|| stats::plotting_positions(self.nobs(), self.a))
    }

    pub fn theoretical_quantiles(&self) -> &[f64] {
        self.derived.theoretical_quantiles.get_or_init(|| {
            debug!(nobs = self.nobs(), dist = %self.dist.family(), "computing theoretical quantiles");
            self.theoretical_percentiles()
                .iter()
                .map(|&p| self.dist.ppf(p))
                .collect()
        })
    }

    pub fn sample_quantiles(&self) -> &[f64] {
        match self.fit_params {
            None => self.sorted_data(),
            Some((loc, scale)) => self.derived.sample_quantiles.get_or_init(|| {
                self.sorted_data()
                    .iter()
                    .map(|&x| (x - loc) / scale)
                    .collect()
            }),
        }
    }

    pub fn sample_percentiles(&self) -> &[f64] {
        self.derived.sample_percentiles.get_or_init(|| {
            self.sample_quantiles()
                .iter()
                .map(|&q| self.dist.cdf(q))
                .collect()
        })
    }

    /// Sample quantiles against theoretical quantiles, or against the
    /// quantiles of `opts.other`.
    pub fn qqplot<'ax>(&self, ax: &'ax mut Axes, opts: &PlotOptions<'_>) -> Result<&'ax mut Axes> {
        let other = opts.other.map(SampleRef::resolve).transpose()?;
        let (x, y, quartiles, labels) = match other.as_deref() {
            Some(other) => {
                let (x, y) = self.pair_with(other, opts.two_sample, ProbPlot::sample_quantiles)?;
                let labels = ("Quantiles of 2nd Sample", "Quantiles of 1st Sample");
                (x, y, Quartiles::Sample, labels)
            }
            None => (
                Cow::Borrowed(self.theoretical_quantiles()),
                Cow::Borrowed(self.sample_quantiles()),
                Quartiles::Dist(&self.dist),
                ("Theoretical Quantiles", "Sample Quantiles"),
            ),
        };
        draw(ax, &x, &y, quartiles, labels, opts)?;
        Ok(ax)
    }

    /// Sample percentiles against theoretical percentiles, or against the
    /// percentiles of `opts.other`. Both axes are fixed to `[0, 1]`.
    ///
    /// A raw `other` sample is mapped through the standard normal, so data far
    /// from N(0, 1) piles up near a corner. Pass a fitted [`ProbPlot`] as
    /// `other` to compare such samples on their own scale.
    pub fn ppplot<'ax>(&self, ax: &'ax mut Axes, opts: &PlotOptions<'_>) -> Result<&'ax mut Axes> {
        let other = opts.other.map(SampleRef::resolve).transpose()?;
        let (x, y, labels) = match other.as_deref() {
            Some(other) => {
                let (x, y) =
                    self.pair_with(other, opts.two_sample, ProbPlot::sample_percentiles)?;
                (x, y, ("Probabilities of 2nd Sample", "Probabilities of 1st Sample"))
            }
            None => (
                Cow::Borrowed(self.theoretical_percentiles()),
                Cow::Borrowed(self.sample_percentiles()),
                ("Theoretical Probabilities", "Sample Probabilities"),
            ),
        };
        ax.set_xlim(0.0, 1.0).set_ylim(0.0, 1.0);
        draw(ax, &x, &y, Quartiles::Sample, labels, opts)?;
        Ok(ax)
    }

    /// Ordered data against theoretical quantiles, with the x axis ticked
    /// in probabilities.
    pub fn probplot<'ax>(
        &self,
        ax: &'ax mut Axes,
        opts: &PlotOptions<'_>,
    ) -> Result<&'ax mut Axes> {
        let other = opts.other.map(SampleRef::resolve).transpose()?;
        let grid = probability_grid(self.nobs());
        let (mut x, y, quartiles, tick_positions) = match other.as_deref() {
            Some(other) => {
                let (x, y) = self.pair_with(other, opts.two_sample, ProbPlot::sorted_data)?;
                let ticks = stats::empirical_quantiles(other.sorted_data(), &grid);
                (x, y, Quartiles::Sample, ticks)
            }
            None => {
                let ticks: Vec<f64> = grid.iter().map(|&p| self.dist.ppf(p)).collect();
                (
                    Cow::Borrowed(self.theoretical_quantiles()),
                    Cow::Borrowed(self.sorted_data()),
                    Quartiles::Dist(&self.dist),
                    ticks,
                )
            }
        };
        let xlabel = if opts.exceed {
            x.to_mut().reverse();
            "Probability of Exceedance (%)"
        } else {
            "Non-exceedance Probability (%)"
        };
        draw(ax, &x, &y, quartiles, (xlabel, "Sample Quantiles"), opts)?;
        format_probability_axis(ax, &grid, &tick_positions);
        Ok(ax)
    }

    /// Pair `values(other)` (x) with `values(self)` (y), reconciling their
    /// lengths under `policy`.
    fn pair_with<'s>(
        &'s self,
        other: &'s ProbPlot,
        policy: TwoSample,
        values: impl Fn(&'s ProbPlot) -> &'s [f64],
    ) -> Result<(Cow<'s, [f64]>, Cow<'s, [f64]>)> {
        let x = values(other);
        let y = values(self);
        if x.len() == y.len() {
            return Ok((Cow::Borrowed(x), Cow::Borrowed(y)));
        }
        match policy {
            TwoSample::Strict => Err(Report::new(GofError::ShapeMismatch {
                left: y.len(),
                right: x.len(),
            })),
            TwoSample::Interpolate => {
                warn!(
                    first = y.len(),
                    second = x.len(),
                    "sample sizes differ, interpolating the larger sample"
                );
                if x.len() > y.len() {
                    let x = stats::empirical_quantiles(x, self.theoretical_percentiles());
                    Ok((Cow::Owned(x), Cow::Borrowed(y)))
                } else {
                    let y = stats::empirical_quantiles(y, other.theoretical_percentiles());
                    Ok((Cow::Borrowed(x), Cow::Owned(y)))
                }
            }
        }
    }
}

fn draw(
    ax: &mut Axes,
    x: &[f64],
    y: &[f64],
    quartiles: Quartiles<'_>,
    (xlabel, ylabel): (&str, &str),
    opts: &PlotOptions<'_>,
) -> Result<()> {
    ax.push_layer(Layer2D::from_xy(Geometry2D::Points, x, y).with_style(opts.style));
    ax.set_xlabel(opts.xlabel.as_deref().unwrap_or(xlabel))
        .set_ylabel(opts.ylabel.as_deref().unwrap_or(ylabel));
    qqline(ax, opts.line, x, y, quartiles, opts.line_style)
}

/// Probabilities ticked on a probability plot of `nobs` points.
///
/// 1, 2, 5, 10, ..., 90, 95, 98, 99 %, refined toward both tails for 50+
/// and again for 500+ observations.
pub fn probability_grid(nobs: usize) -> Vec<f64> {
    let small = [1.0, 2.0, 5.0];
    let mut divisors = vec![1.0];
    if nobs >= 50 {
        divisors.push(10.0);
    }
    if nobs >= 500 {
        divisors.push(100.0);
    }
    let mut pct: Vec<f64> = divisors
        .iter()
        .rev()
        .flat_map(|&d| small.iter().map(move |s| s / d))
        .collect();
    pct.extend((1..=9).map(|k| 10.0 * k as f64));
    pct.extend(
        divisors
            .iter()
            .flat_map(|&d| small.iter().rev().map(move |s| 100.0 - s / d)),
    );
    pct.into_iter().map(|p| p / 100.0).collect()
}

fn percent_label(p: f64) -> String {
    let s = format!("{:.2}", p * 100.0);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn format_probability_axis(ax: &mut Axes, probs: &[f64], positions: &[f64]) {
    let ticks: Vec<Tick> = probs
        .iter()
        .zip(positions)
        .filter(|(_, pos)| pos.is_finite())
        .map(|(&p, &position)| Tick {
            position,
            label: percent_label(p),
        })
        .collect();
    let lo = ticks.iter().map(|t| t.position).fold(f64::INFINITY, f64::min);
    let hi = ticks
        .iter()
        .map(|t| t.position)
        .fold(f64::NEG_INFINITY, f64::max);
    if lo < hi {
        ax.set_xlim(lo, hi);
    }
    ax.x_scale = Scale::Probability;
    ax.set_xticks(ticks);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<f64> {
        vec![3.1, -0.4, 1.7, 0.2, 2.5, -1.3, 0.9, 1.1, -0.2, 0.6]
    }

    #[test]
    fn derived_arrays_match_sample_length() {
        let pp = ProbPlot::new(sample()).unwrap();
        assert_eq!(pp.sorted_data().len(), 10);
        assert_eq!(pp.theoretical_percentiles().len(), 10);
        assert_eq!(pp.theoretical_quantiles().len(), 10);
        assert_eq!(pp.sample_quantiles().len(), 10);
        assert_eq!(pp.sample_percentiles().len(), 10);
    }

    #[test]
    fn derived_arrays_are_cached() {
        let pp = ProbPlot::new(sample()).unwrap();
        let first = pp.theoretical_quantiles().as_ptr();
        assert_eq!(pp.theoretical_quantiles().as_ptr(), first);
    }

    #[test]
    fn unfitted_sample_quantiles_are_sorted_data() {
        let pp = ProbPlot::new(sample()).unwrap();
        assert_eq!(pp.sample_quantiles(), pp.sorted_data());
        assert!(pp.sorted_data().windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn fitted_sample_quantiles_are_standardized() {
        let cfg = ProbPlotConfig::new().fit(true);
        let pp = ProbPlot::with_config(sample(), &cfg).unwrap();
        let q = pp.sample_quantiles();
        assert!(stats::mean(q).abs() < 1e-12);
        assert!((stats::population_std(q) - 1.0).abs() < 1e-12);
        assert_eq!(pp.dist().loc(), 0.0);
        assert_eq!(pp.dist().scale(), 1.0);
    }

    #[test]
    fn fit_with_explicit_loc_is_ambiguous() {
        let cfg = ProbPlotConfig::new().fit(true).loc(1.0);
        let err = ProbPlot::with_config(sample(), &cfg).unwrap_err();
        assert!(matches!(err.current_context(), GofError::Configuration(_)));
        let cfg = ProbPlotConfig::new().fit(true).scale(2.0);
        assert!(ProbPlot::with_config(sample(), &cfg).is_err());
    }

    #[test]
    fn empty_or_non_finite_samples_are_rejected() {
        let err = ProbPlot::new(vec![]).unwrap_err();
        assert!(matches!(err.current_context(), GofError::InvalidSample(_)));
        let err = ProbPlot::new(vec![1.0, f64::NAN]).unwrap_err();
        assert!(matches!(err.current_context(), GofError::InvalidSample(_)));
    }

    #[test]
    fn plotting_offset_out_of_range() {
        let cfg = ProbPlotConfig::new().a(1.0);
        let err = ProbPlot::with_config(sample(), &cfg).unwrap_err();
        assert!(matches!(err.current_context(), GofError::Configuration(_)));
        assert!(ProbPlot::with_config(sample(), &ProbPlotConfig::new().a(-0.1)).is_err());

        let pp = ProbPlot::with_config(sample(), &ProbPlotConfig::new().a(0.99)).unwrap();
        let p = pp.theoretical_percentiles();
        assert!(p[0] > 0.0 && p[p.len() - 1] < 1.0);
        assert!(pp.theoretical_quantiles().iter().all(|q| q.is_finite()));
    }

    #[test]
    fn bad_distribution_args_propagate() {
        let cfg = ProbPlotConfig::new()
            .dist(Family::StudentT)
            .distargs(vec![0.0]);
        let err = ProbPlot::with_config(sample(), &cfg).unwrap_err();
        assert!(matches!(err.current_context(), GofError::Distribution(_)));
    }

    #[test]
    fn qqplot_writes_points_and_labels() {
        let pp = ProbPlot::new(sample()).unwrap();
        let mut ax = Axes::new();
        pp.qqplot(&mut ax, &PlotOptions::new()).unwrap();
        assert_eq!(ax.layers.len(), 1);
        assert_eq!(ax.x_label.as_deref(), Some("Theoretical Quantiles"));
        assert_eq!(ax.y_label.as_deref(), Some("Sample Quantiles"));
        let pts = &ax.layers[0];
        assert_eq!(pts.geometry, Geometry2D::Points);
        assert_eq!(pts.xs().collect::<Vec<_>>(), pp.theoretical_quantiles());
        assert_eq!(pts.ys().collect::<Vec<_>>(), pp.sample_quantiles());
    }

    #[test]
    fn custom_labels_override_defaults() {
        let pp = ProbPlot::new(sample()).unwrap();
        let mut ax = Axes::new();
        let opts = PlotOptions::new()
            .xlabel("Custom X-Label")
            .ylabel("Custom Y-Label");
        pp.probplot(&mut ax, &opts).unwrap();
        assert_eq!(ax.x_label.as_deref(), Some("Custom X-Label"));
        assert_eq!(ax.y_label.as_deref(), Some("Custom Y-Label"));
    }

    #[test]
    fn two_sample_lengths_must_match_unless_interpolated() {
        let pp = ProbPlot::new(sample()).unwrap();
        let short = [0.1, 0.5, 0.9, 1.4];
        let mut ax = Axes::new();
        let err = pp
            .qqplot(&mut ax, &PlotOptions::new().other(&short))
            .unwrap_err();
        assert!(matches!(
            err.current_context(),
            GofError::ShapeMismatch { left: 10, right: 4 }
        ));

        let mut ax = Axes::new();
        let opts = PlotOptions::new()
            .other(&short)
            .two_sample(TwoSample::Interpolate);
        pp.qqplot(&mut ax, &opts).unwrap();
        assert_eq!(ax.layers[0].xy.len(), 4);
        let ys: Vec<f64> = ax.layers[0].ys().collect();
        assert!(ys.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn probability_grid_grows_with_sample_size() {
        assert_eq!(probability_grid(10).len(), 15);
        assert_eq!(probability_grid(50).len(), 21);
        assert_eq!(probability_grid(500).len(), 27);
        let g = probability_grid(500);
        assert!(g.windows(2).all(|w| w[0] < w[1]));
        assert!((g[0] - 0.0001).abs() < 1e-12);
        assert!((g[26] - 0.9999).abs() < 1e-12);
    }

    #[test]
    fn percent_labels_are_trimmed() {
        assert_eq!(percent_label(0.5), "50");
        assert_eq!(percent_label(0.995), "99.5");
        assert_eq!(percent_label(0.0001), "0.01");
        assert_eq!(percent_label(0.01), "1");
    }

    #[test]
    fn probplot_ticks_sit_on_reference_quantiles() {
        let pp = ProbPlot::new(sample()).unwrap();
        let mut ax = Axes::new();
        pp.probplot(&mut ax, &PlotOptions::new()).unwrap();
        assert_eq!(ax.x_scale, Scale::Probability);
        let ticks = ax.x_ticks.as_ref().unwrap();
        let mid = ticks.iter().find(|t| t.label == "50").unwrap();
        assert!(mid.position.abs() < 1e-9);
        let [lo, hi] = ax.x_lim.unwrap();
        assert!((lo - pp.dist().ppf(0.01)).abs() < 1e-9);
        assert!((hi - pp.dist().ppf(0.99)).abs() < 1e-9);
    }

    #[test]
    fn ppplot_raw_other_goes_through_standard_normal() {
        let pp = ProbPlot::new(sample()).unwrap();
        let far: Vec<f64> = sample().iter().map(|v| v + 100.0).collect();

        let mut ax = Axes::new();
        pp.ppplot(&mut ax, &PlotOptions::new().other(&far)).unwrap();
        assert!(ax.layers[0].xs().all(|x| x > 0.99));

        let fitted = ProbPlot::with_config(far, &ProbPlotConfig::new().fit(true)).unwrap();
        let mut ax = Axes::new();
        pp.ppplot(&mut ax, &PlotOptions::new().other(&fitted)).unwrap();
        let xs: Vec<f64> = ax.layers[0].xs().collect();
        assert!(xs[0] < 0.5 && xs[xs.len() - 1] > 0.5);
    }

    #[test]
    fn exceedance_reverses_x() {
        let pp = ProbPlot::new(sample()).unwrap();
        let mut ax = Axes::new();
        pp.probplot(&mut ax, &PlotOptions::new().exceed(true).line(Line::Q))
            .unwrap();
        assert_eq!(ax.x_label.as_deref(), Some("Probability of Exceedance (%)"));
        let xs: Vec<f64> = ax.layers[0].xs().collect();
        assert!(xs.windows(2).all(|w| w[0] > w[1]));
        let line = ax.line_layers().next().unwrap();
        assert!(line.xy[0].y < line.xy[9].y);
    }
}
