//! One-call plotting and multi-axes figure building.
//!
//! The free functions wrap data in a transient [`ProbPlot`] and draw into a
//! fresh single-axes [`Figure`].

use tracing::debug;

use crate::core::{Axes, Color, Figure};
use crate::probplot::{PlotOptions, ProbPlot, ProbPlotConfig, SampleRef};
use crate::qqline::Line;
use crate::Result;

/// Q-Q plot of `data` against the distribution described by `config`.
pub fn qqplot(data: &[f64], config: &ProbPlotConfig, line: Line) -> Result<Figure> {
    let pp = ProbPlot::with_config(data.to_vec(), config)?;
    single(|ax| pp.qqplot(ax, &PlotOptions::new().line(line)).map(drop))
}

/// P-P plot of `data` against the distribution described by `config`.
pub fn ppplot(data: &[f64], config: &ProbPlotConfig, line: Line) -> Result<Figure> {
    let pp = ProbPlot::with_config(data.to_vec(), config)?;
    single(|ax| pp.ppplot(ax, &PlotOptions::new().line(line)).map(drop))
}

/// Probability plot of `data` against the distribution described by `config`.
pub fn probplot(data: &[f64], config: &ProbPlotConfig, line: Line) -> Result<Figure> {
    let pp = ProbPlot::with_config(data.to_vec(), config)?;
    single(|ax| pp.probplot(ax, &PlotOptions::new().line(line)).map(drop))
}

/// Q-Q plot of one sample against another.
///
/// Either side may be raw data or a prepared [`ProbPlot`]. `data2` goes on
/// the x axis; `opts.other` is replaced by it.
pub fn qqplot_2samples<'a>(
    data1: impl Into<SampleRef<'a>>,
    data2: impl Into<SampleRef<'a>>,
    opts: PlotOptions<'a>,
) -> Result<Figure> {
    let first = data1.into().resolve()?;
    let opts = PlotOptions {
        other: Some(data2.into()),
        ..opts
    };
    single(|ax| first.qqplot(ax, &opts).map(drop))
}

fn single(draw: impl FnOnce(&mut Axes) -> Result<()>) -> Result<Figure> {
    let mut fig = Figure::new();
    draw(fig.add_axes())?;
    Ok(fig)
}

pub fn figure() -> FigureBuilder {
    FigureBuilder {
        fig: Figure::default(),
    }
}

/// Lays out several plots in one figure.
///
/// ```
/// use gofplots::prelude::*;
///
/// let pp = ProbPlot::new(vec![0.3, -1.2, 0.8, 1.9, -0.4]).unwrap();
/// let fig = figure()
///     .columns(3)
///     .add_qqplot(&pp, &PlotOptions::new().line(Line::S))
///     .and_then(|f| f.add_ppplot(&pp, &PlotOptions::new()))
///     .and_then(|f| f.add_probplot(&pp, &PlotOptions::new()))
///     .unwrap()
///     .build();
/// assert_eq!(fig.axes.len(), 3);
/// ```
pub struct FigureBuilder {
    fig: Figure,
}

impl FigureBuilder {
    pub fn background_color(mut self, c: Color) -> Self {
        self.fig.background = c;
        self
    }

    /// Set the number of columns per row (default: auto based on axes count)
    pub fn columns(mut self, cols: usize) -> Self {
        self.fig.columns = Some(cols.max(1));
        self
    }

    pub fn add_qqplot(mut self, pp: &ProbPlot, opts: &PlotOptions<'_>) -> Result<Self> {
        pp.qqplot(self.fig.add_axes(), opts)?;
        Ok(self)
    }

    pub fn add_ppplot(mut self, pp: &ProbPlot, opts: &PlotOptions<'_>) -> Result<Self> {
        pp.ppplot(self.fig.add_axes(), opts)?;
        Ok(self)
    }

    pub fn add_probplot(mut self, pp: &ProbPlot, opts: &PlotOptions<'_>) -> Result<Self> {
        pp.probplot(self.fig.add_axes(), opts)?;
        Ok(self)
    }

    /// Add an axes drawn by hand.
    pub fn add_axes<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&mut Axes),
    {
        f(self.fig.add_axes());
        self
    }

    pub fn build(self) -> Figure {
        debug!(axes = self.fig.axes.len(), "built figure");
        self.fig
    }
}
