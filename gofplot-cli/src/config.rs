//! Command-line configuration

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use gofplots::prelude::{Color, Family, Line, Marker, ProbPlotConfig, Style, TwoSample};

use crate::report;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlotKind {
    /// Quantile-quantile plot
    Qq,
    /// Percentile-percentile plot
    Pp,
    /// Probability plot with percent-labelled x axis
    Prob,
}

/// Goodness-of-fit plots as figure JSON
#[derive(Parser, Clone, Debug)]
#[command(name = "gofplot")]
#[command(about = "Build Q-Q, P-P and probability plots of a sample and print them as JSON")]
pub struct Config {
    /// Plot to draw
    #[arg(value_enum)]
    pub kind: PlotKind,

    /// File with the sample, numbers separated by whitespace or commas
    pub file: PathBuf,

    /// Second sample to compare against instead of a distribution
    #[arg(long)]
    pub other: Option<PathBuf>,

    /// JSON file holding a probability-plot configuration
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Reference distribution (norm, t, expon, gamma, ...)
    #[arg(long)]
    pub dist: Option<String>,

    /// Shape arguments of the distribution, comma separated
    #[arg(long, value_delimiter = ',')]
    pub distargs: Option<Vec<f64>>,

    /// Estimate loc and scale from the sample
    #[arg(long)]
    pub fit: bool,

    #[arg(long)]
    pub loc: Option<f64>,

    #[arg(long)]
    pub scale: Option<f64>,

    /// Reference line: r, q, 45 or s
    #[arg(long, default_value = "none")]
    pub line: String,

    /// Point color: a one-letter code (b, r, k, ...) or a color name
    #[arg(long)]
    pub color: Option<String>,

    /// Point marker: o, d, s, ^, x, + or .
    #[arg(long)]
    pub marker: Option<char>,

    /// Interpolate when the two samples differ in size
    #[arg(long)]
    pub interpolate: bool,

    /// Probability plot of exceedance instead of non-exceedance
    #[arg(long)]
    pub exceed: bool,

    /// Write the figure here instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Pretty-print the JSON
    #[arg(long)]
    pub pretty: bool,
}

impl Config {
    /// File configuration first, then flags on top.
    pub fn probplot_config(&self) -> anyhow::Result<ProbPlotConfig> {
        let mut cfg = match &self.config {
            Some(path) => load_config(path)?,
            None => ProbPlotConfig::default(),
        };
        if let Some(name) = &self.dist {
            cfg.dist = name.parse::<Family>().map_err(report)?;
        }
        if let Some(args) = &self.distargs {
            cfg.distargs = args.clone();
        }
        if self.fit {
            cfg.fit = true;
        }
        if self.loc.is_some() {
            cfg.loc = self.loc;
        }
        if self.scale.is_some() {
            cfg.scale = self.scale;
        }
        Ok(cfg)
    }

    pub fn line(&self) -> anyhow::Result<Line> {
        self.line.parse::<Line>().map_err(report)
    }

    pub fn point_style(&self) -> anyhow::Result<Style> {
        let mut style = Style::points();
        if let Some(name) = &self.color {
            let color = Color::named(name).with_context(|| format!("unknown color {name:?}"))?;
            style = style.color(color);
        }
        if let Some(code) = self.marker {
            let marker =
                Marker::from_code(code).with_context(|| format!("unknown marker {code:?}"))?;
            style = style.marker(marker);
        }
        Ok(style)
    }

    pub fn two_sample(&self) -> TwoSample {
        if self.interpolate {
            TwoSample::Interpolate
        } else {
            TwoSample::Strict
        }
    }
}

fn load_config(path: &Path) -> anyhow::Result<ProbPlotConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}
