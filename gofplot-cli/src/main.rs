//! gofplot
//!
//! Reads a sample (and optionally a second one), draws a goodness-of-fit plot
//! and writes the figure as JSON for a renderer to pick up.

mod config;
mod input;

use std::fmt::Debug;
use std::io::Write;

use clap::Parser;
use gofplots::prelude::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, PlotKind};

/// Flatten an error-stack report into an `anyhow` error, keeping the full chain.
pub(crate) fn report(e: impl Debug) -> anyhow::Error {
    anyhow::anyhow!("{e:?}")
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gofplot=info,gofplots=info".into()),
        )
        .init();

    let config = Config::parse();
    let fig = build_figure(&config)?;

    let json = if config.pretty {
        fig.to_json_pretty()
    } else {
        fig.to_json()
    }
    .map_err(report)?;

    match &config.out {
        Some(path) => {
            std::fs::write(path, json)?;
            info!("wrote figure to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}

fn build_figure(config: &Config) -> anyhow::Result<Figure> {
    let sample = input::read_sample(&config.file)?;
    let other = config
        .other
        .as_deref()
        .map(input::read_sample)
        .transpose()?;
    let pp = ProbPlot::with_config(sample, &config.probplot_config()?).map_err(report)?;
    info!(
        "plotting {} observations against {}",
        pp.nobs(),
        match &other {
            Some(o) => format!("a second sample of {}", o.len()),
            None => format!("{} {:?}", pp.dist().family(), pp.dist().distargs()),
        }
    );

    let mut opts = PlotOptions::new()
        .line(config.line()?)
        .style(config.point_style()?)
        .exceed(config.exceed)
        .two_sample(config.two_sample());
    if let Some(other) = &other {
        opts = opts.other(other);
    }

    let mut fig = Figure::new();
    let ax = fig.add_axes();
    match config.kind {
        PlotKind::Qq => pp.qqplot(ax, &opts),
        PlotKind::Pp => pp.ppplot(ax, &opts),
        PlotKind::Prob => pp.probplot(ax, &opts),
    }
    .map_err(report)?;
    Ok(fig)
}
