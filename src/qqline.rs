//! Reference lines drawn over probability plots.

use std::fmt;
use std::str::FromStr;

use error_stack::Report;
use glam::DVec2;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{Axes, Geometry2D, Layer2D, Style};
use crate::dist::RefDist;
use crate::stats;
use crate::{GofError, Result};

/// Which reference line, if any, to overlay on the points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    #[default]
    None,
    /// Least-squares regression of the points (`"r"`)
    R,
    /// Through the first and third quartile pairs (`"q"`)
    Q,
    /// Identity line across the visible range (`"45"`)
    FortyFive,
    /// `x * std(y) + mean(y)` (`"s"`)
    S,
}

impl Line {
    pub const ALL: [Line; 5] = [Line::None, Line::R, Line::Q, Line::FortyFive, Line::S];

    pub const fn code(self) -> &'static str {
        match self {
            Line::None => "none",
            Line::R => "r",
            Line::Q => "q",
            Line::FortyFive => "45",
            Line::S => "s",
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Line {
    type Err = Report<GofError>;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "" | "none" | "None" => Ok(Line::None),
            "r" => Ok(Line::R),
            "q" => Ok(Line::Q),
            "45" => Ok(Line::FortyFive),
            "s" => Ok(Line::S),
            other => Err(Report::new(GofError::InvalidLine(other.to_string()))),
        }
    }
}

/// Where the `q` line takes its x-axis quartiles from.
#[derive(Clone, Copy, Debug)]
pub enum Quartiles<'a> {
    /// Theoretical quartiles of a reference distribution
    Dist(&'a RefDist),
    /// Empirical quartiles of the x values themselves
    Sample,
}

/// Draw `line` over the points `(x, y)` on `ax`.
///
/// The `45` line spans the axes' current view, so the points must already be
/// on `ax`. It resets both limits to the span it drew.
pub fn qqline(
    ax: &mut Axes,
    line: Line,
    x: &[f64],
    y: &[f64],
    quartiles: Quartiles<'_>,
    style: Style,
) -> Result<()> {
    let needs_points = matches!(line, Line::R | Line::Q | Line::S);
    if needs_points && (x.len() != y.len() || x.is_empty()) {
        return Err(Report::new(GofError::ShapeMismatch {
            left: y.len(),
            right: x.len(),
        }));
    }

    let xy = match line {
        Line::None => return Ok(()),
        Line::FortyFive => {
            let ([x0, x1], [y0, y1]) = ax
                .view_limits()
                .ok_or_else(|| Report::new(GofError::DegenerateLine("45 line on empty axes")))?;
            let lo = x0.min(y0);
            let hi = x1.max(y1);
            ax.set_xlim(lo, hi).set_ylim(lo, hi);
            vec![DVec2::splat(lo), DVec2::splat(hi)]
        }
        Line::R => {
            let fit = stats::least_squares(x, y)
                .ok_or_else(|| Report::new(GofError::DegenerateLine("x values have no spread")))?;
            x.iter().map(|&xi| DVec2::new(xi, fit.at(xi))).collect()
        }
        Line::S => {
            let m = stats::population_std(y);
            let b = stats::mean(y);
            x.iter().map(|&xi| DVec2::new(xi, xi * m + b)).collect()
        }
        Line::Q => {
            let ys = stats::sorted(y);
            let q25 = stats::score_at_percentile(&ys, 25.0);
            let q75 = stats::score_at_percentile(&ys, 75.0);
            let (t_lo, t_hi) = match quartiles {
                Quartiles::Dist(d) => (d.ppf(0.25), d.ppf(0.75)),
                Quartiles::Sample => {
                    let xs = stats::sorted(x);
                    (
                        stats::score_at_percentile(&xs, 25.0),
                        stats::score_at_percentile(&xs, 75.0),
                    )
                }
            };
            // descending x (exceedance plots) pairs the lower y quartile with the upper x one
            let (t25, t75) = if x[0] > x[x.len() - 1] {
                (t_hi, t_lo)
            } else {
                (t_lo, t_hi)
            };
            if t75 == t25 {
                return Err(Report::new(GofError::DegenerateLine(
                    "x quartiles coincide",
                )));
            }
            let m = (q75 - q25) / (t75 - t25);
            let b = q25 - m * t25;
            x.iter().map(|&xi| DVec2::new(xi, m * xi + b)).collect()
        }
    };

    trace!(%line, points = xy.len(), "drawing reference line");
    ax.push_layer(Layer2D::new(Geometry2D::Line, xy).with_style(style));
    Ok(())
}
