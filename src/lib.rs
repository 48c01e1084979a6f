//! # gofplots
//!
//! Goodness-of-fit plots for a sample against a reference distribution:
//! quantile-quantile, percentile-percentile and probability plots, plus
//! two-sample Q-Q comparisons.
//!
//! Plots are written into a serializable chart model ([`core::Figure`] /
//! [`core::Axes`]) that any renderer can consume as JSON. Distribution math
//! comes from `statrs`.
//!
//! ```
//! use gofplots::prelude::*;
//!
//! let data = [2.1, 1.4, 3.3, 0.2, 1.9, 2.8, 1.1];
//! let pp = ProbPlot::new(data.to_vec()).unwrap();
//!
//! let mut fig = Figure::new();
//! let ax = fig.add_axes();
//! pp.qqplot(ax, &PlotOptions::new().line(Line::S)).unwrap();
//!
//! assert_eq!(fig.axes[0].layers.len(), 2);
//! ```

pub mod core;
pub mod dist;
pub mod plots;
pub mod probplot;
pub mod qqline;
pub mod stats;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GofError {
    #[error("conflicting configuration: {0}")]
    Configuration(String),

    #[error("sample lengths differ ({left} vs {right}) and no interpolation was requested")]
    ShapeMismatch { left: usize, right: usize },

    #[error("invalid distribution: {0}")]
    Distribution(String),

    #[error("unknown reference line {0:?}, expected one of r, q, 45, s")]
    InvalidLine(String),

    #[error("invalid sample: {0}")]
    InvalidSample(String),

    #[error("reference line is undefined: {0}")]
    DegenerateLine(&'static str),

    #[error("figure (de)serialization failed")]
    Serialization,
}

pub type Result<T> = std::result::Result<T, error_stack::Report<GofError>>;

pub mod prelude {
    pub use crate::core::*;
    pub use crate::dist::*;
    pub use crate::plots::*;
    pub use crate::probplot::*;
    pub use crate::qqline::*;
    pub use crate::{GofError, Result};
}
