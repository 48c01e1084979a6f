//! Reference distributions.
//!
//! A [`RefDist`] is a standardized `statrs` distribution shifted by `loc` and
//! stretched by `scale`:
//!
//! - `cdf(x) = F0((x - loc) / scale)`
//! - `ppf(p) = loc + scale * F0⁻¹(p)`
//!
//! Shape parameters (`distargs`) are positional, one per family as listed on
//! [`Family`].

use std::fmt;
use std::str::FromStr;

use error_stack::Report;
use serde::{Deserialize, Serialize};
use statrs::distribution::{
    Cauchy, ChiSquared, ContinuousCDF, Exp, Gamma, Laplace, LogNormal, Normal, StudentsT, Uniform,
    Weibull,
};
use tracing::debug;

use crate::stats;
use crate::{GofError, Result};

/// Continuous distribution families usable as a plot reference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    #[default]
    Normal,
    /// Student's t, shape: degrees of freedom
    StudentT,
    Exponential,
    Uniform,
    Laplace,
    Cauchy,
    /// Gamma, shape: `a`
    Gamma,
    /// Log-normal, shape: `s` (sigma of the underlying normal)
    LogNormal,
    /// Weibull (minimum), shape: `c`
    Weibull,
    /// Chi-squared, shape: degrees of freedom
    ChiSquared,
}

impl Family {
    pub const ALL: [Family; 10] = [
        Family::Normal,
        Family::StudentT,
        Family::Exponential,
        Family::Uniform,
        Family::Laplace,
        Family::Cauchy,
        Family::Gamma,
        Family::LogNormal,
        Family::Weibull,
        Family::ChiSquared,
    ];

    /// Number of positional shape parameters the family takes.
    pub const fn shape_count(self) -> usize {
        match self {
            Family::StudentT
            | Family::Gamma
            | Family::LogNormal
            | Family::Weibull
            | Family::ChiSquared => 1,
            _ => 0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Family::Normal => "normal",
            Family::StudentT => "student_t",
            Family::Exponential => "exponential",
            Family::Uniform => "uniform",
            Family::Laplace => "laplace",
            Family::Cauchy => "cauchy",
            Family::Gamma => "gamma",
            Family::LogNormal => "log_normal",
            Family::Weibull => "weibull",
            Family::ChiSquared => "chi_squared",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Family {
    type Err = Report<GofError>;

    fn from_str(s: &str) -> Result<Self> {
        let family = match s.trim().to_ascii_lowercase().as_str() {
            "norm" | "normal" | "gaussian" => Family::Normal,
            "t" | "student_t" | "studentt" => Family::StudentT,
            "expon" | "exp" | "exponential" => Family::Exponential,
            "uniform" => Family::Uniform,
            "laplace" => Family::Laplace,
            "cauchy" => Family::Cauchy,
            "gamma" => Family::Gamma,
            "lognorm" | "lognormal" | "log_normal" => Family::LogNormal,
            "weibull" | "weibull_min" => Family::Weibull,
            "chi2" | "chisquared" | "chi_squared" => Family::ChiSquared,
            other => {
                return Err(Report::new(GofError::Distribution(format!(
                    "unknown distribution family {other:?}"
                ))));
            }
        };
        Ok(family)
    }
}

/// Standardized (`loc = 0`, `scale = 1`) member of a family.
#[derive(Clone, Debug)]
enum Standard {
    Normal(Normal),
    StudentT(StudentsT),
    Exponential(Exp),
    Uniform(Uniform),
    Laplace(Laplace),
    Cauchy(Cauchy),
    Gamma(Gamma),
    LogNormal(LogNormal),
    Weibull(Weibull),
    ChiSquared(ChiSquared),
}

macro_rules! dispatch {
    ($standard:expr, $d:ident => $body:expr) => {
        match $standard {
            Standard::Normal($d) => $body,
            Standard::StudentT($d) => $body,
            Standard::Exponential($d) => $body,
            Standard::Uniform($d) => $body,
            Standard::Laplace($d) => $body,
            Standard::Cauchy($d) => $body,
            Standard::Gamma($d) => $body,
            Standard::LogNormal($d) => $body,
            Standard::Weibull($d) => $body,
            Standard::ChiSquared($d) => $body,
        }
    };
}

fn invalid<E: fmt::Display>(family: Family) -> impl FnOnce(E) -> Report<GofError> {
    move |e| Report::new(GofError::Distribution(format!("{family}: {e}")))
}

impl Standard {
    fn new(family: Family, args: &[f64]) -> Result<Self> {
        if args.len() != family.shape_count() {
            return Err(Report::new(GofError::Distribution(format!(
                "{family} takes {} shape argument(s), got {}",
                family.shape_count(),
                args.len()
            ))));
        }
        let shape = args.first().copied().unwrap_or(f64::NAN);
        let standard = match family {
            Family::Normal => Standard::Normal(Normal::new(0.0, 1.0).map_err(invalid(family))?),
            Family::StudentT => {
                Standard::StudentT(StudentsT::new(0.0, 1.0, shape).map_err(invalid(family))?)
            }
            Family::Exponential => Standard::Exponential(Exp::new(1.0).map_err(invalid(family))?),
            Family::Uniform => Standard::Uniform(Uniform::new(0.0, 1.0).map_err(invalid(family))?),
            Family::Laplace => Standard::Laplace(Laplace::new(0.0, 1.0).map_err(invalid(family))?),
            Family::Cauchy => Standard::Cauchy(Cauchy::new(0.0, 1.0).map_err(invalid(family))?),
            Family::Gamma => Standard::Gamma(Gamma::new(shape, 1.0).map_err(invalid(family))?),
            Family::LogNormal => {
                Standard::LogNormal(LogNormal::new(0.0, shape).map_err(invalid(family))?)
            }
            Family::Weibull => Standard::Weibull(Weibull::new(shape, 1.0).map_err(invalid(family))?),
            Family::ChiSquared => Standard::ChiSquared(ChiSquared::new(shape).map_err(invalid(family))?),
        };
        Ok(standard)
    }

    fn cdf(&self, z: f64) -> f64 {
        dispatch!(self, d => d.cdf(z))
    }

    fn ppf(&self, p: f64) -> f64 {
        dispatch!(self, d => d.inverse_cdf(p))
    }
}

/// A frozen reference distribution.
#[derive(Clone, Debug)]
pub struct RefDist {
    family: Family,
    distargs: Vec<f64>,
    loc: f64,
    scale: f64,
    standard: Standard,
}

impl RefDist {
    pub fn new(family: Family, distargs: Vec<f64>, loc: f64, scale: f64) -> Result<Self> {
        if !loc.is_finite() {
            return Err(Report::new(GofError::Distribution(format!(
                "loc must be finite, got {loc}"
            ))));
        }
        if !(scale.is_finite() && scale > 0.0) {
            return Err(Report::new(GofError::Distribution(format!(
                "scale must be positive and finite, got {scale}"
            ))));
        }
        let standard = Standard::new(family, &distargs)?;
        Ok(Self {
            family,
            distargs,
            loc,
            scale,
            standard,
        })
    }

    /// The `loc = 0`, `scale = 1` member of `family`.
    pub fn standard(family: Family, distargs: Vec<f64>) -> Result<Self> {
        Self::new(family, distargs, 0.0, 1.0)
    }

    pub fn standard_normal() -> Result<Self> {
        Self::standard(Family::Normal, vec![])
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn distargs(&self) -> &[f64] {
        &self.distargs
    }

    pub fn loc(&self) -> f64 {
        self.loc
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Same family and shape with a different location and scale.
    pub fn with_loc_scale(&self, loc: f64, scale: f64) -> Result<Self> {
        Self::new(self.family, self.distargs.clone(), loc, scale)
    }

    pub fn cdf(&self, x: f64) -> f64 {
        self.standard.cdf((x - self.loc) / self.scale)
    }

    /// Inverse CDF.
    pub fn ppf(&self, p: f64) -> f64 {
        self.loc + self.scale * self.standard.ppf(p)
    }

    /// Estimate `(loc, scale)` for `data` with the shape held fixed.
    ///
    /// Normal uses the maximum-likelihood estimates (mean, `ddof = 0`
    /// standard deviation). Other families regress the ordered sample on
    /// the standardized quantiles at plotting positions `a`.
    pub fn fit(&self, sorted: &[f64], a: f64) -> Result<(f64, f64)> {
        let (loc, scale) = match self.family {
            Family::Normal => (stats::mean(sorted), stats::population_std(sorted)),
            _ => {
                let q: Vec<f64> = stats::plotting_positions(sorted.len(), a)
                    .into_iter()
                    .map(|p| self.standard.ppf(p))
                    .collect();
                let line = stats::least_squares(&q, sorted).ok_or_else(|| {
                    Report::new(GofError::Distribution(format!(
                        "cannot fit {} to {} observation(s)",
                        self.family,
                        sorted.len()
                    )))
                })?;
                (line.intercept, line.slope)
            }
        };
        if !(scale.is_finite() && scale > 0.0) {
            return Err(Report::new(GofError::Distribution(format!(
                "fitted scale for {} is not positive ({scale})",
                self.family
            ))));
        }
        debug!(family = %self.family, loc, scale, "fitted reference distribution");
        Ok((loc, scale))
    }
}
