use std::sync::atomic::{AtomicU64, Ordering};

use error_stack::{Report, ResultExt};
use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::{GofError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlotId(pub u64);

impl Default for PlotId {
    fn default() -> Self {
        static CTR: AtomicU64 = AtomicU64::new(1);
        Self(CTR.fetch_add(1, Ordering::Relaxed))
    }
}

impl PlotId {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Common metadata for all axes
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlotMeta {
    /// Title displayed at the top of the axes
    pub title: Option<String>,
    /// Optional description displayed below the title
    pub description: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::rgb(0.0, 0.5, 0.0);
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    pub const YELLOW: Self = Self::rgb(1.0, 1.0, 0.0);
    pub const CYAN: Self = Self::rgb(0.0, 0.75, 0.75);
    pub const MAGENTA: Self = Self::rgb(0.75, 0.0, 0.75);
    pub const GRAY: Self = Self::rgb(0.5, 0.5, 0.5);
    pub const CORNFLOWER_BLUE: Self = Self::rgb(0.392, 0.584, 0.929);

    /// Look up a color by its single-letter code (`"b"`, `"r"`, ...) or a
    /// small set of named colors.
    pub fn named(name: &str) -> Option<Self> {
        let c = match name.trim().to_ascii_lowercase().as_str() {
            "k" | "black" => Self::BLACK,
            "w" | "white" => Self::WHITE,
            "r" | "red" => Self::RED,
            "g" | "green" => Self::GREEN,
            "b" | "blue" => Self::BLUE,
            "y" | "yellow" => Self::YELLOW,
            "c" | "cyan" => Self::CYAN,
            "m" | "magenta" => Self::MAGENTA,
            "gray" | "grey" => Self::GRAY,
            "cornflowerblue" => Self::CORNFLOWER_BLUE,
            _ => return None,
        };
        Some(c)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Marker {
    #[default]
    Circle,
    Diamond,
    Square,
    Triangle,
    Cross,
    Plus,
    Point,
    /// No marker, used by line layers
    None,
}

impl Marker {
    /// Map a single-character marker code (`'o'`, `'d'`, `'s'`, ...).
    pub fn from_code(code: char) -> Option<Self> {
        let m = match code {
            'o' => Self::Circle,
            'd' | 'D' => Self::Diamond,
            's' => Self::Square,
            '^' => Self::Triangle,
            'x' => Self::Cross,
            '+' => Self::Plus,
            '.' => Self::Point,
            _ => return None,
        };
        Some(m)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dash {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub color: Color,
    /// Marker edge color; falls back to `color` when unset
    pub edge_color: Option<Color>,
    pub size: f32, // line width / marker radius
    pub opacity: f32, // multiplied into alpha
    pub marker: Marker,
    pub dash: Dash,
}

impl Default for Style {
    fn default() -> Self {
        Self::points()
    }
}

impl Style {
    /// Blue circles, the default scatter style.
    pub const fn points() -> Self {
        Self {
            color: Color::BLUE,
            edge_color: None,
            size: 4.0,
            opacity: 1.0,
            marker: Marker::Circle,
            dash: Dash::Solid,
        }
    }

    /// Solid red line, the default reference-line style.
    pub const fn reference_line() -> Self {
        Self {
            color: Color::RED,
            edge_color: None,
            size: 1.5,
            opacity: 1.0,
            marker: Marker::None,
            dash: Dash::Solid,
        }
    }

    #[inline]
    pub const fn color(mut self, c: Color) -> Self {
        self.color = c;
        self
    }

    #[inline]
    pub const fn edge_color(mut self, c: Color) -> Self {
        self.edge_color = Some(c);
        self
    }

    #[inline]
    pub const fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    #[inline]
    pub const fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    #[inline]
    pub const fn marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }

    #[inline]
    pub const fn dash(mut self, dash: Dash) -> Self {
        self.dash = dash;
        self
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scale {
    #[default]
    Linear,
    /// Positions are quantiles of a distribution, ticks are labelled with
    /// the matching probabilities.
    Probability,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Geometry2D {
    Line,
    Points,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Layer2D {
    pub geometry: Geometry2D,
    pub xy: Vec<DVec2>,
    pub style: Style,
}

impl Layer2D {
    pub fn new(geometry: Geometry2D, xy: Vec<DVec2>) -> Self {
        let style = match geometry {
            Geometry2D::Line => Style::reference_line(),
            Geometry2D::Points => Style::points(),
        };
        Self {
            geometry,
            xy,
            style,
        }
    }

    /// Zip two equally long coordinate slices into a layer.
    pub fn from_xy(geometry: Geometry2D, x: &[f64], y: &[f64]) -> Self {
        let xy = x.iter().zip(y).map(|(&x, &y)| DVec2::new(x, y)).collect();
        Self::new(geometry, xy)
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        self.xy.iter().map(|p| p.x)
    }

    pub fn ys(&self) -> impl Iterator<Item = f64> + '_ {
        self.xy.iter().map(|p| p.y)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

/// A single drawing surface. Plot calls append layers and set labels,
/// limits and ticks; they never take ownership of it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Axes {
    pub id: PlotId,
    pub meta: PlotMeta,
    pub layers: Vec<Layer2D>,
    pub x_scale: Scale,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub x_lim: Option<[f64; 2]>,
    pub y_lim: Option<[f64; 2]>,
    /// Custom x ticks; `None` lets the renderer pick
    pub x_ticks: Option<Vec<Tick>>,
}

impl Default for Axes {
    fn default() -> Self {
        Self::new()
    }
}

impl Axes {
    pub fn new() -> Self {
        Self {
            id: PlotId::new(),
            meta: PlotMeta::default(),
            layers: vec![],
            x_scale: Scale::default(),
            x_label: None,
            y_label: None,
            x_lim: None,
            y_lim: None,
            x_ticks: None,
        }
    }

    pub fn with_layer(mut self, layer: Layer2D) -> Self {
        self.layers.push(layer);
        self
    }

    pub fn push_layer(&mut self, layer: Layer2D) -> &mut Self {
        self.layers.push(layer);
        self
    }

    pub fn title(&mut self, title: impl Into<String>) -> &mut Self {
        self.meta.title = Some(title.into());
        self
    }

    pub fn set_xlabel(&mut self, label: impl Into<String>) -> &mut Self {
        self.x_label = Some(label.into());
        self
    }

    pub fn set_ylabel(&mut self, label: impl Into<String>) -> &mut Self {
        self.y_label = Some(label.into());
        self
    }

    pub fn set_xlim(&mut self, lo: f64, hi: f64) -> &mut Self {
        self.x_lim = Some([lo, hi]);
        self
    }

    pub fn set_ylim(&mut self, lo: f64, hi: f64) -> &mut Self {
        self.y_lim = Some([lo, hi]);
        self
    }

    pub fn set_xticks(&mut self, ticks: Vec<Tick>) -> &mut Self {
        self.x_ticks = Some(ticks);
        self
    }

    /// Bounding box of all finite layer points.
    pub fn bounds(&self) -> Option<(DVec2, DVec2)> {
        let mut min = DVec2::splat(f64::INFINITY);
        let mut max = DVec2::splat(f64::NEG_INFINITY);
        let mut any = false;
        for l in &self.layers {
            for p in &l.xy {
                if !p.is_finite() {
                    continue;
                }
                min = min.min(*p);
                max = max.max(*p);
                any = true;
            }
        }
        any.then_some((min, max))
    }

    /// Visible range: explicit limits where set, data bounds otherwise.
    pub fn view_limits(&self) -> Option<([f64; 2], [f64; 2])> {
        let data = self.bounds();
        let x = self
            .x_lim
            .or_else(|| data.map(|(min, max)| [min.x, max.x]))?;
        let y = self
            .y_lim
            .or_else(|| data.map(|(min, max)| [min.y, max.y]))?;
        Some((x, y))
    }

    /// Points layers in insertion order.
    pub fn scatter_layers(&self) -> impl Iterator<Item = &Layer2D> {
        self.layers
            .iter()
            .filter(|l| l.geometry == Geometry2D::Points)
    }

    /// Line layers in insertion order.
    pub fn line_layers(&self) -> impl Iterator<Item = &Layer2D> {
        self.layers
            .iter()
            .filter(|l| l.geometry == Geometry2D::Line)
    }
}

/// A set of axes laid out in a grid, the unit handed to a renderer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub background: Color,
    pub axes: Vec<Axes>,
    /// Number of columns per row (default: auto based on axes count)
    pub columns: Option<usize>,
}

impl Default for Figure {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            axes: vec![],
            columns: None,
        }
    }
}

impl Figure {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an empty axes and hand it out for drawing.
    pub fn add_axes(&mut self) -> &mut Axes {
        self.axes.push(Axes::new());
        let last = self.axes.len() - 1;
        &mut self.axes[last]
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).change_context(GofError::Serialization)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).change_context(GofError::Serialization)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let fig: Self = serde_json::from_str(json).change_context(GofError::Serialization)?;
        if fig.columns == Some(0) {
            return Err(Report::new(GofError::Serialization));
        }
        Ok(fig)
    }
}
