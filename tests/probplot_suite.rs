use gofplots::prelude::*;
use gofplots::stats;
use rand::SeedableRng;
use rand::distributions::Distribution;
use rand::rngs::StdRng;
use statrs::distribution::{Normal, StudentsT};

fn normal_draws(rng: &mut StdRng, n: usize, loc: f64, scale: f64) -> Vec<f64> {
    let d = Normal::new(loc, scale).unwrap();
    (0..n).map(|_| d.sample(rng)).collect()
}

/// Residual-like data: 16 heavy-tailed draws.
fn residuals(rng: &mut StdRng) -> Vec<f64> {
    let d = StudentsT::new(0.0, 250.0, 4.0).unwrap();
    (0..16).map(|_| d.sample(rng)).collect()
}

struct Scenario {
    plot: ProbPlot,
    line: Line,
    other_array: Vec<f64>,
    other_plot: ProbPlot,
}

impl Scenario {
    fn new(plot: ProbPlot, line: Line, rng: &mut StdRng) -> Self {
        let other_array = normal_draws(rng, plot.nobs(), 0.0, 1.0);
        let other_plot = ProbPlot::new(other_array.clone()).unwrap();
        Self {
            plot,
            line,
            other_array,
            other_plot,
        }
    }

    fn longley_like() -> Self {
        let mut rng = StdRng::seed_from_u64(5);
        let cfg = ProbPlotConfig::new()
            .dist(Family::StudentT)
            .distargs(vec![4.0]);
        let plot = ProbPlot::with_config(residuals(&mut rng), &cfg).unwrap();
        Self::new(plot, Line::R, &mut rng)
    }

    fn random_normal_minimal() -> Self {
        let mut rng = StdRng::seed_from_u64(5);
        let plot = ProbPlot::new(normal_draws(&mut rng, 37, 8.25, 3.25)).unwrap();
        Self::new(plot, Line::None, &mut rng)
    }

    fn random_normal_with_fit() -> Self {
        let mut rng = StdRng::seed_from_u64(5);
        let cfg = ProbPlotConfig::new().fit(true);
        let plot = ProbPlot::with_config(normal_draws(&mut rng, 37, 8.25, 3.25), &cfg).unwrap();
        Self::new(plot, Line::Q, &mut rng)
    }

    fn random_normal_loc_scale() -> Self {
        let mut rng = StdRng::seed_from_u64(5);
        let cfg = ProbPlotConfig::new().loc(8.25).scale(3.25);
        let plot = ProbPlot::with_config(normal_draws(&mut rng, 37, 8.25, 3.25), &cfg).unwrap();
        Self::new(plot, Line::FortyFive, &mut rng)
    }

    fn all() -> Vec<Self> {
        vec![
            Self::longley_like(),
            Self::random_normal_minimal(),
            Self::random_normal_with_fit(),
            Self::random_normal_loc_scale(),
        ]
    }

    fn base(&self) -> PlotOptions<'_> {
        PlotOptions::new().line(self.line)
    }

    /// Run every plot kind with `opts` and check the common shape of the result.
    fn check_all_kinds(&self, opts: &PlotOptions<'_>) -> Vec<Axes> {
        let draws: [fn(&ProbPlot, &mut Axes, &PlotOptions<'_>) -> Result<()>; 3] = [
            |p, ax, o| p.qqplot(ax, o).map(drop),
            |p, ax, o| p.ppplot(ax, o).map(drop),
            |p, ax, o| p.probplot(ax, o).map(drop),
        ];
        draws
            .iter()
            .map(|draw| {
                let mut ax = Axes::new();
                draw(&self.plot, &mut ax, opts).unwrap();
                assert_eq!(ax.scatter_layers().count(), 1);
                let expected_lines = usize::from(self.line != Line::None);
                assert_eq!(ax.line_layers().count(), expected_lines);
                assert_eq!(ax.scatter_layers().next().unwrap().xy.len(), self.plot.nobs());
                ax
            })
            .collect()
    }
}

#[test]
fn plots_against_reference_distribution() {
    for s in Scenario::all() {
        s.check_all_kinds(&s.base());
    }
}

#[test]
fn plots_against_other_array() {
    for s in Scenario::all() {
        s.check_all_kinds(&s.base().other(&s.other_array));
    }
}

#[test]
fn plots_against_other_probplot() {
    for s in Scenario::all() {
        s.check_all_kinds(&s.base().other(&s.other_plot));
    }
}

#[test]
fn other_array_and_other_probplot_draw_the_same_points() {
    for s in Scenario::all() {
        let by_array = s.check_all_kinds(&s.base().other(&s.other_array));
        let by_plot = s.check_all_kinds(&s.base().other(&s.other_plot));
        for (a, b) in by_array.iter().zip(&by_plot) {
            assert_eq!(a.layers, b.layers);
        }
    }
}

#[test]
fn custom_labels() {
    for s in Scenario::all() {
        let opts = s
            .base()
            .xlabel("Custom X-Label")
            .ylabel("Custom Y-Label");
        for ax in s.check_all_kinds(&opts) {
            assert_eq!(ax.x_label.as_deref(), Some("Custom X-Label"));
            assert_eq!(ax.y_label.as_deref(), Some("Custom Y-Label"));
        }
    }
}

#[test]
fn styling_overrides_reach_the_points_layer() {
    let style = Style::points()
        .marker(Marker::Diamond)
        .color(Color::named("cornflowerblue").unwrap())
        .edge_color(Color::WHITE)
        .opacity(0.5);
    for s in Scenario::all() {
        for ax in s.check_all_kinds(&s.base().style(style)) {
            let pts = ax.scatter_layers().next().unwrap();
            assert_eq!(pts.style, style);
            if let Some(line) = ax.line_layers().next() {
                assert_eq!(line.style, Style::reference_line());
            }
        }
    }
}

#[test]
fn derived_lengths_equal_sample_length() {
    for s in Scenario::all() {
        let p = &s.plot;
        assert_eq!(p.sample_quantiles().len(), p.nobs());
        assert_eq!(p.theoretical_quantiles().len(), p.nobs());
        assert_eq!(p.sample_percentiles().len(), p.nobs());
    }
}

#[test]
fn ppplot_points_stay_in_unit_square() {
    for s in Scenario::all() {
        for opts in [s.base(), s.base().other(&s.other_array)] {
            let mut ax = Axes::new();
            s.plot.ppplot(&mut ax, &opts).unwrap();
            let pts = ax.scatter_layers().next().unwrap();
            assert!(
                pts.xy
                    .iter()
                    .all(|p| (0.0..=1.0).contains(&p.x) && (0.0..=1.0).contains(&p.y))
            );
        }
    }
}

#[test]
fn fitted_normal_uses_sample_mean_and_population_std() {
    let s = Scenario::random_normal_with_fit();
    let data = s.plot.data();
    let (loc, scale) = s.plot.fit_params().unwrap();
    assert!((loc - stats::mean(data)).abs() < 1e-12);
    assert!((scale - stats::population_std(data)).abs() < 1e-12);
    assert!((loc - 8.25).abs() < 2.0);
    assert!((scale - 3.25).abs() < 1.5);
}

#[test]
fn qqplot_against_itself_draws_the_diagonal() {
    let s = Scenario::random_normal_minimal();
    let mut ax = Axes::new();
    let opts = PlotOptions::new()
        .line(Line::FortyFive)
        .other(&s.plot);
    s.plot.qqplot(&mut ax, &opts).unwrap();

    let pts = ax.scatter_layers().next().unwrap();
    assert!(pts.xy.iter().all(|p| (p.x - p.y).abs() < 1e-12));
    let line = ax.line_layers().next().unwrap();
    assert_eq!(line.xy.len(), 2);
    for p in &line.xy {
        assert!((p.x - p.y).abs() < 1e-12);
    }
    let sorted = s.plot.sorted_data();
    assert!((line.xy[0].x - sorted[0]).abs() < 1e-12);
    assert!((line.xy[1].x - sorted[sorted.len() - 1]).abs() < 1e-12);
}

#[test]
fn top_level_qqplot() {
    let mut rng = StdRng::seed_from_u64(5);
    let res = residuals(&mut rng);
    let fig = qqplot(&res, &ProbPlotConfig::default(), Line::R).unwrap();
    assert_eq!(fig.axes.len(), 1);
    assert_eq!(fig.axes[0].line_layers().count(), 1);
}

#[test]
fn qqplot_2samples_with_probplot_objects_every_line() {
    let s = Scenario::longley_like();
    for line in [Line::R, Line::Q, Line::FortyFive, Line::S] {
        let fig = qqplot_2samples(&s.plot, &s.other_plot, PlotOptions::new().line(line)).unwrap();
        assert_eq!(fig.axes[0].line_layers().count(), 1, "line {line}");
    }
}

#[test]
fn qqplot_2samples_with_arrays_every_line() {
    let s = Scenario::longley_like();
    let res = s.plot.data().to_vec();
    for line in Line::ALL {
        let fig = qqplot_2samples(&res, &s.other_array, PlotOptions::new().line(line)).unwrap();
        let ax = &fig.axes[0];
        assert_eq!(ax.scatter_layers().count(), 1);
        assert_eq!(ax.line_layers().count(), usize::from(line != Line::None));
    }
}

#[test]
fn qqplot_2samples_of_tiny_values_every_line() {
    let a: Vec<f64> = [0.3, -1.2, 0.8, 1.9, -0.4, 0.1].iter().map(|v| v * 1e-9).collect();
    let b: Vec<f64> = [0.5, -0.2, 1.1, -0.9, 0.7, 0.2].iter().map(|v| v * 1e-9).collect();
    for line in Line::ALL {
        let fig = qqplot_2samples(&a, &b, PlotOptions::new().line(line))
            .unwrap_or_else(|e| panic!("line {line}: {e:?}"));
        let ax = &fig.axes[0];
        assert_eq!(ax.scatter_layers().next().unwrap().xy.len(), a.len());
        assert_eq!(ax.line_layers().count(), usize::from(line != Line::None));
    }
}

#[test]
fn figure_survives_json() {
    let s = Scenario::random_normal_loc_scale();
    let fig = figure()
        .columns(2)
        .add_qqplot(&s.plot, &s.base())
        .and_then(|f| f.add_probplot(&s.plot, &s.base().exceed(true)))
        .unwrap()
        .build();
    let json = fig.to_json().unwrap();
    assert_eq!(Figure::from_json(&json).unwrap(), fig);
}
