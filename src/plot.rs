//! Comparison chart of the three force-displacement curves.

use std::path::Path;

use plotters::prelude::*;
use tracing::info;

use crate::arrangement::Arrangement;
use crate::errors::PlotError;
use crate::simulator::Simulator;
use crate::sweep::Sweep;

/// File name used when the caller does not pick one.
pub const DEFAULT_PLOT_PATH: &str = "force_comparison.svg";

/// Chart title.
pub const TITLE: &str = "Force-Length Relationships for Different Rubber Band Arrangements";

/// Horizontal axis description.
pub const X_LABEL: &str = "Displacement (normalized)";

/// Vertical axis description.
pub const Y_LABEL: &str = "Force (normalized)";

/// Output size in pixels.
const SIZE: (u32, u32) = (1000, 600);

/// Default sweeps for every arrangement, in menu order.
#[must_use]
pub fn comparison_sweeps(simulator: &Simulator) -> Vec<Sweep> {
    Arrangement::ALL
        .iter()
        .map(|&arrangement| simulator.sweep_default(arrangement))
        .collect()
}

/// Line colour for an arrangement's curve.
fn curve_color(arrangement: Arrangement) -> RGBColor {
    match arrangement {
        Arrangement::Series => BLUE,
        Arrangement::Parallel => RED,
        Arrangement::Combined => GREEN,
    }
}

/// Convert any plotters failure into a [`PlotError`].
fn drawing<E: std::fmt::Display>(error: E) -> PlotError {
    PlotError::Drawing(error.to_string())
}

/// Span covering every sample on one axis, widened when it collapses to a point.
fn axis_span(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (lo, hi) = values
        .filter(|value| value.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), value| {
            (lo.min(value), hi.max(value))
        });
    if !lo.is_finite() || !hi.is_finite() {
        (0.0, 1.0)
    } else if (hi - lo).abs() < f64::EPSILON {
        (lo - 1.0, hi + 1.0)
    } else {
        (lo, hi)
    }
}

/// Render the series, parallel and combined sweeps onto one chart and save
/// it as SVG at `path`.
///
/// # Errors
///
/// Returns [`PlotError::Drawing`] when the file cannot be written or the chart
/// layout fails.
pub fn write_comparison(simulator: &Simulator, path: &Path) -> Result<(), PlotError> {
    let sweeps = comparison_sweeps(simulator);
    let (x_min, x_max) = axis_span(
        sweeps
            .iter()
            .flat_map(|sweep| sweep.displacements().iter().copied()),
    );
    let (y_min, y_max) = axis_span(sweeps.iter().flat_map(|sweep| sweep.forces().iter().copied()));

    let root = SVGBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(drawing)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(TITLE, ("sans-serif", 24))
        .set_left_and_bottom_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(drawing)?;

    chart
        .configure_mesh()
        .x_desc(X_LABEL)
        .y_desc(Y_LABEL)
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(drawing)?;

    for sweep in &sweeps {
        let color = curve_color(sweep.arrangement());
        chart
            .draw_series(LineSeries::new(sweep.points(), &color))
            .map_err(drawing)?
            .label(sweep.arrangement().label())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));
    }

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .draw()
        .map_err(drawing)?;

    root.present().map_err(drawing)?;
    info!(path = %path.display(), "wrote comparison chart");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;
    use tempdir::TempDir;

    #[test]
    fn comparison_covers_every_arrangement() {
        let sweeps = comparison_sweeps(&Simulator::new());
        let arrangements: Vec<_> = sweeps.iter().map(Sweep::arrangement).collect();
        assert_eq!(arrangements, Arrangement::ALL.to_vec());
        assert!(sweeps.iter().all(|sweep| sweep.len() == 100));
    }

    #[test]
    fn axis_span_widens_degenerate_ranges() {
        assert_eq!(axis_span([0.0, 0.0].into_iter()), (-1.0, 1.0));
        assert_eq!(axis_span(std::iter::empty()), (0.0, 1.0));
        let (lo, hi) = axis_span([0.0, 4.0, f64::NAN, 2.0].into_iter());
        assert!(approx_eq!(f64, lo, 0.0));
        assert!(approx_eq!(f64, hi, 4.0));
    }

    #[test]
    fn writes_svg_file() {
        let dir = TempDir::new("rubberband-plot").expect("temporary directory");
        let path = dir.path().join("comparison.svg");
        write_comparison(&Simulator::new(), &path).expect("chart renders");
        let contents = std::fs::read_to_string(&path).expect("chart written");
        assert!(contents.contains("<svg"));
    }

    #[test]
    fn unwritable_path_is_reported() {
        let dir = TempDir::new("rubberband-plot").expect("temporary directory");
        let path = dir.path().join("missing").join("comparison.svg");
        let error = write_comparison(&Simulator::new(), &path).expect_err("directory is missing");
        assert!(matches!(error, PlotError::Drawing(_)));
    }
}
