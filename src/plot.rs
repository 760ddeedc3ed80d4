//! Plotting collaborator used by `plot_solution`.
//!
//! Solvers only talk to the [`Plotter`] trait. They call its methods in a
//! fixed order: `subplots`, `plot`, `set_xlabel`, `set_ylabel`, then either
//! `show` or `close`. With the `plot` feature enabled, [`FilePlotter`]
//! renders figures to PNG or SVG files through `plotters`.

/// External 2-D plotting library.
pub trait Plotter {
    /// Handle to a figure.
    type Figure;
    /// Handle to the axis of a figure.
    type Axis;
    type Error;

    /// Creates a figure holding a single axis.
    fn subplots(&mut self) -> Result<(Self::Figure, Self::Axis), Self::Error>;

    /// Adds a line through the points `(x[i], y[i])`.
    fn plot(&mut self, axis: &mut Self::Axis, x: &[f64], y: &[f64]) -> Result<(), Self::Error>;

    fn set_xlabel(&mut self, axis: &mut Self::Axis, label: &str) -> Result<(), Self::Error>;

    fn set_ylabel(&mut self, axis: &mut Self::Axis, label: &str) -> Result<(), Self::Error>;

    /// Displays the figure.
    fn show(&mut self, figure: &Self::Figure, axis: &Self::Axis) -> Result<(), Self::Error>;

    /// Releases the figure without displaying it.
    fn close(&mut self, figure: &Self::Figure) -> Result<(), Self::Error>;
}

#[cfg(feature = "plot")]
pub use self::file::{Axis, Figure, FilePlotter, PlotError};

#[cfg(feature = "plot")]
mod file {
    use super::Plotter;
    use crate::constants::plot as geometry;

    use plotters::prelude::*;
    use std::ops::Range;
    use std::path::{Path, PathBuf};
    use thiserror::Error;

    /// Enumeration of the errors that may arise while rendering a figure.
    #[derive(Debug, Error)]
    pub enum PlotError {
        #[error("Series lengths differ: {x_len} abscissas for {y_len} ordinates.")]
        LengthMismatch { x_len: usize, y_len: usize },
        #[error("Nothing to draw in {path:?}.")]
        EmptyFigure { path: PathBuf },
        #[error("Drawing backend failed: {0}")]
        Backend(String),
    }

    fn backend<E: std::fmt::Display>(e: E) -> PlotError {
        PlotError::Backend(e.to_string())
    }

    /// Output file and size of a figure.
    #[derive(Debug, Clone, PartialEq)]
    pub struct Figure {
        pub path: PathBuf,
        pub width: u32,
        pub height: u32,
    }

    /// Lines and labels collected before rendering.
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Axis {
        pub lines: Vec<Vec<(f64, f64)>>,
        pub x_label: String,
        pub y_label: String,
    }

    impl Axis {
        fn x_range(&self) -> Option<Range<f64>> {
            padded_range(self.lines.iter().flatten().map(|p| p.0))
        }

        fn y_range(&self) -> Option<Range<f64>> {
            padded_range(self.lines.iter().flatten().map(|p| p.1))
        }
    }

    /// Smallest range holding every finite value, widened by
    /// [`geometry::AXIS_PADDING`] on each side. A degenerate range is widened
    /// by one unit so single samples stay visible.
    fn padded_range<I: Iterator<Item = f64>>(values: I) -> Option<Range<f64>> {
        let (min, max) = values
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })?;
        let span = max - min;
        if span == 0.0 {
            return Some(min - 0.5..max + 0.5);
        }
        let pad = span * geometry::AXIS_PADDING;
        Some(min - pad..max + pad)
    }

    /// Renders figures to image files. The format follows the extension of
    /// the path: `.svg` gives an SVG document, anything else a bitmap.
    #[derive(Debug, Clone)]
    pub struct FilePlotter {
        path: PathBuf,
        width: u32,
        height: u32,
    }

    impl FilePlotter {
        pub fn new<P: AsRef<Path>>(path: P) -> Self {
            FilePlotter {
                path: path.as_ref().to_path_buf(),
                width: geometry::WIDTH,
                height: geometry::HEIGHT,
            }
        }

        pub fn with_size(mut self, width: u32, height: u32) -> Self {
            self.width = width;
            self.height = height;
            self
        }

        fn draw<DB: DrawingBackend>(
            root: DrawingArea<DB, plotters::coord::Shift>,
            figure: &Figure,
            axis: &Axis,
        ) -> Result<(), PlotError> {
            let (x_range, y_range) = match (axis.x_range(), axis.y_range()) {
                (Some(x), Some(y)) => (x, y),
                _ => {
                    return Err(PlotError::EmptyFigure {
                        path: figure.path.clone(),
                    })
                }
            };

            root.fill(&WHITE).map_err(backend)?;
            let mut chart = ChartBuilder::on(&root)
                .margin(15)
                .x_label_area_size(50)
                .y_label_area_size(70)
                .build_cartesian_2d(x_range, y_range)
                .map_err(backend)?;

            chart
                .configure_mesh()
                .x_desc(axis.x_label.as_str())
                .y_desc(axis.y_label.as_str())
                .draw()
                .map_err(backend)?;

            for line in &axis.lines {
                chart
                    .draw_series(LineSeries::new(line.iter().copied(), &BLUE))
                    .map_err(backend)?;
            }

            root.present().map_err(backend)?;
            Ok(())
        }
    }

    impl Plotter for FilePlotter {
        type Figure = Figure;
        type Axis = Axis;
        type Error = PlotError;

        fn subplots(&mut self) -> Result<(Figure, Axis), PlotError> {
            let figure = Figure {
                path: self.path.clone(),
                width: self.width,
                height: self.height,
            };
            Ok((figure, Axis::default()))
        }

        fn plot(&mut self, axis: &mut Axis, x: &[f64], y: &[f64]) -> Result<(), PlotError> {
            if x.len() != y.len() {
                return Err(PlotError::LengthMismatch {
                    x_len: x.len(),
                    y_len: y.len(),
                });
            }
            axis.lines.push(x.iter().copied().zip(y.iter().copied()).collect());
            Ok(())
        }

        fn set_xlabel(&mut self, axis: &mut Axis, label: &str) -> Result<(), PlotError> {
            axis.x_label = label.to_string();
            Ok(())
        }

        fn set_ylabel(&mut self, axis: &mut Axis, label: &str) -> Result<(), PlotError> {
            axis.y_label = label.to_string();
            Ok(())
        }

        fn show(&mut self, figure: &Figure, axis: &Axis) -> Result<(), PlotError> {
            let size = (figure.width, figure.height);
            let is_svg = figure
                .path
                .extension()
                .map_or(false, |ext| ext.eq_ignore_ascii_case("svg"));
            if is_svg {
                let root = SVGBackend::new(&figure.path, size).into_drawing_area();
                Self::draw(root, figure, axis)?;
            } else {
                let root = BitMapBackend::new(&figure.path, size).into_drawing_area();
                Self::draw(root, figure, axis)?;
            }
            log::debug!("figure written to {:?}", figure.path);
            Ok(())
        }

        fn close(&mut self, figure: &Figure) -> Result<(), PlotError> {
            log::debug!("figure for {:?} discarded", figure.path);
            Ok(())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::{Euler, Solver1D};

        fn solved() -> Euler<fn(f64, f64) -> f64> {
            fn growth(_t: f64, y: f64) -> f64 {
                y
            }
            let mut stepper = Euler::new(growth as fn(f64, f64) -> f64, 0.1, 11, 0.).unwrap();
            stepper.solve(1.).unwrap();
            stepper
        }

        fn output_path(name: &str) -> PathBuf {
            let path = std::env::temp_dir().join(name);
            let _ = std::fs::remove_file(&path);
            path
        }

        #[test]
        fn test_show_writes_svg() {
            let path = output_path("ode1d_show_writes.svg");
            let mut plotter = FilePlotter::new(&path).with_size(320, 240);
            let (figure, axis) = solved().plot_solution(&mut plotter, true).unwrap();
            assert_eq!(figure.path, path);
            assert_eq!(axis.x_label, "t");
            assert_eq!(axis.y_label, "y");
            assert_eq!(axis.lines[0].len(), 11);

            let content = std::fs::read_to_string(&path).unwrap();
            assert!(content.contains("<svg"));
            let _ = std::fs::remove_file(&path);
        }

        #[test]
        fn test_show_writes_png() {
            let path = output_path("ode1d_show_writes.png");
            let mut plotter = FilePlotter::new(&path).with_size(320, 240);
            solved().plot_solution(&mut plotter, true).unwrap();

            let len = std::fs::metadata(&path).unwrap().len();
            assert!(len > 0);
            let _ = std::fs::remove_file(&path);
        }

        #[test]
        fn test_close_writes_nothing() {
            let path = output_path("ode1d_close_writes_nothing.png");
            let mut plotter = FilePlotter::new(&path);
            let (figure, axis) = solved().plot_solution(&mut plotter, false).unwrap();
            assert_eq!(figure.path, path);
            assert_eq!(axis.lines.len(), 1);
            assert!(!path.exists());
        }

        #[test]
        fn test_padded_range() {
            let range = padded_range(vec![0.0, 10.0, 5.0].into_iter()).unwrap();
            assert!((range.start + 0.5).abs() < 1.0E-12);
            assert!((range.end - 10.5).abs() < 1.0E-12);
        }

        #[test]
        fn test_padded_range_single_value() {
            let range = padded_range(vec![3.0].into_iter()).unwrap();
            assert_eq!(range, 2.5..3.5);
        }

        #[test]
        fn test_padded_range_ignores_non_finite() {
            assert!(padded_range(vec![f64::NAN, f64::INFINITY].into_iter()).is_none());
        }

        #[test]
        fn test_plot_rejects_mismatched_series() {
            let mut plotter = FilePlotter::new("unused.png");
            let (_, mut axis) = plotter.subplots().unwrap();
            let err = plotter.plot(&mut axis, &[0.0, 1.0], &[0.0]).unwrap_err();
            assert!(matches!(
                err,
                PlotError::LengthMismatch { x_len: 2, y_len: 1 }
            ));
        }

        #[test]
        fn test_show_on_empty_axis_fails() {
            let mut plotter = FilePlotter::new("unused.png");
            let (figure, axis) = plotter.subplots().unwrap();
            assert!(matches!(
                plotter.show(&figure, &axis),
                Err(PlotError::EmptyFigure { .. })
            ));
        }
    }
}
