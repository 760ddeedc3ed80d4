//! Explicit (forward) Euler method with fixed step size.

use crate::config::{ConfigError, SolverConfig};
use crate::constants::plot::{X_LABEL, Y_LABEL};
use crate::plot::Plotter;
use crate::solution::Solution;
use crate::solver1d::{Base1D, Solver1D, Stats, System1D};

use nalgebra::DVector;

/// Structure containing the parameters for the numerical integration.
///
/// The method advances with `y[i] = y[i-1] + h * f(t[i-1], y[i-1])`. Its local
/// truncation error is O(h²) and its global error O(h).
pub struct Euler<F> {
    base: Base1D<F>,
}

impl<F> Euler<F>
where
    F: System1D,
{
    /// Default initializer for the structure
    ///
    /// # Arguments
    ///
    /// * `f`       - Right hand side, a closure `Fn(f64, f64) -> f64` or any System1D
    /// * `h`       - Step size used in the method
    /// * `n_steps` - Number of samples, initial value included
    /// * `t0`      - Initial value of the independent variable (usually time)
    ///
    pub fn new(f: F, h: f64, n_steps: usize, t0: f64) -> Result<Self, ConfigError> {
        Self::from_config(f, SolverConfig::new(h, n_steps, t0))
    }

    /// Initializer taking a prepared [`SolverConfig`].
    pub fn from_config(f: F, config: SolverConfig) -> Result<Self, ConfigError> {
        Ok(Euler {
            base: Base1D::new(f, config)?,
        })
    }

    /// Initializer using `h = 0.01`, `n_steps = 1000` and `t0 = 0`.
    pub fn with_defaults(f: F) -> Result<Self, ConfigError> {
        Self::from_config(f, SolverConfig::default())
    }

    /// Core integration method.
    fn integrate(&mut self, y0: f64) -> Result<Stats, F::Error> {
        let h = self.base.config().h();
        let n_steps = self.base.config().n_steps();
        let t0 = self.base.config().t0();

        *self.base.stats_mut() = Stats::new();
        self.base.t_mut()[0] = t0;
        self.base.y_mut()[0] = y0;

        for i in 1..n_steps {
            let (t, y) = (self.base.t()[i - 1], self.base.y()[i - 1]);
            let dy = self.base.function().system(t, y)?;
            self.base.stats_mut().num_eval += 1;

            self.base.t_mut()[i] = t + h;
            self.base.y_mut()[i] = y + h * dy;
            self.base.stats_mut().accepted_steps += 1;
            log::trace!("step {}: t = {}, y = {}", i, t + h, y + h * dy);
        }
        Ok(self.base.stats())
    }

    pub fn h(&self) -> f64 {
        self.base.config().h()
    }

    pub fn n_steps(&self) -> usize {
        self.base.config().n_steps()
    }

    pub fn t0(&self) -> f64 {
        self.base.config().t0()
    }

    pub fn config(&self) -> &SolverConfig {
        self.base.config()
    }

    pub fn function(&self) -> &F {
        self.base.function()
    }

    /// Getter for the independent variable's output.
    pub fn t(&self) -> &DVector<f64> {
        self.base.t()
    }

    /// Getter for the dependent variable's output.
    pub fn y(&self) -> &DVector<f64> {
        self.base.y()
    }

    /// Statistics of the last call to `solve`.
    pub fn stats(&self) -> Stats {
        self.base.stats()
    }
}

impl<F> Solver1D for Euler<F>
where
    F: System1D,
{
    type Error = F::Error;

    fn solve(&mut self, y0: f64) -> Result<Solution, F::Error> {
        log::debug!(
            "Euler: solving from (t0 = {}, y0 = {}) over {} samples",
            self.t0(),
            y0,
            self.n_steps()
        );
        let stats = self.integrate(y0)?;
        log::debug!("Euler: done, {} evaluations", stats.num_eval);
        Ok(self.base.snapshot())
    }

    fn plot_solution<P: Plotter>(
        &self,
        plotter: &mut P,
        show: bool,
    ) -> Result<(P::Figure, P::Axis), P::Error> {
        let (figure, mut axis) = plotter.subplots()?;
        plotter.plot(&mut axis, self.t().as_slice(), self.y().as_slice())?;
        plotter.set_xlabel(&mut axis, X_LABEL)?;
        plotter.set_ylabel(&mut axis, Y_LABEL)?;
        if show {
            plotter.show(&figure, &axis)?;
        } else {
            plotter.close(&figure)?;
        }
        Ok((figure, axis))
    }
}
