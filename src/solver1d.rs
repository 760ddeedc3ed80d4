//! Shared traits and structures for one dimensional solvers.

use crate::config::{ConfigError, SolverConfig};
use crate::plot::Plotter;
use crate::solution::Solution;

use nalgebra::DVector;
use std::convert::Infallible;
use std::fmt;

/// Right hand side `f(t, y)` of the ordinary differential equation `dy/dt = f(t, y)`.
///
/// Any closure `Fn(f64, f64) -> f64` implements this trait and never fails.
/// Wrap a closure returning a `Result` in [`Fallible`] to let its errors reach
/// the caller of `solve`.
pub trait System1D {
    /// Error raised while evaluating the right hand side.
    type Error;

    /// Evaluates the derivative at `(t, y)`.
    fn system(&self, t: f64, y: f64) -> Result<f64, Self::Error>;
}

impl<F> System1D for F
where
    F: Fn(f64, f64) -> f64,
{
    type Error = Infallible;

    fn system(&self, t: f64, y: f64) -> Result<f64, Infallible> {
        Ok(self(t, y))
    }
}

/// Adapter for right hand sides that may fail.
///
/// ```
/// use ode1d::{Euler, Fallible, Solver1D};
///
/// let rhs = Fallible(|_t: f64, y: f64| -> Result<f64, String> {
///     if y < 0.0 {
///         Err(format!("negative population {}", y))
///     } else {
///         Ok(0.5 * y)
///     }
/// });
/// let mut stepper = Euler::new(rhs, 0.1, 11, 0.0).unwrap();
/// assert!(stepper.solve(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Fallible<F>(pub F);

impl<F, E> System1D for Fallible<F>
where
    F: Fn(f64, f64) -> Result<f64, E>,
{
    type Error = E;

    fn system(&self, t: f64, y: f64) -> Result<f64, E> {
        (self.0)(t, y)
    }
}

/// Capabilities every one dimensional solver provides.
pub trait Solver1D {
    /// Error returned by [`Solver1D::solve`].
    type Error;

    /// Integrates from the initial value `y0` and returns a snapshot of the trajectory.
    ///
    /// There is no default initial value: pass `0.0` to start from zero.
    fn solve(&mut self, y0: f64) -> Result<Solution, Self::Error>;

    /// Hands the current trajectory to `plotter` and returns the figure and axis handles.
    ///
    /// When `show` is false the figure is released without being displayed.
    fn plot_solution<P: Plotter>(
        &self,
        plotter: &mut P,
        show: bool,
    ) -> Result<(P::Figure, P::Axis), P::Error>
    where
        Self: Sized;
}

/// Contains some statistics of the integration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub num_eval: usize,
    pub accepted_steps: usize,
}

impl Stats {
    pub(crate) fn new() -> Stats {
        Stats {
            num_eval: 0,
            accepted_steps: 0,
        }
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Number of function evaluations: {}", self.num_eval)?;
        write!(f, "Number of accepted steps: {}", self.accepted_steps)
    }
}

/// State shared by one dimensional solvers: the right hand side, the
/// validated configuration and the trajectory buffers.
///
/// Both buffers have exactly `n_steps` entries for the lifetime of the
/// structure. `t[0]` holds the initial time from construction on, every
/// other entry is zero until a solver fills it.
pub struct Base1D<F> {
    f: F,
    config: SolverConfig,
    t: DVector<f64>,
    y: DVector<f64>,
    stats: Stats,
}

impl<F> Base1D<F>
where
    F: System1D,
{
    /// Validates `config` and allocates the trajectory buffers.
    pub fn new(f: F, config: SolverConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut t = DVector::zeros(config.n_steps());
        t[0] = config.t0();
        let y = DVector::zeros(config.n_steps());
        log::debug!(
            "allocated trajectory of {} samples (h = {}, t0 = {})",
            config.n_steps(),
            config.h(),
            config.t0()
        );

        Ok(Base1D {
            f,
            config,
            t,
            y,
            stats: Stats::new(),
        })
    }
}

impl<F> Base1D<F> {
    /// Getter for the right hand side.
    pub fn function(&self) -> &F {
        &self.f
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Getter for the independent variable's buffer.
    pub fn t(&self) -> &DVector<f64> {
        &self.t
    }

    /// Getter for the dependent variable's buffer.
    pub fn y(&self) -> &DVector<f64> {
        &self.y
    }

    /// Mutable access to the independent variable's buffer. Its length is fixed.
    pub fn t_mut(&mut self) -> &mut DVector<f64> {
        &mut self.t
    }

    /// Mutable access to the dependent variable's buffer. Its length is fixed.
    pub fn y_mut(&mut self) -> &mut DVector<f64> {
        &mut self.y
    }

    /// Statistics of the last call to `solve`.
    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn stats_mut(&mut self) -> &mut Stats {
        &mut self.stats
    }

    /// Copies the buffers into a [`Solution`].
    pub fn snapshot(&self) -> Solution {
        Solution {
            t: self.t.iter().copied().collect(),
            sol: self.y.iter().copied().collect(),
            steps: self.config.n_steps(),
            stats: self.stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocation() {
        let base = Base1D::new(|_t: f64, y: f64| y, SolverConfig::new(0.1, 7, 2.5)).unwrap();
        assert_eq!(base.t().len(), 7);
        assert_eq!(base.y().len(), 7);
        assert_eq!(base.t()[0], 2.5);
        assert!(base.t().iter().skip(1).all(|&t| t == 0.0));
        assert!(base.y().iter().all(|&y| y == 0.0));
        assert_eq!(base.stats(), Stats::default());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let res = Base1D::new(|_t: f64, y: f64| y, SolverConfig::new(-0.1, 7, 0.0));
        assert!(matches!(res, Err(ConfigError::NonPositiveStepSize { .. })));
    }

    #[test]
    fn test_closure_is_a_system() {
        let f = |t: f64, y: f64| t * y;
        assert_eq!(f.system(2.0, 3.0), Ok(6.0));
    }

    #[test]
    fn test_fallible_system_forwards_errors() {
        let f = Fallible(|_t: f64, y: f64| if y > 1.0 { Err("overflow") } else { Ok(y) });
        assert_eq!(f.system(0.0, 0.5), Ok(0.5));
        assert_eq!(f.system(0.0, 2.0), Err("overflow"));
    }

    #[test]
    fn test_stats_display() {
        let stats = Stats {
            num_eval: 9,
            accepted_steps: 9,
        };
        assert_eq!(
            stats.to_string(),
            "Number of function evaluations: 9\nNumber of accepted steps: 9"
        );
    }
}
