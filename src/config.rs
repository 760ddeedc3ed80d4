//! Solver configuration and its validation.

use crate::constants::defaults;
use thiserror::Error;

/// Enumeration of the errors that may arise while configuring a solver.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("Time step h must be positive, got h = {h}.")]
    NonPositiveStepSize { h: f64 },
    #[error("Number of steps must be positive, got n_steps = {n_steps}.")]
    NonPositiveStepCount { n_steps: usize },
}

/// Parameters shared by every one dimensional solver.
///
/// `n_steps` counts samples, so a configuration with `n_steps = N` produces
/// `N` time points and performs `N - 1` steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    h: f64,
    n_steps: usize,
    t0: f64,
}

impl SolverConfig {
    /// Creates a configuration. Nothing is checked until [`SolverConfig::validate`].
    ///
    /// # Arguments
    ///
    /// * `h`       - Step size
    /// * `n_steps` - Number of samples, initial value included
    /// * `t0`      - Initial value of the independent variable (usually time)
    ///
    pub fn new(h: f64, n_steps: usize, t0: f64) -> Self {
        Self { h, n_steps, t0 }
    }

    pub fn with_h(mut self, h: f64) -> Self {
        self.h = h;
        self
    }

    pub fn with_n_steps(mut self, n_steps: usize) -> Self {
        self.n_steps = n_steps;
        self
    }

    pub fn with_t0(mut self, t0: f64) -> Self {
        self.t0 = t0;
        self
    }

    /// Checks that the step size is strictly positive and that at least one
    /// sample is requested. A NaN step size is rejected.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.h > 0.0) {
            return Err(ConfigError::NonPositiveStepSize { h: self.h });
        }
        if self.n_steps == 0 {
            return Err(ConfigError::NonPositiveStepCount {
                n_steps: self.n_steps,
            });
        }
        Ok(())
    }

    pub fn h(&self) -> f64 {
        self.h
    }

    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    pub fn t0(&self) -> f64 {
        self.t0
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new(
            defaults::STEP_SIZE,
            defaults::N_STEPS,
            defaults::INITIAL_TIME,
        )
    }
}
