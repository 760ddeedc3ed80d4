//! # One dimensional ODE solvers
//! `ode1d` integrates scalar ordinary differential equations `dy/dt = f(t, y)`
//! with fixed-step methods.
//!
//! ```
//! use ode1d::{Euler, Solver1D};
//!
//! let mut stepper = Euler::new(|_t: f64, y: f64| y, 0.1, 3, 0.0).unwrap();
//! let res = stepper.solve(1.0).unwrap();
//! assert_eq!(res.steps, 3);
//! assert!((res.sol[2] - 1.21).abs() < 1e-12);
//! ```

// Re-export from external crate
pub use nalgebra::DVector;

// Declare modules
pub mod config;
pub mod constants;
pub mod euler;
pub mod plot;
pub mod solution;
pub mod solver1d;

pub use config::{ConfigError, SolverConfig};
pub use euler::Euler;
pub use plot::Plotter;
pub use solution::Solution;
pub use solver1d::{Base1D, Fallible, Solver1D, Stats, System1D};
