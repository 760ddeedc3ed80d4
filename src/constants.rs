/// Default solver settings
pub mod defaults {
    /// Default step size
    pub const STEP_SIZE: f64 = 0.01;

    /// Default number of samples, initial value included
    pub const N_STEPS: usize = 1000;

    /// Default initial time
    pub const INITIAL_TIME: f64 = 0.0;
}

/// Plot geometry used by the file backend
pub mod plot {
    /// Image width in pixels
    pub const WIDTH: u32 = 800;

    /// Image height in pixels
    pub const HEIGHT: u32 = 600;

    /// Fraction of the data range added on each side of an axis
    pub const AXIS_PADDING: f64 = 0.05;

    pub const X_LABEL: &str = "t";
    pub const Y_LABEL: &str = "y";
}
