//! Closed-form force laws for two identical rubber bands.

use tracing::trace;

use crate::arrangement::Arrangement;
use crate::sweep::{Sweep, DEFAULT_MAX_DISPLACEMENT, DEFAULT_STEPS};

/// Physical constants for a pair of identical elastic elements.
///
/// Quantities are normalized, so the defaults describe a unit band with unit
/// stiffness.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulatorConfig {
    /// Unstretched length of a single band.
    pub rest_length: f64,
    /// Linear stiffness `k` of a single band (Hooke's law, `F = k x`).
    pub spring_constant: f64,
    /// Damping coefficient of a single band.
    pub damping: f64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            rest_length: 1.0,
            spring_constant: 1.0,
            damping: 0.1,
        }
    }
}

/// Evaluates the force produced by two bands for a given arrangement.
///
/// The constants are fixed at construction. Only the spring constant enters
/// the force laws; rest length and damping are carried as configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Simulator {
    /// Unstretched length of a single band.
    rest_length: f64,
    /// Stiffness of a single band.
    spring_constant: f64,
    /// Damping coefficient of a single band.
    damping: f64,
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulator {
    /// Create a simulator with the default unit constants.
    ///
    /// # Examples
    /// ```
    /// use rubberband::Simulator;
    ///
    /// let simulator = Simulator::new();
    /// assert_eq!(simulator.spring_constant(), 1.0);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SimulatorConfig::default())
    }

    /// Create a simulator from explicit constants.
    #[must_use]
    pub fn with_config(config: SimulatorConfig) -> Self {
        Self {
            rest_length: config.rest_length,
            spring_constant: config.spring_constant,
            damping: config.damping,
        }
    }

    /// Unstretched length of a single band.
    #[must_use]
    pub fn rest_length(&self) -> f64 {
        self.rest_length
    }

    /// Stiffness of a single band.
    #[must_use]
    pub fn spring_constant(&self) -> f64 {
        self.spring_constant
    }

    /// Damping coefficient of a single band.
    #[must_use]
    pub fn damping(&self) -> f64 {
        self.damping
    }

    /// Force for two bands in series.
    ///
    /// The total displacement splits evenly, so each band stretches by half
    /// and carries `k * x / 2`.
    ///
    /// # Examples
    /// ```
    /// use rubberband::Simulator;
    ///
    /// assert_eq!(Simulator::new().force_series(2.0), 1.0);
    /// ```
    #[must_use]
    pub fn force_series(&self, displacement: f64) -> f64 {
        let individual_displacement = displacement / 2.0;
        self.spring_constant * individual_displacement
    }

    /// Force for two bands in parallel.
    ///
    /// Both bands see the full displacement and their forces add.
    ///
    /// # Examples
    /// ```
    /// use rubberband::Simulator;
    ///
    /// assert_eq!(Simulator::new().force_parallel(2.0), 4.0);
    /// ```
    #[must_use]
    pub fn force_parallel(&self, displacement: f64) -> f64 {
        2.0 * self.spring_constant * displacement
    }

    /// Force for the combined arrangement.
    ///
    /// Averages the series law at the full displacement with the parallel law
    /// at half the displacement. This is an empirical blend, not a network
    /// reduction of springs.
    ///
    /// # Examples
    /// ```
    /// use rubberband::Simulator;
    ///
    /// assert_eq!(Simulator::new().force_combined(2.0), 1.5);
    /// ```
    #[must_use]
    pub fn force_combined(&self, displacement: f64) -> f64 {
        let series_force = self.force_series(displacement);
        let parallel_force = self.force_parallel(displacement / 2.0);
        (series_force + parallel_force) / 2.0
    }

    /// Force for the given arrangement at `displacement`.
    #[must_use]
    pub fn force(&self, arrangement: Arrangement, displacement: f64) -> f64 {
        match arrangement {
            Arrangement::Series => self.force_series(displacement),
            Arrangement::Parallel => self.force_parallel(displacement),
            Arrangement::Combined => self.force_combined(displacement),
        }
    }

    /// Pull the arrangement from rest to `max_displacement` in `steps`
    /// evenly spaced samples, end points included.
    ///
    /// Zero steps yields an empty sweep and a single step samples only the
    /// rest position.
    ///
    /// # Examples
    /// ```
    /// use rubberband::{Arrangement, Simulator};
    ///
    /// let sweep = Simulator::new().sweep(Arrangement::Series, 2.0, 3);
    /// assert_eq!(sweep.displacements().to_vec(), vec![0.0, 1.0, 2.0]);
    /// assert_eq!(sweep.forces().to_vec(), vec![0.0, 0.5, 1.0]);
    /// ```
    #[must_use]
    pub fn sweep(&self, arrangement: Arrangement, max_displacement: f64, steps: usize) -> Sweep {
        trace!(%arrangement, max_displacement, steps, "sweeping displacement range");
        Sweep::evaluate(arrangement, max_displacement, steps, |displacement| {
            self.force(arrangement, displacement)
        })
    }

    /// Sweep over the default range of `0..=2` with 100 samples.
    #[must_use]
    pub fn sweep_default(&self, arrangement: Arrangement) -> Sweep {
        self.sweep(arrangement, DEFAULT_MAX_DISPLACEMENT, DEFAULT_STEPS)
    }
}
