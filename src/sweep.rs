//! Force-displacement curves sampled over a displacement range.

use ndarray::Array1;

use crate::arrangement::Arrangement;

/// Upper end of the default displacement range.
pub const DEFAULT_MAX_DISPLACEMENT: f64 = 2.0;

/// Number of samples in a default sweep.
pub const DEFAULT_STEPS: usize = 100;

/// Paired displacement and force samples for one arrangement.
///
/// Both sequences always have the same length.
#[derive(Clone, Debug, PartialEq)]
pub struct Sweep {
    /// Arrangement whose force law produced the samples.
    arrangement: Arrangement,
    /// Linearly spaced displacements starting at rest.
    displacements: Array1<f64>,
    /// Force at each displacement.
    forces: Array1<f64>,
}

impl Sweep {
    /// Sample `force` at `steps` displacements from `0` to `max_displacement`.
    pub(crate) fn evaluate<F>(
        arrangement: Arrangement,
        max_displacement: f64,
        steps: usize,
        force: F,
    ) -> Self
    where
        F: Fn(f64) -> f64,
    {
        let displacements = Array1::linspace(0.0, max_displacement, steps);
        let forces = displacements.mapv(force);
        Self {
            arrangement,
            displacements,
            forces,
        }
    }

    /// Arrangement the sweep was computed for.
    #[must_use]
    pub fn arrangement(&self) -> Arrangement {
        self.arrangement
    }

    /// Sampled displacements.
    #[must_use]
    pub fn displacements(&self) -> &Array1<f64> {
        &self.displacements
    }

    /// Force at each sampled displacement.
    #[must_use]
    pub fn forces(&self) -> &Array1<f64> {
        &self.forces
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.displacements.len()
    }

    /// True when the sweep holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.displacements.is_empty()
    }

    /// Iterate over `(displacement, force)` pairs in order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.displacements
            .iter()
            .copied()
            .zip(self.forces.iter().copied())
    }

    /// Smallest and largest force in the sweep, or `None` when empty.
    #[must_use]
    pub fn force_range(&self) -> Option<(f64, f64)> {
        self.forces.iter().copied().fold(None, |range, force| match range {
            None => Some((force, force)),
            Some((lo, hi)) => Some((lo.min(force), hi.max(force))),
        })
    }
}
