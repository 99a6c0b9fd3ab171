//! Error types produced while rendering simulation output.

use thiserror::Error;

/// Error returned when the comparison chart cannot be drawn or saved.
///
/// Plotters reports backend failures through a generic error type, so the
/// message is captured as text to keep this type free of backend parameters.
///
/// # Examples
///
/// ```
/// use rubberband::PlotError;
///
/// let error = PlotError::Drawing("disk full".to_owned());
/// assert_eq!(error.to_string(), "failed to draw comparison chart: disk full");
/// ```
#[derive(Clone, Debug, Error, PartialEq)]
pub enum PlotError {
    /// Returned when the drawing backend or chart layout fails.
    #[error("failed to draw comparison chart: {0}")]
    Drawing(String),
}
