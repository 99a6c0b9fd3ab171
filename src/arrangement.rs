//! The ways two rubber bands can be joined.

use std::fmt;

/// Topology of the two elastic elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Arrangement {
    /// Elements connected end-to-end.
    Series,
    /// Elements connected side-by-side.
    Parallel,
    /// Averaged blend of the series and parallel force laws.
    Combined,
}

impl Arrangement {
    /// Every arrangement in menu order.
    pub const ALL: [Arrangement; 3] = [
        Arrangement::Series,
        Arrangement::Parallel,
        Arrangement::Combined,
    ];

    /// Capitalised label used in charts and reports.
    ///
    /// # Examples
    /// ```
    /// use rubberband::Arrangement;
    ///
    /// assert_eq!(Arrangement::Parallel.label(), "Parallel");
    /// ```
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Arrangement::Series => "Series",
            Arrangement::Parallel => "Parallel",
            Arrangement::Combined => "Combined",
        }
    }

    /// Lowercase name used in running commentary.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Arrangement::Series => "series",
            Arrangement::Parallel => "parallel",
            Arrangement::Combined => "combined",
        }
    }

    /// Qualitative notes on how the arrangement trades force for travel,
    /// drawn from the analogy with muscle architecture.
    #[must_use]
    pub const fn characteristics(self) -> [&'static str; 4] {
        match self {
            Arrangement::Series => [
                "Lower force output",
                "Greater total displacement",
                "Similar to muscle sarcomeres in series",
                "Favors velocity over force",
            ],
            Arrangement::Parallel => [
                "Higher force output",
                "Less total displacement",
                "Similar to parallel muscle fibers",
                "Favors force over velocity",
            ],
            Arrangement::Combined => [
                "Balanced force-displacement relationship",
                "Moderate force and displacement",
                "Most similar to actual muscle architecture",
                "Combines advantages of both arrangements",
            ],
        }
    }
}

impl fmt::Display for Arrangement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
