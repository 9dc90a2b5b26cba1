//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show values along with provenance details.
    Verbose,
    /// Show values and warnings.
    #[default]
    Normal,
    /// Show values and errors only.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows warnings.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }

    /// Check if this mode shows provenance details.
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Verbose)
    }
}
