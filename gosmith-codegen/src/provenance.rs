//! Call-site tags for builder values.

use std::{fmt, panic::Location};

/// The source location of the builder call that produced a value.
///
/// Constructors and mutators that introduce validated values are marked
/// `#[track_caller]` and capture a `Provenance`, so a failure reported at
/// render time can point back at the line that built the offending value.
/// When one call introduces several values they all share its tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Provenance(&'static Location<'static>);

impl Provenance {
    /// Capture the location of the caller.
    #[track_caller]
    pub fn caller() -> Self {
        Self(Location::caller())
    }

    pub fn file(&self) -> &'static str {
        self.0.file()
    }

    pub fn line(&self) -> u32 {
        self.0.line()
    }

    pub fn column(&self) -> u32 {
        self.0.column()
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file(), self.line(), self.column())
    }
}
