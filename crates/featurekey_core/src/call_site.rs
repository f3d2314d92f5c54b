//! Source locations captured at accessor construction.

use core::fmt;
use core::panic::Location;

/// Represent the file and line of a construction call.
///
/// ## Notes
/// - Usually produced from [`Location::caller`] inside a `#[track_caller]` constructor, so forwarding constructors
///   never show up in place of the user's call site.
/// - `Display` renders `file:line`, the form used inside anonymous key names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallSite {
    file: &'static str,
    line: u32,
}

impl CallSite {
    /// Build a call site from explicit parts.
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// Capture the location of the nearest caller not marked `#[track_caller]`.
    #[track_caller]
    pub fn caller() -> Self {
        Self::from(Location::caller())
    }

    /// Return the source file path as reported by the compiler.
    pub const fn file(&self) -> &'static str {
        self.file
    }

    /// Return the 1-based line number.
    pub const fn line(&self) -> u32 {
        self.line
    }
}

impl From<&'static Location<'static>> for CallSite {
    fn from(loc: &'static Location<'static>) -> Self {
        Self::new(loc.file(), loc.line())
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}
