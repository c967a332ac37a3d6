//! Release version tuple
//!
//! A `Version` is the canonical form of a loosely written version string such
//! as `2.1.3b2` or `10rc1`. Parsing lives in `portalkit-engine`; this module
//! only defines the value and how it compares and renders.
//!
//! ## Ordering
//!
//! Versions compare field by field: major, minor, patch, release level,
//! serial. `2.0.0-beta1 < 2.0.0-candidate1 < 2.0.0`.

use super::release_level::ReleaseLevel;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Parsed release version
///
/// ## Invariants
///
/// - Missing numeric components are 0
/// - A missing release level is `Final`
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Version {
    /// Major component
    pub major: u32,
    /// Minor component
    pub minor: u32,
    /// Patch component
    pub patch: u32,
    /// Release level (alpha, beta, candidate, final)
    pub level: ReleaseLevel,
    /// Release serial within the level (the `2` of `b2`)
    pub serial: u32,
}

impl Version {
    /// Create a version from all five components
    pub const fn new(major: u32, minor: u32, patch: u32, level: ReleaseLevel, serial: u32) -> Self {
        Version {
            major,
            minor,
            patch,
            level,
            serial,
        }
    }

    /// Create a final release `major.minor.patch`
    pub const fn release(major: u32, minor: u32, patch: u32) -> Self {
        Version::new(major, minor, patch, ReleaseLevel::Final, 0)
    }

    /// The version as a plain tuple
    pub const fn as_tuple(&self) -> (u32, u32, u32, ReleaseLevel, u32) {
        (self.major, self.minor, self.patch, self.level, self.serial)
    }

    /// True if the level is anything but `Final`
    #[inline]
    pub const fn is_prerelease(&self) -> bool {
        self.level.is_prerelease()
    }
}

impl From<(u32, u32, u32, ReleaseLevel, u32)> for Version {
    fn from(t: (u32, u32, u32, ReleaseLevel, u32)) -> Self {
        Version::new(t.0, t.1, t.2, t.3, t.4)
    }
}

impl fmt::Display for Version {
    /// Renders `M.m.p`, plus `-<level><serial>` unless this is a plain final
    /// release. The output parses back to the same version.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if self.level != ReleaseLevel::Final || self.serial != 0 {
            write!(f, "-{}{}", self.level, self.serial)?;
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
