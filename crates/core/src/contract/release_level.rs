//! Release level of a version
//!
//! A release level classifies how mature a release is. The levels are totally
//! ordered: `Alpha < Beta < Candidate < Final`.
//!
//! ## Tags
//!
//! Version strings spell levels either in full (`alpha`, `beta`, `candidate`,
//! `final`) or abbreviated (`a`, `b`, `rc`). Both forms are accepted by
//! [`ReleaseLevel::from_tag`]; [`ReleaseLevel::as_str`] always yields the full
//! name.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maturity stage of a release
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseLevel {
    /// Early preview (`alpha`, `a`)
    Alpha,
    /// Feature complete preview (`beta`, `b`)
    Beta,
    /// Release candidate (`candidate`, `rc`)
    Candidate,
    /// Final release (`final`, or no tag at all)
    #[default]
    Final,
}

impl ReleaseLevel {
    /// All levels in ascending order
    pub const ALL: [ReleaseLevel; 4] = [
        ReleaseLevel::Alpha,
        ReleaseLevel::Beta,
        ReleaseLevel::Candidate,
        ReleaseLevel::Final,
    ];

    /// Parse a full or abbreviated level tag
    ///
    /// Returns `None` for anything that is not one of
    /// `alpha|beta|candidate|final|a|b|rc`. Tags are matched exactly; callers
    /// lower-case first if they need to.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "alpha" | "a" => Some(ReleaseLevel::Alpha),
            "beta" | "b" => Some(ReleaseLevel::Beta),
            "candidate" | "rc" => Some(ReleaseLevel::Candidate),
            "final" => Some(ReleaseLevel::Final),
            _ => None,
        }
    }

    /// Full lower-case name of the level
    pub const fn as_str(&self) -> &'static str {
        match self {
            ReleaseLevel::Alpha => "alpha",
            ReleaseLevel::Beta => "beta",
            ReleaseLevel::Candidate => "candidate",
            ReleaseLevel::Final => "final",
        }
    }

    /// True for every level except `Final`
    #[inline]
    pub const fn is_prerelease(&self) -> bool {
        !matches!(self, ReleaseLevel::Final)
    }
}

impl fmt::Display for ReleaseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
