//! Contract types shared by every crate
//!
//! ## Module Structure
//!
//! - `release_level`: maturity stage of a release (alpha, beta, candidate, final)
//! - `version`: the five-part release version
//!
//! ## Usage
//!
//! ```
//! use portalkit_core::contract::{ReleaseLevel, Version};
//!
//! let v = Version::new(2, 1, 3, ReleaseLevel::Beta, 2);
//! assert_eq!(v.to_string(), "2.1.3-beta2");
//! ```

pub mod release_level;
pub mod version;

// Re-exports
pub use release_level::ReleaseLevel;
pub use version::Version;
