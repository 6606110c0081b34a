//! Wire protocol version definitions.
//!
//! This module provides the [`ProtocolVersion`] enum for selecting which of
//! the coexisting wire protocol shapes the client speaks.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Auditable item graph wire protocol version.
///
/// Three incompatible wire shapes of the graph service exist side by side.
/// They differ in how vertex metadata is represented, how verification
/// results are enveloped, and which media type is negotiated:
///
/// - [`V1`](Self::V1): metadata as a typed property list, flat verification
///   list, plain JSON.
/// - [`V2`](Self::V2): opaque annotation objects, flat verification list,
///   plain JSON.
/// - [`V3`](Self::V3): opaque annotation objects, verification nested per
///   changeset, linked-data media type.
///
/// # Example
///
/// ```rust
/// use auditable_graph::ProtocolVersion;
///
/// // Use the latest version
/// let version = ProtocolVersion::latest();
/// assert!(version.is_latest());
///
/// // Parse from string
/// let version: ProtocolVersion = "v2".parse().unwrap();
/// assert_eq!(version, ProtocolVersion::V2);
///
/// // Display as string
/// assert_eq!(format!("{}", ProtocolVersion::V3), "v3");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProtocolVersion {
    /// Protocol version 1: typed property-list metadata.
    V1,
    /// Protocol version 2: opaque annotation objects.
    V2,
    /// Protocol version 3: linked-data representation.
    V3,
}

impl ProtocolVersion {
    /// Returns the latest protocol version.
    ///
    /// This should be updated when a new wire shape is introduced.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V3
    }

    /// Returns `true` if this is the latest protocol version.
    #[must_use]
    pub fn is_latest(self) -> bool {
        self == Self::latest()
    }

    /// Returns all supported protocol versions in chronological order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use auditable_graph::ProtocolVersion;
    ///
    /// let versions = ProtocolVersion::supported_versions();
    /// assert!(!versions.is_empty());
    /// assert!(versions.contains(&ProtocolVersion::latest()));
    /// ```
    #[must_use]
    pub fn supported_versions() -> Vec<Self> {
        vec![Self::V1, Self::V2, Self::V3]
    }

    /// Returns a numeric ordering value for version comparison.
    ///
    /// This is used internally for implementing `Ord`.
    const fn ordinal(self) -> u32 {
        match self {
            Self::V1 => 1,
            Self::V2 => 2,
            Self::V3 => 3,
        }
    }
}

impl PartialOrd for ProtocolVersion {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ProtocolVersion {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.ordinal().cmp(&other.ordinal())
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let version_str = match self {
            Self::V1 => "v1",
            Self::V2 => "v2",
            Self::V3 => "v3",
        };
        f.write_str(version_str)
    }
}

impl FromStr for ProtocolVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();

        match s.as_str() {
            "v1" | "1" => Ok(Self::V1),
            "v2" | "2" => Ok(Self::V2),
            "v3" | "3" => Ok(Self::V3),
            _ => Err(ConfigError::InvalidProtocolVersion { version: s }),
        }
    }
}
