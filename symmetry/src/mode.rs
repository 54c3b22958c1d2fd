//! Symmetry modes: the closed set of transformations a stroke can be drawn with.
//!
//! Modes travel as kebab-case names (`"none"`, `"radial-8"`, ...) in JSON, in
//! config, and across the wasm boundary. Parsing is the only place an unknown
//! mode can appear; once parsed, the enum is closed and the engine has no
//! invalid-mode path.

#[cfg(test)]
#[path = "mode_test.rs"]
mod mode_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SymmetryError;

/// Segment count for radial (rotational) modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RadialSegments {
    Four,
    Six,
    Eight,
    Twelve,
    Sixteen,
}

impl RadialSegments {
    /// All supported segment counts, ascending.
    pub const ALL: [Self; 5] = [Self::Four, Self::Six, Self::Eight, Self::Twelve, Self::Sixteen];

    /// Number of rotated copies, including the original.
    #[must_use]
    pub fn count(self) -> usize {
        match self {
            Self::Four => 4,
            Self::Six => 6,
            Self::Eight => 8,
            Self::Twelve => 12,
            Self::Sixteen => 16,
        }
    }

    /// Look up the variant for a raw segment count.
    #[must_use]
    pub fn from_count(count: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.count() == count)
    }
}

/// How one input point is multiplied into a symmetric orbit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum SymmetryMode {
    /// No symmetry; the orbit is the point itself.
    None,
    /// Mirror across the horizontal center line.
    Horizontal,
    /// Mirror across the vertical center line.
    Vertical,
    /// Point reflection through the center plus the x/y transpose pair.
    Diagonal,
    /// N-fold rotation about the canvas center.
    Radial(RadialSegments),
}

/// The drawing canvas opens in eight-fold radial mode.
impl Default for SymmetryMode {
    fn default() -> Self {
        Self::Radial(RadialSegments::Eight)
    }
}

impl SymmetryMode {
    /// Every mode, in menu order.
    pub const ALL: [Self; 9] = [
        Self::None,
        Self::Horizontal,
        Self::Vertical,
        Self::Diagonal,
        Self::Radial(RadialSegments::Four),
        Self::Radial(RadialSegments::Six),
        Self::Radial(RadialSegments::Eight),
        Self::Radial(RadialSegments::Twelve),
        Self::Radial(RadialSegments::Sixteen),
    ];

    /// Orbit length for a point strictly inside the canvas and off every axis.
    #[must_use]
    pub fn nominal_count(self) -> usize {
        match self {
            Self::None => 1,
            Self::Horizontal | Self::Vertical => 2,
            Self::Diagonal => 4,
            Self::Radial(segments) => segments.count(),
        }
    }

    /// Whether this mode draws any guide lines.
    #[must_use]
    pub fn is_active(self) -> bool {
        self != Self::None
    }

    /// The canonical kebab-case name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
            Self::Diagonal => "diagonal",
            Self::Radial(RadialSegments::Four) => "radial-4",
            Self::Radial(RadialSegments::Six) => "radial-6",
            Self::Radial(RadialSegments::Eight) => "radial-8",
            Self::Radial(RadialSegments::Twelve) => "radial-12",
            Self::Radial(RadialSegments::Sixteen) => "radial-16",
        }
    }
}

impl fmt::Display for SymmetryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SymmetryMode {
    type Err = SymmetryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| SymmetryError::InvalidMode(s.to_owned()))
    }
}

impl TryFrom<String> for SymmetryMode {
    type Error = SymmetryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SymmetryMode> for &'static str {
    fn from(mode: SymmetryMode) -> Self {
        mode.as_str()
    }
}
