#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::{Deserialize, Serialize};

use crate::error::SymmetryError;

/// A point in canvas pixel space (origin top-left, y down).
///
/// `pressure` is an opaque payload from the pointer device. The engine copies
/// it onto every transformed point and never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure: Option<f64>,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, pressure: None }
    }

    #[must_use]
    pub fn with_pressure(x: f64, y: f64, pressure: f64) -> Self {
        Self { x, y, pressure: Some(pressure) }
    }

    /// Same payload, new coordinates.
    #[must_use]
    pub fn moved_to(self, x: f64, y: f64) -> Self {
        Self { x, y, pressure: self.pressure }
    }

    /// Euclidean distance to `other`, ignoring pressure.
    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Canvas extents. Defines the reflection axes and the rotation center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasBounds {
    pub width: f64,
    pub height: f64,
}

impl CanvasBounds {
    /// Build validated bounds.
    ///
    /// # Errors
    ///
    /// Returns [`SymmetryError::InvalidBounds`] when either extent is
    /// non-finite or not strictly positive.
    pub fn new(width: f64, height: f64) -> Result<Self, SymmetryError> {
        let bounds = Self { width, height };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Check the extents of bounds built by struct literal or deserialization.
    ///
    /// # Errors
    ///
    /// Returns [`SymmetryError::InvalidBounds`] when either extent is
    /// non-finite or not strictly positive.
    pub fn validate(&self) -> Result<(), SymmetryError> {
        let ok = |v: f64| v.is_finite() && v > 0.0;
        if ok(self.width) && ok(self.height) {
            Ok(())
        } else {
            Err(SymmetryError::InvalidBounds { width: self.width, height: self.height })
        }
    }

    /// Rotation center `(width / 2, height / 2)`.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Whether `p` lies inside the closed rectangle `[0, width] x [0, height]`.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }
}

/// A reference segment drawn to show an active symmetry axis.
///
/// Visual only; never used for hit-testing or storage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GuideLine {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl GuideLine {
    #[must_use]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    #[must_use]
    pub fn start(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    #[must_use]
    pub fn end(&self) -> Point {
        Point::new(self.x2, self.y2)
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.start().distance_to(self.end())
    }
}
