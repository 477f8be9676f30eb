//! Positions in listener space.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Position in meters.
///
/// Every component is independently optional. `None` means the component was
/// not supplied, which is not the same as zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point3D {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
}

impl Point3D {
    /// Create a position with all three components set
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            z: Some(z),
        }
    }

    /// Create a position from optional components
    #[inline]
    #[must_use]
    pub const fn from_parts(x: Option<f64>, y: Option<f64>, z: Option<f64>) -> Self {
        Self { x, y, z }
    }

    /// Returns true if no component is set
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none() && self.z.is_none()
    }

    /// Convert to glam DVec3, if every component is set
    #[inline]
    #[must_use]
    pub fn to_dvec3(self) -> Option<DVec3> {
        Some(DVec3::new(self.x?, self.y?, self.z?))
    }
}

impl From<DVec3> for Point3D {
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}
