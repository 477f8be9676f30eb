//! Orientation types.
//!
//! Quaternions are what travels on the wire. Euler angles are offered at the
//! API edge, tagged with the order their rotations compose in.

use std::fmt;
use std::str::FromStr;

use glam::DQuat;
use serde::{Deserialize, Serialize};

use crate::convert::{euler_to_quaternion, quaternion_to_euler};
use crate::error::{Error, Result};

/// Orientation as a quaternion.
///
/// Should be unit length, but nothing enforces it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrientationQuat3D {
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl OrientationQuat3D {
    /// No rotation
    pub const IDENTITY: Self = Self {
        w: 1.0,
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Create a quaternion from its components
    #[inline]
    #[must_use]
    pub const fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    /// Build from Euler angles composed in the given order
    #[inline]
    #[must_use]
    pub fn from_euler(euler: OrientationEuler3D, order: EulerOrder) -> Self {
        euler_to_quaternion(euler, order)
    }

    /// Recover Euler angles for the given order
    #[inline]
    #[must_use]
    pub fn to_euler(self, order: EulerOrder) -> OrientationEuler3D {
        quaternion_to_euler(self, order)
    }

    /// Euclidean length of the four components
    #[inline]
    #[must_use]
    pub fn norm(&self) -> f64 {
        (self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

impl Default for OrientationQuat3D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<DQuat> for OrientationQuat3D {
    fn from(q: DQuat) -> Self {
        Self::new(q.w, q.x, q.y, q.z)
    }
}

impl From<OrientationQuat3D> for DQuat {
    fn from(q: OrientationQuat3D) -> Self {
        Self::from_xyzw(q.x, q.y, q.z, q.w)
    }
}

/// Orientation as Euler angles in degrees.
///
/// Pitch turns about X, yaw about Y, roll about Z. Any range is accepted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrientationEuler3D {
    pub pitch_degrees: f64,
    pub yaw_degrees: f64,
    pub roll_degrees: f64,
}

impl OrientationEuler3D {
    /// Create from pitch, yaw and roll in degrees
    #[inline]
    #[must_use]
    pub const fn new(pitch_degrees: f64, yaw_degrees: f64, roll_degrees: f64) -> Self {
        Self {
            pitch_degrees,
            yaw_degrees,
            roll_degrees,
        }
    }
}

/// Order in which the three single-axis rotations compose.
///
/// Read left to right as world-space application order, e.g. `YawPitchRoll`
/// means `V_world = Yaw * Pitch * Roll * V_local`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EulerOrder {
    /// `V_world = Yaw * Pitch * Roll * V_local`
    #[default]
    YawPitchRoll,
    /// `V_world = Roll * Yaw * Pitch * V_local`
    RollYawPitch,
}

impl EulerOrder {
    /// All supported orders
    pub const ALL: [Self; 2] = [Self::YawPitchRoll, Self::RollYawPitch];

    /// Canonical name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::YawPitchRoll => "YawPitchRoll",
            Self::RollYawPitch => "RollYawPitch",
        }
    }
}

impl fmt::Display for EulerOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EulerOrder {
    type Err = Error;

    /// Accepts the canonical name in any case, with or without `-`/`_`
    /// separators (`yaw-pitch-roll`, `ROLL_YAW_PITCH`), or the initials.
    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "yawpitchroll" | "ypr" => Ok(Self::YawPitchRoll),
            "rollyawpitch" | "ryp" => Ok(Self::RollYawPitch),
            _ => Err(Error::UnknownEulerOrder(s.to_string())),
        }
    }
}
