//! Core position and orientation types for spatial audio mixing.
//!
//! This crate provides the value types a client exchanges with a spatial
//! audio mixer:
//! - Positions in meters with independently optional components
//! - Orientations as quaternions (wire form) and Euler angles (API edge)
//! - Conversions between the two orientation forms
//! - Common error types

pub mod convert;
pub mod coords;
pub mod error;
pub mod orientation;

pub use convert::{euler_to_quaternion, quaternion_to_euler};
pub use coords::Point3D;
pub use error::{Error, Result};
pub use orientation::{EulerOrder, OrientationEuler3D, OrientationQuat3D};

/// Shared numeric constants
pub mod constants {
    /// Degrees to radians, halved (quaternions use half angles)
    pub const HALF_DEG_TO_RAD: f64 = 0.5 * std::f64::consts::PI / 180.0;
    /// Radians to degrees
    pub const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;
}
