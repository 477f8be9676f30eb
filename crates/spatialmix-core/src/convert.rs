//! Conversions between Euler angles and quaternions.
//!
//! Pitch is a rotation about X, yaw about Y and roll about Z. Each order has
//! a closed form obtained by expanding the product of the three single-axis
//! quaternions. Nothing is normalized or clamped: an `asin` argument that
//! drifts outside `[-1, 1]` comes back as NaN, and the Euler angle on the
//! middle axis of the order (pitch for `YawPitchRoll`, yaw for
//! `RollYawPitch`) is gimbal locked at ±90°.

use crate::constants::{HALF_DEG_TO_RAD, RAD_TO_DEG};
use crate::orientation::{EulerOrder, OrientationEuler3D, OrientationQuat3D};

/// Half-angle cosines and sines of an Euler triple.
struct HalfAngles {
    cos_p: f64,
    cos_y: f64,
    cos_r: f64,
    sin_p: f64,
    sin_y: f64,
    sin_r: f64,
}

impl HalfAngles {
    fn new(euler: OrientationEuler3D) -> Self {
        let (sin_p, cos_p) = (euler.pitch_degrees * HALF_DEG_TO_RAD).sin_cos();
        let (sin_y, cos_y) = (euler.yaw_degrees * HALF_DEG_TO_RAD).sin_cos();
        let (sin_r, cos_r) = (euler.roll_degrees * HALF_DEG_TO_RAD).sin_cos();
        Self {
            cos_p,
            cos_y,
            cos_r,
            sin_p,
            sin_y,
            sin_r,
        }
    }
}

/// Convert Euler angles to a quaternion composed in `order`.
#[must_use]
pub fn euler_to_quaternion(euler: OrientationEuler3D, order: EulerOrder) -> OrientationQuat3D {
    match order {
        EulerOrder::YawPitchRoll => yaw_pitch_roll_to_quaternion(euler),
        EulerOrder::RollYawPitch => roll_yaw_pitch_to_quaternion(euler),
    }
}

/// Recover Euler angles from a quaternion, assuming it was composed in `order`.
#[must_use]
pub fn quaternion_to_euler(quat: OrientationQuat3D, order: EulerOrder) -> OrientationEuler3D {
    match order {
        EulerOrder::YawPitchRoll => quaternion_to_yaw_pitch_roll(quat),
        EulerOrder::RollYawPitch => quaternion_to_roll_yaw_pitch(quat),
    }
}

/// `V_world = Yaw * Pitch * Roll * V_local`
#[must_use]
pub fn yaw_pitch_roll_to_quaternion(euler: OrientationEuler3D) -> OrientationQuat3D {
    let HalfAngles {
        cos_p,
        cos_y,
        cos_r,
        sin_p,
        sin_y,
        sin_r,
    } = HalfAngles::new(euler);
    OrientationQuat3D {
        w: cos_p * cos_y * cos_r + sin_p * sin_y * sin_r,
        x: sin_p * cos_y * cos_r + cos_p * sin_y * sin_r,
        y: cos_p * sin_y * cos_r - sin_p * cos_y * sin_r,
        z: cos_p * cos_y * sin_r - sin_p * sin_y * cos_r,
    }
}

/// `V_world = Roll * Yaw * Pitch * V_local`
#[must_use]
pub fn roll_yaw_pitch_to_quaternion(euler: OrientationEuler3D) -> OrientationQuat3D {
    let HalfAngles {
        cos_p,
        cos_y,
        cos_r,
        sin_p,
        sin_y,
        sin_r,
    } = HalfAngles::new(euler);
    OrientationQuat3D {
        w: cos_p * cos_y * cos_r + sin_p * sin_y * sin_r,
        x: sin_p * cos_y * cos_r - cos_p * sin_y * sin_r,
        y: cos_p * sin_y * cos_r + sin_p * cos_y * sin_r,
        z: cos_p * cos_y * sin_r - sin_p * sin_y * cos_r,
    }
}

/// Inverse of [`yaw_pitch_roll_to_quaternion`]. Pitch comes from `asin`.
#[must_use]
pub fn quaternion_to_yaw_pitch_roll(quat: OrientationQuat3D) -> OrientationEuler3D {
    let OrientationQuat3D { w, x, y, z } = quat;
    let pitch = (-2.0 * (y * z - w * x)).asin();
    let yaw = (2.0 * (x * z + w * y)).atan2(w * w - x * x - y * y + z * z);
    let roll = (2.0 * (x * y + w * z)).atan2(w * w - x * x + y * y - z * z);
    OrientationEuler3D::new(pitch * RAD_TO_DEG, yaw * RAD_TO_DEG, roll * RAD_TO_DEG)
}

/// Inverse of [`roll_yaw_pitch_to_quaternion`]. Yaw comes from `asin`.
#[must_use]
pub fn quaternion_to_roll_yaw_pitch(quat: OrientationQuat3D) -> OrientationEuler3D {
    let OrientationQuat3D { w, x, y, z } = quat;
    let yaw = (-2.0 * (x * z - w * y)).asin();
    let pitch = (2.0 * (y * z + w * x)).atan2(w * w - x * x - y * y + z * z);
    let roll = (2.0 * (x * y + w * z)).atan2(w * w + x * x - y * y - z * z);
    OrientationEuler3D::new(pitch * RAD_TO_DEG, yaw * RAD_TO_DEG, roll * RAD_TO_DEG)
}
