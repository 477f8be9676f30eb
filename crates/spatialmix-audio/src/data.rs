//! Per-user audio state sent to the mixer.

use serde::{Deserialize, Serialize};
use spatialmix_core::{EulerOrder, OrientationEuler3D, OrientationQuat3D, Point3D};

/// One snapshot of a user's spatial audio state.
///
/// A `None` field is "not set": when sent as an update it means no change is
/// intended for that field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioApiData {
    /// Position in meters.
    pub position: Option<Point3D>,
    /// Orientation, always in quaternion form.
    pub orientation: Option<OrientationQuat3D>,
    /// Unitless gain multiplier. Not range checked.
    pub gain: Option<f64>,
    /// Input level in dB below which the user is treated as silent.
    pub volume_threshold: Option<f64>,
}

impl AudioApiData {
    /// Create an empty snapshot
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the position.
    #[must_use]
    pub const fn with_position(mut self, position: Point3D) -> Self {
        self.position = Some(position);
        self
    }

    /// Set the orientation.
    #[must_use]
    pub const fn with_orientation(mut self, orientation: OrientationQuat3D) -> Self {
        self.orientation = Some(orientation);
        self
    }

    /// Set the orientation from Euler angles composed in `order`.
    #[must_use]
    pub fn with_euler(self, euler: OrientationEuler3D, order: EulerOrder) -> Self {
        self.with_orientation(OrientationQuat3D::from_euler(euler, order))
    }

    /// Set the gain.
    #[must_use]
    pub const fn with_gain(mut self, gain: f64) -> Self {
        self.gain = Some(gain);
        self
    }

    /// Set the volume threshold in dB.
    #[must_use]
    pub const fn with_volume_threshold(mut self, volume_threshold: f64) -> Self {
        self.volume_threshold = Some(volume_threshold);
        self
    }

    /// Returns true if no field is set
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.position.is_none()
            && self.orientation.is_none()
            && self.gain.is_none()
            && self.volume_threshold.is_none()
    }

    /// Apply an update on top of this snapshot.
    ///
    /// Every field set in `delta` replaces ours; unset fields keep our value.
    /// Applying `self.diff(&other)` brings `self` up to `other`.
    #[must_use]
    pub fn apply(&self, delta: &Self) -> Self {
        Self {
            position: delta.position.or(self.position),
            orientation: delta.orientation.or(self.orientation),
            gain: delta.gain.or(self.gain),
            volume_threshold: delta.volume_threshold.or(self.volume_threshold),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_all_unset() {
        let data = AudioApiData::new();
        assert!(data.is_empty());
        assert_eq!(data.position, None);
        assert_eq!(data.orientation, None);
        assert_eq!(data.gain, None);
        assert_eq!(data.volume_threshold, None);
    }

    #[test]
    fn zero_gain_is_not_unset() {
        let data = AudioApiData::new().with_gain(0.0);
        assert!(!data.is_empty());
        assert_eq!(data.gain, Some(0.0));
    }

    #[test]
    fn with_euler_converts_to_quaternion() {
        let euler = OrientationEuler3D::new(0.0, 0.0, 0.0);
        let data = AudioApiData::new().with_euler(euler, EulerOrder::RollYawPitch);
        assert_eq!(data.orientation, Some(OrientationQuat3D::IDENTITY));
    }

    #[test]
    fn apply_overwrites_only_set_fields() {
        let base = AudioApiData::new()
            .with_position(Point3D::new(1.0, 2.0, 3.0))
            .with_gain(0.5)
            .with_volume_threshold(-40.0);
        let delta = AudioApiData::new().with_gain(2.0);

        let applied = base.apply(&delta);
        assert_eq!(applied.position, base.position);
        assert_eq!(applied.gain, Some(2.0));
        assert_eq!(applied.volume_threshold, Some(-40.0));
        assert_eq!(applied.orientation, None);
    }

    #[test]
    fn apply_empty_delta_is_noop() {
        let base = AudioApiData::new()
            .with_orientation(OrientationQuat3D::new(0.0, 1.0, 0.0, 0.0))
            .with_gain(1.5);
        assert_eq!(base.apply(&AudioApiData::new()), base);
    }
}
