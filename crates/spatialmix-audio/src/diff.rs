//! Minimal updates between two snapshots of a user's audio state.
//!
//! The diff runs in two stages. The first compares every leaf (`position.x`,
//! `orientation.w`, `gain`, ...) with exact `==` and records how it changed.
//! The second turns those leaf changes back into whole fields, because the
//! mixer only accepts complete positions and complete quaternions:
//!
//! - any changed position leaf sends the new position as a whole;
//! - any changed orientation leaf sends a full quaternion, taking unchanged
//!   leaves from the current snapshot;
//! - gain and volume threshold are sent only when they have a new value.
//!
//! Leaves compare with exact `==` and no epsilon: a one-ULP difference is a
//! change.

use spatialmix_core::{OrientationQuat3D, Point3D};
use tracing::{debug, trace};

use crate::data::AudioApiData;

/// How a single leaf moved between two snapshots.
#[derive(Clone, Copy, Debug, PartialEq)]
enum LeafChange<T> {
    /// Same value on both sides, or absent on both.
    Unchanged,
    /// New value from the other snapshot.
    Set(T),
    /// Present in the current snapshot, absent in the other.
    Cleared,
}

impl<T: Copy + PartialEq> LeafChange<T> {
    fn between(current: Option<T>, other: Option<T>) -> Self {
        match (current, other) {
            (Some(c), Some(o)) if c == o => Self::Unchanged,
            (_, Some(o)) => Self::Set(o),
            (Some(_), None) => Self::Cleared,
            (None, None) => Self::Unchanged,
        }
    }

    const fn is_changed(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }

    fn new_value(self) -> Option<T> {
        match self {
            Self::Set(v) => Some(v),
            Self::Unchanged | Self::Cleared => None,
        }
    }

    fn new_value_or(self, fallback: T) -> T {
        self.new_value().unwrap_or(fallback)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct PointChange {
    x: LeafChange<f64>,
    y: LeafChange<f64>,
    z: LeafChange<f64>,
}

impl PointChange {
    fn between(current: Option<Point3D>, other: Option<Point3D>) -> Self {
        let leaf = |f: fn(&Point3D) -> Option<f64>| {
            LeafChange::between(current.as_ref().and_then(f), other.as_ref().and_then(f))
        };
        Self {
            x: leaf(|p| p.x),
            y: leaf(|p| p.y),
            z: leaf(|p| p.z),
        }
    }

    const fn is_changed(&self) -> bool {
        self.x.is_changed() || self.y.is_changed() || self.z.is_changed()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct QuatChange {
    w: LeafChange<f64>,
    x: LeafChange<f64>,
    y: LeafChange<f64>,
    z: LeafChange<f64>,
}

impl QuatChange {
    fn between(current: Option<OrientationQuat3D>, other: Option<OrientationQuat3D>) -> Self {
        let leaf = |f: fn(&OrientationQuat3D) -> f64| {
            LeafChange::between(current.as_ref().map(f), other.as_ref().map(f))
        };
        Self {
            w: leaf(|q| q.w),
            x: leaf(|q| q.x),
            y: leaf(|q| q.y),
            z: leaf(|q| q.z),
        }
    }

    const fn is_changed(&self) -> bool {
        self.w.is_changed() || self.x.is_changed() || self.y.is_changed() || self.z.is_changed()
    }

    const fn is_cleared(&self) -> bool {
        matches!(self.w, LeafChange::Cleared)
    }

    /// A complete quaternion: new leaves where set, `fallback` elsewhere.
    fn complete(self, fallback: OrientationQuat3D) -> OrientationQuat3D {
        OrientationQuat3D {
            w: self.w.new_value_or(fallback.w),
            x: self.x.new_value_or(fallback.x),
            y: self.y.new_value_or(fallback.y),
            z: self.z.new_value_or(fallback.z),
        }
    }
}

/// Leaf-level changes between two snapshots.
#[derive(Clone, Copy, Debug, PartialEq)]
struct LeafDiff {
    position: PointChange,
    orientation: QuatChange,
    gain: LeafChange<f64>,
    volume_threshold: LeafChange<f64>,
}

impl LeafDiff {
    fn between(current: &AudioApiData, other: &AudioApiData) -> Self {
        Self {
            position: PointChange::between(current.position, other.position),
            orientation: QuatChange::between(current.orientation, other.orientation),
            gain: LeafChange::between(current.gain, other.gain),
            volume_threshold: LeafChange::between(current.volume_threshold, other.volume_threshold),
        }
    }
}

impl AudioApiData {
    /// Compute the update that takes `self` (the current snapshot) to `other`.
    ///
    /// Each field of the result is either `None` (nothing to send) or a
    /// complete value ready for the mixer. Partial positions and partial
    /// quaternions are never produced:
    ///
    /// - `position` is `other.position` whenever any coordinate differs,
    /// - `orientation` is a full quaternion whenever any component differs,
    ///   with unchanged components taken from `self`. If `other` dropped its
    ///   orientation entirely, that means `self`'s orientation is sent again,
    /// - `gain` and `volume_threshold` are `other`'s value when it is set and
    ///   differs from ours.
    #[must_use]
    pub fn diff(&self, other: &Self) -> Self {
        let leaves = LeafDiff::between(self, other);

        let position = if leaves.position.is_changed() {
            other.position
        } else {
            None
        };

        let orientation = if leaves.orientation.is_changed() {
            if leaves.orientation.is_cleared() {
                debug!("orientation cleared in new snapshot, resending current orientation");
            }
            Some(leaves.orientation.complete(self.orientation.unwrap_or_default()))
        } else {
            None
        };

        let delta = Self {
            position,
            orientation,
            gain: leaves.gain.new_value(),
            volume_threshold: leaves.volume_threshold.new_value(),
        };

        trace!(
            position = delta.position.is_some(),
            orientation = delta.orientation.is_some(),
            gain = delta.gain.is_some(),
            volume_threshold = delta.volume_threshold.is_some(),
            "computed audio data diff"
        );

        delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use spatialmix_core::{EulerOrder, OrientationEuler3D};

    fn snapshot() -> AudioApiData {
        AudioApiData::new()
            .with_position(Point3D::new(1.0, 2.0, 3.0))
            .with_orientation(OrientationQuat3D::new(0.5, 0.5, 0.5, 0.5))
            .with_gain(1.0)
            .with_volume_threshold(-40.0)
    }

    #[test]
    fn leaf_change_classification() {
        assert_eq!(LeafChange::between(Some(1.0), Some(1.0)), LeafChange::Unchanged);
        assert_eq!(LeafChange::<f64>::between(None, None), LeafChange::Unchanged);
        assert_eq!(LeafChange::between(Some(1.0), Some(2.0)), LeafChange::Set(2.0));
        assert_eq!(LeafChange::between(None, Some(2.0)), LeafChange::Set(2.0));
        assert_eq!(LeafChange::between(Some(1.0), None), LeafChange::Cleared);
    }

    #[test]
    fn identical_snapshots_diff_to_nothing() {
        let a = snapshot();
        let delta = a.diff(&a);
        assert!(delta.is_empty());
        assert_eq!(delta, AudioApiData::default());
    }

    #[test]
    fn empty_snapshots_diff_to_nothing() {
        assert!(AudioApiData::new().diff(&AudioApiData::new()).is_empty());
    }

    #[test]
    fn partial_position_change_sends_whole_position() {
        let current = AudioApiData::new().with_position(Point3D::new(1.0, 2.0, 3.0));
        let other = AudioApiData::new().with_position(Point3D::new(1.0, 2.0, 9.0));

        let delta = current.diff(&other);
        assert_eq!(delta.position, Some(Point3D::new(1.0, 2.0, 9.0)));
        assert_eq!(delta.orientation, None);
        assert_eq!(delta.gain, None);
    }

    #[test]
    fn position_with_unset_coordinate_is_sent_as_is() {
        let current = AudioApiData::new().with_position(Point3D::new(1.0, 2.0, 3.0));
        let other =
            AudioApiData::new().with_position(Point3D::from_parts(Some(1.0), Some(2.0), None));

        let delta = current.diff(&other);
        assert_eq!(delta.position, other.position);
    }

    #[test]
    fn dropped_position_is_not_resent() {
        let current = AudioApiData::new().with_position(Point3D::new(1.0, 2.0, 3.0));
        let delta = current.diff(&AudioApiData::new());
        assert_eq!(delta.position, None);
    }

    #[test]
    fn unset_coordinates_on_both_sides_are_unchanged() {
        let current = AudioApiData::new();
        let other = AudioApiData::new().with_position(Point3D::default());
        assert_eq!(current.diff(&other).position, None);
    }

    #[test]
    fn orientation_change_sends_full_quaternion() {
        let current = snapshot();
        let mut other = current;
        other.orientation = Some(OrientationQuat3D::new(0.5, -0.5, 0.5, 0.5));

        let delta = current.diff(&other);
        assert_eq!(delta.orientation, Some(OrientationQuat3D::new(0.5, -0.5, 0.5, 0.5)));
        assert_eq!(delta.position, None);
        assert_eq!(delta.gain, None);
    }

    #[test]
    fn new_orientation_is_sent_whole() {
        let current = AudioApiData::new();
        let q = OrientationQuat3D::from_euler(
            OrientationEuler3D::new(10.0, 20.0, 30.0),
            EulerOrder::YawPitchRoll,
        );
        let delta = current.diff(&AudioApiData::new().with_orientation(q));
        assert_eq!(delta.orientation, Some(q));
    }

    #[test]
    fn cleared_orientation_falls_back_to_current() {
        let current =
            AudioApiData::new().with_orientation(OrientationQuat3D::new(0.0, 0.0, 1.0, 0.0));
        let delta = current.diff(&AudioApiData::new());
        assert_eq!(delta.orientation, Some(OrientationQuat3D::new(0.0, 0.0, 1.0, 0.0)));
    }

    #[test]
    fn gain_sent_only_when_new_value_differs() {
        let current = AudioApiData::new().with_gain(1.0);
        assert_eq!(current.diff(&AudioApiData::new().with_gain(1.0)).gain, None);
        assert_eq!(current.diff(&AudioApiData::new().with_gain(0.25)).gain, Some(0.25));
        assert_eq!(AudioApiData::new().diff(&current).gain, Some(1.0));
        // A dropped gain has no value to send.
        assert_eq!(current.diff(&AudioApiData::new()).gain, None);
    }

    #[test]
    fn volume_threshold_follows_gain_rules() {
        let current = AudioApiData::new().with_volume_threshold(-40.0);
        assert_eq!(current.diff(&current).volume_threshold, None);
        let other = AudioApiData::new().with_volume_threshold(-30.0);
        assert_eq!(current.diff(&other).volume_threshold, Some(-30.0));
        assert_eq!(current.diff(&AudioApiData::new()).volume_threshold, None);
    }

    #[test]
    fn no_epsilon_tolerance() {
        let current = AudioApiData::new()
            .with_position(Point3D::new(1.0, 2.0, 3.0))
            .with_gain(1.0);
        let other = AudioApiData::new()
            .with_position(Point3D::new(1.0, 2.0, 3.0 + 1e-12))
            .with_gain(1.0 + f64::EPSILON);

        let delta = current.diff(&other);
        assert_eq!(delta.position, other.position);
        assert_eq!(delta.gain, Some(1.0 + f64::EPSILON));
    }

    #[test]
    fn nan_is_always_a_change() {
        let current = AudioApiData::new().with_gain(f64::NAN);
        let delta = current.diff(&current);
        assert!(delta.gain.is_some_and(f64::is_nan));
    }

    #[test]
    fn diff_leaves_inputs_untouched() {
        let current = snapshot();
        let other = AudioApiData::new().with_gain(3.0);
        let (before_current, before_other) = (current, other);
        let _ = current.diff(&other);
        assert_eq!(current, before_current);
        assert_eq!(other, before_other);
    }

    #[test]
    fn applying_diff_reaches_other() {
        let current = snapshot();
        let others = [
            snapshot().with_gain(0.0),
            snapshot().with_position(Point3D::new(-1.0, 0.0, 7.5)),
            snapshot().with_euler(
                OrientationEuler3D::new(5.0, -60.0, 12.0),
                EulerOrder::RollYawPitch,
            ),
            AudioApiData::new()
                .with_position(Point3D::new(0.0, 0.0, 0.0))
                .with_orientation(OrientationQuat3D::IDENTITY)
                .with_gain(2.0)
                .with_volume_threshold(-10.0),
        ];
        for other in others {
            assert_eq!(current.apply(&current.diff(&other)), other);
        }

        // The turned snapshot still reads back as the angles it was built from.
        let turned = current.apply(&current.diff(&others[2]));
        let facing = turned
            .orientation
            .unwrap()
            .to_euler(EulerOrder::RollYawPitch);
        assert_abs_diff_eq!(facing.pitch_degrees, 5.0, epsilon = 1e-9);
        assert_abs_diff_eq!(facing.yaw_degrees, -60.0, epsilon = 1e-9);
        assert_abs_diff_eq!(facing.roll_degrees, 12.0, epsilon = 1e-9);
    }
}
