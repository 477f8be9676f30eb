//! Per-user spatial audio state for a mixing server.
//!
//! This crate provides the data a client exchanges with the mixer:
//! - [`AudioApiData`]: position, orientation, gain and volume threshold
//! - [`AudioApiData::diff`]: the minimal update between two snapshots
//! - [`ReceivedAudioApiData`]: peer state with server-assigned fields
//!
//! # Example
//!
//! ```
//! use spatialmix_audio::AudioApiData;
//! use spatialmix_core::{EulerOrder, OrientationEuler3D, Point3D};
//!
//! let previous = AudioApiData::new()
//!     .with_position(Point3D::new(1.0, 2.0, 3.0))
//!     .with_gain(1.0);
//! let current = previous
//!     .with_position(Point3D::new(1.0, 2.0, 9.0))
//!     .with_euler(OrientationEuler3D::new(0.0, 45.0, 0.0), EulerOrder::YawPitchRoll);
//!
//! let update = previous.diff(&current);
//! assert_eq!(update.position, Some(Point3D::new(1.0, 2.0, 9.0)));
//! assert!(update.orientation.is_some());
//! assert_eq!(update.gain, None);
//! ```

mod data;
mod diff;
mod received;

pub use data::AudioApiData;
pub use received::ReceivedAudioApiData;

// Re-export commonly used types for convenience
pub use spatialmix_core::{EulerOrder, OrientationEuler3D, OrientationQuat3D, Point3D};
