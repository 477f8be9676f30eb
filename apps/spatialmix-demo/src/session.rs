//! Simulated client session.
//!
//! The local listener orbits the origin while facing it. Each step produces a
//! fresh snapshot, diffs it against what the server last received and encodes
//! the update. Simulated peers report back through the receive path and are
//! folded into the last-known peer table.

use std::f64::consts::TAU;

use glam::DVec3;
use hashbrown::HashMap;
use spatialmix_audio::{AudioApiData, ReceivedAudioApiData};
use spatialmix_core::{OrientationEuler3D, Point3D};
use tracing::{debug, info, warn};

use crate::config::DemoConfig;

/// Gain used on "loud" steps when the gain toggles.
const BOOSTED_GAIN: f64 = 1.5;

/// Totals for a finished session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Steps simulated.
    pub steps: u32,
    /// Updates that carried at least one field.
    pub updates_sent: u32,
    /// Encoded size of the updates actually sent.
    pub delta_bytes: u64,
    /// Encoded size had every full snapshot been sent instead.
    pub snapshot_bytes: u64,
    /// Distinct peers in the peer table.
    pub peers_tracked: usize,
}

/// Client-side session state.
pub struct Session {
    config: DemoConfig,
    /// What the server has been told so far.
    server_view: AudioApiData,
    /// Last-known peer state by provided user ID.
    peers: HashMap<String, ReceivedAudioApiData>,
}

impl Session {
    /// Create a session that has not sent anything yet.
    pub fn new(config: DemoConfig) -> Self {
        Self {
            config,
            server_view: AudioApiData::new(),
            peers: HashMap::new(),
        }
    }

    /// Local snapshot at the given step.
    pub fn snapshot_at(&self, step: u32) -> AudioApiData {
        let angle = TAU * f64::from(step) / f64::from(self.config.steps.max(1));
        let position = DVec3::new(
            self.config.radius * angle.cos(),
            self.config.height,
            self.config.radius * angle.sin(),
        );
        // Face the origin. Forward is -Z, so yaw = atan2(x, z).
        let yaw = position.x.atan2(position.z).to_degrees();
        let gain = match self.config.gain_every {
            0 => 1.0,
            n if (step / n) % 2 == 1 => BOOSTED_GAIN,
            _ => 1.0,
        };

        AudioApiData::new()
            .with_position(Point3D::from(position))
            .with_euler(OrientationEuler3D::new(0.0, yaw, 0.0), self.config.order)
            .with_gain(gain)
    }

    /// Run every step and return the totals.
    pub fn run(mut self) -> anyhow::Result<SessionSummary> {
        let mut summary = SessionSummary {
            steps: self.config.steps,
            ..SessionSummary::default()
        };

        for step in 0..self.config.steps {
            let snapshot = self.snapshot_at(step);
            summary.snapshot_bytes += bincode::serialized_size(&snapshot)?;

            if let Some(bytes) = self.send(step, &snapshot)? {
                summary.updates_sent += 1;
                summary.delta_bytes += bytes;
            }

            for peer in 0..self.config.peers {
                let update = self.peer_update(peer, step);
                self.receive(update);
            }
        }

        summary.peers_tracked = self.peers.len();
        info!(
            updates = summary.updates_sent,
            delta_bytes = summary.delta_bytes,
            snapshot_bytes = summary.snapshot_bytes,
            peers = summary.peers_tracked,
            "session finished"
        );
        Ok(summary)
    }

    /// Diff against the server's view and encode what changed.
    ///
    /// Returns the encoded size, or `None` if there was nothing to send.
    fn send(&mut self, step: u32, snapshot: &AudioApiData) -> anyhow::Result<Option<u64>> {
        let delta = self.server_view.diff(snapshot);
        if delta.is_empty() {
            debug!(step, "nothing changed, skipping update");
            return Ok(None);
        }

        let encoded = bincode::serialize(&delta)?;
        debug!(
            step,
            bytes = encoded.len(),
            position = delta.position.is_some(),
            orientation = delta.orientation.is_some(),
            gain = ?delta.gain,
            "sending update"
        );
        self.server_view = self.server_view.apply(&delta);
        Ok(Some(encoded.len() as u64))
    }

    /// Update the server would report for a stationary peer.
    ///
    /// Identity fields come with the first update only; later ones carry the
    /// measured volume.
    fn peer_update(&self, peer: u32, step: u32) -> ReceivedAudioApiData {
        let user_id = format!("peer-{peer}");
        if step == 0 {
            let angle = TAU * f64::from(peer) / f64::from(self.config.peers.max(1));
            let position = DVec3::new(3.0 * angle.cos(), self.config.height, 3.0 * angle.sin());
            return ReceivedAudioApiData::new(
                AudioApiData::new()
                    .with_position(Point3D::from(position))
                    .with_euler(OrientationEuler3D::default(), self.config.order)
                    .with_gain(1.0),
            )
            .with_provided_user_id(user_id)
            .with_hashed_visit_id(format!("{:08x}", peer.wrapping_mul(0x9e37_79b9)))
            .with_is_stereo(peer % 2 == 0);
        }

        let volume_decibels = -60.0 + f64::from((step * 7 + peer * 13) % 50);
        ReceivedAudioApiData::new(AudioApiData::new())
            .with_provided_user_id(user_id)
            .with_volume_decibels(volume_decibels)
    }

    /// Fold a peer update into the peer table.
    fn receive(&mut self, update: ReceivedAudioApiData) {
        let Some(user_id) = update.provided_user_id().map(str::to_owned) else {
            warn!("peer update without a user ID, dropping");
            return;
        };

        if let Some(known) = self.peers.get_mut(&user_id) {
            *known = known.merge_update(&update);
        } else {
            if let Some(orientation) = update.orientation {
                let facing = orientation.to_euler(self.config.order);
                debug!(
                    user_id = %user_id,
                    yaw = facing.yaw_degrees,
                    stereo = ?update.is_stereo(),
                    "new peer"
                );
            }
            self.peers.insert(user_id, update);
        }
    }
}
