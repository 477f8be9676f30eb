//! Peer state as reported back by the mixer.

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::data::AudioApiData;

/// Audio state of a peer, plus fields only the server assigns.
///
/// The embedded [`AudioApiData`] is reachable through `Deref`. Server fields
/// are read through accessors and are only ever set by the receive path.
/// Serialized flat: the base fields sit beside the server fields.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceivedAudioApiData {
    #[serde(flatten)]
    data: AudioApiData,
    provided_user_id: Option<String>,
    hashed_visit_id: Option<String>,
    volume_decibels: Option<f64>,
    is_stereo: Option<bool>,
}

impl ReceivedAudioApiData {
    /// Wrap base audio data with no server fields set.
    #[must_use]
    pub const fn new(data: AudioApiData) -> Self {
        Self {
            data,
            provided_user_id: None,
            hashed_visit_id: None,
            volume_decibels: None,
            is_stereo: None,
        }
    }

    /// Set the user ID the peer supplied when connecting.
    #[must_use]
    pub fn with_provided_user_id(mut self, id: impl Into<String>) -> Self {
        self.provided_user_id = Some(id.into());
        self
    }

    /// Set the hashed visit (session) ID.
    #[must_use]
    pub fn with_hashed_visit_id(mut self, id: impl Into<String>) -> Self {
        self.hashed_visit_id = Some(id.into());
        self
    }

    /// Set the measured volume in dB.
    #[must_use]
    pub fn with_volume_decibels(mut self, volume_decibels: f64) -> Self {
        self.volume_decibels = Some(volume_decibels);
        self
    }

    /// Set whether the peer's input is stereo.
    #[must_use]
    pub fn with_is_stereo(mut self, is_stereo: bool) -> Self {
        self.is_stereo = Some(is_stereo);
        self
    }

    /// The embedded audio data.
    #[must_use]
    pub const fn data(&self) -> &AudioApiData {
        &self.data
    }

    /// Unwrap into the embedded audio data.
    #[must_use]
    pub fn into_data(self) -> AudioApiData {
        self.data
    }

    /// User ID the peer supplied when connecting.
    #[must_use]
    pub fn provided_user_id(&self) -> Option<&str> {
        self.provided_user_id.as_deref()
    }

    /// Hashed visit (session) ID.
    #[must_use]
    pub fn hashed_visit_id(&self) -> Option<&str> {
        self.hashed_visit_id.as_deref()
    }

    /// Measured volume in dB.
    #[must_use]
    pub const fn volume_decibels(&self) -> Option<f64> {
        self.volume_decibels
    }

    /// Whether the peer's input is stereo.
    #[must_use]
    pub const fn is_stereo(&self) -> Option<bool> {
        self.is_stereo
    }

    /// Fold a newer update for the same peer into this state.
    ///
    /// Fields set in `update` win; everything else is kept.
    #[must_use]
    pub fn merge_update(&self, update: &Self) -> Self {
        Self {
            data: self.data.apply(&update.data),
            provided_user_id: update
                .provided_user_id
                .clone()
                .or_else(|| self.provided_user_id.clone()),
            hashed_visit_id: update
                .hashed_visit_id
                .clone()
                .or_else(|| self.hashed_visit_id.clone()),
            volume_decibels: update.volume_decibels.or(self.volume_decibels),
            is_stereo: update.is_stereo.or(self.is_stereo),
        }
    }
}

impl Deref for ReceivedAudioApiData {
    type Target = AudioApiData;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl From<AudioApiData> for ReceivedAudioApiData {
    fn from(data: AudioApiData) -> Self {
        Self::new(data)
    }
}
