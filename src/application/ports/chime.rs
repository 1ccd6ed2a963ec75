//! Chime port for audible alerts
//!
//! Plays a sound before the desktop notification is shown.

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during chime playback
#[derive(Error, Debug)]
pub enum ChimeError {
    /// Failed to play the sound
    #[error("Playback failed: {0}")]
    PlaybackFailed(String),

    /// No audio output device available
    #[error("Audio device not available: {0}")]
    DeviceNotAvailable(String),
}

/// Port trait for chime playback
#[async_trait]
pub trait Chime: Send + Sync {
    /// Play the configured sound file, or the default chime when `None`
    async fn play(&self, sound_file: Option<&Path>) -> Result<(), ChimeError>;
}

/// Blanket implementation for boxed chime types
#[async_trait]
impl Chime for Box<dyn Chime> {
    async fn play(&self, sound_file: Option<&Path>) -> Result<(), ChimeError> {
        self.as_ref().play(sound_file).await
    }
}
