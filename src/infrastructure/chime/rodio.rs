//! Rodio-based chime adapter
//!
//! Plays the configured sound file, ringing the bell when there is none
//! or playback fails.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use async_trait::async_trait;
use rodio::{Decoder, OutputStream, Sink};
use tracing::debug;

use crate::application::ports::{Chime, ChimeError};

use super::bell::BellChime;

/// Chime implementation using rodio
#[derive(Debug, Default)]
pub struct RodioChime {
    bell: BellChime,
}

impl RodioChime {
    /// Create a new rodio-based chime
    pub fn new() -> Self {
        Self {
            bell: BellChime::new(),
        }
    }
}

#[async_trait]
impl Chime for RodioChime {
    async fn play(&self, sound_file: Option<&Path>) -> Result<(), ChimeError> {
        let Some(path) = sound_file else {
            return self.bell.ring();
        };
        let path = path.to_path_buf();

        // Run audio playback in blocking thread to avoid blocking the async runtime
        let played = tokio::task::spawn_blocking(move || play_file_sync(&path))
            .await
            .map_err(|e| ChimeError::PlaybackFailed(format!("Task join error: {}", e)))
            .and_then(|result| result);

        match played {
            Ok(()) => Ok(()),
            Err(e) => {
                debug!(error = %e, "Sound file playback failed, ringing bell");
                self.bell.ring()
            }
        }
    }
}

/// Play a file synchronously (called from spawn_blocking)
fn play_file_sync(path: &Path) -> Result<(), ChimeError> {
    let file = File::open(path)
        .map_err(|e| ChimeError::PlaybackFailed(format!("{}: {}", path.display(), e)))?;
    let source = Decoder::new(BufReader::new(file))
        .map_err(|e| ChimeError::PlaybackFailed(format!("{}: {}", path.display(), e)))?;

    let (_stream, stream_handle) = OutputStream::try_default()
        .map_err(|e| ChimeError::DeviceNotAvailable(e.to_string()))?;

    let sink =
        Sink::try_new(&stream_handle).map_err(|e| ChimeError::PlaybackFailed(e.to_string()))?;

    sink.append(source);

    // Wait for playback to complete
    sink.sleep_until_end();

    Ok(())
}
