//! Terminal bell chime

use std::io::{self, Write};
use std::path::Path;

use async_trait::async_trait;

use crate::application::ports::{Chime, ChimeError};

/// Rings the terminal bell on stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct BellChime;

impl BellChime {
    pub fn new() -> Self {
        Self
    }

    pub fn ring(&self) -> Result<(), ChimeError> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(b"\x07")
            .and_then(|_| stdout.flush())
            .map_err(|e| ChimeError::PlaybackFailed(e.to_string()))
    }
}

#[async_trait]
impl Chime for BellChime {
    async fn play(&self, _sound_file: Option<&Path>) -> Result<(), ChimeError> {
        self.ring()
    }
}
