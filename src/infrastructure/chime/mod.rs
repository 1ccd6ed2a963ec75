//! Chime infrastructure adapters
//!
//! Audible alert played before the desktop notification.

mod bell;
mod rodio;

pub use self::rodio::RodioChime;
pub use bell::BellChime;

use crate::application::ports::Chime;

/// Create the default chime adapter
pub fn create_chime() -> Box<dyn Chime> {
    Box::new(RodioChime::new())
}
