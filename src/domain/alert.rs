//! Sanitized notification payload handed to delivery backends

use crate::domain::identity::{IdentifierMode, InstanceIdentity};
use crate::domain::text::{sanitize, MESSAGE_MAX_LEN, SUBTITLE_MAX_LEN, TITLE_MAX_LEN};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub subtitle: Option<String>,
    pub message: String,
}

impl Alert {
    /// Build the payload for an identity, bounding every field.
    ///
    /// The subtitle is dropped unless `show_full_path` is set, and the
    /// session tag is appended to the message for modes that display it.
    pub fn compose(
        identity: &InstanceIdentity,
        message: &str,
        mode: IdentifierMode,
        show_full_path: bool,
    ) -> Self {
        let message = identity.format_message(message, mode.shows_session_tag());

        Self {
            title: sanitize(&identity.title, TITLE_MAX_LEN),
            subtitle: identity
                .subtitle
                .as_deref()
                .filter(|_| show_full_path)
                .map(|subtitle| sanitize(subtitle, SUBTITLE_MAX_LEN)),
            message: sanitize(&message, MESSAGE_MAX_LEN),
        }
    }

    /// Message with the subtitle folded in, for mechanisms without one
    pub fn folded_body(&self) -> String {
        match &self.subtitle {
            Some(subtitle) => sanitize(&format!("{}\n\n{}", subtitle, self.message), MESSAGE_MAX_LEN),
            None => self.message.clone(),
        }
    }
}
