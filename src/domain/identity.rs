//! Instance identity for telling concurrent agents apart

use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Label prefixed to every notification title
pub const APP_LABEL: &str = "Claude Code";

/// How an agent instance is identified in its notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdentifierMode {
    #[default]
    ProjectName,
    FullPath,
    Pid,
    SessionId,
}

impl IdentifierMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ProjectName => "projectName",
            Self::FullPath => "fullPath",
            Self::Pid => "pid",
            Self::SessionId => "sessionId",
        }
    }

    /// Whether the session tag is appended to the message body
    pub const fn shows_session_tag(&self) -> bool {
        matches!(self, Self::Pid | Self::SessionId)
    }
}

impl fmt::Display for IdentifierMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error when parsing an identifier mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdentifierModeError {
    pub value: String,
}

impl fmt::Display for ParseIdentifierModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid instance identifier '{}'. Valid options: projectName, fullPath, pid, sessionId",
            self.value
        )
    }
}

impl std::error::Error for ParseIdentifierModeError {}

impl FromStr for IdentifierMode {
    type Err = ParseIdentifierModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "projectName" => Ok(Self::ProjectName),
            "fullPath" => Ok(Self::FullPath),
            "pid" => Ok(Self::Pid),
            "sessionId" => Ok(Self::SessionId),
            _ => Err(ParseIdentifierModeError {
                value: s.to_string(),
            }),
        }
    }
}

/// Terminal session facts read at delivery time
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionEnv {
    /// `TMUX_PANE`
    pub tmux_pane: Option<String>,
    /// `STY` (GNU screen)
    pub screen_session: Option<String>,
    pub pid: u32,
}

impl SessionEnv {
    /// Multiplexer pane, then multiplexer session, then the process id
    fn session_tag(&self) -> String {
        let non_empty = |value: &Option<String>| value.as_deref().filter(|v| !v.is_empty()).map(str::to_owned);

        if let Some(pane) = non_empty(&self.tmux_pane) {
            format!("tmux:{}", pane)
        } else if let Some(session) = non_empty(&self.screen_session) {
            format!("screen:{}", session)
        } else {
            self.pid_tag()
        }
    }

    fn pid_tag(&self) -> String {
        format!("PID: {}", self.pid)
    }
}

/// Derived identity of the agent instance raising a notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceIdentity {
    pub title: String,
    pub subtitle: Option<String>,
    pub session_tag: Option<String>,
}

impl InstanceIdentity {
    /// Resolve the identity for a working directory.
    ///
    /// `ProjectName` and `FullPath` currently render the same.
    pub fn resolve(mode: IdentifierMode, working_directory: &Path, session: &SessionEnv) -> Self {
        let directory = working_directory.to_string_lossy().to_string();
        let project_name = working_directory
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| directory.clone());

        let session_tag = match mode {
            IdentifierMode::ProjectName | IdentifierMode::FullPath => None,
            IdentifierMode::Pid => Some(session.pid_tag()),
            IdentifierMode::SessionId => Some(session.session_tag()),
        };

        Self {
            title: format!("{} - {}", APP_LABEL, project_name),
            subtitle: Some(directory),
            session_tag,
        }
    }

    /// Append the session tag to a message when requested
    pub fn format_message(&self, message: &str, include_session_tag: bool) -> String {
        match (&self.session_tag, include_session_tag) {
            (Some(tag), true) => format!("{}\n\n{}", message, tag),
            _ => message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> SessionEnv {
        SessionEnv {
            tmux_pane: None,
            screen_session: None,
            pid: 4242,
        }
    }

    #[test]
    fn project_name_mode() {
        let identity =
            InstanceIdentity::resolve(IdentifierMode::ProjectName, Path::new("/home/u/shop"), &session());
        assert_eq!(identity.title, "Claude Code - shop");
        assert_eq!(identity.subtitle.as_deref(), Some("/home/u/shop"));
        assert!(identity.session_tag.is_none());
    }

    #[test]
    fn full_path_matches_project_name() {
        let dir = Path::new("/home/u/shop");
        assert_eq!(
            InstanceIdentity::resolve(IdentifierMode::FullPath, dir, &session()),
            InstanceIdentity::resolve(IdentifierMode::ProjectName, dir, &session())
        );
    }

    #[test]
    fn pid_mode_tags_process_id() {
        let identity = InstanceIdentity::resolve(IdentifierMode::Pid, Path::new("/a"), &session());
        assert_eq!(identity.session_tag.as_deref(), Some("PID: 4242"));
    }

    #[test]
    fn session_mode_prefers_tmux_pane() {
        let env = SessionEnv {
            tmux_pane: Some("%3".to_string()),
            screen_session: Some("1234.pts-0".to_string()),
            pid: 1,
        };
        let identity = InstanceIdentity::resolve(IdentifierMode::SessionId, Path::new("/a"), &env);
        assert_eq!(identity.session_tag.as_deref(), Some("tmux:%3"));
    }

    #[test]
    fn session_mode_falls_back_to_screen_then_pid() {
        let env = SessionEnv {
            tmux_pane: Some(String::new()),
            screen_session: Some("1234.pts-0".to_string()),
            pid: 1,
        };
        let identity = InstanceIdentity::resolve(IdentifierMode::SessionId, Path::new("/a"), &env);
        assert_eq!(identity.session_tag.as_deref(), Some("screen:1234.pts-0"));

        let identity = InstanceIdentity::resolve(IdentifierMode::SessionId, Path::new("/a"), &session());
        assert_eq!(identity.session_tag.as_deref(), Some("PID: 4242"));
    }

    #[test]
    fn root_directory_uses_whole_path() {
        let identity =
            InstanceIdentity::resolve(IdentifierMode::ProjectName, Path::new("/"), &session());
        assert_eq!(identity.title, "Claude Code - /");
    }

    #[test]
    fn format_message_appends_tag() {
        let identity = InstanceIdentity::resolve(IdentifierMode::Pid, Path::new("/a"), &session());
        assert_eq!(identity.format_message("Done", true), "Done\n\nPID: 4242");
        assert_eq!(identity.format_message("Done", false), "Done");
    }

    #[test]
    fn identifier_mode_from_str() {
        assert_eq!("sessionId".parse::<IdentifierMode>().unwrap(), IdentifierMode::SessionId);
        assert_eq!("pid".parse::<IdentifierMode>().unwrap(), IdentifierMode::Pid);
        let err = "hostname".parse::<IdentifierMode>().unwrap_err();
        assert_eq!(err.value, "hostname");
    }

    #[test]
    fn session_tag_visibility() {
        assert!(!IdentifierMode::ProjectName.shows_session_tag());
        assert!(!IdentifierMode::FullPath.shows_session_tag());
        assert!(IdentifierMode::Pid.shows_session_tag());
        assert!(IdentifierMode::SessionId.shows_session_tag());
    }
}
