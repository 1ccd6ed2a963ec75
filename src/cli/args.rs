//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::domain::trigger::TriggerKind;

/// agent-alarm - desktop alerts for AI coding agents
#[derive(Parser, Debug)]
#[command(name = "agent-alarm")]
#[command(version)]
#[command(about = "Desktop alerts for AI coding agents, with debounce, cooldown and platform fallbacks")]
#[command(long_about = None)]
pub struct Cli {
    /// Agent event that raised the notification
    #[arg(short = 't', long, value_name = "TRIGGER")]
    pub trigger: TriggerArg,

    /// Notification text (defaults to a message for the trigger)
    #[arg(short = 'm', long, value_name = "TEXT")]
    pub message: Option<String>,

    /// Agent working directory (defaults to the current directory)
    #[arg(long, value_name = "PATH")]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

/// Trigger argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum TriggerArg {
    #[value(name = "askUserQuestion")]
    AskUserQuestion,
    #[value(name = "permissionRequest")]
    PermissionRequest,
    #[value(name = "taskComplete")]
    TaskComplete,
    #[value(name = "error")]
    Error,
}

impl From<TriggerArg> for TriggerKind {
    fn from(arg: TriggerArg) -> Self {
        match arg {
            TriggerArg::AskUserQuestion => TriggerKind::AskUserQuestion,
            TriggerArg::PermissionRequest => TriggerKind::PermissionRequest,
            TriggerArg::TaskComplete => TriggerKind::TaskComplete,
            TriggerArg::Error => TriggerKind::Error,
        }
    }
}

/// Parsed notify options
#[derive(Debug, Clone)]
pub struct NotifyOptions {
    pub trigger: TriggerKind,
    pub message: Option<String>,
    pub working_directory: PathBuf,
}
