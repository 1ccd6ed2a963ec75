//! End-to-end dispatch through the Linux-under-Windows backend

use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use agent_alarm::application::ports::{
    Chime, ChimeError, CommandError, CommandOutput, CommandRunner, Environment,
};
use agent_alarm::application::{DeliveryOutcome, DispatchOutcome, Dispatcher};
use agent_alarm::domain::{
    DeliveryMethod, DeliveryPreferences, DispatchConfig, DisplayServer, NotificationRequest,
    PlatformKind, SessionEnv, TriggerKind,
};
use agent_alarm::infrastructure::notification::{
    NotifyRustNotifier, PlatformRouter, TerminalNotifier, WslNotifier,
};
use async_trait::async_trait;

struct WslHost;

impl Environment for WslHost {
    fn platform(&self) -> PlatformKind {
        PlatformKind::LinuxUnderWindows
    }

    fn session(&self) -> SessionEnv {
        SessionEnv {
            tmux_pane: None,
            screen_session: None,
            pid: 1234,
        }
    }

    fn display_server(&self) -> DisplayServer {
        DisplayServer::Unknown
    }
}

/// Every external program fails the way the host has it configured
#[derive(Clone, Default)]
struct BrokenHost {
    calls: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl CommandRunner for BrokenHost {
    async fn run(
        &self,
        program: &str,
        _args: &[String],
        _timeout: Duration,
    ) -> Result<CommandOutput, CommandError> {
        self.calls.lock().unwrap().push(program.to_string());
        match program {
            "wsl-notify-send.exe" => Err(CommandError::TimedOut(program.to_string())),
            _ => Err(CommandError::NotFound(program.to_string())),
        }
    }
}

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).to_string()
    }
}

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

struct Silent;

#[async_trait]
impl Chime for Silent {
    async fn play(&self, _sound_file: Option<&Path>) -> Result<(), ChimeError> {
        Ok(())
    }
}

fn wsl_dispatcher(
    runner: &BrokenHost,
    terminal: &Captured,
) -> Dispatcher<WslHost, PlatformRouter, Silent> {
    let router = PlatformRouter::new(
        Box::new(NotifyRustNotifier::with_native_subtitle()),
        Box::new(NotifyRustNotifier::new()),
        Box::new(NotifyRustNotifier::new()),
        Box::new(WslNotifier::new(
            runner.clone(),
            TerminalNotifier::with_writer(terminal.clone()),
        )),
    );
    Dispatcher::new(WslHost, router, Silent)
}

fn config(fallback_enabled: bool) -> DispatchConfig {
    let mut config = DispatchConfig {
        delay: Duration::ZERO,
        delivery: DeliveryPreferences {
            method: DeliveryMethod::Auto,
            fallback_enabled,
        },
        ..Default::default()
    };
    config.channels.sound = false;
    config
}

#[tokio::test]
async fn wsl_chain_ends_on_the_terminal() {
    let runner = BrokenHost::default();
    let terminal = Captured::default();
    let dispatcher = wsl_dispatcher(&runner, &terminal);

    let request = NotificationRequest::with_default_message(
        TriggerKind::AskUserQuestion,
        "/home/dev/shop",
    );
    let DispatchOutcome::Scheduled(ticket) = dispatcher.notify(request, config(true)).await else {
        panic!("request should be scheduled");
    };

    let outcome = ticket.outcome().await;
    assert!(matches!(
        outcome,
        DeliveryOutcome::Delivered(PlatformKind::LinuxUnderWindows)
    ));
    assert_eq!(
        *runner.calls.lock().unwrap(),
        vec!["wsl-notify-send.exe", "powershell.exe"]
    );

    let output = terminal.text();
    assert!(output.starts_with('\x07'));
    assert!(output.contains("⚠️  Claude Code - shop"));
    assert!(output.contains("/home/dev/shop\n\nClaude Code is waiting for your answer to a question"));
}

#[tokio::test]
async fn wsl_chain_without_fallback_reports_failure() {
    let runner = BrokenHost::default();
    let terminal = Captured::default();
    let dispatcher = wsl_dispatcher(&runner, &terminal);

    let request = NotificationRequest::new("Need input", TriggerKind::PermissionRequest, "/a");
    let DispatchOutcome::Scheduled(ticket) = dispatcher.notify(request, config(false)).await else {
        panic!("request should be scheduled");
    };

    assert!(matches!(ticket.outcome().await, DeliveryOutcome::Failed(_)));
    assert!(terminal.text().is_empty());

    // the failed attempt still counts for the cooldown
    let again = NotificationRequest::new("Need input", TriggerKind::PermissionRequest, "/a");
    assert!(matches!(
        dispatcher.notify(again, config(false)).await,
        DispatchOutcome::Suppressed(_)
    ));
}
