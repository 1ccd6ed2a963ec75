//! Notification dispatch use case
//!
//! Decides whether a request is suppressed, debounces repeated requests
//! for the same trigger and directory, and hands the alert to the backend
//! for the detected platform once the delay has elapsed.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{oneshot, Mutex};
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::domain::alert::Alert;
use crate::domain::config::DispatchConfig;
use crate::domain::identity::InstanceIdentity;
use crate::domain::platform::PlatformKind;
use crate::domain::request::{DispatchKey, NotificationRequest};
use crate::domain::trigger::TriggerKind;

use super::ports::{Chime, DeliveryRouter, Environment, NotificationError};
use super::schedule::{schedule, CancelHandle};

/// Why a request was not scheduled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuppressionReason {
    /// Notifications are switched off
    Disabled,
    /// The request's trigger is switched off
    TriggerDisabled(TriggerKind),
    /// Another notification fired too recently
    Cooldown { remaining: Duration },
}

impl fmt::Display for SuppressionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => write!(f, "notifications are disabled"),
            Self::TriggerDisabled(kind) => write!(f, "trigger '{}' is disabled", kind),
            Self::Cooldown { remaining } => {
                write!(f, "cooldown active for another {:.1}s", remaining.as_secs_f64())
            }
        }
    }
}

/// Result of a fired (or abandoned) delivery
#[derive(Debug, Clone)]
pub enum DeliveryOutcome {
    Delivered(PlatformKind),
    Failed(NotificationError),
    /// A newer request for the same key replaced this one
    Superseded,
}

/// Resolves once the scheduled delivery has settled
#[derive(Debug)]
pub struct DeliveryTicket {
    receiver: oneshot::Receiver<DeliveryOutcome>,
}

impl DeliveryTicket {
    /// Wait for the delivery. A dropped delivery counts as superseded.
    pub async fn outcome(self) -> DeliveryOutcome {
        self.receiver.await.unwrap_or(DeliveryOutcome::Superseded)
    }
}

/// Immediate result of [`Dispatcher::notify`]
#[derive(Debug)]
pub enum DispatchOutcome {
    Suppressed(SuppressionReason),
    Scheduled(DeliveryTicket),
}

/// A scheduled, not yet fired delivery
#[derive(Debug)]
pub struct PendingEntry {
    pub key: DispatchKey,
    pub id: u64,
    pub scheduled_at: Instant,
    cancel: CancelHandle,
}

/// Cooldown and debounce bookkeeping
#[derive(Debug, Default)]
pub struct DispatcherState {
    last_fired_at: Option<Instant>,
    pending: HashMap<DispatchKey, PendingEntry>,
}

impl DispatcherState {
    pub fn last_fired_at(&self) -> Option<Instant> {
        self.last_fired_at
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Time left before another notification may be scheduled
    fn cooldown_remaining(&self, now: Instant, cooldown: Duration) -> Option<Duration> {
        let elapsed = now.saturating_duration_since(self.last_fired_at?);
        (elapsed < cooldown).then(|| cooldown - elapsed)
    }

    fn mark_fired(&mut self, now: Instant) {
        self.last_fired_at = Some(self.last_fired_at.map_or(now, |last| last.max(now)));
    }

    /// Remove the entry for `key` only if it is still the one identified by `id`
    fn take_if_current(&mut self, key: &DispatchKey, id: u64) -> bool {
        match self.pending.get(key) {
            Some(entry) if entry.id == id => {
                self.pending.remove(key);
                true
            }
            _ => false,
        }
    }
}

struct Inner<E, R, C> {
    environment: E,
    router: R,
    chime: C,
    state: Mutex<DispatcherState>,
    next_id: AtomicU64,
}

/// Notification dispatcher
///
/// Holds the cooldown/debounce state for its lifetime; independent
/// dispatchers never share state.
pub struct Dispatcher<E, R, C>
where
    E: Environment,
    R: DeliveryRouter,
    C: Chime,
{
    inner: Arc<Inner<E, R, C>>,
}

impl<E, R, C> Dispatcher<E, R, C>
where
    E: Environment + 'static,
    R: DeliveryRouter + 'static,
    C: Chime + 'static,
{
    /// Create a new dispatcher with empty state
    pub fn new(environment: E, router: R, chime: C) -> Self {
        Self {
            inner: Arc::new(Inner {
                environment,
                router,
                chime,
                state: Mutex::new(DispatcherState::default()),
                next_id: AtomicU64::new(1),
            }),
        }
    }

    /// Submit a request. Never waits for the delivery itself.
    pub async fn notify(
        &self,
        request: NotificationRequest,
        config: DispatchConfig,
    ) -> DispatchOutcome {
        if !config.enabled {
            info!("Notification skipped - notifications are disabled");
            return DispatchOutcome::Suppressed(SuppressionReason::Disabled);
        }

        let trigger = request.trigger();
        if !config.triggers_on(trigger) {
            info!(trigger = %trigger, "Notification skipped - trigger is disabled");
            return DispatchOutcome::Suppressed(SuppressionReason::TriggerDisabled(trigger));
        }

        let key = request.key();
        let mut state = self.inner.state.lock().await;
        let now = Instant::now();

        if let Some(remaining) = state.cooldown_remaining(now, config.cooldown) {
            info!(
                key = %key,
                remaining_ms = remaining.as_millis() as u64,
                "Notification skipped due to cooldown"
            );
            return DispatchOutcome::Suppressed(SuppressionReason::Cooldown { remaining });
        }

        if let Some(previous) = state.pending.remove(&key) {
            previous.cancel.cancel();
            debug!(key = %key, id = previous.id, "Superseded pending notification");
        }

        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        let (sender, receiver) = oneshot::channel();
        let inner = Arc::clone(&self.inner);
        let fire_key = key.clone();
        let delay = config.delay;

        let cancel = schedule(delay, async move {
            let outcome = inner.fire(&fire_key, id, &request, &config).await;
            let _ = sender.send(outcome);
        });

        debug!(key = %key, id, delay_ms = delay.as_millis() as u64, "Notification scheduled");
        state.pending.insert(
            key.clone(),
            PendingEntry {
                key,
                id,
                scheduled_at: now,
                cancel,
            },
        );

        DispatchOutcome::Scheduled(DeliveryTicket { receiver })
    }

    /// Snapshot of the bookkeeping: (last fired at, pending count)
    pub async fn state_summary(&self) -> (Option<Instant>, usize) {
        let state = self.inner.state.lock().await;
        (state.last_fired_at(), state.pending_count())
    }
}

impl<E, R, C> Inner<E, R, C>
where
    E: Environment,
    R: DeliveryRouter,
    C: Chime,
{
    async fn fire(
        &self,
        key: &DispatchKey,
        id: u64,
        request: &NotificationRequest,
        config: &DispatchConfig,
    ) -> DeliveryOutcome {
        {
            let mut state = self.state.lock().await;
            if !state.take_if_current(key, id) {
                debug!(key = %key, id, "Pending notification no longer current");
                return DeliveryOutcome::Superseded;
            }
            state.mark_fired(Instant::now());
        }

        let session = self.environment.session();
        let identity =
            InstanceIdentity::resolve(config.identifier_mode, request.working_directory(), &session);
        let alert = Alert::compose(
            &identity,
            request.message(),
            config.identifier_mode,
            config.show_full_path,
        );
        let platform = self.environment.platform();

        if config.channels.sound {
            if let Err(e) = self.chime.play(config.channels.sound_file.as_deref()).await {
                debug!(error = %e, "Chime failed");
            }
        }

        if !config.channels.desktop {
            debug!(key = %key, "Desktop notifications disabled");
            return DeliveryOutcome::Delivered(platform);
        }

        match self.router.backend(platform).deliver(&alert, &config.delivery).await {
            Ok(()) => {
                info!(platform = %platform, key = %key, "Notification delivered");
                DeliveryOutcome::Delivered(platform)
            }
            Err(e) => {
                warn!(platform = %platform, error = %e, "Notification failed");
                DeliveryOutcome::Failed(e)
            }
        }
    }
}
