//! Scripted command runner shared by the notifier tests

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{CommandError, CommandOutput, CommandRunner};

#[derive(Debug, Clone)]
pub(crate) struct RecordedCall {
    pub program: String,
    pub args: Vec<String>,
    pub timeout: Duration,
}

/// Replays queued results in order; succeeds once the queue is empty
#[derive(Clone, Default)]
pub(crate) struct ScriptedRunner {
    results: Arc<Mutex<VecDeque<Result<CommandOutput, CommandError>>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl ScriptedRunner {
    pub(crate) fn new(results: Vec<Result<CommandOutput, CommandError>>) -> Self {
        Self {
            results: Arc::new(Mutex::new(results.into())),
            calls: Arc::default(),
        }
    }

    pub(crate) fn succeeding() -> Self {
        Self::default()
    }

    pub(crate) fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn programs(&self) -> Vec<String> {
        self.calls().into_iter().map(|call| call.program).collect()
    }
}

#[async_trait]
impl CommandRunner for ScriptedRunner {
    async fn run(
        &self,
        program: &str,
        args: &[String],
        timeout: Duration,
    ) -> Result<CommandOutput, CommandError> {
        self.calls.lock().unwrap().push(RecordedCall {
            program: program.to_string(),
            args: args.to_vec(),
            timeout,
        });
        self.results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(CommandOutput::default()))
    }
}
