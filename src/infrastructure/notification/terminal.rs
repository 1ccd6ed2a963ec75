//! Terminal fallback: audible bell plus a bordered text block

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

const RULE_WIDTH: usize = 50;
const BELL: &str = "\x07";

/// Writes alerts to the terminal. Never fails.
#[derive(Clone)]
pub struct TerminalNotifier {
    sink: Arc<Mutex<dyn Write + Send>>,
}

impl TerminalNotifier {
    /// Create a notifier writing to stdout
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create with a custom writer
    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            sink: Arc::new(Mutex::new(writer)),
        }
    }

    /// Ring the bell and print the alert block
    pub fn show(&self, title: &str, message: &str) {
        let block = render_block(title, message);
        let Ok(mut sink) = self.sink.lock() else {
            return;
        };
        let _ = sink.write_all(block.as_bytes());
        let _ = sink.flush();
    }
}

impl Default for TerminalNotifier {
    fn default() -> Self {
        Self::new()
    }
}

fn render_block(title: &str, message: &str) -> String {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "─".repeat(RULE_WIDTH);
    format!(
        "{BELL}\n{heavy}\n⚠️  {title}\n{light}\n{message}\n{heavy}\n\n"
    )
}
