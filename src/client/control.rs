//! Pause/resume control signal
//!
//! The download loop interleaves two inputs: the network socket and a local
//! line source. An empty line toggles pause; any other line is ignored.
//! Lines travel over a channel fed by a separate task, so the loop awaits
//! readiness instead of busy-polling the input.

use log::warn;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

/// Receiving end of the control line channel, consumed by the download loop
/// (and usable as a general line source by a front end).
pub struct ControlInput {
    rx: mpsc::UnboundedReceiver<String>,
}

/// Sending end, for front ends that drive pause/resume programmatically.
#[derive(Clone)]
pub struct ControlHandle {
    tx: mpsc::UnboundedSender<String>,
}

impl ControlHandle {
    /// Feeds one line of control input. Returns false when the receiving
    /// side is gone.
    pub fn send_line(&self, line: impl Into<String>) -> bool {
        self.tx.send(line.into()).is_ok()
    }

    /// The pause/resume toggle: an empty line.
    pub fn toggle(&self) -> bool {
        self.send_line("")
    }
}

impl ControlInput {
    /// A control input paired with a programmatic handle.
    pub fn channel() -> (ControlHandle, ControlInput) {
        let (tx, rx) = mpsc::unbounded_channel();
        (ControlHandle { tx }, ControlInput { rx })
    }

    /// A control input fed by stdin lines from a background task. The task
    /// ends when stdin does or when the input is dropped.
    pub fn from_stdin() -> ControlInput {
        let (handle, input) = Self::channel();

        tokio::spawn(async move {
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            loop {
                match lines.next_line().await {
                    Ok(Some(line)) => {
                        if !handle.send_line(line) {
                            break;
                        }
                    }
                    Ok(None) => break,
                    Err(e) => {
                        warn!("Control input error: {}", e);
                        break;
                    }
                }
            }
        });

        input
    }

    /// Waits for the next control line. `None` once every handle is gone.
    pub async fn recv(&mut self) -> Option<String> {
        self.rx.recv().await
    }
}
