//! Single-writer session: a bounded input queue drained by one worker.
//!
//! Every [`SessionHandle`] only enqueues raw input. The [`SessionWorker`] owns the
//! [`ShellState`] and applies inputs strictly one at a time in submission order, so no two runs
//! ever start from the same snapshot.

use futures::{channel::mpsc, StreamExt};
use leptos::logging;
use thiserror::Error;

use crate::machine::{ShellMachine, ShellState};

/// Submission failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The queue holds as many pending inputs as it allows.
    #[error("shell input queue is full")]
    QueueFull,
    /// The worker has stopped.
    #[error("shell session is closed")]
    Closed,
}

/// Producer side of a session.
///
/// Each handle owns one sender slot in addition to the shared queue capacity.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    sender: mpsc::Sender<String>,
}

impl SessionHandle {
    /// Queues `input` for execution.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::QueueFull`] when the queue is at capacity and
    /// [`SessionError::Closed`] once the worker is gone.
    pub fn submit(&mut self, input: impl Into<String>) -> Result<(), SessionError> {
        self.sender.try_send(input.into()).map_err(|err| {
            if err.is_full() {
                SessionError::QueueFull
            } else {
                SessionError::Closed
            }
        })
    }

    /// Whether the worker is still accepting input.
    pub fn is_open(&self) -> bool {
        !self.sender.is_closed()
    }
}

/// Consumer side of a session; the only writer of its [`ShellState`].
pub struct SessionWorker<'r> {
    machine: ShellMachine<'r>,
    receiver: mpsc::Receiver<String>,
    state: ShellState,
}

impl<'r> SessionWorker<'r> {
    /// Current state.
    pub fn state(&self) -> &ShellState {
        &self.state
    }

    /// Drains the queue, calling `publish` with the new snapshot after every run.
    ///
    /// Resolves with the final state once every [`SessionHandle`] is dropped.
    pub async fn run<F>(mut self, mut publish: F) -> ShellState
    where
        F: FnMut(&ShellState),
    {
        while let Some(input) = self.receiver.next().await {
            let state = std::mem::take(&mut self.state);
            self.state = self.machine.advance(state, &input);
            publish(&self.state);
        }
        logging::log!(
            "shell session closed after {} entries",
            self.state.history.len()
        );
        self.state
    }
}

/// Creates a session starting from `initial` with room for `capacity` pending inputs.
pub fn session<'r>(
    machine: ShellMachine<'r>,
    initial: ShellState,
    capacity: usize,
) -> (SessionHandle, SessionWorker<'r>) {
    let (sender, receiver) = mpsc::channel(capacity);
    (
        SessionHandle { sender },
        SessionWorker {
            machine,
            receiver,
            state: initial,
        },
    )
}
