//! Terminal event plumbing.
//!
//! Merges crossterm's input stream with a fixed-rate tick into a single
//! channel the main loop can select on.

use std::time::Duration;

use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEvent, KeyEventKind};
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::error;

/// Events delivered to the main loop.
#[derive(Debug, Clone)]
pub enum Event {
    /// Fixed-rate tick; drives toast expiry.
    Tick,
    /// A key press.
    Key(KeyEvent),
    /// Terminal resize.
    Resize(u16, u16),
}

/// Background task turning terminal input and ticks into [`Event`]s.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
    _task: JoinHandle<()>,
}

impl EventHandler {
    /// Start the event pump with the given tick interval.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(async move {
            let mut stream = EventStream::new();
            let mut tick = tokio::time::interval(tick_rate);
            loop {
                tokio::select! {
                    _ = tick.tick() => {
                        if tx.send(Event::Tick).is_err() {
                            break;
                        }
                    }
                    maybe_event = stream.next() => {
                        let event = match maybe_event {
                            Some(Ok(CrosstermEvent::Key(key)))
                                if key.kind == KeyEventKind::Press =>
                            {
                                Event::Key(key)
                            }
                            Some(Ok(CrosstermEvent::Resize(w, h))) => Event::Resize(w, h),
                            Some(Ok(_)) => continue,
                            Some(Err(err)) => {
                                error!(%err, "terminal event stream error");
                                break;
                            }
                            None => break,
                        };
                        if tx.send(event).is_err() {
                            break;
                        }
                    }
                }
            }
        });
        Self { rx, _task: task }
    }

    /// Next event; `None` when the pump has stopped.
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}
