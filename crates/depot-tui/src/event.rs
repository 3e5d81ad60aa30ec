//! Terminal input pump.
//!
//! A background task owns the crossterm [`EventStream`] and two interval
//! timers, funnelling key presses, resizes, ticks, and render deadlines
//! into one mpsc channel the app loop can await on.

use std::time::Duration;

use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEvent, KeyEventKind};
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

/// What the pump delivers to the app loop.
#[derive(Debug)]
pub enum UiEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    /// Coarse timer for toast expiry and throbber animation.
    Tick,
    /// Time to draw a frame.
    Render,
}

/// Handle to the background input task.
pub struct EventPump {
    events: mpsc::UnboundedReceiver<UiEvent>,
    shutdown: CancellationToken,
}

impl EventPump {
    /// Start the pump. `tick_every` drives [`UiEvent::Tick`],
    /// `frame_every` drives [`UiEvent::Render`].
    pub fn start(tick_every: Duration, frame_every: Duration) -> Self {
        let (tx, events) = mpsc::unbounded_channel();
        let shutdown = CancellationToken::new();
        tokio::spawn(pump(tx, tick_every, frame_every, shutdown.clone()));
        Self { events, shutdown }
    }

    /// Await the next event; `None` once the pump has stopped.
    pub async fn next(&mut self) -> Option<UiEvent> {
        self.events.recv().await
    }

    pub fn stop(&self) {
        self.shutdown.cancel();
    }
}

impl Drop for EventPump {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn pump(
    tx: mpsc::UnboundedSender<UiEvent>,
    tick_every: Duration,
    frame_every: Duration,
    shutdown: CancellationToken,
) {
    let mut input = EventStream::new();
    let mut ticker = tokio::time::interval(tick_every);
    let mut frames = tokio::time::interval(frame_every);
    // Skip missed deadlines instead of bursting to catch up.
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        let forwarded = tokio::select! {
            () = shutdown.cancelled() => return,
            _ = ticker.tick() => Some(UiEvent::Tick),
            _ = frames.tick() => Some(UiEvent::Render),
            maybe = input.next() => match maybe {
                Some(Ok(CrosstermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                    Some(UiEvent::Key(key))
                }
                Some(Ok(CrosstermEvent::Resize(cols, rows))) => Some(UiEvent::Resize(cols, rows)),
                // Key release/repeat, focus, paste: not interesting.
                Some(Ok(_)) => None,
                Some(Err(_)) | None => return,
            },
        };

        if let Some(event) = forwarded {
            if tx.send(event).is_err() {
                // App loop is gone.
                return;
            }
        }
    }
}
