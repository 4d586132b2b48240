use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};
use tokio::runtime::Handle;

use crate::ui::submission::Settlement;

pub enum AppEvent {
    Key(KeyEvent),
    Paste(String),
    Resize(u16, u16),
    Tick,
    /// An analysis request finished.
    Settled(Settlement),
    /// OS signal received (SIGTERM, SIGINT).
    Shutdown,
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
}

impl EventHandler {
    /// Spawn the terminal input thread. It emits `Tick` every `tick_rate`
    /// and exits once the handler is dropped.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                // Short poll so a dropped receiver is noticed quickly.
                let timeout = tick_rate
                    .saturating_sub(last_tick.elapsed())
                    .min(Duration::from_millis(50));

                let polled = match event::poll(timeout) {
                    Ok(ready) => ready,
                    Err(err) => {
                        tracing::error!("Terminal event poll failed: {}", err);
                        break;
                    }
                };

                if polled {
                    let forwarded = match event::read() {
                        Ok(Event::Key(key)) => Some(AppEvent::Key(key)),
                        Ok(Event::Paste(text)) => Some(AppEvent::Paste(text)),
                        Ok(Event::Resize(cols, rows)) => Some(AppEvent::Resize(cols, rows)),
                        Ok(_) => None,
                        Err(err) => {
                            tracing::error!("Terminal event read failed: {}", err);
                            break;
                        }
                    };
                    if let Some(event) = forwarded {
                        if event_tx.send(event).is_err() {
                            break;
                        }
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }
}

/// Forward settlements from the runtime into the UI event queue.
pub fn forward_settlements(
    runtime: &Handle,
    mut settlements: tokio::sync::mpsc::UnboundedReceiver<Settlement>,
    events: Sender<AppEvent>,
) {
    runtime.spawn(async move {
        while let Some(settlement) = settlements.recv().await {
            if events.send(AppEvent::Settled(settlement)).is_err() {
                break;
            }
        }
    });
}

/// Turn SIGINT/SIGTERM into `AppEvent::Shutdown`.
///
/// In raw mode Ctrl+C arrives as a key press, so this only fires for
/// signals sent from outside the terminal.
pub fn watch_signals(runtime: &Handle, events: Sender<AppEvent>) {
    runtime.spawn(async move {
        wait_for_signal().await;
        tracing::info!("Shutdown signal received");
        let _ = events.send(AppEvent::Shutdown);
    });
}

#[cfg(unix)]
async fn wait_for_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut terminate = match signal(SignalKind::terminate()) {
        Ok(stream) => stream,
        Err(err) => {
            tracing::warn!("Failed to install SIGTERM handler: {}", err);
            let _ = tokio::signal::ctrl_c().await;
            return;
        }
    };

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {}
        _ = terminate.recv() => {}
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
