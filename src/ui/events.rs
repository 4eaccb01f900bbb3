use crossterm::event::{self, Event, KeyEvent};
use std::io;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

use crate::catalog::{LoadError, Product};

pub enum AppEvent {
    Key(KeyEvent),
    /// Terminal was resized; the next draw picks up the new size.
    Resize,
    /// The one-shot catalog fetch finished.
    Loaded(Result<Vec<Product>, LoadError>),
}

/// Funnels terminal input and the fetch result into one channel read by
/// the UI loop.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
}

impl EventHandler {
    /// Starts the input thread. Fails if the thread cannot be spawned, since
    /// the UI would have no way to receive a quit key without it.
    pub fn new(poll_interval: Duration) -> io::Result<Self> {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::Builder::new()
            .name("input".to_string())
            .spawn(move || loop {
                match event::poll(poll_interval) {
                    Ok(true) => {}
                    Ok(false) => continue,
                    Err(err) => {
                        tracing::error!("Terminal event poll failed: {}", err);
                        break;
                    }
                }

                let forwarded = match event::read() {
                    Ok(Event::Key(key)) => event_tx.send(AppEvent::Key(key)),
                    Ok(Event::Resize(_, _)) => event_tx.send(AppEvent::Resize),
                    Ok(_) => Ok(()),
                    Err(err) => {
                        tracing::error!("Terminal event read failed: {}", err);
                        break;
                    }
                };

                // UI loop is gone
                if forwarded.is_err() {
                    break;
                }
            })?;

        Ok(Self { rx, tx })
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }
}
