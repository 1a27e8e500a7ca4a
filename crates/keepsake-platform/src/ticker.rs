use std::thread::JoinHandle;
use std::time::Duration;

use crossbeam_channel::{select, Sender};
use tracing::{debug, warn};

use crate::Result;

/// A recurring timer thread. Runs until dropped or until the callback
/// returns `false`; dropping cancels and joins, so no tick is delivered
/// after `drop` returns.
pub struct Ticker {
    interval: Duration,
    cancel: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    pub fn start<F>(name: &str, interval: Duration, mut on_tick: F) -> Result<Self>
    where
        F: FnMut() -> bool + Send + 'static,
    {
        if interval.is_zero() {
            return Err("ticker interval must be greater than zero".into());
        }
        let (cancel, cancelled) = crossbeam_channel::bounded::<()>(0);
        let ticks = crossbeam_channel::tick(interval);
        let handle = std::thread::Builder::new()
            .name(name.to_owned())
            .spawn(move || loop {
                select! {
                    recv(cancelled) -> _ => break,
                    recv(ticks) -> _ => {
                        if !on_tick() {
                            break;
                        }
                    }
                }
            })?;
        debug!("ticker {name} started every {interval:?}");
        Ok(Self {
            interval,
            cancel: Some(cancel),
            handle: Some(handle),
        })
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        // Disconnecting the cancel channel wakes the select.
        drop(self.cancel.take());
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("ticker thread panicked");
            }
        }
        debug!("ticker stopped");
    }
}

impl std::fmt::Debug for Ticker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ticker")
            .field("interval", &self.interval)
            .field("running", &self.handle.is_some())
            .finish()
    }
}
