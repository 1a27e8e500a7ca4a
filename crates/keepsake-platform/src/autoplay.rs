use std::sync::Arc;

use crossbeam_channel::{Receiver, Sender};
use keepsake_core::{AutoplaySchedule, Carousel};
use tracing::info;

use crate::{DisplaySurface, Result, Ticker};

struct AutoplayTick {
    epoch: u64,
}

/// Owns the host timer behind carousel autoplay. `sync` keeps at most one
/// [`Ticker`] alive for the carousel's current schedule; `pump` applies the
/// ticks it delivered, dropping any from a schedule that has since changed.
pub struct AutoplayDriver {
    // Declared first so it is cancelled before the channel goes away.
    ticker: Option<Ticker>,
    armed: Option<AutoplaySchedule>,
    surface: Arc<dyn DisplaySurface>,
    sender: Sender<AutoplayTick>,
    receiver: Receiver<AutoplayTick>,
}

impl AutoplayDriver {
    pub fn new(surface: Arc<dyn DisplaySurface>) -> Self {
        let (sender, receiver) = crossbeam_channel::unbounded::<AutoplayTick>();
        Self {
            ticker: None,
            armed: None,
            surface,
            sender,
            receiver,
        }
    }

    /// Schedule the running ticker was started for, if any.
    pub fn armed(&self) -> Option<AutoplaySchedule> {
        self.armed
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_some()
    }

    /// Applies every queued tick and returns how many advanced a slide.
    pub fn pump(&self, carousel: &mut Carousel) -> u32 {
        let mut advanced = 0;
        while let Ok(tick) = self.receiver.try_recv() {
            if carousel.on_timer_fired(tick.epoch) {
                advanced += 1;
            }
        }
        advanced
    }

    /// Matches the host timer to `carousel.autoplay_schedule()`: released
    /// when autoplay is off, restarted when the epoch or interval changed.
    pub fn sync(&mut self, carousel: &Carousel) -> Result<()> {
        let wanted = carousel.autoplay_schedule();
        if wanted == self.armed {
            return Ok(());
        }
        // Release before arming so two tickers never overlap.
        if self.ticker.take().is_some() {
            info!("autoplay timer released");
        }
        self.armed = wanted;
        let Some(schedule) = wanted else {
            return Ok(());
        };

        let sender = self.sender.clone();
        let surface = Arc::clone(&self.surface);
        let epoch = schedule.epoch;
        let ticker = Ticker::start("keepsake-autoplay", schedule.interval, move || {
            let delivered = sender.send(AutoplayTick { epoch }).is_ok();
            surface.request_redraw();
            delivered
        })?;
        info!("autoplay timer armed every {:?} (epoch {epoch})", schedule.interval);
        self.ticker = Some(ticker);
        Ok(())
    }
}

impl std::fmt::Debug for AutoplayDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AutoplayDriver")
            .field("armed", &self.armed)
            .field("ticker", &self.ticker)
            .finish()
    }
}
