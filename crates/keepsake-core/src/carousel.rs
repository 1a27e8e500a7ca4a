//! Memory carousel: wrap-around slide index plus the autoplay schedule a host
//! timer follows. Every arm, re-arm and release bumps an epoch; host ticks
//! carry the epoch they were armed for and stale ones are dropped.

use std::time::Duration;

use tracing::debug;

use crate::config::CarouselConfig;
use crate::content::MemoryItem;
use crate::error::{CarouselError, ConfigError, KeepsakeError};

/// What the host timer should currently be doing: fire every `interval`,
/// tagging each tick with `epoch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoplaySchedule {
    pub epoch: u64,
    pub interval: Duration,
}

#[derive(Debug, Clone)]
pub struct Carousel {
    items: Vec<MemoryItem>,
    current: usize,
    auto_playing: bool,
    interval: Duration,
    epoch: u64,
}

impl Carousel {
    /// Refuses an empty item list or a zero interval.
    pub fn new(items: Vec<MemoryItem>, config: CarouselConfig) -> Result<Self, KeepsakeError> {
        if items.is_empty() {
            return Err(CarouselError::Empty.into());
        }
        let config = config.validated()?;
        let mut carousel = Self {
            items,
            current: 0,
            auto_playing: false,
            interval: config.interval(),
            epoch: 0,
        };
        carousel.set_autoplay(config.autoplay);
        Ok(carousel)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; construction rejects empty lists.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[MemoryItem] {
        &self.items
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_item(&self) -> &MemoryItem {
        &self.items[self.current]
    }

    /// 1-based position shown on the slide badge.
    pub fn position(&self) -> usize {
        self.current + 1
    }

    pub fn is_auto_playing(&self) -> bool {
        self.auto_playing
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Bumped whenever the autoplay timer is armed, re-armed or released.
    pub fn autoplay_epoch(&self) -> u64 {
        self.epoch
    }

    /// `None` while autoplay is off; the host must hold no timer then.
    pub fn autoplay_schedule(&self) -> Option<AutoplaySchedule> {
        self.auto_playing.then_some(AutoplaySchedule {
            epoch: self.epoch,
            interval: self.interval,
        })
    }

    /// Timer step: advances one slide, leaves autoplay untouched.
    pub fn next(&mut self) {
        self.current = (self.current + 1) % self.items.len();
    }

    /// Forward button: suspends autoplay, then advances.
    pub fn skip_forward(&mut self) {
        self.suspend();
        self.next();
        debug!("carousel skipped forward to {}", self.current);
    }

    pub fn previous(&mut self) {
        self.suspend();
        let len = self.items.len();
        self.current = (self.current + len - 1) % len;
        debug!("carousel went back to {}", self.current);
    }

    /// Jumps to `index`; out-of-range indices are rejected without touching state.
    pub fn go_to(&mut self, index: usize) -> Result<(), CarouselError> {
        let len = self.items.len();
        if index >= len {
            return Err(CarouselError::IndexOutOfRange { index, len });
        }
        self.suspend();
        self.current = index;
        debug!("carousel jumped to {index}");
        Ok(())
    }

    pub fn toggle_autoplay(&mut self) -> bool {
        self.set_autoplay(!self.auto_playing);
        self.auto_playing
    }

    pub fn set_autoplay(&mut self, enabled: bool) {
        if self.auto_playing == enabled {
            return;
        }
        self.auto_playing = enabled;
        self.epoch += 1;
        if enabled {
            debug!("autoplay armed every {:?} (epoch {})", self.interval, self.epoch);
        } else {
            debug!("autoplay released (epoch {})", self.epoch);
        }
    }

    /// Changes the autoplay period; a running timer is re-armed from zero.
    pub fn set_interval(&mut self, interval: Duration) -> Result<(), ConfigError> {
        if interval.is_zero() {
            return Err(ConfigError::ZeroInterval);
        }
        if interval != self.interval {
            self.interval = interval;
            if self.auto_playing {
                self.epoch += 1;
                debug!("autoplay re-armed every {interval:?} (epoch {})", self.epoch);
            }
        }
        Ok(())
    }

    /// Applies one host timer tick armed at `epoch`. Ticks from a timer that
    /// has since been re-armed or released are ignored.
    pub fn on_timer_fired(&mut self, epoch: u64) -> bool {
        if !self.auto_playing || epoch != self.epoch {
            debug!("dropping stale autoplay tick (epoch {epoch}, current {})", self.epoch);
            return false;
        }
        self.next();
        true
    }

    fn suspend(&mut self) {
        self.set_autoplay(false);
    }
}
