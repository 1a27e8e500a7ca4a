use keepsake_core::Viewport;
use tracing::{info, warn};

/// Sub-pixel jitter below this is not a resize.
const MIN_DELTA: f32 = 0.5;

/// Resize listener: fed the host's surface size every frame, reports only
/// real changes.
#[derive(Debug, Default)]
pub struct ResizeWatcher {
    last: Option<Viewport>,
}

impl ResizeWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<Viewport> {
        self.last
    }

    /// Returns the new viewport when it differs from the last one seen.
    /// Degenerate sizes are logged and ignored.
    pub fn observe(&mut self, width: f32, height: f32) -> Option<Viewport> {
        let viewport = match Viewport::new(width, height) {
            Ok(viewport) => viewport,
            Err(err) => {
                warn!("ignoring host surface size: {err}");
                return None;
            }
        };
        let changed = match self.last {
            None => true,
            Some(last) => {
                (last.width - width).abs() >= MIN_DELTA || (last.height - height).abs() >= MIN_DELTA
            }
        };
        if !changed {
            return None;
        }
        let reason = if self.last.is_some() { "resize" } else { "mount" };
        info!("surface {reason} => {}x{}", viewport.width, viewport.height);
        self.last = Some(viewport);
        Some(viewport)
    }
}

#[cfg(test)]
mod tests {
    use super::ResizeWatcher;
    use keepsake_core::Viewport;

    #[test]
    fn reports_first_size_and_changes_only() {
        let mut watcher = ResizeWatcher::new();
        assert_eq!(
            watcher.observe(800.0, 600.0),
            Some(Viewport { width: 800.0, height: 600.0 })
        );
        assert_eq!(watcher.observe(800.2, 600.0), None);
        assert_eq!(
            watcher.observe(1024.0, 600.0),
            Some(Viewport { width: 1024.0, height: 600.0 })
        );
        assert_eq!(watcher.current(), Some(Viewport { width: 1024.0, height: 600.0 }));
    }

    #[test]
    fn degenerate_sizes_are_ignored() {
        let mut watcher = ResizeWatcher::new();
        assert_eq!(watcher.observe(f32::NAN, 10.0), None);
        assert_eq!(watcher.observe(-5.0, 10.0), None);
        assert_eq!(watcher.current(), None);
    }
}
