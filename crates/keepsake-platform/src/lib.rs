//! Host-facing pieces so `keepsake-core` stays free of threads and windows.

mod autoplay;
mod resize;
mod ticker;

pub use autoplay::AutoplayDriver;
pub use resize::ResizeWatcher;
pub use ticker::Ticker;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Whatever the decorations are painted onto.
pub trait DisplaySurface: Send + Sync {
    /// Current drawable size in logical pixels, as the host reports it.
    fn surface_size(&self) -> (f32, f32);
    /// Asks the host to schedule another frame. Safe to call from any thread.
    fn request_redraw(&self);
}
