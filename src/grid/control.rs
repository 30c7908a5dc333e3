//! Cancellation and progress reporting for a running scan

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Number of finished cells out of the grid total
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanProgress {
    pub completed: usize,
    pub total: usize,
}

impl ScanProgress {
    /// Completed share in `[0, 1]`
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        self.completed as f64 / self.total as f64
    }
}

type ProgressCallback = Box<dyn Fn(ScanProgress) + Send + Sync>;

/// Cloneable cancel switch detached from its [`ScanControl`]
///
/// Lets a progress callback stop the scan that reports to it.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    cancelled: Arc<AtomicBool>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }
}

/// Handle shared between a scan and its caller
///
/// `cancel()` may be called from any thread. A progress callback cancels
/// through a [`CancelHandle`] taken before the callback is installed. The
/// scan checks the flag before each cell: cells already running finish, no
/// new cell starts.
///
/// # Example
///
/// ```rust
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
/// use chaos_rs::grid::ScanControl;
///
/// let seen = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&seen);
///
/// let control = ScanControl::new().with_progress(move |progress| {
///     counter.store(progress.completed, Ordering::Relaxed);
/// });
/// assert!(!control.is_cancelled());
///
/// control.cancel();
/// assert!(control.is_cancelled());
///
/// // Stop after the first cell
/// let control = ScanControl::new();
/// let handle = control.cancel_handle();
/// let control = control.with_progress(move |_| handle.cancel());
/// ```
#[derive(Default)]
pub struct ScanControl {
    cancelled: Arc<AtomicBool>,
    on_progress: Option<ProgressCallback>,
}

impl ScanControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Call `callback` after each completed cell
    ///
    /// With the `parallel` feature the callback runs on worker threads, in
    /// completion order.
    pub fn with_progress<F>(mut self, callback: F) -> Self
    where
        F: Fn(ScanProgress) + Send + Sync + 'static,
    {
        self.on_progress = Some(Box::new(callback));
        self
    }

    /// Switch sharing this control's cancel flag
    pub fn cancel_handle(&self) -> CancelHandle {
        CancelHandle { cancelled: Arc::clone(&self.cancelled) }
    }

    /// Request the scan to stop
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    pub(crate) fn report(&self, progress: ScanProgress) {
        if let Some(callback) = &self.on_progress {
            callback(progress);
        }
    }
}

impl fmt::Debug for ScanControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScanControl")
            .field("cancelled", &self.is_cancelled())
            .field("on_progress", &self.on_progress.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_fraction() {
        assert_eq!(ScanProgress { completed: 4, total: 16 }.fraction(), 0.25);
        assert_eq!(ScanProgress { completed: 0, total: 0 }.fraction(), 1.0);
    }

    #[test]
    fn test_report_invokes_callback() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let control = ScanControl::new().with_progress(move |_| {
            counter.fetch_add(1, Ordering::Relaxed);
        });

        control.report(ScanProgress { completed: 1, total: 2 });
        control.report(ScanProgress { completed: 2, total: 2 });

        assert_eq!(calls.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn test_report_without_callback_is_noop() {
        ScanControl::new().report(ScanProgress { completed: 1, total: 1 });
    }

    #[test]
    fn test_cancel_handle_shares_flag() {
        let control = ScanControl::new();
        let handle = control.cancel_handle();
        let control = control.with_progress(move |progress| {
            if progress.completed == 2 {
                handle.cancel();
            }
        });

        control.report(ScanProgress { completed: 1, total: 4 });
        assert!(!control.is_cancelled());

        control.report(ScanProgress { completed: 2, total: 4 });
        assert!(control.is_cancelled());
    }

    #[test]
    fn test_debug_output() {
        let control = ScanControl::new();
        control.cancel();
        let debug = format!("{control:?}");
        assert!(debug.contains("cancelled: true"));
    }
}
