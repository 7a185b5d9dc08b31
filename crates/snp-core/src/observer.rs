//! Progress reporting and cooperative cancellation.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Receives batch progress.
///
/// `is_cancelled` is checked before each file; `on_progress` is called after
/// each file whether it converted or not.
pub trait ConversionObserver {
    fn on_progress(&mut self, current: usize, total: usize, file_name: &str) {
        let _ = (current, total, file_name);
    }

    fn is_cancelled(&self) -> bool {
        false
    }
}

/// Observer that ignores progress and never cancels.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ConversionObserver for NoProgress {}

/// Any `FnMut(current, total, file_name)` closure is a progress observer.
impl<F> ConversionObserver for F
where
    F: FnMut(usize, usize, &str),
{
    fn on_progress(&mut self, current: usize, total: usize, file_name: &str) {
        self(current, total, file_name);
    }
}

/// Shared flag for cancelling a running batch from another thread.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Pairs a progress callback with a [`CancelFlag`].
pub struct Cancellable<F> {
    progress: F,
    flag: CancelFlag,
}

impl<F> Cancellable<F>
where
    F: FnMut(usize, usize, &str),
{
    pub fn new(progress: F, flag: CancelFlag) -> Self {
        Self { progress, flag }
    }
}

impl<F> ConversionObserver for Cancellable<F>
where
    F: FnMut(usize, usize, &str),
{
    fn on_progress(&mut self, current: usize, total: usize, file_name: &str) {
        (self.progress)(current, total, file_name);
    }

    fn is_cancelled(&self) -> bool {
        self.flag.is_cancelled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_report_progress() {
        let mut seen = Vec::new();
        {
            let mut observer = |current: usize, total: usize, name: &str| {
                seen.push(format!("{current}/{total} {name}"));
            };
            observer.on_progress(1, 2, "a.s2p");
            assert!(!ConversionObserver::is_cancelled(&observer));
        }
        assert_eq!(seen, vec!["1/2 a.s2p"]);
    }

    #[test]
    fn cancel_flag_is_shared() {
        let flag = CancelFlag::new();
        let observer = Cancellable::new(|_: usize, _: usize, _: &str| {}, flag.clone());
        assert!(!observer.is_cancelled());
        flag.cancel();
        assert!(observer.is_cancelled());
    }
}
