use std::time::Duration;

use thiserror::Error;

pub type Task = Box<dyn Fn() + Send + Sync + 'static>;
pub type OnceTask = Box<dyn FnOnce() + Send + Sync + 'static>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Couldn't register timer: {0}")]
    Register(String),
}

/// Source of repeating and one-shot timers.
///
/// The browser implementation sits on top of the window's timer functions;
/// tests drive a [`manual::ManualScheduler`] with a virtual clock instead.
pub trait Scheduler: Clone + Send + Sync + 'static {
    type Handle: Send + Sync + 'static;

    fn every(&self, period: Duration, task: Task) -> Result<Self::Handle, ScheduleError>;

    fn once(&self, delay: Duration, task: OnceTask) -> Result<(), ScheduleError>;

    fn cancel(&self, handle: Self::Handle);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = leptos::prelude::IntervalHandle;

    fn every(&self, period: Duration, task: Task) -> Result<Self::Handle, ScheduleError> {
        leptos::prelude::set_interval_with_handle(move || task(), period)
            .map_err(|e| ScheduleError::Register(format!("{e:?}")))
    }

    fn once(&self, delay: Duration, task: OnceTask) -> Result<(), ScheduleError> {
        leptos::prelude::set_timeout_with_handle(move || task(), delay)
            .map(|_| ())
            .map_err(|e| ScheduleError::Register(format!("{e:?}")))
    }

    fn cancel(&self, handle: Self::Handle) {
        handle.clear();
    }
}


#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::manual::ManualScheduler;
    use super::*;

    #[test]
    fn test_repeating_timer_fires_each_period() {
        let sched = ManualScheduler::new();
        let count = Arc::new(AtomicUsize::new(0));
        let c = count.clone();
        sched
            .every(
                Duration::from_millis(100),
                Box::new(move || {
                    c.fetch_add(1, Ordering::SeqCst);
                }),
            )
            .unwrap();

        sched.advance_to_ms(99);
        assert_eq!(count.load(Ordering::SeqCst), 0);
        sched.advance_to_ms(350);
        assert_eq!(count.load(Ordering::SeqCst), 3);
        assert_eq!(sched.now(), Duration::from_millis(350));
    }

    #[test]
    fn test_cancel_stops_repeating_timer() {
        let sched = ManualScheduler::new();
        let count = Arc::new(AtomicUsize::new(0));
        let c = count.clone();
        let handle = sched
            .every(
                Duration::from_millis(100),
                Box::new(move || {
                    c.fetch_add(1, Ordering::SeqCst);
                }),
            )
            .unwrap();
        sched.advance_to_ms(100);
        sched.cancel(handle);
        sched.advance_to_ms(1000);
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn test_once_scheduled_from_inside_a_task() {
        let sched = ManualScheduler::new();
        let count = Arc::new(AtomicUsize::new(0));
        let inner = sched.clone();
        let c = count.clone();
        sched
            .once(
                Duration::from_millis(10),
                Box::new(move || {
                    let c = c.clone();
                    inner
                        .once(
                            Duration::from_millis(5),
                            Box::new(move || {
                                c.fetch_add(1, Ordering::SeqCst);
                            }),
                        )
                        .unwrap();
                }),
            )
            .unwrap();
        sched.advance_to_ms(14);
        assert_eq!(count.load(Ordering::SeqCst), 0);
        sched.advance_to_ms(15);
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn test_refusing_scheduler_reports_error() {
        let sched = ManualScheduler::refusing();
        let res = sched.every(Duration::from_millis(1), Box::new(|| {}));
        assert!(matches!(res, Err(ScheduleError::Register(_))));
    }
}
