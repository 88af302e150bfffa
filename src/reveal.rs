/// Fraction of an element that has to be on screen before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// One visibility sample from whatever is watching the element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visibility {
    pub intersecting: bool,
    pub ratio: f64,
}

impl Visibility {
    pub fn new(intersecting: bool, ratio: f64) -> Self {
        Self {
            intersecting,
            ratio,
        }
    }

    pub fn passes_threshold(&self) -> bool {
        self.intersecting && self.ratio >= REVEAL_THRESHOLD
    }
}

/// Something that can stop delivering visibility samples.
pub trait WatchHandle {
    fn disconnect(&self);
}

impl<F: Fn()> WatchHandle for F {
    fn disconnect(&self) {
        self()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RevealLatch {
    state: RevealState,
}

impl RevealLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_revealed(&self) -> bool {
        self.state == RevealState::Revealed
    }

    /// Feed a sample. Returns `true` only for the sample that reveals the
    /// element, which is also the only time `watcher` is disconnected.
    pub fn observe(&mut self, sample: Visibility, watcher: &impl WatchHandle) -> bool {
        if self.is_revealed() || !sample.passes_threshold() {
            return false;
        }
        self.state = RevealState::Revealed;
        watcher.disconnect();
        true
    }

    /// Feed a batch of samples delivered together, in order. Returns the
    /// sample that revealed the element, if any.
    pub fn observe_all(
        &mut self,
        samples: impl IntoIterator<Item = Visibility>,
        watcher: &impl WatchHandle,
    ) -> Option<Visibility> {
        samples
            .into_iter()
            .find(|sample| self.observe(*sample, watcher))
    }
}

/// How far below its resting place a hidden block starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOffset {
    Small,
    Large,
}

pub fn reveal_classes(revealed: bool, offset: RevealOffset) -> &'static str {
    match (revealed, offset) {
        (true, _) => "opacity-100 translate-y-0",
        (false, RevealOffset::Small) => "opacity-0 translate-y-5",
        (false, RevealOffset::Large) => "opacity-0 translate-y-12",
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    struct CountingWatcher {
        disconnects: Cell<usize>,
    }

    impl CountingWatcher {
        fn new() -> Self {
            Self {
                disconnects: Cell::new(0),
            }
        }
    }

    impl WatchHandle for CountingWatcher {
        fn disconnect(&self) {
            self.disconnects.set(self.disconnects.get() + 1);
        }
    }

    #[test]
    fn test_starts_hidden() {
        let latch = RevealLatch::new();
        assert_eq!(latch.state(), RevealState::Hidden);
        assert!(!latch.is_revealed());
    }

    #[test]
    fn test_reveals_once() {
        let watcher = CountingWatcher::new();
        let mut latch = RevealLatch::new();

        assert!(latch.observe(Visibility::new(true, 0.25), &watcher));
        assert!(latch.is_revealed());
        assert_eq!(watcher.disconnects.get(), 1);

        // scrolled away and back again
        assert!(!latch.observe(Visibility::new(false, 0.0), &watcher));
        assert!(!latch.observe(Visibility::new(true, 1.0), &watcher));
        assert!(latch.is_revealed());
        assert_eq!(watcher.disconnects.get(), 1);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let watcher = CountingWatcher::new();
        let mut latch = RevealLatch::new();
        assert!(latch.observe(Visibility::new(true, REVEAL_THRESHOLD), &watcher));
    }

    #[test]
    fn test_below_threshold_stays_hidden() {
        let watcher = CountingWatcher::new();
        let mut latch = RevealLatch::new();

        assert!(!latch.observe(Visibility::new(true, 0.05), &watcher));
        assert!(!latch.observe(Visibility::new(false, 0.5), &watcher));
        assert_eq!(latch.state(), RevealState::Hidden);
        assert_eq!(watcher.disconnects.get(), 0);
    }

    #[test]
    fn test_batch_reveals_on_any_passing_sample() {
        let watcher = CountingWatcher::new();
        let mut latch = RevealLatch::new();
        let batch = [Visibility::new(false, 0.0), Visibility::new(true, 0.3)];

        assert_eq!(
            latch.observe_all(batch, &watcher),
            Some(Visibility::new(true, 0.3))
        );
        assert!(latch.is_revealed());
        assert_eq!(watcher.disconnects.get(), 1);
    }

    #[test]
    fn test_batch_disconnects_once() {
        let watcher = CountingWatcher::new();
        let mut latch = RevealLatch::new();
        let batch = [
            Visibility::new(true, 0.5),
            Visibility::new(true, 1.0),
            Visibility::new(false, 0.0),
        ];

        assert!(latch.observe_all(batch, &watcher).is_some());
        assert!(latch.observe_all(batch, &watcher).is_none());
        assert_eq!(watcher.disconnects.get(), 1);
    }

    #[test]
    fn test_empty_batch_stays_hidden() {
        let watcher = CountingWatcher::new();
        let mut latch = RevealLatch::new();
        assert!(latch.observe_all(Vec::new(), &watcher).is_none());
        assert!(!latch.is_revealed());
    }

    #[test]
    fn test_closure_watch_handle() {
        let calls = Cell::new(0);
        let stop = || calls.set(calls.get() + 1);
        let mut latch = RevealLatch::new();
        latch.observe(Visibility::new(true, 0.5), &stop);
        latch.observe(Visibility::new(true, 0.5), &stop);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_classes() {
        assert_eq!(
            reveal_classes(true, RevealOffset::Large),
            "opacity-100 translate-y-0"
        );
        assert!(reveal_classes(false, RevealOffset::Small).contains("opacity-0"));
    }
}
