use std::sync::Arc;

use leptos::{html::Div, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::reveal::{RevealLatch, Visibility, REVEAL_THRESHOLD};

/// Flips to `true` the first time `target` is at least 10% on screen, then
/// stops watching.
pub fn use_reveal(target: NodeRef<Div>) -> Signal<bool> {
    let (revealed, set_revealed) = signal(false);
    let latch = StoredValue::new(RevealLatch::new());
    let stop = StoredValue::new(None::<Arc<dyn Fn() + Send + Sync>>);

    let UseIntersectionObserverReturn { stop: stop_fn, .. } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            let samples = entries
                .iter()
                .map(|e| Visibility::new(e.is_intersecting(), e.intersection_ratio()))
                .collect::<Vec<_>>();
            let disconnect = || {
                stop.with_value(|s| {
                    if let Some(s) = s {
                        s()
                    }
                })
            };
            let fired = latch
                .try_update_value(|l| l.observe_all(samples, &disconnect))
                .flatten();
            if let Some(sample) = fired {
                log::debug!("revealed section at ratio {:.2}", sample.ratio);
                set_revealed.set(true);
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![REVEAL_THRESHOLD]),
    );
    stop.set_value(Some(Arc::new(stop_fn)));

    revealed.into()
}
