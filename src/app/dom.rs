//! Browser-side implementations of the scroll-spy and navigation seams.

use crate::nav::ScrollHost;

#[cfg(feature = "hydrate")]
pub use observer::DomIntersections;

/// Scrolls with `Element::scrollIntoView({ behavior: "smooth" })`.
/// There is nothing to scroll during server rendering, so it reports every id as missing.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomScroll;

impl ScrollHost for DomScroll {
    #[cfg(feature = "hydrate")]
    fn scroll_into_view(&self, id: &str) -> bool {
        use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }

    #[cfg(not(feature = "hydrate"))]
    fn scroll_into_view(&self, _id: &str) -> bool {
        false
    }
}

#[cfg(feature = "hydrate")]
mod observer {
    use js_sys::Array;
    use wasm_bindgen::{prelude::Closure, JsCast, JsValue};
    use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use crate::{
        region::Region,
        spy::{observer_thresholds, BatchCallback, IntersectionEntry, IntersectionSource},
    };

    type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

    /// How much of the viewport the visible part of the target covers.
    fn root_ratio(entry: &IntersectionObserverEntry) -> f64 {
        match entry.root_bounds() {
            Some(root) if root.height() > 0.0 => entry.intersection_rect().height() / root.height(),
            _ => 0.0,
        }
    }

    /// An `IntersectionObserver` watching the region `<section>`s.
    #[derive(Default)]
    pub struct DomIntersections {
        observer: Option<IntersectionObserver>,
        // must outlive the observer, which calls into it
        callback: Option<ObserverCallback>,
    }

    impl IntersectionSource for DomIntersections {
        fn subscribe(&mut self, regions: &[Region], mut on_batch: BatchCallback) {
            self.unsubscribe();
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                log::warn!("no document to observe");
                return;
            };

            let callback = ObserverCallback::new(move |entries: Array, _: IntersectionObserver| {
                let batch = entries
                    .iter()
                    .map(|entry| {
                        let entry = entry.unchecked_into::<IntersectionObserverEntry>();
                        IntersectionEntry::new(
                            entry.target().id(),
                            entry.is_intersecting(),
                            entry.intersection_ratio(),
                        )
                        .with_root_ratio(root_ratio(&entry))
                    })
                    .collect();
                on_batch(batch);
            });

            let options = IntersectionObserverInit::new();
            let thresholds = observer_thresholds()
                .map(JsValue::from_f64)
                .collect::<Array>();
            options.set_threshold(&thresholds);
            let observer = match IntersectionObserver::new_with_options(
                callback.as_ref().unchecked_ref(),
                &options,
            ) {
                Ok(observer) => observer,
                Err(e) => {
                    log::warn!("couldn't create IntersectionObserver: {e:?}");
                    return;
                }
            };

            let mut observed = 0;
            for region in regions {
                if let Some(el) = document.get_element_by_id(region.id()) {
                    observer.observe(&el);
                    observed += 1;
                }
            }
            log::debug!("observing {observed} of {} regions", regions.len());

            self.observer = Some(observer);
            self.callback = Some(callback);
        }

        fn unsubscribe(&mut self) {
            if let Some(observer) = self.observer.take() {
                observer.disconnect();
            }
            self.callback = None;
        }
    }
}
