//! Scroll-spy: tracks which regions are on screen and which one was entered last.
//!
//! The tracker never talks to the DOM itself. It is handed an [`IntersectionSource`]
//! (an `IntersectionObserver` in the browser, a synthetic feed in tests) and folds the
//! batches that source delivers into a [`SpyState`].

use std::{cell::RefCell, collections::BTreeMap, rc::Rc};

use crate::region::Region;

/// Fraction of a region that must be on screen for it to count as visible. Measured
/// against the region's own box, or against the viewport for regions too tall to
/// ever reach it on their own.
pub const VISIBILITY_THRESHOLD: f64 = 0.3;

/// Ratios at which the host should report a region: every 5%, which includes
/// [`VISIBILITY_THRESHOLD`]. Tall regions cross the viewport threshold between the
/// points of their own box, so a single threshold is not enough.
pub fn observer_thresholds() -> impl Iterator<Item = f64> {
    (0..=20).map(|step| f64::from(step) / 20.0)
}

/// One observation of one element, as reported by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionEntry {
    /// Element id of the observed target.
    pub target: String,
    pub is_intersecting: bool,
    /// Visible fraction of the target, `0.0..=1.0`.
    pub ratio: f64,
    /// Fraction of the viewport the visible part of the target covers.
    pub root_ratio: f64,
}

impl IntersectionEntry {
    pub fn new(target: impl Into<String>, is_intersecting: bool, ratio: f64) -> Self {
        Self {
            target: target.into(),
            is_intersecting,
            ratio,
            root_ratio: 0.0,
        }
    }

    pub fn with_root_ratio(mut self, root_ratio: f64) -> Self {
        self.root_ratio = root_ratio;
        self
    }

    pub fn entering(target: impl Into<String>, ratio: f64) -> Self {
        Self::new(target, true, ratio)
    }

    pub fn leaving(target: impl Into<String>) -> Self {
        Self::new(target, false, 0.0)
    }

    pub fn meets_threshold(&self) -> bool {
        self.is_intersecting
            && (self.ratio >= VISIBILITY_THRESHOLD || self.root_ratio >= VISIBILITY_THRESHOLD)
    }
}

pub type BatchCallback = Box<dyn FnMut(Vec<IntersectionEntry>)>;

/// A stream of intersection batches for a set of regions.
pub trait IntersectionSource {
    /// Start delivering batches for `regions` to `on_batch`.
    fn subscribe(&mut self, regions: &[Region], on_batch: BatchCallback);
    /// Stop delivering batches and release whatever `subscribe` acquired.
    fn unsubscribe(&mut self);
}

/// Region -> "currently visible". Regions never observed read as hidden.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibilityMap(BTreeMap<Region, bool>);

impl VisibilityMap {
    pub fn get(&self, region: Region) -> bool {
        self.0.get(&region).copied().unwrap_or(false)
    }

    /// Returns true if the stored value changed.
    pub fn set(&mut self, region: Region, visible: bool) -> bool {
        self.0.insert(region, visible).unwrap_or(false) != visible
    }

    pub fn visible(&self) -> impl Iterator<Item = Region> + '_ {
        self.0.iter().filter(|(_, v)| **v).map(|(r, _)| *r)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpyState {
    pub visibility: VisibilityMap,
    /// The region most recently seen entering the viewport.
    pub current: Region,
}

impl SpyState {
    pub fn is_visible(&self, region: Region) -> bool {
        self.visibility.get(region)
    }

    /// Fold one batch into the state, in delivery order. A region that goes from
    /// hidden to visible becomes `current`; when several do so in one batch, the last
    /// one processed wins. Reports for regions that were already visible leave
    /// `current` alone.
    ///
    /// Returns whether anything observable changed.
    pub fn apply(&mut self, batch: &[IntersectionEntry]) -> bool {
        let before = self.clone();
        for entry in batch {
            let region = match entry.target.parse::<Region>() {
                Ok(region) => region,
                Err(e) => {
                    log::debug!("skipping intersection entry: {e}");
                    continue;
                }
            };
            let visible = entry.meets_threshold();
            if self.visibility.set(region, visible) && visible {
                self.current = region;
            }
        }
        *self != before
    }
}

/// Owns the subscription to an [`IntersectionSource`] and the [`SpyState`] it feeds.
///
/// The subscription is released by [`VisibilityTracker::disconnect`] or when the
/// tracker is dropped, whichever comes first.
pub struct VisibilityTracker<S: IntersectionSource> {
    source: S,
    state: Rc<RefCell<SpyState>>,
    observing: bool,
}

impl<S: IntersectionSource> VisibilityTracker<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: Rc::new(RefCell::new(SpyState::default())),
            observing: false,
        }
    }

    /// Subscribe to `regions`. `on_change` receives a snapshot after every batch
    /// that changed the state. Observing nothing leaves the tracker inert.
    pub fn observe<F>(&mut self, regions: &[Region], mut on_change: F)
    where
        F: FnMut(&SpyState) + 'static,
    {
        self.disconnect();
        if regions.is_empty() {
            log::debug!("no regions to observe");
            return;
        }

        let state = Rc::clone(&self.state);
        self.source.subscribe(
            regions,
            Box::new(move |batch| {
                let snapshot = {
                    let mut state = state.borrow_mut();
                    if !state.apply(&batch) {
                        return;
                    }
                    state.clone()
                };
                log::trace!(
                    "visible: {:?}, current: {}",
                    snapshot.visibility.visible().collect::<Vec<_>>(),
                    snapshot.current
                );
                on_change(&snapshot);
            }),
        );
        self.observing = true;
    }

    pub fn state(&self) -> SpyState {
        self.state.borrow().clone()
    }

    pub fn is_observing(&self) -> bool {
        self.observing
    }

    pub fn disconnect(&mut self) {
        if self.observing {
            self.source.unsubscribe();
            self.observing = false;
        }
    }
}

impl<S: IntersectionSource> Drop for VisibilityTracker<S> {
    fn drop(&mut self) {
        self.disconnect();
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[derive(Default)]
    pub(crate) struct FeedInner {
        pub callback: Option<BatchCallback>,
        pub regions: Vec<Region>,
        pub subscribes: usize,
        pub unsubscribes: usize,
    }

    /// Synthetic source; the test keeps a [`Feed`] handle to push batches through.
    #[derive(Default, Clone)]
    pub(crate) struct Feed(pub Rc<RefCell<FeedInner>>);

    impl Feed {
        pub fn emit(&self, batch: Vec<IntersectionEntry>) {
            // take the callback out so it can run without holding the borrow
            let callback = self.0.borrow_mut().callback.take();
            if let Some(mut callback) = callback {
                callback(batch);
                let mut inner = self.0.borrow_mut();
                if inner.callback.is_none() && inner.subscribes > inner.unsubscribes {
                    inner.callback = Some(callback);
                }
            }
        }

        pub fn is_subscribed(&self) -> bool {
            self.0.borrow().callback.is_some()
        }
    }

    impl IntersectionSource for Feed {
        fn subscribe(&mut self, regions: &[Region], on_batch: BatchCallback) {
            let mut inner = self.0.borrow_mut();
            inner.callback = Some(on_batch);
            inner.regions = regions.to_vec();
            inner.subscribes += 1;
        }

        fn unsubscribe(&mut self) {
            let mut inner = self.0.borrow_mut();
            inner.callback = None;
            inner.unsubscribes += 1;
        }
    }

    fn tracker() -> (VisibilityTracker<Feed>, Feed, Rc<RefCell<Vec<SpyState>>>) {
        let feed = Feed::default();
        let mut tracker = VisibilityTracker::new(feed.clone());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        tracker.observe(&Region::ALL, move |s| sink.borrow_mut().push(s.clone()));
        (tracker, feed, seen)
    }

    #[test]
    fn test_initial_state() {
        let (tracker, feed, seen) = tracker();
        let state = tracker.state();
        assert_eq!(state.current, Region::Hero);
        for region in Region::ALL {
            assert!(!state.is_visible(region));
        }
        assert_eq!(feed.0.borrow().regions, Region::ALL.to_vec());
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_enter_then_leave_keeps_current() {
        let (tracker, feed, seen) = tracker();

        feed.emit(vec![IntersectionEntry::entering("about", 0.45)]);
        let state = tracker.state();
        assert!(state.is_visible(Region::About));
        assert_eq!(state.current, Region::About);

        feed.emit(vec![IntersectionEntry::leaving("about")]);
        let state = tracker.state();
        assert!(!state.is_visible(Region::About));
        assert_eq!(state.current, Region::About);

        assert_eq!(seen.borrow().len(), 2);
        assert_eq!(seen.borrow()[1], state);
    }

    #[test]
    fn test_threshold() {
        let (tracker, feed, _) = tracker();

        // intersecting, but not enough of the region is showing
        feed.emit(vec![IntersectionEntry::entering("projects", 0.29)]);
        assert!(!tracker.state().is_visible(Region::Projects));
        assert_eq!(tracker.state().current, Region::Hero);

        feed.emit(vec![IntersectionEntry::entering("projects", VISIBILITY_THRESHOLD)]);
        assert!(tracker.state().is_visible(Region::Projects));
        assert_eq!(tracker.state().current, Region::Projects);

        // a ratio above the threshold without the intersecting flag is not visible
        feed.emit(vec![IntersectionEntry::new("projects", false, 0.5)]);
        assert!(!tracker.state().is_visible(Region::Projects));
    }

    #[test]
    fn test_last_visible_entry_in_batch_wins() {
        let (tracker, feed, _) = tracker();
        feed.emit(vec![
            IntersectionEntry::entering("about", 0.6),
            IntersectionEntry::entering("experience", 0.35),
        ]);
        let state = tracker.state();
        assert!(state.is_visible(Region::About));
        assert!(state.is_visible(Region::Experience));
        assert_eq!(
            state.visibility.visible().collect::<Vec<_>>(),
            vec![Region::About, Region::Experience]
        );
        assert_eq!(state.current, Region::Experience);

        // already visible, so neither claims current
        feed.emit(vec![
            IntersectionEntry::entering("experience", 0.9),
            IntersectionEntry::entering("about", 0.8),
        ]);
        assert_eq!(tracker.state().current, Region::Experience);

        feed.emit(vec![
            IntersectionEntry::leaving("experience"),
            IntersectionEntry::leaving("about"),
        ]);
        feed.emit(vec![
            IntersectionEntry::entering("experience", 0.9),
            IntersectionEntry::entering("about", 0.3),
        ]);
        assert_eq!(tracker.state().current, Region::About);

        // leaving entries never claim current
        feed.emit(vec![
            IntersectionEntry::entering("resume", 0.5),
            IntersectionEntry::leaving("about"),
        ]);
        assert_eq!(tracker.state().current, Region::Resume);
    }

    #[test]
    fn test_latest_notification_decides_visibility() {
        let (tracker, feed, _) = tracker();
        feed.emit(vec![
            IntersectionEntry::entering("contact", 0.8),
            IntersectionEntry::leaving("contact"),
        ]);
        assert!(!tracker.state().is_visible(Region::Contact));
        assert_eq!(tracker.state().current, Region::Contact);

        feed.emit(vec![IntersectionEntry::entering("contact", 0.8)]);
        assert!(tracker.state().is_visible(Region::Contact));
    }

    #[test]
    fn test_unknown_targets_are_skipped() {
        let (tracker, feed, seen) = tracker();
        feed.emit(vec![IntersectionEntry::entering("blog", 1.0)]);
        assert_eq!(tracker.state(), SpyState::default());
        assert!(seen.borrow().is_empty());

        feed.emit(vec![
            IntersectionEntry::entering("blog", 1.0),
            IntersectionEntry::entering("resume", 1.0),
        ]);
        assert_eq!(tracker.state().current, Region::Resume);
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_unchanged_batches_are_not_published() {
        let (_tracker, feed, seen) = tracker();
        feed.emit(vec![IntersectionEntry::entering("hero", 1.0)]);
        feed.emit(vec![IntersectionEntry::entering("hero", 0.9)]);
        feed.emit(vec![]);
        assert_eq!(seen.borrow().len(), 1);

        // hero is still visible, so a fresh report for it doesn't take current back
        feed.emit(vec![IntersectionEntry::entering("about", 0.5)]);
        feed.emit(vec![IntersectionEntry::entering("hero", 0.5)]);
        assert_eq!(seen.borrow().len(), 2);
        assert_eq!(tracker_current(&seen), Region::About);

        feed.emit(vec![IntersectionEntry::leaving("hero")]);
        feed.emit(vec![IntersectionEntry::entering("hero", 0.5)]);
        assert_eq!(seen.borrow().len(), 4);
        assert_eq!(tracker_current(&seen), Region::Hero);
    }

    fn tracker_current(seen: &Rc<RefCell<Vec<SpyState>>>) -> Region {
        seen.borrow().last().map(|s| s.current).unwrap_or_default()
    }

    #[test]
    fn test_tall_region_counts_viewport_coverage() {
        let (tracker, feed, _) = tracker();

        // taller than the viewport: only a quarter of it fits, but it fills the screen
        feed.emit(vec![
            IntersectionEntry::entering("experience", 0.25).with_root_ratio(1.0)
        ]);
        let state = tracker.state();
        assert!(state.is_visible(Region::Experience));
        assert_eq!(state.current, Region::Experience);

        // just peeking in at the bottom
        feed.emit(vec![
            IntersectionEntry::entering("experience", 0.05).with_root_ratio(0.2)
        ]);
        assert!(!tracker.state().is_visible(Region::Experience));

        feed.emit(vec![
            IntersectionEntry::entering("experience", 0.1).with_root_ratio(VISIBILITY_THRESHOLD)
        ]);
        assert!(tracker.state().is_visible(Region::Experience));

        // coverage without the intersecting flag still doesn't count
        feed.emit(vec![
            IntersectionEntry::new("experience", false, 0.0).with_root_ratio(0.5)
        ]);
        assert!(!tracker.state().is_visible(Region::Experience));
    }

    #[test]
    fn test_observer_thresholds() {
        let thresholds = observer_thresholds().collect::<Vec<_>>();
        assert_eq!(thresholds.len(), 21);
        assert_eq!(thresholds.first(), Some(&0.0));
        assert_eq!(thresholds.last(), Some(&1.0));
        assert!(thresholds.contains(&VISIBILITY_THRESHOLD));
        assert!(thresholds.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_no_regions_is_inert() {
        let feed = Feed::default();
        let mut tracker = VisibilityTracker::new(feed.clone());
        tracker.observe(&[], |_| panic!("nothing should be published"));
        assert!(!tracker.is_observing());
        assert_eq!(feed.0.borrow().subscribes, 0);

        feed.emit(vec![IntersectionEntry::entering("about", 1.0)]);
        tracker.disconnect();
        assert_eq!(feed.0.borrow().unsubscribes, 0);
        assert_eq!(tracker.state(), SpyState::default());
    }

    #[test]
    fn test_disconnect_and_drop_unsubscribe_once() {
        let (mut tracker, feed, seen) = tracker();
        assert!(feed.is_subscribed());

        tracker.disconnect();
        tracker.disconnect();
        assert!(!feed.is_subscribed());
        assert_eq!(feed.0.borrow().unsubscribes, 1);

        feed.emit(vec![IntersectionEntry::entering("about", 1.0)]);
        assert!(seen.borrow().is_empty());
        drop(tracker);
        assert_eq!(feed.0.borrow().unsubscribes, 1);

        let (tracker, feed, _) = self::tracker();
        drop(tracker);
        assert!(!feed.is_subscribed());
        assert_eq!(feed.0.borrow().unsubscribes, 1);
    }

    #[test]
    fn test_observe_again_replaces_subscription() {
        let (mut tracker, feed, _) = tracker();
        tracker.observe(&[Region::About], |_| {});
        let inner = feed.0.borrow();
        assert_eq!(inner.subscribes, 2);
        assert_eq!(inner.unsubscribes, 1);
        assert_eq!(inner.regions, vec![Region::About]);
    }
}
