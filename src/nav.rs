/// Something that can bring an element into view by id.
pub trait ScrollHost {
    /// Smoothly scroll the element with `id` into view.
    /// Returns `false`, without scrolling, when there is no such element.
    fn scroll_into_view(&self, id: &str) -> bool;
}

/// Moves the viewport to a region. Fire-and-forget: scroll-spy state catches up on
/// its own once the host reports the new intersections.
#[derive(Debug, Clone, Copy, Default)]
pub struct Navigator<H> {
    host: H,
}

impl<H: ScrollHost> Navigator<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }

    /// Scroll to the element with id `target`; a missing element is a no-op.
    pub fn go_to(&self, target: impl AsRef<str>) {
        let target = target.as_ref();
        if !self.host.scroll_into_view(target) {
            log::debug!("no element with id {target:?} to scroll to");
        }
    }
}
