//! The state-dependent part of the page, computed from one immutable snapshot.
//!
//! The Leptos components in `app` only read a [`Page`]; every decision that depends on
//! scroll-spy or form state (which sections are revealed, which nav item is active,
//! where the send button points) is made here.

use crate::{contact::ContactForm, content::Portfolio, region::Region, spy::SpyState};

/// Everything the page depends on besides static content.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageState {
    pub spy: SpyState,
    pub form: ContactForm,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub brand: String,
    pub nav: Vec<NavItem>,
    pub sections: Vec<Reveal>,
    pub mail_link: String,
    pub copyright: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub region: Region,
    pub active: bool,
}

impl NavItem {
    pub fn label(&self) -> &'static str {
        self.region.label()
    }

    pub fn class(&self) -> &'static str {
        if self.active {
            "transition-colors hover:text-gray-700 text-black"
        } else {
            "transition-colors hover:text-gray-700 text-gray-500"
        }
    }
}

/// Fade/slide-in state of one section. Driven only by visibility, so a section
/// stays revealed while it is on screen and hides again once it leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    pub region: Region,
    pub revealed: bool,
}

impl Reveal {
    pub fn class(&self) -> &'static str {
        // the hero animates immediately, the rest wait a beat
        match (self.region == Region::Hero, self.revealed) {
            (true, true) => "transition-all duration-1000 opacity-100 translate-y-0",
            (true, false) => "transition-all duration-1000 opacity-0 translate-y-8",
            (false, true) => "transition-all duration-1000 delay-300 opacity-100 translate-y-0",
            (false, false) => "transition-all duration-1000 delay-300 opacity-0 translate-y-8",
        }
    }
}

impl Page {
    pub fn reveal(&self, region: Region) -> Reveal {
        self.sections
            .iter()
            .copied()
            .find(|r| r.region == region)
            .unwrap_or(Reveal {
                region,
                revealed: false,
            })
    }

    pub fn active(&self) -> Option<Region> {
        self.nav.iter().find(|item| item.active).map(|item| item.region)
    }
}

pub fn render(state: &PageState, content: &Portfolio) -> Page {
    let nav = Region::navigable()
        .map(|region| NavItem {
            region,
            active: state.spy.current == region,
        })
        .collect();
    let sections = Region::ALL
        .into_iter()
        .map(|region| Reveal {
            region,
            revealed: state.spy.is_visible(region),
        })
        .collect();

    Page {
        brand: content.profile.name.clone(),
        nav,
        sections,
        mail_link: state.form.mail_link(&content.contact.email),
        copyright: content.copyright(),
    }
}
