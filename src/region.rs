use std::{fmt, str::FromStr};

use thiserror::Error;

/// An anchorable section of the page. The set is fixed by the document structure.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    #[default]
    Hero,
    About,
    Experience,
    Projects,
    Resume,
    Contact,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown region: {0}")]
pub struct ParseRegionError(pub String);

impl Region {
    /// Every region in document order.
    pub const ALL: [Region; 6] = [
        Region::Hero,
        Region::About,
        Region::Experience,
        Region::Projects,
        Region::Resume,
        Region::Contact,
    ];

    /// The element id of the region's `<section>`.
    pub fn id(self) -> &'static str {
        match self {
            Region::Hero => "hero",
            Region::About => "about",
            Region::Experience => "experience",
            Region::Projects => "projects",
            Region::Resume => "resume",
            Region::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Region::Hero => "Home",
            Region::About => "About",
            Region::Experience => "Experience",
            Region::Projects => "Projects",
            Region::Resume => "Resume",
            Region::Contact => "Contact",
        }
    }

    /// The hero is reached through the brand name rather than a nav item.
    pub fn in_nav(self) -> bool {
        self != Region::Hero
    }

    pub fn navigable() -> impl Iterator<Item = Region> {
        Self::ALL.into_iter().filter(|r| r.in_nav())
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl AsRef<str> for Region {
    fn as_ref(&self) -> &str {
        self.id()
    }
}

impl FromStr for Region {
    type Err = ParseRegionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.id() == s)
            .ok_or_else(|| ParseRegionError(s.to_string()))
    }
}
