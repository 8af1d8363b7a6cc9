use std::fmt;
use std::str::FromStr;

/// A scrollable region of the page, addressed by its DOM id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    Menu,
    Franchise,
    Gallery,
    Contact,
}

/// Raised when a string does not name one of the page sections
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown section: {0}")]
pub struct UnknownSection(pub String);

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::Menu,
        SectionId::Franchise,
        SectionId::Gallery,
        SectionId::Contact,
    ];

    /// Footer quick links skip the gallery.
    pub const QUICK_LINKS: [SectionId; 4] = [
        SectionId::Home,
        SectionId::Menu,
        SectionId::Franchise,
        SectionId::Contact,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Menu => "menu",
            SectionId::Franchise => "franchise",
            SectionId::Gallery => "gallery",
            SectionId::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::Menu => "Menu",
            SectionId::Franchise => "Franchise",
            SectionId::Gallery => "Gallery",
            SectionId::Contact => "Contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}
