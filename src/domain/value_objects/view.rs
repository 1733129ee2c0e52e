//! View and group identifiers

use std::fmt;

use crate::domain::entities::Platform;

/// A named subset of the catalog
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ViewKind {
    All,
    Favourites,
    New,
    Hidden,
    NotInstalled,
    /// Replaced wholesale by each committed search
    SearchResults,
}

impl ViewKind {
    /// Views derived from record flags (search results are not)
    pub const DERIVED: [ViewKind; 5] = [
        ViewKind::All,
        ViewKind::Favourites,
        ViewKind::New,
        ViewKind::Hidden,
        ViewKind::NotInstalled,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            ViewKind::All => "All",
            ViewKind::Favourites => "Favourites",
            ViewKind::New => "New",
            ViewKind::Hidden => "Hidden",
            ViewKind::NotInstalled => "Not Installed",
            ViewKind::SearchResults => "Search Results",
        }
    }
}

/// A listable tab: either a platform group or a view
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Group {
    Platform(Platform),
    View(ViewKind),
}

impl From<Platform> for Group {
    fn from(platform: Platform) -> Self {
        Group::Platform(platform)
    }
}

impl From<ViewKind> for Group {
    fn from(kind: ViewKind) -> Self {
        Group::View(kind)
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Group::Platform(p) => write!(f, "{}", p),
            Group::View(v) => f.write_str(v.display_name()),
        }
    }
}
