//! SortSpec value object - composable ordering flags

use serde::{Deserialize, Serialize};

/// Flags selecting the key precedence used by the sort engine
///
/// | fave | alpha | inst | keys                                          |
/// |------|-------|------|-----------------------------------------------|
/// | T    | T     | T    | installed, favourite, title                   |
/// | T    | T     | F    | favourite, title                              |
/// | T    | F     | T    | installed, favourite, frequency, title        |
/// | T    | F     | F    | favourite, frequency, title                   |
/// | F    | T     | T    | installed, title                              |
/// | F    | T     | F    | title                                         |
/// | F    | F     | T    | installed, frequency, title                   |
/// | F    | F     | F    | frequency, title                              |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SortSpec {
    /// Alphabetical instead of frequency ordering
    pub alpha_sort: bool,
    /// Favourites first
    pub fave_sort: bool,
    /// Installed first
    pub inst_sort: bool,
    /// Drop a leading article before comparing titles
    pub ignore_article: bool,
}

impl SortSpec {
    /// Plain alphabetical ordering
    pub fn alphabetical() -> Self {
        Self {
            alpha_sort: true,
            fave_sort: false,
            inst_sort: false,
            ignore_article: false,
        }
    }

    /// Pure frequency ordering
    pub fn by_frequency() -> Self {
        Self {
            alpha_sort: false,
            fave_sort: false,
            inst_sort: false,
            ignore_article: false,
        }
    }

    /// Builder: favourites first
    pub fn with_fave_sort(mut self, on: bool) -> Self {
        self.fave_sort = on;
        self
    }

    /// Builder: installed first
    pub fn with_inst_sort(mut self, on: bool) -> Self {
        self.inst_sort = on;
        self
    }

    /// Builder: ignore leading article
    pub fn with_ignore_article(mut self, on: bool) -> Self {
        self.ignore_article = on;
        self
    }
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            alpha_sort: false,
            fave_sort: true,
            inst_sort: true,
            ignore_article: true,
        }
    }
}
