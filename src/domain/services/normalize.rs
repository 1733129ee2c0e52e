//! Title normalization shared by the sort and search engines

use crate::domain::entities::record::{FAVOURITE_MARK, HIDDEN_MARK, NOT_INSTALLED_MARK};
use crate::domain::value_objects::Articles;

/// Strip list decorations from a display title.
///
/// Removes one leading `*` and any trailing ` [F]` / ` [H]` markers.
pub fn undecorate(display: &str) -> &str {
    let mut title = display.strip_prefix(NOT_INSTALLED_MARK).unwrap_or(display);
    loop {
        if let Some(stripped) = title.strip_suffix(HIDDEN_MARK) {
            title = stripped;
        } else if let Some(stripped) = title.strip_suffix(FAVOURITE_MARK) {
            title = stripped;
        } else {
            return title;
        }
    }
}

/// Comparison key for alphabetical ordering.
///
/// Whitespace-separated tokens joined by single spaces, lower-cased, with a
/// leading article dropped when `ignore_article` is set and more tokens follow.
pub fn sort_key(title: &str, articles: &Articles, ignore_article: bool) -> String {
    let mut tokens = title.split_whitespace().peekable();
    if ignore_article {
        if let Some(first) = tokens.peek().copied() {
            if articles.is_article(first) && title.split_whitespace().nth(1).is_some() {
                tokens.next();
            }
        }
    }
    tokens.collect::<Vec<_>>().join(" ").to_lowercase()
}
