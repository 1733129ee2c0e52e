//! SearchQuery value object - represents a search query
//!
//! Encapsulates search query text and options.

/// A search query with options
#[derive(Clone, Debug, PartialEq)]
pub struct SearchQuery {
    /// The raw query text
    pub text: String,
    /// Trimmed, lower-cased version for matching
    normalized: String,
    /// Stop scanning once this many matches were collected
    pub max_results: Option<usize>,
    /// Non-interactive mode: an exact title or alias hit is returned alone
    pub single_result: bool,
}

impl SearchQuery {
    /// Create a new unbounded search query
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let normalized = text.trim().to_lowercase();

        Self {
            text,
            normalized,
            max_results: None,
            single_result: false,
        }
    }

    /// Create an empty query
    pub fn empty() -> Self {
        Self::new("")
    }

    /// Get the normalized query text
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Check if the query is empty
    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }

    /// Builder: set max results
    pub fn with_max_results(mut self, max: Option<usize>) -> Self {
        self.max_results = max;
        self
    }

    /// Builder: set single-result mode
    pub fn with_single_result(mut self, single: bool) -> Self {
        self.single_result = single;
        self
    }
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<&str> for SearchQuery {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for SearchQuery {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_creation() {
        let q = SearchQuery::new("  Half-Life ");

        assert_eq!(q.text, "  Half-Life ");
        assert_eq!(q.normalized(), "half-life");
        assert_eq!(q.max_results, None);
        assert!(!q.single_result);
    }

    #[test]
    fn test_query_empty() {
        assert!(SearchQuery::empty().is_empty());
        assert!(SearchQuery::new("   ").is_empty());
    }

    #[test]
    fn test_query_builders() {
        let q = SearchQuery::new("doom")
            .with_max_results(Some(3))
            .with_single_result(true);

        assert_eq!(q.max_results, Some(3));
        assert!(q.single_result);
    }

    #[test]
    fn test_query_from() {
        let q: SearchQuery = "test".into();
        assert_eq!(q.text, "test");
    }
}
