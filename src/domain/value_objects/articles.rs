//! Articles value object - leading words ignored when comparing titles

/// Configured article list, stored lower-cased
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Articles {
    words: Vec<String>,
}

impl Articles {
    /// English defaults
    pub const DEFAULT: [&'static str; 3] = ["the", "a", "an"];

    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// An empty list (nothing is stripped)
    pub fn none() -> Self {
        Self { words: Vec::new() }
    }

    /// Whether `word` is a configured article (case-insensitive)
    pub fn is_article(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        self.words.iter().any(|a| *a == word)
    }

    /// Strip one leading article and the whitespace after it.
    ///
    /// A title consisting only of an article is returned unchanged.
    pub fn strip_leading<'a>(&self, text: &'a str) -> &'a str {
        let trimmed = text.trim_start();
        let Some(split) = trimmed.find(char::is_whitespace) else {
            return text;
        };
        let (first, rest) = trimmed.split_at(split);
        let rest = rest.trim_start();
        if !rest.is_empty() && self.is_article(first) {
            rest
        } else {
            text
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl Default for Articles {
    fn default() -> Self {
        Self::new(Self::DEFAULT)
    }
}
