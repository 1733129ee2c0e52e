//! SearchEngine - tiered title/alias matching
//!
//! Each candidate is classified into the first matching [`MatchTier`]; the
//! tier fixes the confidence. Searching never touches the catalog: the caller
//! gets a [`SearchOutcome`] and decides whether to commit it as the search
//! results view.

use std::collections::BTreeMap;

use crate::domain::entities::Record;
use crate::domain::services::normalize::{sort_key, undecorate};
use crate::domain::value_objects::{Articles, SearchQuery};

/// Match category, best first
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchTier {
    ExactTitle,
    ExactAlias,
    BeginTitle,
    BeginAlias,
    BeginSubtitle,
    BeginLastWord,
    BeginAnyWord,
}

impl MatchTier {
    pub fn confidence(&self) -> i32 {
        match self {
            MatchTier::ExactTitle => 100,
            MatchTier::ExactAlias => 90,
            MatchTier::BeginTitle => 60,
            MatchTier::BeginAlias => 50,
            MatchTier::BeginSubtitle => 25,
            MatchTier::BeginLastWord => 15,
            MatchTier::BeginAnyWord => 5,
        }
    }

    /// Whether a hit of this tier ends a single-result search
    pub fn is_exact(&self) -> bool {
        *self <= MatchTier::ExactAlias
    }
}

/// One search hit
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchResult {
    pub title: String,
    /// 1-based position in the ranked output
    pub rank: usize,
    pub confidence: i32,
    pub tier: MatchTier,
}

/// Ranked hits for one query
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchOutcome {
    pub query: String,
    pub matches: Vec<MatchResult>,
}

impl SearchOutcome {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Highest-ranked hit
    pub fn best(&self) -> Option<&MatchResult> {
        self.matches.first()
    }

    /// `title → confidence`
    pub fn confidences(&self) -> BTreeMap<String, i32> {
        self.matches
            .iter()
            .map(|m| (m.title.clone(), m.confidence))
            .collect()
    }

    /// Titles in rank order, the content of the search results view
    pub fn view(&self) -> Vec<String> {
        self.matches.iter().map(|m| m.title.clone()).collect()
    }
}

/// Lower-cased forms of a candidate's title and alias
struct Candidate {
    full: String,
    short: String,
    alias: String,
}

impl Candidate {
    fn new(record: &Record, articles: &Articles) -> Self {
        let full = undecorate(&record.title).to_lowercase();
        let short = articles.strip_leading(&full).to_string();
        Self {
            full,
            short,
            alias: record.alias.trim().to_lowercase(),
        }
    }

    fn subtitle(&self) -> Option<&str> {
        let dash = self.full.find("- ").map(|i| (i, 2));
        let colon = self.full.find(": ").map(|i| (i, 2));
        let (start, len) = match (dash, colon) {
            (Some(d), Some(c)) => d.min(c),
            (d, c) => d.or(c)?,
        };
        Some(&self.full[start + len..])
    }

    fn last_word(&self) -> &str {
        self.full.rsplit(' ').next().unwrap_or(&self.full)
    }

    fn classify(&self, query: &str) -> Option<MatchTier> {
        let has_alias = !self.alias.is_empty();

        if self.full == query {
            Some(MatchTier::ExactTitle)
        } else if (has_alias && self.alias == query) || self.short == query {
            Some(MatchTier::ExactAlias)
        } else if self.short.starts_with(query) || self.full.starts_with(query) {
            Some(MatchTier::BeginTitle)
        } else if has_alias && self.alias.starts_with(query) {
            Some(MatchTier::BeginAlias)
        } else if self.subtitle().is_some_and(|s| s.starts_with(query)) {
            Some(MatchTier::BeginSubtitle)
        } else if self.last_word().starts_with(query) {
            Some(MatchTier::BeginLastWord)
        } else if self.full.contains(&format!(" {}", query)) {
            Some(MatchTier::BeginAnyWord)
        } else {
            None
        }
    }
}

/// Service for searching the catalog
#[derive(Clone, Debug)]
pub struct SearchEngine {
    articles: Articles,
    /// Whether rank ties compare titles with their leading article stripped
    ignore_article: bool,
}

impl SearchEngine {
    pub fn new(articles: Articles) -> Self {
        Self {
            articles,
            ignore_article: true,
        }
    }

    /// Builder: break rank ties the way the displayed list compares titles
    pub fn with_ignore_article(mut self, ignore: bool) -> Self {
        self.ignore_article = ignore;
        self
    }

    /// Classify a single record against an already-normalized query
    pub fn classify(&self, record: &Record, normalized_query: &str) -> Option<MatchTier> {
        if normalized_query.is_empty() {
            return None;
        }
        Candidate::new(record, &self.articles).classify(normalized_query)
    }

    /// Search `records`, scanned in the given order.
    ///
    /// Scanning stops once `max_results` hits were collected. In single-result
    /// mode the first exact title/alias hit is returned alone.
    pub fn search<'a, I>(&self, records: I, query: &SearchQuery) -> SearchOutcome
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let mut outcome = SearchOutcome {
            query: query.text.clone(),
            matches: Vec::new(),
        };
        let needle = query.normalized();
        if needle.is_empty() {
            return outcome;
        }

        let mut hits: Vec<(MatchTier, &Record)> = Vec::new();
        for record in records {
            if query.max_results.is_some_and(|max| hits.len() >= max) {
                break;
            }
            let Some(tier) = self.classify(record, needle) else {
                continue;
            };
            if query.single_result && tier.is_exact() {
                hits.clear();
                hits.push((tier, record));
                break;
            }
            hits.push((tier, record));
        }

        hits.sort_by(|(ta, a), (tb, b)| {
            ta.cmp(tb)
                .then_with(|| {
                    sort_key(&a.title, &self.articles, self.ignore_article)
                        .cmp(&sort_key(&b.title, &self.articles, self.ignore_article))
                })
                .then_with(|| a.title.cmp(&b.title))
        });

        outcome.matches = hits
            .into_iter()
            .enumerate()
            .map(|(i, (tier, record))| MatchResult {
                title: record.title.clone(),
                rank: i + 1,
                confidence: tier.confidence(),
                tier,
            })
            .collect();
        outcome
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(Articles::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Platform;
    use pretty_assertions::assert_eq;

    fn record(title: &str) -> Record {
        Record::new(title, Platform::Steam)
    }

    fn search(records: &[Record], query: &str) -> BTreeMap<String, i32> {
        SearchEngine::default()
            .search(records, &SearchQuery::new(query))
            .confidences()
    }

    #[test]
    fn test_exact_and_prefix() {
        let records = vec![record("Half-Life"), record("Half-Life 2")];
        let result = search(&records, "half-life");

        let expected: BTreeMap<String, i32> = [
            ("Half-Life".to_string(), 100),
            ("Half-Life 2".to_string(), 60),
        ]
        .into_iter()
        .collect();
        assert_eq!(result, expected);
    }

    #[test]
    fn test_subtitle() {
        let records = vec![record("Mass Effect: Andromeda")];
        let result = search(&records, "andromeda");
        assert_eq!(result.get("Mass Effect: Andromeda"), Some(&25));
    }

    #[test]
    fn test_dash_subtitle() {
        let records = vec![record("Star Wars - Knights of the Old Republic")];
        let result = search(&records, "knights");
        assert_eq!(result.values().copied().collect::<Vec<_>>(), vec![25]);
    }

    #[test]
    fn test_alias_tiers() {
        let records = vec![
            record("Grand Theft Auto V").with_alias("gta5"),
            record("The Elder Scrolls V: Skyrim").with_alias("skyrim"),
        ];

        assert_eq!(search(&records, "gta5").get("Grand Theft Auto V"), Some(&90));
        assert_eq!(search(&records, "gta").get("Grand Theft Auto V"), Some(&50));
        // the subtitle tier is shadowed by the exact alias
        assert_eq!(
            search(&records, "skyrim").get("The Elder Scrolls V: Skyrim"),
            Some(&90)
        );
    }

    #[test]
    fn test_short_title_tiers() {
        let records = vec![record("The Witcher 3")];
        assert_eq!(search(&records, "witcher 3").get("The Witcher 3"), Some(&90));
        assert_eq!(search(&records, "witch").get("The Witcher 3"), Some(&60));
        assert_eq!(search(&records, "the witcher 3").get("The Witcher 3"), Some(&100));
    }

    #[test]
    fn test_word_tiers() {
        let records = vec![record("Baldur's Gate Enhanced Edition")];
        assert_eq!(
            search(&records, "edit").get("Baldur's Gate Enhanced Edition"),
            Some(&15)
        );
        assert_eq!(
            search(&records, "enh").get("Baldur's Gate Enhanced Edition"),
            Some(&5)
        );
        assert!(search(&records, "hanced").is_empty());
    }

    #[test]
    fn test_decorations_ignored() {
        let records = vec![record("*Doom [F]")];
        assert_eq!(search(&records, "doom").get("*Doom [F]"), Some(&100));
    }

    #[test]
    fn test_empty_query_matches_nothing() {
        let records = vec![record("Doom")];
        assert!(search(&records, "  ").is_empty());
    }

    #[test]
    fn test_ranked_output() {
        let records = vec![
            record("Doom Eternal"),
            record("Doom"),
            record("Final Doom"),
            record("Doom 3"),
        ];
        let outcome = SearchEngine::default().search(&records, &SearchQuery::new("doom"));

        assert_eq!(
            outcome.view(),
            vec!["Doom", "Doom 3", "Doom Eternal", "Final Doom"]
        );
        assert_eq!(
            outcome.matches.iter().map(|m| m.rank).collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );
        assert_eq!(outcome.best().map(|m| m.confidence), Some(100));
    }

    #[test]
    fn test_max_results_stops_scan() {
        let records = vec![record("Doom 3"), record("Doom"), record("Doom 64")];
        let query = SearchQuery::new("doom").with_max_results(Some(1));
        let outcome = SearchEngine::default().search(&records, &query);

        // scanning stopped before the exact match was seen
        assert_eq!(outcome.view(), vec!["Doom 3"]);
    }

    #[test]
    fn test_single_result_mode() {
        let records = vec![record("Doom 3"), record("Doom Eternal"), record("Doom")];
        let query = SearchQuery::new("doom").with_single_result(true);
        let outcome = SearchEngine::default().search(&records, &query);

        assert_eq!(outcome.len(), 1);
        assert_eq!(outcome.matches[0].title, "Doom");
        assert_eq!(outcome.matches[0].tier, MatchTier::ExactTitle);

        let partial = SearchQuery::new("doo").with_single_result(true);
        assert_eq!(SearchEngine::default().search(&records, &partial).len(), 3);
    }

    #[test]
    fn test_rank_ties_follow_article_setting() {
        let records = vec![record("The Sims"), record("Stardew Valley")];
        let query = SearchQuery::new("s");

        let stripped = SearchEngine::default().search(&records, &query);
        assert_eq!(stripped.view(), vec!["The Sims", "Stardew Valley"]);

        let literal = SearchEngine::default()
            .with_ignore_article(false)
            .search(&records, &query);
        assert_eq!(literal.view(), vec!["Stardew Valley", "The Sims"]);
    }
}
