//! SortEngine - deterministic ordering of catalog views
//!
//! Keys are applied in a fixed precedence: installed, favourite, frequency,
//! normalized title, raw title. The [`SortSpec`] flags switch the first three
//! on or off; the two title keys always apply, which makes the order total.

use std::cmp::Ordering;

use crate::domain::entities::Record;
use crate::domain::services::normalize::sort_key;
use crate::domain::value_objects::{Articles, SortSpec};

/// Record paired with its precomputed title key
struct Keyed<'a> {
    key: String,
    record: &'a Record,
}

/// Service producing ordered views
#[derive(Clone, Debug, Default)]
pub struct SortEngine {
    articles: Articles,
}

impl SortEngine {
    pub fn new(articles: Articles) -> Self {
        Self { articles }
    }

    pub fn articles(&self) -> &Articles {
        &self.articles
    }

    /// Sort records according to `spec`. Does not depend on input order.
    pub fn sort<'a, I>(&self, records: I, spec: &SortSpec) -> Vec<&'a Record>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let mut keyed: Vec<Keyed<'a>> = records
            .into_iter()
            .map(|record| Keyed {
                key: sort_key(&record.title, &self.articles, spec.ignore_article),
                record,
            })
            .collect();

        keyed.sort_by(|a, b| compare(a, b, spec));
        keyed.into_iter().map(|k| k.record).collect()
    }

    /// Normalized title key as used by [`SortEngine::sort`]
    pub fn title_key(&self, title: &str, spec: &SortSpec) -> String {
        sort_key(title, &self.articles, spec.ignore_article)
    }
}

fn compare(a: &Keyed<'_>, b: &Keyed<'_>, spec: &SortSpec) -> Ordering {
    let mut ord = Ordering::Equal;
    if spec.inst_sort {
        ord = ord.then(b.record.installed.cmp(&a.record.installed));
    }
    if spec.fave_sort {
        ord = ord.then(b.record.favourite.cmp(&a.record.favourite));
    }
    if !spec.alpha_sort {
        ord = ord.then(b.record.frequency.total_cmp(&a.record.frequency));
    }
    ord.then_with(|| a.key.cmp(&b.key))
        .then_with(|| a.record.title.cmp(&b.record.title))
}
