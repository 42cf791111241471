//! Article registry trait definition

use crate::article::{Article, ArticleRecord};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::hash::Hash;

/// Ordered, append-only collection of every article created against it.
///
/// All relationship queries on authors and magazines scan a registry
/// snapshot; there is no other index.
pub trait ArticleRegistry: Send + Sync {
    /// Append an article. Appends are atomic with respect to snapshots.
    fn append(&self, article: Article);

    /// All articles in insertion order, as of the time of the call
    fn snapshot(&self) -> Vec<Article>;

    /// Number of registered articles
    fn len(&self) -> usize {
        self.snapshot().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Serializable view of the whole registry
    fn export(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            articles: self.snapshot().iter().map(Article::record).collect(),
        }
    }
}

/// Exported registry contents
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    pub articles: Vec<ArticleRecord>,
}

/// Keep the first occurrence of each key, preserving order.
pub(crate) fn unique_by<T, K, F>(items: impl IntoIterator<Item = T>, key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(key(item)))
        .collect()
}

/// `None` for an empty collection, `Some` otherwise
pub(crate) fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}
