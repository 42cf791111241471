//! Magazine types and queries

use crate::article::Article;
use crate::author::{Author, AuthorId};
use crate::error::Result;
use crate::limits::{expect_str, validate_category, validate_magazine_name};
use crate::registry::{non_empty, unique_by, ArticleRegistry};
use crate::sync;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use ulid::Ulid;

/// Articles an author needs in one magazine to count as a contributing author
/// are strictly more than this.
pub const CONTRIBUTING_AUTHOR_THRESHOLD: usize = 2;

/// Unique identifier for a magazine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MagazineId(pub Ulid);

impl MagazineId {
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for MagazineId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MagazineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug)]
struct MagazineFields {
    name: String,
    category: String,
}

#[derive(Debug)]
struct MagazineInner {
    id: MagazineId,
    fields: RwLock<MagazineFields>,
}

/// A named, categorized publication.
///
/// Name and category may be reassigned; every write is validated before it
/// takes effect. Clones share state, so a rename is visible through every
/// article that references the magazine.
#[derive(Debug, Clone)]
pub struct Magazine {
    inner: Arc<MagazineInner>,
}

impl Magazine {
    /// Create a new magazine. Both fields go through the same checks as
    /// [`Magazine::set_name`] and [`Magazine::set_category`].
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Result<Self> {
        let name = Self::checked_name(name.into())?;
        let category = Self::checked_category(category.into())?;
        Ok(Self {
            inner: Arc::new(MagazineInner {
                id: MagazineId::new(),
                fields: RwLock::new(MagazineFields { name, category }),
            }),
        })
    }

    /// Create a magazine from untyped values, which must both be strings
    pub fn from_values(name: &Value, category: &Value) -> Result<Self> {
        let name = expect_str("name", name)?;
        let category = expect_str("category", category)?;
        Self::new(name, category)
    }

    fn checked_name(name: String) -> Result<String> {
        validate_magazine_name(&name)?;
        Ok(name)
    }

    fn checked_category(category: String) -> Result<String> {
        validate_category(&category)?;
        Ok(category)
    }

    pub fn id(&self) -> MagazineId {
        self.inner.id
    }

    pub fn name(&self) -> String {
        sync::read(&self.inner.fields).name.clone()
    }

    pub fn category(&self) -> String {
        sync::read(&self.inner.fields).category.clone()
    }

    /// Rename the magazine (2-16 chars)
    pub fn set_name(&self, name: impl Into<String>) -> Result<()> {
        let name = Self::checked_name(name.into())?;
        tracing::debug!(magazine = %self.id(), %name, "Renaming magazine");
        sync::write(&self.inner.fields).name = name;
        Ok(())
    }

    pub fn set_name_value(&self, name: &Value) -> Result<()> {
        self.set_name(expect_str("name", name)?)
    }

    /// Recategorize the magazine (non-empty)
    pub fn set_category(&self, category: impl Into<String>) -> Result<()> {
        let category = Self::checked_category(category.into())?;
        tracing::debug!(magazine = %self.id(), %category, "Recategorizing magazine");
        sync::write(&self.inner.fields).category = category;
        Ok(())
    }

    pub fn set_category_value(&self, category: &Value) -> Result<()> {
        self.set_category(expect_str("category", category)?)
    }

    /// Articles published in this magazine, in registry order
    pub fn articles(&self, registry: &dyn ArticleRegistry) -> Vec<Article> {
        registry
            .snapshot()
            .into_iter()
            .filter(|article| article.magazine() == *self)
            .collect()
    }

    /// Distinct authors who wrote for this magazine, or `None` if it has no
    /// articles
    pub fn contributors(&self, registry: &dyn ArticleRegistry) -> Option<Vec<Author>> {
        let articles = self.articles(registry);
        non_empty(unique_by(articles.iter().map(Article::author), Author::id))
    }

    /// Titles of this magazine's articles, or `None` if it has no articles
    pub fn article_titles(&self, registry: &dyn ArticleRegistry) -> Option<Vec<String>> {
        let titles = self
            .articles(registry)
            .iter()
            .map(|article| article.title().to_string())
            .collect();
        non_empty(titles)
    }

    /// Authors with more than [`CONTRIBUTING_AUTHOR_THRESHOLD`] articles in
    /// this magazine, or `None` if there are none
    pub fn contributing_authors(&self, registry: &dyn ArticleRegistry) -> Option<Vec<Author>> {
        let authors: Vec<Author> = self
            .articles(registry)
            .iter()
            .map(Article::author)
            .collect();

        let mut counts: HashMap<AuthorId, usize> = HashMap::new();
        for author in &authors {
            *counts.entry(author.id()).or_default() += 1;
        }

        let prolific = unique_by(authors, Author::id)
            .into_iter()
            .filter(|author| {
                counts.get(&author.id()).copied().unwrap_or(0) > CONTRIBUTING_AUTHOR_THRESHOLD
            })
            .collect();
        non_empty(prolific)
    }

    pub fn record(&self) -> MagazineRecord {
        let fields = sync::read(&self.inner.fields);
        MagazineRecord {
            id: self.id(),
            name: fields.name.clone(),
            category: fields.category.clone(),
        }
    }
}

impl PartialEq for Magazine {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl Eq for Magazine {}

impl std::hash::Hash for Magazine {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.inner.id.hash(state);
    }
}

/// Serializable view of a magazine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MagazineRecord {
    pub id: MagazineId,
    pub name: String,
    pub category: String,
}
