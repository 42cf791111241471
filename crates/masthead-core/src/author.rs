//! Author types and queries

use crate::article::Article;
use crate::error::{Error, Result};
use crate::limits::expect_str;
use crate::magazine::Magazine;
use crate::registry::{non_empty, unique_by, ArticleRegistry};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use ulid::Ulid;

/// Unique identifier for an author
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuthorId(pub Ulid);

impl AuthorId {
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for AuthorId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AuthorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug)]
struct AuthorInner {
    id: AuthorId,
    name: String,
}

/// A named contributor.
///
/// `Author` is a shared handle: clones refer to the same author, and
/// equality compares identity, not name.
#[derive(Debug, Clone)]
pub struct Author {
    inner: Arc<AuthorInner>,
}

impl Author {
    /// Create a new author
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(AuthorInner {
                id: AuthorId::new(),
                name: name.into(),
            }),
        }
    }

    /// Create an author from an untyped value, which must be a string
    pub fn from_value(name: &Value) -> Result<Self> {
        Ok(Self::new(expect_str("name", name)?))
    }

    pub fn id(&self) -> AuthorId {
        self.inner.id
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Author names are set once. Always fails.
    pub fn set_name(&self, _name: impl Into<String>) -> Result<()> {
        Err(Error::ImmutableField { field: "name" })
    }

    /// Articles written by this author, in registry order
    pub fn articles(&self, registry: &dyn ArticleRegistry) -> Vec<Article> {
        registry
            .snapshot()
            .into_iter()
            .filter(|article| article.author() == *self)
            .collect()
    }

    /// Distinct magazines this author has written for
    pub fn magazines(&self, registry: &dyn ArticleRegistry) -> Vec<Magazine> {
        let articles = self.articles(registry);
        unique_by(articles.iter().map(Article::magazine), Magazine::id)
    }

    /// Write a new article for `magazine`
    pub fn add_article(
        &self,
        registry: &dyn ArticleRegistry,
        magazine: &Magazine,
        title: impl Into<String>,
    ) -> Result<Article> {
        Article::new(registry, self, magazine, title)
    }

    /// Distinct categories of the magazines this author has written for.
    ///
    /// Returns `None` when the author has no magazines.
    pub fn topic_areas(&self, registry: &dyn ArticleRegistry) -> Option<Vec<String>> {
        let magazines = self.magazines(registry);
        let categories = magazines.iter().map(Magazine::category);
        non_empty(unique_by(categories, String::clone))
    }

    pub fn record(&self) -> AuthorRecord {
        AuthorRecord {
            id: self.id(),
            name: self.name().to_string(),
        }
    }
}

impl PartialEq for Author {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl Eq for Author {}

impl std::hash::Hash for Author {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.inner.id.hash(state);
    }
}

/// Serializable view of an author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorRecord {
    pub id: AuthorId,
    pub name: String,
}
