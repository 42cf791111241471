//! Article types - the join record between an author and a magazine

use crate::author::{Author, AuthorRecord};
use crate::error::{Error, Result};
use crate::limits::validate_title;
use crate::magazine::{Magazine, MagazineRecord};
use crate::registry::ArticleRegistry;
use crate::sync;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};
use ulid::Ulid;

/// Unique identifier for an article
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArticleId(pub Ulid);

impl ArticleId {
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for ArticleId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ArticleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug)]
struct ArticleLinks {
    author: Author,
    magazine: Magazine,
}

#[derive(Debug)]
struct ArticleInner {
    id: ArticleId,
    title: String,
    created_at: DateTime<Utc>,
    links: RwLock<ArticleLinks>,
}

/// An article linking one author to one magazine.
///
/// The title is fixed at construction. The author and magazine links can be
/// rewired freely and are not validated.
#[derive(Debug, Clone)]
pub struct Article {
    inner: Arc<ArticleInner>,
}

impl Article {
    /// Create a new article and append it to `registry`.
    ///
    /// Fails with a range error if the title is not 5-50 characters; nothing is
    /// registered in that case.
    pub fn new(
        registry: &dyn ArticleRegistry,
        author: &Author,
        magazine: &Magazine,
        title: impl Into<String>,
    ) -> Result<Self> {
        let title = title.into();
        validate_title(&title)?;

        let article = Self {
            inner: Arc::new(ArticleInner {
                id: ArticleId::new(),
                title,
                created_at: Utc::now(),
                links: RwLock::new(ArticleLinks {
                    author: author.clone(),
                    magazine: magazine.clone(),
                }),
            }),
        };

        registry.append(article.clone());
        tracing::debug!(
            article = %article.id(),
            author = author.name(),
            magazine = %magazine.name(),
            "Registered article: {}",
            article.title()
        );
        Ok(article)
    }

    pub fn id(&self) -> ArticleId {
        self.inner.id
    }

    pub fn title(&self) -> &str {
        &self.inner.title
    }

    /// Titles are set once. Always fails, even for the current title.
    pub fn set_title(&self, _title: impl Into<String>) -> Result<()> {
        Err(Error::ImmutableField { field: "title" })
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.inner.created_at
    }

    pub fn author(&self) -> Author {
        sync::read(&self.inner.links).author.clone()
    }

    pub fn set_author(&self, author: &Author) {
        sync::write(&self.inner.links).author = author.clone();
    }

    pub fn magazine(&self) -> Magazine {
        sync::read(&self.inner.links).magazine.clone()
    }

    pub fn set_magazine(&self, magazine: &Magazine) {
        sync::write(&self.inner.links).magazine = magazine.clone();
    }

    pub fn record(&self) -> ArticleRecord {
        let links = sync::read(&self.inner.links);
        ArticleRecord {
            id: self.id(),
            title: self.title().to_string(),
            author: links.author.record(),
            magazine: links.magazine.record(),
            created_at: self.created_at(),
        }
    }
}

impl PartialEq for Article {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl Eq for Article {}

impl std::hash::Hash for Article {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.inner.id.hash(state);
    }
}

/// Serializable view of an article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub id: ArticleId,
    pub title: String,
    pub author: AuthorRecord,
    pub magazine: MagazineRecord,
    pub created_at: DateTime<Utc>,
}
