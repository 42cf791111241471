//! Roster files: authors, magazines and articles loaded into a registry
//!
//! Every string field, including the author and magazine an article refers
//! to, is read as untyped JSON so that wrongly typed values surface as type
//! errors from the core model rather than as parse failures.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use serde_json::Value;

use masthead_core::limits::expect_str;
use masthead_core::{Article, ArticleRegistry, Author, Magazine};

#[derive(Debug, Default, Deserialize)]
pub struct RosterFile {
    #[serde(default)]
    pub authors: Vec<AuthorEntry>,
    #[serde(default)]
    pub magazines: Vec<MagazineEntry>,
    #[serde(default)]
    pub articles: Vec<ArticleEntry>,
}

#[derive(Debug, Deserialize)]
pub struct AuthorEntry {
    #[serde(default)]
    pub name: Value,
}

#[derive(Debug, Deserialize)]
pub struct MagazineEntry {
    #[serde(default)]
    pub name: Value,
    #[serde(default)]
    pub category: Value,
}

#[derive(Debug, Deserialize)]
pub struct ArticleEntry {
    #[serde(default)]
    pub author: Value,
    #[serde(default)]
    pub magazine: Value,
    #[serde(default)]
    pub title: Value,
}

/// Authors and magazines from a roster, addressable by name
#[derive(Debug, Default)]
pub struct Roster {
    authors: Vec<Author>,
    magazines: Vec<Magazine>,
}

impl Roster {
    /// Read a roster file and register its articles in `registry`
    pub fn load(path: &Path, registry: &dyn ArticleRegistry) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read roster {}", path.display()))?;
        let file: RosterFile = serde_json::from_str(&content)
            .with_context(|| format!("Invalid roster {}", path.display()))?;
        Self::build(file, registry)
    }

    pub fn build(file: RosterFile, registry: &dyn ArticleRegistry) -> anyhow::Result<Self> {
        let mut roster = Self::default();

        for (i, entry) in file.authors.iter().enumerate() {
            let author =
                Author::from_value(&entry.name).with_context(|| format!("author #{}", i + 1))?;
            if roster.find_author(author.name()).is_some() {
                anyhow::bail!("Duplicate author name: {}", author.name());
            }
            roster.authors.push(author);
        }

        for (i, entry) in file.magazines.iter().enumerate() {
            let magazine = Magazine::from_values(&entry.name, &entry.category)
                .with_context(|| format!("magazine #{}", i + 1))?;
            if roster.find_magazine(&magazine.name()).is_some() {
                anyhow::bail!("Duplicate magazine name: {}", magazine.name());
            }
            roster.magazines.push(magazine);
        }

        for (i, entry) in file.articles.iter().enumerate() {
            roster
                .register_article(registry, entry)
                .with_context(|| format!("article #{}", i + 1))?;
        }

        tracing::info!(
            authors = roster.authors.len(),
            magazines = roster.magazines.len(),
            articles = file.articles.len(),
            "Loaded roster"
        );
        Ok(roster)
    }

    fn register_article(
        &self,
        registry: &dyn ArticleRegistry,
        entry: &ArticleEntry,
    ) -> anyhow::Result<Article> {
        let author = self.author(expect_str("author", &entry.author)?)?;
        let magazine = self.magazine(expect_str("magazine", &entry.magazine)?)?;
        let title = expect_str("title", &entry.title)?;
        Ok(Article::new(registry, author, magazine, title)?)
    }

    fn find_author(&self, name: &str) -> Option<&Author> {
        self.authors.iter().find(|a| a.name() == name)
    }

    fn find_magazine(&self, name: &str) -> Option<&Magazine> {
        self.magazines.iter().find(|m| m.name() == name)
    }

    pub fn author(&self, name: &str) -> anyhow::Result<&Author> {
        self.find_author(name)
            .with_context(|| format!("Author not found: {}", name))
    }

    pub fn magazine(&self, name: &str) -> anyhow::Result<&Magazine> {
        self.find_magazine(name)
            .with_context(|| format!("Magazine not found: {}", name))
    }

    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    pub fn magazines(&self) -> &[Magazine] {
        &self.magazines
    }
}
