//! In-memory article registry

use masthead_core::sync;
use masthead_core::{Article, ArticleRegistry};
use std::sync::RwLock;

/// In-memory registry backend
///
/// Append-only and ordered. Each instance is independent, so tests can use a
/// fresh one without leaking articles between them.
#[derive(Debug)]
pub struct MemoryRegistry {
    articles: RwLock<Vec<Article>>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self {
            articles: RwLock::new(Vec::new()),
        }
    }
}

impl Default for MemoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ArticleRegistry for MemoryRegistry {
    fn append(&self, article: Article) {
        let mut articles = sync::write(&self.articles);
        articles.push(article);
        tracing::trace!(count = articles.len(), "Appended article to registry");
    }

    fn snapshot(&self) -> Vec<Article> {
        sync::read(&self.articles).clone()
    }

    fn len(&self) -> usize {
        sync::read(&self.articles).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use masthead_core::{Author, Magazine};

    #[test]
    fn test_memory_registry() {
        let registry = MemoryRegistry::new();
        assert!(registry.is_empty());

        let author = Author::new("Carol");
        let magazine = Magazine::new("Vogue", "Fashion").unwrap();
        let first = Article::new(&registry, &author, &magazine, "Fashion Forward").unwrap();
        let second = Article::new(&registry, &author, &magazine, "Autumn Looks").unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.snapshot(), vec![first, second]);
    }

    #[test]
    fn test_registries_are_isolated() {
        let one = MemoryRegistry::new();
        let two = MemoryRegistry::new();
        let author = Author::new("Carol");
        let magazine = Magazine::new("Vogue", "Fashion").unwrap();

        author.add_article(&one, &magazine, "Fashion Forward").unwrap();

        assert_eq!(author.articles(&one).len(), 1);
        assert!(author.articles(&two).is_empty());
        assert!(two.is_empty());
    }

    #[test]
    fn test_snapshot_is_detached() {
        let registry = MemoryRegistry::new();
        let author = Author::new("Carol");
        let magazine = Magazine::new("Vogue", "Fashion").unwrap();

        let before = registry.snapshot();
        author.add_article(&registry, &magazine, "Fashion Forward").unwrap();

        assert!(before.is_empty());
        assert_eq!(registry.snapshot().len(), 1);
    }

    #[test]
    fn test_concurrent_appends() {
        let registry = MemoryRegistry::new();
        let magazine = Magazine::new("Wired", "Tech").unwrap();

        std::thread::scope(|scope| {
            for i in 0..4 {
                let registry = &registry;
                let magazine = &magazine;
                scope.spawn(move || {
                    let author = Author::new(format!("Writer {}", i));
                    for n in 0..5 {
                        author
                            .add_article(registry, magazine, format!("Dispatch {}-{}", i, n))
                            .unwrap();
                    }
                });
            }
        });

        assert_eq!(registry.len(), 20);
        assert_eq!(magazine.contributors(&registry).map(|a| a.len()), Some(4));
    }
}
