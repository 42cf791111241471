use masthead_core::{Article, ArticleRegistry, Author, ErrorKind, Magazine};
use masthead_store::MemoryRegistry;
use std::collections::HashSet;

fn names(authors: &[Author]) -> HashSet<String> {
    authors.iter().map(|a| a.name().to_string()).collect()
}

#[test]
fn add_article_links_author_and_magazine() {
    let registry = MemoryRegistry::new();
    let carol = Author::new("Carol");
    let vogue = Magazine::new("Vogue", "Fashion").unwrap();

    let article = carol
        .add_article(&registry, &vogue, "Fashion Forward")
        .unwrap();

    assert_eq!(article.author(), carol);
    assert_eq!(vogue.article_titles(&registry), Some(vec!["Fashion Forward".to_string()]));
    assert_eq!(carol.magazines(&registry), vec![vogue.clone()]);
    assert_eq!(carol.articles(&registry), vec![article]);
}

#[test]
fn invalid_title_leaves_magazine_without_articles() {
    let registry = MemoryRegistry::new();
    let dan = Author::new("Dan");
    let wired = Magazine::new("Wired", "Tech").unwrap();

    let err = dan.add_article(&registry, &wired, "Hi").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Range);
    assert_eq!(wired.article_titles(&registry), None);
    assert!(registry.is_empty());
}

#[test]
fn contributing_authors_need_more_than_two_articles() {
    let registry = MemoryRegistry::new();
    let wired = Magazine::new("Wired", "Tech").unwrap();
    let prolific = Author::new("Ada");
    let occasional = Author::new("Grace");

    for title in ["Compilers Today", "Type Systems", "Memory Models"] {
        prolific.add_article(&registry, &wired, title).unwrap();
    }
    for title in ["Debugging Tales", "Naval Software"] {
        occasional.add_article(&registry, &wired, title).unwrap();
    }

    assert_eq!(wired.contributing_authors(&registry), Some(vec![prolific.clone()]));

    let contributors = wired.contributors(&registry).unwrap();
    assert_eq!(contributors.len(), 2);
    assert_eq!(names(&contributors), HashSet::from(["Ada".to_string(), "Grace".to_string()]));
}

#[test]
fn contributing_authors_are_counted_per_magazine_in_first_appearance_order() {
    let registry = MemoryRegistry::new();
    let wired = Magazine::new("Wired", "Tech").unwrap();
    let vogue = Magazine::new("Vogue", "Fashion").unwrap();
    let grace = Author::new("Grace");
    let ada = Author::new("Ada");
    let carol = Author::new("Carol");

    // Articles interleave, and Carol's third article lands in another magazine
    let plan = [
        (&grace, &wired, "Debugging Tales"),
        (&ada, &wired, "Compilers Today"),
        (&carol, &wired, "Wearable Tech"),
        (&grace, &wired, "Naval Software"),
        (&ada, &wired, "Type Systems"),
        (&carol, &vogue, "Fashion Forward"),
        (&carol, &wired, "Smart Fabrics"),
        (&ada, &wired, "Memory Models"),
        (&grace, &wired, "Hopper Papers"),
    ];
    for (author, magazine, title) in plan {
        author.add_article(&registry, magazine, title).unwrap();
    }

    assert_eq!(
        wired.contributing_authors(&registry),
        Some(vec![grace.clone(), ada.clone()])
    );
    assert_eq!(vogue.contributing_authors(&registry), None);
}

#[test]
fn two_articles_are_not_enough_to_contribute() {
    let registry = MemoryRegistry::new();
    let wired = Magazine::new("Wired", "Tech").unwrap();
    let author = Author::new("Grace");

    author.add_article(&registry, &wired, "Debugging Tales").unwrap();
    author.add_article(&registry, &wired, "Naval Software").unwrap();

    assert_eq!(wired.contributing_authors(&registry), None);
}

#[test]
fn magazine_without_articles_returns_none() {
    let registry = MemoryRegistry::new();
    let empty = Magazine::new("Quiet", "Nothing").unwrap();

    // Articles elsewhere must not leak into this magazine
    let other = Magazine::new("Wired", "Tech").unwrap();
    Author::new("Ada")
        .add_article(&registry, &other, "Compilers Today")
        .unwrap();

    assert!(empty.articles(&registry).is_empty());
    assert_eq!(empty.contributors(&registry), None);
    assert_eq!(empty.article_titles(&registry), None);
    assert_eq!(empty.contributing_authors(&registry), None);
}

#[test]
fn short_magazine_name_is_rejected() {
    let err = Magazine::new("A", "Tech").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
}

#[test]
fn title_bounds() {
    let registry = MemoryRegistry::new();
    let author = Author::new("Carol");
    let magazine = Magazine::new("Vogue", "Fashion").unwrap();

    for len in [5, 6, 25, 49, 50] {
        let title = "t".repeat(len);
        let article = Article::new(&registry, &author, &magazine, title.clone()).unwrap();
        assert_eq!(article.title(), title);
    }
    for len in [0, 1, 4, 51, 80] {
        let err = Article::new(&registry, &author, &magazine, "t".repeat(len)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
    }
    assert_eq!(registry.len(), 5);
}

#[test]
fn magazine_name_bounds() {
    let magazine = Magazine::new("Wired", "Tech").unwrap();

    for len in [2, 3, 10, 16] {
        let name = "n".repeat(len);
        magazine.set_name(name.clone()).unwrap();
        assert_eq!(magazine.name(), name);
    }
    for len in [0, 1, 17, 30] {
        let err = magazine.set_name("n".repeat(len)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
    }
}

#[test]
fn queries_are_idempotent() {
    let registry = MemoryRegistry::new();
    let author = Author::new("Carol");
    let vogue = Magazine::new("Vogue", "Fashion").unwrap();
    let elle = Magazine::new("Elle", "Fashion").unwrap();

    author.add_article(&registry, &vogue, "Fashion Forward").unwrap();
    author.add_article(&registry, &elle, "Street Style").unwrap();
    author.add_article(&registry, &vogue, "Autumn Looks").unwrap();

    assert_eq!(author.articles(&registry), author.articles(&registry));
    assert_eq!(vogue.articles(&registry), vogue.articles(&registry));

    let titles: Vec<_> = author
        .articles(&registry)
        .iter()
        .map(|a| a.title().to_string())
        .collect();
    assert_eq!(titles, ["Fashion Forward", "Street Style", "Autumn Looks"]);
}

#[test]
fn magazines_are_unique_by_identity() {
    let registry = MemoryRegistry::new();
    let author = Author::new("Carol");
    let vogue = Magazine::new("Vogue", "Fashion").unwrap();
    // Same name and category, different magazine
    let twin = Magazine::new("Vogue", "Fashion").unwrap();

    author.add_article(&registry, &vogue, "Fashion Forward").unwrap();
    author.add_article(&registry, &vogue, "Autumn Looks").unwrap();
    author.add_article(&registry, &twin, "Street Style").unwrap();

    assert_eq!(author.magazines(&registry), vec![vogue, twin]);
}

#[test]
fn topic_areas_are_distinct_categories() {
    let registry = MemoryRegistry::new();
    let author = Author::new("Carol");

    assert_eq!(author.topic_areas(&registry), None);

    let vogue = Magazine::new("Vogue", "Fashion").unwrap();
    let elle = Magazine::new("Elle", "Fashion").unwrap();
    let wired = Magazine::new("Wired", "Tech").unwrap();
    author.add_article(&registry, &vogue, "Fashion Forward").unwrap();
    author.add_article(&registry, &elle, "Street Style").unwrap();
    author.add_article(&registry, &wired, "Wearable Tech").unwrap();

    let topics: HashSet<_> = author.topic_areas(&registry).unwrap().into_iter().collect();
    assert_eq!(topics, HashSet::from(["Fashion".to_string(), "Tech".to_string()]));

    // Categories are read live from the magazine
    wired.set_category("Gadgets").unwrap();
    let topics: HashSet<_> = author.topic_areas(&registry).unwrap().into_iter().collect();
    assert_eq!(topics, HashSet::from(["Fashion".to_string(), "Gadgets".to_string()]));
}

#[test]
fn rewired_article_moves_between_authors() {
    let registry = MemoryRegistry::new();
    let carol = Author::new("Carol");
    let dan = Author::new("Dan");
    let vogue = Magazine::new("Vogue", "Fashion").unwrap();

    let article = carol
        .add_article(&registry, &vogue, "Fashion Forward")
        .unwrap();
    article.set_author(&dan);

    assert!(carol.articles(&registry).is_empty());
    assert_eq!(dan.articles(&registry), vec![article]);
    assert_eq!(vogue.contributors(&registry), Some(vec![dan]));
}

#[test]
fn immutable_fields_reject_writes() {
    let registry = MemoryRegistry::new();
    let author = Author::new("Carol");
    let vogue = Magazine::new("Vogue", "Fashion").unwrap();
    let article = author
        .add_article(&registry, &vogue, "Fashion Forward")
        .unwrap();

    assert_eq!(
        article.set_title("Fashion Forward").unwrap_err().kind(),
        ErrorKind::ImmutableField
    );
    assert_eq!(author.set_name("Caroline").unwrap_err().kind(), ErrorKind::ImmutableField);
}

#[test]
fn export_lists_articles_in_order() {
    let registry = MemoryRegistry::new();
    let author = Author::new("Carol");
    let vogue = Magazine::new("Vogue", "Fashion").unwrap();
    author.add_article(&registry, &vogue, "Fashion Forward").unwrap();
    author.add_article(&registry, &vogue, "Autumn Looks").unwrap();

    let snapshot = registry.export();
    let json = serde_json::to_value(&snapshot).unwrap();

    assert_eq!(json["articles"][0]["title"], "Fashion Forward");
    assert_eq!(json["articles"][1]["title"], "Autumn Looks");
    assert_eq!(json["articles"][1]["author"]["name"], "Carol");
    assert_eq!(json["articles"][1]["magazine"]["name"], "Vogue");
}
