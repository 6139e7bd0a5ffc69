//! Corpus lifecycle: upsert/re-key/conflict, slug allocation, removal,
//! link resolution and the JSON entry points.

use ausaur::{Article, AusaurError, Corpus, slugify};
use chrono::{TimeZone, Utc};
use serde_json::json;

fn art(id: &str, slug: &str, title: &str) -> Article {
    Article {
        id: id.to_string(),
        slug: slug.to_string(),
        title: title.to_string(),
        content: String::new(),
        category: None,
        article_type: Default::default(),
        tags: vec![],
        links: vec![],
        created_at: None,
        updated_at: None,
    }
}

#[test]
fn upsert_and_get() {
    let mut corpus = Corpus::new();
    corpus.upsert(art("1", "creer-abonnement", "Créer un abonnement")).unwrap();

    assert_eq!(corpus.len(), 1);
    assert!(corpus.contains_slug("creer-abonnement"));
    assert_eq!(
        corpus.get("creer-abonnement").unwrap().title,
        "Créer un abonnement"
    );
    assert_eq!(corpus.get_by_id("1").unwrap().slug, "creer-abonnement");
    assert!(corpus.get("absent").is_none());
}

#[test]
fn upsert_replaces_same_id_in_place() {
    let mut corpus = Corpus::new();
    corpus.upsert(art("1", "abo", "Avant")).unwrap();
    corpus.upsert(art("1", "abo", "Après")).unwrap();

    assert_eq!(corpus.len(), 1);
    assert_eq!(corpus.get("abo").unwrap().title, "Après");
}

#[test]
fn upsert_rekeys_when_slug_changes() {
    let mut corpus = Corpus::new();
    corpus.upsert(art("1", "ancien-slug", "Article")).unwrap();
    corpus.upsert(art("1", "nouveau-slug", "Article")).unwrap();

    assert_eq!(corpus.len(), 1);
    assert!(!corpus.contains_slug("ancien-slug"));
    assert_eq!(corpus.get("nouveau-slug").unwrap().id, "1");
}

#[test]
fn upsert_rejects_slug_held_by_another_article() {
    let mut corpus = Corpus::new();
    corpus.upsert(art("1", "taken", "Premier")).unwrap();

    let err = corpus.upsert(art("2", "taken", "Second")).unwrap_err();
    assert!(matches!(err, AusaurError::SlugConflict(s) if s == "taken"));
    // The original article is untouched.
    assert_eq!(corpus.get("taken").unwrap().id, "1");
}

#[test]
fn upsert_rejects_blank_identifiers() {
    let mut corpus = Corpus::new();
    assert!(matches!(
        corpus.upsert(art("", "slug", "T")),
        Err(AusaurError::MissingField(f)) if f == "id"
    ));
    assert!(matches!(
        corpus.upsert(art("1", "  ", "T")),
        Err(AusaurError::MissingField(f)) if f == "slug"
    ));
}

#[test]
fn from_articles_propagates_conflicts() {
    let result = Corpus::from_articles(vec![
        art("1", "dup", "Un"),
        art("2", "dup", "Deux"),
    ]);
    assert!(matches!(result, Err(AusaurError::SlugConflict(_))));
}

#[test]
fn unique_slug_suffixes_until_free() {
    let mut corpus = Corpus::new();
    corpus.upsert(art("1", "resiliation", "R")).unwrap();
    corpus.upsert(art("2", "resiliation-2", "R2")).unwrap();

    assert_eq!(corpus.unique_slug("resiliation", None), "resiliation-3");
    assert_eq!(corpus.unique_slug("libre", None), "libre");
    assert_eq!(corpus.unique_slug("", None), "article");

    // An article keeps its own slug when re-saved.
    assert_eq!(
        corpus.unique_slug("resiliation", Some(&"1".to_string())),
        "resiliation"
    );
}

#[test]
fn remove_by_id_and_slug() {
    let mut corpus = Corpus::new();
    corpus.upsert(art("1", "a", "Un")).unwrap();
    corpus.upsert(art("2", "b", "Deux")).unwrap();

    let removed = corpus.remove("1").unwrap();
    assert_eq!(removed.slug, "a");
    assert!(corpus.remove("1").is_none());

    assert!(corpus.remove_by_slug("b").is_some());
    assert!(corpus.is_empty());
}

#[test]
fn links_resolve_soft() {
    let mut corpus = Corpus::new();
    let mut a = art("1", "depart", "Départ");
    a.links = vec!["cible".to_string(), "fantome".to_string()];
    corpus.upsert(a).unwrap();
    corpus.upsert(art("2", "cible", "Cible")).unwrap();

    let from = corpus.get("depart").unwrap().clone();
    let links = corpus.resolve_links(&from);
    assert_eq!(links.len(), 2);
    assert_eq!(links[0].slug, "cible");
    assert_eq!(links[0].target.unwrap().title, "Cible");
    assert_eq!(links[1].slug, "fantome");
    assert!(links[1].target.is_none()); // dangling, not an error
}

#[test]
fn recent_sorts_newest_first() {
    let stamp = |y| Utc.with_ymd_and_hms(y, 1, 1, 0, 0, 0).single();
    let mut corpus = Corpus::new();
    for (id, slug, year) in [("1", "vieux", 2023), ("2", "neuf", 2025), ("3", "moyen", 2024)] {
        let mut a = art(id, slug, slug);
        a.updated_at = stamp(year);
        corpus.upsert(a).unwrap();
    }
    let mut undated = art("4", "jamais", "jamais");
    undated.updated_at = None;
    corpus.upsert(undated).unwrap();

    let recent: Vec<&str> = corpus.recent(3).iter().map(|a| a.slug.as_str()).collect();
    assert_eq!(recent, ["neuf", "moyen", "vieux"]);
    assert_eq!(corpus.recent(10).len(), 4);
}

// ============================================================
// JSON entry points
// ============================================================

#[test]
fn from_json_accepts_id_and_underscore_id() {
    let a = Article::from_json(&json!({
        "id": "42", "slug": "s", "title": "T"
    }))
    .unwrap();
    assert_eq!(a.id, "42");

    let b = Article::from_json(&json!({
        "_id": "43", "slug": "s", "title": "T"
    }))
    .unwrap();
    assert_eq!(b.id, "43");
}

#[test]
fn from_json_defaults_optional_fields() {
    let a = Article::from_json(&json!({
        "id": "1", "slug": "s", "title": "T"
    }))
    .unwrap();
    assert_eq!(a.content, "");
    assert!(a.category.is_none());
    assert!(a.tags.is_empty());
    assert!(a.links.is_empty());
    assert_eq!(a.article_type.to_string(), "process");
}

#[test]
fn from_json_rejects_missing_or_blank_required_fields() {
    let missing_title = json!({"id": "1", "slug": "s", "content": "c"});
    assert!(Article::from_json(&missing_title).is_err());

    let blank_slug = json!({"id": "1", "slug": "   ", "title": "T"});
    assert!(matches!(
        Article::from_json(&blank_slug),
        Err(AusaurError::MissingField(f)) if f == "slug"
    ));

    assert!(Article::from_json(&json!("not an object")).is_err());
}

#[test]
fn to_json_roundtrips() {
    let mut a = art("1", "slug", "Titre");
    a.tags = vec!["eau".to_string()];
    a.article_type = ausaur::ArticleType::Mail;

    let round = Article::from_json(&a.to_json()).unwrap();
    assert_eq!(round.id, a.id);
    assert_eq!(round.tags, a.tags);
    assert_eq!(round.article_type, ausaur::ArticleType::Mail);
}

#[test]
fn slugify_pairs_with_unique_slug() {
    let mut corpus = Corpus::new();
    let slug = slugify("Créer un abonnement");
    assert_eq!(slug, "creer-un-abonnement");
    corpus.upsert(art("1", &slug, "Créer un abonnement")).unwrap();

    assert_eq!(
        corpus.unique_slug(&slugify("Créer un abonnement"), None),
        "creer-un-abonnement-2"
    );
}
