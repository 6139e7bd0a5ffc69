//! The in-memory article corpus: the full current collection of documents
//! visible to search.
//!
//! The corpus is owned by the caller (populated from a network fetch or an
//! embedded dataset at startup) and mutated only through
//! [`Corpus::upsert`] / [`Corpus::remove`] after create/edit/delete
//! operations succeed against the backend. Search never mutates it.

pub mod settings;
pub mod synonyms;

use crate::error::{AusaurError, Result};
use crate::tokenizer::normalize;
use crate::types::{Article, ArticleId, Slug};
use indexmap::IndexMap;

/// Pre-normalized searchable fields, rebuilt whenever the owning entry
/// changes so scoring never re-folds text per query.
#[derive(Debug, Clone)]
pub(crate) struct NormalizedFields {
    pub title: String,
    pub tags: String,
    pub content: String,
}

impl NormalizedFields {
    pub(crate) fn of(article: &Article) -> Self {
        NormalizedFields {
            title: normalize(&article.title),
            tags: normalize(&article.tags.join(" ")),
            content: normalize(&article.content),
        }
    }
}

#[derive(Debug, Clone)]
struct Entry {
    article: Article,
    norm: NormalizedFields,
}

/// One cross-reference out of an article, resolved against the corpus.
/// `target` is `None` for a dangling link, a valid state the display
/// layer grays out, never an error.
#[derive(Debug, Clone)]
pub struct ResolvedLink<'a> {
    pub slug: &'a str,
    pub target: Option<&'a Article>,
}

/// Slug-keyed, insertion-ordered collection of articles.
///
/// Invariant: each slug maps to exactly one article at any point in time.
/// An article's `links` may reference slugs that are not (or no longer)
/// present; resolution is deferred to [`Corpus::resolve_links`].
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    entries: IndexMap<Slug, Entry>,
}

impl Corpus {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Build a corpus from a snapshot of articles.
    ///
    /// # Errors
    ///
    /// Propagates [`AusaurError::SlugConflict`] when two articles with
    /// different ids claim the same slug, and
    /// [`AusaurError::MissingField`] for blank `id`/`slug`.
    pub fn from_articles(articles: Vec<Article>) -> Result<Self> {
        let mut corpus = Self::new();
        for article in articles {
            corpus.upsert(article)?;
        }
        Ok(corpus)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Article> {
        self.entries.values().map(|e| &e.article)
    }

    pub(crate) fn iter_entries(&self) -> impl Iterator<Item = (&Article, &NormalizedFields)> {
        self.entries.values().map(|e| (&e.article, &e.norm))
    }

    pub fn get(&self, slug: &str) -> Option<&Article> {
        self.entries.get(slug).map(|e| &e.article)
    }

    pub fn get_by_id(&self, id: &str) -> Option<&Article> {
        self.entries
            .values()
            .map(|e| &e.article)
            .find(|a| a.id == id)
    }

    pub fn contains_slug(&self, slug: &str) -> bool {
        self.entries.contains_key(slug)
    }

    /// Insert a new article or replace the existing one with the same id,
    /// re-keying the entry when the slug changed.
    ///
    /// # Errors
    ///
    /// [`AusaurError::SlugConflict`] when the slug is already held by a
    /// *different* article, [`AusaurError::MissingField`] for blank
    /// `id`/`slug`.
    pub fn upsert(&mut self, article: Article) -> Result<()> {
        if article.id.trim().is_empty() {
            return Err(AusaurError::MissingField("id".to_string()));
        }
        if article.slug.trim().is_empty() {
            return Err(AusaurError::MissingField("slug".to_string()));
        }

        if let Some(existing) = self.entries.get(&article.slug) {
            if existing.article.id != article.id {
                return Err(AusaurError::SlugConflict(article.slug.clone()));
            }
        }

        // Slug changed on edit: drop the entry under the old slug first.
        let old_slug = self
            .entries
            .values()
            .find(|e| e.article.id == article.id && e.article.slug != article.slug)
            .map(|e| e.article.slug.clone());
        if let Some(old_slug) = old_slug {
            self.entries.shift_remove(&old_slug);
            tracing::debug!("[CORPUS] re-keyed {} -> {}", old_slug, article.slug);
        }

        let norm = NormalizedFields::of(&article);
        self.entries
            .insert(article.slug.clone(), Entry { article, norm });
        Ok(())
    }

    /// Remove by id. Returns the removed article, if any.
    pub fn remove(&mut self, id: &str) -> Option<Article> {
        let slug = self
            .entries
            .values()
            .find(|e| e.article.id == id)
            .map(|e| e.article.slug.clone())?;
        self.remove_by_slug(&slug)
    }

    /// Remove by slug. Returns the removed article, if any.
    pub fn remove_by_slug(&mut self, slug: &str) -> Option<Article> {
        self.entries.shift_remove(slug).map(|e| e.article)
    }

    /// First free variant of `wanted`: `wanted`, then `wanted-2`,
    /// `wanted-3`, … Pass the article's own id when re-slugging an edit so
    /// its current slug does not count as taken.
    pub fn unique_slug(&self, wanted: &str, exclude_id: Option<&ArticleId>) -> Slug {
        let base = if wanted.trim().is_empty() {
            "article"
        } else {
            wanted
        };
        let taken = |slug: &str| {
            self.entries
                .get(slug)
                .is_some_and(|e| Some(&e.article.id) != exclude_id)
        };
        if !taken(base) {
            return base.to_string();
        }
        let mut n = 2;
        loop {
            let candidate = format!("{}-{}", base, n);
            if !taken(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }

    /// Resolve an article's cross-references against the current corpus.
    /// Dangling targets come back as `None`; never an error.
    pub fn resolve_links<'a>(&'a self, article: &'a Article) -> Vec<ResolvedLink<'a>> {
        article
            .links
            .iter()
            .map(|slug| ResolvedLink {
                slug,
                target: self.get(slug),
            })
            .collect()
    }

    /// The `n` most recently updated articles, newest first. Articles
    /// without an `updated_at` sort last, in insertion order.
    pub fn recent(&self, n: usize) -> Vec<&Article> {
        let mut articles: Vec<&Article> = self.iter().collect();
        articles.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        articles.truncate(n);
        articles
    }
}
