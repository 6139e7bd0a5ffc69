use crate::index::settings::SearchSettings;
use crate::index::synonyms::SynonymTable;
use crate::index::Corpus;
use crate::query::expander::{expand, TermSet};
use crate::query::scorer::score_normalized;
use crate::query::snippet::make_snippet;
use crate::types::{Article, Hit, ScoredArticle, SearchResponse};

/// Runs queries against a caller-owned [`Corpus`] snapshot.
///
/// The executor holds configuration only (settings and the synonym
/// table), so it is a pure function of `(corpus, query)`: no hidden
/// state, no I/O, safe to call repeatedly or speculatively (e.g. on every
/// keystroke). When overlapping searches resolve out of order, the
/// *caller* applies last-request-wins; the executor has no request
/// identity.
#[derive(Debug, Clone, Default)]
pub struct QueryExecutor {
    settings: SearchSettings,
    synonyms: SynonymTable,
}

impl QueryExecutor {
    /// Executor with default settings and no synonyms. The knowledge-base
    /// deployment layers on [`SynonymTable::french`].
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(mut self, settings: SearchSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_synonyms(mut self, synonyms: SynonymTable) -> Self {
        self.synonyms = synonyms;
        self
    }

    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    /// Rank every matching article, best first, untruncated.
    ///
    /// Returns exactly the articles scoring above zero against the
    /// expanded term set, sorted by descending score with ascending
    /// case-sensitive `title` as the tie-break. A trimmed query shorter
    /// than `min_query_length` chars, or one whose expansion produces no
    /// terms, yields an empty ranking ("no suggestions", not an error).
    pub fn rank(&self, corpus: &Corpus, raw_query: &str) -> Vec<ScoredArticle> {
        match self.gated_terms(raw_query) {
            Some(terms) => self.rank_terms(corpus, &terms, None),
            None => Vec::new(),
        }
    }

    /// [`rank`](Self::rank) shaped for display: hits carry a content
    /// snippet and are truncated to `max_results`; `total` keeps the
    /// pre-truncation count.
    pub fn search(&self, corpus: &Corpus, raw_query: &str) -> SearchResponse {
        self.build_response(self.rank(corpus, raw_query))
    }

    /// [`search`](Self::search) restricted to articles whose `category`
    /// is one of `categories`. An article without a category never
    /// matches a filter.
    pub fn search_in_categories(
        &self,
        corpus: &Corpus,
        raw_query: &str,
        categories: &[String],
    ) -> SearchResponse {
        match self.gated_terms(raw_query) {
            Some(terms) => self.build_response(self.rank_terms(corpus, &terms, Some(categories))),
            None => SearchResponse {
                hits: Vec::new(),
                total: 0,
            },
        }
    }

    /// Explicit "browse all" semantics: every article (optionally
    /// restricted to `categories`), most recently updated first, then
    /// title ascending. Untruncated, since this backs a listing rather
    /// than the suggestion strip; each hit carries the uniform score 1.
    pub fn browse(&self, corpus: &Corpus, categories: Option<&[String]>) -> SearchResponse {
        let mut articles: Vec<&Article> = corpus
            .iter()
            .filter(|a| category_matches(a, categories))
            .collect();
        articles.sort_by(|a, b| {
            b.updated_at
                .cmp(&a.updated_at)
                .then_with(|| a.title.cmp(&b.title))
        });

        let hits: Vec<Hit> = articles.into_iter().map(|a| self.to_hit(a, 1)).collect();
        let total = hits.len();
        SearchResponse { hits, total }
    }

    // The minimum-length gate is authoritative: a query below the
    // threshold, or one that expands to no terms, never reaches scoring.
    // "Return everything" lives only in `browse`.
    fn gated_terms(&self, raw_query: &str) -> Option<TermSet> {
        let query = raw_query.trim();
        if query.chars().count() < self.settings.min_query_length {
            return None;
        }
        let terms = expand(query, &self.synonyms);
        (!terms.is_empty()).then_some(terms)
    }

    fn rank_terms(
        &self,
        corpus: &Corpus,
        terms: &TermSet,
        categories: Option<&[String]>,
    ) -> Vec<ScoredArticle> {
        let t0 = std::time::Instant::now();
        let mut ranked: Vec<ScoredArticle> = corpus
            .iter_entries()
            .filter(|(article, _)| category_matches(article, categories))
            .filter_map(|(article, norm)| {
                let score = score_normalized(norm, terms, &self.settings.weights);
                (score > 0).then(|| ScoredArticle {
                    article: article.clone(),
                    score,
                })
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| a.article.title.cmp(&b.article.title))
        });

        tracing::debug!(
            "[SEARCH] terms={} scanned={} kept={} in {:?}",
            terms.len(),
            corpus.len(),
            ranked.len(),
            t0.elapsed()
        );
        ranked
    }

    fn build_response(&self, ranked: Vec<ScoredArticle>) -> SearchResponse {
        let total = ranked.len();
        let hits = ranked
            .into_iter()
            .take(self.settings.max_results)
            .map(|scored| self.to_hit(&scored.article, scored.score))
            .collect();
        SearchResponse { hits, total }
    }

    fn to_hit(&self, article: &Article, score: u32) -> Hit {
        Hit {
            id: article.id.clone(),
            slug: article.slug.clone(),
            title: article.title.clone(),
            category: article.category.clone(),
            article_type: article.article_type,
            tags: article.tags.clone(),
            snippet: make_snippet(&article.content, self.settings.snippet_length),
            score,
            updated_at: article.updated_at,
        }
    }
}

fn category_matches(article: &Article, categories: Option<&[String]>) -> bool {
    match categories {
        None => true,
        Some(wanted) => article
            .category
            .as_ref()
            .is_some_and(|c| wanted.contains(c)),
    }
}
