use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Article identifier, opaque and stable across edits.
pub type ArticleId = String;
/// Human-readable unique key. May change on edit; the [`Corpus`](crate::Corpus)
/// re-keys its entry when it does.
pub type Slug = String;

/// The closed set of article kinds the knowledge base distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ArticleType {
    #[default]
    Process,
    Mail,
    Outil,
}

impl std::fmt::Display for ArticleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArticleType::Process => write!(f, "process"),
            ArticleType::Mail => write!(f, "mail"),
            ArticleType::Outil => write!(f, "outil"),
        }
    }
}

/// A knowledge-base article, the unit of search and display.
///
/// Every field except `id`, `slug` and `title` is optional on the wire:
/// absent `content`/`tags`/`links` deserialize to empty, so partially
/// filled documents degrade gracefully instead of failing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    #[serde(alias = "_id")]
    pub id: ArticleId,
    pub slug: Slug,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(rename = "type", default)]
    pub article_type: ArticleType,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Slugs of cross-referenced articles. A dangling link (target not in
    /// the corpus) is a valid, displayable state; resolution is deferred
    /// to [`Corpus::resolve_links`](crate::Corpus::resolve_links).
    #[serde(default)]
    pub links: Vec<Slug>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Article {
    /// Parse an [`Article`] from a JSON object.
    ///
    /// Accepts either `"id"` or `"_id"` as the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AusaurError::InvalidArticle`](crate::AusaurError::InvalidArticle)
    /// if the value is not an object or fails to deserialize, and
    /// [`AusaurError::MissingField`](crate::AusaurError::MissingField) if
    /// `id`, `slug` or `title` is absent or empty.
    pub fn from_json(json: &serde_json::Value) -> crate::error::Result<Self> {
        use crate::error::AusaurError;

        if !json.is_object() {
            return Err(AusaurError::InvalidArticle(
                "Expected JSON object".to_string(),
            ));
        }
        let article: Article = serde_json::from_value(json.clone())
            .map_err(|e| AusaurError::InvalidArticle(e.to_string()))?;

        for (field, value) in [
            ("id", &article.id),
            ("slug", &article.slug),
            ("title", &article.title),
        ] {
            if value.trim().is_empty() {
                return Err(AusaurError::MissingField(field.to_string()));
            }
        }

        Ok(article)
    }

    pub fn to_json(&self) -> serde_json::Value {
        // Serialization of a well-formed Article cannot fail.
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

/// An article paired with its relevance score.
#[derive(Debug, Clone)]
pub struct ScoredArticle {
    pub article: Article,
    pub score: u32,
}

/// A single search hit, shaped for display: full article metadata plus a
/// content preview, so callers can render a suggestion row without
/// re-fetching the article.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hit {
    pub id: ArticleId,
    pub slug: Slug,
    pub title: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(rename = "type", default)]
    pub article_type: ArticleType,
    #[serde(default)]
    pub tags: Vec<String>,
    pub snippet: String,
    pub score: u32,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Results returned by [`QueryExecutor::search`](crate::QueryExecutor::search).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Matching hits, best first, truncated to `max_results`.
    pub hits: Vec<Hit>,
    /// Total number of matching articles before truncation.
    pub total: usize,
}
