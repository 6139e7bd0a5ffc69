//! # Ausaur
//!
//! Relevance search and suggestion engine for knowledge-base articles:
//! weighted substring scoring with synonym expansion over a caller-owned,
//! in-memory corpus.
//!
//! The engine is deliberately small and pure: it does no I/O, holds no
//! hidden state, and never mutates the corpus it searches. Fetching
//! articles, rendering hits and persisting edits are the caller's
//! collaborators; the engine turns `(corpus snapshot, query)` into a
//! deterministic ranking and nothing else.
//!
//! ## Quick start
//!
//! ```rust
//! use ausaur::{Article, Corpus, QueryExecutor, SynonymTable};
//! use serde_json::json;
//!
//! # fn main() -> ausaur::Result<()> {
//! let corpus = Corpus::from_articles(vec![
//!     Article::from_json(&json!({
//!         "id": "1", "slug": "resilier-un-abonnement",
//!         "title": "Résilier un abonnement",
//!         "tags": ["résiliation", "contrat"],
//!         "content": "Procédure complète de résiliation…",
//!     }))?,
//!     Article::from_json(&json!({
//!         "id": "2", "slug": "modele-mail-relance",
//!         "title": "Modèle de mail de relance",
//!         "type": "mail",
//!         "content": "Bonjour, …",
//!     }))?,
//! ])?;
//!
//! let executor = QueryExecutor::new().with_synonyms(SynonymTable::french().clone());
//!
//! // Accent- and case-insensitive, synonym-expanded, best hit first.
//! let response = executor.search(&corpus, "RESILIATION");
//! assert_eq!(response.hits[0].slug, "resilier-un-abonnement");
//!
//! // "courriel" reaches the mail template through the synonym table.
//! let response = executor.search(&corpus, "courriel");
//! assert_eq!(response.hits[0].slug, "modele-mail-relance");
//! # Ok(())
//! # }
//! ```
//!
//! ## Ranking rule
//!
//! Each query term hits a field when the normalized field contains the
//! term as a substring: +5 title, +2 tags, +1 content (configurable via
//! [`SearchSettings`]). Results are exactly the articles scoring above
//! zero, sorted by descending score, ties broken by ascending title.

pub mod error;
pub mod index;
pub mod query;
pub mod tokenizer;
pub mod types;

pub use error::{AusaurError, Result};
pub use index::settings::{FieldWeights, SearchSettings};
pub use index::synonyms::SynonymTable;
pub use index::{Corpus, ResolvedLink};
pub use query::{expand, score, QueryExecutor, TermSet};
pub use tokenizer::{normalize, slugify};
pub use types::*;
