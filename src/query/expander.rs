use crate::index::synonyms::SynonymTable;
use crate::tokenizer::normalize;
use std::collections::BTreeSet;

/// The deduplicated, normalized, synonym-expanded tokens derived from a
/// raw query. A `BTreeSet` keeps iteration deterministic.
pub type TermSet = BTreeSet<String>;

/// Tokenize `raw_query` on whitespace runs, normalize each token, and add
/// its synonyms from `table`.
///
/// The lookup key is the *normalized* token, matching how
/// [`SynonymTable::insert`] stores entries, so "Résiliation" and
/// "resiliation" expand identically. Empty input yields an empty set.
pub fn expand(raw_query: &str, table: &SynonymTable) -> TermSet {
    let mut terms = TermSet::new();
    for token in normalize(raw_query).split_whitespace() {
        terms.insert(token.to_string());
        if let Some(alternates) = table.get(token) {
            for alternate in alternates {
                // Alternates are normalized on insertion; re-normalizing
                // here keeps hand-built tables safe too.
                terms.insert(normalize(alternate));
            }
        }
    }
    terms
}
