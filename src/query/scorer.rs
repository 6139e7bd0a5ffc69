use crate::index::settings::FieldWeights;
use crate::index::NormalizedFields;
use crate::query::expander::TermSet;
use crate::types::Article;

/// Score `article` against a term set with the default field weights
/// (title 5, tags 2, content 1).
///
/// A field scores a hit when its normalized text *contains* the term as a
/// substring; a term may hit several fields, each contributing its weight
/// once. No stemming, no fuzzy matching, no term-frequency component.
///
/// An empty term set scores 1 for every article, the uniform
/// "no filtering" value. The orchestrator only reaches that case through
/// [`QueryExecutor::browse`](crate::QueryExecutor::browse); ranking gates
/// short and empty queries out before scoring.
pub fn score(article: &Article, terms: &TermSet) -> u32 {
    score_normalized(
        &NormalizedFields::of(article),
        terms,
        &FieldWeights::default(),
    )
}

pub(crate) fn score_normalized(
    fields: &NormalizedFields,
    terms: &TermSet,
    weights: &FieldWeights,
) -> u32 {
    if terms.is_empty() {
        return 1;
    }

    let mut total = 0;
    for term in terms {
        if fields.title.contains(term.as_str()) {
            total += weights.title;
        }
        if fields.tags.contains(term.as_str()) {
            total += weights.tags;
        }
        if fields.content.contains(term.as_str()) {
            total += weights.content;
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ArticleType;

    fn article(title: &str, tags: &[&str], content: &str) -> Article {
        Article {
            id: "1".to_string(),
            slug: "a".to_string(),
            title: title.to_string(),
            content: content.to_string(),
            category: None,
            article_type: ArticleType::Process,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            links: vec![],
            created_at: None,
            updated_at: None,
        }
    }

    fn terms(words: &[&str]) -> TermSet {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_empty_term_set_scores_one() {
        let a = article("Anything", &["tag"], "body");
        assert_eq!(score(&a, &TermSet::new()), 1);
    }

    #[test]
    fn test_field_weights() {
        let a = article("Cancel subscription", &["billing"], "Refund process");
        assert_eq!(score(&a, &terms(&["cancel"])), 5);
        assert_eq!(score(&a, &terms(&["billing"])), 2);
        assert_eq!(score(&a, &terms(&["refund"])), 1);
    }

    #[test]
    fn test_term_may_hit_multiple_fields() {
        let a = article("Billing FAQ", &["billing"], "billing details");
        assert_eq!(score(&a, &terms(&["billing"])), 5 + 2 + 1);
    }

    #[test]
    fn test_substring_containment_not_word_boundary() {
        let a = article("Mensualisation", &[], "");
        assert_eq!(score(&a, &terms(&["mensu"])), 5);
    }

    #[test]
    fn test_fixed_weight_once_per_term_per_field() {
        let a = article("billing billing billing", &[], "");
        assert_eq!(score(&a, &terms(&["billing"])), 5);
    }

    #[test]
    fn test_scores_sum_across_terms() {
        let a = article("Cancel subscription", &["billing"], "Refund process");
        assert_eq!(score(&a, &terms(&["cancel", "billing", "refund"])), 5 + 2 + 1);
    }

    #[test]
    fn test_no_hit_scores_zero() {
        let a = article("Cancel subscription", &["billing"], "Refund process");
        assert_eq!(score(&a, &terms(&["mandate"])), 0);
    }
}
