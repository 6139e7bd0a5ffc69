use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_min_query_length() -> usize {
    2
}

fn default_max_results() -> usize {
    12
}

fn default_snippet_length() -> usize {
    160
}

fn default_title_weight() -> u32 {
    5
}

fn default_tags_weight() -> u32 {
    2
}

fn default_content_weight() -> u32 {
    1
}

/// Per-field contribution of a term hit to an article's score.
///
/// A term that appears in several fields contributes each field's weight
/// once; there is no term-frequency component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldWeights {
    #[serde(default = "default_title_weight")]
    pub title: u32,
    #[serde(default = "default_tags_weight")]
    pub tags: u32,
    #[serde(default = "default_content_weight")]
    pub content: u32,
}

impl Default for FieldWeights {
    fn default() -> Self {
        FieldWeights {
            title: default_title_weight(),
            tags: default_tags_weight(),
            content: default_content_weight(),
        }
    }
}

/// Tunable search behavior. Every variance point the call sites used to
/// hard-code lives here under a named option.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Trimmed queries shorter than this (in chars) yield no suggestions.
    #[serde(rename = "minQueryLength", default = "default_min_query_length")]
    pub min_query_length: usize,

    /// Maximum number of hits a [`SearchResponse`](crate::SearchResponse)
    /// carries. Ranking itself is not truncated.
    #[serde(rename = "maxResults", default = "default_max_results")]
    pub max_results: usize,

    /// Length (in chars) of the content preview on each hit.
    #[serde(rename = "snippetLength", default = "default_snippet_length")]
    pub snippet_length: usize,

    #[serde(rename = "fieldWeights")]
    pub weights: FieldWeights,
}

impl Default for SearchSettings {
    fn default() -> Self {
        SearchSettings {
            min_query_length: default_min_query_length(),
            max_results: default_max_results(),
            snippet_length: default_snippet_length(),
            weights: FieldWeights::default(),
        }
    }
}

impl SearchSettings {
    pub fn load<P: AsRef<Path>>(path: P) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: SearchSettings = serde_json::from_str(&content)?;
        Ok(settings)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> crate::error::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = SearchSettings::default();
        assert_eq!(settings.min_query_length, 2);
        assert_eq!(settings.max_results, 12);
        assert_eq!(settings.snippet_length, 160);
        assert_eq!(settings.weights.title, 5);
        assert_eq!(settings.weights.tags, 2);
        assert_eq!(settings.weights.content, 1);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{"maxResults": 20}"#;
        let settings: SearchSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.max_results, 20);
        assert_eq!(settings.min_query_length, 2); // default value
        assert_eq!(settings.weights, FieldWeights::default());
    }

    #[test]
    fn test_settings_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("settings.json");

        let original = SearchSettings {
            min_query_length: 3,
            max_results: 24,
            snippet_length: 240,
            weights: FieldWeights {
                title: 10,
                tags: 4,
                content: 2,
            },
        };

        original.save(&path).unwrap();
        let loaded = SearchSettings::load(&path).unwrap();

        assert_eq!(loaded.min_query_length, original.min_query_length);
        assert_eq!(loaded.max_results, original.max_results);
        assert_eq!(loaded.snippet_length, original.snippet_length);
        assert_eq!(loaded.weights, original.weights);
    }
}
