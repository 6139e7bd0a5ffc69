use crate::tokenizer::normalize;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::Path;

/// Mapping from a normalized token to its normalized alternates.
///
/// Keys and alternates are normalized on insertion, so lookups with any
/// accenting or casing of a token resolve to the same entry. The table is
/// static for the lifetime of a search session; it expands queries only
/// and is never indexed against articles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SynonymTable {
    entries: HashMap<String, Vec<String>>,
}

impl SynonymTable {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Build a table from symmetric groups: every member of a group maps
    /// to all the other members.
    pub fn from_groups(groups: &[&[&str]]) -> Self {
        let mut table = Self::new();
        for group in groups {
            for member in *group {
                let alternates: Vec<String> = group
                    .iter()
                    .filter(|other| *other != member)
                    .map(|other| other.to_string())
                    .collect();
                table.insert(member, alternates);
            }
        }
        table
    }

    /// Load a table from a JSON file of the form `{"token": ["alt", …]}`.
    pub fn load<P: AsRef<Path>>(path: P) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let raw: HashMap<String, Vec<String>> = serde_json::from_str(&content)?;

        let mut table = Self::new();
        for (token, alternates) in raw {
            table.insert(&token, alternates);
        }
        Ok(table)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> crate::error::Result<()> {
        let content = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Insert an entry, normalizing the key and every alternate. An
    /// existing entry for the same normalized key is replaced.
    pub fn insert(&mut self, token: &str, alternates: Vec<String>) {
        let alternates: Vec<String> = alternates.iter().map(|a| normalize(a)).collect();
        self.entries.insert(normalize(token), alternates);
    }

    /// Look up a token. The token must already be normalized; callers in
    /// the query path get this from [`normalize`] splitting.
    pub fn get(&self, token: &str) -> Option<&[String]> {
        self.entries.get(token).map(Vec::as_slice)
    }

    pub fn remove(&mut self, token: &str) -> Option<Vec<String>> {
        self.entries.remove(&normalize(token))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The built-in table for the French support vocabulary the knowledge
    /// base is written in.
    pub fn french() -> &'static SynonymTable {
        static FRENCH: Lazy<SynonymTable> = Lazy::new(|| {
            SynonymTable::from_groups(&[
                &["mail", "email", "courriel", "courrier"],
                &["résiliation", "annulation"],
                &["abonnement", "souscription", "contrat"],
                &["rib", "iban"],
                &["paiement", "règlement"],
                &["index", "relevé"],
                &["modèle", "template"],
                &["démarche", "procédure", "processus"],
            ])
        });
        &FRENCH
    }
}
