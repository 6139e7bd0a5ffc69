//! Text normalization shared by indexing, query expansion and scoring.
//!
//! Matching is accent- and case-insensitive: `"Résiliation"`,
//! `"RÉSILIATION"` and `"resiliation"` all normalize to the same string.
//! Digits, punctuation and hyphens pass through untouched.

/// Lowercase `text` and strip diacritical marks.
///
/// Idempotent: `normalize(normalize(x)) == normalize(x)`.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars().flat_map(char::to_lowercase) {
        fold_char(c, &mut out);
    }
    out
}

// Folds one lowercased char into `out`. Covers Latin-1 Supplement and the
// Latin Extended-A chars that occur in French, plus the oe/ae ligatures
// which decompose to two chars.
fn fold_char(c: char, out: &mut String) {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' => out.push('a'),
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => out.push('e'),
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'į' => out.push('i'),
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' => out.push('o'),
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' => out.push('u'),
        'ý' | 'ÿ' => out.push('y'),
        'ç' | 'ć' | 'č' => out.push('c'),
        'ñ' | 'ń' => out.push('n'),
        'š' => out.push('s'),
        'ž' => out.push('z'),
        'œ' => out.push_str("oe"),
        'æ' => out.push_str("ae"),
        'ß' => out.push_str("ss"),
        _ => out.push(c),
    }
}

/// Derive a URL-safe slug from a title: normalized text with whitespace
/// collapsed to single hyphens and everything outside `[a-z0-9-]` dropped.
///
/// Returns `"article"` for input that folds down to nothing, so a caller
/// always gets a usable key (pair with
/// [`Corpus::unique_slug`](crate::Corpus::unique_slug) for uniqueness).
pub fn slugify(title: &str) -> String {
    let normalized = normalize(title);
    let mut out = String::with_capacity(normalized.len());
    for c in normalized.chars() {
        match c {
            'a'..='z' | '0'..='9' => out.push(c),
            c if c.is_whitespace() || c == '-' => {
                if !out.ends_with('-') {
                    out.push('-');
                }
            }
            _ => {}
        }
    }
    let trimmed = out.trim_matches('-');
    if trimmed.is_empty() {
        "article".to_string()
    } else {
        trimmed.to_string()
    }
}
