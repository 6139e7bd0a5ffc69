/// Slice `content` down to a preview of at most `max_chars` chars,
/// appending an ellipsis only when something was actually cut. Cuts on
/// char boundaries, so accented text never splits mid-character.
pub fn make_snippet(content: &str, max_chars: usize) -> String {
    let mut chars = content.char_indices();
    match chars.nth(max_chars) {
        None => content.to_string(),
        Some((byte_end, _)) => {
            let mut out = content[..byte_end].to_string();
            out.push('…');
            out
        }
    }
}
