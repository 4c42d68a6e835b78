//! Keyword matching helpers shared by every rule table.
//!
//! All matching in the engine is case-folded substring search. There is no
//! tokenisation, so `"no"` also matches inside `"not"` or `"nose"`.

/// Case-fold text for matching.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
}

/// True if any needle occurs in the (already normalized) haystack.
pub fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Join fragments with single spaces, the way transcripts are scanned.
pub fn join_fragments<S: AsRef<str>>(fragments: &[S]) -> String {
    fragments
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Capitalize the first letter of every alphabetic run and lowercase the rest.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}
