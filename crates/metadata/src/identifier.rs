use crate::DETAILS_MARKER;

/// Turns a pasted details link or bare identifier into the identifier the
/// metadata endpoint expects. Blank input yields `None`.
///
/// The identifier itself is not validated; a bad one surfaces later as a
/// failed lookup.
pub fn resolve_identifier(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if !trimmed.contains(DETAILS_MARKER) {
        return Some(trimmed.to_string());
    }

    let tail = trimmed
        .split_once("/details/")
        .map(|(_, tail)| tail)
        .unwrap_or("");
    let segment = tail.split('/').next().unwrap_or(tail);
    let segment = segment.split('?').next().unwrap_or(segment);
    Some(segment.trim().to_string())
}
