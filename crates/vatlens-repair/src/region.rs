/// Extracts the outermost JSON-like region of `text`.
///
/// The region runs from the first `{` to the last `}`; when no such span
/// exists, from the first `[` to the last `]`. Returns `None` when neither
/// bracket pair appears in order. The scan is deliberately naive: it does
/// not balance brackets, so prose around the object is dropped while
/// anything between the outer brackets survives untouched.
pub fn extract_outer_region(text: &str) -> Option<&str> {
    bracketed(text, '{', '}').or_else(|| bracketed(text, '[', ']'))
}

fn bracketed(text: &str, open: char, close: char) -> Option<&str> {
    let start = text.find(open)?;
    let end = text.rfind(close)?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}
