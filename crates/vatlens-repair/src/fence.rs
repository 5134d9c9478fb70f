use regex::Regex;

/// Removes markdown code fence markers from `text`.
///
/// Fence markers may carry a `json` language tag in any case. Returns the
/// stripped and trimmed text when at least one marker was present, `None`
/// when the text carries no fence.
pub fn strip_code_fences(text: &str) -> Option<String> {
    if !text.contains("```") {
        return None;
    }
    let fence = Regex::new(r"(?i)```(?:json)?").expect("invalid regex");
    Some(fence.replace_all(text, "").trim().to_string())
}
