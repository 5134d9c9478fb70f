use thiserror::Error;

/// Errors raised while resolving checker input to an object.
///
/// Everything after input resolution is total: a resolved object always
/// yields a report, however non-compliant.
#[derive(Error, Debug)]
pub enum CheckError {
    /// The input text contains no `{...}` span to parse.
    #[error("no JSON object found in input")]
    NoJsonFound,

    /// The input parsed, but not to a JSON object.
    #[error("input is not a JSON object: found {0}")]
    UnsupportedInput(&'static str),

    /// The located span was not valid JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}
