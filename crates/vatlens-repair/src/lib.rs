//! Best-effort repair of near-JSON model output.
//!
//! Vision-language models asked for JSON frequently return something close
//! to it: fenced in markdown, wrapped in prose, quoted Python-style, or
//! carrying trailing commas. [`repair`] turns any such text into valid JSON
//! through an ordered cascade of increasingly aggressive stages, and never
//! fails: when nothing parses, the original text is preserved under a
//! `"raw"` key. Every transformation and parse attempt is recorded in the
//! outcome's log.
//!
//! The cascade:
//!
//! 1. strip markdown code fences
//! 2. extract the outermost `{...}` or `[...]` region
//! 3. strict JSON parse
//! 4. Python-style literal parse (single quotes, `True`/`False`/`None`)
//! 5. character normalization (curly quotes, bareword literals, trailing
//!    commas, single-to-double quote rewrite), then a final strict parse
//! 6. `{"raw": <original text>}` fallback
//!
#![deny(missing_docs)]

/// Markdown code fence stripping.
pub mod fence;
/// Python-style literal parsing.
pub mod literal;
/// Character-level normalization passes.
pub mod normalize;
/// The repair cascade.
pub mod pipeline;
/// Outer JSON-region extraction.
pub mod region;
/// Advisory structural validation against a JSON Schema subset.
pub mod schema;

pub use literal::{parse_literal, LiteralError};
pub use pipeline::{repair, RepairOutcome};
pub use schema::validate_schema;
