use serde_json::{Map, Value};

/// Section keys whose object values fold into the flat index.
const SECTION_KEYS: [&str; 3] = ["header", "body", "tail"];

/// Case-insensitive key index over a parsed model object.
///
/// Model output spells field names unpredictably (`TotalAmount`,
/// `totalamount`, `Totalamount`) and sometimes nests them under `header`,
/// `body`, or `tail` sections. A `KeyMap` flattens one object into a single
/// lookup table keyed by the lowercased field name. When two keys collide
/// after folding, the first one in document order wins.
#[derive(Debug)]
pub struct KeyMap<'a> {
    entries: Vec<Entry<'a>>,
}

#[derive(Debug)]
struct Entry<'a> {
    folded: String,
    original: &'a str,
    value: &'a Value,
}

impl<'a> KeyMap<'a> {
    /// Indexes the keys of `root` without descending into sections.
    pub fn new(root: &'a Map<String, Value>) -> Self {
        let mut map = KeyMap {
            entries: Vec::with_capacity(root.len()),
        };
        for (key, value) in root {
            map.insert(key, value);
        }
        map
    }

    /// Indexes `root`, folding `header`/`body`/`tail` section objects into
    /// the flat table at their position in document order.
    ///
    /// Section keys themselves are matched case-insensitively; a section
    /// whose value is not an object is indexed as an ordinary key.
    pub fn flattened(root: &'a Map<String, Value>) -> Self {
        let mut map = KeyMap {
            entries: Vec::with_capacity(root.len()),
        };
        for (key, value) in root {
            let is_section = SECTION_KEYS
                .iter()
                .any(|section| key.eq_ignore_ascii_case(section));
            match value.as_object() {
                Some(section) if is_section => {
                    for (inner_key, inner_value) in section {
                        map.insert(inner_key, inner_value);
                    }
                }
                _ => map.insert(key, value),
            }
        }
        map
    }

    /// Resolves `field` case-insensitively to its value.
    pub fn get(&self, field: &str) -> Option<&'a Value> {
        let folded = field.to_lowercase();
        self.entries
            .iter()
            .find(|entry| entry.folded == folded)
            .map(|entry| entry.value)
    }

    /// Resolves `field` to the text of a scalar value, coercing numbers
    /// and booleans to their JSON form.
    pub fn get_text(&self, field: &str) -> Option<String> {
        self.get(field).and_then(scalar_text)
    }

    /// Returns the key as it was spelled in the document, if present.
    pub fn original_key(&self, field: &str) -> Option<&'a str> {
        let folded = field.to_lowercase();
        self.entries
            .iter()
            .find(|entry| entry.folded == folded)
            .map(|entry| entry.original)
    }

    /// Whether `field` resolves to any value, including `null`.
    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// Iterates over `(original_key, value)` pairs in document order.
    ///
    /// Keys that lost a fold collision are not included.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a Value)> + '_ {
        self.entries.iter().map(|entry| (entry.original, entry.value))
    }

    /// Number of distinct folded keys in the index.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index holds no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, key: &'a str, value: &'a Value) {
        let folded = key.to_lowercase();
        if self.entries.iter().any(|entry| entry.folded == folded) {
            return;
        }
        self.entries.push(Entry {
            folded,
            original: key,
            value,
        });
    }
}

/// Coerces a scalar JSON value to text.
///
/// Strings pass through; numbers and booleans render in their JSON form.
/// `null`, arrays, and objects have no text form.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
