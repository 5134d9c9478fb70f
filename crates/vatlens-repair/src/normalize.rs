use regex::Regex;

/// Ordered normalization passes with their log descriptions.
const PASSES: [(fn(&str) -> Option<String>, &str); 4] = [
    (normalize_curly_quotes, "normalized curly quotes"),
    (replace_python_literals, "converted Python literals to JSON"),
    (strip_trailing_commas, "removed trailing commas"),
    (double_quote_strings, "replaced single quotes with double quotes"),
];

/// Applies the character normalization passes in order.
///
/// Returns the rewritten text plus one log line per pass that changed it.
/// The passes are blunt textual rewrites, which is why the cascade only
/// reaches them after the gentler parse attempts have failed.
pub fn normalize_characters(text: &str) -> (String, Vec<String>) {
    let mut current = text.to_string();
    let mut log = Vec::new();
    for (pass, message) in PASSES {
        if let Some(next) = pass(&current) {
            current = next;
            log.push(message.to_string());
        }
    }
    (current, log)
}

/// Straightens typographic quotes: `“”` to `"` and `‘’` to `'`.
fn normalize_curly_quotes(text: &str) -> Option<String> {
    let is_curly = |c: char| matches!(c, '\u{201C}' | '\u{201D}' | '\u{2018}' | '\u{2019}');
    if !text.chars().any(is_curly) {
        return None;
    }
    let replaced = text
        .chars()
        .map(|c| match c {
            '\u{201C}' | '\u{201D}' => '"',
            '\u{2018}' | '\u{2019}' => '\'',
            other => other,
        })
        .collect();
    Some(replaced)
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Rewrites bareword `True`/`False`/`None` to their JSON spellings.
///
/// Words inside double-quoted strings are left alone; the scan tracks
/// string state rather than just peeking at adjacent quote characters.
fn replace_python_literals(text: &str) -> Option<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut changed = false;
    let mut in_string = false;
    let mut escaped = false;
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            i += 1;
            continue;
        }
        if c == '"' {
            in_string = true;
            out.push(c);
            i += 1;
            continue;
        }
        if is_word_char(c) {
            let start = i;
            while i < chars.len() && is_word_char(chars[i]) {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            match word.as_str() {
                "True" => {
                    out.push_str("true");
                    changed = true;
                }
                "False" => {
                    out.push_str("false");
                    changed = true;
                }
                "None" => {
                    out.push_str("null");
                    changed = true;
                }
                _ => out.push_str(&word),
            }
            continue;
        }
        out.push(c);
        i += 1;
    }
    changed.then_some(out)
}

/// Drops commas that directly precede a closing `}` or `]`.
fn strip_trailing_commas(text: &str) -> Option<String> {
    let re = Regex::new(r",\s*([}\]])").expect("invalid regex");
    let replaced = re.replace_all(text, "$1");
    if replaced == text {
        return None;
    }
    Some(replaced.into_owned())
}

/// Rewrites unescaped single quotes to double quotes.
fn double_quote_strings(text: &str) -> Option<String> {
    let mut out = String::with_capacity(text.len());
    let mut changed = false;
    let mut prev_backslash = false;
    for c in text.chars() {
        if c == '\'' && !prev_backslash {
            out.push('"');
            changed = true;
        } else {
            out.push(c);
        }
        prev_backslash = c == '\\' && !prev_backslash;
    }
    changed.then_some(out)
}
