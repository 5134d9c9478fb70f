use serde_json::{Map, Number, Value};
use thiserror::Error;

/// Error from a failed literal parse.
#[derive(Debug, Error)]
#[error("{message} at offset {offset}")]
pub struct LiteralError {
    /// Character offset where parsing stopped.
    pub offset: usize,
    /// What the parser found or was missing.
    pub message: String,
}

/// Parses Python-style literal text into a JSON value.
///
/// Accepts the shapes models actually emit when they slip out of JSON:
/// single- or double-quoted strings, `True`/`False`/`None` barewords,
/// numbers, lists, tuples, and dicts, all with optional trailing commas.
/// Tuples become arrays; scalar dict keys are coerced to their JSON text
/// form. Trailing garbage after the value is an error, so a failed attempt
/// leaves the input available for later stages unchanged.
pub fn parse_literal(text: &str) -> Result<Value, LiteralError> {
    let mut parser = Parser {
        chars: text.chars().collect(),
        pos: 0,
    };
    parser.skip_whitespace();
    let value = parser.parse_value()?;
    parser.skip_whitespace();
    if parser.pos < parser.chars.len() {
        return Err(parser.error("unexpected trailing characters"));
    }
    Ok(value)
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    fn error(&self, message: &str) -> LiteralError {
        LiteralError {
            offset: self.pos,
            message: message.to_string(),
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.pos += 1;
        }
    }

    fn parse_value(&mut self) -> Result<Value, LiteralError> {
        match self.peek() {
            Some('{') => self.parse_dict(),
            Some('[') => self.parse_sequence(']'),
            Some('(') => self.parse_sequence(')'),
            Some('\'') | Some('"') => self.parse_string().map(Value::String),
            Some(c) if c == '-' || c == '+' || c.is_ascii_digit() => self.parse_number(),
            Some(_) => self.parse_bareword(),
            None => Err(self.error("unexpected end of input")),
        }
    }

    fn parse_dict(&mut self) -> Result<Value, LiteralError> {
        self.bump();
        let mut map = Map::new();
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some('}') => {
                    self.bump();
                    break;
                }
                None => return Err(self.error("unterminated dict")),
                _ => {}
            }
            let key = self.parse_key()?;
            self.skip_whitespace();
            if self.bump() != Some(':') {
                return Err(self.error("expected ':' after dict key"));
            }
            self.skip_whitespace();
            let value = self.parse_value()?;
            map.insert(key, value);
            self.skip_whitespace();
            match self.peek() {
                Some(',') => {
                    self.bump();
                }
                Some('}') => {
                    self.bump();
                    break;
                }
                _ => return Err(self.error("expected ',' or '}' in dict")),
            }
        }
        Ok(Value::Object(map))
    }

    fn parse_key(&mut self) -> Result<String, LiteralError> {
        let at = self.pos;
        match self.parse_value()? {
            Value::String(s) => Ok(s),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            Value::Null => Ok("null".to_string()),
            Value::Array(_) | Value::Object(_) => Err(LiteralError {
                offset: at,
                message: "unsupported dict key".to_string(),
            }),
        }
    }

    fn parse_sequence(&mut self, close: char) -> Result<Value, LiteralError> {
        self.bump();
        let mut items = Vec::new();
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some(c) if c == close => {
                    self.bump();
                    break;
                }
                None => return Err(self.error("unterminated sequence")),
                _ => {}
            }
            items.push(self.parse_value()?);
            self.skip_whitespace();
            match self.peek() {
                Some(',') => {
                    self.bump();
                }
                Some(c) if c == close => {
                    self.bump();
                    break;
                }
                _ => return Err(self.error("expected ',' or end of sequence")),
            }
        }
        Ok(Value::Array(items))
    }

    fn parse_string(&mut self) -> Result<String, LiteralError> {
        let quote = match self.bump() {
            Some(c) => c,
            None => return Err(self.error("unexpected end of input")),
        };
        let mut out = String::new();
        loop {
            match self.bump() {
                None => return Err(self.error("unterminated string")),
                Some(c) if c == quote => break,
                Some('\\') => match self.bump() {
                    None => return Err(self.error("unterminated escape")),
                    Some('n') => out.push('\n'),
                    Some('t') => out.push('\t'),
                    Some('r') => out.push('\r'),
                    Some('b') => out.push('\u{0008}'),
                    Some('f') => out.push('\u{000C}'),
                    Some('\\') => out.push('\\'),
                    Some('/') => out.push('/'),
                    Some('\'') => out.push('\''),
                    Some('"') => out.push('"'),
                    Some('u') => out.push(self.parse_unicode_escape()?),
                    // Python keeps unknown escapes verbatim.
                    Some(other) => {
                        out.push('\\');
                        out.push(other);
                    }
                },
                Some(c) => out.push(c),
            }
        }
        Ok(out)
    }

    fn parse_unicode_escape(&mut self) -> Result<char, LiteralError> {
        let mut code = 0u32;
        for _ in 0..4 {
            let digit = match self.bump().and_then(|c| c.to_digit(16)) {
                Some(d) => d,
                None => return Err(self.error("invalid \\u escape")),
            };
            code = code * 16 + digit;
        }
        match char::from_u32(code) {
            Some(c) => Ok(c),
            None => Err(self.error("invalid \\u escape")),
        }
    }

    fn parse_number(&mut self) -> Result<Value, LiteralError> {
        let start = self.pos;
        if matches!(self.peek(), Some('-') | Some('+')) {
            self.pos += 1;
        }
        let mut is_float = false;
        while let Some(c) = self.peek() {
            match c {
                '0'..='9' => self.pos += 1,
                '.' | 'e' | 'E' => {
                    is_float = true;
                    self.pos += 1;
                }
                '-' | '+' => {
                    let prev = self.chars.get(self.pos - 1).copied();
                    if matches!(prev, Some('e') | Some('E')) {
                        self.pos += 1;
                    } else {
                        break;
                    }
                }
                _ => break,
            }
        }
        let text: String = self.chars[start..self.pos].iter().collect();
        if !is_float {
            if let Ok(n) = text.parse::<i64>() {
                return Ok(Value::Number(n.into()));
            }
            if let Ok(n) = text.parse::<u64>() {
                return Ok(Value::Number(n.into()));
            }
        }
        match text.parse::<f64>() {
            Ok(f) => match Number::from_f64(f) {
                Some(n) => Ok(Value::Number(n)),
                None => Err(self.error("number out of range")),
            },
            Err(_) => Err(self.error("invalid number")),
        }
    }

    fn parse_bareword(&mut self) -> Result<Value, LiteralError> {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_alphanumeric() || c == '_') {
            self.pos += 1;
        }
        let word: String = self.chars[start..self.pos].iter().collect();
        match word.as_str() {
            "True" => Ok(Value::Bool(true)),
            "False" => Ok(Value::Bool(false)),
            "None" => Ok(Value::Null),
            _ => Err(LiteralError {
                offset: start,
                message: format!("unknown bareword '{word}'"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_quoted_dict() {
        let value = parse_literal("{'a': '1', 'b': 'x'}").unwrap();
        assert_eq!(value, json!({"a": "1", "b": "x"}));
    }

    #[test]
    fn test_python_barewords() {
        let value = parse_literal("{'ok': True, 'bad': False, 'missing': None}").unwrap();
        assert_eq!(value, json!({"ok": true, "bad": false, "missing": null}));
    }

    #[test]
    fn test_trailing_commas() {
        let value = parse_literal("{'a': [1, 2,], }").unwrap();
        assert_eq!(value, json!({"a": [1, 2]}));
    }

    #[test]
    fn test_tuple_becomes_array() {
        let value = parse_literal("('a', 'b')").unwrap();
        assert_eq!(value, json!(["a", "b"]));
    }

    #[test]
    fn test_numeric_key_is_coerced() {
        let value = parse_literal("{1: 'one'}").unwrap();
        assert_eq!(value, json!({"1": "one"}));
    }

    #[test]
    fn test_preserves_non_ascii_content() {
        let value = parse_literal("{'CompanyName': '統一超商'}").unwrap();
        assert_eq!(value, json!({"CompanyName": "統一超商"}));
    }

    #[test]
    fn test_escapes() {
        let value = parse_literal(r"'line\nbreak \'q\' é'").unwrap();
        assert_eq!(value, json!("line\nbreak 'q' é"));
    }

    #[test]
    fn test_trailing_garbage_is_an_error() {
        let err = parse_literal("{'a': 1} trailing").unwrap_err();
        assert!(err.message.contains("trailing"));
    }

    #[test]
    fn test_numbers() {
        assert_eq!(parse_literal("42").unwrap(), json!(42));
        assert_eq!(parse_literal("-7").unwrap(), json!(-7));
        assert_eq!(parse_literal("3.5").unwrap(), json!(3.5));
        assert!(parse_literal("--3").is_err());
    }

    #[test]
    fn test_unterminated_string() {
        assert!(parse_literal("'open").is_err());
    }
}
