//! Permissive parser for native literal syntax.
//!
//! Accepts the notation loosely generated data tends to use when it was
//! printed rather than serialized: single- or double-quoted strings with
//! optional `u`, `b` or `r` prefixes, implicit concatenation of adjacent
//! strings, `True`/`False`/`None`, tuples, sets and trailing commas. Tuples and
//! sets are represented as arrays. Integer keys become their decimal text.
//! Integers keep their exact digits whatever their magnitude.

use serde_json::{Number, Value};

use super::Mapping;
use crate::error::ParseError;

/// Parses `text` as a literal and requires a mapping at the top level.
pub fn parse_mapping(text: &str) -> Result<Mapping, ParseError> {
    match parse(text)? {
        Value::Object(map) => Ok(map),
        other => Err(ParseError::NotAMapping {
            found: value_kind(&other),
        }),
    }
}

/// Parses `text` as a single literal value surrounded by optional whitespace.
pub fn parse(text: &str) -> Result<Value, ParseError> {
    let mut parser = Parser { text, pos: 0 };
    parser.skip_whitespace();
    let value = parser.value()?;
    parser.skip_whitespace();
    if parser.pos < text.len() {
        return Err(parser.error("unexpected trailing characters"));
    }
    Ok(value)
}

pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}

struct Parser<'a> {
    text: &'a str,
    pos: usize,
}

impl Parser<'_> {
    fn error(&self, message: &str) -> ParseError {
        ParseError::literal(message, self.pos)
    }

    fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), ParseError> {
        if self.eat(expected) {
            Ok(())
        } else {
            Err(self.error(&format!("expected '{expected}'")))
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn value(&mut self) -> Result<Value, ParseError> {
        match self.peek() {
            Some('{') => self.brace(),
            Some('[') => {
                self.bump();
                self.sequence(']').map(Value::Array)
            }
            Some('(') => self.paren(),
            Some('\'' | '"') => self.strings().map(Value::String),
            Some(ch) if ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.') => self.number(),
            Some(ch) if ch.is_alphabetic() || ch == '_' => {
                if self.string_prefix().is_some() {
                    self.strings().map(Value::String)
                } else {
                    self.name()
                }
            }
            Some(_) => Err(self.error("unexpected character")),
            None => Err(self.error("unexpected end of input")),
        }
    }

    /// Comma-separated values up to `close`, which is consumed.
    fn sequence(&mut self, close: char) -> Result<Vec<Value>, ParseError> {
        let mut items = Vec::new();
        loop {
            self.skip_whitespace();
            if self.eat(close) {
                return Ok(items);
            }
            items.push(self.value()?);
            self.skip_whitespace();
            if !self.eat(',') {
                self.skip_whitespace();
                self.expect(close)?;
                return Ok(items);
            }
        }
    }

    /// A dict, or a set when the first element is not followed by `:`.
    fn brace(&mut self) -> Result<Value, ParseError> {
        self.expect('{')?;
        self.skip_whitespace();
        if self.eat('}') {
            return Ok(Value::Object(Mapping::new()));
        }

        let first = self.value()?;
        self.skip_whitespace();
        if !self.eat(':') {
            let mut items = vec![first];
            if self.eat(',') {
                items.extend(self.sequence('}')?);
            } else {
                self.expect('}')?;
            }
            return Ok(Value::Array(items));
        }

        let mut map = Mapping::new();
        let mut key = first;
        loop {
            let key_text = self.key_text(key)?;
            self.skip_whitespace();
            let value = self.value()?;
            map.insert(key_text, value);
            self.skip_whitespace();
            if !self.eat(',') {
                self.expect('}')?;
                return Ok(Value::Object(map));
            }
            self.skip_whitespace();
            if self.eat('}') {
                return Ok(Value::Object(map));
            }
            key = self.value()?;
            self.skip_whitespace();
            self.expect(':')?;
        }
    }

    fn key_text(&self, key: Value) -> Result<String, ParseError> {
        match key {
            Value::String(s) => Ok(s),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(true) => Ok("true".to_string()),
            Value::Bool(false) => Ok("false".to_string()),
            Value::Null => Ok("null".to_string()),
            Value::Array(_) | Value::Object(_) => Err(self.error("unsupported mapping key")),
        }
    }

    /// A tuple, or a parenthesized expression without a trailing comma.
    fn paren(&mut self) -> Result<Value, ParseError> {
        self.expect('(')?;
        self.skip_whitespace();
        if self.eat(')') {
            return Ok(Value::Array(Vec::new()));
        }
        let first = self.value()?;
        self.skip_whitespace();
        if self.eat(')') {
            return Ok(first);
        }
        self.expect(',')?;
        let mut items = vec![first];
        items.extend(self.sequence(')')?);
        Ok(Value::Array(items))
    }

    /// One or more adjacent string literals, concatenated.
    fn strings(&mut self) -> Result<String, ParseError> {
        let mut out = self.string()?;
        loop {
            let checkpoint = self.pos;
            self.skip_whitespace();
            if self.string_prefix().is_some() {
                out.push_str(&self.string()?);
            } else {
                self.pos = checkpoint;
                return Ok(out);
            }
        }
    }

    /// Length of the string prefix at the cursor, and whether it marks a raw
    /// string. `None` unless the cursor is at a string literal.
    fn string_prefix(&self) -> Option<(usize, bool)> {
        let rest = &self.text[self.pos..];
        let (len, _) = rest
            .char_indices()
            .take(3)
            .find(|&(_, ch)| matches!(ch, '\'' | '"'))?;
        let raw = match rest[..len].to_ascii_lowercase().as_str() {
            "" | "u" | "b" => false,
            "r" | "br" | "rb" => true,
            _ => return None,
        };
        Some((len, raw))
    }

    fn string(&mut self) -> Result<String, ParseError> {
        let start = self.pos;
        let (prefix, raw) = self
            .string_prefix()
            .ok_or_else(|| self.error("expected string"))?;
        self.pos += prefix;
        let quote = self.bump().ok_or_else(|| self.error("expected string"))?;
        let unterminated = || ParseError::literal("unterminated string literal", start);
        let mut out = String::new();
        loop {
            match self.bump() {
                None | Some('\n') => return Err(unterminated()),
                Some(ch) if ch == quote => return Ok(out),
                // Raw strings keep the backslash and the character it protects.
                Some('\\') if raw => {
                    out.push('\\');
                    out.push(self.bump().ok_or_else(unterminated)?);
                }
                Some('\\') => self.escape(&mut out)?,
                Some(ch) => out.push(ch),
            }
        }
    }

    fn escape(&mut self, out: &mut String) -> Result<(), ParseError> {
        match self.bump() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            Some('\\') => out.push('\\'),
            Some('\'') => out.push('\''),
            Some('"') => out.push('"'),
            Some('\n') => {}
            Some('x') => out.push(self.code_point(2)?),
            Some('u') => out.push(self.code_point(4)?),
            Some('U') => out.push(self.code_point(8)?),
            // Unknown escapes are kept verbatim.
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => return Err(self.error("unterminated string literal")),
        }
        Ok(())
    }

    fn code_point(&mut self, digits: usize) -> Result<char, ParseError> {
        let end = self.pos + digits;
        let hex = self
            .text
            .get(self.pos..end)
            .ok_or_else(|| self.error("truncated escape sequence"))?;
        let code =
            u32::from_str_radix(hex, 16).map_err(|_| self.error("invalid escape sequence"))?;
        let ch = char::from_u32(code).ok_or_else(|| self.error("invalid code point"))?;
        self.pos = end;
        Ok(ch)
    }

    fn number(&mut self) -> Result<Value, ParseError> {
        let start = self.pos;
        if matches!(self.peek(), Some('-' | '+')) {
            self.bump();
        }
        let mut is_float = false;
        while let Some(ch) = self.peek() {
            match ch {
                '0'..='9' | '_' => {}
                '.' => is_float = true,
                'e' | 'E' => {
                    is_float = true;
                    self.bump();
                    if matches!(self.peek(), Some('-' | '+')) {
                        self.bump();
                    }
                    continue;
                }
                _ => break,
            }
            self.bump();
        }

        let literal: String = self.text[start..self.pos]
            .chars()
            .filter(|&ch| ch != '_')
            .collect();
        let literal = literal.strip_prefix('+').unwrap_or(&literal);
        let invalid = || ParseError::literal("invalid numeric literal", start);

        if !is_float {
            return literal
                .parse::<Number>()
                .map(Value::Number)
                .map_err(|_| invalid());
        }
        literal
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .ok_or_else(invalid)
    }

    fn name(&mut self) -> Result<Value, ParseError> {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|ch| ch.is_alphanumeric() || ch == '_')
        {
            self.bump();
        }
        match &self.text[start..self.pos] {
            "True" => Ok(Value::Bool(true)),
            "False" => Ok(Value::Bool(false)),
            "None" => Ok(Value::Null),
            _ => Err(ParseError::literal("names are not literals", start)),
        }
    }
}
