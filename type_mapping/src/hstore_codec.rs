//! Hstore text codec
//!
//! Encodes and decodes the text form PostgreSQL uses for `hstore` in
//! `hstore_in`/`hstore_out`, e.g. `"a"=>"1", "b"=>NULL`. The binary form is
//! handled by `sqlx::postgres::types::PgHstore`, see the driver bindings.
//!
//! The encoder emits pairs sorted by key.

use crate::errors::TypeError;

const TARGET: &str = "Hstore";

/// A decoded hstore entry
pub type HstorePair = (String, Option<String>);

fn sorted<'a, I>(pairs: I) -> Vec<(&'a str, Option<&'a str>)>
where
    I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
{
    let mut pairs: Vec<_> = pairs.into_iter().collect();
    pairs.sort_by(|a, b| a.0.cmp(b.0));
    pairs
}

fn push_quoted(out: &mut String, s: &str) {
    out.push('"');
    for c in s.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
}

/// Encode pairs into the hstore text form
pub fn encode_text<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
{
    let mut out = String::new();

    for (i, (key, value)) in sorted(pairs).into_iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        push_quoted(&mut out, key);
        out.push_str("=>");
        match value {
            Some(value) => push_quoted(&mut out, value),
            None => out.push_str("NULL"),
        }
    }

    out
}

struct Token {
    text: String,
    quoted: bool,
}

struct TextParser {
    chars: Vec<char>,
    pos: usize,
}

impl TextParser {
    fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn at_arrow(&self) -> bool {
        self.peek() == Some('=') && self.chars.get(self.pos + 1) == Some(&'>')
    }

    fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.pos += 1;
        }
    }

    fn error(&self, message: &str) -> TypeError {
        TypeError::decode(TARGET, format!("{} at position {}", message, self.pos))
    }

    fn expect_arrow(&mut self) -> Result<(), TypeError> {
        if !self.at_arrow() {
            return Err(self.error("expected \"=>\""));
        }
        self.pos += 2;
        Ok(())
    }

    fn token(&mut self) -> Result<Token, TypeError> {
        match self.peek() {
            Some('"') => self.quoted_token(),
            Some(_) => self.bare_token(),
            None => Err(self.error("unexpected end of input")),
        }
    }

    fn quoted_token(&mut self) -> Result<Token, TypeError> {
        // opening quote
        self.pos += 1;
        let mut text = String::new();

        loop {
            match self.peek() {
                Some('"') => {
                    self.pos += 1;
                    return Ok(Token { text, quoted: true });
                }
                Some('\\') => {
                    self.pos += 1;
                    let escaped = self.peek().ok_or_else(|| self.error("dangling escape"))?;
                    text.push(escaped);
                    self.pos += 1;
                }
                Some(c) => {
                    text.push(c);
                    self.pos += 1;
                }
                None => return Err(self.error("unterminated quoted string")),
            }
        }
    }

    fn bare_token(&mut self) -> Result<Token, TypeError> {
        let mut text = String::new();

        while let Some(c) = self.peek() {
            if c.is_whitespace() || c == ',' || c == '"' || self.at_arrow() {
                break;
            }
            if c == '\\' {
                self.pos += 1;
                let escaped = self.peek().ok_or_else(|| self.error("dangling escape"))?;
                text.push(escaped);
            } else {
                text.push(c);
            }
            self.pos += 1;
        }

        if text.is_empty() {
            return Err(self.error("expected key or value"));
        }
        Ok(Token {
            text,
            quoted: false,
        })
    }
}

/// Decode the hstore text form
///
/// Bare `NULL` (any case) in value position is a null value; `"NULL"` is the
/// four-letter string. In key position `NULL` is always a plain string. An empty or all-whitespace input yields no pairs.
pub fn decode_text(input: &str) -> Result<Vec<HstorePair>, TypeError> {
    let mut parser = TextParser::new(input);
    let mut pairs = Vec::new();

    parser.skip_whitespace();
    if parser.at_end() {
        return Ok(pairs);
    }

    loop {
        let key = parser.token()?;
        parser.skip_whitespace();
        parser.expect_arrow()?;
        parser.skip_whitespace();

        let value = parser.token()?;
        let value = if !value.quoted && value.text.eq_ignore_ascii_case("NULL") {
            None
        } else {
            Some(value.text)
        };
        pairs.push((key.text, value));

        parser.skip_whitespace();
        match parser.peek() {
            None => break,
            Some(',') => {
                parser.pos += 1;
                parser.skip_whitespace();
            }
            Some(_) => return Err(parser.error("expected \",\"")),
        }
    }

    Ok(pairs)
}
