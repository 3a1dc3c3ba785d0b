use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Called with the text a pattern matched at the cursor. Returns `None`
/// when the match produces no token (whitespace).
pub type RegexHandler = fn(&mut Lexer, &str) -> Result<Option<Token>, Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

fn pattern(regex: &str, handler: RegexHandler) -> RegexPattern {
    RegexPattern {
        regex: Regex::new(regex).unwrap(),
        handler,
    }
}

lazy_static! {
    // Every pattern is anchored, so a match always starts at the cursor.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        pattern(r"^\s+", skip_handler),
        pattern(r#"^"[^"]*""#, string_handler),
        pattern(r#"^""#, unterminated_string_handler),
        pattern(r"^[0-9]+", number_handler),
        pattern(r"^[a-zA-Z][a-zA-Z0-9_]*", symbol_handler),
        pattern(r"^=", MK_DEFAULT_HANDLER!(TokenKind::Assign, "=")),
        pattern(r"^\(", MK_DEFAULT_HANDLER!(TokenKind::LParen, "(")),
        pattern(r"^\)", MK_DEFAULT_HANDLER!(TokenKind::RParen, ")")),
        pattern(r"^;", MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";")),
    ];
}

/// Pull-based tokenizer over a single source text.
///
/// The cursor only moves forward. Once the input is exhausted every call to
/// `next_token` returns an `EOF` token.
#[derive(Clone, Debug)]
pub struct Lexer {
    source: String,
    pos: usize,
    line: u32,
    column: u32,
    finished: bool,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer {
            source: String::from(source),
            pos: 0,
            line: 1,
            column: 1,
            finished: false,
        }
    }

    /// Moves the cursor past `text`, which must be the text at the cursor.
    pub fn advance_n(&mut self, text: &str) {
        for c in text.chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.pos += text.len();
    }

    pub fn current_position(&self) -> Position {
        Position::new(self.pos as u32, self.line, self.column)
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Scans and returns the next token.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        'scan: while !self.at_eof() {
            for pattern in PATTERNS.iter() {
                let Some(found) = pattern.regex.find(self.remainder()) else {
                    continue;
                };
                let matched = found.as_str().to_string();

                match (pattern.handler)(self, &matched)? {
                    Some(token) => {
                        trace!(kind = %token.kind, value = %token.value, at = %token.span.start, "token");
                        return Ok(token);
                    }
                    None => continue 'scan,
                }
            }

            return Err(Error::new(
                ErrorImpl::InvalidCharacter {
                    character: self.at().unwrap_or_default(),
                },
                self.current_position(),
            ));
        }

        Ok(MK_TOKEN!(
            TokenKind::EOF,
            String::from("EOF"),
            Span {
                start: self.current_position(),
                end: self.current_position()
            }
        ))
    }
}

/// Yields every token up to and including the first `EOF`, or stops after
/// the first error.
impl Iterator for Lexer {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let result = self.next_token();
        match &result {
            Ok(token) if token.kind == TokenKind::EOF => self.finished = true,
            Err(_) => self.finished = true,
            Ok(_) => {}
        }

        Some(result)
    }
}

fn skip_handler(lexer: &mut Lexer, matched: &str) -> Result<Option<Token>, Error> {
    lexer.advance_n(matched);
    Ok(None)
}

fn number_handler(lexer: &mut Lexer, matched: &str) -> Result<Option<Token>, Error> {
    let start = lexer.current_position();
    let value: i64 = matched.parse().map_err(|_| {
        Error::new(
            ErrorImpl::NumberParseError {
                token: String::from(matched),
            },
            start,
        )
    })?;

    lexer.advance_n(matched);

    Ok(Some(MK_TOKEN!(
        TokenKind::Number,
        value.to_string(),
        Span {
            start,
            end: lexer.current_position()
        }
    )))
}

fn string_handler(lexer: &mut Lexer, matched: &str) -> Result<Option<Token>, Error> {
    let start = lexer.current_position();
    let string_literal = String::from(&matched[1..matched.len() - 1]);

    lexer.advance_n(matched);

    Ok(Some(MK_TOKEN!(
        TokenKind::String,
        string_literal,
        Span {
            start,
            end: lexer.current_position()
        }
    )))
}

fn unterminated_string_handler(lexer: &mut Lexer, _matched: &str) -> Result<Option<Token>, Error> {
    Err(Error::new(ErrorImpl::UnterminatedString, lexer.current_position()))
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) -> Result<Option<Token>, Error> {
    let start = lexer.current_position();
    let kind = RESERVED_LOOKUP
        .get(matched)
        .copied()
        .unwrap_or(TokenKind::Identifier);

    lexer.advance_n(matched);

    Ok(Some(MK_TOKEN!(
        kind,
        String::from(matched),
        Span {
            start,
            end: lexer.current_position()
        }
    )))
}

/// Tokenizes the whole source, including the trailing `EOF` token.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let tokens = Lexer::new(source).collect::<Result<Vec<Token>, Error>>()?;
    debug!(count = tokens.len(), "tokenized source");

    Ok(tokens)
}
